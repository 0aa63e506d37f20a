//! Resource catalog and reading

mod catalog;
mod reader;

pub use catalog::catalog;
pub use reader::ResourceReader;
