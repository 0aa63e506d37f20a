//! Tool catalog and execution

mod calculator;
mod catalog;
mod executor;

pub use calculator::{evaluate, CalcError};
pub use catalog::catalog;
pub use executor::ToolExecutor;
