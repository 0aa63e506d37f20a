//! Process introspection behind an injectable provider
//!
//! The resource reader and tool executor never touch the system clock or
//! process statistics directly; they go through [`ProcessProbe`] so tests
//! can pin every ambient value.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Snapshot of process memory consumption, in bytes.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryUsage {
    /// Resident set size
    pub rss: u64,
    /// Heap in use (resident minus shared pages on Linux)
    pub heap_used: u64,
}

/// Ambient process state consumed by handlers.
pub trait ProcessProbe: Send + Sync {
    /// Current UTC time
    fn now(&self) -> DateTime<Utc>;

    /// Seconds since the server started, fractional
    fn uptime(&self) -> f64;

    /// Current memory consumption
    fn memory_usage(&self) -> MemoryUsage;

    /// Platform identifier (e.g. "linux", "macos")
    fn platform(&self) -> &str;

    /// Runtime/toolchain version string
    fn runtime_version(&self) -> &str;
}

/// Real probe backed by the OS.
pub struct SystemProbe {
    started: Instant,
}

impl SystemProbe {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessProbe for SystemProbe {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn uptime(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    fn memory_usage(&self) -> MemoryUsage {
        read_memory_usage()
    }

    fn platform(&self) -> &str {
        std::env::consts::OS
    }

    fn runtime_version(&self) -> &str {
        concat!("rust-", env!("CARGO_PKG_RUST_VERSION"))
    }
}

/// Read memory statistics from /proc/self/statm.
///
/// Fields are page counts: size, resident, shared, text, lib, data, dirty.
#[cfg(target_os = "linux")]
fn read_memory_usage() -> MemoryUsage {
    let page_size = 4096u64;
    let statm = match std::fs::read_to_string("/proc/self/statm") {
        Ok(s) => s,
        Err(_) => return MemoryUsage::default(),
    };
    let mut fields = statm.split_whitespace().skip(1);
    let resident: u64 = fields
        .next()
        .and_then(|v| v.parse().ok())
        .unwrap_or_default();
    let shared: u64 = fields
        .next()
        .and_then(|v| v.parse().ok())
        .unwrap_or_default();
    MemoryUsage {
        rss: resident * page_size,
        heap_used: resident.saturating_sub(shared) * page_size,
    }
}

#[cfg(not(target_os = "linux"))]
fn read_memory_usage() -> MemoryUsage {
    MemoryUsage::default()
}

/// Deterministic probe for tests.
#[cfg(test)]
pub struct FixedProbe;

#[cfg(test)]
impl ProcessProbe for FixedProbe {
    fn now(&self) -> DateTime<Utc> {
        use chrono::TimeZone;
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn uptime(&self) -> f64 {
        42.5
    }

    fn memory_usage(&self) -> MemoryUsage {
        MemoryUsage {
            rss: 8 * 1024 * 1024,
            heap_used: 5 * 1024 * 1024,
        }
    }

    fn platform(&self) -> &str {
        "test-os"
    }

    fn runtime_version(&self) -> &str {
        "rust-test"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_probe_uptime_advances() {
        let probe = SystemProbe::new();
        let first = probe.uptime();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(probe.uptime() > first);
    }

    #[test]
    fn test_system_probe_platform_nonempty() {
        let probe = SystemProbe::new();
        assert!(!probe.platform().is_empty());
        assert!(probe.runtime_version().starts_with("rust-"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_memory_usage_reports_resident_pages() {
        let usage = read_memory_usage();
        assert!(usage.rss > 0);
        assert!(usage.heap_used <= usage.rss);
    }
}
