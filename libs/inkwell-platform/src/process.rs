//! Uptime and memory figures for the running process.

use std::fmt;
use std::time::Duration;

use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Time the platform has been running, broken into calendar-free components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Uptime(Duration);

impl Uptime {
    #[must_use]
    pub fn from_duration(duration: Duration) -> Self {
        Self(duration)
    }

    #[must_use]
    pub fn as_duration(&self) -> Duration {
        self.0
    }

    #[must_use]
    pub fn days(&self) -> u64 {
        self.0.as_secs() / SECS_PER_DAY
    }

    #[must_use]
    pub fn hours(&self) -> u64 {
        self.0.as_secs() % SECS_PER_DAY / SECS_PER_HOUR
    }

    #[must_use]
    pub fn minutes(&self) -> u64 {
        self.0.as_secs() % SECS_PER_HOUR / SECS_PER_MINUTE
    }

    #[must_use]
    pub fn seconds(&self) -> u64 {
        self.0.as_secs() % SECS_PER_MINUTE
    }
}

impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // whole seconds; sub-second noise is not useful here
        let whole = Duration::from_secs(self.0.as_secs());
        write!(f, "{}", humantime::format_duration(whole))
    }
}

/// Memory held by the current process, in KiB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryUsage {
    pub resident_kb: u64,
    pub virtual_kb: u64,
}

impl MemoryUsage {
    /// Sample the current process. `None` if the platform does not let us
    /// inspect it.
    #[must_use]
    pub fn current() -> Option<Self> {
        let pid = sysinfo::get_current_pid()
            .inspect_err(|e| tracing::debug!(error = %e, "current pid unavailable"))
            .ok()?;

        let mut system = System::new();
        system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );

        let process = system.process(pid)?;
        Some(Self {
            resident_kb: process.memory() / 1024,
            virtual_kb: process.virtual_memory() / 1024,
        })
    }
}
