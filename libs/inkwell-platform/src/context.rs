use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use arc_swap::ArcSwap;

use crate::build_info::BuildInfo;
use crate::config::PlatformConfig;
use crate::process::{MemoryUsage, Uptime};

/// `PlatformContext` carries process-level facts about the running platform.
///
/// Created once at startup and shared through `Arc`. It never participates in
/// authorization decisions; those live on the caller's own
/// `AuthenticationContext`.
#[derive(Debug)]
pub struct PlatformContext {
    started_at: Instant,
    build: BuildInfo,
    configuration: ArcSwap<PlatformConfig>,
}

impl PlatformContext {
    /// Record the start time and read build metadata named by `config`.
    ///
    /// Never fails: unreadable metadata is reported as unknown.
    #[must_use]
    pub fn new(config: PlatformConfig) -> Self {
        let build = BuildInfo::load(&config.build_properties);
        tracing::info!(
            version = build.version().unwrap_or("unknown"),
            date = build.date().unwrap_or("unknown"),
            "platform context initialised"
        );

        Self {
            started_at: Instant::now(),
            build,
            configuration: ArcSwap::from_pointee(config),
        }
    }

    #[must_use]
    pub fn build_info(&self) -> &BuildInfo {
        &self.build
    }

    #[must_use]
    pub fn build_version(&self) -> Option<&str> {
        self.build.version()
    }

    #[must_use]
    pub fn build_date(&self) -> Option<&str> {
        self.build.date()
    }

    #[must_use]
    pub fn uptime(&self) -> Uptime {
        Uptime::from_duration(self.started_at.elapsed())
    }

    #[must_use]
    pub fn memory_usage(&self) -> Option<MemoryUsage> {
        MemoryUsage::current()
    }

    /// Snapshot of the active configuration.
    #[must_use]
    pub fn configuration(&self) -> Arc<PlatformConfig> {
        self.configuration.load_full()
    }

    /// Swap in a new configuration. Readers holding a previous snapshot keep it.
    pub fn set_configuration(&self, config: PlatformConfig) {
        self.configuration.store(Arc::new(config));
        tracing::info!("platform configuration replaced");
    }

    #[must_use]
    pub fn web_application_root(&self) -> Option<PathBuf> {
        self.configuration.load().web_application_root.clone()
    }
}
