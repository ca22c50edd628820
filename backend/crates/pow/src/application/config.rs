//! Application Configuration
//!
//! Configuration for the PoW application layer.

/// PoW search configuration
#[derive(Debug, Clone)]
pub struct PowConfig {
    /// Emit a debug progress event every this many attempts (0 disables)
    pub progress_interval: u64,
}

impl Default for PowConfig {
    fn default() -> Self {
        Self {
            progress_interval: 250_000,
        }
    }
}

impl PowConfig {
    /// Config with progress events turned off
    pub fn quiet() -> Self {
        Self {
            progress_interval: 0,
        }
    }

    pub fn with_progress_interval(mut self, progress_interval: u64) -> Self {
        self.progress_interval = progress_interval;
        self
    }

    pub(crate) fn should_report(&self, attempts: u64) -> bool {
        self.progress_interval != 0 && attempts % self.progress_interval == 0
    }
}
