#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::{LaunchMode, TimeUnit, DEFAULT_TIME_UNIT_MS};
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

pub const MIN_TIME_UNIT_MS: u64 = 1;
pub const MAX_TIME_UNIT_MS: u64 = 60_000;

/// Effective settings after merging the config file and command-line flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    pub mode: LaunchMode,
    pub time_unit_ms: u64,
}

impl RunSettings {
    pub fn time_unit(&self) -> TimeUnit {
        TimeUnit::from_millis(self.time_unit_ms)
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            mode: LaunchMode::default(),
            time_unit_ms: DEFAULT_TIME_UNIT_MS,
        }
    }
}

impl Validate for RunSettings {
    fn validate(&self) -> Result<()> {
        validate_range(
            "time_unit_ms",
            self.time_unit_ms,
            MIN_TIME_UNIT_MS,
            MAX_TIME_UNIT_MS,
        )
    }
}
