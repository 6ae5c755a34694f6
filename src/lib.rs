pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{RecordingSink, StdoutSink};
pub use config::{RunSettings, TomlConfig};
pub use core::launcher::{LaunchHandles, Launcher};
pub use domain::model::{LaunchMode, Marker, TimeUnit, UnitReport, UnitSpec};
pub use domain::ports::OutputSink;
pub use utils::error::{Result, UnitsError};
