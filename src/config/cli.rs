use crate::config::{RunSettings, TomlConfig};
use crate::domain::model::LaunchMode;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "concurrent-units")]
#[command(about = "Runs two delayed units of work concurrently")]
pub struct CliConfig {
    /// Wait for both units (join) or return right after launching them (detach)
    #[arg(long, value_enum)]
    pub mode: Option<LaunchMode>,

    /// Wall-clock length of one time-unit, in milliseconds
    #[arg(long)]
    pub time_unit_ms: Option<u64>,

    /// Optional TOML file with a [launch] table
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Merges the config file (if any) with flags; flags win.
    pub fn resolve(&self) -> Result<RunSettings> {
        let base = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.settings(),
            None => RunSettings::default(),
        };

        let settings = RunSettings {
            mode: self.mode.unwrap_or(base.mode),
            time_unit_ms: self.time_unit_ms.unwrap_or(base.time_unit_ms),
        };
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_flags_gives_defaults() {
        let cli = CliConfig::parse_from(["concurrent-units"]);
        assert_eq!(cli.resolve().unwrap(), RunSettings::default());
        assert_eq!(cli.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[launch]\nmode = \"detach\"\ntime_unit_ms = 500").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "concurrent-units",
            "--config",
            path.as_str(),
            "--time-unit-ms",
            "20",
        ]);
        let settings = cli.resolve().unwrap();
        assert_eq!(settings.mode, LaunchMode::Detach);
        assert_eq!(settings.time_unit_ms, 20);
    }

    #[test]
    fn test_out_of_range_time_unit_is_rejected() {
        let cli = CliConfig::parse_from(["concurrent-units", "--time-unit-ms", "0"]);
        assert!(cli.resolve().is_err());
    }

    #[test]
    fn test_mode_flag() {
        let cli = CliConfig::parse_from(["concurrent-units", "--mode", "detach"]);
        assert_eq!(cli.resolve().unwrap().mode, LaunchMode::Detach);
    }
}
