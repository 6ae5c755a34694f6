use crate::utils::error::{Result, UnitsError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delay of the "this" unit, in time-units.
pub const THIS_DELAY_UNITS: u32 = 2;
/// Delay of the "that" unit, in time-units.
pub const THAT_DELAY_UNITS: u32 = 3;
/// Default wall-clock length of one time-unit.
pub const DEFAULT_TIME_UNIT_MS: u64 = 1000;

/// A start/delay/complete procedure, fixed at authoring time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitSpec {
    pub name: &'static str,
    pub start_label: &'static str,
    pub done_label: &'static str,
    pub delay_units: u32,
}

impl UnitSpec {
    pub const fn this() -> Self {
        Self {
            name: "this",
            start_label: "Starting this...",
            done_label: "Did this!",
            delay_units: THIS_DELAY_UNITS,
        }
    }

    pub const fn that() -> Self {
        Self {
            name: "that",
            start_label: "Starting that...",
            done_label: "Did that!",
            delay_units: THAT_DELAY_UNITS,
        }
    }

    /// Both units, in launch order.
    pub fn defaults() -> Vec<Self> {
        vec![Self::this(), Self::that()]
    }

    pub fn label(&self, marker: Marker) -> &'static str {
        match marker {
            Marker::Start => self.start_label,
            Marker::Done => self.done_label,
        }
    }

    /// Wall-clock delay; fails when `delay_units × time_unit` overflows a `Duration`.
    pub fn delay(&self, time_unit: TimeUnit) -> Result<Duration> {
        time_unit
            .0
            .checked_mul(self.delay_units)
            .ok_or_else(|| UnitsError::InvalidConfigValueError {
                field: "time_unit".to_string(),
                value: format!("{:?}", time_unit.0),
                reason: format!("{} time-units of this length overflow", self.delay_units),
            })
    }
}

impl Validate for UnitSpec {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("unit.name", self.name)?;
        validate_non_empty_string("unit.start_label", self.start_label)?;
        validate_non_empty_string("unit.done_label", self.done_label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Start,
    Done,
}

/// Wall-clock length of one time-unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeUnit(pub Duration);

impl TimeUnit {
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }
}

impl Default for TimeUnit {
    fn default() -> Self {
        Self::from_millis(DEFAULT_TIME_UNIT_MS)
    }
}

/// Whether the launcher waits for its units before returning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LaunchMode {
    /// Await every unit, then report.
    #[default]
    Join,
    /// Start both units and return at once.
    Detach,
}

/// Outcome of one joined unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitReport {
    pub name: &'static str,
    pub delay: Duration,
    pub elapsed: Duration,
}
