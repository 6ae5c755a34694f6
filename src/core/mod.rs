pub mod launcher;
pub mod unit;

pub use crate::domain::model::{LaunchMode, Marker, TimeUnit, UnitReport, UnitSpec};
pub use crate::domain::ports::OutputSink;
pub use crate::utils::error::Result;
