use crate::core::{Marker, OutputSink, TimeUnit, UnitSpec};
use crate::utils::error::Result;
use std::time::Duration;
use tokio::time::Instant;

/// Runs one unit: start marker, suspend for its delay, completion marker.
///
/// Returns the time measured between the two markers.
pub async fn run_unit<S>(spec: &UnitSpec, time_unit: TimeUnit, sink: &S) -> Result<Duration>
where
    S: OutputSink + ?Sized,
{
    let delay = spec.delay(time_unit)?;

    sink.emit(spec.label(Marker::Start)).await?;
    let started = Instant::now();
    tracing::debug!(unit = spec.name, ?delay, "unit started");

    tokio::time::sleep(delay).await;

    sink.emit(spec.label(Marker::Done)).await?;
    let elapsed = started.elapsed();
    tracing::debug!(unit = spec.name, ?elapsed, "unit done");

    Ok(elapsed)
}
