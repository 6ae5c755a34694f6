use crate::core::unit::run_unit;
use crate::core::{LaunchMode, OutputSink, TimeUnit, UnitReport, UnitSpec};
use crate::utils::error::{Result, UnitsError};
use crate::utils::validation::Validate;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Starts every unit on its own tokio task.
pub struct Launcher<S> {
    units: Vec<UnitSpec>,
    time_unit: TimeUnit,
    sink: S,
}

impl<S> Launcher<S>
where
    S: OutputSink + Clone + 'static,
{
    /// Launcher for the two canonical units at the default time-unit.
    pub fn new(sink: S) -> Self {
        Self {
            units: UnitSpec::defaults(),
            time_unit: TimeUnit::default(),
            sink,
        }
    }

    pub fn with_time_unit(mut self, time_unit: TimeUnit) -> Self {
        self.time_unit = time_unit;
        self
    }

    pub fn with_units(mut self, units: Vec<UnitSpec>) -> Self {
        self.units = units;
        self
    }

    /// Spawns one task per unit and returns without waiting on any of them.
    pub fn launch(&self) -> Result<LaunchHandles> {
        let runtime = Handle::try_current().map_err(|e| UnitsError::ContextCreation {
            message: e.to_string(),
        })?;

        let mut delays = Vec::with_capacity(self.units.len());
        for spec in &self.units {
            spec.validate()?;
            delays.push(spec.delay(self.time_unit)?);
        }

        let mut handles = Vec::with_capacity(self.units.len());
        for (spec, delay) in self.units.iter().zip(delays) {
            let task_spec = spec.clone();
            let sink = self.sink.clone();
            let time_unit = self.time_unit;
            let handle = runtime.spawn(async move { run_unit(&task_spec, time_unit, &sink).await });

            tracing::debug!(unit = spec.name, "spawned unit task");
            handles.push(LaunchedUnit {
                delay,
                spec: spec.clone(),
                handle,
            });
        }

        tracing::info!(units = handles.len(), "launched units");
        Ok(LaunchHandles { handles })
    }

    /// Launches the units, then joins or detaches according to `mode`.
    ///
    /// A detached run returns an empty report.
    pub async fn run(&self, mode: LaunchMode) -> Result<Vec<UnitReport>> {
        let handles = self.launch()?;
        match mode {
            LaunchMode::Join => handles.join().await,
            LaunchMode::Detach => {
                handles.detach();
                Ok(Vec::new())
            }
        }
    }
}

struct LaunchedUnit {
    spec: UnitSpec,
    delay: Duration,
    handle: JoinHandle<Result<Duration>>,
}

/// One handle per launched unit.
pub struct LaunchHandles {
    handles: Vec<LaunchedUnit>,
}

impl LaunchHandles {
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Awaits every unit. All units are awaited even when one fails; the
    /// first failure in launch order is returned.
    pub async fn join(self) -> Result<Vec<UnitReport>> {
        let mut reports = Vec::with_capacity(self.handles.len());
        let mut first_error = None;

        for launched in self.handles {
            let outcome = match launched.handle.await {
                Ok(result) => result,
                Err(source) => Err(UnitsError::TaskJoin {
                    unit: launched.spec.name.to_string(),
                    source,
                }),
            };

            match outcome {
                Ok(elapsed) => reports.push(UnitReport {
                    name: launched.spec.name,
                    delay: launched.delay,
                    elapsed,
                }),
                Err(e) => {
                    tracing::error!(unit = launched.spec.name, error = %e, "unit failed");
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(reports),
        }
    }

    /// Drops the handles. The tasks keep running for as long as the runtime does.
    pub fn detach(self) {
        tracing::warn!(
            units = self.handles.len(),
            "detached units; they stop if the runtime shuts down first"
        );
    }
}
