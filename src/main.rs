use clap::Parser;
use concurrent_units::utils::logger;
use concurrent_units::{CliConfig, LaunchMode, Launcher, StdoutSink, UnitsError};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose, config.log_format);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config).await {
        tracing::error!(
            "❌ Run failed: {} (Severity: {:?})",
            e,
            e.severity()
        );
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(config: &CliConfig) -> Result<(), UnitsError> {
    let settings = config.resolve()?;
    tracing::info!(
        mode = ?settings.mode,
        time_unit_ms = settings.time_unit_ms,
        "starting units"
    );

    let launcher = Launcher::new(StdoutSink::new()).with_time_unit(settings.time_unit());
    let reports = launcher.run(settings.mode).await?;

    match settings.mode {
        LaunchMode::Join => {
            for report in &reports {
                tracing::info!(
                    unit = report.name,
                    delay = ?report.delay,
                    elapsed = ?report.elapsed,
                    "✅ unit finished"
                );
            }
        }
        // Returning here drops the runtime, which cancels units still sleeping.
        LaunchMode::Detach => tracing::info!("exiting without waiting for units"),
    }

    Ok(())
}
