use anyhow::Result;
use concurrent_units::{LaunchMode, Launcher, RecordingSink, TimeUnit, UnitSpec};
use std::time::Duration;
use tokio::time::Instant;
use tokio_test::assert_ok;

const UNIT: Duration = Duration::from_secs(1);

fn units(n: f64) -> Duration {
    UNIT.mul_f64(n)
}

#[tokio::test(start_paused = true)]
async fn test_each_unit_completes_after_its_start() -> Result<()> {
    let sink = RecordingSink::new();
    Launcher::new(sink.clone()).run(LaunchMode::Join).await?;

    for spec in UnitSpec::defaults() {
        let start = sink.time_of(spec.start_label).expect("start marker");
        let done = sink.time_of(spec.done_label).expect("done marker");
        assert!(done > start, "{} finished before it started", spec.name);

        let texts = sink.texts();
        let start_idx = texts.iter().position(|l| l == spec.start_label).unwrap();
        let done_idx = texts.iter().position(|l| l == spec.done_label).unwrap();
        assert!(start_idx < done_idx);
    }
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_elapsed_matches_configured_delay() -> Result<()> {
    let sink = RecordingSink::new();
    let reports = Launcher::new(sink.clone()).run(LaunchMode::Join).await?;

    for report in &reports {
        assert!(report.elapsed >= report.delay);
        assert!(report.elapsed < report.delay + units(0.5));
    }

    let this = sink.time_of("Did this!").unwrap() - sink.time_of("Starting this...").unwrap();
    let that = sink.time_of("Did that!").unwrap() - sink.time_of("Starting that...").unwrap();
    assert_eq!(this, units(2.0));
    assert_eq!(that, units(3.0));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_every_marker_appears_exactly_once() -> Result<()> {
    let sink = RecordingSink::new();
    Launcher::new(sink.clone()).run(LaunchMode::Join).await?;

    for line in ["Starting this...", "Did this!", "Starting that...", "Did that!"] {
        assert_eq!(sink.count_of(line), 1, "{line}");
    }
    assert_eq!(sink.lines().len(), 4);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_markers_land_inside_tolerance_windows() -> Result<()> {
    let sink = RecordingSink::new();
    let launched_at = Instant::now();
    assert_ok!(Launcher::new(sink.clone()).run(LaunchMode::Join).await);

    let by = |line: &str| sink.time_of(line).unwrap() - launched_at;
    assert!(by("Starting this...") <= units(2.5));
    assert!(by("Starting that...") <= units(2.5));
    assert!(by("Did this!") <= units(2.5));
    assert!(by("Did that!") <= units(3.5));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_units_overlap_in_time() -> Result<()> {
    let sink = RecordingSink::new();
    let launched_at = Instant::now();
    Launcher::new(sink.clone()).run(LaunchMode::Join).await?;

    // Sequential execution would need five units.
    assert_eq!(launched_at.elapsed(), units(3.0));
    assert!(sink.time_of("Starting that...").unwrap() < sink.time_of("Did this!").unwrap());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_scaled_time_unit() -> Result<()> {
    let sink = RecordingSink::new();
    let reports = Launcher::new(sink.clone())
        .with_time_unit(TimeUnit::from_millis(100))
        .run(LaunchMode::Join)
        .await?;

    assert_eq!(reports[0].elapsed, Duration::from_millis(200));
    assert_eq!(reports[1].elapsed, Duration::from_millis(300));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_join_on_multi_thread_runtime() -> Result<()> {
    let sink = RecordingSink::new();
    let started = std::time::Instant::now();
    let reports = Launcher::new(sink.clone())
        .with_time_unit(TimeUnit::from_millis(20))
        .run(LaunchMode::Join)
        .await?;

    assert_eq!(reports.len(), 2);
    assert!(started.elapsed() >= Duration::from_millis(60));
    assert_eq!(sink.lines().len(), 4);
    Ok(())
}
