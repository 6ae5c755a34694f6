use crate::domain::ports::OutputSink;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedLine {
    pub at: Instant,
    pub line: String,
}

/// In-memory sink that timestamps every line it receives.
///
/// Timestamps come from `tokio::time::Instant`, so they follow the paused
/// clock in tests started with `start_paused = true`.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    lines: Arc<Mutex<Vec<RecordedLine>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<RecordedLine> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn texts(&self) -> Vec<String> {
        self.lines().into_iter().map(|l| l.line).collect()
    }

    /// First time `line` was recorded, if ever.
    pub fn time_of(&self, line: &str) -> Option<Instant> {
        self.lines().into_iter().find(|l| l.line == line).map(|l| l.at)
    }

    pub fn count_of(&self, line: &str) -> usize {
        self.lines().iter().filter(|l| l.line == line).count()
    }
}

#[async_trait]
impl OutputSink for RecordingSink {
    async fn emit(&self, line: &str) -> Result<()> {
        let entry = RecordedLine {
            at: Instant::now(),
            line: line.to_string(),
        };
        match self.lines.lock() {
            Ok(mut lines) => lines.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
        Ok(())
    }
}
