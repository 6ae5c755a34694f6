use crate::utils::error::Result;
use async_trait::async_trait;

/// Destination for unit marker lines.
///
/// Implementations must write a whole line atomically so that lines from
/// concurrently running units never interleave mid-line.
#[async_trait]
pub trait OutputSink: Send + Sync {
    async fn emit(&self, line: &str) -> Result<()>;
}
