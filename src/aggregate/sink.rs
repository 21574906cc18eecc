//! Progress reporting and stall handling seams.

use async_trait::async_trait;

/// Receives human-readable status updates during a run.
pub trait StatusSink: Send + Sync {
    fn status(&self, message: &str, is_error: bool);
}

/// Sink that discards all updates.
pub struct NullStatusSink;

impl StatusSink for NullStatusSink {
    fn status(&self, _message: &str, _is_error: bool) {}
}

/// Decides whether a stalled run should keep going.
#[async_trait]
pub trait StallHandler: Send + Sync {
    async fn continue_after_stall(&self) -> bool;
}

/// Stall handler with a fixed answer, for unattended runs.
pub struct AutoStall(pub bool);

#[async_trait]
impl StallHandler for AutoStall {
    async fn continue_after_stall(&self) -> bool {
        self.0
    }
}
