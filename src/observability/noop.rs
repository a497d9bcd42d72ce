//! Zero-overhead observer that discards everything.

use crate::observability::traits::{Observer, PipelineEvent};

/// Observer that does nothing.
pub struct NoopObserver;

impl Observer for NoopObserver {
    #[inline(always)]
    fn record_event(&self, _event: &PipelineEvent) {}

    fn name(&self) -> &str {
        "noop"
    }
}
