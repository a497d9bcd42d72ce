//! Core observer trait and event types.

use std::time::Duration;

use crate::pipeline::Stage;

/// Observer for pipeline lifecycle events.
///
/// Implementations can log to tracing, collect events for tests, or do
/// nothing at all. Observers never influence pipeline results.
///
/// Thread-safe and cheaply cloneable behind `Arc<dyn Observer>`.
pub trait Observer: Send + Sync {
    /// Record a discrete lifecycle event.
    fn record_event(&self, event: &PipelineEvent);

    /// Flush any buffered data. No-op by default.
    fn flush(&self) {}

    /// Human-readable backend name (e.g. "noop", "log").
    fn name(&self) -> &str;
}

/// Discrete lifecycle events a pipeline run can emit.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    /// A run began.
    RunStarted,

    /// A stage is about to execute.
    StageStarted { stage: Stage },

    /// A stage returned successfully.
    StageCompleted { stage: Stage, duration: Duration },

    /// A stage failed; the run halts after this event.
    StageFailed { stage: Stage, error: String },

    /// Correlation picked a persona.
    PersonaAssigned { persona: String },

    /// A run finished, successfully or not.
    RunCompleted { duration: Duration, success: bool },
}
