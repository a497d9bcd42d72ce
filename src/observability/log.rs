//! Tracing-based observer that emits structured log events.
//!
//! Uses the existing `tracing` infrastructure so events appear alongside
//! normal application logs with whatever subscriber the host installs.

use crate::observability::traits::{Observer, PipelineEvent};

/// Observer that logs events via `tracing`.
pub struct LogObserver;

impl Observer for LogObserver {
    fn record_event(&self, event: &PipelineEvent) {
        match event {
            PipelineEvent::RunStarted => {
                tracing::debug!("observer: pipeline.start");
            }
            PipelineEvent::StageStarted { stage } => {
                tracing::debug!(stage = stage.as_str(), "observer: stage.start");
            }
            PipelineEvent::StageCompleted { stage, duration } => {
                tracing::debug!(
                    stage = stage.as_str(),
                    duration_us = duration.as_micros() as u64,
                    "observer: stage.end"
                );
            }
            PipelineEvent::StageFailed { stage, error } => {
                tracing::warn!(
                    stage = stage.as_str(),
                    error = error.as_str(),
                    "observer: stage.failed"
                );
            }
            PipelineEvent::PersonaAssigned { persona } => {
                tracing::info!(persona = persona.as_str(), "observer: persona.assigned");
            }
            PipelineEvent::RunCompleted { duration, success } => {
                tracing::info!(
                    duration_us = duration.as_micros() as u64,
                    success,
                    "observer: pipeline.end"
                );
            }
        }
    }

    fn name(&self) -> &str {
        "log"
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::pipeline::Stage;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_logs_assignment() {
        LogObserver.record_event(&PipelineEvent::PersonaAssigned {
            persona: "Banshee".to_string(),
        });
        assert!(logs_contain("observer: persona.assigned"));
        assert!(logs_contain("Banshee"));
    }

    #[test]
    #[traced_test]
    fn test_logs_stage_failure() {
        LogObserver.record_event(&PipelineEvent::StageFailed {
            stage: Stage::Validate,
            error: "Missing required attributes: ambition".to_string(),
        });
        assert!(logs_contain("observer: stage.failed"));
        assert!(logs_contain("validate"));
    }

    #[test]
    #[traced_test]
    fn test_logs_run_completion() {
        LogObserver.record_event(&PipelineEvent::RunCompleted {
            duration: Duration::from_micros(120),
            success: true,
        });
        assert!(logs_contain("observer: pipeline.end"));
    }
}
