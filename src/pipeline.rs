//! Fail-fast assignment pipeline.
//!
//! Six stages run in strict order, each consuming only the previous stage's
//! output plus the catalog:
//!
//! ```text
//! Validate → Score → Correlate → Rationale → Prompt → Format
//! ```
//!
//! The first failing stage halts the run. Its error is wrapped in a
//! [`PipelineError`] whose message is prefixed with the stage name, e.g.
//! `"Validation failed: Missing required attributes: ambition"`. A panic
//! inside a stage is caught at the stage boundary and reported the same way.
//! Observer panics are caught and logged, so nothing unwinds out of
//! [`Pipeline::process`].

use std::any::Any;
use std::convert::Infallible;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use serde_json::Value;

use crate::catalog::Catalog;
use crate::config::KinshipConfig;
use crate::correlator::correlate_archetype;
use crate::formatter::format_output;
use crate::input::UserInput;
use crate::observability::{Observer, PipelineEvent, create_observer};
use crate::prompt::build_image_prompt;
use crate::rationale::generate_rationale;
use crate::scorer::score_traits;
use crate::validator::{validate_input, validate_json_str};

/// One ordered unit of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Validate,
    Score,
    Correlate,
    Rationale,
    Prompt,
    Format,
}

impl Stage {
    /// All stages in execution order.
    pub const ALL: [Stage; 6] = [
        Stage::Validate,
        Stage::Score,
        Stage::Correlate,
        Stage::Rationale,
        Stage::Prompt,
        Stage::Format,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Validate => "validate",
            Stage::Score => "score",
            Stage::Correlate => "correlate",
            Stage::Rationale => "rationale",
            Stage::Prompt => "prompt",
            Stage::Format => "format",
        }
    }

    /// Prefix used on error messages from this stage.
    pub fn failure_prefix(&self) -> &'static str {
        match self {
            Stage::Validate => "Validation failed",
            Stage::Score => "Trait scoring failed",
            Stage::Correlate => "Archetype correlation failed",
            Stage::Rationale => "Rationale generation failed",
            Stage::Prompt => "Image prompt generation failed",
            Stage::Format => "Output formatting failed",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stage-qualified pipeline failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}: {}", .stage.failure_prefix(), .message)]
pub struct PipelineError {
    pub stage: Stage,
    pub message: String,
}

impl PipelineError {
    /// True when the caller's input was at fault (validation), false for
    /// everything that should be treated as a server-side fault.
    pub fn is_caller_error(&self) -> bool {
        self.stage == Stage::Validate
    }
}

/// The assignment pipeline.
///
/// Holds a read-only catalog and configuration; `process` takes `&self`, so
/// one pipeline can serve any number of concurrent callers.
pub struct Pipeline {
    catalog: Arc<Catalog>,
    config: KinshipConfig,
    observer: Arc<dyn Observer>,
}

impl Pipeline {
    /// Create a pipeline; the observer backend comes from `config.observability`.
    pub fn new(catalog: Catalog, config: KinshipConfig) -> Self {
        let observer: Arc<dyn Observer> = Arc::from(create_observer(&config.observability));
        Self {
            catalog: Arc::new(catalog),
            config,
            observer,
        }
    }

    /// Built-in catalog with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(Catalog::new(), KinshipConfig::default())
    }

    /// Replace the observer.
    pub fn with_observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = observer;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &KinshipConfig {
        &self.config
    }

    /// Run every stage on a raw submission and return the compact JSON payload.
    pub fn process(&self, raw: &Value) -> Result<String, PipelineError> {
        self.observed(|| {
            let input = self.run_stage(Stage::Validate, || validate_input(raw))?;
            self.execute(input)
        })
    }

    /// Parse JSON text, then run the pipeline. Malformed JSON is a
    /// validation failure.
    pub fn process_str(&self, raw: &str) -> Result<String, PipelineError> {
        self.observed(|| {
            let input = self.run_stage(Stage::Validate, || validate_json_str(raw))?;
            self.execute(input)
        })
    }

    fn observed<F>(&self, run: F) -> Result<String, PipelineError>
    where
        F: FnOnce() -> Result<String, PipelineError>,
    {
        let _span = tracing::debug_span!("kinship.pipeline").entered();
        let started = Instant::now();
        self.notify(&PipelineEvent::RunStarted);

        let result = run();

        self.notify(&PipelineEvent::RunCompleted {
            duration: started.elapsed(),
            success: result.is_ok(),
        });
        result
    }

    fn execute(&self, input: UserInput) -> Result<String, PipelineError> {
        let weighted = self.run_stage(Stage::Score, || {
            Ok::<_, Infallible>(score_traits(&input))
        })?;

        let persona = self.run_stage(Stage::Correlate, || {
            correlate_archetype(&weighted, &self.catalog.all())
        })?;
        self.notify(&PipelineEvent::PersonaAssigned {
            persona: persona.name().to_string(),
        });

        let max_words = self.config.rationale.max_words;
        let rationale = self.run_stage(Stage::Rationale, || {
            Ok::<_, Infallible>(generate_rationale(&input, &persona, max_words))
        })?;

        let image_prompt = self.run_stage(Stage::Prompt, || {
            Ok::<_, Infallible>(build_image_prompt(&persona))
        })?;

        self.run_stage(Stage::Format, || {
            format_output(&persona, &rationale, &image_prompt)
        })
    }

    /// Deliver an event to the observer. A panicking observer is logged and
    /// otherwise ignored.
    fn notify(&self, event: &PipelineEvent) {
        if let Err(payload) =
            panic::catch_unwind(AssertUnwindSafe(|| self.observer.record_event(event)))
        {
            tracing::warn!(
                observer = self.observer.name(),
                panic = %panic_message(payload.as_ref()),
                "observer panicked while recording event"
            );
        }
    }

    /// Run one stage, converting its error or panic into a [`PipelineError`].
    fn run_stage<T, E, F>(&self, stage: Stage, f: F) -> Result<T, PipelineError>
    where
        E: Display,
        F: FnOnce() -> Result<T, E>,
    {
        self.notify(&PipelineEvent::StageStarted { stage });
        let started = Instant::now();

        let outcome = match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(e.to_string()),
            Err(payload) => Err(format!("stage panicked: {}", panic_message(payload.as_ref()))),
        };

        match outcome {
            Ok(value) => {
                self.notify(&PipelineEvent::StageCompleted {
                    stage,
                    duration: started.elapsed(),
                });
                Ok(value)
            }
            Err(message) => {
                self.notify(&PipelineEvent::StageFailed {
                    stage,
                    error: message.clone(),
                });
                Err(PipelineError { stage, message })
            }
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Run the pipeline once with default configuration.
///
/// Uses `catalog` when given, otherwise the built-in catalog.
pub fn process_pipeline(raw: &Value, catalog: Option<&Catalog>) -> Result<String, PipelineError> {
    let catalog = catalog.cloned().unwrap_or_default();
    Pipeline::new(catalog, KinshipConfig::default()).process(raw)
}
