//! Kinship: a deterministic monster persona matchmaker.
//!
//! Takes five categorical personality attributes, weights them, correlates
//! them against a fixed catalog of fifteen monster archetypes, and produces a
//! templated rationale plus an image-generation prompt.
//!
//! # Pipeline
//!
//! ```text
//! raw JSON input
//!      │
//!      ▼
//! ┌────────────┐   ┌────────┐   ┌────────────┐   ┌───────────┐   ┌────────┐   ┌────────┐
//! │ Validate   │──▶│ Score  │──▶│ Correlate  │──▶│ Rationale │──▶│ Prompt │──▶│ Format │
//! └────────────┘   └────────┘   └─────┬──────┘   └───────────┘   └────────┘   └────────┘
//!                                     │
//!                                  Catalog
//! ```
//!
//! Each stage returns a `Result`; the first failure halts the pipeline and is
//! reported as a [`PipelineError`] naming the stage that failed.
//!
//! # Usage
//!
//! ```rust
//! use kinship::Pipeline;
//! use serde_json::json;
//!
//! let pipeline = Pipeline::with_defaults();
//! let output = pipeline
//!     .process(&json!({
//!         "timeOfDay": "night",
//!         "weather": "stormy",
//!         "conflictStyle": "direct confrontation",
//!         "snackFlavor": "savory",
//!         "ambition": "world domination"
//!     }))
//!     .unwrap();
//! assert!(output.starts_with("{\"assignment_result\":"));
//! ```

pub mod catalog;
pub mod config;
pub mod correlator;
pub mod error;
pub mod formatter;
pub mod input;
pub mod observability;
pub mod pipeline;
pub mod prompt;
pub mod rationale;
pub mod scorer;
pub mod validator;

pub use catalog::{ArchetypePersona, Catalog, CatalogError};
pub use config::KinshipConfig;
pub use correlator::{CorrelationError, CorrelationScore, correlate_archetype, rank_archetypes};
pub use error::{ConfigError, Error};
pub use formatter::{AssignmentResult, FormatError, OutputJson, format_output};
pub use input::{Attribute, UserInput};
pub use pipeline::{Pipeline, PipelineError, Stage, process_pipeline};
pub use prompt::{ImagePromptConfig, build_image_prompt};
pub use rationale::{DEFAULT_MAX_WORDS, generate_rationale};
pub use scorer::{WeightedTrait, WeightedTraits, score_traits};
pub use validator::{ValidationError, validate_input, validate_json_str};
