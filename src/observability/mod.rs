//! Observability subsystem: trait-based pipeline event recording.
//!
//! Provides a pluggable [`Observer`] trait with multiple backends:
//!
//! | Backend | Description |
//! |---------|-------------|
//! | `noop`  | Zero overhead, discards everything |
//! | `log`   | Emits structured events via `tracing` (default) |
//! | `multi` | Fan-out to multiple backends simultaneously |
//!
//! The [`create_observer`] factory builds the right backend from
//! [`ObservabilityConfig`]. Backends can be combined with `+` syntax
//! (e.g. `"log+noop"`).

mod log;
mod multi;
mod noop;
pub mod traits;

#[cfg(test)]
pub mod recording;

pub use self::log::LogObserver;
pub use self::multi::MultiObserver;
pub use self::noop::NoopObserver;
pub use self::traits::{Observer, PipelineEvent};

use crate::config::helpers::parse_string_env;
use crate::error::ConfigError;

/// Configuration for the observability backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Backend name: "none", "noop", "log", or a `+`-joined combination.
    pub backend: String,
}

impl ObservabilityConfig {
    /// Build from `KINSHIP_OBSERVABILITY`, defaulting to "log".
    pub(crate) fn resolve() -> Result<Self, ConfigError> {
        Ok(Self {
            backend: parse_string_env("KINSHIP_OBSERVABILITY", "log")?,
        })
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            backend: "log".into(),
        }
    }
}

/// Create an observer from configuration.
///
/// Returns a [`NoopObserver`] for "none"/"noop", a [`LogObserver`] for
/// "log", or a [`MultiObserver`] for compound backends like "log+noop".
/// Unknown names fall back to noop.
pub fn create_observer(config: &ObservabilityConfig) -> Box<dyn Observer> {
    let backend = config.backend.trim().to_lowercase();
    if backend.contains('+') {
        let observers: Vec<Box<dyn Observer>> =
            backend.split('+').map(|part| single_backend(part.trim())).collect();
        return Box::new(MultiObserver::new(observers));
    }
    single_backend(&backend)
}

fn single_backend(name: &str) -> Box<dyn Observer> {
    match name {
        "log" => Box::new(LogObserver),
        "none" | "noop" | "" => Box::new(NoopObserver),
        other => {
            tracing::warn!(backend = other, "Unknown observability backend, using noop");
            Box::new(NoopObserver)
        }
    }
}
