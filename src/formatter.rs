//! Final output assembly.
//!
//! The payload schema is closed: exactly two top-level keys and exactly
//! three keys inside `assignment_result`. Serialization is compact JSON with
//! fields in declaration order, so re-serializing a parsed payload yields
//! the identical string.

use serde::{Deserialize, Serialize};

use crate::catalog::ArchetypePersona;

/// Errors from output formatting.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The assignment half of the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssignmentResult {
    pub assigned_persona: String,
    pub rationale: String,
    pub core_trait_summary: String,
}

/// The complete payload returned by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputJson {
    pub assignment_result: AssignmentResult,
    pub image_generation_prompt: String,
}

impl OutputJson {
    pub fn new(persona: &ArchetypePersona, rationale: &str, image_prompt: &str) -> Self {
        Self {
            assignment_result: AssignmentResult {
                assigned_persona: persona.name().to_string(),
                rationale: rationale.to_string(),
                core_trait_summary: persona.trait_summary().to_string(),
            },
            image_generation_prompt: image_prompt.to_string(),
        }
    }

    /// Strictly parse a payload; unknown or missing fields are errors.
    pub fn parse(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }

    /// Compact JSON rendering.
    pub fn to_json(&self) -> Result<String, FormatError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Assemble and serialize the payload.
pub fn format_output(
    persona: &ArchetypePersona,
    rationale: &str,
    image_prompt: &str,
) -> Result<String, FormatError> {
    OutputJson::new(persona, rationale, image_prompt).to_json()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    fn witch() -> ArchetypePersona {
        Catalog::new().get_by_name("Witch").unwrap()
    }

    #[test]
    fn test_compact_output() {
        let json = format_output(&witch(), "Double, double.", "Transform it.").unwrap();
        assert_eq!(
            json,
            r#"{"assignment_result":{"assigned_persona":"Witch","rationale":"Double, double.","core_trait_summary":"cunning, mystical, powerful, herbology, secretive"},"image_generation_prompt":"Transform it."}"#
        );
    }

    #[test]
    fn test_exact_key_sets() {
        let json = format_output(&witch(), "r", "p").unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        let mut top: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        top.sort();
        assert_eq!(top, vec!["assignment_result", "image_generation_prompt"]);

        let mut inner: Vec<_> = value["assignment_result"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        inner.sort();
        assert_eq!(
            inner,
            vec!["assigned_persona", "core_trait_summary", "rationale"]
        );
    }

    #[test]
    fn test_reserialization_is_identical() {
        let json = format_output(&witch(), "Quote \"this\" and a\nnewline.", "p").unwrap();
        let parsed = OutputJson::parse(&json).unwrap();
        assert_eq!(parsed.to_json().unwrap(), json);
    }

    #[test]
    fn test_parse_rejects_extra_fields() {
        let extra_top = r#"{"assignment_result":{"assigned_persona":"a","rationale":"b","core_trait_summary":"c"},"image_generation_prompt":"d","share_message":"e"}"#;
        assert!(OutputJson::parse(extra_top).is_err());

        let extra_inner = r#"{"assignment_result":{"assigned_persona":"a","rationale":"b","core_trait_summary":"c","score":1},"image_generation_prompt":"d"}"#;
        assert!(OutputJson::parse(extra_inner).is_err());

        let missing = r#"{"assignment_result":{"assigned_persona":"a","rationale":"b"},"image_generation_prompt":"d"}"#;
        assert!(OutputJson::parse(missing).is_err());
    }
}
