//! Image-generation prompt for a persona transformation.
//!
//! The descriptor phrases below are consumed verbatim downstream: the style
//! must say "neon-gothic" and "horror", the lighting must carry `#8E48FF`,
//! the background must be a foggy city street, and the quality tags must
//! include "photorealistic", "8k", and cinematic volumetric lighting.

use serde::{Deserialize, Serialize};

use crate::catalog::ArchetypePersona;

pub const STYLE: &str = "in a neon-gothic horror aesthetic style,";
pub const LIGHTING: &str = "with electric violet lighting (#8E48FF),";
pub const BACKGROUND: &str = "set against a foggy city street background.";
pub const QUALITY: [&str; 3] = [
    "Photorealistic",
    "8k resolution",
    "cinematic volumetric lighting.",
];

/// The pieces an image prompt is assembled from, in output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePromptConfig {
    pub persona_name: String,
    pub style: String,
    pub lighting: String,
    pub background: String,
    pub quality: Vec<String>,
}

impl ImagePromptConfig {
    /// The standard descriptors for `persona`.
    pub fn for_persona(persona: &ArchetypePersona) -> Self {
        Self {
            persona_name: persona.name().to_string(),
            style: STYLE.to_string(),
            lighting: LIGHTING.to_string(),
            background: BACKGROUND.to_string(),
            quality: QUALITY.iter().map(|q| q.to_string()).collect(),
        }
    }

    /// Join the pieces into a single prompt string.
    pub fn render(&self) -> String {
        [
            "Transform the source image into".to_string(),
            format!("a {}", self.persona_name),
            self.style.clone(),
            self.lighting.clone(),
            self.background.clone(),
            self.quality.join(", "),
        ]
        .join(" ")
    }
}

/// Build the image prompt for `persona`.
pub fn build_image_prompt(persona: &ArchetypePersona) -> String {
    ImagePromptConfig::for_persona(persona).render()
}
