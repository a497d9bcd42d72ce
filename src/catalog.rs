//! Fixed registry of monster archetypes.
//!
//! The built-in catalog holds fifteen personas, each described by exactly five
//! single-word traits. The table is compiled in and never mutated; every read
//! hands out an owned copy, so callers can modify what they receive without
//! affecting later reads or other threads sharing the same [`Catalog`].

use std::collections::HashSet;

use serde::Serialize;

/// Number of traits every persona carries.
pub const TRAITS_PER_PERSONA: usize = 5;

/// Built-in archetype table: name and its five traits, in display order.
const BUILTIN_PERSONAS: [(&str, [&str; TRAITS_PER_PERSONA]); 15] = [
    (
        "Vampire",
        ["aristocratic", "immortal", "nocturnal", "sophisticated", "ancient"],
    ),
    (
        "Werewolf",
        ["primal", "chaotic", "transformative", "passionate", "wild"],
    ),
    (
        "Cthulhu",
        ["insanity-inducing", "ancient", "unknowable", "cosmic", "dread"],
    ),
    (
        "Frankenstein's Monster",
        ["misunderstood", "constructed", "lonely", "searching", "strong"],
    ),
    (
        "Mummy",
        ["cursed", "vengeful", "eternal", "wrapped", "entombed"],
    ),
    (
        "Zombie",
        ["mindless", "relentless", "contagious", "hungry", "shambling"],
    ),
    (
        "Banshee",
        ["sorrowful", "loud", "prophetic", "ethereal", "wailing"],
    ),
    (
        "Witch",
        ["cunning", "mystical", "powerful", "herbology", "secretive"],
    ),
    (
        "Headless Horseman",
        ["spectral", "seeking", "swift", "determined", "rider"],
    ),
    (
        "Cryptid",
        ["mysterious", "prophetic", "elusive", "folklore", "unseen"],
    ),
    (
        "Grim Reaper",
        ["inevitable", "neutral", "finality", "silent", "collector"],
    ),
    (
        "Poltergeist",
        ["invisible", "destructive", "mischievous", "noisy", "energetic"],
    ),
    (
        "Demogorgon",
        ["interdimensional", "primal", "terrifying", "predator", "gate-opener"],
    ),
    (
        "Alien Parasite",
        ["infiltrating", "subtle", "control", "hidden", "symbiotic"],
    ),
    (
        "Gorgon",
        ["stone", "transformative", "deadly", "beautiful", "serpentine"],
    ),
];

/// Errors raised when building catalogs or editing persona copies.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate persona name: {0}")]
    DuplicateName(String),

    #[error("Persona {name} has {found} traits, expected 5")]
    WrongTraitCount { name: String, found: usize },

    #[error("Trait index {index} out of range for persona {name}")]
    TraitIndexOutOfRange { name: String, index: usize },
}

/// A monster archetype.
///
/// `trait_summary` is always `traits.join(", ")`. Fields are private and the
/// only mutation path, [`ArchetypePersona::set_trait`], re-derives the
/// summary, so the two can never drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchetypePersona {
    name: String,
    traits: [String; TRAITS_PER_PERSONA],
    trait_summary: String,
}

impl ArchetypePersona {
    /// Build a persona, deriving its trait summary.
    pub fn new(name: impl Into<String>, traits: [&str; TRAITS_PER_PERSONA]) -> Self {
        let traits = traits.map(str::to_string);
        Self {
            name: name.into(),
            trait_summary: traits.join(", "),
            traits,
        }
    }

    /// Build a persona from an arbitrary trait list, checking its length.
    pub fn from_traits(name: impl Into<String>, traits: Vec<String>) -> Result<Self, CatalogError> {
        let name = name.into();
        let found = traits.len();
        let traits: [String; TRAITS_PER_PERSONA] = traits
            .try_into()
            .map_err(|_| CatalogError::WrongTraitCount {
                name: name.clone(),
                found,
            })?;
        Ok(Self {
            trait_summary: traits.join(", "),
            name,
            traits,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn traits(&self) -> &[String; TRAITS_PER_PERSONA] {
        &self.traits
    }

    /// Comma-separated trait list, e.g. `"stone, transformative, deadly, beautiful, serpentine"`.
    pub fn trait_summary(&self) -> &str {
        &self.trait_summary
    }

    /// Replace one trait on this copy and re-derive the summary.
    pub fn set_trait(&mut self, index: usize, value: impl Into<String>) -> Result<(), CatalogError> {
        if index >= TRAITS_PER_PERSONA {
            return Err(CatalogError::TraitIndexOutOfRange {
                name: self.name.clone(),
                index,
            });
        }
        self.traits[index] = value.into();
        self.trait_summary = self.traits.join(", ");
        Ok(())
    }
}

/// Read-only collection of archetypes.
///
/// Cheap to construct; hosts serving concurrent requests can either share one
/// behind an `Arc` or build one per request.
#[derive(Debug, Clone)]
pub struct Catalog {
    personas: Vec<ArchetypePersona>,
}

impl Catalog {
    /// The built-in fifteen-persona catalog.
    pub fn new() -> Self {
        Self {
            personas: BUILTIN_PERSONAS
                .iter()
                .map(|(name, traits)| ArchetypePersona::new(*name, *traits))
                .collect(),
        }
    }

    /// Build a custom catalog. Names must be unique; an empty list is allowed.
    pub fn from_personas(personas: Vec<ArchetypePersona>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for persona in &personas {
            if !seen.insert(persona.name.as_str()) {
                return Err(CatalogError::DuplicateName(persona.name.clone()));
            }
        }
        Ok(Self { personas })
    }

    /// Owned copies of every persona, in catalog order.
    pub fn all(&self) -> Vec<ArchetypePersona> {
        self.personas.clone()
    }

    /// Owned copy of the persona called `name` (exact match).
    pub fn get_by_name(&self, name: &str) -> Option<ArchetypePersona> {
        self.personas.iter().find(|p| p.name == name).cloned()
    }

    pub fn names(&self) -> Vec<&str> {
        self.personas.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
