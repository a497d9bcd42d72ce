//! The five personality attributes a user submits.

use serde::{Deserialize, Serialize};

/// Number of attributes every submission must carry.
pub const ATTRIBUTE_COUNT: usize = 5;

/// One of the five fixed personality attributes.
///
/// Declaration order is the canonical order used everywhere attributes are
/// iterated (scoring, reasoning notes, validation messages).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    TimeOfDay,
    Weather,
    ConflictStyle,
    SnackFlavor,
    Ambition,
}

impl Attribute {
    /// All attributes in canonical order.
    pub const ALL: [Attribute; ATTRIBUTE_COUNT] = [
        Attribute::TimeOfDay,
        Attribute::Weather,
        Attribute::ConflictStyle,
        Attribute::SnackFlavor,
        Attribute::Ambition,
    ];

    /// The JSON key this attribute is submitted under.
    pub fn key(&self) -> &'static str {
        match self {
            Attribute::TimeOfDay => "timeOfDay",
            Attribute::Weather => "weather",
            Attribute::ConflictStyle => "conflictStyle",
            Attribute::SnackFlavor => "snackFlavor",
            Attribute::Ambition => "ambition",
        }
    }

    /// Look up an attribute by its JSON key. Matching is exact (case-sensitive).
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.key() == key)
    }

    /// Scoring multiplier. Conflict style and ambition count double.
    pub fn weight(&self) -> f64 {
        match self {
            Attribute::ConflictStyle | Attribute::Ambition => 2.0,
            Attribute::TimeOfDay | Attribute::Weather | Attribute::SnackFlavor => 1.0,
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A validated submission.
///
/// Only [`crate::validator::validate_input`] produces one from untrusted
/// input; fields are private so a value cannot change after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    time_of_day: String,
    weather: String,
    conflict_style: String,
    snack_flavor: String,
    ambition: String,
}

impl UserInput {
    pub(crate) fn new(
        time_of_day: String,
        weather: String,
        conflict_style: String,
        snack_flavor: String,
        ambition: String,
    ) -> Self {
        Self {
            time_of_day,
            weather,
            conflict_style,
            snack_flavor,
            ambition,
        }
    }

    pub fn time_of_day(&self) -> &str {
        &self.time_of_day
    }

    pub fn weather(&self) -> &str {
        &self.weather
    }

    pub fn conflict_style(&self) -> &str {
        &self.conflict_style
    }

    pub fn snack_flavor(&self) -> &str {
        &self.snack_flavor
    }

    pub fn ambition(&self) -> &str {
        &self.ambition
    }

    /// Value submitted for `attribute`.
    pub fn get(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::TimeOfDay => &self.time_of_day,
            Attribute::Weather => &self.weather,
            Attribute::ConflictStyle => &self.conflict_style,
            Attribute::SnackFlavor => &self.snack_flavor,
            Attribute::Ambition => &self.ambition,
        }
    }
}
