//! Trait weighting.
//!
//! Every attribute gets a fixed multiplier keyed by the attribute name, never
//! by its value:
//! - Normal weight (1.0): time of day, weather, snack flavor
//! - Double weight (2.0): conflict style, ambition

use serde::Serialize;

use crate::input::{Attribute, UserInput};

/// A submitted value paired with its scoring multiplier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedTrait {
    pub value: String,
    pub weight: f64,
}

/// All five attributes with weights applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedTraits {
    pub time_of_day: WeightedTrait,
    pub weather: WeightedTrait,
    pub conflict_style: WeightedTrait,
    pub snack_flavor: WeightedTrait,
    pub ambition: WeightedTrait,
}

impl WeightedTraits {
    pub fn get(&self, attribute: Attribute) -> &WeightedTrait {
        match attribute {
            Attribute::TimeOfDay => &self.time_of_day,
            Attribute::Weather => &self.weather,
            Attribute::ConflictStyle => &self.conflict_style,
            Attribute::SnackFlavor => &self.snack_flavor,
            Attribute::Ambition => &self.ambition,
        }
    }

    /// Attributes and their weighted values, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &WeightedTrait)> {
        Attribute::ALL.into_iter().map(|attr| (attr, self.get(attr)))
    }
}

/// Apply the weighting rules to a validated submission.
pub fn score_traits(input: &UserInput) -> WeightedTraits {
    let weigh = |attr: Attribute| WeightedTrait {
        value: input.get(attr).to_string(),
        weight: attr.weight(),
    };

    WeightedTraits {
        time_of_day: weigh(Attribute::TimeOfDay),
        weather: weigh(Attribute::Weather),
        conflict_style: weigh(Attribute::ConflictStyle),
        snack_flavor: weigh(Attribute::SnackFlavor),
        ambition: weigh(Attribute::Ambition),
    }
}
