//! Deterministic archetype correlation.
//!
//! Scoring is literal keyword matching, no semantic understanding:
//! - Each attribute value is split into lowercase whitespace-delimited keywords.
//! - For every (keyword, persona trait) pair where either string contains the
//!   other (case-insensitive), the attribute's weight is added to the persona.
//! - Matches accumulate without a cap, so short keywords such as "a" can hit
//!   many traits at once.
//!
//! Every persona is scored. Ranking is by score descending, then by persona
//! name ascending, which gives a total order with no randomness.

use std::cmp::Ordering;

use serde::Serialize;

use crate::catalog::ArchetypePersona;
use crate::scorer::WeightedTraits;

/// Errors from archetype correlation.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum CorrelationError {
    #[error("Catalog is empty")]
    EmptyCatalog,
}

/// A persona with its accumulated correlation score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationScore {
    pub persona: ArchetypePersona,
    pub score: f64,
    /// One note per keyword/trait match, e.g. `ambition: 'power' ~ 'powerful' (+2.0)`.
    pub reasoning: Vec<String>,
}

/// Pick the best-matching persona for the weighted traits.
pub fn correlate_archetype(
    weighted: &WeightedTraits,
    personas: &[ArchetypePersona],
) -> Result<ArchetypePersona, CorrelationError> {
    rank_archetypes(weighted, personas)
        .into_iter()
        .next()
        .map(|top| top.persona)
        .ok_or(CorrelationError::EmptyCatalog)
}

/// Score every persona and return them best match first.
pub fn rank_archetypes(
    weighted: &WeightedTraits,
    personas: &[ArchetypePersona],
) -> Vec<CorrelationScore> {
    let mut scored: Vec<CorrelationScore> = personas
        .iter()
        .map(|persona| score_persona(weighted, persona))
        .collect();

    scored.sort_by(compare_scores);
    scored
}

/// Score descending, then name ascending ignoring case. Byte order settles
/// names that differ only in case.
fn compare_scores(a: &CorrelationScore, b: &CorrelationScore) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| compare_names(a.persona.name(), b.persona.name()))
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Score a single persona against the weighted traits.
fn score_persona(weighted: &WeightedTraits, persona: &ArchetypePersona) -> CorrelationScore {
    let mut score = 0.0;
    let mut reasoning = Vec::new();

    let traits_lower: Vec<String> = persona.traits().iter().map(|t| t.to_lowercase()).collect();

    for (attribute, weighted_trait) in weighted.iter() {
        for keyword in extract_keywords(&weighted_trait.value) {
            for persona_trait in &traits_lower {
                if keyword_matches(&keyword, persona_trait) {
                    score += weighted_trait.weight;
                    reasoning.push(format!(
                        "{attribute}: '{keyword}' ~ '{persona_trait}' (+{:.1})",
                        weighted_trait.weight
                    ));
                }
            }
        }
    }

    CorrelationScore {
        persona: persona.clone(),
        score,
        reasoning,
    }
}

/// Lowercase whitespace-delimited keywords of a submitted value.
fn extract_keywords(value: &str) -> Vec<String> {
    value
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Both arguments must already be lowercase.
fn keyword_matches(keyword: &str, persona_trait: &str) -> bool {
    persona_trait.contains(keyword) || keyword.contains(persona_trait)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::scorer::score_traits;
    use crate::validator::validate_input;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn weighted(
        time_of_day: &str,
        weather: &str,
        conflict_style: &str,
        snack_flavor: &str,
        ambition: &str,
    ) -> WeightedTraits {
        let input = validate_input(&json!({
            "timeOfDay": time_of_day,
            "weather": weather,
            "conflictStyle": conflict_style,
            "snackFlavor": snack_flavor,
            "ambition": ambition
        }))
        .unwrap();
        score_traits(&input)
    }

    fn score_of(ranking: &[CorrelationScore], name: &str) -> f64 {
        ranking
            .iter()
            .find(|s| s.persona.name() == name)
            .map(|s| s.score)
            .unwrap()
    }

    #[test]
    fn test_empty_catalog() {
        let w = weighted("night", "stormy", "direct", "salty", "power");
        assert_eq!(
            correlate_archetype(&w, &[]),
            Err(CorrelationError::EmptyCatalog)
        );
    }

    #[test]
    fn test_keyword_substring_of_trait() {
        let w = weighted("noon", "sunny", "cunning", "sweet", "power");
        let best = correlate_archetype(&w, &Catalog::new().all()).unwrap();
        assert_eq!(best.name(), "Witch");

        let ranking = rank_archetypes(&w, &Catalog::new().all());
        assert_eq!(score_of(&ranking, "Witch"), 4.0);
        assert_eq!(
            ranking[0].reasoning,
            vec![
                "conflictStyle: 'cunning' ~ 'cunning' (+2.0)".to_string(),
                "ambition: 'power' ~ 'powerful' (+2.0)".to_string(),
            ]
        );
    }

    #[test]
    fn test_trait_substring_of_keyword() {
        let w = weighted("noon", "sunny", "calm", "sweet", "stonehenge");
        let best = correlate_archetype(&w, &Catalog::new().all()).unwrap();
        assert_eq!(best.name(), "Gorgon");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let w = weighted("noon", "sunny", "CHAOTIC", "sweet", "none");
        let best = correlate_archetype(&w, &Catalog::new().all()).unwrap();
        assert_eq!(best.name(), "Werewolf");
    }

    #[test]
    fn test_double_weight_beats_single_weight() {
        // Vampire gets +1 from time of day, Werewolf +2 from ambition.
        let w = weighted("nocturnal", "sunny", "calm", "sweet", "chaotic");
        let ranking = rank_archetypes(&w, &Catalog::new().all());
        assert_eq!(ranking[0].persona.name(), "Werewolf");
        assert_eq!(score_of(&ranking, "Werewolf"), 2.0);
        assert_eq!(score_of(&ranking, "Vampire"), 1.0);
    }

    #[test]
    fn test_short_keyword_matches_accumulate() {
        // "a" appears in all five Vampire traits.
        let w = weighted("", "", "a", "", "");
        let ranking = rank_archetypes(&w, &Catalog::new().all());
        assert_eq!(ranking[0].persona.name(), "Vampire");
        assert_eq!(ranking[0].score, 10.0);
        assert_eq!(ranking[0].reasoning.len(), 5);
    }

    #[test]
    fn test_tie_breaks_alphabetically() {
        let zed = ArchetypePersona::new("Zed", ["shared", "xylo", "quartz", "jumbo", "vivid"]);
        let abe = ArchetypePersona::new("Abe", ["shared", "kiwi", "fjord", "glyph", "zebu"]);
        let w = weighted("noon", "sunny", "shared", "sweet", "none");

        let ranking = rank_archetypes(&w, &[zed.clone(), abe.clone()]);
        assert_eq!(ranking[0].score, ranking[1].score);

        let best = correlate_archetype(&w, &[zed.clone(), abe.clone()]).unwrap();
        assert_eq!(best.name(), "Abe");
        let best = correlate_archetype(&w, &[abe, zed]).unwrap();
        assert_eq!(best.name(), "Abe");
    }

    #[test]
    fn test_tie_break_ignores_case() {
        let banshee = ArchetypePersona::new(
            "Banshee Queen",
            ["shared", "xylo", "quartz", "jumbo", "vivid"],
        );
        let apple = ArchetypePersona::new(
            "apple Ghost",
            ["shared", "kiwi", "fjord", "glyph", "zebu"],
        );
        let w = weighted("noon", "sunny", "shared", "sweet", "none");

        let best = correlate_archetype(&w, &[banshee.clone(), apple.clone()]).unwrap();
        assert_eq!(best.name(), "apple Ghost");
        let best = correlate_archetype(&w, &[apple, banshee]).unwrap();
        assert_eq!(best.name(), "apple Ghost");
    }

    #[test]
    fn test_case_only_difference_is_still_ordered() {
        assert_eq!(compare_names("ghoul", "Ghoul"), Ordering::Greater);
        assert_eq!(compare_names("Ghoul", "ghoul"), Ordering::Less);
        assert_eq!(compare_names("Ghoul", "Ghoul"), Ordering::Equal);
    }

    #[test]
    fn test_no_matches_falls_back_to_first_name() {
        let w = weighted(
            "night",
            "stormy",
            "direct confrontation",
            "savory",
            "world domination",
        );
        let ranking = rank_archetypes(&w, &Catalog::new().all());
        assert!(ranking.iter().all(|s| s.score == 0.0));
        assert_eq!(ranking[0].persona.name(), "Alien Parasite");
    }

    #[test]
    fn test_every_persona_is_ranked() {
        let w = weighted("dusk", "rain", "sneaky", "bitter", "control");
        let ranking = rank_archetypes(&w, &Catalog::new().all());
        assert_eq!(ranking.len(), 15);
        assert_eq!(ranking[0].persona.name(), "Alien Parasite");
    }

    #[test]
    fn test_repeatable() {
        let w = weighted("midnight", "foggy", "avoidance", "sweet", "immortality");
        let personas = Catalog::new().all();
        let first = correlate_archetype(&w, &personas).unwrap();
        let second = correlate_archetype(&w, &personas).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.name(), "Vampire");
    }
}
