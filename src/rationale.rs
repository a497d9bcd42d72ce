//! Templated rationale for an assignment.
//!
//! One of five fixed templates is chosen from the persona name, so the same
//! persona always reads the same way. Every template mentions the persona,
//! at least two of its traits, and both double-weighted attributes (conflict
//! style and ambition).

use crate::catalog::ArchetypePersona;
use crate::input::UserInput;

/// Default word ceiling for a rationale.
pub const DEFAULT_MAX_WORDS: usize = 50;

type Template = fn(&UserInput, &ArchetypePersona) -> String;

const TEMPLATES: [Template; 5] = [
    monstrous_destiny,
    pure_energy,
    kindred_spirit,
    chefs_kiss,
    written_in_the_stars,
];

fn monstrous_destiny(input: &UserInput, persona: &ArchetypePersona) -> String {
    let t = persona.traits();
    format!(
        "Your {} approach to conflict and {} ambition scream {}. \
         Like the {}, you're {} and {} to your core. \
         Welcome to your monstrous destiny!",
        input.conflict_style(),
        input.ambition(),
        t[0],
        persona.name(),
        t[1],
        t[2],
    )
}

fn pure_energy(input: &UserInput, persona: &ArchetypePersona) -> String {
    let t = persona.traits();
    format!(
        "That {} conflict style paired with {} ambition? Pure {} energy. \
         You've got that {} vibe with a dash of {}. \
         The transformation is inevitable.",
        input.conflict_style(),
        input.ambition(),
        persona.name(),
        t[0],
        t[3],
    )
}

fn kindred_spirit(input: &UserInput, persona: &ArchetypePersona) -> String {
    let t = persona.traits();
    format!(
        "Your {} ambition and {} conflict resolution reveal your {} essence. \
         The {} recognizes a kindred spirit: {}, {}, and utterly {}.",
        input.ambition(),
        input.conflict_style(),
        t[0],
        persona.name(),
        t[1],
        t[2],
        t[4],
    )
}

fn chefs_kiss(input: &UserInput, persona: &ArchetypePersona) -> String {
    let t = persona.traits();
    format!(
        "Between your {} conflict style and {} ambitions, you're basically already a {}. \
         That {} and {} nature? Chef's kiss. \
         Embrace the {} within.",
        input.conflict_style(),
        input.ambition(),
        persona.name(),
        t[0],
        t[1],
        t[2],
    )
}

fn written_in_the_stars(input: &UserInput, persona: &ArchetypePersona) -> String {
    let t = persona.traits();
    format!(
        "Your {} ambition combined with {} conflict handling makes you undeniably {}. \
         The {} sees itself in your {} and {} tendencies. \
         This match was written in the stars.",
        input.ambition(),
        input.conflict_style(),
        t[0],
        persona.name(),
        t[1],
        t[3],
    )
}

/// Template slot used for a persona: name length in characters, modulo the
/// template count. Stable across calls and processes.
pub fn template_index(persona: &ArchetypePersona) -> usize {
    persona.name().chars().count() % TEMPLATES.len()
}

/// Render the rationale for `persona`, capped at `max_words` words.
///
/// Text over the ceiling is cut to exactly the first `max_words`
/// whitespace-delimited words, even mid-sentence.
pub fn generate_rationale(input: &UserInput, persona: &ArchetypePersona, max_words: usize) -> String {
    let rendered = TEMPLATES[template_index(persona)](input, persona);
    truncate_words(rendered, max_words)
}

fn truncate_words(text: String, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > max_words {
        words[..max_words].join(" ")
    } else {
        text
    }
}

/// Whitespace-delimited word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::validator::validate_input;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn input(conflict_style: &str, ambition: &str) -> UserInput {
        validate_input(&json!({
            "timeOfDay": "night",
            "weather": "stormy",
            "conflictStyle": conflict_style,
            "snackFlavor": "salty",
            "ambition": ambition
        }))
        .unwrap()
    }

    #[test]
    fn test_witch_rationale_text() {
        let witch = Catalog::new().get_by_name("Witch").unwrap();
        let text = generate_rationale(&input("cunning", "power"), &witch, DEFAULT_MAX_WORDS);
        assert_eq!(
            text,
            "Your cunning approach to conflict and power ambition scream cunning. \
             Like the Witch, you're mystical and powerful to your core. \
             Welcome to your monstrous destiny!"
        );
    }

    #[test]
    fn test_every_template_is_reachable() {
        let mut used: Vec<usize> = Catalog::new().all().iter().map(template_index).collect();
        used.sort_unstable();
        used.dedup();
        assert_eq!(used, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_contract_for_every_persona() {
        let user = input("direct confrontation", "world domination");
        for persona in Catalog::new().all() {
            let text = generate_rationale(&user, &persona, DEFAULT_MAX_WORDS);
            assert!(text.contains("direct confrontation"), "{text}");
            assert!(text.contains("world domination"), "{text}");
            assert!(text.contains(persona.name()), "{text}");
            let mentioned = persona
                .traits()
                .iter()
                .filter(|t| text.contains(t.as_str()))
                .count();
            assert!(mentioned >= 2, "{text}");
            assert!(word_count(&text) <= DEFAULT_MAX_WORDS);
        }
    }

    #[test]
    fn test_same_persona_same_text() {
        let user = input("sneaky", "fame");
        let zombie = Catalog::new().get_by_name("Zombie").unwrap();
        assert_eq!(
            generate_rationale(&user, &zombie, 50),
            generate_rationale(&user, &zombie, 50)
        );
    }

    #[test]
    fn test_truncates_to_exact_word_limit() {
        let mummy = Catalog::new().get_by_name("Mummy").unwrap();
        let text = generate_rationale(&input("cunning", "power"), &mummy, 6);
        assert_eq!(text, "Your cunning approach to conflict and");
    }

    #[test]
    fn test_long_values_are_cut() {
        let verbose = "very ".repeat(80);
        let vampire = Catalog::new().get_by_name("Vampire").unwrap();
        let text = generate_rationale(&input("calm", &verbose), &vampire, DEFAULT_MAX_WORDS);
        assert_eq!(word_count(&text), DEFAULT_MAX_WORDS);
        assert!(text.starts_with("Your very very"));
    }

    #[test]
    fn test_zero_word_limit_yields_empty_text() {
        let gorgon = Catalog::new().get_by_name("Gorgon").unwrap();
        assert_eq!(generate_rationale(&input("a", "b"), &gorgon, 0), "");
    }
}
