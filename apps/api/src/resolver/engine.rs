//! The resolution pipeline itself. Stages run in strict priority order and
//! the first stage that produces something wins.

use crate::resolver::catalog::CareerCatalog;
use crate::resolver::matching::token_set_ratio;

/// Phrases that signal a request for the whole catalog rather than one
/// program. Checked before anything else: a message naming a program AND a
/// list phrase is treated as a list request.
const LIST_TRIGGERS: [&str; 6] = [
    "carreras",
    "disponibles",
    "ofrecen",
    "tienen",
    "qué estudiar",
    "qué carreras",
];

/// Minimum token-set score (exclusive) for the fuzzy fallback to accept.
const FUZZY_THRESHOLD: u8 = 60;

/// Outcome of resolving a chat message against the career catalog.
/// Total: every input, including the empty string, lands in one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The user asked which programs are offered.
    ListCareers,
    /// A specific program was identified (lowercase canonical name).
    Career(String),
    /// Nothing matched; the caller falls back to a suggestion.
    Unresolved,
}

impl CareerCatalog {
    /// Maps a raw chat message to a canonical program name, a
    /// catalog-listing request, or `Unresolved`.
    ///
    /// Matching is plain substring containment on the lowercased input,
    /// NOT word-boundary matching: "derechos humanos" resolves to
    /// "derecho". That looseness is intentional and tuned by the tables.
    pub fn resolve(&self, text: &str) -> Resolution {
        let text = text.to_lowercase();

        if LIST_TRIGGERS.iter().any(|phrase| text.contains(phrase)) {
            return Resolution::ListCareers;
        }

        for (synonym, career) in &self.synonyms {
            if text.contains(synonym.as_str()) {
                return Resolution::Career(career.clone());
            }
        }

        for (career, variations) in &self.variations {
            if text.contains(career.as_str()) {
                return Resolution::Career(career.clone());
            }
            for variation in variations {
                if text.contains(variation.as_str()) {
                    return Resolution::Career(career.clone());
                }
            }
        }

        // Fuzzy fallback over the canonical names in table order; the
        // strictly-greater comparison keeps the earliest entry on ties.
        let mut best: Option<(&String, u8)> = None;
        for (career, _) in &self.variations {
            let score = token_set_ratio(&text, career);
            if score > FUZZY_THRESHOLD && best.map_or(true, |(_, s)| score > s) {
                best = Some((career, score));
            }
        }

        match best {
            Some((career, _)) => Resolution::Career(career.clone()),
            None => Resolution::Unresolved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CareerCatalog {
        CareerCatalog::builtin()
    }

    fn career(name: &str) -> Resolution {
        Resolution::Career(name.to_string())
    }

    #[test]
    fn test_list_intent_detected() {
        assert_eq!(
            catalog().resolve("¿qué carreras ofrecen?"),
            Resolution::ListCareers
        );
    }

    #[test]
    fn test_list_intent_wins_over_program_mention() {
        // "tienen" is a list trigger even though "derecho" also appears
        assert_eq!(
            catalog().resolve("¿tienen la carrera de derecho?"),
            Resolution::ListCareers
        );
    }

    #[test]
    fn test_synonym_resolves_to_canonical_name() {
        assert_eq!(
            catalog().resolve("quiero estudiar abogacía"),
            career("derecho")
        );
    }

    #[test]
    fn test_synonym_table_runs_before_variations() {
        // "computación" is both a synonym and a variation; either way the
        // canonical target is the same program
        assert_eq!(
            catalog().resolve("me gusta la computación"),
            career("ingeniería en sistemas inteligentes")
        );
    }

    #[test]
    fn test_variation_substring_resolves() {
        assert_eq!(
            catalog().resolve("me interesa la carrera de sistemas inteligentes"),
            career("ingeniería en sistemas inteligentes")
        );
        assert_eq!(
            catalog().resolve("kinesiología"),
            career("licenciatura en fisioterapia")
        );
    }

    #[test]
    fn test_substring_matching_is_not_word_bounded() {
        // "derechos" contains "derecho"
        assert_eq!(
            catalog().resolve("los derechos humanos me apasionan"),
            career("derecho")
        );
    }

    #[test]
    fn test_case_insensitive() {
        let catalog = catalog();
        assert_eq!(catalog.resolve("DERECHO"), catalog.resolve("derecho"));
        assert_eq!(catalog.resolve("DERECHO"), career("derecho"));
    }

    #[test]
    fn test_fuzzy_fallback_above_threshold() {
        // misspelled and unaccented: no substring hit anywhere, resolved
        // by token-set scoring against the canonical names
        assert_eq!(
            catalog().resolve("licenciatura en sicologia"),
            career("licenciatura en psicología")
        );
    }

    #[test]
    fn test_gibberish_is_unresolved() {
        assert_eq!(
            catalog().resolve("xyz123 random gibberish"),
            Resolution::Unresolved
        );
    }

    #[test]
    fn test_empty_input_is_unresolved() {
        assert_eq!(catalog().resolve(""), Resolution::Unresolved);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let catalog = catalog();
        let first = catalog.resolve("quiero estudiar abogacía");
        for _ in 0..3 {
            assert_eq!(catalog.resolve("quiero estudiar abogacía"), first);
        }
    }
}
