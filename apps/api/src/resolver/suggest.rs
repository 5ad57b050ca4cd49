//! Disambiguation hints for messages nothing resolved.

/// Keyword fragments and the hint each group produces. Groups are
/// independent: a message can collect several hints at once.
const HINT_GROUPS: [(&[&str], &str); 5] = [
    (
        &["sist", "comp", "info", "compu"],
        "¿Quizás te refieres a 'Ingeniería en Sistemas Inteligentes'?",
    ),
    (&["dere", "abog", "ley"], "¿Quisiste decir 'Derecho'?"),
    (&["dent", "odon"], "¿Te refieres a 'Odontología'?"),
    (
        &["cont", "fina"],
        "¿Buscas información sobre 'Contabilidad y Finanzas'?",
    ),
    (
        &["enferm", "cuidados"],
        "¿Te interesa la carrera de 'Enfermería'?",
    ),
];

/// Builds a best-effort hint for input that did not resolve. Non-empty
/// results start with a space so the caller can append them directly after
/// its "didn't understand" sentence; empty when no group matches.
pub fn suggest(text: &str) -> String {
    let text = text.to_lowercase();

    let hints: Vec<&str> = HINT_GROUPS
        .iter()
        .filter(|(fragments, _)| fragments.iter().any(|fragment| text.contains(fragment)))
        .map(|(_, hint)| *hint)
        .collect();

    if hints.is_empty() {
        String::new()
    } else {
        format!(" {}", hints.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dentistry_fragment_triggers_odontologia_hint() {
        let hint = suggest("quiero estudiar dent");
        assert!(hint.contains("Odontología"), "hint was: {hint:?}");
    }

    #[test]
    fn test_hints_start_with_a_space() {
        assert!(suggest("dent").starts_with(' '));
    }

    #[test]
    fn test_multiple_groups_concatenate() {
        let hint = suggest("algo de leyes y finanzas");
        assert!(hint.contains("Derecho"));
        assert!(hint.contains("Contabilidad y Finanzas"));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(suggest("DENT"), suggest("dent"));
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert_eq!(suggest("xyz123 random gibberish"), "");
        assert_eq!(suggest(""), "");
    }
}
