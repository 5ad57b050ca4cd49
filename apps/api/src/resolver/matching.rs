//! Token-set similarity scoring.
//!
//! The resolver accepts a fuzzy match above a fixed score of 60, a
//! threshold tuned against fuzzywuzzy's `token_set_ratio`, so the scale is
//! reproduced here exactly: strings are cleaned, split into deduplicated
//! word sets, and the score is the best pairwise InDel ratio between the
//! sorted intersection and each side's intersection-plus-remainder string.

use std::collections::BTreeSet;

/// Order-independent token-set similarity on the 0–100 fuzz scale.
///
/// High when one string's token set contains the other's, regardless of
/// extra words or word order. Either side processing down to nothing
/// scores 0.
pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    let a = full_process(a);
    let b = full_process(b);

    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    // BTreeSet iterates in sorted order, so these joins are the sorted
    // token strings the algorithm calls for.
    let intersection = join(tokens_a.intersection(&tokens_b).copied());
    let only_a = join(tokens_a.difference(&tokens_b).copied());
    let only_b = join(tokens_b.difference(&tokens_a).copied());

    let combined_a = concat_tokens(&intersection, &only_a);
    let combined_b = concat_tokens(&intersection, &only_b);

    let scores = [
        ratio(&intersection, &combined_a),
        ratio(&intersection, &combined_b),
        ratio(&combined_a, &combined_b),
    ];
    scores.into_iter().max().unwrap_or(0)
}

/// Lowercases and replaces every non-alphanumeric character with a space,
/// then trims. Unicode-aware: accented letters survive.
fn full_process(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .trim()
        .to_string()
}

fn join<'a>(tokens: impl Iterator<Item = &'a str>) -> String {
    tokens.collect::<Vec<_>>().join(" ")
}

fn concat_tokens(base: &str, rest: &str) -> String {
    match (base.is_empty(), rest.is_empty()) {
        (true, _) => rest.to_string(),
        (_, true) => base.to_string(),
        _ => format!("{base} {rest}"),
    }
}

/// Pairwise similarity of two processed strings:
/// `(|a| + |b| - indel_distance) / (|a| + |b|) × 100`, i.e.
/// `200·LCS / (|a| + |b|)`, rounded.
fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();

    if total == 0 {
        return 100;
    }
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let lcs = lcs_length(&a, &b);
    ((200.0 * lcs as f64) / total as f64).round() as u8
}

/// Longest-common-subsequence length with a rolling row, O(|a|·|b|).
fn lcs_length(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
