// src/core/tokens.rs
//
// Token normalizer for trait links and highlighted ability keywords.
//
// The site wraps each letter of some keywords in its own span for an
// animation, so the DOM text comes back as "H E L L F I R E C L U B" with
// nothing else marking it apart from a real multi-word phrase. The cascade:
//   1. invisible chars → spaces, collapse
//   2. whole token letter-spaced → collapse and look up (else as one word)
//   3. letter-spaced fragments inside a phrase → collapse each fragment
//   4. '-' / '_' → spaces, then step 3 again on the result
//   5. per word: canon single-word value, kept acronym, "Up", or title case
//   6. whole phrase collapsed → canon value if known

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::canon::CanonMap;
use super::sanitize::{clean_text, normalize_ws, title_case};

static RE_FULLY_SPACED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Za-z] )+[A-Za-z]$").expect("fully spaced regex"));

static RE_SPACED_FRAGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:[A-Za-z] )+[A-Za-z]\b").expect("spaced fragment regex"));

/// Canonical display form of a raw token. Never fails; junk in, "" out.
pub fn normalize(raw: &str, canon: &CanonMap) -> String {
    let s = clean_text(raw);
    if s.is_empty() {
        return s!();
    }

    if RE_FULLY_SPACED.is_match(&s) {
        let collapsed: String = s.chars().filter(|c| *c != ' ').collect::<String>().to_uppercase();
        if let Some(hit) = canon.get(&collapsed) {
            return s!(hit);
        }
        return normalize_word(&collapsed, canon).replace("Xmen", "X Men");
    }

    // Folding separators can expose new fragments ("a-b" → "a b"), so collapse again.
    let s = collapse_fragments(&s);
    let s = collapse_fragments(&normalize_ws(&s.replace(['-', '_'], " ")));

    let words: Vec<String> = s.split(' ').map(|w| normalize_word(w, canon)).collect();
    let out = words.join(" ");

    let collapsed: String = out.chars().filter(|c| *c != ' ').collect::<String>().to_uppercase();
    match canon.get(&collapsed) {
        Some(hit) => s!(hit),
        None => out,
    }
}

fn collapse_fragments(s: &str) -> String {
    RE_SPACED_FRAGMENT
        .replace_all(s, |caps: &Captures| caps[0].replace(' ', ""))
        .into_owned()
}

/// Single word: canon value without separators, kept acronym, "Up", or title case.
fn normalize_word(word: &str, canon: &CanonMap) -> String {
    let upper = word.to_uppercase();
    match canon.get(&upper) {
        Some(hit) if !hit.contains([' ', '-', '_']) => s!(hit),
        _ if canon.keeps_upper(&upper) => upper,
        _ if upper == "UP" => s!("Up"),
        _ => title_case(word),
    }
}

/// Normalize every fragment and keep the first spelling of each token,
/// comparing case-insensitively. Empty results are dropped.
pub fn normalize_all<I, S>(raws: I, canon: &CanonMap) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for raw in raws {
        let token = normalize(raw.as_ref(), canon);
        if !token.is_empty() {
            push_unique_ci(&mut out, token);
        }
    }
    out
}

/// Append `item` unless an entry equal ignoring case is already present.
pub fn push_unique_ci(list: &mut Vec<String>, item: String) -> bool {
    let lc = item.to_lowercase();
    if list.iter().any(|x| x.to_lowercase() == lc) {
        return false;
    }
    list.push(item);
    true
}
