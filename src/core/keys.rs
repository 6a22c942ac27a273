// src/core/keys.rs
//
// Deterministic keys. All total functions; same input, same output.

use regex::Regex;
use std::sync::LazyLock;

static RE_PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*\)\s*").expect("parenthetical regex"));

/// Join key for matching one character across independently formatted sources.
/// "Bishop (Classic)" → "bishop", "Rachel Summers" → "rachelsummers".
pub fn name_key(display_name: &str) -> String {
    let s = display_name.to_lowercase().replace('\u{2019}', "'");
    let s = RE_PARENTHETICAL.replace_all(&s, "");
    s.chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Upper-snake record id: "Iso-8 Vulnerable" → "ISO8_VULNERABLE".
pub fn effect_id(name: &str) -> String {
    name.trim()
        .to_uppercase()
        .replace(' ', "_")
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || *c == '_')
        .collect()
}

/// Last path segment, trimmed and lowercased: ".../characters/Rachel-Summers/" → "rachel-summers".
pub fn slug_from_url(href: &str) -> String {
    href.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("")
        .trim()
        .to_lowercase()
}

/// `true` for keys like `POWER` or `CRIT_DAMAGE`: at least one letter, no lowercase.
pub fn is_upper_snake(key: &str) -> bool {
    key.chars().any(|c| c.is_alphabetic()) && !key.chars().any(|c| c.is_lowercase())
}
