// src/core/sanitize.rs
//
// Text cleanup shared by every reader. Scraped DOM text carries NBSPs,
// zero-width joiners from animated spans, and ragged whitespace.

use regex::Regex;
use std::sync::LazyLock;

static RE_SITE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*\|\s*MARVEL Strike Force.*$").expect("site suffix regex")
});

/// Map the non-standard spaces to ' ' and drop zero-width characters.
pub fn strip_invisible(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\u{00A0}' | '\u{202F}' | '\u{2007}' => out.push(' '),
            '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}' => {}
            _ => out.push(ch),
        }
    }
    out
}

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// `strip_invisible` then `normalize_ws`.
pub fn clean_text(s: &str) -> String {
    normalize_ws(&strip_invisible(s))
}

/// Like `clean_text` but line breaks survive: each line is collapsed and
/// trimmed, blank lines are dropped.
pub fn clean_multiline(s: &str) -> String {
    strip_invisible(s)
        .lines()
        .map(normalize_ws)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split into lines, trim spaces/tabs/bullets/hyphens off both ends, drop empties.
pub fn clean_lines(s: &str) -> Vec<String> {
    strip_invisible(s)
        .split('\n')
        .map(|ln| ln.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\r' | '•' | '-')))
        .filter(|ln| !ln.is_empty())
        .map(str::to_string)
        .collect()
}

/// Title-case the way scraped labels expect: a cased letter is uppercased when
/// it follows a non-letter, lowercased otherwise. "x-men" → "X-Men".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_cased {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_cased = true;
        } else {
            out.push(ch);
            prev_cased = false;
        }
    }
    out
}

/// "Azazel | MARVEL Strike Force | Scopely" → "Azazel".
pub fn strip_site_suffix(title: &str) -> String {
    RE_SITE_SUFFIX.replace(title.trim(), "").trim().to_string()
}
