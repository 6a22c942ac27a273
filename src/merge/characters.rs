// src/merge/characters.rs
//! Stats rows → characters.
//!
//! Lookup order per character: name key of the display name, name key of the
//! slug read as words, then the row's own slug. A miss is reported, not raised.

use std::collections::HashMap;

use crate::core::keys::{is_upper_snake, name_key};
use crate::data::{Character, StatRow};

const RESERVED_KEYS: &[&str] = &["name", "nameKey", "slug"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsMergeReport {
    pub merged: usize,
    /// Display names with no stats row, in roster order.
    pub unmatched: Vec<String>,
}

pub fn merge_stats(characters: &mut [Character], rows: &[StatRow]) -> StatsMergeReport {
    let mut by_key: HashMap<&str, &StatRow> = HashMap::new();
    let mut by_slug: HashMap<&str, &StatRow> = HashMap::new();
    for row in rows {
        if !row.name_key.is_empty() {
            by_key.entry(row.name_key.as_str()).or_insert(row);
        }
        if let Some(slug) = row.slug.as_deref().filter(|s| !s.is_empty()) {
            by_slug.entry(slug).or_insert(row);
        }
    }

    let mut report = StatsMergeReport::default();
    for c in characters.iter_mut() {
        let k1 = name_key(&c.name);
        let k2 = name_key(&c.path.replace('-', " "));
        let hit = by_key
            .get(k1.as_str())
            .or_else(|| by_key.get(k2.as_str()))
            .or_else(|| by_slug.get(c.path.as_str()));

        let Some(row) = hit else {
            report.unmatched.push(c.name.clone());
            continue;
        };

        for (k, v) in &row.values {
            if is_upper_snake(k) && !RESERVED_KEYS.contains(&k.as_str()) {
                c.stats.insert(k.clone(), v.clone());
            }
        }
        if let Some(power) = row.values.get("POWER").and_then(|v| v.as_i64()) {
            c.power = Some(power);
        }
        report.merged += 1;
    }
    report
}

/// Union of per-character keywords, first spelling kept, sorted ignoring case.
pub fn collect_keywords<I, S>(per_character: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = String>,
{
    let mut all: Vec<String> = Vec::new();
    for list in per_character {
        for kw in list {
            crate::core::tokens::push_unique_ci(&mut all, kw);
        }
    }
    all.sort_by_key(|k| k.to_lowercase());
    all
}
