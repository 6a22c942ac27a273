// src/specs/stats.rs
//! Reading *spec* for the total-stats page.
//!
//! Prefers the exported CSV; falls back to the widest rendered table that
//! looks like a stats grid. Either way every row comes out as a `StatRow`
//! with canonical upper-snake stat names and a name join key.

use std::collections::BTreeMap;

use crate::capture::{DomTable, StatsCapture};
use crate::core::keys::{name_key, slug_from_url};
use crate::core::sanitize::clean_text;
use crate::csv::{parse_rows, split_header};
use crate::data::{StatRow, StatValue};

const HEADER_MAP: &[(&str, &str)] = &[
    ("power", "POWER"), ("total power", "POWER"),
    ("health", "HEALTH"), ("total health", "HEALTH"), ("hp", "HEALTH"),
    ("damage", "DAMAGE"), ("total damage", "DAMAGE"),
    ("armor", "ARMOR"), ("armour", "ARMOR"), ("total armor", "ARMOR"), ("total armour", "ARMOR"),
    ("focus", "FOCUS"), ("total focus", "FOCUS"),
    ("resist", "RESISTANCE"), ("resistance", "RESISTANCE"), ("total resistance", "RESISTANCE"),
    ("speed", "SPEED"), ("total speed", "SPEED"),
    ("crit damage", "CRIT_DAMAGE"),
    ("crit chance", "CRIT_CHANCE"),
    ("dodge chance", "DODGE_CHANCE"),
    ("block chance", "BLOCK_CHANCE"),
    ("block amount", "BLOCK_AMOUNT"),
    ("accuracy", "ACCURACY"),
];

const CSV_NAME_HEADERS: &[&str] = &["hero", "name", "character", "characters", "unit"];
const CSV_INDEX_HEADERS: &[&str] = &["#", "rank", "index"];
const DOM_NAME_HEADERS: &[&str] = &["character", "name", "characters", "hero"];
const DOM_SCORE_HEADERS: &[&str] = &[
    "name", "character", "hero", "health", "damage", "armor", "armour", "focus", "resist",
    "resistance", "speed", "power",
];
const DOM_MIN_COLUMNS: usize = 5;
const DOM_MIN_SCORE: usize = 3;

/// NBSP-tolerant, whitespace-collapsed, lowercase header.
pub fn norm_header(h: &str) -> String {
    clean_text(h).to_lowercase()
}

/// Canonical stat name for a raw header: mapped if known, else upper-snake.
pub fn canonical_header(raw: &str) -> String {
    let norm = norm_header(raw);
    match HEADER_MAP.iter().find(|(k, _)| *k == norm) {
        Some((_, canon)) => s!(*canon),
        None => clean_text(raw).to_uppercase().replace(' ', "_"),
    }
}

/// Rows from the exported CSV. An undetectable name column yields no rows.
pub fn parse_stats_csv(text: &str) -> Vec<StatRow> {
    let Some((raw_headers, data)) = split_header(parse_rows(text, ',')) else {
        logw!("Stats CSV is empty");
        return Vec::new();
    };
    let norm: Vec<String> = raw_headers.iter().map(|h| norm_header(h)).collect();
    logd!("Stats CSV headers (raw): {raw_headers:?}");
    logd!("Stats CSV headers (norm): {norm:?}");

    let name_idx = norm
        .iter()
        .position(|h| CSV_NAME_HEADERS.contains(&h.as_str()))
        .or_else(|| norm.iter().position(|h| !CSV_INDEX_HEADERS.contains(&h.as_str())));
    let Some(name_idx) = name_idx else {
        logw!("Could not detect a name column in the stats CSV");
        return Vec::new();
    };

    let stat_cols: Vec<(usize, String)> = raw_headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != name_idx)
        .map(|(i, h)| (i, canonical_header(h)))
        .collect();

    let mut rows = Vec::new();
    for record in data {
        let name = record.get(name_idx).map(|s| clean_text(s)).unwrap_or_default();
        if name.is_empty() { continue; }

        let mut values = BTreeMap::new();
        for (i, canon) in &stat_cols {
            if let Some(cell) = record.get(*i) {
                values.insert(canon.clone(), StatValue::coerce(cell));
            }
        }
        rows.push(StatRow { name_key: name_key(&name), name, slug: None, values });
    }
    logf!("Stats CSV parsed rows: {}", rows.len());
    rows
}

/// Rows from the best-looking rendered table, if any qualifies.
pub fn parse_stats_tables(tables: &[DomTable]) -> Vec<StatRow> {
    let mut best: Option<&DomTable> = None;
    for t in tables {
        if t.headers.len() < DOM_MIN_COLUMNS { continue; }
        let norm: Vec<String> = t.headers.iter().map(|h| norm_header(h)).collect();
        let score = DOM_SCORE_HEADERS.iter().filter(|k| norm.iter().any(|h| h == *k)).count();
        if score >= DOM_MIN_SCORE && best.is_none_or(|b| t.headers.len() > b.headers.len()) {
            best = Some(t);
        }
    }
    let Some(table) = best else {
        logw!("No suitable stats table found in the page");
        return Vec::new();
    };

    let canon_headers: Vec<String> = table
        .headers
        .iter()
        .map(|h| {
            if DOM_NAME_HEADERS.contains(&norm_header(h).as_str()) { s!("name") } else { canonical_header(h) }
        })
        .collect();
    logd!("Stats table headers (canon): {canon_headers:?}");

    let mut rows = Vec::new();
    for tr in &table.rows {
        if tr.cells.len() < 2 { continue; }
        let mut row = StatRow::default();
        for (hdr, cell) in canon_headers.iter().zip(&tr.cells) {
            if hdr == "name" {
                row.name = clean_text(cell);
            } else {
                row.values.insert(hdr.clone(), StatValue::coerce(&clean_text(cell)));
            }
        }
        if row.name.is_empty() { continue; }
        row.slug = tr
            .link
            .as_deref()
            .filter(|href| href.contains("/characters/"))
            .map(slug_from_url)
            .filter(|s| !s.is_empty());
        row.name_key = name_key(&row.name);
        rows.push(row);
    }
    logf!("Stats table parsed rows: {}", rows.len());
    rows
}

/// CSV first, rendered table second. Empty when neither yields rows.
pub fn stats_rows(capture: &StatsCapture) -> Vec<StatRow> {
    let mut rows = match capture.csv.as_deref() {
        Some(text) if !text.trim().is_empty() => parse_stats_csv(text),
        _ => Vec::new(),
    };
    if rows.is_empty() {
        logf!("Stats CSV unavailable or empty; trying rendered tables");
        rows = parse_stats_tables(&capture.tables);
    }
    rows
}
