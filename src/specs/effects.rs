// src/specs/effects.rs
//! Reading *spec* for the effects page.
//!
//! Purpose:
//! - Turn `(title, body)` tiles into effect candidates.
//! - Pull the `Expires:` / `Opposite:` annotations out of the body text.
//! - Classify buff / debuff / other by keyword.
//! - When the page structure shifts and few tiles parse, segment the raw page
//!   text at known effect names and run the same pipeline on each segment.
//!
//! Non-Responsibilities:
//! - No dedup or cross-linking; candidates may repeat ids. See `merge::effects`.

use regex::Regex;
use std::sync::LazyLock;

use crate::capture::{EffectsCapture, Tile};
use crate::config::options::{EffectTables, ExtractOptions};
use crate::core::keys::effect_id;
use crate::core::sanitize::{clean_lines, clean_multiline, clean_text, normalize_ws};
use crate::data::{DurationHint, Effect, EffectKind};

static RE_OPPOSITE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bopposite:\s*([A-Za-z][A-Za-z +\-]*)").expect("opposite regex")
});

static RE_EXPIRES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bexpires:[ \t]*").expect("expires regex"));

static RE_STACKING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bstack|\bminor\b").expect("stacking regex"));

/// Why a tile did not become a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    EmptyTitle,
    SectionHeading,
    JunkLabel,
    Aggregator,
}

/// Annotations pulled out of a tile body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extras {
    pub opposite: Option<String>,
    pub duration: Option<DurationHint>,
    pub summary: String,
}

/// Split `Opposite:` and `Expires:` out of `body`.
/// An `Expires:` phrase runs to the next `Opposite:`, the end of its line, or
/// the end of the text. The returned summary has both labels removed and its
/// whitespace collapsed.
pub fn parse_extras(body: &str) -> Extras {
    let text = clean_multiline(body);

    let opposite = RE_OPPOSITE
        .captures(&text)
        .map(|c| c[1].trim().to_string())
        .filter(|s| !s.is_empty());

    let mut duration = None;
    let mut stripped = String::with_capacity(text.len());
    let mut pos = 0usize;
    while let Some(m) = RE_EXPIRES.find_at(&text, pos) {
        let end = expires_phrase_end(&text, m.end());
        if duration.is_none() {
            duration = DurationHint::from_phrase(&text[m.end()..end]);
        }
        stripped.push_str(&text[pos..m.start()]);
        stripped.push(' ');
        pos = end;
    }
    stripped.push_str(&text[pos..]);

    let summary = normalize_ws(&RE_OPPOSITE.replace_all(&stripped, " "));
    Extras { opposite, duration, summary }
}

fn expires_phrase_end(text: &str, from: usize) -> usize {
    let rest = &text[from..];
    let lc = rest.to_ascii_lowercase();
    let next_label = lc.find("opposite:").unwrap_or(rest.len());
    let next_line = rest.find('\n').unwrap_or(rest.len());
    from + next_label.min(next_line)
}

pub struct EffectExtractor<'a> {
    tables: &'a EffectTables,
    opts: ExtractOptions,
    sections: Option<Regex>,
    vocabulary: Option<Regex>,
}

impl<'a> EffectExtractor<'a> {
    pub fn new(tables: &'a EffectTables, opts: ExtractOptions) -> Self {
        Self {
            tables,
            opts,
            sections: alternation(&tables.section_headings, r"(?i)\b(?:", r")\b"),
            vocabulary: alternation(&tables.vocabulary, r"(?m)^(?:", r")\b"),
        }
    }

    /// Candidate for one tile, or `None` when the tile is not an effect.
    pub fn extract(&self, title: &str, body: &str) -> Option<Effect> {
        match self.check(title, body) {
            Ok(effect) => Some(effect),
            Err(reason) => {
                logd!("skip tile {:?}: {:?}", clean_text(title), reason);
                None
            }
        }
    }

    /// Same as `extract` but says why a tile was rejected.
    pub fn check(&self, title: &str, body: &str) -> Result<Effect, SkipReason> {
        let title = clean_text(title);
        if title.is_empty() {
            return Err(SkipReason::EmptyTitle);
        }
        self.screen_name(&title)?;
        if body.chars().count() > self.opts.aggregator_body_len
            && title.to_uppercase().ends_with("EFFECTS")
        {
            return Err(SkipReason::Aggregator);
        }

        // Inner headings sometimes repeat the name; rebuild from lines.
        let lines = clean_lines(&join!(&title, "\n", body));
        let name = lines.first().map(|l| normalize_ws(l)).ok_or(SkipReason::EmptyTitle)?;
        self.screen_name(&name)?;

        let rest = lines[1..].join("\n");
        let extras = parse_extras(if rest.is_empty() { body } else { &rest });

        let id = effect_id(&name);
        if id.is_empty() {
            return Err(SkipReason::EmptyTitle);
        }
        let summary = if extras.summary.is_empty() { clean_text(body) } else { extras.summary };

        Ok(Effect {
            kind: self.classify(&name, &summary),
            stacking: is_stacking(&name, &summary),
            opposite: extras.opposite.as_deref().map(effect_id).filter(|s| !s.is_empty()),
            duration_hint: extras.duration,
            flip_to: None,
            clearable: true,
            aliases: Vec::new(),
            keywords: Vec::new(),
            id,
            name,
            summary,
        })
    }

    fn screen_name(&self, name: &str) -> Result<(), SkipReason> {
        if self.tables.is_section_heading(name) {
            return Err(SkipReason::SectionHeading);
        }
        if self.tables.is_junk_label(name) {
            return Err(SkipReason::JunkLabel);
        }
        Ok(())
    }

    /// Buff keywords are checked first, so text hitting both lists is a buff.
    pub fn classify(&self, name: &str, summary: &str) -> EffectKind {
        let txt = format!("{name} {summary}").to_lowercase();
        if self.tables.buff_keywords.iter().any(|k| txt.contains(k.as_str())) {
            EffectKind::Buff
        } else if self.tables.debuff_keywords.iter().any(|k| txt.contains(k.as_str())) {
            EffectKind::Debuff
        } else {
            EffectKind::Other
        }
    }

    pub fn extract_tiles(&self, tiles: &[Tile]) -> Vec<Effect> {
        tiles.iter().filter_map(|t| self.extract(&t.title, &t.body)).collect()
    }

    /// Split page text at section headings, then at known effect names that
    /// start a line; each `(name, text until next name)` goes through `extract`.
    pub fn segment_page(&self, page_text: &str) -> Vec<Effect> {
        let Some(vocab) = &self.vocabulary else {
            return Vec::new();
        };
        let text = clean_multiline(page_text);
        let blocks: Vec<&str> = match &self.sections {
            Some(re) => re.split(&text).collect(),
            None => vec![text.as_str()],
        };

        let mut out = Vec::new();
        for block in blocks {
            let hits: Vec<_> = vocab.find_iter(block).collect();
            for (i, m) in hits.iter().enumerate() {
                let end = hits.get(i + 1).map(|n| n.start()).unwrap_or(block.len());
                let desc = &block[m.end()..end];
                if let Some(effect) = self.extract(m.as_str(), desc) {
                    out.push(effect);
                }
            }
        }
        out
    }

    /// Tiles first; if too few parse, add whatever page-text segmentation finds.
    /// The result is unmerged and may be empty.
    pub fn extract_all(&self, capture: &EffectsCapture) -> Vec<Effect> {
        let mut candidates = self.extract_tiles(&capture.tiles);
        logd!("{} of {} tiles parsed as effects", candidates.len(), capture.tiles.len());

        if candidates.len() < self.opts.fallback_min_tiles {
            match capture.page_text.as_deref() {
                Some(text) if !text.trim().is_empty() => {
                    let extra = self.segment_page(text);
                    logf!(
                        "Only {} tile candidates (< {}); page-text segmentation added {}",
                        candidates.len(),
                        self.opts.fallback_min_tiles,
                        extra.len()
                    );
                    candidates.extend(extra);
                }
                _ => logd!("No page text to fall back on"),
            }
        }

        if candidates.is_empty() {
            logw!("No effect candidates found");
        }
        candidates
    }
}

fn is_stacking(name: &str, summary: &str) -> bool {
    RE_STACKING.is_match(name) || RE_STACKING.is_match(summary)
}

/// Escaped alternation, longest first so "Minor Bleed" beats "Bleed".
fn alternation(items: &[String], prefix: &str, suffix: &str) -> Option<Regex> {
    let mut sorted: Vec<&String> = items.iter().filter(|s| !s.is_empty()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));
    let body = sorted.iter().map(|s| regex::escape(s)).collect::<Vec<_>>().join("|");
    match Regex::new(&join!(prefix, &body, suffix)) {
        Ok(re) => Some(re),
        Err(e) => {
            loge!("Cannot build vocabulary pattern: {e}");
            None
        }
    }
}
