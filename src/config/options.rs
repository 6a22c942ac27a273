// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Effects,
    Characters,
}

impl PageKind {
    pub fn default_file(self) -> &'static str {
        match self {
            PageKind::Effects => EFFECTS_FILE,
            PageKind::Characters => CHARACTERS_FILE,
        }
    }
}

/// Tunables for the effects extractor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Below this many tile-extracted candidates, fall back to page-text segmentation.
    pub fallback_min_tiles: usize,
    /// Body length past which a title ending in "EFFECTS" is treated as an aggregator block.
    pub aggregator_body_len: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            fallback_min_tiles: FALLBACK_MIN_TILES,
            aggregator_body_len: AGGREGATOR_BODY_LEN,
        }
    }
}

/// Fixed vocabulary the effects extractor and merger work from.
/// Immutable once built; pass a different one to change behaviour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectTables {
    /// Checked before `debuff_keywords`; a hit here wins.
    pub buff_keywords: Vec<String>,
    pub debuff_keywords: Vec<String>,
    pub section_headings: Vec<String>,
    /// Lowercase label prefixes that are never effect names.
    pub junk_prefixes: Vec<String>,
    /// Known effect names used as split points when segmenting page text.
    pub vocabulary: Vec<String>,
    /// Symmetric opposite pairs, by display name.
    pub opposite_pairs: Vec<(String, String)>,
    /// One-way flip conversions, by display name.
    pub flip_pairs: Vec<(String, String)>,
    /// Uppercase names that can never be cleared.
    pub unclearable_names: Vec<String>,
    /// Lowercase phrases marking an effect as unclearable.
    pub unclearable_phrases: Vec<String>,
    /// Extra lowercase aliases per display name.
    pub base_aliases: Vec<(String, Vec<String>)>,
    /// Id prefixes that only ever come from page chrome.
    pub bad_id_prefixes: Vec<String>,
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items.iter().map(|(a, b)| (s!(*a), s!(*b))).collect()
}

impl Default for EffectTables {
    fn default() -> Self {
        Self {
            buff_keywords: strs![
                "defense up", "offense up", "speed up", "immunity", "safeguard",
                "deflect", "evade", "regeneration", "counterattack", "taunt", "stealth",
                "minor defense up", "minor offense up", "minor regeneration",
            ],
            debuff_keywords: strs![
                "defense down", "offense down", "slow", "heal block", "ability block",
                "blind", "disrupted", "bleed", "stun", "trauma", "exhausted", "exposed",
                "minor defense down", "minor offense down", "minor bleed", "silence",
            ],
            section_headings: strs!["POSITIVE EFFECTS", "NEGATIVE EFFECTS", "OTHER EFFECTS"],
            junk_prefixes: strs!["expires:", "opposite:", "duration:"],
            vocabulary: strs![
                "Counterattack", "Deathproof", "Immunity", "Defense Up", "Deflect", "Evade",
                "Regeneration", "Safeguard", "Minor Defense Up", "Minor Deflect",
                "Minor Regeneration", "Minor Offense Up", "Offense Up", "Speed Up", "Stealth",
                "Taunt", "Ability Block", "Blind", "Disrupted", "Defense Down", "Bleed",
                "Heal Block", "Minor Bleed", "Trauma", "Minor Defense Down",
                "Minor Offense Down", "Offense Down", "Silence", "Slow", "Stun", "Assist Now",
                "Charged", "Exhausted", "Exposed", "Iso-8 Vulnerable", "Revive Once",
                "Overpower Effects",
            ],
            opposite_pairs: pairs(&[
                ("Defense Up", "Defense Down"),
                ("Offense Up", "Offense Down"),
                ("Speed Up", "Slow"),
                ("Immunity", "Disrupted"),
                ("Bleed", "Regeneration"),
                ("Minor Defense Up", "Minor Defense Down"),
                ("Minor Offense Up", "Minor Offense Down"),
            ]),
            flip_pairs: pairs(&[
                ("Defense Down", "Defense Up"),
                ("Offense Down", "Offense Up"),
            ]),
            unclearable_names: strs!["SAFEGUARD", "TRAUMA"],
            unclearable_phrases: strs!["cannot be cleared or flipped", "unclearable", "unflippable"],
            base_aliases: vec![
                (s!("Defense Down"), strs!["defense down", "def down", "def-"]),
                (s!("Defense Up"), strs!["defense up", "def up", "def+"]),
                (s!("Offense Down"), strs!["offense down", "off-"]),
                (s!("Offense Up"), strs!["offense up", "off+"]),
                (s!("Speed Up"), strs!["speed up", "fill speed bar"]),
                (s!("Slow"), strs!["slow", "reduce speed bar"]),
                (s!("Heal Block"), strs!["heal block", "cannot be healed"]),
                (s!("Ability Block"), strs!["ability block"]),
                (s!("Safeguard"), strs!["unclearable", "unflippable"]),
                (s!("Trauma"), strs!["healing prevention persists", "cannot gain positive effects from heal"]),
                (s!("Bleed"), strs!["bleed"]),
                (s!("Regeneration"), strs!["regeneration", "regen"]),
                (s!("Counterattack"), strs!["counter", "counterattack"]),
                (s!("Disrupted"), strs!["disrupted", "no new buffs"]),
                (s!("Immunity"), strs!["immunity", "immune"]),
                (s!("Exposed"), strs!["exposed"]),
                (s!("Exhausted"), strs!["exhausted"]),
                (s!("Iso-8 Vulnerable"), strs!["iso vulnerable", "vulnerable"]),
            ],
            bad_id_prefixes: strs![
                "EXPIRES_", "OPPOSITE_", "POSITIVE_EFFECTS", "NEGATIVE_EFFECTS", "OTHER_EFFECTS",
            ],
        }
    }
}

impl EffectTables {
    pub fn aliases_for(&self, name: &str) -> &[String] {
        self.base_aliases
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_section_heading(&self, s: &str) -> bool {
        let norm = crate::core::sanitize::normalize_ws(s).to_uppercase();
        self.section_headings.iter().any(|h| *h == norm)
    }

    pub fn is_junk_label(&self, s: &str) -> bool {
        let lc = s.trim_start().to_lowercase();
        self.junk_prefixes.iter().any(|p| lc.starts_with(p.as_str()))
    }
}

/// Everything one CLI invocation needs, resolved from argv.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub page: PageKind,
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub keywords_out: Option<PathBuf>,
    /// `None` means no limit.
    pub limit: Option<usize>,
    pub include_total_stats: bool,
    pub canon_map_json: Option<PathBuf>,
    pub extract: ExtractOptions,
}

impl RunOptions {
    pub fn new(page: PageKind, input: impl Into<PathBuf>) -> Self {
        Self {
            page,
            input: input.into(),
            output: None,
            keywords_out: None,
            limit: Some(DEFAULT_LIMIT),
            include_total_stats: true,
            canon_map_json: None,
            extract: ExtractOptions::default(),
        }
    }

    pub fn out_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR).join(self.page.default_file()))
    }

    /// Keywords land next to the main output unless told otherwise.
    pub fn keywords_path(&self) -> PathBuf {
        self.keywords_out
            .clone()
            .unwrap_or_else(|| self.sibling(KEYWORDS_FILE))
    }

    pub fn stats_debug_path(&self) -> PathBuf {
        self.sibling(STATS_DEBUG_FILE)
    }

    fn sibling(&self, file: &str) -> PathBuf {
        let out = self.out_path();
        match out.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(file),
            _ => PathBuf::from(file),
        }
    }
}
