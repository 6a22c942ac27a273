// src/config/consts.rs

// Output
pub const DEFAULT_OUT_DIR: &str = "output";
pub const EFFECTS_FILE: &str = "effect_data.json";
pub const CHARACTERS_FILE: &str = "characters_min.json";
pub const KEYWORDS_FILE: &str = "ability_keywords.json";
pub const STATS_DEBUG_FILE: &str = "hero_total_stats_rows.json";

// Metadata stamped on the effects document
pub const EFFECTS_SOURCE: &str = "msf_effects";

// Characters
pub const DEFAULT_LIMIT: usize = 10;

// Effects extraction
pub const FALLBACK_MIN_TILES: usize = 10; // fewer extracted tiles → segment page text
pub const AGGREGATOR_BODY_LEN: usize = 1200; // "... EFFECTS" blocks longer than this are page chrome

// Diagnostics
pub const UNMATCHED_PREVIEW: usize = 10;
