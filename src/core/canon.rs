// src/core/canon.rs
//
// Canonical spellings for traits, keywords and effect names.
// Keys are collapsed: uppercase, every non-alphanumeric removed ("DEFENSEUP").
// Values are the display form ("Defense Up").

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::ConfigError;

/// Short acronyms that stay uppercase as standalone words.
const KEEP_UPPER: &[&str] = &["AI", "ISO", "X"];

const DEFAULT_ENTRIES: &[(&str, &str)] = &[
    // factions / teams
    ("HELLFIRECLUB", "Hellfire Club"),
    ("IMMORTALXMEN", "Immortal X Men"),
    ("ACCURSED", "Accursed"),
    ("HYDRA", "Hydra"),
    ("AIM", "A.I.M."),
    ("DARKHOLD", "Darkhold"),
    ("INHUMANS", "Inhumans"),
    ("XFORCE", "X-Force"),
    ("XMEN", "X-Men"),
    ("UNCANNYXMEN", "Uncanny X-Men"),
    ("YOUNGAVENGERS", "Young Avengers"),
    // modes
    ("CRUCIBLE", "Crucible"),
    ("CRUCIBLEOFFENSE", "Crucible Offense"),
    ("CRUCIBLEDEFENSE", "Crucible Defense"),
    ("WAROFFENSE", "War Offense"),
    ("WARDEFENSE", "War Defense"),
    ("ARENA", "Arena"),
    ("RAIDS", "Raids"),
    // roles
    ("PROTECTOR", "Protector"),
    ("SUPPORT", "Support"),
    ("CONTROLLER", "Controller"),
    ("BLASTER", "Blaster"),
    ("BRAWLER", "Brawler"),
    // status effects
    ("DEFENSEUP", "Defense Up"),
    ("DEFENSEDOWN", "Defense Down"),
    ("OFFENSEUP", "Offense Up"),
    ("OFFENSEDOWN", "Offense Down"),
    ("HEALBLOCK", "Heal Block"),
    ("ABILITYBLOCK", "Ability Block"),
    ("IMMUNITY", "Immunity"),
    ("SAFEGUARD", "Safeguard"),
    ("BLEED", "Bleed"),
    ("BLIND", "Blind"),
    ("SLOW", "Slow"),
    ("STUN", "Stun"),
    ("TAUNT", "Taunt"),
    ("TRAUMA", "Trauma"),
    ("DISRUPTED", "Disrupted"),
    ("VULNERABLE", "Vulnerable"),
    ("BARRIER", "Barrier"),
    ("STEALTH", "Stealth"),
    ("DEATHPROOF", "Deathproof"),
    ("REGENERATION", "Regeneration"),
    ("EVADE", "Evade"),
    ("COUNTER", "Counter"),
    ("CHARGED", "Charged"),
    // turn meter
    ("SPEEDUP", "Speed Up"),
    ("SPEEDDOWN", "Speed Down"),
    ("SPEEDBAR", "Speed Bar"),
];

/// Uppercase and drop everything that is not a letter or digit.
pub fn collapse_key(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_uppercase)
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonMap {
    entries: HashMap<String, String>,
    keep_upper: HashSet<String>,
}

impl Default for CanonMap {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CanonMap {
    /// The built-in table plus the acronym allowlist.
    pub fn builtin() -> Self {
        Self {
            entries: DEFAULT_ENTRIES
                .iter()
                .map(|(k, v)| (s!(*k), s!(*v)))
                .collect(),
            keep_upper: KEEP_UPPER.iter().map(|k| s!(*k)).collect(),
        }
    }

    /// No entries, default acronyms. Mostly for tests.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
            keep_upper: KEEP_UPPER.iter().map(|k| s!(*k)).collect(),
        }
    }

    /// Canonical display form for any spelling that collapses to a known key.
    pub fn get(&self, raw: &str) -> Option<&str> {
        self.entries.get(&collapse_key(raw)).map(String::as_str)
    }

    pub fn keeps_upper(&self, word_upper: &str) -> bool {
        self.keep_upper.contains(word_upper)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge overrides in; later entries win on key collision.
    /// Keys are collapsed on the way in, empty keys are ignored.
    pub fn extend<I, K, V>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (k, v) in overrides {
            let key = collapse_key(k.as_ref());
            if key.is_empty() { continue; }
            self.entries.insert(key, v.into());
        }
    }

    /// Read an override file. Accepts `{"KEY": "Display"}` or `[["KEY", "Display"], ...]`.
    pub fn load_overrides(path: &Path) -> Result<Vec<(String, String)>, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value = serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        parse_overrides(&value)
    }

    /// Builtin map extended from `path`; a bad file is logged and the defaults kept.
    pub fn with_overrides_from(path: &Path) -> Self {
        let mut map = Self::builtin();
        match Self::load_overrides(path) {
            Ok(pairs) => {
                let n = pairs.len();
                map.extend(pairs);
                logf!("Loaded {n} canon overrides from {}", path.display());
            }
            Err(e) => logw!("Ignoring canon overrides: {e}"),
        }
        map
    }
}

/// Pull `(key, display)` pairs out of an already-parsed override document.
pub fn parse_overrides(value: &Value) -> Result<Vec<(String, String)>, ConfigError> {
    let mut out = Vec::new();
    match value {
        Value::Object(obj) => {
            for (k, v) in obj {
                if let Some(display) = display_value(v) {
                    push_pair(&mut out, k, display);
                }
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                let pair = item
                    .as_array()
                    .filter(|p| p.len() >= 2)
                    .ok_or_else(|| ConfigError::Shape(format!("entry {i} is not a [key, value] pair")))?;
                let key = match &pair[0] {
                    Value::String(s) => s.clone(),
                    Value::Null => continue,
                    other => other.to_string(),
                };
                if let Some(display) = display_value(&pair[1]) {
                    push_pair(&mut out, &key, display);
                }
            }
        }
        other => {
            return Err(ConfigError::Shape(format!(
                "expected an object or an array of pairs, found {}",
                kind_name(other)
            )));
        }
    }
    Ok(out)
}

fn display_value(v: &Value) -> Option<String> {
    match v {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn push_pair(out: &mut Vec<(String, String)>, key: &str, display: String) {
    let key = collapse_key(key);
    if !key.is_empty() {
        out.push((key, display));
    }
}

fn kind_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
