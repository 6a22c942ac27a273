// src/data.rs
//
// Output records. Field names match the JSON the frontend already reads,
// hence the camelCase renames on a few fields.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    Buff,
    Debuff,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationHint {
    StartOfTurn,
    EndOfTurn,
    OnTrigger,
    Never,
}

impl DurationHint {
    /// Map an `Expires:` phrase; first containment check wins.
    pub fn from_phrase(phrase: &str) -> Option<Self> {
        let p = phrase.to_lowercase();
        if p.contains("start of turn") {
            Some(DurationHint::StartOfTurn)
        } else if p.contains("end of turn") {
            Some(DurationHint::EndOfTurn)
        } else if p.contains("never") {
            Some(DurationHint::Never)
        } else if p.contains("on ") {
            Some(DurationHint::OnTrigger)
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    pub id: String,
    pub name: String,
    pub kind: EffectKind,
    pub summary: String,
    pub opposite: Option<String>,
    pub flip_to: Option<String>,
    pub clearable: bool,
    pub stacking: bool,
    pub duration_hint: Option<DurationHint>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// What gets written to `effect_data.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectsDocument {
    pub effects: Vec<Effect>,
    pub source: String,
    pub ts: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub description: String,
    #[serde(rename = "energyCost")]
    pub energy_cost: Option<u32>,
}

/// A stats cell after numeric coercion. Cells that do not look numeric stay text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl StatValue {
    /// Strip everything but digits, '.', ',' and '-', drop the commas, then
    /// parse as an integer or a decimal. Anything else keeps the raw text.
    pub fn coerce(raw: &str) -> Self {
        let num: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
            .filter(|c| *c != ',')
            .collect();
        if num.is_empty() {
            return StatValue::Text(s!(raw));
        }
        if is_int_literal(&num) {
            if let Ok(v) = num.parse::<i64>() {
                return StatValue::Int(v);
            }
        } else if is_decimal_literal(&num) {
            if let Ok(v) = num.parse::<f64>() {
                return StatValue::Float(v);
            }
        }
        StatValue::Text(s!(raw))
    }

    /// Integer view for numeric cells (decimals truncate).
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            StatValue::Int(v) => Some(*v),
            StatValue::Float(v) => Some(*v as i64),
            StatValue::Text(_) => None,
        }
    }
}

fn is_int_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn is_decimal_literal(s: &str) -> bool {
    let body = s.strip_prefix('-').unwrap_or(s);
    match body.split_once('.') {
        Some((a, b)) => {
            !a.is_empty()
                && !b.is_empty()
                && a.chars().all(|c| c.is_ascii_digit())
                && b.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    /// Lowercase slug; primary key.
    pub path: String,
    pub url: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub traits: Vec<String>,
    pub abilities: Vec<Ability>,
    pub stats: BTreeMap<String, StatValue>,
    pub power: Option<i64>,
}

/// One row of the stats source, headers already canonical.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatRow {
    pub name: String,
    #[serde(rename = "nameKey")]
    pub name_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(flatten)]
    pub values: BTreeMap<String, StatValue>,
}
