// src/capture.rs
//
// Raw material handed over by the browser session. The browser side (page
// navigation, cookie banners, CSV downloads) lives outside this crate; it
// dumps what it saw into these shapes and we take it from there.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One candidate tile from the effects page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl Tile {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { title: title.into(), body: body.into() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectsCapture {
    #[serde(default)]
    pub tiles: Vec<Tile>,
    /// Full `<body>` text, used when the tiles come up short.
    #[serde(default)]
    pub page_text: Option<String>,
}

/// `<a href*='/characters/'>` on the index page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    pub href: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitLink {
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub text: String,
}

/// One `.panel-content` block under the abilities panel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySection {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    /// Number of filled energy pips.
    #[serde(default)]
    pub energy_full: usize,
    /// Text of the highlighted keyword spans inside the description.
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailPage {
    #[serde(default)]
    pub og_title: String,
    #[serde(default)]
    pub og_image: String,
    #[serde(default)]
    pub h1: String,
    #[serde(default)]
    pub trait_links: Vec<TraitLink>,
    #[serde(default)]
    pub abilities: Vec<AbilitySection>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<String>,
    /// href of a character link inside the row, if any.
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomTable {
    pub headers: Vec<String>,
    #[serde(default)]
    pub rows: Vec<TableRow>,
}

/// The total-stats page: the exported CSV if the download worked, and
/// whatever tables were rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsCapture {
    #[serde(default)]
    pub csv: Option<String>,
    #[serde(default)]
    pub tables: Vec<DomTable>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterCapture {
    pub anchors: Vec<Anchor>,
    /// Detail pages keyed by the character's slug.
    #[serde(default)]
    pub details: HashMap<String, DetailPage>,
    #[serde(default)]
    pub stats: Option<StatsCapture>,
}
