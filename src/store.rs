// src/store.rs
//
// Loading captured page material from disk.

use std::{fs, path::Path};

use serde::de::DeserializeOwned;

use crate::capture::{EffectsCapture, RosterCapture};
use crate::error::Result;

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .inspect_err(|e| loge!("Cannot read {}: {e}", path.display()))?;
    let value = serde_json::from_str(&text)
        .inspect_err(|e| loge!("Cannot parse {}: {e}", path.display()))?;
    Ok(value)
}

pub fn load_effects_capture(path: &Path) -> Result<EffectsCapture> {
    let cap: EffectsCapture = load_json(path)?;
    logd!(
        "Loaded effects capture: {} tiles, page text {}",
        cap.tiles.len(),
        if cap.page_text.is_some() { "present" } else { "absent" }
    );
    Ok(cap)
}

pub fn load_roster_capture(path: &Path) -> Result<RosterCapture> {
    let cap: RosterCapture = load_json(path)?;
    logd!(
        "Loaded roster capture: {} anchors, {} detail pages",
        cap.anchors.len(),
        cap.details.len()
    );
    Ok(cap)
}
