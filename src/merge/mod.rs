// src/merge/mod.rs
//! Record merging.
//!
//! - `effects` – fold candidates sharing an id, drop junk, link known pairs,
//!   infer clearability, fill aliases.
//! - `characters` – join stats rows onto characters by name key or slug;
//!   gather the global keyword list.
pub mod characters;
pub mod effects;

pub use characters::{StatsMergeReport, collect_keywords, merge_stats};
pub use effects::{finalize, merge};
