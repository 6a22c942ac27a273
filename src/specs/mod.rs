// src/specs/mod.rs
//! # Page-reading "specs"
//!
//! Each spec knows how to read one kind of captured page and shape it into
//! records. Specs only extract; dedup, cross-linking and stats joins live in
//! `merge`.
//!
//! ```text
//! runner → specs::<page> → candidates → merge::<records> → file::write_json
//! ```
//!
//! - `effects` – effect tiles (plus page-text fallback) → effect candidates
//! - `characters` – index anchors and detail pages → characters + keywords
//! - `stats` – total-stats CSV / rendered table → stat rows
pub mod characters;
pub mod effects;
pub mod stats;
