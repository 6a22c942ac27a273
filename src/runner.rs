// src/runner.rs
use std::path::PathBuf;

use crate::{
    capture::{EffectsCapture, RosterCapture},
    config::consts::{EFFECTS_SOURCE, UNMATCHED_PREVIEW},
    config::options::{EffectTables, ExtractOptions, PageKind, RunOptions},
    core::canon::CanonMap,
    data::{Character, Effect, EffectsDocument, StatRow},
    error::Result,
    file::write_json,
    merge::{self, StatsMergeReport},
    progress::{NullProgress, Progress},
    specs, store,
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub records: usize,
    /// Characters with no stats row. Expected to be non-empty.
    pub unmatched: Vec<String>,
}

/// Top-level runner: dispatch on page kind and run.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
/// Status lines go through `progress.log`; pass a `LogProgress` to see them.
pub fn run(opts: &RunOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };
    match opts.page {
        PageKind::Effects => run_effects(opts, progress),
        PageKind::Characters => run_characters(opts, progress),
    }
}

/* ---------------- Effects ---------------- */

/// Candidates from tiles (or page text) through the full merge pass.
pub fn build_effects(capture: &EffectsCapture, tables: &EffectTables, opts: ExtractOptions) -> Vec<Effect> {
    let extractor = specs::effects::EffectExtractor::new(tables, opts);
    merge::finalize(extractor.extract_all(capture), tables)
}

pub fn effects_document(effects: Vec<Effect>) -> EffectsDocument {
    EffectsDocument {
        effects,
        source: s!(EFFECTS_SOURCE),
        ts: chrono::Utc::now().timestamp(),
    }
}

fn run_effects(opts: &RunOptions, progress: &mut dyn Progress) -> Result<RunSummary> {
    let capture = store::load_effects_capture(&opts.input)?;
    let tables = EffectTables::default();
    progress.begin(capture.tiles.len());
    let effects = build_effects(&capture, &tables, opts.extract);
    let records = effects.len();

    let path = write_json(&opts.out_path(), &effects_document(effects))?;
    progress.log(&format!("Wrote {records} effects -> {}", path.display()));
    progress.finish();

    Ok(RunSummary { files_written: vec![path], records, unmatched: Vec::new() })
}

/* ---------------- Characters ---------------- */

/// Everything the characters run produces before anything is written.
#[derive(Debug, Default)]
pub struct Roster {
    pub characters: Vec<Character>,
    pub keywords: Vec<String>,
    pub stats_rows: Vec<StatRow>,
    pub report: StatsMergeReport,
}

pub fn build_roster(
    capture: &RosterCapture,
    opts: &RunOptions,
    canon: &CanonMap,
    progress: &mut dyn Progress,
) -> Roster {
    let mut characters = specs::characters::parse_listing(&capture.anchors, opts.limit);
    progress.log(&format!("Found {} characters on the index", characters.len()));
    progress.begin(characters.len());

    let mut per_character: Vec<Vec<String>> = Vec::with_capacity(characters.len());
    for c in characters.iter_mut() {
        match capture.details.get(&c.path) {
            Some(page) => {
                per_character.push(specs::characters::enrich_from_detail(c, page, canon));
                progress.item_done(&c.path);
            }
            None => progress.item_failed(&c.path, "no detail page captured; keeping listing data"),
        }
    }
    let keywords = merge::collect_keywords(per_character);

    let mut stats_rows = Vec::new();
    let mut report = StatsMergeReport::default();
    if opts.include_total_stats {
        match &capture.stats {
            Some(stats) => {
                stats_rows = specs::stats::stats_rows(stats);
                report = merge::merge_stats(&mut characters, &stats_rows);
                progress.log(&format!(
                    "Merged total stats into {}/{} characters",
                    report.merged,
                    characters.len()
                ));
                if !report.unmatched.is_empty() {
                    let preview: Vec<&str> =
                        report.unmatched.iter().take(UNMATCHED_PREVIEW).map(String::as_str).collect();
                    logf!("Unmatched ({}): {}", report.unmatched.len(), preview.join(", "));
                }
            }
            None => logw!("Total stats requested but none captured"),
        }
    }

    progress.finish();

    Roster { characters, keywords, stats_rows, report }
}

fn run_characters(opts: &RunOptions, progress: &mut dyn Progress) -> Result<RunSummary> {
    let capture = store::load_roster_capture(&opts.input)?;
    let canon = match &opts.canon_map_json {
        Some(path) => CanonMap::with_overrides_from(path),
        None => CanonMap::builtin(),
    };

    let roster = build_roster(&capture, opts, &canon, progress);
    let mut written = Vec::new();

    if opts.include_total_stats && !roster.stats_rows.is_empty() {
        let path = write_json(&opts.stats_debug_path(), &roster.stats_rows)?;
        logd!("Wrote {} stats rows -> {}", roster.stats_rows.len(), path.display());
        written.push(path);
    }

    let path = write_json(&opts.out_path(), &roster.characters)?;
    logf!("Wrote {} characters -> {}", roster.characters.len(), path.display());
    written.push(path);

    let path = write_json(&opts.keywords_path(), &roster.keywords)?;
    logf!("Wrote {} keywords -> {}", roster.keywords.len(), path.display());
    written.push(path);

    Ok(RunSummary {
        files_written: written,
        records: roster.characters.len(),
        unmatched: roster.report.unmatched,
    })
}
