// src/merge/effects.rs
//! Effect candidates → final effect list.
//!
//! `merge` is commutative and associative, so folding candidates in any order
//! yields the same record. Evidence only accumulates: a summary never gets
//! shorter, a duration hint never disappears, stacking never turns off.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::config::options::EffectTables;
use crate::core::keys::effect_id;
use crate::core::tokens::push_unique_ci;
use crate::data::Effect;

/// Combine two candidates for the same id.
pub fn merge(existing: Effect, incoming: Effect) -> Effect {
    let summary_order = (existing.summary.chars().count(), &existing.summary)
        .cmp(&(incoming.summary.chars().count(), &incoming.summary));

    let kind = match summary_order {
        Ordering::Greater => existing.kind,
        Ordering::Less => incoming.kind,
        Ordering::Equal => existing.kind.max(incoming.kind),
    };
    let summary = if summary_order == Ordering::Less { incoming.summary } else { existing.summary };

    let name = if name_rank(&incoming.name) < name_rank(&existing.name) {
        incoming.name
    } else {
        existing.name
    };

    Effect {
        id: existing.id,
        name,
        kind,
        summary,
        opposite: pick(existing.opposite, incoming.opposite),
        flip_to: pick(existing.flip_to, incoming.flip_to),
        clearable: existing.clearable && incoming.clearable,
        stacking: existing.stacking || incoming.stacking,
        duration_hint: pick(existing.duration_hint, incoming.duration_hint),
        aliases: union_ci(existing.aliases, incoming.aliases),
        keywords: union_ci(existing.keywords, incoming.keywords),
    }
}

/// Case-insensitive union in a fixed order, so argument order does not matter.
fn union_ci(a: Vec<String>, b: Vec<String>) -> Vec<String> {
    let mut all: Vec<String> = a.into_iter().chain(b).collect();
    all.sort_by(|x, y| (x.to_lowercase(), x).cmp(&(y.to_lowercase(), y)));
    let mut out = Vec::with_capacity(all.len());
    for item in all {
        push_unique_ci(&mut out, item);
    }
    out
}

/// Present beats absent; two different present values resolve by ordering.
fn pick<T: Ord>(a: Option<T>, b: Option<T>) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// Page headings are often rendered all-caps; prefer the mixed-case spelling.
fn name_rank(name: &str) -> (bool, &str) {
    let shouting = name.chars().any(|c| c.is_alphabetic()) && name == name.to_uppercase();
    (shouting, name)
}

/// One record per id, in first-seen order.
pub fn dedup_effects(candidates: Vec<Effect>) -> Vec<Effect> {
    let mut order: Vec<String> = Vec::new();
    let mut by_id: HashMap<String, Effect> = HashMap::new();
    for cand in candidates {
        let merged = match by_id.remove(&cand.id) {
            Some(prev) => merge(prev, cand),
            None => {
                order.push(cand.id.clone());
                cand
            }
        };
        by_id.insert(merged.id.clone(), merged);
    }
    order.into_iter().filter_map(|id| by_id.remove(&id)).collect()
}

/// Drop records that only ever come from page chrome.
pub fn sanity_filter(effects: Vec<Effect>, tables: &EffectTables) -> Vec<Effect> {
    effects
        .into_iter()
        .filter(|e| {
            let keep = !e.id.is_empty()
                && !e.name.trim().is_empty()
                && !tables.bad_id_prefixes.iter().any(|p| e.id.starts_with(p.as_str()))
                && !e.name.to_uppercase().ends_with(" EFFECTS")
                && !tables.is_junk_label(&e.name)
                && !tables.is_section_heading(&e.name);
            if !keep {
                logd!("sanity filter dropped {:?}", e.name);
            }
            keep
        })
        .collect()
}

/// Apply the known opposite and flip tables. Both records must exist.
/// Known opposites overwrite whatever the text said; text opposites are then
/// mirrored onto records that have none, and dropped if they name no record.
pub fn link_known_pairs(effects: &mut [Effect], tables: &EffectTables) {
    let index: HashMap<String, usize> =
        effects.iter().enumerate().map(|(i, e)| (e.id.clone(), i)).collect();

    for (a, b) in &tables.opposite_pairs {
        let (ida, idb) = (effect_id(a), effect_id(b));
        if let (Some(&ia), Some(&ib)) = (index.get(&ida), index.get(&idb)) {
            effects[ia].opposite = Some(idb);
            effects[ib].opposite = Some(ida);
        }
    }

    for (from, to) in &tables.flip_pairs {
        let (idf, idt) = (effect_id(from), effect_id(to));
        if let (Some(&i), true) = (index.get(&idf), index.contains_key(&idt)) {
            effects[i].flip_to = Some(idt);
        }
    }

    let mut dangling = Vec::new();
    let mut mirror = Vec::new();
    for (i, e) in effects.iter().enumerate() {
        let Some(opp) = &e.opposite else { continue };
        match index.get(opp) {
            Some(&j) if j != i => mirror.push((j, e.id.clone())),
            _ => dangling.push(i),
        }
    }
    for i in dangling {
        logd!("{} names unknown opposite {:?}", effects[i].id, effects[i].opposite);
        effects[i].opposite = None;
    }
    for (j, id) in mirror {
        if effects[j].opposite.is_none() {
            effects[j].opposite = Some(id);
        }
    }
}

/// Mark effects that cannot be cleared. Never turns `clearable` back on.
pub fn infer_clearable(effects: &mut [Effect], tables: &EffectTables) {
    for e in effects.iter_mut() {
        let text = format!("{} {}", e.name, e.summary).to_lowercase();
        let by_phrase = tables.unclearable_phrases.iter().any(|p| text.contains(p.as_str()));
        let by_name = tables.unclearable_names.contains(&e.name.to_uppercase());
        if by_phrase || by_name {
            e.clearable = false;
        }
    }
}

/// Aliases: lowercase name first, then the alias table entries for the name.
/// Keywords default to the aliases.
pub fn enrich_aliases(effects: &mut [Effect], tables: &EffectTables) {
    for e in effects.iter_mut() {
        let mut aliases = vec![e.name.to_lowercase()];
        for a in tables.aliases_for(&e.name).iter().chain(e.aliases.iter()) {
            push_unique_ci(&mut aliases, a.clone());
        }
        e.aliases = aliases;
        if e.keywords.is_empty() {
            e.keywords = e.aliases.clone();
        }
    }
}

/// Full post-processing pass over raw candidates.
pub fn finalize(candidates: Vec<Effect>, tables: &EffectTables) -> Vec<Effect> {
    let n = candidates.len();
    let mut effects = sanity_filter(dedup_effects(candidates), tables);
    link_known_pairs(&mut effects, tables);
    infer_clearable(&mut effects, tables);
    enrich_aliases(&mut effects, tables);
    logd!("{n} candidates → {} effects", effects.len());
    effects
}
