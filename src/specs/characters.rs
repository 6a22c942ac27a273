// src/specs/characters.rs
//! Reading *spec* for the character index and detail pages.
//!
//! - Index: anchors → one `Character` per unique slug, discovery order kept.
//! - Detail: clean name, image, traits, abilities and highlighted keywords.

use crate::capture::{AbilitySection, Anchor, DetailPage, TraitLink};
use crate::core::canon::CanonMap;
use crate::core::keys::slug_from_url;
use crate::core::sanitize::{clean_text, strip_site_suffix, title_case};
use crate::core::tokens::{normalize, normalize_all, push_unique_ci};
use crate::data::{Ability, Character};

/// Characters in first-seen order, one per slug. `limit` caps the count.
pub fn parse_listing(anchors: &[Anchor], limit: Option<usize>) -> Vec<Character> {
    let mut out: Vec<Character> = Vec::new();

    for a in anchors {
        if limit.is_some_and(|n| out.len() >= n) {
            break;
        }
        let href = a.href.trim();
        if href.is_empty()
            || href.trim_end_matches('/').ends_with("/characters")
            || href.contains("/trait/")
            || !href.contains("/characters/")
        {
            continue;
        }

        let slug = slug_from_url(href);
        if slug.is_empty() || out.iter().any(|c| c.path == slug) {
            continue;
        }

        let text = clean_text(&a.text);
        let name = if text.is_empty() { title_case(&slug.replace('-', " ")) } else { text };

        out.push(Character {
            name,
            path: slug,
            url: s!(href),
            image_url: a.image.trim().to_string(),
            ..Character::default()
        });
    }
    out
}

/// Fill `c` from its detail page and return the page's highlighted keywords.
/// Missing pieces leave the listing values in place.
pub fn enrich_from_detail(c: &mut Character, page: &DetailPage, canon: &CanonMap) -> Vec<String> {
    let from_meta = strip_site_suffix(&clean_text(&page.og_title));
    let name = if !from_meta.is_empty() { from_meta } else { clean_text(&page.h1) };
    if !name.is_empty() {
        c.name = name;
    }

    let image = page.og_image.trim();
    if !image.is_empty() {
        c.image_url = s!(image);
    }

    let traits = extract_traits(&page.trait_links, canon);
    if !traits.is_empty() {
        c.traits = traits;
    }

    let (abilities, keywords) = extract_abilities(&page.abilities, canon);
    if !abilities.is_empty() {
        c.abilities = abilities;
    }
    keywords
}

/// Trait names from trait links: the `/trait/<Token>` segment when present,
/// else the link text.
pub fn extract_traits(links: &[TraitLink], canon: &CanonMap) -> Vec<String> {
    let mut out = Vec::new();
    for link in links {
        let mut token = s!();
        if link.href.contains("/trait/") {
            let last = link.href.trim_end_matches('/').rsplit('/').next().unwrap_or("");
            token = normalize(last, canon);
        }
        if token.is_empty() {
            token = normalize(&link.text, canon);
        }
        if !token.is_empty() {
            push_unique_ci(&mut out, token);
        }
    }
    out
}

/// Abilities plus the normalized highlighted terms found in their text.
pub fn extract_abilities(sections: &[AbilitySection], canon: &CanonMap) -> (Vec<Ability>, Vec<String>) {
    let mut abilities = Vec::new();
    let mut keywords: Vec<String> = Vec::new();

    for sec in sections {
        for token in normalize_all(&sec.highlights, canon) {
            push_unique_ci(&mut keywords, token);
        }

        let name = clean_text(&sec.name);
        let description = sec.description.trim().to_string();
        if name.is_empty() && description.is_empty() {
            continue;
        }
        abilities.push(Ability {
            name,
            image_url: sec.image.trim().to_string(),
            description,
            energy_cost: (sec.energy_full > 0).then_some(sec.energy_full as u32),
        });
    }
    (abilities, keywords)
}
