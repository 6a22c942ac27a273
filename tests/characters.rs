// tests/characters.rs
use msf_scrape::capture::{AbilitySection, Anchor, DetailPage, TraitLink};
use msf_scrape::core::canon::CanonMap;
use msf_scrape::merge::characters::collect_keywords;
use msf_scrape::specs::characters::{enrich_from_detail, parse_listing};
use pretty_assertions::assert_eq;

fn anchor(href: &str, text: &str) -> Anchor {
    Anchor { href: href.into(), text: text.into(), image: String::new() }
}

fn index() -> Vec<Anchor> {
    vec![
        anchor("https://marvelstrikeforce.com/en/characters", "All Characters"),
        anchor("/en/characters/Rachel-Summers", "Rachel\u{00A0}Summers"),
        anchor("/en/characters/rachel-summers/", "Rachel Summers again"),
        anchor("/en/characters/trait/Mutant", "Mutant"),
        anchor("/en/news/some-post", "News"),
        anchor("", "Empty"),
        anchor("/en/characters/iron-man", ""),
    ]
}

#[test]
fn listing_keeps_one_record_per_slug_in_order() {
    let got = parse_listing(&index(), None);
    let paths: Vec<&str> = got.iter().map(|c| c.path.as_str()).collect();

    assert_eq!(paths, vec!["rachel-summers", "iron-man"]);
    assert_eq!(got[0].name, "Rachel Summers");
    assert_eq!(got[0].url, "/en/characters/Rachel-Summers");
    assert_eq!(got[1].name, "Iron Man");
    assert!(got[1].stats.is_empty());
    assert_eq!(got[1].power, None);
}

#[test]
fn listing_respects_limit() {
    assert_eq!(parse_listing(&index(), Some(1)).len(), 1);
}

fn detail() -> DetailPage {
    DetailPage {
        og_title: "Rachel Summers | MARVEL Strike Force | Scopely".into(),
        og_image: " https://cdn.example/rachel.png ".into(),
        h1: "RACHEL SUMMERS".into(),
        trait_links: vec![
            TraitLink { href: "/en/characters/trait/HellfireClub".into(), text: "x".into() },
            TraitLink { href: String::new(), text: "H E L L F I R E C L U B".into() },
            TraitLink { href: "/en/characters/trait/Mutant/".into(), text: String::new() },
        ],
        abilities: vec![
            AbilitySection {
                name: "Psionic Blast".into(),
                image: "basic.png".into(),
                description: "Attack primary target. ".into(),
                energy_full: 0,
                highlights: vec!["D E F E N S E   U P".into(), "Bleed".into()],
            },
            AbilitySection::default(),
            AbilitySection {
                name: "Phoenix Force".into(),
                description: "Apply Defense Down.".into(),
                energy_full: 3,
                highlights: vec!["defense up".into(), "defense down".into()],
                ..AbilitySection::default()
            },
        ],
    }
}

#[test]
fn detail_page_fills_the_record() {
    let canon = CanonMap::builtin();
    let mut c = parse_listing(&index(), Some(1)).remove(0);

    let keywords = enrich_from_detail(&mut c, &detail(), &canon);

    assert_eq!(c.name, "Rachel Summers");
    assert_eq!(c.image_url, "https://cdn.example/rachel.png");
    assert_eq!(c.traits, vec!["Hellfire Club", "Mutant"]);
    assert_eq!(c.abilities.len(), 2);
    assert_eq!(c.abilities[0].energy_cost, None);
    assert_eq!(c.abilities[0].description, "Attack primary target.");
    assert_eq!(c.abilities[1].energy_cost, Some(3));
    assert_eq!(keywords, vec!["Defense Up", "Bleed", "Defense Down"]);
}

#[test]
fn empty_detail_page_keeps_listing_values() {
    let canon = CanonMap::builtin();
    let mut c = parse_listing(&index(), Some(1)).remove(0);
    let before = c.clone();

    let keywords = enrich_from_detail(&mut c, &DetailPage::default(), &canon);

    assert!(keywords.is_empty());
    assert_eq!(c, before);
}

#[test]
fn h1_is_used_without_og_title() {
    let canon = CanonMap::builtin();
    let mut c = parse_listing(&index(), Some(1)).remove(0);
    let page = DetailPage { h1: "Rachel Summers (Phoenix)".into(), ..DetailPage::default() };

    enrich_from_detail(&mut c, &page, &canon);
    assert_eq!(c.name, "Rachel Summers (Phoenix)");
}

#[test]
fn global_keywords_are_deduped_and_sorted_ignoring_case() {
    let got = collect_keywords(vec![
        vec!["Defense Up".to_string(), "bleed".to_string()],
        vec!["Bleed".to_string(), "Accursed".to_string()],
    ]);
    assert_eq!(got, vec!["Accursed", "bleed", "Defense Up"]);
}
