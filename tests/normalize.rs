// tests/normalize.rs
use msf_scrape::core::canon::CanonMap;
use msf_scrape::core::tokens::{normalize, normalize_all};
use proptest::prelude::*;

#[test]
fn letter_spaced_tokens_collapse_to_canonical_form() {
    let canon = CanonMap::builtin();
    assert_eq!(normalize("H E L L F I R E C L U B", &canon), "Hellfire Club");
    assert_eq!(normalize("D E F E N S E   U P", &canon), "Defense Up");
}

#[test]
fn letter_spaced_unknown_token_is_title_cased() {
    let canon = CanonMap::empty();
    assert_eq!(normalize("K R A K O A", &canon), "Krakoa");
}

#[test]
fn invisible_characters_are_ignored() {
    let canon = CanonMap::builtin();
    assert_eq!(normalize("\u{200B}Heal\u{00A0}Block\u{FEFF}", &canon), "Heal Block");
    assert_eq!(normalize(" \u{200D} ", &canon), "");
}

#[test]
fn separators_and_acronyms() {
    let canon = CanonMap::builtin();
    assert_eq!(normalize("x-men", &canon), "X-Men");
    assert_eq!(normalize("young_avengers", &canon), "Young Avengers");
    assert_eq!(normalize("aim", &canon), "A.I.M.");
    assert_eq!(normalize("Immortal X-Men", &canon), "Immortal X Men");
    assert_eq!(normalize("cosmic ai", &canon), "Cosmic AI");
}

#[test]
fn letter_spaced_acronym_stays_upper() {
    let canon = CanonMap::builtin();
    assert_eq!(normalize("A I", &canon), "AI");
    assert_eq!(normalize("i s o", &canon), "ISO");
}

#[test]
fn single_letters_between_separators_are_one_word() {
    let canon = CanonMap::builtin();
    assert_eq!(normalize("a-b", &canon), "Ab");
    assert_eq!(normalize("spider-x-y", &canon), "Spider Xy");
    assert_eq!(normalize("Spider Xy", &canon), "Spider Xy");
}

#[test]
fn separated_canon_words_only_apply_to_whole_phrase() {
    let canon = CanonMap::builtin();
    assert_eq!(normalize("xmen", &canon), "X-Men");
    assert_eq!(normalize("blue xmen", &canon), "Blue Xmen");
}

#[test]
fn unknown_phrase_is_title_cased_per_word() {
    let canon = CanonMap::builtin();
    assert_eq!(normalize("new WARRIORS", &canon), "New Warriors");
}

#[test]
fn normalize_all_dedups_ignoring_case() {
    let canon = CanonMap::builtin();
    let got = normalize_all(["defense up", "DEFENSEUP", "", "Bleed", "D E F E N S E U P"], &canon);
    assert_eq!(got, vec!["Defense Up", "Bleed"]);
}

#[test]
fn known_outputs_are_fixed_points() {
    let canon = CanonMap::builtin();
    for raw in ["X-Men", "A.I.M.", "Hellfire Club", "Immortal X Men", "Speed Up", "Cosmic AI"] {
        assert_eq!(normalize(raw, &canon), raw, "{raw}");
    }
}

fn phrase() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(("[a-zA-Z]{1,6}", prop::sample::select(vec![" ", "-", "_"])), 1..4),
        any::<bool>(),
    )
        .prop_map(|(words, spaced)| {
            let mut out = String::new();
            for (i, (word, sep)) in words.iter().enumerate() {
                if i > 0 {
                    out.push_str(sep);
                }
                if i == 0 && spaced {
                    let letters: Vec<String> = word.chars().map(String::from).collect();
                    out.push_str(&letters.join(" "));
                } else {
                    out.push_str(word);
                }
            }
            out
        })
}

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in phrase()) {
        let canon = CanonMap::builtin();
        let once = normalize(&raw, &canon);
        prop_assert_eq!(normalize(&once, &canon), once);
    }
}
