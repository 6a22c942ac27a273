// tests/runner.rs
use std::fs;

use msf_scrape::cli::{Command, parse_args};
use msf_scrape::config::options::{PageKind, RunOptions};
use msf_scrape::data::{Character, EffectKind, EffectsDocument, StatRow};
use msf_scrape::progress::Progress;
use msf_scrape::runner;
use serde_json::json;

#[test]
fn effects_run_writes_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("effects.json");
    let capture = json!({
        "tiles": [
            {"title": "Defense Down", "body": "Reduces Defense.\nExpires: End of Turn\nOpposite: Defense Up"},
            {"title": "Defense Up", "body": "Increases Defense."},
            {"title": "POSITIVE EFFECTS", "body": ""}
        ]
    });
    fs::write(&input, capture.to_string()).unwrap();

    let mut opts = RunOptions::new(PageKind::Effects, &input);
    opts.output = Some(dir.path().join("out").join("effect_data.json"));
    let summary = runner::run(&opts, None).unwrap();

    assert_eq!(summary.records, 2);
    let text = fs::read_to_string(&summary.files_written[0]).unwrap();
    let doc: EffectsDocument = serde_json::from_str(&text).unwrap();
    assert_eq!(doc.source, "msf_effects");
    assert!(doc.ts > 0);

    let down = doc.effects.iter().find(|e| e.id == "DEFENSE_DOWN").unwrap();
    assert_eq!(down.kind, EffectKind::Debuff);
    assert_eq!(down.opposite.as_deref(), Some("DEFENSE_UP"));
    assert_eq!(down.flip_to.as_deref(), Some("DEFENSE_UP"));

    let raw: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(raw["effects"][0]["duration_hint"], "end_of_turn");
}

#[test]
fn characters_run_writes_roster_keywords_and_stats_rows() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("roster.json");
    let canon_file = dir.path().join("canon.json");
    fs::write(&canon_file, "not json").unwrap();
    let capture = json!({
        "anchors": [
            {"href": "/en/characters/rachel-summers", "text": "Rachel Summers"},
            {"href": "/en/characters/nobody", "text": "Nobody"}
        ],
        "details": {
            "rachel-summers": {
                "og_title": "Rachel Summers | MARVEL Strike Force",
                "trait_links": [{"href": "/trait/HellfireClub"}],
                "abilities": [{"name": "Blast", "energy_full": 2, "highlights": ["B L E E D"]}]
            }
        },
        "stats": {"csv": "Name,Power\nRachel Summers,\"12,345\"\n"}
    });
    fs::write(&input, capture.to_string()).unwrap();

    let mut opts = RunOptions::new(PageKind::Characters, &input);
    opts.output = Some(dir.path().join("characters_min.json"));
    opts.canon_map_json = Some(canon_file);
    let summary = runner::run(&opts, None).unwrap();

    assert_eq!(summary.records, 2);
    assert_eq!(summary.unmatched, vec!["Nobody"]);

    let roster: Vec<Character> =
        serde_json::from_str(&fs::read_to_string(dir.path().join("characters_min.json")).unwrap()).unwrap();
    assert_eq!(roster[0].power, Some(12345));
    assert_eq!(roster[0].traits, vec!["Hellfire Club"]);
    assert_eq!(roster[0].abilities[0].energy_cost, Some(2));
    assert_eq!(roster[1].power, None);

    let keywords: Vec<String> =
        serde_json::from_str(&fs::read_to_string(dir.path().join("ability_keywords.json")).unwrap()).unwrap();
    assert_eq!(keywords, vec!["Bleed"]);

    let rows: Vec<StatRow> =
        serde_json::from_str(&fs::read_to_string(dir.path().join("hero_total_stats_rows.json")).unwrap()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name_key, "rachelsummers");
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let opts = RunOptions::new(PageKind::Effects, dir.path().join("nope.json"));
    assert!(runner::run(&opts, None).is_err());
}

#[test]
fn cli_arguments() {
    let Command::Run(opts) =
        parse_args(["characters", "--input", "cap.json", "--limit", "0", "--no-total-stats"]).unwrap()
    else {
        panic!("expected a run command");
    };
    assert_eq!(opts.page, PageKind::Characters);
    assert_eq!(opts.limit, None);
    assert!(!opts.include_total_stats);
    assert!(opts.out_path().ends_with("characters_min.json"));

    let Command::Run(opts) = parse_args(["effects", "-i", "cap.json", "--min-tiles", "3"]).unwrap() else {
        panic!("expected a run command");
    };
    assert_eq!(opts.extract.fallback_min_tiles, 3);

    assert!(matches!(parse_args(Vec::<String>::new()).unwrap(), Command::Help));
    assert!(parse_args(["effects"]).is_err());
    assert!(parse_args(["effects", "-i", "x", "--limit", "2"]).is_err());
    assert!(parse_args(["teams", "-i", "x"]).is_err());
}

#[derive(Default)]
struct Recorder {
    total: usize,
    lines: Vec<String>,
    done: Vec<String>,
    failed: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }
    fn item_done(&mut self, slug: &str) {
        self.done.push(slug.to_string());
    }
    fn item_failed(&mut self, slug: &str, _reason: &str) {
        self.failed.push(slug.to_string());
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

#[test]
fn characters_run_reports_progress() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("roster.json");
    let capture = json!({
        "anchors": [
            {"href": "/en/characters/storm", "text": "Storm"},
            {"href": "/en/characters/nobody", "text": "Nobody"}
        ],
        "details": {"storm": {"h1": "Storm"}}
    });
    fs::write(&input, capture.to_string()).unwrap();

    let mut opts = RunOptions::new(PageKind::Characters, &input);
    opts.output = Some(dir.path().join("characters_min.json"));
    opts.include_total_stats = false;
    let mut rec = Recorder::default();
    runner::run(&opts, Some(&mut rec)).unwrap();

    assert_eq!(rec.total, 2);
    assert_eq!(rec.done, vec!["storm"]);
    assert_eq!(rec.failed, vec!["nobody"]);
    assert!(rec.lines.iter().any(|l| l.contains("Found 2 characters")));
    assert!(rec.finished);
}
