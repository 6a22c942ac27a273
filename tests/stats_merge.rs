// tests/stats_merge.rs
use msf_scrape::capture::{DomTable, StatsCapture, TableRow};
use msf_scrape::core::keys::name_key;
use msf_scrape::data::{Character, StatRow, StatValue};
use msf_scrape::merge::characters::merge_stats;
use msf_scrape::specs::stats::{canonical_header, norm_header, parse_stats_csv, parse_stats_tables, stats_rows};
use pretty_assertions::assert_eq;

fn character(name: &str, path: &str) -> Character {
    Character { name: name.into(), path: path.into(), ..Character::default() }
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn rachel_summers_gets_power_from_csv() {
    let rows = parse_stats_csv("Name,Power,Health\nRachel Summers,\"12,345\",\"250,000\"\n");
    let mut roster = vec![character("Rachel Summers", "rachel-summers")];

    let report = merge_stats(&mut roster, &rows);

    assert_eq!(report.merged, 1);
    assert!(report.unmatched.is_empty());
    assert_eq!(roster[0].power, Some(12345));
    assert_eq!(roster[0].stats["POWER"], StatValue::Int(12345));
    assert_eq!(roster[0].stats["HEALTH"], StatValue::Int(250_000));
}

#[test]
fn unmatched_characters_are_reported_not_raised() {
    let rows = vec![StatRow {
        name: "Storm".into(),
        name_key: name_key("Storm"),
        slug: None,
        values: [("POWER".to_string(), StatValue::coerce("9,000"))].into_iter().collect(),
    }];
    let mut roster = vec![character("Nobody Known", "nobody-known"), character("Storm", "storm")];

    let report = merge_stats(&mut roster, &rows);

    assert_eq!(report.unmatched, vec!["Nobody Known"]);
    assert!(roster[0].stats.is_empty());
    assert_eq!(roster[0].power, None);
    assert_eq!(roster[1].power, Some(9000));
}

#[test]
fn path_and_slug_fallbacks() {
    let rows = vec![
        StatRow { name: "Bishop".into(), name_key: name_key("Bishop"), ..StatRow::default() },
        StatRow {
            name: "Cap WWII".into(),
            name_key: name_key("Cap WWII"),
            slug: Some("captain-america-wwii".into()),
            values: [("SPEED".to_string(), StatValue::Int(120))].into_iter().collect(),
        },
    ];
    let mut roster = vec![
        character("Bishop (Classic)", "bishop"),
        character("Captain America (WWII)", "captain-america-wwii"),
    ];

    let report = merge_stats(&mut roster, &rows);

    assert_eq!(report.merged, 2);
    assert_eq!(roster[1].stats["SPEED"], StatValue::Int(120));
    assert_eq!(roster[1].power, None);
}

#[test]
fn csv_headers_are_canonicalized() {
    assert_eq!(norm_header("  Total\u{00A0}Power "), "total power");
    assert_eq!(canonical_header("Total Power"), "POWER");
    assert_eq!(canonical_header("Armour"), "ARMOR");
    assert_eq!(canonical_header("Crit Damage"), "CRIT_DAMAGE");
    assert_eq!(canonical_header(" gear tier "), "GEAR_TIER");
}

#[test]
fn csv_name_column_falls_back_past_rank() {
    let rows = parse_stats_csv("Rank,Toon,Speed,Resist\n1,Storm,\"1,234\",n/a\n2,,5,5\n");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Storm");
    assert_eq!(rows[0].name_key, "storm");
    assert_eq!(rows[0].values["SPEED"], StatValue::Int(1234));
    assert_eq!(rows[0].values["RESISTANCE"], StatValue::Text("n/a".into()));
    assert_eq!(rows[0].values["RANK"], StatValue::Int(1));
}

#[test]
fn csv_without_name_column_is_empty() {
    assert!(parse_stats_csv("#,Rank\n1,2\n").is_empty());
    assert!(parse_stats_csv("").is_empty());
}

#[test]
fn values_coerce_to_numbers_when_they_look_numeric() {
    assert_eq!(StatValue::coerce("12,345"), StatValue::Int(12345));
    assert_eq!(StatValue::coerce("-3"), StatValue::Int(-3));
    assert_eq!(StatValue::coerce("12.5%"), StatValue::Float(12.5));
    assert_eq!(StatValue::coerce("—"), StatValue::Text("—".into()));
    assert_eq!(StatValue::coerce("1.2.3"), StatValue::Text("1.2.3".into()));
}

fn stats_table() -> DomTable {
    DomTable {
        headers: strs(&["#", "Character", "Power", "Health", "Damage", "Armor"]),
        rows: vec![
            TableRow {
                cells: strs(&["1", "Rachel Summers", "12,345", "10,000", "2,000", "500"]),
                link: Some("/en/characters/Rachel-Summers".into()),
            },
            TableRow { cells: strs(&["lonely"]), link: None },
            TableRow { cells: strs(&["2", " ", "1", "1", "1", "1"]), link: None },
        ],
    }
}

#[test]
fn widest_scoring_table_wins() {
    let narrow = DomTable { headers: strs(&["Name", "Power"]), rows: vec![] };
    let chrome = DomTable { headers: strs(&["A", "B", "C", "D", "E", "F", "G"]), rows: vec![] };
    let rows = parse_stats_tables(&[narrow, stats_table(), chrome]);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Rachel Summers");
    assert_eq!(rows[0].slug.as_deref(), Some("rachel-summers"));
    assert_eq!(rows[0].values["POWER"], StatValue::Int(12345));
    assert_eq!(rows[0].values["ARMOR"], StatValue::Int(500));
}

#[test]
fn table_is_used_when_csv_yields_nothing() {
    let capture = StatsCapture { csv: Some("#\n1\n".into()), tables: vec![stats_table()] };
    let rows = stats_rows(&capture);
    assert_eq!(rows.len(), 1);

    let mut roster = vec![character("Rachel Summers", "rachel-summers")];
    merge_stats(&mut roster, &rows);
    assert_eq!(roster[0].power, Some(12345));
    assert!(!roster[0].stats.contains_key("#"));
}
