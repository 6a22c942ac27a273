// src/cli.rs
use std::path::PathBuf;

use crate::config::options::{PageKind, RunOptions};
use crate::error::{Error, Result};
use crate::progress::LogProgress;
use crate::runner::{self, RunSummary};

pub const HELP: &str = "\
msf_scrape - turn captured MARVEL Strike Force pages into JSON

USAGE:
  msf_scrape effects    --input <capture.json> [--output <path>] [--min-tiles N]
  msf_scrape characters --input <capture.json> [--output <path>]
                        [--keywords-out <path>] [--limit N] [--no-total-stats]
                        [--canon-map-json <path>]

OPTIONS:
  -i, --input <path>        Captured page material (JSON)
  -o, --output <path>       Output file (default: output/<page file>)
      --min-tiles <N>       Effects: below N parsed tiles, segment page text (default 10)
      --keywords-out <path> Characters: keyword list (default: next to output)
      --limit <N>           Characters: max characters, 0 = all (default 10)
      --no-total-stats      Characters: skip the total-stats merge
      --canon-map-json <p>  Characters: extra canonical spellings (JSON)
  -h, --help                Show this help

Set RUST_LOG=debug for per-record detail.";

pub enum Command {
    Run(RunOptions),
    Help,
}

/// Parse process arguments and run.
pub fn run() -> Result<()> {
    match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            println!("{HELP}");
            Ok(())
        }
        Command::Run(opts) => {
            let mut progress = LogProgress::default();
            let RunSummary { files_written, records, unmatched } = runner::run(&opts, Some(&mut progress))?;
            logd!("{records} records, {} unmatched, files: {files_written:?}", unmatched.len());
            Ok(())
        }
    }
}

pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut args = args.into_iter().map(<I::Item as Into<String>>::into);

    let page = match args.next().as_deref() {
        None | Some("-h") | Some("--help") => return Ok(Command::Help),
        Some("effects") => PageKind::Effects,
        Some("characters") => PageKind::Characters,
        Some(other) => return Err(usage(format!("Unknown command: {other}"))),
    };

    let mut input: Option<PathBuf> = None;
    let mut opts = RunOptions::new(page, PathBuf::new());

    while let Some(a) = args.next() {
        match a.as_str() {
            "-i" | "--input" => input = Some(PathBuf::from(value(&mut args, &a)?)),
            "-o" | "--output" => opts.output = Some(PathBuf::from(value(&mut args, &a)?)),
            "--min-tiles" if page == PageKind::Effects => {
                opts.extract.fallback_min_tiles = number(&value(&mut args, &a)?, &a)?;
            }
            "--keywords-out" if page == PageKind::Characters => {
                opts.keywords_out = Some(PathBuf::from(value(&mut args, &a)?));
            }
            "--limit" if page == PageKind::Characters => {
                let n = number(&value(&mut args, &a)?, &a)?;
                opts.limit = (n > 0).then_some(n);
            }
            "--no-total-stats" if page == PageKind::Characters => opts.include_total_stats = false,
            "--canon-map-json" if page == PageKind::Characters => {
                opts.canon_map_json = Some(PathBuf::from(value(&mut args, &a)?));
            }
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(usage(format!("Unknown arg: {a}"))),
        }
    }

    opts.input = input.ok_or_else(|| usage(s!("Missing --input")))?;
    Ok(Command::Run(opts))
}

/* ---------- helpers ---------- */

fn usage(msg: String) -> Error {
    Error::Usage(join!(&msg, "\n\n", HELP))
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next().ok_or_else(|| usage(format!("Missing value for {flag}")))
}

fn number(v: &str, flag: &str) -> Result<usize> {
    v.trim()
        .parse()
        .map_err(|_| usage(format!("Invalid number for {flag}: {v}")))
}
