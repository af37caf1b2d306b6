use anyhow::Result;
use clap::Parser;
use log::info;
use pgnfen::pgn::{final_position, read_game, tag_or_placeholder, SEVEN_TAG_ROSTER};
use pgnfen::replay::SkippedMove;
use pgnfen::san::Outcome;
use pgnfen::{fen, OnError, ReplayOptions, Resolution};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay PGN games and print their final positions", long_about = None)]
struct Args {
    /// PGN files, one game each
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Fail on moves more than one piece could have made
    #[arg(long)]
    strict: bool,

    /// Skip unreadable moves instead of stopping the game
    #[arg(long)]
    skip_errors: bool,

    /// Print one JSON object per game
    #[arg(long)]
    json: bool,

    /// Also print the final board as a grid
    #[arg(long)]
    board: bool,

    /// Worker threads for multiple files
    #[arg(long, default_value_t = 1)]
    threads: usize,
}

#[derive(Serialize)]
struct GameReport {
    file: String,
    tags: BTreeMap<&'static str, String>,
    final_position: String,
    plies: usize,
    outcome: Option<Outcome>,
    complete: bool,
    error: Option<String>,
    skipped: Vec<SkippedMove>,
    #[serde(skip)]
    grid: String,
}

fn process(path: &Path, opts: &ReplayOptions) -> Result<GameReport> {
    let game = read_game(path)?;
    let tags = SEVEN_TAG_ROSTER
        .iter()
        .map(|&name| (name, tag_or_placeholder(&game, name).to_string()))
        .collect();
    let mut report = GameReport {
        file: path.display().to_string(),
        tags,
        final_position: String::new(),
        plies: 0,
        outcome: None,
        complete: true,
        error: None,
        skipped: Vec::new(),
        grid: String::new(),
    };
    match final_position(&game, opts) {
        Ok(r) => {
            report.final_position = r.placement;
            report.plies = r.plies;
            report.outcome = r.outcome;
            report.skipped = r.skipped;
            report.grid = r.board.to_string();
        }
        Err(e) => {
            report.final_position = fen::placement(&e.partial);
            report.plies = e.ply - 1;
            report.complete = false;
            report.grid = e.partial.to_string();
            report.error = Some(e.to_string());
        }
    }
    Ok(report)
}

fn print_report(r: &GameReport, show_board: bool) {
    for name in SEVEN_TAG_ROSTER {
        println!("{}: {}", name, r.tags.get(name).map(String::as_str).unwrap_or_default());
    }
    println!("Final Position:");
    if r.complete {
        println!("{}", r.final_position);
    } else {
        println!("{} (incomplete)", r.final_position);
    }
    if let Some(err) = &r.error {
        eprintln!("{}: {}", r.file, err);
    }
    for s in &r.skipped {
        eprintln!("{}: skipped ply {} ({}): {}", r.file, s.ply, s.token, s.reason);
    }
    if show_board {
        println!();
        print!("{}", r.grid);
    }
    println!();
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let opts = ReplayOptions {
        resolution: if args.strict { Resolution::Strict } else { Resolution::FirstMatch },
        on_error: if args.skip_errors { OnError::Skip } else { OnError::Abort },
    };
    info!("replaying {} file(s) with {:?}", args.files.len(), opts);

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let results: Vec<Result<GameReport>> = pool.install(|| args.files.par_iter().map(|p| process(p, &opts)).collect());

    let mut failures = 0usize;
    for res in results {
        match res {
            Ok(report) => {
                if !report.complete {
                    failures += 1;
                }
                if args.json {
                    println!("{}", serde_json::to_string(&report)?);
                } else {
                    print_report(&report, args.board);
                }
            }
            Err(e) => {
                failures += 1;
                eprintln!("{e:#}");
            }
        }
    }
    if failures > 0 {
        anyhow::bail!("{} of {} game(s) incomplete", failures, args.files.len());
    }
    Ok(())
}
