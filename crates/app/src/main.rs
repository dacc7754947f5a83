use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use kana_core::model::{
    PoolSource, PracticeConfigDraft, PracticeMode, QuestionLimit, Script, ScriptFilter,
};
use kana_core::{Catalog, GridKind};
use services::session::{empty_pool_message, feedback_text, result_text};
use services::{
    AnswerOutcome, ProgressStore, SessionEngine, SessionPhase, SessionStep, StatisticsSnapshot,
};
use storage::{DEFAULT_STATS_PATH, JsonFileRepository};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidValue { flag: &'static str, raw: String },
    InvalidSeed { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown command: {cmd}"),
            ArgsError::InvalidValue { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_flag<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<T, ArgsError> {
    let value = require_value(args, flag)?;
    value
        .parse()
        .map_err(|_| ArgsError::InvalidValue { flag, raw: value })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Practice,
    Stats,
    Table,
}

#[derive(Debug)]
struct Args {
    command: Command,
    draft: PracticeConfigDraft,
    stats_path: PathBuf,
    seed: Option<u64>,
}

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        let mut stats_path = std::env::var("KANA_STATS_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_STATS_PATH), PathBuf::from);
        let mut seed = match std::env::var("KANA_SEED") {
            Ok(raw) => Some(
                raw.parse::<u64>()
                    .map_err(|_| ArgsError::InvalidSeed { raw })?,
            ),
            Err(_) => None,
        };
        let mut draft = PracticeConfigDraft::new();

        let mut args = std::env::args().skip(1).peekable();
        let command = match args.peek().map(String::as_str) {
            Some("practice") => Command::Practice,
            Some("stats") => Command::Stats,
            Some("table") => Command::Table,
            Some(other) if !other.starts_with('-') => {
                return Err(ArgsError::UnknownCommand(other.to_owned()));
            }
            _ => Command::Practice,
        };
        if args.peek().is_some_and(|a| !a.starts_with('-')) {
            args.next();
        }

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--mode" => draft.mode = parse_flag::<PracticeMode>(&mut args, "--mode")?,
                "--script" => draft.script = parse_flag::<ScriptFilter>(&mut args, "--script")?,
                "--source" => draft.source = parse_flag::<PoolSource>(&mut args, "--source")?,
                "--limit" => {
                    draft.question_limit =
                        parse_flag::<QuestionLimit>(&mut args, "--limit")?.count();
                }
                "--stats" => stats_path = PathBuf::from(require_value(&mut args, "--stats")?),
                "--seed" => {
                    let value = require_value(&mut args, "--seed")?;
                    let parsed = value
                        .parse::<u64>()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    seed = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            command,
            draft,
            stats_path,
            seed,
        })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  kana-drill practice [options]");
    eprintln!("  kana-drill stats    [--stats <path>]");
    eprintln!("  kana-drill table    [--script hiragana|katakana|both]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --mode kana|romaji|mixed          Question direction (default: mixed)");
    eprintln!("  --script hiragana|katakana|both   Scripts to drill (default: both)");
    eprintln!("  --source all|mastered             Symbol pool (default: all)");
    eprintln!("  --limit 10|20|50|<n>|unlimited    Questions per session (default: unlimited)");
    eprintln!("  --stats <path>                    Progress file (default: {DEFAULT_STATS_PATH})");
    eprintln!("  --seed <n>                        Seed for a reproducible session");
    eprintln!("  -h, --help                        Show this help");
    eprintln!();
    eprintln!("During practice: 1-4 answers, Enter or n continues, s stops, q quits.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  KANA_STATS_PATH, KANA_SEED, RUST_LOG");
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse()?;
    log::debug!("command {:?}", args.command);
    let catalog = Arc::new(Catalog::standard());

    match args.command {
        Command::Table => {
            print_tables(&catalog, args.draft.script);
            Ok(())
        }
        Command::Stats => {
            let store = open_store(&args.stats_path);
            print_stats(&StatisticsSnapshot::from_record(store.record(), &catalog));
            Ok(())
        }
        Command::Practice => {
            let config = args.draft.validate()?;
            let mut store = open_store(&args.stats_path);
            let mut engine = match args.seed {
                Some(seed) => SessionEngine::seeded(catalog, seed),
                None => SessionEngine::new(catalog),
            };

            let step = engine.start_session(config, &store);
            practice(&mut engine, &mut store, step)?;
            Ok(())
        }
    }
}

fn open_store(path: &Path) -> ProgressStore {
    let repo = JsonFileRepository::new(path);
    log::info!("progress file: {}", repo.path().display());
    ProgressStore::open(Arc::new(repo))
}

fn practice(
    engine: &mut SessionEngine,
    store: &mut ProgressStore,
    first: SessionStep,
) -> io::Result<()> {
    if !show_step(engine, &first) {
        return Ok(());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            engine.exit_session();
            return Ok(());
        };

        match (engine.phase(), line.trim()) {
            (_, "q") => {
                engine.exit_session();
                return Ok(());
            }
            (_, "s") => {
                if engine.view().is_some_and(|v| !v.can_stop) {
                    println!("Stopping is only available in unlimited sessions.");
                    continue;
                }
                if let Some(report) = engine.stop_session() {
                    println!("{}", result_text(&report));
                    return Ok(());
                }
            }
            (SessionPhase::AwaitingAnswer, choice) => {
                let Some(index) = choice
                    .parse::<usize>()
                    .ok()
                    .filter(|n| (1..=4).contains(n))
                else {
                    println!("Pick an option from 1 to 4.");
                    continue;
                };
                if let AnswerOutcome::Scored(feedback) = engine.answer(index - 1, store) {
                    println!("{}", feedback_text(&feedback));
                    if let Some(mastered) = &feedback.newly_mastered {
                        println!("Mastered: {mastered}");
                    }
                    for warning in &feedback.warnings {
                        eprintln!("{warning}");
                    }
                }
            }
            (SessionPhase::Scored, "" | "n") => {
                let Some(step) = engine.next_question() else {
                    continue;
                };
                if !show_step(engine, &step) {
                    return Ok(());
                }
            }
            _ => println!("Press Enter for the next question."),
        }
    }
}

/// Print a step; returns `false` once the session is over.
fn show_step(engine: &SessionEngine, step: &SessionStep) -> bool {
    match step {
        SessionStep::Asked(_) => {
            let Some(view) = engine.view() else {
                return false;
            };
            println!();
            println!("[{}] {}", view.counter, view.subtitle);
            println!("  {}", view.prompt);
            for (i, option) in view.options.iter().enumerate() {
                println!("  {}) {option}", i + 1);
            }
            true
        }
        SessionStep::Finished(report) => {
            println!();
            println!("{}", result_text(report));
            false
        }
        SessionStep::NothingToPractice => {
            let message = empty_pool_message(engine.config().source());
            println!("{}", message.title);
            if !message.subtitle.is_empty() {
                println!("{}", message.subtitle);
            }
            false
        }
    }
}

fn print_stats(snapshot: &StatisticsSnapshot) {
    println!("Total answered: {}", snapshot.total_answered);
    println!("Total correct: {}", snapshot.total_correct);
    println!("{}", snapshot.accuracy_label());
    for script in &snapshot.scripts {
        println!();
        println!("{}", script.script);
        println!("  Correct: {}", script.correct);
        println!("  Wrong: {}", script.wrong);
        println!("  Streak: {}", script.streak);
        let mastered: Vec<_> = script.mastered.iter().map(|m| m.label()).collect();
        if mastered.is_empty() {
            println!("  Mastered: none");
        } else {
            println!("  Mastered: {}", mastered.join(", "));
        }
    }
}

/// `"か ka"` for a drillable cell, the bare symbol otherwise, padding for a gap.
fn table_cell(catalog: &Catalog, cell: &str) -> String {
    if cell.is_empty() {
        return "　".to_owned();
    }
    match catalog.transliteration_of(cell) {
        Some(romaji) => format!("{cell} {romaji}"),
        None => cell.to_owned(),
    }
}

fn print_tables(catalog: &Catalog, filter: ScriptFilter) {
    for script in Script::ALL.into_iter().filter(|s| filter.allows(*s)) {
        println!("{script}");
        for kind in GridKind::ALL {
            println!("  {kind:?}");
            for row in Catalog::grid(script, kind) {
                let cells: Vec<_> = row.iter().map(|cell| table_cell(catalog, cell)).collect();
                println!("    {}", cells.join("  "));
            }
        }
    }
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_cells_pair_symbols_with_romaji() {
        let catalog = Catalog::standard();
        assert_eq!(table_cell(&catalog, "か"), "か ka");
        assert_eq!(table_cell(&catalog, "ヂ"), "ヂ ji(di)");
        assert_eq!(table_cell(&catalog, ""), "　");
    }

    #[test]
    fn store_opens_at_given_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_stats.json");

        let store = open_store(&path);
        assert_eq!(store.total_answered(), 0);
        assert!(path.exists());
    }
}
