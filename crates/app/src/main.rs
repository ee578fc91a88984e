use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use drill_core::{Dictionary, Level};
use services::{QuizService, QuizSettings, load_dictionary};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidLevel { raw: String },
    InvalidWords { raw: String },
    InvalidDictionary { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidLevel { raw } => write!(f, "invalid --level value: {raw}"),
            ArgsError::InvalidWords { raw } => write!(f, "invalid --words value: {raw}"),
            ArgsError::InvalidDictionary { raw } => write!(f, "invalid --dictionary value: {raw}"),
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

struct DesktopApp {
    quiz: Arc<QuizService>,
}

impl UiApp for DesktopApp {
    fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    level: Level,
    words: usize,
    dictionary: Option<PathBuf>,
}

impl Default for Args {
    fn default() -> Self {
        let settings = QuizSettings::default();
        Self {
            level: settings.level(),
            words: settings.initial_words(),
            dictionary: None,
        }
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--level <1|2|3>] [--words <n>] [--dictionary <path>]");
    eprintln!("  cargo run -p app -- list [--level <1|2|3>] [--dictionary <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --level 1");
    eprintln!("  --words 5");
    eprintln!("  --dictionary <built-in table>");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  VERBS_LEVEL, VERBS_WORDS, VERBS_DICTIONARY, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    List,
}

impl Command {
    fn parse(arg: &str) -> Result<Self, ArgsError> {
        match arg {
            "ui" => Ok(Self::Ui),
            "list" => Ok(Self::List),
            _ => Err(ArgsError::UnknownCommand(arg.to_string())),
        }
    }
}

impl Args {
    fn from_env() -> Self {
        let mut args = Self::default();
        if let Ok(raw) = std::env::var("VERBS_LEVEL") {
            match raw.parse::<Level>() {
                Ok(level) => args.level = level,
                Err(err) => tracing::warn!(%err, "ignoring VERBS_LEVEL"),
            }
        }
        if let Ok(raw) = std::env::var("VERBS_WORDS") {
            match raw.trim().parse::<usize>() {
                Ok(words) => args.words = words,
                Err(_) => tracing::warn!(raw = %raw, "ignoring VERBS_WORDS"),
            }
        }
        args.dictionary = std::env::var_os("VERBS_DICTIONARY")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        args
    }

    fn parse(
        args: &mut impl Iterator<Item = String>,
        defaults: Self,
    ) -> Result<Option<Self>, ArgsError> {
        let mut parsed = defaults;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--level" => {
                    let value = require_value(args, "--level")?;
                    parsed.level = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidLevel { raw: value.clone() })?;
                }
                "--words" => {
                    let value = require_value(args, "--words")?;
                    parsed.words = value
                        .trim()
                        .parse()
                        .map_err(|_| ArgsError::InvalidWords { raw: value.clone() })?;
                }
                "--dictionary" => {
                    let value = require_value(args, "--dictionary")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDictionary { raw: value });
                    }
                    parsed.dictionary = Some(PathBuf::from(value));
                }
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(parsed))
    }

    fn settings(&self) -> QuizSettings {
        QuizSettings::new(self.level, self.words)
    }
}

fn open_dictionary(args: &Args) -> Result<Dictionary, Box<dyn std::error::Error>> {
    match args.dictionary.as_deref() {
        Some(path) => Ok(load_dictionary(path)?),
        None => Ok(Dictionary::builtin()),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::parse(first).inspect_err(|_| print_usage())?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let Some(parsed) = Args::parse(&mut iter, Args::from_env()).inspect_err(|_| print_usage())?
    else {
        print_usage();
        return Ok(());
    };

    let dictionary = Arc::new(open_dictionary(&parsed)?);
    let quiz = Arc::new(QuizService::new(dictionary, parsed.settings()));

    match cmd {
        Command::Ui => {
            tracing::info!(
                level = %parsed.level,
                words = parsed.words,
                verbs = quiz.dictionary().len(),
                "launching desktop ui"
            );
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { quiz });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Irregular Verbs")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::List => {
            for (id, entry) in quiz.eligible_entries(parsed.level) {
                println!(
                    "{id}\t{}\t{}\t{}\t{}",
                    entry.infinitive(),
                    entry.simple(),
                    entry.participle(),
                    entry.translation()
                );
            }
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
