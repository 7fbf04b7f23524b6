use std::fs::canonicalize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::thread::sleep;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info, level_filters::LevelFilter, warn};

use cardslides::backends::{self, Backends};
use cardslides::content::cardapp_deck;
use cardslides::slideshow::Deck;
use cardslides::theme::Theme;
use cardslides::watcher::DeckWatcher;
use cardslides::{loader, Result};

#[derive(Debug, Parser)]
/// The CardApp design patterns talk.
struct Args {
    #[arg(long = "deck")]
    /// Show this JSON deck instead of the built-in one. The file is watched
    /// and reloaded on change.
    deck_path: Option<PathBuf>,
    #[arg(long = "theme")]
    /// Use this JSON theme instead of the built-in one.
    theme_path: Option<PathBuf>,
    #[arg(short = 'b', long = "backend")]
    /// The backend to be used: crossterm or plain.
    backend: Option<String>,
    #[arg(short = 'l', long = "log-level", default_value = "INFO")]
    /// The log level to be used.
    log_level: LevelFilter,
    #[arg(long = "log-dir", default_value = "/tmp/")]
    /// Where the log file goes.
    log_dir: PathBuf,
    #[arg(long)]
    /// Print the deck as JSON and exit.
    dump: bool,
}

fn load_deck(path: Option<&Path>) -> Result<Deck> {
    match path {
        Some(path) => {
            info!("Using file {}", path.display());
            loader::load_deck(path)
        }
        None => Ok(cardapp_deck()),
    }
}

fn run(args: &Args) -> Result<()> {
    let deck_path = match &args.deck_path {
        Some(p) => Some(canonicalize(p)?),
        None => None,
    };
    let deck = load_deck(deck_path.as_deref())?;

    if args.dump {
        println!("{}", loader::to_json(&deck)?);
        return Ok(());
    }

    let theme = match &args.theme_path {
        Some(p) => loader::load_theme(p)?,
        None => Theme::cardapp(),
    };

    // Keep the watcher alive for as long as the event loop runs.
    let watcher = match &deck_path {
        Some(path) => Some(DeckWatcher::new(path)?),
        None => None,
    };

    let which = match &args.backend {
        Some(v) => Backends::try_from(v.as_str())?,
        None => Backends::default(),
    };
    let mut backend = backends::get_backend(which)?;
    let mut context = backend.get_context()?;
    context.set_deck(deck);

    // Fix the max fps.
    let fixed_fps = Duration::from_nanos(1_000_000_000 / 10);

    loop {
        let timer = std::time::Instant::now();
        if let Some(deck) = watcher.as_ref().and_then(DeckWatcher::try_recv) {
            context.set_deck(deck);
        }

        if context.manage_inputs()? {
            break;
        }
        context.render(&theme)?;

        let elapsed = timer.elapsed();
        if elapsed < fixed_fps {
            sleep(fixed_fps - elapsed);
        } else {
            warn!(
                "Unable to have 10 fps, needed {:?} to show the slide",
                elapsed
            );
        }
    }
    Ok(())
}

#[doc(hidden)]
fn main() -> ExitCode {
    let args = Args::parse();

    // Init logger. The terminal belongs to the slides, so logs go to a file.
    let file_appender =
        tracing_appender::rolling::hourly(&args.log_dir, "cardslides.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(non_blocking)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("cardslides: {e}");
            ExitCode::FAILURE
        }
    }
}
