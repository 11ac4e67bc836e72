use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, GardenService, QuizContentService};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

struct DesktopApp {
    garden: Arc<GardenService>,
}

impl UiApp for DesktopApp {
    fn garden(&self) -> Arc<GardenService> {
        Arc::clone(&self.garden)
    }
}

struct Args {
    offline: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--offline]");
    eprintln!();
    eprintln!("Flags:");
    eprintln!("  --offline   skip the question generator and play the built-in deck");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  GEMINI_API_KEY, GEMINI_BASE_URL, GEMINI_MODEL, RUST_LOG");
}

impl Args {
    fn parse(args: impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut offline = false;
        for arg in args {
            match arg.as_str() {
                "--offline" => offline = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(Self { offline })
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional; a missing file is not an error.
    dotenvy::dotenv().ok();
    init_tracing();

    let parsed = Args::parse(std::env::args().skip(1)).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let garden = if parsed.offline {
        Arc::new(GardenService::new(
            Clock::default_clock(),
            QuizContentService::new(None),
        ))
    } else {
        Arc::new(GardenService::from_env())
    };

    if garden.generator_enabled() {
        info!("question generator configured, fresh decks per session");
    } else {
        info!("no question generator, playing the built-in deck");
    }

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { garden });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Ethics Garden")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
