//! Lines of Action GUI
//!
//! A graphical interface for playing Lines of Action against the AI or
//! another player.

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use loa::engine::{DEFAULT_MAX_DEPTH, DEFAULT_TIME_LIMIT_MS};
use loa::ui::{GameMode, LoaApp};
use loa::{EngineConfig, Side};

/// Who plays which side
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// You play Black against the AI
    PveBlack,
    /// You play White against the AI
    PveWhite,
    /// Two players on one screen
    Pvp,
}

impl From<Mode> for GameMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::PveBlack => GameMode::PvE { human: Side::Black },
            Mode::PveWhite => GameMode::PvE { human: Side::White },
            Mode::Pvp => GameMode::PvP,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "loa", version, about = "Lines of Action with an alpha-beta AI")]
struct Args {
    /// Maximum search depth (odd depths are searched: 1, 3, 5, ...)
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    depth: u32,

    /// Time budget per AI move in milliseconds
    #[arg(long, default_value_t = DEFAULT_TIME_LIMIT_MS)]
    time_ms: u64,

    /// Game mode at startup
    #[arg(long, value_enum, default_value_t = Mode::PveBlack)]
    mode: Mode,
}

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = EngineConfig::new(args.depth, args.time_ms);
    let mode = GameMode::from(args.mode);
    tracing::info!(?mode, depth = config.max_depth, time_ms = config.time_limit_ms, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Lines of Action"),
        ..Default::default()
    };

    eframe::run_native(
        "Lines of Action",
        options,
        Box::new(move |cc| Ok(Box::new(LoaApp::new(cc, mode, config)))),
    )
}
