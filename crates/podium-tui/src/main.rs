//! Standalone TUI binary for Podium.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use podium_core::{ClassSession, SessionConfig};

#[derive(Parser)]
#[command(
    name = "podium",
    about = "Presentation sign-up sheet with a randomized duty draw",
    version
)]
struct Args {
    /// RNG seed for reproducible draws (defaults to OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Where Ctrl+E writes the markdown report
    #[arg(long, default_value = "signup-report.md")]
    report: PathBuf,
}

fn main() {
    let args = Args::parse();

    let mut config = SessionConfig::default();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let session = ClassSession::new(config);
    let app = podium_tui::app::App::new(session, args.report);

    if let Err(e) = podium_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
