use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use blackjack_cli::logging::init_logging;
use blackjack_cli::session::{DEFAULT_PACE_MS, DEFAULT_PACKS, GameSession, SessionOptions};

/// Single-player Blackjack against the house dealer.
#[derive(Debug, Parser)]
#[command(
    name = "blackjack",
    author,
    version,
    about = "Play Blackjack at the console"
)]
struct Cli {
    /// Number of 52-card packs in the shoe.
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_PACKS)]
    packs: usize,

    /// Seed for the shuffle RNG; omit for a different game every run.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Pause between dealer hits, in milliseconds (0 disables pacing).
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_PACE_MS)]
    pace_ms: u64,

    /// Dump the shuffled shoe before each round (debugging aid).
    #[arg(long)]
    show_shoe: bool,

    /// Append one JSON line per completed round to this file.
    #[arg(long, value_name = "FILE")]
    record: Option<PathBuf>,

    /// Write structured JSON logs to this file instead of stderr.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _logging_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    let options = SessionOptions {
        packs: cli.packs,
        seed: cli.seed,
        pace: Duration::from_millis(cli.pace_ms),
        show_shoe: cli.show_shoe,
        record: cli.record,
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = GameSession::new(options, stdin.lock(), stdout.lock())?;
    session.run()
}
