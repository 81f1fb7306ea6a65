use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use worldclock::clock::{Clock, SystemClock};
use worldclock::state::persistence::StateFile;
use worldclock::state::store::ClockStore;
use worldclock::ui::runtime;

/// Terminal world clock with a stopwatch.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Override the state file location.
    #[arg(long)]
    state_file: Option<PathBuf>,

    /// Display refresh interval in milliseconds (minimum 10).
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing()?;

    let file = StateFile::new(args.state_file.unwrap_or_else(StateFile::default_path));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let store = ClockStore::load(file, Arc::clone(&clock));

    runtime::run(store, clock, Duration::from_millis(args.tick_ms.max(10)))
        .context("terminal UI failed")
}

/// Logs go to a file; stdout belongs to the TUI.
fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let dir = dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("worldclock");
    fs::create_dir_all(&dir).context("creating log directory")?;
    let log_file = fs::File::create(dir.join("worldclock.log")).context("opening log file")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}
