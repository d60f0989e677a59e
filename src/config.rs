//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;

/// TUI 2048 - slide and merge tiles to reach 2048
#[derive(Parser, Debug, Clone)]
#[command(name = "tui-2048")]
#[command(about = "Terminal 2048", long_about = None)]
#[command(version)]
pub struct Config {
    /// Seed for tile spawns. Omit for a different game every run.
    #[arg(long, env = "TUI_2048_SEED")]
    pub seed: Option<u64>,

    /// Minimum mouse drag, in terminal columns, recognised as a swipe
    #[arg(long, env = "TUI_2048_SWIPE_THRESHOLD", default_value_t = 3.0)]
    pub swipe_threshold: f32,

    /// Tracing filter, e.g. "info" or "tui_2048_core=debug"
    #[arg(long, env = "TUI_2048_LOG", default_value = "info")]
    pub log: String,

    /// Write logs to this file. Logging is off when unset.
    #[arg(long, env = "TUI_2048_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}
