use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "grid_game_console", about = "Two-player tic-tac-toe on a board of any size")]
pub struct Args {
    /// Board width; overrides the config file.
    pub width: Option<usize>,

    /// Board height; overrides the config file.
    #[arg(requires = "width")]
    pub height: Option<usize>,

    /// Marks in a row needed to win.
    #[arg(long)]
    pub win_run_length: Option<usize>,

    /// Path to a YAML config file.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long)]
    pub use_log_prefix: bool,

    /// Print diagnostics to stderr.
    #[arg(long, short)]
    pub verbose: bool,
}
