mod args;
mod config;
mod session;

use std::io;

use clap::Parser;
use grid_game_common::games::tictactoe::TurnController;
use grid_game_common::{log, logger};

use args::Args;
use session::{PromptMoveSource, run_session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        let prefix = if args.use_log_prefix {
            Some("Console".to_string())
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    let config_manager = config::get_config_manager(args.config.as_deref());
    let stored = config_manager.get_config()?;
    let settings = config::resolve_settings(stored, &args)?;
    log!(
        "Using {}x{} board, run length {}, symbols {:?}",
        settings.width,
        settings.height,
        settings.resolved_win_run_length(),
        settings.symbols
    );

    let mut controller = TurnController::new(settings.create_board()?);

    let stdin = io::stdin();
    let mut source = PromptMoveSource::new(stdin.lock(), io::stdout());
    let mut out = io::stdout();
    let outcome = run_session(&mut controller, &mut source, &mut out)?;
    log!("Session finished: {:?}", outcome);

    Ok(())
}
