mod board;
mod error;
mod settings;
mod turn_controller;
mod types;
mod win_detector;

pub use board::GridBoard;
pub use error::GridError;
pub use settings::{GameSettings, default_win_run_length};
pub use turn_controller::{TurnController, TurnState};
pub use types::{GameOutcome, Mark, Player, Symbols};
pub use win_detector::{check_win, evaluate};
