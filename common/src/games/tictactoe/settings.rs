use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::board::GridBoard;
use super::error::GridError;
use super::types::Symbols;

/// Win-run length used when none is configured: `floor(sqrt((width + 1) * (height + 1)))`.
///
/// The result is not checked against the board size and may exceed both dimensions.
pub fn default_win_run_length(width: usize, height: usize) -> usize {
    width
        .saturating_add(1)
        .saturating_mul(height.saturating_add(1))
        .isqrt()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub win_run_length: Option<usize>,
    #[serde(default)]
    pub symbols: Symbols,
}

impl GameSettings {
    pub fn resolved_win_run_length(&self) -> usize {
        self.win_run_length
            .unwrap_or_else(|| default_win_run_length(self.width, self.height))
    }

    pub fn create_board(&self) -> Result<GridBoard, GridError> {
        GridBoard::new(
            self.width,
            self.height,
            self.resolved_win_run_length(),
            self.symbols,
        )
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            width: 3,
            height: 3,
            win_run_length: Some(3),
            symbols: Symbols::default(),
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.width < 1 || self.height < 1 {
            return Err(format!(
                "Board dimensions must be at least 1x1, got {}x{}",
                self.width, self.height
            ));
        }
        if self.win_run_length == Some(0) {
            return Err("win_run_length must be at least 1".to_string());
        }
        self.symbols.validate()
    }
}

impl Validate for Symbols {
    fn validate(&self) -> Result<(), String> {
        let all = [self.empty, self.player1, self.player2];
        if all.iter().any(|c| c.is_whitespace()) {
            return Err("Symbols must not be whitespace".to_string());
        }
        if self.empty == self.player1 || self.empty == self.player2 || self.player1 == self.player2 {
            return Err(format!(
                "Symbols must be distinct, got '{}', '{}', '{}'",
                self.empty, self.player1, self.player2
            ));
        }
        Ok(())
    }
}
