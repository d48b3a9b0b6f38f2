/// Errors raised by board construction, cell writes and the turn controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("{name} must be at least 1, got {value}")]
    InvalidDimension { name: &'static str, value: usize },

    #[error("a {width}x{height} board has too many cells")]
    BoardTooLarge { width: usize, height: usize },

    #[error("board must contain at least one row and one column")]
    EmptyGrid,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown symbol '{symbol}' at ({x}, {y})")]
    UnknownSymbol { symbol: char, x: usize, y: usize },

    #[error("position ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        x: isize,
        y: isize,
        width: usize,
        height: usize,
    },

    #[error("cell ({x}, {y}) is already marked")]
    CellOccupied { x: usize, y: usize },

    #[error("game is already over")]
    GameOver,
}

impl GridError {
    /// True for errors raised while configuring a board (construction, resize, parsing).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GridError::InvalidDimension { .. }
                | GridError::BoardTooLarge { .. }
                | GridError::EmptyGrid
                | GridError::RaggedRows { .. }
                | GridError::UnknownSymbol { .. }
        )
    }
}
