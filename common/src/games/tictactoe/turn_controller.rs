use super::board::GridBoard;
use super::error::GridError;
use super::types::{GameOutcome, Player};
use super::win_detector::evaluate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Player1Turn,
    Player2Turn,
    GameOver(GameOutcome),
}

impl TurnState {
    pub fn active_player(&self) -> Option<Player> {
        match self {
            TurnState::Player1Turn => Some(Player::Player1),
            TurnState::Player2Turn => Some(Player::Player2),
            TurnState::GameOver(_) => None,
        }
    }
}

/// Sequences moves on a board it owns, alternating players until the game ends.
#[derive(Debug)]
pub struct TurnController {
    board: GridBoard,
    state: TurnState,
}

impl TurnController {
    pub fn new(board: GridBoard) -> Self {
        Self {
            board,
            state: TurnState::Player1Turn,
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn active_player(&self) -> Option<Player> {
        self.state.active_player()
    }

    pub fn outcome(&self) -> GameOutcome {
        match self.state {
            TurnState::GameOver(outcome) => outcome,
            TurnState::Player1Turn | TurnState::Player2Turn => GameOutcome::Ongoing,
        }
    }

    pub fn board(&self) -> &GridBoard {
        &self.board
    }

    pub fn into_board(self) -> GridBoard {
        self.board
    }

    /// Places the active player's mark. On error nothing changes and the caller may retry.
    pub fn submit_move(&mut self, x: isize, y: isize) -> Result<TurnState, GridError> {
        let player = self.active_player().ok_or(GridError::GameOver)?;

        if let Err(err) = self.board.set(x, y, player.mark()) {
            crate::log!("Rejected move by {} at ({}, {}): {}", player, x, y, err);
            return Err(err);
        }

        let outcome = evaluate(&self.board);
        self.state = if outcome.is_over() {
            crate::log!("{} moved to ({}, {}), game over: {:?}", player, x, y, outcome);
            TurnState::GameOver(outcome)
        } else {
            match player.opponent() {
                Player::Player1 => TurnState::Player1Turn,
                Player::Player2 => TurnState::Player2Turn,
            }
        };

        Ok(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, Symbols};

    fn controller(width: usize, height: usize, win_run_length: usize) -> TurnController {
        TurnController::new(GridBoard::new(width, height, win_run_length, Symbols::default()).unwrap())
    }

    #[test]
    fn test_starts_with_player1() {
        let controller = controller(3, 3, 3);

        assert_eq!(controller.state(), TurnState::Player1Turn);
        assert_eq!(controller.active_player(), Some(Player::Player1));
        assert_eq!(controller.outcome(), GameOutcome::Ongoing);
    }

    #[test]
    fn test_players_alternate() {
        let mut controller = controller(3, 3, 3);

        assert_eq!(controller.submit_move(0, 0), Ok(TurnState::Player2Turn));
        assert_eq!(controller.submit_move(1, 0), Ok(TurnState::Player1Turn));
        assert_eq!(controller.board().get(0, 0), Mark::Player1);
        assert_eq!(controller.board().get(1, 0), Mark::Player2);
    }

    #[test]
    fn test_diagonal_through_top_row_wins_for_player1() {
        let mut controller = controller(3, 3, 3);

        for (x, y) in [(0, 0), (1, 0), (1, 1), (2, 0)] {
            controller.submit_move(x, y).unwrap();
        }
        let state = controller.submit_move(2, 2).unwrap();

        assert_eq!(state, TurnState::GameOver(GameOutcome::Player1Wins));
        assert_eq!(controller.outcome(), GameOutcome::Player1Wins);
        assert_eq!(controller.active_player(), None);
    }

    #[test]
    fn test_full_board_ends_in_draw() {
        let mut controller = controller(3, 3, 3);
        // X O X / X O O / O X X
        let moves = [(0, 0), (1, 0), (2, 0), (1, 1), (0, 1), (2, 1), (1, 2), (0, 2), (2, 2)];

        for &(x, y) in &moves[..8] {
            assert!(controller.submit_move(x, y).unwrap().active_player().is_some());
        }
        let state = controller.submit_move(moves[8].0, moves[8].1).unwrap();

        assert_eq!(state, TurnState::GameOver(GameOutcome::Draw));
        assert_eq!(controller.board().render(), "XOX\nXOO\nOXX");
    }

    #[test]
    fn test_rejected_move_keeps_state() {
        let mut controller = controller(3, 3, 3);
        controller.submit_move(0, 0).unwrap();

        let occupied = controller.submit_move(0, 0);
        let outside = controller.submit_move(5, 5);

        assert_eq!(occupied, Err(GridError::CellOccupied { x: 0, y: 0 }));
        assert_eq!(
            outside,
            Err(GridError::OutOfBounds { x: 5, y: 5, width: 3, height: 3 })
        );
        assert_eq!(controller.state(), TurnState::Player2Turn);
        assert_eq!(controller.board().render(), "X--\n---\n---");

        assert_eq!(controller.submit_move(1, 1), Ok(TurnState::Player1Turn));
    }

    #[test]
    fn test_moves_after_game_over_are_rejected() {
        let mut controller = controller(2, 1, 1);
        controller.submit_move(0, 0).unwrap();

        assert_eq!(controller.submit_move(1, 0), Err(GridError::GameOver));
        assert_eq!(controller.state(), TurnState::GameOver(GameOutcome::Player1Wins));
        assert_eq!(controller.board().get(1, 0), Mark::Empty);
    }

    #[test]
    fn test_player2_can_win() {
        let mut controller = controller(3, 3, 3);

        for (x, y) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 2)] {
            controller.submit_move(x, y).unwrap();
        }
        let state = controller.submit_move(2, 1).unwrap();

        assert_eq!(state, TurnState::GameOver(GameOutcome::Player2Wins));
        assert_eq!(controller.into_board().render(), "XX-\nOOO\n--X");
    }
}
