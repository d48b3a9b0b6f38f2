use std::io::{self, BufRead, Write};

use grid_game_common::games::tictactoe::{GameOutcome, GridError, Player, TurnController};
use grid_game_common::log;

/// Supplies zero-based `(x, y)` coordinates for the player to move.
pub trait MoveSource {
    /// `Ok(None)` means no more moves will come.
    fn next_move(&mut self, player: Player) -> io::Result<Option<(isize, isize)>>;
}

/// Asks for one-based coordinates on `output` and reads answers line by line from `input`.
pub struct PromptMoveSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptMoveSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask_coordinate(&mut self, label: &str) -> io::Result<Option<isize>> {
        loop {
            write!(self.output, "  {} coordinate: ", label)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match line.trim().parse::<isize>() {
                Ok(value) => return Ok(Some(value.saturating_sub(1))),
                Err(_) => writeln!(self.output, "Please enter a whole number.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> MoveSource for PromptMoveSource<R, W> {
    fn next_move(&mut self, _player: Player) -> io::Result<Option<(isize, isize)>> {
        writeln!(self.output, "Choose an empty space: ")?;
        let Some(x) = self.ask_coordinate("X")? else {
            return Ok(None);
        };
        let Some(y) = self.ask_coordinate("Y")? else {
            return Ok(None);
        };
        Ok(Some((x, y)))
    }
}

/// Plays until the game ends or the move source runs dry.
///
/// Rejected moves are reported and asked for again; the controller's state is untouched
/// by them. Returns `None` when the session was abandoned.
pub fn run_session<S: MoveSource, W: Write>(
    controller: &mut TurnController,
    source: &mut S,
    out: &mut W,
) -> io::Result<Option<GameOutcome>> {
    writeln!(out, "Match {} spaces to win!\n", controller.board().win_run_length())?;
    writeln!(out, "{}\n", controller.board())?;

    while let Some(player) = controller.active_player() {
        writeln!(out, "--- {} ---", player)?;

        loop {
            let Some((x, y)) = source.next_move(player)? else {
                log!("Move source exhausted while waiting for {}", player);
                writeln!(out, "No more input, game abandoned.")?;
                return Ok(None);
            };

            match controller.submit_move(x, y) {
                Ok(_) => break,
                Err(GridError::OutOfBounds { .. }) => {
                    writeln!(out, "That space is not on the board.")?
                }
                Err(GridError::CellOccupied { .. }) => {
                    writeln!(out, "That space is already taken.")?
                }
                Err(err) => writeln!(out, "{}", err)?,
            }
        }

        writeln!(out, "\n{}\n", controller.board())?;
    }

    let outcome = controller.outcome();
    match outcome.winner() {
        Some(winner) => writeln!(out, "{} wins!", winner)?,
        None => writeln!(out, "Draw!")?,
    }
    Ok(Some(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_game_common::games::tictactoe::{GridBoard, Symbols};
    use std::collections::VecDeque;
    use std::io::Cursor;

    struct ScriptedMoves(VecDeque<(isize, isize)>);

    impl MoveSource for ScriptedMoves {
        fn next_move(&mut self, _player: Player) -> io::Result<Option<(isize, isize)>> {
            Ok(self.0.pop_front())
        }
    }

    fn controller(width: usize, height: usize, win_run_length: usize) -> TurnController {
        TurnController::new(GridBoard::new(width, height, win_run_length, Symbols::default()).unwrap())
    }

    #[test]
    fn test_session_reports_winner() {
        let mut controller = controller(3, 3, 3);
        let mut moves = ScriptedMoves(VecDeque::from([(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)]));
        let mut out = Vec::new();

        let outcome = run_session(&mut controller, &mut moves, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(outcome, Some(GameOutcome::Player1Wins));
        assert!(text.starts_with("Match 3 spaces to win!\n\n---\n---\n---\n\n--- Player1 ---\n"));
        assert!(text.contains("XOO\n-X-\n--X"));
        assert!(text.ends_with("Player1 wins!\n"));
    }

    #[test]
    fn test_session_retries_rejected_moves() {
        let mut controller = controller(3, 3, 3);
        let mut moves = ScriptedMoves(VecDeque::from([(0, 0), (0, 0), (7, 7), (0, 1)]));
        let mut out = Vec::new();

        let outcome = run_session(&mut controller, &mut moves, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(outcome, None);
        assert!(text.contains("That space is already taken."));
        assert!(text.contains("That space is not on the board."));
        assert!(text.ends_with("No more input, game abandoned.\n"));
        assert_eq!(controller.board().render(), "X--\nO--\n---");
    }

    #[test]
    fn test_session_reports_draw() {
        let mut controller = controller(3, 3, 3);
        let mut moves = ScriptedMoves(VecDeque::from([
            (0, 0), (1, 0), (2, 0), (1, 1), (0, 1), (2, 1), (1, 2), (0, 2), (2, 2),
        ]));
        let mut out = Vec::new();

        let outcome = run_session(&mut controller, &mut moves, &mut out).unwrap();

        assert_eq!(outcome, Some(GameOutcome::Draw));
        assert!(String::from_utf8(out).unwrap().ends_with("Draw!\n"));
    }

    #[test]
    fn test_prompt_source_reads_one_based_coordinates() {
        let mut prompts = Vec::new();
        let mut source = PromptMoveSource::new(Cursor::new("2\n3\n"), &mut prompts);

        let chosen = source.next_move(Player::Player1).unwrap();

        assert_eq!(chosen, Some((1, 2)));
        let text = String::from_utf8(prompts).unwrap();
        assert_eq!(text, "Choose an empty space: \n  X coordinate:   Y coordinate: ");
    }

    #[test]
    fn test_prompt_source_reprompts_on_garbage() {
        let mut prompts = Vec::new();
        let mut source = PromptMoveSource::new(Cursor::new("abc\n\n1\n 4 \n"), &mut prompts);

        let chosen = source.next_move(Player::Player2).unwrap();

        assert_eq!(chosen, Some((0, 3)));
        let text = String::from_utf8(prompts).unwrap();
        assert_eq!(text.matches("Please enter a whole number.").count(), 2);
    }

    #[test]
    fn test_prompt_source_end_of_input() {
        let mut prompts = Vec::new();
        let mut source = PromptMoveSource::new(Cursor::new("1\n"), &mut prompts);

        assert_eq!(source.next_move(Player::Player1).unwrap(), None);
    }

    #[test]
    fn test_full_session_from_text_input() {
        let mut controller = controller(3, 3, 3);
        let input = "1\n1\n2\n1\n2\n2\n3\n1\n3\n3\n";
        let mut prompts = Vec::new();
        let mut source = PromptMoveSource::new(Cursor::new(input), &mut prompts);
        let mut out = Vec::new();

        let outcome = run_session(&mut controller, &mut source, &mut out).unwrap();

        assert_eq!(outcome, Some(GameOutcome::Player1Wins));
        assert_eq!(controller.board().render(), "XOO\n-X-\n--X");
    }
}
