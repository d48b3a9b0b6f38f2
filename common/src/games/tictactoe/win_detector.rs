use super::board::GridBoard;
use super::types::{GameOutcome, Mark};

/// Decides the state of the game on `board` without touching it.
///
/// Checks rows, then columns, then diagonals that start on row 0; the first winning
/// run found decides. A full board with no winner is a draw.
///
/// Diagonal runs that never touch row 0 are not detected. On a 4x4 board with a run
/// of 3, marks at (0,1), (1,2), (2,3) do not win.
pub fn evaluate(board: &GridBoard) -> GameOutcome {
    if let Some(player) = check_win(board).and_then(|mark| mark.player()) {
        return player.winning_outcome();
    }

    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::Ongoing
    }
}

/// Returns the mark owning the first winning run, never [`Mark::Empty`].
pub fn check_win(board: &GridBoard) -> Option<Mark> {
    let (width, height) = (board.width() as isize, board.height() as isize);
    let win_run_length = board.win_run_length();

    for y in 0..height {
        if let Some(mark) = find_run((0..width).map(|x| board.get(x, y)), win_run_length) {
            return Some(mark);
        }
    }

    for x in 0..width {
        if let Some(mark) = find_run((0..height).map(|y| board.get(x, y)), win_run_length) {
            return Some(mark);
        }
    }

    for x in 0..width {
        if let Some(mark) = check_diagonals_from_top(board, x) {
            return Some(mark);
        }
    }

    None
}

fn find_run(line: impl Iterator<Item = Mark>, win_run_length: usize) -> Option<Mark> {
    let mut current = Mark::Empty;
    let mut run = 0;

    for mark in line {
        if mark.is_empty() {
            current = Mark::Empty;
            run = 0;
            continue;
        }

        if mark == current {
            run += 1;
        } else {
            current = mark;
            run = 1;
        }

        if run >= win_run_length {
            return Some(current);
        }
    }

    None
}

fn check_diagonals_from_top(board: &GridBoard, x: isize) -> Option<Mark> {
    let mark = board.get(x, 0);
    if mark.is_empty() {
        return None;
    }

    let win_run_length = board.win_run_length();
    let mut down_left = 1;
    let mut down_right = 1;
    let mut left_open = true;
    let mut right_open = true;

    if down_left >= win_run_length {
        return Some(mark);
    }

    let mut shift = 1;
    while (left_open || right_open) && shift < board.height() as isize {
        if left_open {
            if board.get(x - shift, shift) == mark {
                down_left += 1;
            } else {
                left_open = false;
            }
        }

        if right_open {
            if board.get(x + shift, shift) == mark {
                down_right += 1;
            } else {
                right_open = false;
            }
        }

        if down_left >= win_run_length || down_right >= win_run_length {
            return Some(mark);
        }

        shift += 1;
    }

    None
}
