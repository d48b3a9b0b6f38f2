use serde::{Deserialize, Serialize};
use std::fmt;

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    Player1,
    Player2,
}

impl Mark {
    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }

    pub fn player(&self) -> Option<Player> {
        match self {
            Mark::Player1 => Some(Player::Player1),
            Mark::Player2 => Some(Player::Player2),
            Mark::Empty => None,
        }
    }
}

/// A player who can make a move. Unlike [`Mark`] there is no empty variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    pub fn mark(&self) -> Mark {
        match self {
            Player::Player1 => Mark::Player1,
            Player::Player2 => Mark::Player2,
        }
    }

    pub fn winning_outcome(&self) -> GameOutcome {
        match self {
            Player::Player1 => GameOutcome::Player1Wins,
            Player::Player2 => GameOutcome::Player2Wins,
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        player.mark()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Player1 => write!(f, "Player1"),
            Player::Player2 => write!(f, "Player2"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    Player1Wins,
    Player2Wins,
    Draw,
}

impl GameOutcome {
    pub fn is_over(&self) -> bool {
        *self != GameOutcome::Ongoing
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Player1Wins => Some(Player::Player1),
            GameOutcome::Player2Wins => Some(Player::Player2),
            GameOutcome::Ongoing | GameOutcome::Draw => None,
        }
    }
}

/// Characters used to render each kind of cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbols {
    pub empty: char,
    pub player1: char,
    pub player2: char,
}

impl Symbols {
    pub fn new(empty: char, player1: char, player2: char) -> Self {
        Self {
            empty,
            player1,
            player2,
        }
    }

    pub fn symbol_for(&self, mark: Mark) -> char {
        match mark {
            Mark::Empty => self.empty,
            Mark::Player1 => self.player1,
            Mark::Player2 => self.player2,
        }
    }

    /// Reverse lookup. Player symbols win over the empty symbol if they collide.
    pub fn mark_for(&self, symbol: char) -> Option<Mark> {
        if symbol == self.player1 {
            Some(Mark::Player1)
        } else if symbol == self.player2 {
            Some(Mark::Player2)
        } else if symbol == self.empty {
            Some(Mark::Empty)
        } else {
            None
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::new('-', 'X', 'O')
    }
}
