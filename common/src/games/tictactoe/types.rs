use serde::{Deserialize, Serialize};

use crate::games::SessionRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    /// Status for a game won by `mark`. `Mark::Empty` cannot win.
    pub fn won_by(mark: Mark) -> Option<Self> {
        match mark {
            Mark::X => Some(GameStatus::XWon),
            Mark::O => Some(GameStatus::OWon),
            Mark::Empty => None,
        }
    }

    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Position, end: Position) -> Self {
        Self { mark, start, end }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SideAssignment {
    Random,
    PlayerIsX,
    PlayerIsO,
}

/// The human player's and the bot's marks for one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sides {
    pub player: Mark,
    pub bot: Mark,
}

impl Sides {
    pub const PLAYER_X: Sides = Sides {
        player: Mark::X,
        bot: Mark::O,
    };

    pub const PLAYER_O: Sides = Sides {
        player: Mark::O,
        bot: Mark::X,
    };

    /// `None` for `Mark::Empty`.
    pub fn with_player_mark(player: Mark) -> Option<Self> {
        player.opponent().map(|bot| Self { player, bot })
    }

    pub fn random(rng: &mut SessionRng) -> Self {
        if rng.random_bool() {
            Self::PLAYER_X
        } else {
            Self::PLAYER_O
        }
    }

    pub fn assign(assignment: SideAssignment, rng: &mut SessionRng) -> Self {
        match assignment {
            SideAssignment::Random => Self::random(rng),
            SideAssignment::PlayerIsX => Self::PLAYER_X,
            SideAssignment::PlayerIsO => Self::PLAYER_O,
        }
    }

    pub fn opponent_of(&self, mark: Mark) -> Option<Mark> {
        if mark == self.player {
            Some(self.bot)
        } else if mark == self.bot {
            Some(self.player)
        } else {
            None
        }
    }

    pub fn is_bot(&self, mark: Mark) -> bool {
        mark == self.bot
    }
}
