use serde::{Deserialize, Serialize};

use super::types::SideAssignment;

pub const DEFAULT_BOARD_SIZE: usize = 3;
pub const DEFAULT_SEARCH_DEPTH: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Plies searched before falling back to the heuristic on boards larger than 3x3.
    pub max_depth: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSettings {
    pub board_size: usize,
    pub search: SearchSettings,
    pub side_assignment: SideAssignment,
    /// Overwrite the whole board with the winner's mark once a game is won.
    pub fill_on_win: bool,
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            search: SearchSettings::default(),
            side_assignment: SideAssignment::Random,
            fill_on_win: true,
        }
    }
}
