use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::{
    DEFAULT_BOARD_SIZE, DEFAULT_SEARCH_DEPTH, SearchSettings, SideAssignment, TicTacToeSettings,
};

pub const MIN_BOARD_SIZE: u32 = 3;
pub const MAX_BOARD_SIZE: u32 = 10;
pub const MAX_SEARCH_DEPTH: u32 = 9;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub board_size: u32,
    pub search_depth: u32,
    pub side_assignment: SideAssignment,
    pub fill_on_win: bool,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.board_size < MIN_BOARD_SIZE || self.board_size > MAX_BOARD_SIZE {
            return Err(format!(
                "board_size must be between {} and {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE
            ));
        }
        if self.search_depth == 0 || self.search_depth > MAX_SEARCH_DEPTH {
            return Err(format!(
                "search_depth must be between 1 and {}",
                MAX_SEARCH_DEPTH
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE as u32,
            search_depth: DEFAULT_SEARCH_DEPTH,
            side_assignment: SideAssignment::Random,
            fill_on_win: true,
            seed: None,
        }
    }
}

impl From<&GameConfig> for TicTacToeSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            board_size: config.board_size as usize,
            search: SearchSettings {
                max_depth: config.search_depth,
            },
            side_assignment: config.side_assignment,
            fill_on_win: config.fill_on_win,
        }
    }
}
