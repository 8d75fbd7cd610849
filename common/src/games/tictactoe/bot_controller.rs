use super::board::Board;
use super::game_state::TicTacToeGame;
use super::minimax::{SearchStats, Score, best_move};
use super::settings::SearchSettings;
use super::types::{Position, Sides};

pub struct BotInput<'a> {
    pub board: &'a Board,
    pub sides: Sides,
    pub search: SearchSettings,
}

impl<'a> BotInput<'a> {
    pub fn from_game_state(state: &'a TicTacToeGame) -> Self {
        Self {
            board: state.board(),
            sides: state.sides(),
            search: state.settings().search,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotMove {
    pub position: Position,
    pub score: Score,
    pub depth: u32,
    pub stats: SearchStats,
}

/// Exhaustive on 3x3 and smaller, capped at `max_depth` otherwise.
///
/// A capped budget is even and at least 2, so cut-off nodes are scored on the bot's turn.
pub fn depth_budget(board: &Board, search: SearchSettings) -> u32 {
    let free = u32::try_from(board.free_count()).unwrap_or(u32::MAX);
    if board.size() <= 3 || free <= search.max_depth {
        return free;
    }
    (search.max_depth & !1).max(2).min(free)
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<BotMove> {
    if input.board.is_full() {
        return None;
    }

    let depth = depth_budget(input.board, input.search);
    let (result, stats) = best_move(input.board, input.sides, depth);

    result.best_move.map(|position| BotMove {
        position,
        score: result.score,
        depth,
        stats,
    })
}
