mod board;
mod bot_controller;
mod evaluator;
mod game_state;
mod lines;
mod minimax;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, BoardError, free_cells};
pub use bot_controller::{BotInput, BotMove, calculate_minimax_move, depth_budget};
pub use evaluator::evaluate;
pub use game_state::{TicTacToeGame, TurnOutcome};
pub use lines::Line;
pub use minimax::{INFINITY, Score, SearchResult, SearchStats, Searcher, WIN_SCORE, best_move};
pub use settings::{DEFAULT_BOARD_SIZE, DEFAULT_SEARCH_DEPTH, SearchSettings, TicTacToeSettings};
pub use types::{GameStatus, Mark, Position, SideAssignment, Sides, WinningLine};
pub use win_detector::{check_win, check_win_with_line, has_won};
