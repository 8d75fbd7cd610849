use super::board::Board;
use super::evaluator::evaluate;
use super::types::{Mark, Position, Sides};
use super::win_detector::has_won;

pub type Score = i32;

/// Base score of a decided game, before the remaining-depth bias is added.
pub const WIN_SCORE: Score = 1_000_000;

/// Sentinel bound. Real scores stay within `WIN_SCORE + depth` and the heuristic's
/// `(2N + 2) * N²`, both far below this.
pub const INFINITY: Score = Score::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: Score,
    pub best_move: Option<Position>,
}

impl SearchResult {
    fn leaf(score: Score) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// A mark placed on the scratch board for the lifetime of the guard.
struct Placement<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl<'a> Placement<'a> {
    fn new(board: &'a mut Board, pos: Position, mark: Mark) -> Self {
        board.put(pos, mark);
        Self { board, pos }
    }

    fn board(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.put(self.pos, Mark::Empty);
    }
}

fn depth_bias(depth: u32) -> Score {
    Score::try_from(depth).map_or(INFINITY - WIN_SCORE, |bias| bias.min(INFINITY - WIN_SCORE))
}

/// Alpha-beta minimax where the bot always maximizes and the player always minimizes.
pub struct Searcher {
    sides: Sides,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(sides: Sides) -> Self {
        Self {
            sides,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Searches `board` with `to_move` on turn and `depth` plies left.
    ///
    /// The board is mutated while the search runs and is returned to its original state
    /// before this function returns. Leaf results carry no move; interior results carry
    /// the free cell whose subtree produced the kept score.
    pub fn search(
        &mut self,
        board: &mut Board,
        to_move: Mark,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
    ) -> SearchResult {
        self.stats.nodes += 1;

        // Remaining plies never exceed the free cells, which also bounds the win bias.
        let free_cells = board.free_cells();
        let depth = depth.min(u32::try_from(free_cells.len()).unwrap_or(u32::MAX));

        if has_won(board, self.sides.player) {
            return SearchResult::leaf(-WIN_SCORE - depth_bias(depth));
        }
        if has_won(board, self.sides.bot) {
            return SearchResult::leaf(WIN_SCORE + depth_bias(depth));
        }

        if free_cells.is_empty() {
            return SearchResult::leaf(0);
        }
        if depth == 0 {
            return SearchResult::leaf(evaluate(board, to_move));
        }

        // Empty never moves.
        let Some(next) = self.sides.opponent_of(to_move) else {
            return SearchResult::leaf(0);
        };

        let maximizing = self.sides.is_bot(to_move);
        let mut best = SearchResult::leaf(if maximizing { -INFINITY } else { INFINITY });

        for pos in free_cells {
            let score = {
                let mut placed = Placement::new(board, pos, to_move);
                self.search(placed.board(), next, depth - 1, alpha, beta).score
            };

            if maximizing {
                if score > best.score {
                    best = SearchResult {
                        score,
                        best_move: Some(pos),
                    };
                }
                alpha = alpha.max(score);
            } else {
                if score < best.score {
                    best = SearchResult {
                        score,
                        best_move: Some(pos),
                    };
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

/// Root search from the bot's turn on a private copy of `board`.
pub fn best_move(board: &Board, sides: Sides, depth: u32) -> (SearchResult, SearchStats) {
    let mut scratch = board.clone();
    let mut searcher = Searcher::new(sides);
    let result = searcher.search(&mut scratch, sides.bot, depth, -INFINITY, INFINITY);
    (result, searcher.stats())
}
