use crate::games::SessionRng;
use crate::log;
use super::board::{Board, BoardError};
use super::bot_controller::{BotInput, calculate_minimax_move};
use super::settings::TicTacToeSettings;
use super::types::{GameStatus, Mark, Position, Sides, WinningLine};
use super::win_detector::{check_win_with_line, has_won};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub status: GameStatus,
    pub bot_move: Option<Position>,
}

impl TurnOutcome {
    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }
}

/// One game between a human player and the bot, owning the authoritative board.
#[derive(Debug)]
pub struct TicTacToeGame {
    board: Board,
    sides: Sides,
    settings: TicTacToeSettings,
    status: GameStatus,
    last_move: Option<Position>,
    winning_line: Option<WinningLine>,
}

impl TicTacToeGame {
    /// Starts a game with sides assigned from `rng`. X moves first, so a bot holding X
    /// has already answered by the time this returns.
    pub fn new(settings: TicTacToeSettings, rng: &mut SessionRng) -> Result<Self, BoardError> {
        let board = Board::new(settings.board_size)?;
        let sides = Sides::assign(settings.side_assignment, rng);

        log!(
            "New {}x{} game: player {}, bot {}, seed {}",
            settings.board_size,
            settings.board_size,
            sides.player.symbol(),
            sides.bot.symbol(),
            rng.seed()
        );

        let mut game = Self::from_board(board, sides, settings);
        if sides.bot == Mark::X {
            game.take_bot_turn();
        }
        Ok(game)
    }

    /// Resumes play from an arbitrary position. The status is derived from the board.
    pub fn from_board(board: Board, sides: Sides, settings: TicTacToeSettings) -> Self {
        let winning_line = check_win_with_line(&board);
        let status = match winning_line.and_then(|line| GameStatus::won_by(line.mark)) {
            Some(status) => status,
            None if board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        };

        Self {
            board,
            sides,
            settings,
            status,
            last_move: None,
            winning_line,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn sides(&self) -> Sides {
        self.sides
    }

    pub fn settings(&self) -> &TicTacToeSettings {
        &self.settings
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Places the player's mark and lets the bot answer.
    ///
    /// Out-of-bounds coordinates are an error. An occupied cell or a finished game leaves
    /// everything untouched.
    pub fn apply_player_move(&mut self, row: usize, col: usize) -> Result<TurnOutcome, BoardError> {
        let pos = Position::new(row, col);
        if !self.board.is_free(pos)? || self.status.is_over() {
            return Ok(self.outcome(None));
        }

        self.place(pos, self.sides.player);
        if self.status.is_over() {
            return Ok(self.outcome(None));
        }

        Ok(self.take_bot_turn())
    }

    pub fn take_bot_turn(&mut self) -> TurnOutcome {
        if self.status.is_over() {
            return self.outcome(None);
        }

        let input = BotInput::from_game_state(self);
        let Some(bot_move) = calculate_minimax_move(&input) else {
            return self.outcome(None);
        };

        log!(
            "Bot {} plays {} (score {}, depth {}, {} nodes, {} cutoffs)",
            self.sides.bot.symbol(),
            bot_move.position,
            bot_move.score,
            bot_move.depth,
            bot_move.stats.nodes,
            bot_move.stats.cutoffs
        );

        self.place(bot_move.position, self.sides.bot);
        self.outcome(Some(bot_move.position))
    }

    fn place(&mut self, pos: Position, mark: Mark) {
        self.board.put(pos, mark);
        self.last_move = Some(pos);
        self.check_game_over(mark);
    }

    fn check_game_over(&mut self, mark: Mark) {
        if has_won(&self.board, mark) {
            self.winning_line = check_win_with_line(&self.board);
            if let Some(status) = GameStatus::won_by(mark) {
                self.status = status;
            }
            log!("{} wins", mark.symbol());

            if self.settings.fill_on_win {
                self.board.fill(mark);
            }
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            log!("Game ends in a draw");
        }
    }

    fn outcome(&self, bot_move: Option<Position>) -> TurnOutcome {
        TurnOutcome {
            status: self.status,
            bot_move,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::settings::SearchSettings;
    use crate::games::tictactoe::types::SideAssignment;
    use Mark::{Empty as E, O, X};

    fn settings(side_assignment: SideAssignment) -> TicTacToeSettings {
        TicTacToeSettings {
            side_assignment,
            ..TicTacToeSettings::default()
        }
    }

    fn game_from(rows: Vec<Vec<Mark>>, sides: Sides, fill_on_win: bool) -> TicTacToeGame {
        let settings = TicTacToeSettings {
            fill_on_win,
            ..TicTacToeSettings::default()
        };
        TicTacToeGame::from_board(Board::from_rows(rows).unwrap(), sides, settings)
    }

    #[test]
    fn test_new_game_with_player_first_is_empty() {
        let game = TicTacToeGame::new(settings(SideAssignment::PlayerIsX), &mut SessionRng::new(1)).unwrap();
        assert_eq!(game.board().free_count(), 9);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.sides(), Sides::PLAYER_X);
    }

    #[test]
    fn test_new_game_with_bot_first_opens() {
        let game = TicTacToeGame::new(settings(SideAssignment::PlayerIsO), &mut SessionRng::new(1)).unwrap();
        assert_eq!(game.board().free_count(), 8);
        let opening = game.last_move().unwrap();
        assert_eq!(game.board().get(opening).unwrap(), X);
    }

    #[test]
    fn test_random_assignment_is_reproducible() {
        let first = TicTacToeGame::new(settings(SideAssignment::Random), &mut SessionRng::new(99)).unwrap();
        let second = TicTacToeGame::new(settings(SideAssignment::Random), &mut SessionRng::new(99)).unwrap();
        assert_eq!(first.sides(), second.sides());
        assert_eq!(first.board(), second.board());
    }

    #[test]
    fn test_invalid_board_size_fails_construction() {
        let settings = TicTacToeSettings {
            board_size: 0,
            ..TicTacToeSettings::default()
        };
        let result = TicTacToeGame::new(settings, &mut SessionRng::new(1));
        assert!(matches!(result, Err(BoardError::ZeroSize)));
    }

    #[test]
    fn test_out_of_bounds_move_is_rejected() {
        let mut game = TicTacToeGame::new(settings(SideAssignment::PlayerIsX), &mut SessionRng::new(1)).unwrap();
        let err = game.apply_player_move(0, 3).unwrap_err();
        assert_eq!(err, BoardError::OutOfBounds { row: 0, col: 3, size: 3 });
        assert_eq!(game.board().free_count(), 9);
    }

    #[test]
    fn test_player_move_gets_bot_reply() {
        let mut game = TicTacToeGame::new(settings(SideAssignment::PlayerIsX), &mut SessionRng::new(1)).unwrap();
        let outcome = game.apply_player_move(1, 1).unwrap();
        assert!(!outcome.is_game_over());
        let reply = outcome.bot_move.unwrap();
        assert_eq!(game.board().get(Position::new(1, 1)).unwrap(), X);
        assert_eq!(game.board().get(reply).unwrap(), O);
        assert_eq!(game.board().free_count(), 7);
        assert_eq!(game.last_move(), Some(reply));
    }

    #[test]
    fn test_occupied_cell_is_a_no_op() {
        let mut game = game_from(
            vec![vec![X, E, E], vec![E, O, E], vec![E, E, E]],
            Sides::PLAYER_X,
            true,
        );
        let before = game.board().clone();
        let outcome = game.apply_player_move(1, 1).unwrap();
        assert_eq!(outcome.bot_move, None);
        assert_eq!(outcome.status, GameStatus::InProgress);
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn test_player_win_freezes_board_without_bot_turn() {
        let mut game = game_from(
            vec![vec![X, X, E], vec![O, O, E], vec![E, E, E]],
            Sides::PLAYER_X,
            true,
        );
        let outcome = game.apply_player_move(0, 2).unwrap();
        assert_eq!(outcome.status, GameStatus::XWon);
        assert_eq!(outcome.winner(), Some(X));
        assert_eq!(outcome.bot_move, None);
        assert!(game.board().rows().all(|row| row.iter().all(|&cell| cell == X)));
        assert_eq!(
            game.winning_line(),
            Some(WinningLine::new(X, Position::new(0, 0), Position::new(0, 2)))
        );
    }

    #[test]
    fn test_bot_win_freezes_board() {
        let mut game = game_from(
            vec![vec![O, O, E], vec![X, E, E], vec![E, E, E]],
            Sides::PLAYER_X,
            true,
        );
        let outcome = game.apply_player_move(2, 2).unwrap();
        assert_eq!(outcome.bot_move, Some(Position::new(0, 2)));
        assert_eq!(outcome.status, GameStatus::OWon);
        assert!(game.board().is_full());
        assert!(game.board().rows().all(|row| row.iter().all(|&cell| cell == O)));
    }

    #[test]
    fn test_win_without_fill_keeps_board_and_stops_play() {
        let mut game = game_from(
            vec![vec![O, O, E], vec![X, E, E], vec![E, E, E]],
            Sides::PLAYER_X,
            false,
        );
        game.apply_player_move(2, 2).unwrap();
        assert_eq!(game.status(), GameStatus::OWon);
        assert_eq!(game.board().get(Position::new(0, 2)).unwrap(), O);
        assert_eq!(game.board().get(Position::new(2, 2)).unwrap(), X);

        let before = game.board().clone();
        let outcome = game.apply_player_move(1, 1).unwrap();
        assert_eq!(outcome.status, GameStatus::OWon);
        assert_eq!(game.board(), &before);
        assert_eq!(game.take_bot_turn().bot_move, None);
    }

    #[test]
    fn test_last_cell_ends_in_draw() {
        let mut game = game_from(
            vec![vec![X, O, X], vec![X, O, O], vec![O, X, E]],
            Sides::PLAYER_X,
            true,
        );
        let outcome = game.apply_player_move(2, 2).unwrap();
        assert_eq!(outcome.status, GameStatus::Draw);
        assert_eq!(outcome.winner(), None);
        assert_eq!(outcome.bot_move, None);
    }

    #[test]
    fn test_bot_turn_on_full_board_does_nothing() {
        let mut game = game_from(
            vec![vec![X, O, X], vec![X, O, O], vec![O, X, X]],
            Sides::PLAYER_O,
            true,
        );
        assert_eq!(game.status(), GameStatus::Draw);
        let before = game.board().clone();
        assert_eq!(game.take_bot_turn().bot_move, None);
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn test_full_game_never_lost_by_bot() {
        let mut rng = SessionRng::new(5);
        for opening in 0..9 {
            let mut game = TicTacToeGame::new(settings(SideAssignment::PlayerIsX), &mut rng).unwrap();
            game.apply_player_move(opening / 3, opening % 3).unwrap();
            while !game.status().is_over() {
                let next = game.board().free_cells()[0];
                game.apply_player_move(next.row, next.col).unwrap();
            }
            assert_ne!(game.status(), GameStatus::XWon);
        }
    }

    #[test]
    fn test_bot_blocks_row_with_shallow_search() {
        for max_depth in 1..=4 {
            let settings = TicTacToeSettings {
                board_size: 4,
                search: SearchSettings { max_depth },
                side_assignment: SideAssignment::PlayerIsX,
                fill_on_win: true,
            };
            let board = Board::from_rows(vec![
                vec![X, X, E, E],
                vec![O, O, E, E],
                vec![E, E, E, E],
                vec![E, E, E, E],
            ])
            .unwrap();
            let mut game = TicTacToeGame::from_board(board, Sides::PLAYER_X, settings);
            let outcome = game.apply_player_move(0, 2).unwrap();
            assert_eq!(
                outcome.bot_move,
                Some(Position::new(0, 3)),
                "max_depth {max_depth}"
            );
            assert_eq!(outcome.status, GameStatus::InProgress);
        }
    }

    #[test]
    fn test_larger_board_plays_to_completion() {
        let settings = TicTacToeSettings {
            board_size: 4,
            search: SearchSettings { max_depth: 2 },
            side_assignment: SideAssignment::PlayerIsX,
            fill_on_win: false,
        };
        let mut game = TicTacToeGame::new(settings, &mut SessionRng::new(3)).unwrap();
        while !game.status().is_over() {
            let next = game.board().free_cells()[0];
            let outcome = game.apply_player_move(next.row, next.col).unwrap();
            if let Some(reply) = outcome.bot_move {
                assert_eq!(game.board().get(reply).unwrap(), O);
            }
        }
        assert!(game.status().is_over());
    }
}
