use super::board::Board;
use super::lines::Line;
use super::types::{Mark, WinningLine};

/// True if some full row, column or diagonal holds only `mark`.
///
/// One pass over the grid: for index `i` the row `i` and column `i` candidates are tracked
/// separately, and the inner scan stops once both have failed.
pub fn has_won(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }

    let size = board.size();
    let mut main_diagonal = true;
    let mut anti_diagonal = true;

    for i in 0..size {
        let mut row = true;
        let mut column = true;

        for j in 0..size {
            if row && board.at(i, j) != mark {
                row = false;
            }
            if column && board.at(j, i) != mark {
                column = false;
            }
            if !row && !column {
                break;
            }
        }

        if row || column {
            return true;
        }

        main_diagonal &= board.at(i, i) == mark;
        anti_diagonal &= board.at(i, size - 1 - i) == mark;
    }

    main_diagonal || anti_diagonal
}

pub fn check_win(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| has_won(board, mark))
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let size = board.size();

    Line::all(size).find_map(|line| {
        let mut cells = line.cells(size).map(|pos| board.at(pos.row, pos.col));
        let first = cells.next()?;
        if first == Mark::Empty || !cells.all(|cell| cell == first) {
            return None;
        }
        Some(WinningLine::new(first, line.start(size), line.end(size)))
    })
}
