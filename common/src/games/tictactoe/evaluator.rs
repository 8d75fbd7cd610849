use super::board::Board;
use super::lines::Line;
use super::minimax::Score;
use super::types::Mark;

/// Static score of `board` from `mark`'s point of view.
///
/// Every full line held only by `mark` adds the square of its mark count, every line held
/// only by the opponent subtracts the square of the opponent's count, and contested or empty
/// lines add nothing.
pub fn evaluate(board: &Board, mark: Mark) -> Score {
    let Some(opponent) = mark.opponent() else {
        return 0;
    };
    let size = board.size();

    Line::all(size)
        .map(|line| {
            let mut own: Score = 0;
            let mut theirs: Score = 0;
            for pos in line.cells(size) {
                let cell = board.at(pos.row, pos.col);
                if cell == mark {
                    own += 1;
                } else if cell == opponent {
                    theirs += 1;
                }
            }
            line_score(own, theirs)
        })
        .sum()
}

fn line_score(own: Score, theirs: Score) -> Score {
    if theirs == 0 {
        own * own
    } else if own == 0 {
        -(theirs * theirs)
    } else {
        0
    }
}
