use super::types::Position;

/// A row, column or diagonal spanning the whole board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Column(usize),
    MainDiagonal,
    AntiDiagonal,
}

impl Line {
    /// Rows first, then columns, then the two diagonals: 2N+2 lines in total.
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .chain([Line::MainDiagonal, Line::AntiDiagonal])
    }

    pub fn cells(self, size: usize) -> impl Iterator<Item = Position> {
        (0..size).map(move |i| match self {
            Line::Row(row) => Position::new(row, i),
            Line::Column(col) => Position::new(i, col),
            Line::MainDiagonal => Position::new(i, i),
            Line::AntiDiagonal => Position::new(i, size - 1 - i),
        })
    }

    pub fn start(self, size: usize) -> Position {
        self.cells(size).next().unwrap_or(Position::new(0, 0))
    }

    pub fn end(self, size: usize) -> Position {
        self.cells(size).last().unwrap_or(Position::new(0, 0))
    }
}
