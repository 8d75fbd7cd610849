use super::types::{Mark, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    ZeroSize,
    NotSquare { row: usize, len: usize, expected: usize },
    OutOfBounds { row: usize, col: usize, size: usize },
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::ZeroSize => write!(f, "Board must have at least one cell"),
            BoardError::NotSquare { row, len, expected } => write!(
                f,
                "Board is not square: row {} has {} cells, expected {}",
                row, len, expected
            ),
            BoardError::OutOfBounds { row, col, size } => write!(
                f,
                "Position ({}, {}) is outside the {}x{} board",
                row, col, size, size
            ),
        }
    }
}

impl std::error::Error for BoardError {}

/// Square grid of marks stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Mark>,
}

impl Board {
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }
        Ok(Self {
            size,
            cells: vec![Mark::Empty; size * size],
        })
    }

    pub fn from_rows(rows: Vec<Vec<Mark>>) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            cells.extend(values);
        }

        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, pos: Position) -> Result<usize, BoardError> {
        if pos.row >= self.size || pos.col >= self.size {
            return Err(BoardError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size: self.size,
            });
        }
        Ok(pos.row * self.size + pos.col)
    }

    pub fn get(&self, pos: Position) -> Result<Mark, BoardError> {
        let index = self.index(pos)?;
        Ok(self.cells[index])
    }

    pub fn set(&mut self, pos: Position, mark: Mark) -> Result<(), BoardError> {
        let index = self.index(pos)?;
        self.cells[index] = mark;
        Ok(())
    }

    /// Unchecked read for hot loops; `row` and `col` must be below `size`.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> Mark {
        self.cells[row * self.size + col]
    }

    /// Unchecked write used by the search; `pos` must come from `free_cells`.
    #[inline]
    pub(crate) fn put(&mut self, pos: Position, mark: Mark) {
        let index = pos.row * self.size + pos.col;
        self.cells[index] = mark;
    }

    pub fn is_free(&self, pos: Position) -> Result<bool, BoardError> {
        Ok(self.get(pos)? == Mark::Empty)
    }

    /// Empty cells in row-major order.
    pub fn free_cells(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| Position::new(index / self.size, index % self.size))
            .collect()
    }

    pub fn free_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Mark::Empty).count()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.len() - self.free_count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn fill(&mut self, mark: Mark) {
        self.cells.fill(mark);
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.cells.chunks(self.size)
    }
}

pub fn free_cells(board: &Board) -> Vec<Position> {
    board.free_cells()
}
