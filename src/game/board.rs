use super::PlayerId;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Taken(PlayerId),
}

impl Cell {
    /// Owner of the piece in this cell, if any
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Taken(player) => Some(player),
        }
    }
}

/// The 7x6 grid, indexed by (column, row). Row 0 is the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; ROWS]; COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; ROWS]; COLS],
        }
    }

    /// Get the cell at a specific position.
    /// Panics if the position is outside the grid.
    pub fn get(&self, col: usize, row: usize) -> Cell {
        self.cells[col][row]
    }

    /// Number of pieces stacked in a column
    pub fn column_fill(&self, col: usize) -> usize {
        self.cells[col]
            .iter()
            .filter(|cell| **cell != Cell::Empty)
            .count()
    }

    /// Check if a column is full. Columns outside the grid count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.column_fill(col) == ROWS
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// One horizontal line of the grid, left to right
    pub fn row_cells(&self, row: usize) -> [Cell; COLS] {
        let mut line = [Cell::Empty; COLS];
        for (col, cell) in line.iter_mut().enumerate() {
            *cell = self.cells[col][row];
        }
        line
    }

    /// Drop a piece in a column, returns the row where it landed.
    ///
    /// Callers must only drop into a column with room left; the input layer
    /// rejects full columns before a move gets here.
    pub fn play(&mut self, col: usize, player: PlayerId) -> usize {
        assert!(col < COLS, "column {col} is outside the board");
        let row = self.column_fill(col);
        assert!(row < ROWS, "column {col} is already full");
        self.cells[col][row] = Cell::Taken(player);
        row
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for col in 0..COLS {
            assert_eq!(board.column_fill(col), 0);
            for row in 0..ROWS {
                assert_eq!(board.get(col, row), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_play_stacks_from_bottom() {
        let mut board = Board::new();

        let row = board.play(3, PlayerId::One);
        assert_eq!(row, 0);
        assert_eq!(board.get(3, 0), Cell::Taken(PlayerId::One));

        let row = board.play(3, PlayerId::Two);
        assert_eq!(row, 1);
        assert_eq!(board.get(3, 1), Cell::Taken(PlayerId::Two));
        assert_eq!(board.column_fill(3), 2);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.play(0, PlayerId::One);
        }

        assert!(board.is_column_full(0));
        assert!(!board.is_column_full(1));
        assert!(board.is_column_full(COLS));
    }

    #[test]
    #[should_panic(expected = "already full")]
    fn test_play_into_full_column_panics() {
        let mut board = Board::new();
        for _ in 0..=ROWS {
            board.play(2, PlayerId::Two);
        }
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.play(col, PlayerId::One);
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_row_cells() {
        let mut board = Board::new();
        board.play(0, PlayerId::One);
        board.play(6, PlayerId::Two);
        board.play(6, PlayerId::One);

        let bottom = board.row_cells(0);
        assert_eq!(bottom[0], Cell::Taken(PlayerId::One));
        assert_eq!(bottom[3], Cell::Empty);
        assert_eq!(bottom[6], Cell::Taken(PlayerId::Two));
        assert_eq!(board.row_cells(1)[6].owner(), Some(PlayerId::One));
    }
}
