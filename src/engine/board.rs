use super::types::{BOARD_SIZE, BoardError, Mark, Position};
use super::win_detector::check_win;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    fn in_bounds(row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    pub fn get_value_at(&self, row: usize, col: usize) -> Result<Mark, BoardError> {
        if !Self::in_bounds(row, col) {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(self.cells[row][col])
    }

    pub fn set_value_at(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        if mark == Mark::Empty {
            return false;
        }
        if !Self::in_bounds(row, col) {
            return false;
        }
        if self.cells[row][col] != Mark::Empty {
            return false;
        }

        self.cells[row][col] = mark;
        true
    }

    pub fn get_winner_symbol(&self) -> Option<Mark> {
        check_win(&self.cells)
    }

    pub fn clear(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    pub fn get_representation(&self) -> [[Mark; BOARD_SIZE]; BOARD_SIZE] {
        self.cells
    }

    pub fn get_available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, row_values) in self.cells.iter().enumerate() {
            for (col, &cell) in row_values.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }
}
