use std::fmt;
use std::str::FromStr;

use super::error::GameError;
use super::types::{BOARD_SIZE, CELL_COUNT, Mark, Position};

/// The 3x3 grid, stored row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.index()]
    }

    pub fn is_cell_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), GameError> {
        if mark.is_empty() {
            return Err(GameError::InvalidMark(mark.symbol()));
        }
        if !self.is_cell_empty(pos) {
            return Err(GameError::CellOccupied(pos));
        }
        self.cells[pos.index()] = mark;
        Ok(())
    }

    /// Unchecked write used by the search, which always pairs it with [`Board::clear`].
    pub(crate) fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.index()] = mark;
    }

    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.index()] = Mark::Empty;
    }

    pub fn available_moves(&self) -> Vec<Position> {
        Position::all().filter(|&pos| self.is_cell_empty(pos)).collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.empty_count() == CELL_COUNT
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Parses nine cell characters (`X`, `O`, `.`), ignoring whitespace and
    /// `|`/`/` separators, e.g. `"XO./.X./..O"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Mark::Empty; CELL_COUNT];
        let mut count = 0;
        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '|' && *c != '/') {
            if count >= CELL_COUNT {
                return Err(GameError::InvalidPosition(count));
            }
            cells[count] = Mark::try_from(c)?;
            count += 1;
        }
        if count != CELL_COUNT {
            return Err(GameError::InvalidPosition(count));
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(index: usize) -> Position {
        Position::new(index).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty());
        assert!(!board.is_full());
        assert_eq!(board.available_moves().len(), 9);
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let mut board = Board::new();
        board.place(pos(4), Mark::X).unwrap();
        assert_eq!(board.place(pos(4), Mark::O), Err(GameError::CellOccupied(pos(4))));
        assert_eq!(board.get(pos(4)), Mark::X);
    }

    #[test]
    fn test_place_rejects_empty_mark() {
        let mut board = Board::new();
        assert!(matches!(board.place(pos(0), Mark::Empty), Err(GameError::InvalidMark(_))));
    }

    #[test]
    fn test_clear_restores_cell() {
        let mut board = Board::new();
        board.place(pos(2), Mark::O).unwrap();
        board.clear(pos(2));
        assert!(board.is_empty());
    }

    #[test]
    fn test_available_moves_in_index_order() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        let moves: Vec<usize> = board.available_moves().iter().map(|p| p.index()).collect();
        assert_eq!(moves, vec![2, 3, 5, 6, 7]);
        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.count(Mark::O), 2);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!("XO.".parse::<Board>().is_err());
        assert!("XO.XO.XO.X".parse::<Board>().is_err());
        assert!("XO.XO.XOZ".parse::<Board>().is_err());
    }

    #[test]
    fn test_display_rows() {
        let board: Board = "XO. .X. ..O".parse().unwrap();
        assert_eq!(board.to_string(), "XO.\n.X.\n..O");
    }
}
