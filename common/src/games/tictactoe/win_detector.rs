use super::board::Board;
use super::types::{Mark, Position, WinningLine};

const fn line(a: usize, b: usize, c: usize) -> [Position; 3] {
    [
        Position::new_unchecked(a),
        Position::new_unchecked(b),
        Position::new_unchecked(c),
    ]
}

/// Rows, then columns, then diagonals. Scan order decides which line is
/// reported when more than one is complete.
pub const LINES: [[Position; 3]; 8] = [
    line(0, 1, 2),
    line(3, 4, 5),
    line(6, 7, 8),
    line(0, 3, 6),
    line(1, 4, 7),
    line(2, 5, 8),
    line(0, 4, 8),
    line(2, 4, 6),
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&cells| {
        let mark = board.get(cells[0]);
        if mark != Mark::Empty && cells[1..].iter().all(|&pos| board.get(pos) == mark) {
            Some(WinningLine::new(mark, cells))
        } else {
            None
        }
    })
}

pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

pub fn is_terminal(board: &Board) -> bool {
    check_win(board).is_some() || is_full(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_line(cells: [Position; 3], mark: Mark) -> Board {
        let mut board = Board::new();
        for pos in cells {
            board.place(pos, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_every_line_is_detected_for_both_marks() {
        for cells in LINES {
            for mark in [Mark::X, Mark::O] {
                let board = board_with_line(cells, mark);
                assert_eq!(check_win(&board), Some(mark), "line {:?}", cells);
                let winning = check_win_with_line(&board).unwrap();
                assert_eq!(winning.cells, cells);
                assert!(is_terminal(&board));
            }
        }
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new();
        assert_eq!(check_win(&board), None);
        assert!(!is_terminal(&board));
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let board: Board = "XX.OO....".parse().unwrap();
        assert_eq!(check_win(&board), None);
        assert!(!is_terminal(&board));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOX XOO OXX".parse().unwrap();
        assert_eq!(check_win(&board), None);
        assert!(is_full(&board));
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let board: Board = "XXX OOX OXO".parse().unwrap();
        assert_eq!(check_win(&board), Some(Mark::X));
        assert!(is_full(&board));
    }

    #[test]
    fn test_first_line_in_order_wins_when_both_marks_complete() {
        let board: Board = "OOO XXX ...".parse().unwrap();
        let winning = check_win_with_line(&board).unwrap();
        assert_eq!(winning.mark, Mark::O);
        assert_eq!(winning.cells, LINES[0]);

        let board: Board = "XXX OOO ...".parse().unwrap();
        assert_eq!(check_win(&board), Some(Mark::X));
    }
}
