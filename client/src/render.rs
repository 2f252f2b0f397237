use common::games::tictactoe::{BOARD_SIZE, Mark, Position, TicTacToeSession};

const ROW_SEPARATOR: &str = "---+---+---";

/// Empty cells show their 1-based number; the winning line is bracketed.
pub fn render_board(session: &TicTacToeSession) -> String {
    let state = session.state();
    let winning_line = state.winning_line();

    let rows: Vec<String> = (0..BOARD_SIZE)
        .map(|row| {
            (0..BOARD_SIZE)
                .filter_map(|col| Position::from_row_col(row, col).ok())
                .map(|pos| {
                    let mark = state.board().get(pos);
                    let on_winning_line = winning_line.is_some_and(|line| line.contains(pos));
                    match (mark, on_winning_line) {
                        (Mark::Empty, _) => format!(" {} ", pos.index() + 1),
                        (mark, true) => format!("[{}]", mark),
                        (mark, false) => format!(" {} ", mark),
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    let separator = format!("\n{}\n", ROW_SEPARATOR);
    rows.join(separator.as_str())
}

pub fn render_status(session: &TicTacToeSession) -> String {
    format!(
        "{} (you are {}, difficulty: {})",
        session.status_message(),
        session.state().human_mark(),
        session.difficulty()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::SessionRng;
    use common::games::tictactoe::TicTacToeSessionSettings;

    fn session() -> TicTacToeSession {
        TicTacToeSession::new(TicTacToeSessionSettings::default(), SessionRng::new(1)).unwrap()
    }

    #[test]
    fn test_empty_board_shows_numbers() {
        let expected = " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 ";
        assert_eq!(render_board(&session()), expected);
    }

    #[test]
    fn test_marks_replace_numbers() {
        let mut session = session();
        session.human_move(Position::new(4).unwrap()).unwrap();
        assert!(render_board(&session).contains(" 4 | X | 6 "));
    }

    #[test]
    fn test_status_mentions_difficulty() {
        assert_eq!(render_status(&session()), "Your turn! (you are X, difficulty: easy)");
    }
}
