use std::str::FromStr;

use common::games::tictactoe::{Difficulty, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(Position),
    Restart,
    SetDifficulty(Difficulty),
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  1-9            place your mark on that cell (numbered left to right, top to bottom)
  <row> <col>    place your mark by row and column, both 1-3
  r, restart     start a new game
  d <level>      switch difficulty (easy or hard) and start a new game
  h, help        show this help
  q, quit        leave the game";

fn parse_cell_number(s: &str) -> Result<Position, String> {
    let number: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a cell number", s))?;
    if !(1..=9).contains(&number) {
        return Err(format!("Cell number must be between 1 and 9, got {}", number));
    }
    Position::new(number - 1).map_err(|e| e.to_string())
}

fn parse_row_col(row: &str, col: &str) -> Result<Position, String> {
    let row: usize = row.parse().map_err(|_| format!("'{}' is not a row number", row))?;
    let col: usize = col.parse().map_err(|_| format!("'{}' is not a column number", col))?;
    if !(1..=3).contains(&row) || !(1..=3).contains(&col) {
        return Err("Row and column must be between 1 and 3".to_string());
    }
    Position::from_row_col(row - 1, col - 1).map_err(|e| e.to_string())
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let words: Vec<&str> = lowered.split_whitespace().collect();

        match words.as_slice() {
            [] => Err("Enter a cell number 1-9, or 'h' for help".to_string()),
            ["q" | "quit" | "exit"] => Ok(Command::Quit),
            ["r" | "restart" | "new"] => Ok(Command::Restart),
            ["h" | "help" | "?"] => Ok(Command::Help),
            ["d" | "difficulty", level] => level.parse().map(Command::SetDifficulty),
            ["d" | "difficulty"] => Err("Usage: d <easy|hard>".to_string()),
            [level @ ("easy" | "hard")] => level.parse().map(Command::SetDifficulty),
            [cell] => parse_cell_number(cell).map(Command::Place),
            [row, col] => parse_row_col(row, col).map(Command::Place),
            _ => Err(format!("Unknown command '{}', type 'h' for help", s.trim())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(index: usize) -> Command {
        Command::Place(Position::new(index).unwrap())
    }

    #[test]
    fn test_cell_numbers() {
        assert_eq!("1".parse::<Command>(), Ok(place(0)));
        assert_eq!(" 9 ".parse::<Command>(), Ok(place(8)));
        assert!("0".parse::<Command>().is_err());
        assert!("10".parse::<Command>().is_err());
        assert!("x".parse::<Command>().is_err());
    }

    #[test]
    fn test_row_col() {
        assert_eq!("2 3".parse::<Command>(), Ok(place(5)));
        assert_eq!("3 1".parse::<Command>(), Ok(place(6)));
        assert!("4 1".parse::<Command>().is_err());
    }

    #[test]
    fn test_keywords() {
        assert_eq!("Q".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("restart".parse::<Command>(), Ok(Command::Restart));
        assert_eq!("?".parse::<Command>(), Ok(Command::Help));
    }

    #[test]
    fn test_difficulty() {
        assert_eq!("d hard".parse::<Command>(), Ok(Command::SetDifficulty(Difficulty::Hard)));
        assert_eq!("difficulty easy".parse::<Command>(), Ok(Command::SetDifficulty(Difficulty::Easy)));
        assert_eq!("hard".parse::<Command>(), Ok(Command::SetDifficulty(Difficulty::Hard)));
        assert!("d".parse::<Command>().is_err());
        assert!("d medium".parse::<Command>().is_err());
    }

    #[test]
    fn test_empty_and_garbage() {
        assert!("".parse::<Command>().is_err());
        assert!("   ".parse::<Command>().is_err());
        assert!("place it somewhere".parse::<Command>().is_err());
    }
}
