use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GameError;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }
}

impl TryFrom<char> for Mark {
    type Error = GameError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'X' | 'x' => Ok(Mark::X),
            'O' | 'o' => Ok(Mark::O),
            '.' | '-' | '_' | ' ' => Ok(Mark::Empty),
            other => Err(GameError::InvalidMark(other)),
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell index in `0..9`, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position(usize);

impl Position {
    pub fn new(index: usize) -> Result<Self, GameError> {
        if index >= CELL_COUNT {
            return Err(GameError::InvalidPosition(index));
        }
        Ok(Self(index))
    }

    pub fn from_row_col(row: usize, col: usize) -> Result<Self, GameError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GameError::InvalidPosition(row * BOARD_SIZE + col));
        }
        Ok(Self(row * BOARD_SIZE + col))
    }

    pub(crate) const fn new_unchecked(index: usize) -> Self {
        Self(index)
    }

    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(Position)
    }

    pub fn index(&self) -> usize {
        self.0
    }

    pub fn row(&self) -> usize {
        self.0 / BOARD_SIZE
    }

    pub fn col(&self) -> usize {
        self.0 % BOARD_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [Position; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [Position; 3]) -> Self {
        Self { mark, cells }
    }

    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" | "random" => Ok(Difficulty::Easy),
            "hard" | "minimax" | "impossible" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// How terminal positions are scored by the search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Wins score `10 - depth`, losses `depth - 10`: faster wins and slower
    /// losses are preferred.
    #[default]
    DepthWeighted,
    /// Wins score `10`, losses `-10` regardless of depth.
    Flat,
}

impl FromStr for ScoringMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "depth_weighted" | "depth" => Ok(ScoringMode::DepthWeighted),
            "flat" => Ok(ScoringMode::Flat),
            other => Err(format!("Unknown scoring mode: {}", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    #[default]
    Human,
    Computer,
    Random,
}

impl FromStr for FirstPlayer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" | "player" | "me" => Ok(FirstPlayer::Human),
            "computer" | "ai" | "bot" => Ok(FirstPlayer::Computer),
            "random" => Ok(FirstPlayer::Random),
            other => Err(format!("Unknown first player: {}", other)),
        }
    }
}
