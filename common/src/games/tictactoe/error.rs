use super::types::{Mark, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotError {
    /// Every cell is occupied; there is nothing to choose from.
    NoAvailableMoves,
    /// The bot was asked to move as `Mark::Empty`.
    InvalidMark,
    /// The board already contains a completed line.
    GameAlreadyOver,
}

impl std::fmt::Display for BotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BotError::NoAvailableMoves => write!(f, "No available moves on the board"),
            BotError::InvalidMark => write!(f, "Bot cannot play the empty mark"),
            BotError::GameAlreadyOver => write!(f, "Board already has a winner"),
        }
    }
}

impl std::error::Error for BotError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    GameOver,
    NotYourTurn { expected: Mark, found: Mark },
    CellOccupied(Position),
    InvalidPosition(usize),
    InvalidMark(char),
    Bot(BotError),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::GameOver => write!(f, "Game is already over"),
            GameError::NotYourTurn { expected, found } => {
                write!(f, "Not your turn: expected {}, got {}", expected, found)
            }
            GameError::CellOccupied(pos) => write!(f, "Cell {} is already marked", pos.index() + 1),
            GameError::InvalidPosition(index) => {
                write!(f, "Position {} is out of bounds", index)
            }
            GameError::InvalidMark(c) => write!(f, "Invalid mark '{}'", c),
            GameError::Bot(e) => write!(f, "Bot error: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Bot(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BotError> for GameError {
    fn from(e: BotError) -> Self {
        GameError::Bot(e)
    }
}
