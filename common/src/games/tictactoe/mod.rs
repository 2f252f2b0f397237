mod board;
mod bot_controller;
mod error;
mod game_state;
mod minimax;
mod session;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotInput, calculate_minimax_move, calculate_move};
pub use error::{BotError, GameError};
pub use game_state::TicTacToeGameState;
pub use minimax::{SearchResult, SearchStats, search, search_with_stats};
pub use session::{TicTacToeSession, TicTacToeSessionSettings, TurnOutcome};
pub use types::{
    BOARD_SIZE, CELL_COUNT, Difficulty, FirstPlayer, GameStatus, Mark, Position, ScoringMode,
    WinningLine,
};
pub use win_detector::{LINES, check_win, check_win_with_line, is_full, is_terminal};
