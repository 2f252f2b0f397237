use crate::games::SessionRng;
use crate::log_debug;
use super::board::Board;
use super::error::BotError;
use super::game_state::TicTacToeGameState;
use super::minimax::search_with_stats;
use super::types::{Difficulty, Mark, Position, ScoringMode};

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
    pub scoring: ScoringMode,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState, scoring: ScoringMode) -> Self {
        Self {
            board: *state.board(),
            bot_mark: state.current_mark(),
            scoring,
        }
    }
}

/// Picks the bot's next cell. Fails instead of guessing when the board has no
/// empty cell left.
pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Result<Position, BotError> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(input, rng),
        Difficulty::Hard => calculate_minimax_move(input),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Result<Position, BotError> {
    if input.bot_mark.is_empty() {
        return Err(BotError::InvalidMark);
    }
    let available_moves = input.board.available_moves();
    rng.choose(&available_moves).ok_or(BotError::NoAvailableMoves)
}

pub fn calculate_minimax_move(input: &BotInput) -> Result<Position, BotError> {
    let (result, stats) = search_with_stats(&input.board, input.bot_mark, input.scoring)?;
    log_debug!(
        "Minimax for {} picked cell {} (score {}, {} nodes)",
        input.bot_mark,
        result.position,
        result.score,
        stats.nodes
    );
    Ok(result.position)
}
