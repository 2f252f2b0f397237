use crate::games::SessionRng;
use crate::{log, log_debug};
use super::bot_controller::{BotInput, calculate_move};
use super::error::GameError;
use super::game_state::TicTacToeGameState;
use super::types::{Difficulty, FirstPlayer, GameStatus, Mark, Position, ScoringMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub human_mark: Mark,
    pub first_player: FirstPlayer,
    pub difficulty: Difficulty,
    pub scoring: ScoringMode,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            human_mark: Mark::X,
            first_player: FirstPlayer::Human,
            difficulty: Difficulty::Easy,
            scoring: ScoringMode::DepthWeighted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub position: Position,
    pub mark: Mark,
    pub status: GameStatus,
}

/// Owns the current game and applies human and computer moves to it.
/// Restarting replaces the game; the settings and RNG live for the whole
/// session.
pub struct TicTacToeSession {
    settings: TicTacToeSessionSettings,
    state: TicTacToeGameState,
    rng: SessionRng,
}

impl TicTacToeSession {
    pub fn new(settings: TicTacToeSessionSettings, mut rng: SessionRng) -> Result<Self, GameError> {
        let state = Self::new_game(&settings, &mut rng)?;
        log_debug!("Session created with seed {}", rng.seed());
        Ok(Self {
            settings,
            state,
            rng,
        })
    }

    fn new_game(
        settings: &TicTacToeSessionSettings,
        rng: &mut SessionRng,
    ) -> Result<TicTacToeGameState, GameError> {
        let computer_mark = settings
            .human_mark
            .opponent()
            .ok_or(GameError::InvalidMark(settings.human_mark.symbol()))?;

        let first_mark = match settings.first_player {
            FirstPlayer::Human => settings.human_mark,
            FirstPlayer::Computer => computer_mark,
            FirstPlayer::Random => {
                if rng.random_bool() {
                    settings.human_mark
                } else {
                    computer_mark
                }
            }
        };

        TicTacToeGameState::new(settings.human_mark, first_mark)
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn settings(&self) -> &TicTacToeSessionSettings {
        &self.settings
    }

    pub fn difficulty(&self) -> Difficulty {
        self.settings.difficulty
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn restart(&mut self) -> Result<(), GameError> {
        self.state = Self::new_game(&self.settings, &mut self.rng)?;
        log!(
            "New game: human plays {}, {} moves first",
            self.state.human_mark(),
            self.state.current_mark()
        );
        Ok(())
    }

    /// Changing difficulty mid-game starts a fresh game.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), GameError> {
        self.settings.difficulty = difficulty;
        log!("Difficulty set to {}", difficulty);
        self.restart()
    }

    pub fn human_move(&mut self, position: Position) -> Result<TurnOutcome, GameError> {
        let mark = self.state.human_mark();
        self.apply(mark, position)
    }

    pub fn computer_move(&mut self) -> Result<TurnOutcome, GameError> {
        if self.state.status().is_over() {
            return Err(GameError::GameOver);
        }
        let mark = self.state.computer_mark();
        if self.state.current_mark() != mark {
            return Err(GameError::NotYourTurn {
                expected: self.state.current_mark(),
                found: mark,
            });
        }

        let input = BotInput::from_game_state(&self.state, self.settings.scoring);
        let position = calculate_move(self.settings.difficulty, &input, &mut self.rng)?;
        self.apply(mark, position)
    }

    fn apply(&mut self, mark: Mark, position: Position) -> Result<TurnOutcome, GameError> {
        let status = self.state.place_mark(mark, position)?;
        log_debug!("{} placed on cell {}", mark, position.index() + 1);

        match status {
            GameStatus::Won(winner) => log!("Game over: {} wins", winner),
            GameStatus::Draw => log!("Game over: draw"),
            GameStatus::InProgress => {}
        }

        Ok(TurnOutcome {
            position,
            mark,
            status,
        })
    }

    pub fn status_message(&self) -> &'static str {
        match self.state.status() {
            GameStatus::Won(mark) if mark == self.state.human_mark() => "You win!",
            GameStatus::Won(_) => "Computer wins!",
            GameStatus::Draw => "It's a draw!",
            GameStatus::InProgress if self.state.is_human_turn() => "Your turn!",
            GameStatus::InProgress => "Computer is thinking...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(index: usize) -> Position {
        Position::new(index).unwrap()
    }

    fn session(settings: TicTacToeSessionSettings) -> TicTacToeSession {
        TicTacToeSession::new(settings, SessionRng::new(99)).unwrap()
    }

    fn hard() -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            difficulty: Difficulty::Hard,
            ..TicTacToeSessionSettings::default()
        }
    }

    #[test]
    fn test_human_then_computer() {
        let mut session = session(hard());
        assert_eq!(session.status_message(), "Your turn!");

        let outcome = session.human_move(pos(0)).unwrap();
        assert_eq!(outcome.mark, Mark::X);
        assert_eq!(outcome.status, GameStatus::InProgress);
        assert_eq!(session.status_message(), "Computer is thinking...");

        let reply = session.computer_move().unwrap();
        assert_eq!(reply.mark, Mark::O);
        assert_ne!(reply.position, pos(0));
        assert!(session.state().is_human_turn());
    }

    #[test]
    fn test_computer_cannot_move_out_of_turn() {
        let mut session = session(hard());
        assert!(matches!(session.computer_move(), Err(GameError::NotYourTurn { .. })));
    }

    #[test]
    fn test_human_cannot_move_out_of_turn() {
        let settings = TicTacToeSessionSettings {
            first_player: FirstPlayer::Computer,
            ..hard()
        };
        let mut session = session(settings);
        assert!(matches!(session.human_move(pos(4)), Err(GameError::NotYourTurn { .. })));
        session.computer_move().unwrap();
        assert!(session.state().is_human_turn());
    }

    #[test]
    fn test_hard_computer_punishes_mistake() {
        let mut session = session(hard());
        session.human_move(pos(1)).unwrap();
        session.computer_move().unwrap();

        let mut human_won = false;
        while !session.state().status().is_over() {
            let moves = session.state().available_moves();
            session.human_move(moves[0]).unwrap();
            if session.state().status().is_over() {
                human_won = session.state().status() == GameStatus::Won(Mark::X);
                break;
            }
            session.computer_move().unwrap();
        }

        assert!(!human_won);
        assert_eq!(session.status_message(), "Computer wins!");
    }

    #[test]
    fn test_restart_clears_board() {
        let mut session = session(hard());
        session.human_move(pos(4)).unwrap();
        session.restart().unwrap();
        assert!(session.state().board().is_empty());
        assert_eq!(session.state().move_count(), 0);
        assert!(session.state().is_human_turn());
    }

    #[test]
    fn test_set_difficulty_restarts() {
        let mut session = session(TicTacToeSessionSettings::default());
        session.human_move(pos(4)).unwrap();
        session.set_difficulty(Difficulty::Hard).unwrap();
        assert_eq!(session.difficulty(), Difficulty::Hard);
        assert!(session.state().board().is_empty());
    }

    #[test]
    fn test_moves_after_game_over_are_rejected() {
        let mut session = session(hard());
        while !session.state().status().is_over() {
            if session.state().is_human_turn() {
                let moves = session.state().available_moves();
                session.human_move(moves[0]).unwrap();
            } else {
                session.computer_move().unwrap();
            }
        }
        assert_eq!(session.computer_move(), Err(GameError::GameOver));
        assert_eq!(session.human_move(pos(0)), Err(GameError::GameOver));
    }

    #[test]
    fn test_random_first_player_uses_both_marks() {
        let settings = TicTacToeSessionSettings {
            first_player: FirstPlayer::Random,
            ..TicTacToeSessionSettings::default()
        };
        let mut session = session(settings);
        let mut human_first = 0;
        for _ in 0..64 {
            session.restart().unwrap();
            if session.state().is_human_turn() {
                human_first += 1;
            }
        }
        assert!(human_first > 0 && human_first < 64);
    }

    #[test]
    fn test_human_can_play_o() {
        let settings = TicTacToeSessionSettings {
            human_mark: Mark::O,
            first_player: FirstPlayer::Computer,
            ..hard()
        };
        let mut session = session(settings);
        let reply = session.computer_move().unwrap();
        assert_eq!(reply.mark, Mark::X);
        assert_eq!(reply.position, pos(0));
    }
}
