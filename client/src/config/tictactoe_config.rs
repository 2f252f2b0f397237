use common::config::Validate;
use common::games::tictactoe::{
    Difficulty, FirstPlayer, Mark, ScoringMode, TicTacToeSessionSettings,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TicTacToeConfig {
    pub difficulty: Difficulty,
    pub human_mark: Mark,
    pub first_player: FirstPlayer,
    pub scoring: ScoringMode,
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.human_mark == Mark::Empty {
            return Err("human_mark must be X or O".to_string());
        }
        Ok(())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            human_mark: Mark::X,
            first_player: FirstPlayer::Human,
            scoring: ScoringMode::DepthWeighted,
        }
    }
}

impl From<&TicTacToeConfig> for TicTacToeSessionSettings {
    fn from(cfg: &TicTacToeConfig) -> Self {
        Self {
            human_mark: cfg.human_mark,
            first_player: cfg.first_player,
            difficulty: cfg.difficulty,
            scoring: cfg.scoring,
        }
    }
}
