mod config;
mod tictactoe_config;

pub use config::{Config, get_config_manager, get_config_manager_for};
pub use tictactoe_config::TicTacToeConfig;
