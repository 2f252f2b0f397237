use super::board::Board;
use super::error::GameError;
use super::types::{GameStatus, Mark, Position, WinningLine};
use super::win_detector::check_win_with_line;

/// One game between the human and the computer. Only [`place_mark`] writes
/// to the board once the game has started.
///
/// [`place_mark`]: TicTacToeGameState::place_mark
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    human_mark: Mark,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<Position>,
    winning_line: Option<WinningLine>,
    move_count: usize,
}

impl TicTacToeGameState {
    pub fn new(human_mark: Mark, first_mark: Mark) -> Result<Self, GameError> {
        if human_mark.is_empty() {
            return Err(GameError::InvalidMark(human_mark.symbol()));
        }
        if first_mark.is_empty() {
            return Err(GameError::InvalidMark(first_mark.symbol()));
        }

        Ok(Self {
            board: Board::new(),
            human_mark,
            current_mark: first_mark,
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
            move_count: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn computer_mark(&self) -> Mark {
        // human_mark is never Empty, checked in new()
        self.human_mark.opponent().unwrap_or(Mark::O)
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn is_human_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == self.human_mark
    }

    pub fn is_computer_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == self.computer_mark()
    }

    pub fn available_moves(&self) -> Vec<Position> {
        if self.status.is_over() {
            return Vec::new();
        }
        self.board.available_moves()
    }

    pub fn place_mark(&mut self, mark: Mark, pos: Position) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        if mark != self.current_mark {
            return Err(GameError::NotYourTurn {
                expected: self.current_mark,
                found: mark,
            });
        }

        self.board.place(pos, mark)?;
        self.last_move = Some(pos);
        self.move_count += 1;

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(self.status)
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self) {
        if let Some(line) = check_win_with_line(&self.board) {
            self.status = GameStatus::Won(line.mark);
            self.winning_line = Some(line);
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}
