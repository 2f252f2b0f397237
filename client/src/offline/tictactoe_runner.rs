use std::io::Write;
use std::time::Duration;

use common::games::tictactoe::{GameError, TicTacToeSession};
use common::{log, log_debug, log_error};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::input::{Command, HELP_TEXT};
use crate::render::{render_board, render_status};

enum Flow {
    Continue,
    Quit,
}

/// Drives one session from line-based input until the player quits or the
/// input ends. The computer's reply waits `thinking_delay` first.
pub async fn run_tictactoe_game<R, W>(
    session: &mut TicTacToeSession,
    input: R,
    out: &mut W,
    thinking_delay: Duration,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    writeln!(out, "Tic-tac-toe: you are {}. Type 'h' for help.", session.state().human_mark())?;

    loop {
        if session.state().is_computer_turn() {
            writeln!(out, "{}", session.status_message())?;
            out.flush()?;
            tokio::time::sleep(thinking_delay).await;

            match session.computer_move() {
                Ok(outcome) => {
                    writeln!(out, "Computer played {}.", outcome.position.index() + 1)?;
                }
                Err(e) => {
                    log_error!("Computer move failed: {}", e);
                    writeln!(out, "Computer could not move: {}", e)?;
                    return Ok(());
                }
            }
        }

        writeln!(out)?;
        writeln!(out, "{}", render_board(session))?;
        writeln!(out, "{}", render_status(session))?;
        if session.state().status().is_over() {
            writeln!(out, "Type 'r' to play again or 'q' to quit.")?;
        }
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            log_debug!("Input closed, leaving game");
            writeln!(out)?;
            return Ok(());
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{}", message)?;
                continue;
            }
        };

        if let Flow::Quit = handle_command(session, command, out)? {
            writeln!(out, "Bye!")?;
            return Ok(());
        }
    }
}

fn handle_command<W: Write>(
    session: &mut TicTacToeSession,
    command: Command,
    out: &mut W,
) -> std::io::Result<Flow> {
    let result = match command {
        Command::Quit => return Ok(Flow::Quit),
        Command::Help => {
            writeln!(out, "{}", HELP_TEXT)?;
            Ok(())
        }
        Command::Restart => session.restart(),
        Command::SetDifficulty(difficulty) => session.set_difficulty(difficulty),
        Command::Place(position) => session.human_move(position).map(|_| ()),
    };

    match result {
        Ok(()) => {}
        Err(GameError::GameOver) => {
            writeln!(out, "The game is over. Type 'r' to play again.")?;
        }
        Err(e @ (GameError::CellOccupied(_) | GameError::NotYourTurn { .. })) => {
            writeln!(out, "{}", e)?;
        }
        Err(e) => {
            log!("Rejected command {:?}: {}", command, e);
            writeln!(out, "{}", e)?;
        }
    }

    Ok(Flow::Continue)
}
