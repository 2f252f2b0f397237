use super::board::Board;
use super::error::BotError;
use super::types::{Mark, Position, ScoringMode};
use super::win_detector::check_win;

const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub position: Position,
    pub score: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions evaluated below the root.
    pub nodes: u64,
}

/// Finds the best move for `bot_mark`, exploring every continuation to a
/// terminal position. `bot_mark` maximizes, its opponent minimizes.
///
/// Ties go to the lowest cell index.
pub fn search(board: &Board, bot_mark: Mark, scoring: ScoringMode) -> Result<SearchResult, BotError> {
    search_with_stats(board, bot_mark, scoring).map(|(result, _)| result)
}

pub fn search_with_stats(
    board: &Board,
    bot_mark: Mark,
    scoring: ScoringMode,
) -> Result<(SearchResult, SearchStats), BotError> {
    let opponent_mark = bot_mark.opponent().ok_or(BotError::InvalidMark)?;
    let available_moves = board.available_moves();

    if available_moves.is_empty() {
        return Err(BotError::NoAvailableMoves);
    }
    if check_win(board).is_some() {
        return Err(BotError::GameAlreadyOver);
    }

    let mut board = *board;
    let mut stats = SearchStats::default();
    let mut best: Option<SearchResult> = None;

    for pos in available_moves {
        board.set(pos, bot_mark);
        let score = minimax(&mut board, 0, false, bot_mark, opponent_mark, scoring, &mut stats);
        board.clear(pos);

        if best.is_none_or(|b| score > b.score) {
            best = Some(SearchResult { position: pos, score });
        }
    }

    best.map(|result| (result, stats)).ok_or(BotError::NoAvailableMoves)
}

fn terminal_score(bot_won: bool, depth: usize, scoring: ScoringMode) -> i32 {
    let depth = depth as i32;
    match (scoring, bot_won) {
        (ScoringMode::DepthWeighted, true) => WIN_SCORE - depth,
        (ScoringMode::DepthWeighted, false) => depth - WIN_SCORE,
        (ScoringMode::Flat, true) => WIN_SCORE,
        (ScoringMode::Flat, false) => -WIN_SCORE,
    }
}

fn minimax(
    board: &mut Board,
    depth: usize,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
    scoring: ScoringMode,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    if let Some(winner) = check_win(board) {
        return terminal_score(winner == bot_mark, depth, scoring);
    }

    let moves = board.available_moves();
    if moves.is_empty() {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for pos in moves {
            board.set(pos, bot_mark);
            let eval = minimax(board, depth + 1, false, bot_mark, opponent_mark, scoring, stats);
            board.clear(pos);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for pos in moves {
            board.set(pos, opponent_mark);
            let eval = minimax(board, depth + 1, true, bot_mark, opponent_mark, scoring, stats);
            board.clear(pos);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}
