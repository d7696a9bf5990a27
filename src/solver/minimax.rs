use crate::board::Board;
use crate::engine::score::terminal_score;
use crate::state::{GameState, Move};
use crate::types::{idx_to_rc, Player};

/// Exhaustive minimax evaluator, depth-bounded by the number of empty cells
/// (at most 9 plies). No pruning: the full tree from any reachable position
/// has at most 9! leaf paths and terminal checks cut most branches early.
///
/// `side` is the maximizing player's mark. The maximizing branch places
/// `side`, the minimizing branch places the opponent's mark; children are
/// visited in row-major order and folded with max/min. The board is mutated
/// in place and restored before returning.
pub fn minimax(board: &mut Board, side: Player, depth: u8, is_maximizing: bool) -> i8 {
    if let Some(score) = terminal_score(board, side, depth) {
        return score;
    }

    let mark = if is_maximizing { side } else { side.other() };
    let mut best: i8 = if is_maximizing { i8::MIN } else { i8::MAX };
    for idx in 0u8..9u8 {
        if board.is_empty(idx) {
            board.set(idx, Some(mark));
            let score = minimax(board, side, depth + 1, !is_maximizing);
            board.set(idx, None);
            best = if is_maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
    }
    best
}

/// Optimal move for `side` assuming it is `side`'s turn, or None when no
/// moves remain. Each candidate is scored with `side`'s mark placed and the
/// opponent to move next (`depth = 0`, minimizing). Ties keep the first
/// candidate in row-major order (strict `>`), so the result is deterministic
/// for a fixed board. The caller's state is never mutated: the search runs
/// mutate-then-undo on a private copy of the board.
pub fn best_move_for(state: &GameState, side: Player) -> Option<Move> {
    let mut board = state.board;
    let mut best_score = i8::MIN;
    let mut best_move = None;

    for idx in 0u8..9u8 {
        if board.is_empty(idx) {
            board.set(idx, Some(side));
            let score = minimax(&mut board, side, 0, false);
            board.set(idx, None);
            if score > best_score {
                best_score = score;
                let (row, col) = idx_to_rc(idx);
                best_move = Some(Move { row, col });
            }
        }
    }
    best_move
}

/// Optimal reply for the computer player; the engine's public search entry
/// point. Callers should not invoke this once `game_over` is set.
#[inline]
pub fn best_move(state: &GameState) -> Option<Move> {
    best_move_for(state, state.computer)
}
