use crate::rules;
use crate::state::GameState;
use crate::types::rc_to_idx;

/// A move is valid iff both indices are in [0,2] and the target cell is
/// empty. Out-of-range coordinates are a normal invalid result, not an error.
#[inline]
pub fn is_valid_move(state: &GameState, row: i8, col: i8) -> bool {
    match rc_to_idx(row, col) {
        Some(idx) => state.board.is_empty(idx),
        None => false,
    }
}

/// Applies a move for `state.current_player`. Returns false without mutating
/// anything when the game is already over or the move is invalid. On success:
/// occupies the cell, re-evaluates terminal status, and flips the turn only
/// if the game did not just end.
pub fn make_move(state: &mut GameState, row: i8, col: i8) -> bool {
    if state.game_over {
        return false;
    }
    let Some(idx) = rc_to_idx(row, col) else {
        return false;
    };
    if !state.board.is_empty(idx) {
        return false;
    }

    state.board.set(idx, Some(state.current_player));
    check_game_over(state);
    if !state.game_over {
        state.current_player = state.current_player.other();
    }
    true
}

/// Sets `game_over`/`winner` from the board: a complete line wins, otherwise
/// a full board is a draw, otherwise the game continues.
pub fn check_game_over(state: &mut GameState) {
    if let Some(w) = rules::winner(&state.board) {
        state.winner = Some(w);
        state.game_over = true;
    } else if state.board.is_full() {
        state.game_over = true;
        state.winner = None;
    }
}
