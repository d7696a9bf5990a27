use crate::board::Board;
use crate::rules;
use crate::types::Player;

/// Terminal score from the perspective of `side`, or None if the position is
/// not terminal. Wins score higher the sooner they arrive (`10 - depth`),
/// losses score lower the sooner they arrive (`depth - 10`), a full board
/// with no line scores 0. Scores fit i8: depth never exceeds 9.
#[inline]
pub fn terminal_score(board: &Board, side: Player, depth: u8) -> Option<i8> {
    #[allow(clippy::cast_possible_wrap)]
    let d = depth as i8;
    match rules::winner(board) {
        Some(w) if w == side => Some(10 - d),
        Some(_) => Some(d - 10),
        None if board.is_full() => Some(0),
        None => None,
    }
}
