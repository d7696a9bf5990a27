use crate::board::Board;
use crate::types::Player;

/// The eight winning lines as flat cell indices, in the fixed scan order:
/// three rows, three columns, main diagonal, anti-diagonal. The order only
/// matters when several lines are complete at once, which cannot happen in a
/// legally played game but must still resolve deterministically.
const LINES: [[u8; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the owner of the first complete line found in scan order, or None.
#[inline]
pub fn winner(board: &Board) -> Option<Player> {
    for line in LINES {
        if let Some(p) = board.get(line[0]) {
            if board.get(line[1]) == Some(p) && board.get(line[2]) == Some(p) {
                return Some(p);
            }
        }
    }
    None
}

/// A draw is a full board with no complete line.
#[inline]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}
