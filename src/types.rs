use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// Board indexing helpers (3x3 board)
#[inline]
pub fn idx_to_rc(idx: u8) -> (u8, u8) {
    debug_assert!(idx < 9);
    (idx / 3, idx % 3)
}

/// Coordinates are signed so out-of-range input (negatives included) maps to
/// None instead of panicking; callers treat None as an ordinary invalid move.
#[inline]
pub fn rc_to_idx(r: i8, c: i8) -> Option<u8> {
    if (0..3).contains(&r) && (0..3).contains(&c) {
        Some((r * 3 + c) as u8)
    } else {
        None
    }
}
