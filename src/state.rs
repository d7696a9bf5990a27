use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::rules;
use crate::types::{idx_to_rc, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: u8, // 0..=2
    pub col: u8, // 0..=2
}

/// Derived view of the game's lifecycle; `game_over`/`winner` remain the
/// stored representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    Won(Player),
    Drawn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub human: Player,
    pub computer: Player,
    pub current_player: Player,
    pub game_over: bool,
    pub winner: Option<Player>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game: empty board, human plays X and moves first. Sides are
    /// fixed for the lifetime of the state.
    #[inline]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            human: Player::X,
            computer: Player::O,
            current_player: Player::X,
            game_over: false,
            winner: None,
        }
    }

    /// Restores the initial state wholesale; equivalent to replacing the
    /// state with `GameState::new()`.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns empty cells in row-major order (row 0..2, column 0..2 within
    /// each row). The order determines search tie-breaking, so it is part of
    /// the contract.
    pub fn available_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity((9 - self.board.filled_count()) as usize);
        for idx in 0u8..9u8 {
            if self.board.is_empty(idx) {
                let (row, col) = idx_to_rc(idx);
                moves.push(Move { row, col });
            }
        }
        moves
    }

    #[inline]
    pub fn status(&self) -> Status {
        match (self.game_over, self.winner) {
            (false, _) => Status::InProgress,
            (true, Some(p)) => Status::Won(p),
            (true, None) => Status::Drawn,
        }
    }

    #[inline]
    pub fn get_winner(&self) -> Option<Player> {
        rules::winner(&self.board)
    }

    #[inline]
    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }
}

/// Re-export minimal surface for callers as free functions to align with the
/// crate-level API.
#[inline]
pub fn available_moves(state: &GameState) -> Vec<Move> {
    state.available_moves()
}
