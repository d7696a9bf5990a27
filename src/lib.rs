#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod rules;
pub mod board;
pub mod state;
pub mod rng;

pub mod engine {
    pub mod apply;
    pub mod score;
}

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::Board;
pub use crate::engine::apply::{check_game_over, is_valid_move, make_move};
pub use crate::engine::score::terminal_score;
pub use crate::rng::rng_for_game;
pub use crate::rules::{is_draw, winner};
pub use crate::solver::{best_move, best_move_for};
pub use crate::state::{available_moves, GameState, Move, Status};
pub use crate::types::Player;
