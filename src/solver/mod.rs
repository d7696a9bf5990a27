pub mod minimax;

pub use minimax::{best_move, best_move_for, minimax};
