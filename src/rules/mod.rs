//! Game rules for Connect Four
//!
//! This module implements win and draw evaluation:
//! - 4-in-a-row detection along rows, columns, and both diagonals
//! - Draw detection on a full board

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, evaluate, winning_run, Outcome, RUN_LEN};
