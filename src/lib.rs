//! Connect Four desktop game
//!
//! A two-player hotseat Connect Four with a native GUI:
//! - Standard 6x7 grid, tokens stack from the bottom up
//! - 4-in-a-row to win (rows, columns, both diagonals)
//! - Draw when the board fills with no run
//! - Welcome / playing / end-of-game screens
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Grid representation and token-dropping mechanics
//! - [`rules`]: Win and draw evaluation
//! - [`ui`]: egui/eframe shell (screens, board rendering, input mapping)
//!
//! # Quick Start
//!
//! ```
//! use connect_four::{Board, Token, rules};
//!
//! let mut board = Board::new();
//! board.drop_token(3, Token::Red).unwrap();
//!
//! assert!(!rules::check_winner(&board, Token::Red));
//! ```

pub mod board;
pub mod error;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Token, COLS, ROWS};
pub use error::MoveError;
pub use rules::{evaluate, Outcome};
