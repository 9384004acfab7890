/// Reasons a requested drop can be refused.
///
/// The UI treats all of these as no-ops; they are surfaced as typed errors
/// so callers can tell the cases apart in logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {col} is outside the board")]
    OutOfRange { col: usize },

    #[error("column {col} is full")]
    ColumnFull { col: usize },

    #[error("no game in progress")]
    NotPlaying,
}
