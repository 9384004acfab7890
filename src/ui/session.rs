//! Session and screen state machine
//!
//! One session runs the `Welcome -> Playing -> GameEnd` cycle. The board
//! and turn live here; the egui layer only forwards commit signals and
//! column selections.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::board::{Board, Pos, Token, COLS};
use crate::error::MoveError;
use crate::rules::{self, Outcome};

/// How long a drawn game lingers on the end screen before a fresh game
/// starts on its own. Wins wait for input instead.
pub const DRAW_RESTART_DELAY: Duration = Duration::from_millis(1000);

/// Result shown on the end screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndResult {
    Win(Token),
    Draw,
}

/// Which screen the app is on.
#[derive(Debug, Clone, Copy)]
pub enum Screen {
    Welcome,
    Playing,
    GameEnd { result: EndResult, since: Instant },
}

/// Main game session
pub struct Session {
    pub board: Board,
    pub turn: Token,
    pub screen: Screen,
    pub last_drop: Option<Pos>,
    pub winning_run: Option<[Pos; 4]>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Token::Red,
            screen: Screen::Welcome,
            last_drop: None,
            winning_run: None,
        }
    }

    /// Leave the current screen and start a fresh game, Red to move.
    pub fn start_game(&mut self) {
        info!("new game, {} to move", Token::Red.label());
        self.reset_play();
    }

    /// Back to the welcome screen, discarding the board.
    pub fn to_menu(&mut self) {
        info!("returning to menu");
        self.reset_play();
        self.screen = Screen::Welcome;
    }

    fn reset_play(&mut self) {
        self.board = Board::new();
        self.turn = Token::Red;
        self.last_drop = None;
        self.winning_run = None;
        self.screen = Screen::Playing;
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.screen, Screen::Playing)
    }

    /// Attempt to drop the current player's token into `col`.
    ///
    /// On success the board is updated and the outcome re-evaluated:
    /// either the turn toggles or the screen moves to `GameEnd`. Refused
    /// drops leave the session untouched.
    pub fn try_drop(&mut self, col: usize) -> Result<(), MoveError> {
        if !self.is_playing() {
            return Err(MoveError::NotPlaying);
        }
        if !self.board.is_valid_move(col) {
            return Err(if col >= COLS {
                MoveError::OutOfRange { col }
            } else {
                MoveError::ColumnFull { col }
            });
        }

        let mover = self.turn;
        let pos = self.board.drop_token(col, mover)?;
        self.last_drop = Some(pos);
        debug!("{} dropped in column {col}", mover.label());

        match rules::evaluate(&self.board, mover) {
            Outcome::Win(winner) => {
                self.winning_run = rules::winning_run(&self.board, winner);
                info!("{} wins", winner.label());
                self.screen = Screen::GameEnd {
                    result: EndResult::Win(winner),
                    since: Instant::now(),
                };
            }
            Outcome::Draw => {
                info!("draw, board is full");
                self.screen = Screen::GameEnd {
                    result: EndResult::Draw,
                    since: Instant::now(),
                };
            }
            Outcome::InProgress => {
                self.turn = mover.opponent();
            }
        }
        Ok(())
    }

    /// Commit on the end screen's "play again" zone.
    pub fn play_again(&mut self) {
        if matches!(self.screen, Screen::GameEnd { .. }) {
            info!("play again");
            self.reset_play();
        }
    }

    /// Advance a drawn game to a fresh one once its delay has elapsed.
    ///
    /// Returns the time left before the restart if one is still pending,
    /// so the caller can schedule a wake-up instead of polling.
    pub fn poll_draw_restart(&mut self) -> Option<Duration> {
        if let Screen::GameEnd {
            result: EndResult::Draw,
            since,
        } = self.screen
        {
            let elapsed = since.elapsed();
            if elapsed >= DRAW_RESTART_DELAY {
                info!("draw delay elapsed, starting fresh game");
                self.reset_play();
                None
            } else {
                Some(DRAW_RESTART_DELAY - elapsed)
            }
        } else {
            None
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ROWS;

    fn playing_session() -> Session {
        let mut session = Session::new();
        session.start_game();
        session
    }

    /// Tiling whose longest run in every direction is 2 (see rules tests).
    fn draw_pattern_token(height: usize, col: usize) -> Token {
        match (height + 2 * col) % 4 {
            0 | 1 => Token::Red,
            _ => Token::Yellow,
        }
    }

    #[test]
    fn test_welcome_commit_starts_play() {
        let mut session = Session::new();
        assert!(matches!(session.screen, Screen::Welcome));
        assert_eq!(session.try_drop(3), Err(MoveError::NotPlaying));

        session.start_game();
        assert!(session.is_playing());
        assert_eq!(session.turn, Token::Red);
    }

    #[test]
    fn test_successful_drop_toggles_turn() {
        let mut session = playing_session();

        session.try_drop(3).unwrap();
        assert_eq!(session.turn, Token::Yellow);
        assert_eq!(session.last_drop, Some(Pos::new(5, 3)));

        session.try_drop(3).unwrap();
        assert_eq!(session.turn, Token::Red);
        assert_eq!(session.last_drop, Some(Pos::new(4, 3)));
    }

    #[test]
    fn test_out_of_range_column_is_a_no_op() {
        let mut session = playing_session();

        assert_eq!(session.try_drop(7), Err(MoveError::OutOfRange { col: 7 }));
        assert_eq!(session.turn, Token::Red);
        assert_eq!(session.last_drop, None);
        assert!(session.is_playing());
    }

    #[test]
    fn test_full_column_is_a_no_op() {
        let mut session = playing_session();
        for _ in 0..ROWS {
            session.try_drop(0).unwrap();
        }

        let turn_before = session.turn;
        assert_eq!(session.try_drop(0), Err(MoveError::ColumnFull { col: 0 }));
        assert_eq!(session.turn, turn_before);
        assert!(session.is_playing());
    }

    #[test]
    fn test_vertical_win_ends_the_game() {
        let mut session = playing_session();
        // Red stacks column 0, Yellow column 1
        for _ in 0..3 {
            session.try_drop(0).unwrap();
            session.try_drop(1).unwrap();
        }
        session.try_drop(0).unwrap();

        match session.screen {
            Screen::GameEnd {
                result: EndResult::Win(winner),
                ..
            } => assert_eq!(winner, Token::Red),
            _ => panic!("expected a red win"),
        }
        assert!(session.winning_run.is_some());

        // Frozen until a commit: further drops are refused
        assert_eq!(session.try_drop(2), Err(MoveError::NotPlaying));
    }

    #[test]
    fn test_play_again_resets_board_and_turn() {
        let mut session = playing_session();
        for _ in 0..3 {
            session.try_drop(0).unwrap();
            session.try_drop(1).unwrap();
        }
        session.try_drop(0).unwrap();

        session.play_again();
        assert!(session.is_playing());
        assert_eq!(session.turn, Token::Red);
        assert!(session.board.is_valid_move(0));
        assert_eq!(session.board.column_height(0), 0);
        assert_eq!(session.last_drop, None);
        assert_eq!(session.winning_run, None);
    }

    #[test]
    fn test_menu_zone_returns_to_welcome() {
        let mut session = playing_session();
        for _ in 0..3 {
            session.try_drop(0).unwrap();
            session.try_drop(1).unwrap();
        }
        session.try_drop(0).unwrap();

        session.to_menu();
        assert!(matches!(session.screen, Screen::Welcome));
        assert_eq!(session.board.column_height(0), 0);
    }

    #[test]
    fn test_filling_the_board_without_a_run_is_a_draw() {
        let mut session = playing_session();
        // Prepare every cell except the top of column 6, then let the
        // session apply the final, non-winning drop
        for col in 0..COLS {
            for height in 0..ROWS {
                if col == 6 && height == ROWS - 1 {
                    continue;
                }
                session
                    .board
                    .drop_token(col, draw_pattern_token(height, col))
                    .unwrap();
            }
        }
        session.turn = Token::Red;

        session.try_drop(6).unwrap();
        assert!(matches!(
            session.screen,
            Screen::GameEnd {
                result: EndResult::Draw,
                ..
            }
        ));
    }

    #[test]
    fn test_draw_auto_advances_after_the_delay() {
        let mut session = playing_session();
        session.screen = Screen::GameEnd {
            result: EndResult::Draw,
            since: Instant::now(),
        };

        // Right after the draw the restart is still pending
        let remaining = session.poll_draw_restart();
        assert!(remaining.is_some());
        assert!(remaining.unwrap() <= DRAW_RESTART_DELAY);
        assert!(matches!(session.screen, Screen::GameEnd { .. }));

        // Once the delay has elapsed the session starts a fresh game
        session.screen = Screen::GameEnd {
            result: EndResult::Draw,
            since: Instant::now() - DRAW_RESTART_DELAY,
        };
        assert_eq!(session.poll_draw_restart(), None);
        assert!(session.is_playing());
        assert_eq!(session.turn, Token::Red);
    }

    #[test]
    fn test_win_does_not_auto_advance() {
        let mut session = playing_session();
        session.screen = Screen::GameEnd {
            result: EndResult::Win(Token::Red),
            since: Instant::now() - DRAW_RESTART_DELAY,
        };

        assert_eq!(session.poll_draw_restart(), None);
        assert!(matches!(session.screen, Screen::GameEnd { .. }));
    }
}
