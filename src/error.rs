//! # Error Types
//!
//! All fallible operations in the quiz engine return [`QuizError`].
//!
//! ## Error Types
//! - `Configuration` - An unknown clef, difficulty or naming value, or a
//!   malformed settings document
//! - `InvalidTransition` - A game-level command issued in a state that does
//!   not accept it (e.g. starting a second game without resetting)
//!
//! Answers that arrive after a round has already resolved are *not* errors:
//! the engine drops them and logs the event. See
//! [`QuizEngine::submit_answer`](crate::QuizEngine::submit_answer).
//!
//! ## Usage
//! ```rust
//! use staff_quiz::{Settings, QuizError};
//!
//! match Settings::from_yaml("clef: soprano") {
//!     Ok(_) => unreachable!(),
//!     Err(QuizError::Configuration(message)) => assert!(message.contains("soprano")),
//!     Err(e) => panic!("unexpected error: {}", e),
//! }
//! ```

use thiserror::Error;

use crate::round::RoundState;

#[derive(Error, Debug)]
pub enum QuizError {
    /// Invalid configuration value.
    ///
    /// The configuration surface is a closed set of names, so this only
    /// happens when settings are supplied as text.
    ///
    /// # Example
    /// ```
    /// # use staff_quiz::QuizError;
    /// let err = QuizError::Configuration("unknown clef 'tenor'".to_string());
    /// assert_eq!(err.to_string(), "Configuration error: unknown clef 'tenor'");
    /// ```
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A command was issued in a state that does not accept it.
    ///
    /// # Example
    /// ```
    /// # use staff_quiz::{QuizError, RoundState};
    /// let err = QuizError::InvalidTransition {
    ///     action: "start a game",
    ///     state: RoundState::GameOver,
    /// };
    /// assert_eq!(err.to_string(), "Cannot start a game while the quiz is game-over");
    /// ```
    #[error("Cannot {action} while the quiz is {state}")]
    InvalidTransition {
        action: &'static str,
        state: RoundState,
    },
}
