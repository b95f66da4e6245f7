//! # Round Module
//!
//! The round state machine: one question at a time, a countdown per
//! question, scoring, and the end of the game.
//!
//! ## Sub-modules
//! - `types` - RoundState, RoundOutcome and the Renderer / AudioSignal collaborators
//! - `engine` - QuizEngine, the state machine itself
//!
//! ## States
//! ```text
//!            start_game                 answer / timeout
//!   Idle ───────────────> AwaitingAnswer ────────────────> Resolved
//!    ^                          ^                             │
//!    │ reset                    └──── feedback delay ─────────┤ (questions left)
//!    │                                                        │
//!    └──────────────────────── GameOver <── feedback delay ───┘ (12 asked)
//! ```
//!
//! ## Timing
//! At most one timer is live: the answer countdown while awaiting an
//! answer, the feedback delay while resolved. Every transition cancels the
//! live timer before scheduling the next, and [`QuizEngine::handle_timer`]
//! ignores ids that are not the live timer.
//!
//! A timeout is scored exactly like a wrong answer.
//!
//! ## Example
//! ```rust
//! use staff_quiz::{Headless, ManualClock, QuizConfig, QuizEngine, RoundState, RngSource};
//! use std::time::Duration;
//!
//! let mut engine = QuizEngine::new(
//!     ManualClock::new(),
//!     RngSource::seeded(7),
//!     Box::new(Headless),
//!     Box::new(Headless),
//! );
//! engine.start_game(QuizConfig::default())?;
//!
//! let answer = engine.current_question().unwrap().correct_letter();
//! let outcome = engine.submit_answer(answer).unwrap();
//! assert!(outcome.correct);
//! assert_eq!(engine.state(), RoundState::Resolved);
//!
//! // After the feedback delay the next question is up
//! engine.advance_clock(Duration::from_millis(1500));
//! assert_eq!(engine.state(), RoundState::AwaitingAnswer);
//! assert_eq!(engine.score().correct_count, 1);
//! # Ok::<(), staff_quiz::QuizError>(())
//! ```

mod types;
mod engine;


pub use types::{AudioSignal, Headless, Renderer, RoundOutcome, RoundState};
pub use engine::QuizEngine;
