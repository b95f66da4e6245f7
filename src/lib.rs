//! Timed staff-reading drills.
//!
//! A game shows twelve notes one at a time on a treble, bass or alto
//! staff. For each note the player picks its name from four options
//! before the countdown runs out; a timeout counts as a wrong answer.
//!
//! ```rust
//! use staff_quiz::{Headless, ManualClock, QuizEngine, RngSource, RoundState, Settings};
//!
//! let settings = Settings::from_yaml("clef: bass\ndifficulty: easy")?;
//! let mut engine = QuizEngine::new(
//!     ManualClock::new(),
//!     RngSource::seeded(3),
//!     Box::new(Headless),
//!     Box::new(Headless),
//! )
//! .with_timing(settings.timing);
//!
//! engine.start_game(settings.quiz)?;
//! while engine.state() != RoundState::GameOver {
//!     if let Some(question) = engine.current_question() {
//!         let answer = question.correct_letter();
//!         engine.submit_answer(answer);
//!     }
//!     engine.advance_clock(settings.timing.feedback_delay);
//! }
//! assert_eq!(engine.score().correct_count, 12);
//! # Ok::<(), staff_quiz::QuizError>(())
//! ```

pub mod catalog;
pub mod clock;
pub mod config;
pub mod distractor;
pub mod error;
pub mod model;
pub mod question;
pub mod random;
pub mod round;
pub mod score;
pub mod staff;
pub mod text_staff;

pub use catalog::{range_for, range_for_names};
pub use clock::{Clock, Countdown, ManualClock, TimerId};
pub use config::{QuizConfig, RawSettings, Settings, Timing};
pub use distractor::{AnswerOption, OPTION_COUNT};
pub use error::*;
pub use model::*;
pub use question::{generate, resolve_clef, Question};
pub use random::{RandomSource, RngSource, SequenceSource};
pub use round::{AudioSignal, Headless, QuizEngine, Renderer, RoundOutcome, RoundState};
pub use score::{ScoreSummary, ScoreTracker, TOTAL_QUESTIONS};
pub use staff::{position_for, StaffPosition, StemDirection};
pub use text_staff::{draw_staff, TextStaffRenderer};
