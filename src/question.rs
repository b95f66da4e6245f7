//! Question generation.
//!
//! A question is one note on one concrete clef. Draws are independent: the
//! same note may come up twice in a row.

use serde::Serialize;
use tracing::debug;

use crate::catalog::range_for;
use crate::config::QuizConfig;
use crate::model::{Clef, ClefSelection, NoteName, Pitch};
use crate::random::RandomSource;

/// The note shown for one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pitch: Pitch,
    clef: Clef,
    correct_letter: NoteName,
}

impl Question {
    pub fn new(pitch: Pitch, clef: Clef) -> Self {
        Self {
            pitch,
            clef,
            correct_letter: pitch.name,
        }
    }

    pub fn pitch(&self) -> Pitch {
        self.pitch
    }

    pub fn clef(&self) -> Clef {
        self.clef
    }

    pub fn correct_letter(&self) -> NoteName {
        self.correct_letter
    }

    /// Letter index of the answer (C=0 … B=6)
    pub fn correct_index(&self) -> u8 {
        self.correct_letter.index()
    }
}

/// Resolve `Mixed` to one of the three clefs, uniformly.
pub fn resolve_clef<R: RandomSource>(selection: ClefSelection, rng: &mut R) -> Clef {
    match selection {
        ClefSelection::Fixed(clef) => clef,
        ClefSelection::Mixed => Clef::ALL[rng.next_index(Clef::ALL.len())],
    }
}

/// Draw a question for the configured clef and difficulty.
///
/// # Example
/// ```rust
/// use staff_quiz::{generate, Clef, Difficulty, NoteName, QuizConfig, SequenceSource};
///
/// let config = QuizConfig { clef: Clef::Treble.into(), difficulty: Difficulty::Easy, ..Default::default() };
/// // Index 0 of the easy treble range is E4
/// let question = generate(&config, &mut SequenceSource::new(vec![0]));
///
/// assert_eq!(question.pitch().to_string(), "E4");
/// assert_eq!(question.correct_letter(), NoteName::E);
/// assert_eq!(question.correct_index(), 2);
/// ```
pub fn generate<R: RandomSource>(config: &QuizConfig, rng: &mut R) -> Question {
    let clef = resolve_clef(config.clef, rng);
    let range = range_for(clef, config.difficulty);
    let pitch = range[rng.next_index(range.len())];
    debug!(%clef, %pitch, difficulty = %config.difficulty, "generated question");
    Question::new(pitch, clef)
}
