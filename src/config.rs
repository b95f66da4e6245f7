//! # Game Configuration
//!
//! A game is configured by a plain [`QuizConfig`] value passed to
//! [`QuizEngine::start_game`](crate::QuizEngine::start_game), and tuned by a
//! [`Timing`] value. Both have sensible defaults.
//!
//! Hosts that keep settings as text can load both from a small YAML
//! document:
//!
//! ```yaml
//! clef: mixed          # treble | bass | alto | mixed
//! difficulty: hard     # easy | hard
//! naming: solfege      # letter | solfege
//! countdown-easy-ms: 7000
//! countdown-hard-ms: 5000
//! feedback-delay-ms: 1500
//! ```
//!
//! Every key is optional. Unknown names are reported as
//! [`QuizError::Configuration`].

use serde::Deserialize;
use std::time::Duration;

use crate::error::QuizError;
use crate::model::{ClefSelection, Difficulty, NoteNaming};

/// Answer window for easy games
pub const COUNTDOWN_EASY: Duration = Duration::from_secs(7);
/// Answer window for hard games
pub const COUNTDOWN_HARD: Duration = Duration::from_secs(5);
/// Pause after a round resolves before the next question appears
pub const FEEDBACK_DELAY: Duration = Duration::from_millis(1500);

/// What to drill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuizConfig {
    pub clef: ClefSelection,
    pub difficulty: Difficulty,
    pub naming: NoteNaming,
}

/// Timer lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub countdown_easy: Duration,
    pub countdown_hard: Duration,
    pub feedback_delay: Duration,
}

impl Timing {
    pub fn countdown_for(&self, difficulty: Difficulty) -> Duration {
        match difficulty {
            Difficulty::Easy => self.countdown_easy,
            Difficulty::Hard => self.countdown_hard,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            countdown_easy: COUNTDOWN_EASY,
            countdown_hard: COUNTDOWN_HARD,
            feedback_delay: FEEDBACK_DELAY,
        }
    }
}

/// Raw settings for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawSettings {
    pub clef: Option<String>,
    pub difficulty: Option<String>,
    pub naming: Option<String>,
    pub countdown_easy_ms: Option<u64>,
    pub countdown_hard_ms: Option<u64>,
    pub feedback_delay_ms: Option<u64>,
}

/// Validated settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub quiz: QuizConfig,
    pub timing: Timing,
}

impl Settings {
    /// Parse a YAML settings document. An empty document yields the defaults.
    ///
    /// # Example
    /// ```rust
    /// use staff_quiz::{ClefSelection, Difficulty, Settings};
    /// use std::time::Duration;
    ///
    /// let settings = Settings::from_yaml("clef: mixed\ndifficulty: hard\ncountdown-hard-ms: 4000")?;
    /// assert_eq!(settings.quiz.clef, ClefSelection::Mixed);
    /// assert_eq!(settings.quiz.difficulty, Difficulty::Hard);
    /// assert_eq!(settings.timing.countdown_hard, Duration::from_secs(4));
    /// # Ok::<(), staff_quiz::QuizError>(())
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, QuizError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawSettings = serde_yaml::from_str(source)
            .map_err(|e| QuizError::Configuration(e.to_string()))?;
        Self::from_raw(&raw)
    }

    pub fn from_raw(raw: &RawSettings) -> Result<Self, QuizError> {
        let defaults = Self::default();

        let clef = match &raw.clef {
            Some(name) => ClefSelection::from_str(name)
                .ok_or_else(|| QuizError::Configuration(format!("unknown clef '{}'", name)))?,
            None => defaults.quiz.clef,
        };

        let difficulty = match &raw.difficulty {
            Some(name) => Difficulty::from_str(name).ok_or_else(|| {
                QuizError::Configuration(format!("unknown difficulty '{}'", name))
            })?,
            None => defaults.quiz.difficulty,
        };

        let naming = match &raw.naming {
            Some(name) => NoteNaming::from_str(name).ok_or_else(|| {
                QuizError::Configuration(format!("unknown note naming '{}'", name))
            })?,
            None => defaults.quiz.naming,
        };

        let timing = Timing {
            countdown_easy: millis("countdown-easy-ms", raw.countdown_easy_ms)?
                .unwrap_or(defaults.timing.countdown_easy),
            countdown_hard: millis("countdown-hard-ms", raw.countdown_hard_ms)?
                .unwrap_or(defaults.timing.countdown_hard),
            feedback_delay: raw
                .feedback_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.timing.feedback_delay),
        };

        Ok(Self {
            quiz: QuizConfig {
                clef,
                difficulty,
                naming,
            },
            timing,
        })
    }
}

/// Answer windows must be positive; a zero window would time out every round.
fn millis(key: &str, value: Option<u64>) -> Result<Option<Duration>, QuizError> {
    match value {
        Some(0) => Err(QuizError::Configuration(format!("{} must be greater than zero", key))),
        Some(ms) => Ok(Some(Duration::from_millis(ms))),
        None => Ok(None),
    }
}
