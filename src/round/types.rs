//! Round state, outcomes, and the collaborators the engine calls into.

use serde::Serialize;
use std::fmt;

use crate::distractor::AnswerOption;
use crate::model::{Clef, NoteName, Pitch};
use crate::question::Question;
use crate::staff::StaffPosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundState {
    /// No game running
    #[default]
    Idle,
    /// A question is shown and its countdown is running
    AwaitingAnswer,
    /// The round was answered or timed out; feedback is showing
    Resolved,
    /// All questions asked
    GameOver,
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RoundState::Idle => "idle",
            RoundState::AwaitingAnswer => "awaiting-answer",
            RoundState::Resolved => "resolved",
            RoundState::GameOver => "game-over",
        })
    }
}

/// How a round ended
///
/// `chosen` is `None` when the countdown ran out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundOutcome {
    pub question: Question,
    pub options: Vec<AnswerOption>,
    pub chosen: Option<NoteName>,
    pub correct: bool,
}

impl RoundOutcome {
    pub fn timed_out(&self) -> bool {
        self.chosen.is_none()
    }
}

/// Draws the question. Called once per round.
pub trait Renderer {
    fn render(&mut self, pitch: Pitch, clef: Clef, position: &StaffPosition);
}

/// Sound cues. Fire-and-forget: the engine never waits on them.
pub trait AudioSignal {
    fn play_question_tone(&mut self, pitch: Pitch);
    fn play_feedback(&mut self, correct: bool);
}

/// No-op renderer and audio for hosts without a screen or speakers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl Renderer for Headless {
    fn render(&mut self, _pitch: Pitch, _clef: Clef, _position: &StaffPosition) {}
}

impl AudioSignal for Headless {
    fn play_question_tone(&mut self, _pitch: Pitch) {}
    fn play_feedback(&mut self, _correct: bool) {}
}
