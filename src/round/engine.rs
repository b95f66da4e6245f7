//! Quiz state machine
//!
//! Owns the only mutable session state (round state, score, live question,
//! live timer) and reacts to two inputs: user answers and timer firings.

use std::time::Duration;
use tracing::{debug, info};

use crate::clock::{Clock, Countdown, ManualClock, TimerId};
use crate::config::{QuizConfig, Timing};
use crate::distractor::{options, AnswerOption};
use crate::error::QuizError;
use crate::model::NoteName;
use crate::question::{generate, Question};
use crate::random::RandomSource;
use crate::score::{ScoreSummary, ScoreTracker};
use crate::staff::{position_for, StaffPosition};
use super::types::{AudioSignal, Renderer, RoundOutcome, RoundState};

type RoundListener = Box<dyn FnMut(&RoundOutcome)>;
type GameOverListener = Box<dyn FnMut(&ScoreSummary)>;

/// The question on screen while awaiting an answer
#[derive(Debug, Clone)]
struct LiveRound {
    question: Question,
    options: Vec<AnswerOption>,
    position: StaffPosition,
    countdown: Countdown,
}

pub struct QuizEngine<C, R> {
    clock: C,
    rng: R,
    renderer: Box<dyn Renderer>,
    audio: Box<dyn AudioSignal>,
    timing: Timing,
    config: QuizConfig,
    state: RoundState,
    score: ScoreTracker,
    round: Option<LiveRound>,
    /// Answer countdown or feedback delay, never both
    timer: Option<TimerId>,
    round_listeners: Vec<RoundListener>,
    game_over_listeners: Vec<GameOverListener>,
}

impl<C: Clock, R: RandomSource> QuizEngine<C, R> {
    pub fn new(
        clock: C,
        rng: R,
        renderer: Box<dyn Renderer>,
        audio: Box<dyn AudioSignal>,
    ) -> Self {
        Self {
            clock,
            rng,
            renderer,
            audio,
            timing: Timing::default(),
            config: QuizConfig::default(),
            state: RoundState::Idle,
            score: ScoreTracker::new(),
            round: None,
            timer: None,
            round_listeners: Vec::new(),
            game_over_listeners: Vec::new(),
        }
    }

    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Called after every resolved round, answered or timed out.
    pub fn on_round_resolved(&mut self, listener: impl FnMut(&RoundOutcome) + 'static) {
        self.round_listeners.push(Box::new(listener));
    }

    /// Called once when the last round's feedback delay ends.
    pub fn on_game_over(&mut self, listener: impl FnMut(&ScoreSummary) + 'static) {
        self.game_over_listeners.push(Box::new(listener));
    }

    /// Reset the score and show the first question.
    ///
    /// Only valid from [`RoundState::Idle`]; call [`reset`](Self::reset)
    /// after a finished game.
    pub fn start_game(&mut self, config: QuizConfig) -> Result<(), QuizError> {
        if self.state != RoundState::Idle {
            return Err(QuizError::InvalidTransition {
                action: "start a game",
                state: self.state,
            });
        }
        info!(clef = %config.clef, difficulty = %config.difficulty, "game started");
        self.config = config;
        self.score.reset();
        self.begin_round();
        Ok(())
    }

    /// Answer the live question.
    ///
    /// Returns `None` (and changes nothing) unless a question is awaiting an
    /// answer, so a late or duplicate click can never be scored twice.
    pub fn submit_answer(&mut self, letter: NoteName) -> Option<RoundOutcome> {
        if self.state != RoundState::AwaitingAnswer {
            debug!(%letter, state = %self.state, "stale answer ignored");
            return None;
        }
        self.resolve(Some(letter))
    }

    /// Deliver a timer firing from the clock.
    ///
    /// Returns `false` for ids that are not the live timer, such as a
    /// countdown that was cancelled by an answer but fired anyway.
    pub fn handle_timer(&mut self, id: TimerId) -> bool {
        if self.timer != Some(id) {
            debug!(?id, state = %self.state, "ignoring stale timer");
            return false;
        }
        self.timer = None;

        match self.state {
            RoundState::AwaitingAnswer => {
                debug!("answer window elapsed");
                self.resolve(None);
            }
            RoundState::Resolved => self.advance(),
            RoundState::Idle | RoundState::GameOver => {}
        }
        true
    }

    /// Abandon the current game and return to idle.
    pub fn reset(&mut self) {
        self.cancel_timer();
        self.round = None;
        self.state = RoundState::Idle;
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn score(&self) -> ScoreSummary {
        self.score.summary()
    }

    pub fn tracker(&self) -> &ScoreTracker {
        &self.score
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.round.as_ref().map(|r| &r.question)
    }

    pub fn current_options(&self) -> &[AnswerOption] {
        match &self.round {
            Some(round) => &round.options,
            None => &[],
        }
    }

    pub fn current_position(&self) -> Option<StaffPosition> {
        self.round.as_ref().map(|r| r.position)
    }

    pub fn countdown(&self) -> Option<Countdown> {
        self.round.as_ref().map(|r| r.countdown)
    }

    /// Fraction of the answer window left, for the timer bar.
    pub fn countdown_fraction(&self) -> Option<f64> {
        self.countdown()
            .map(|c| c.remaining_fraction(self.clock.now()))
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    fn cancel_timer(&mut self) {
        if let Some(id) = self.timer.take() {
            self.clock.cancel(id);
        }
    }

    /// Enter AwaitingAnswer with a fresh question.
    fn begin_round(&mut self) {
        self.cancel_timer();

        let question = generate(&self.config, &mut self.rng);
        let position = position_for(question.pitch(), question.clef());
        let options = options(question.correct_letter(), self.config.naming, &mut self.rng);

        self.renderer.render(question.pitch(), question.clef(), &position);
        self.audio.play_question_tone(question.pitch());

        let window = self.timing.countdown_for(self.config.difficulty);
        let countdown = Countdown::new(self.clock.now(), window);
        self.timer = Some(self.clock.schedule(window));
        self.round = Some(LiveRound {
            question,
            options,
            position,
            countdown,
        });
        self.state = RoundState::AwaitingAnswer;
    }

    fn resolve(&mut self, chosen: Option<NoteName>) -> Option<RoundOutcome> {
        self.cancel_timer();
        let round = self.round.take()?;

        let correct = chosen == Some(round.question.correct_letter());
        self.score.record_outcome(correct);
        self.audio.play_feedback(correct);
        self.state = RoundState::Resolved;

        let outcome = RoundOutcome {
            question: round.question,
            options: round.options,
            chosen,
            correct,
        };
        debug!(
            pitch = %outcome.question.pitch(),
            correct,
            timed_out = outcome.timed_out(),
            asked = self.score.questions_asked(),
            "round resolved"
        );
        for listener in &mut self.round_listeners {
            listener(&outcome);
        }

        self.timer = Some(self.clock.schedule(self.timing.feedback_delay));
        Some(outcome)
    }

    fn advance(&mut self) {
        if self.score.is_complete() {
            self.finish();
        } else {
            self.begin_round();
        }
    }

    fn finish(&mut self) {
        self.cancel_timer();
        self.state = RoundState::GameOver;
        let summary = self.score.summary();
        info!(
            correct = summary.correct_count,
            asked = summary.questions_asked,
            "game over"
        );
        for listener in &mut self.game_over_listeners {
            listener(&summary);
        }
    }
}

impl<R: RandomSource> QuizEngine<ManualClock, R> {
    /// Advance the virtual clock and deliver every timer that came due.
    ///
    /// Returns how many firings changed the engine's state.
    pub fn advance_clock(&mut self, by: Duration) -> usize {
        let fired = self.clock.advance(by);
        fired
            .into_iter()
            .filter(|&id| self.handle_timer(id))
            .count()
    }
}
