//! Running score for one game.

use serde::Serialize;

/// Questions per game
pub const TOTAL_QUESTIONS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    pub correct_count: u32,
    pub questions_asked: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTracker {
    correct_count: u32,
    questions_asked: u32,
    total_questions: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self {
            correct_count: 0,
            questions_asked: 0,
            total_questions: TOTAL_QUESTIONS,
        }
    }

    pub fn reset(&mut self) {
        self.correct_count = 0;
        self.questions_asked = 0;
    }

    /// Count one resolved question. Timeouts are recorded as `false`.
    pub fn record_outcome(&mut self, correct: bool) {
        self.questions_asked += 1;
        if correct {
            self.correct_count += 1;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.questions_asked >= self.total_questions
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary {
            correct_count: self.correct_count,
            questions_asked: self.questions_asked,
        }
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn questions_asked(&self) -> u32 {
        self.questions_asked
    }

    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tracker_is_empty() {
        let tracker = ScoreTracker::new();
        assert_eq!(tracker.summary(), ScoreSummary::default());
        assert_eq!(tracker.total_questions(), 12);
        assert!(!tracker.is_complete());
    }

    #[test]
    fn test_record_outcome_counts_every_question() {
        let mut tracker = ScoreTracker::new();
        tracker.record_outcome(true);
        tracker.record_outcome(false);
        tracker.record_outcome(true);
        assert_eq!(
            tracker.summary(),
            ScoreSummary {
                correct_count: 2,
                questions_asked: 3
            }
        );
    }

    #[test]
    fn test_complete_after_total_questions() {
        let mut tracker = ScoreTracker::new();
        for i in 0..TOTAL_QUESTIONS {
            assert!(!tracker.is_complete());
            tracker.record_outcome(i % 3 == 0);
        }
        assert!(tracker.is_complete());
        assert_eq!(tracker.questions_asked(), 12);
        assert_eq!(tracker.correct_count(), 4);
    }

    #[test]
    fn test_reset_clears_counts() {
        let mut tracker = ScoreTracker::new();
        tracker.record_outcome(true);
        tracker.reset();
        assert_eq!(tracker.summary(), ScoreSummary::default());
    }
}
