//! Multiple-choice options: the correct letter plus three distractors.

use serde::Serialize;

use crate::model::{NoteName, NoteNaming};
use crate::random::RandomSource;

/// Choices offered per round
pub const OPTION_COUNT: usize = 4;

/// One answer button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub letter: NoteName,
    pub label: String,
}

impl AnswerOption {
    pub fn new(letter: NoteName, naming: NoteNaming) -> Self {
        Self {
            letter,
            label: naming.label(letter).to_string(),
        }
    }

    /// Letter index (C=0 … B=6)
    pub fn index(&self) -> u8 {
        self.letter.index()
    }
}

/// Pick [`OPTION_COUNT`] distinct letters, one of them `correct`, in random order.
///
/// The three distractors are drawn without replacement from the six other
/// letters, then all four are shuffled so the answer's slot is uniform.
pub fn select<R: RandomSource>(correct: NoteName, rng: &mut R) -> [NoteName; OPTION_COUNT] {
    let mut pool: Vec<NoteName> = NoteName::ALL
        .iter()
        .copied()
        .filter(|&name| name != correct)
        .collect();

    let mut picked = [correct; OPTION_COUNT];
    for slot in picked.iter_mut().skip(1) {
        let i = rng.next_index(pool.len());
        *slot = pool.swap_remove(i);
    }

    rng.shuffle(&mut picked);
    picked
}

/// [`select`] with labels attached.
pub fn options<R: RandomSource>(
    correct: NoteName,
    naming: NoteNaming,
    rng: &mut R,
) -> Vec<AnswerOption> {
    select(correct, rng)
        .iter()
        .map(|&letter| AnswerOption::new(letter, naming))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{RngSource, SequenceSource};

    #[test]
    fn test_select_always_four_distinct_including_correct() {
        let mut rng = RngSource::seeded(11);
        for correct in NoteName::ALL {
            for _ in 0..1000 {
                let picked = select(correct, &mut rng);
                assert!(picked.contains(&correct));
                for (i, a) in picked.iter().enumerate() {
                    assert!(a.index() < 7);
                    for b in &picked[i + 1..] {
                        assert_ne!(a, b, "duplicate option for {}: {:?}", correct, picked);
                    }
                }
            }
        }
    }

    #[test]
    fn test_correct_answer_position_is_not_fixed() {
        let mut rng = RngSource::seeded(12);
        let mut positions = [0usize; OPTION_COUNT];
        for _ in 0..4000 {
            let picked = select(NoteName::E, &mut rng);
            if let Some(pos) = picked.iter().position(|&n| n == NoteName::E) {
                positions[pos] += 1;
            }
        }
        // Roughly 1000 each; a fixed slot would leave three at zero
        for count in positions {
            assert!(count > 700, "positions skewed: {:?}", positions);
        }
    }

    #[test]
    fn test_every_letter_appears_as_distractor() {
        let mut rng = RngSource::seeded(13);
        let mut seen = [false; 7];
        for _ in 0..500 {
            for name in select(NoteName::C, &mut rng) {
                seen[name.index() as usize] = true;
            }
        }
        assert_eq!(seen, [true; 7]);
    }

    #[test]
    fn test_select_terminates_with_degenerate_source() {
        // A source that always answers 0 still yields four distinct letters
        let mut rng = SequenceSource::new(vec![0]);
        let picked = select(NoteName::C, &mut rng);
        let mut sorted: Vec<u8> = picked.iter().map(|n| n.index()).collect();
        sorted.sort();
        assert_eq!(sorted.len(), 4);
        sorted.dedup();
        assert_eq!(sorted.len(), 4);
        assert!(picked.contains(&NoteName::C));
    }

    #[test]
    fn test_options_carry_labels() {
        let mut rng = RngSource::seeded(14);
        let opts = options(NoteName::G, NoteNaming::Solfege, &mut rng);
        assert_eq!(opts.len(), OPTION_COUNT);
        let answer = opts.iter().find(|o| o.letter == NoteName::G).unwrap();
        assert_eq!(answer.label, "Sol");
        assert_eq!(answer.index(), 4);
    }
}
