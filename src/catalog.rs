//! Note ranges the quiz draws from, per clef and difficulty.
//!
//! Easy ranges run from the bottom staff line to the top staff line. Hard
//! ranges add roughly a third of ledger-line notes in both directions.
//!
//! | clef   | easy    | hard    |
//! |--------|---------|---------|
//! | treble | E4 – F5 | A3 – C6 |
//! | bass   | G2 – A3 | C2 – E4 |
//! | alto   | F3 – G4 | C3 – C5 |

use crate::error::QuizError;
use crate::model::NoteName::{A, B, C, D, E, F, G};
use crate::model::{Clef, Difficulty, Pitch};

const fn p(name: crate::model::NoteName, octave: i32) -> Pitch {
    Pitch::new(name, octave)
}

static TREBLE_EASY: [Pitch; 9] = [
    p(E, 4), p(F, 4), p(G, 4), p(A, 4), p(B, 4), p(C, 5), p(D, 5), p(E, 5), p(F, 5),
];

static TREBLE_HARD: [Pitch; 17] = [
    p(A, 3), p(B, 3), p(C, 4), p(D, 4), p(E, 4), p(F, 4), p(G, 4), p(A, 4), p(B, 4),
    p(C, 5), p(D, 5), p(E, 5), p(F, 5), p(G, 5), p(A, 5), p(B, 5), p(C, 6),
];

static BASS_EASY: [Pitch; 9] = [
    p(G, 2), p(A, 2), p(B, 2), p(C, 3), p(D, 3), p(E, 3), p(F, 3), p(G, 3), p(A, 3),
];

static BASS_HARD: [Pitch; 17] = [
    p(C, 2), p(D, 2), p(E, 2), p(F, 2), p(G, 2), p(A, 2), p(B, 2), p(C, 3), p(D, 3),
    p(E, 3), p(F, 3), p(G, 3), p(A, 3), p(B, 3), p(C, 4), p(D, 4), p(E, 4),
];

static ALTO_EASY: [Pitch; 9] = [
    p(F, 3), p(G, 3), p(A, 3), p(B, 3), p(C, 4), p(D, 4), p(E, 4), p(F, 4), p(G, 4),
];

static ALTO_HARD: [Pitch; 15] = [
    p(C, 3), p(D, 3), p(E, 3), p(F, 3), p(G, 3), p(A, 3), p(B, 3), p(C, 4),
    p(D, 4), p(E, 4), p(F, 4), p(G, 4), p(A, 4), p(B, 4), p(C, 5),
];

/// The pitches a question may use, lowest first. Never empty.
pub fn range_for(clef: Clef, difficulty: Difficulty) -> &'static [Pitch] {
    match (clef, difficulty) {
        (Clef::Treble, Difficulty::Easy) => &TREBLE_EASY,
        (Clef::Treble, Difficulty::Hard) => &TREBLE_HARD,
        (Clef::Bass, Difficulty::Easy) => &BASS_EASY,
        (Clef::Bass, Difficulty::Hard) => &BASS_HARD,
        (Clef::Alto, Difficulty::Easy) => &ALTO_EASY,
        (Clef::Alto, Difficulty::Hard) => &ALTO_HARD,
    }
}

/// [`range_for`] keyed by configuration names such as `("bass", "hard")`.
pub fn range_for_names(clef: &str, difficulty: &str) -> Result<&'static [Pitch], QuizError> {
    let clef = Clef::from_str(clef)
        .ok_or_else(|| QuizError::Configuration(format!("unknown clef '{}'", clef)))?;
    let difficulty = Difficulty::from_str(difficulty)
        .ok_or_else(|| QuizError::Configuration(format!("unknown difficulty '{}'", difficulty)))?;
    Ok(range_for(clef, difficulty))
}
