//! # Core Value Types
//!
//! Pitches, clefs and difficulty levels shared by every part of the quiz.
//!
//! ## Scale Degree (CRITICAL)
//! Every vertical-position and interval calculation uses a single integer,
//! the **scale degree**: `octave * 7 + letter_index`, with letters indexed
//! `C=0 D=1 E=2 F=3 G=4 A=5 B=6`. Octaves follow scientific pitch notation,
//! so middle C is C4 (degree 28) and the octave number changes at C.
//!
//! ```text
//! B3   C4   D4   E4
//! 27   28   29   30
//! ```
//!
//! Two pitches compare by scale degree, which is the same order as their
//! real musical height.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Note names C through B, in scale order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum NoteName {
    #[default]
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteName {
    /// All seven letters in scale order (index = letter index).
    pub const ALL: [NoteName; 7] = [
        NoteName::C,
        NoteName::D,
        NoteName::E,
        NoteName::F,
        NoteName::G,
        NoteName::A,
        NoteName::B,
    ];

    /// Letter index: C=0, D=1, E=2, F=3, G=4, A=5, B=6
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse a single letter (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(NoteName::C),
            'D' => Some(NoteName::D),
            'E' => Some(NoteName::E),
            'F' => Some(NoteName::F),
            'G' => Some(NoteName::G),
            'A' => Some(NoteName::A),
            'B' => Some(NoteName::B),
            _ => None,
        }
    }

    /// Parse either a letter ("e") or a fixed-do solfège syllable ("Mi").
    pub fn from_label(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::from_char(c);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|name| name.solfege().eq_ignore_ascii_case(trimmed))
    }

    pub const fn letter(self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::D => "D",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::G => "G",
            NoteName::A => "A",
            NoteName::B => "B",
        }
    }

    /// Fixed-do syllable (C = Do)
    pub const fn solfege(self) -> &'static str {
        match self {
            NoteName::C => "Do",
            NoteName::D => "Re",
            NoteName::E => "Mi",
            NoteName::F => "Fa",
            NoteName::G => "Sol",
            NoteName::A => "La",
            NoteName::B => "Si",
        }
    }

    /// Semitones above C within the octave
    const fn semitone(self) -> i32 {
        match self {
            NoteName::C => 0,
            NoteName::D => 2,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::G => 7,
            NoteName::A => 9,
            NoteName::B => 11,
        }
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// A natural pitch: letter plus octave (scientific pitch notation, C4 = middle C)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pitch {
    pub name: NoteName,
    pub octave: i32,
}

impl Pitch {
    /// Octaves a parsed pitch may name
    pub const OCTAVES: std::ops::RangeInclusive<i32> = -1..=9;

    pub const fn new(name: NoteName, octave: i32) -> Self {
        Self { name, octave }
    }

    /// `octave * 7 + letter_index`
    pub const fn scale_degree(&self) -> i32 {
        self.octave * 7 + self.name.index() as i32
    }

    /// MIDI note number (C4 = 60)
    pub const fn midi_note(&self) -> i32 {
        (self.octave + 1) * 12 + self.name.semitone()
    }

    /// Equal-tempered frequency in Hz, tuned to A4 = 440 Hz.
    pub fn frequency(&self) -> f64 {
        440.0 * 2f64.powf((self.midi_note() - 69) as f64 / 12.0)
    }

    /// Parse a pitch like "E4", "c5" or "B-1".
    ///
    /// Octaves outside [`Pitch::OCTAVES`] (the MIDI range) are rejected.
    pub fn from_str(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let name = NoteName::from_char(chars.next()?)?;
        let octave = chars.as_str().parse().ok()?;
        if !Self::OCTAVES.contains(&octave) {
            return None;
        }
        Some(Self { name, octave })
    }
}

impl Ord for Pitch {
    fn cmp(&self, other: &Self) -> Ordering {
        self.scale_degree().cmp(&other.scale_degree())
    }
}

impl PartialOrd for Pitch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.octave)
    }
}

/// The three clefs the quiz draws on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Clef {
    #[default]
    Treble,
    Bass,
    Alto,
}

impl Clef {
    pub const ALL: [Clef; 3] = [Clef::Treble, Clef::Bass, Clef::Alto];

    /// Parse from string (case-insensitive). Accepts the clef sign letters too.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "treble" | "g" => Some(Clef::Treble),
            "bass" | "f" => Some(Clef::Bass),
            "alto" | "c" => Some(Clef::Alto),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Clef::Treble => "treble",
            Clef::Bass => "bass",
            Clef::Alto => "alto",
        }
    }
}

impl fmt::Display for Clef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Clef choice made when configuring a game.
///
/// `Mixed` is only a selector: it is resolved to a concrete [`Clef`] each
/// time a question is generated and never stored on a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClefSelection {
    Fixed(Clef),
    Mixed,
}

impl ClefSelection {
    pub fn from_str(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("mixed") || s.trim().eq_ignore_ascii_case("mix") {
            return Some(ClefSelection::Mixed);
        }
        Clef::from_str(s).map(ClefSelection::Fixed)
    }
}

impl Default for ClefSelection {
    fn default() -> Self {
        ClefSelection::Fixed(Clef::Treble)
    }
}

impl From<Clef> for ClefSelection {
    fn from(clef: Clef) -> Self {
        ClefSelection::Fixed(clef)
    }
}

impl fmt::Display for ClefSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClefSelection::Fixed(clef) => clef.fmt(f),
            ClefSelection::Mixed => f.write_str("mixed"),
        }
    }
}

/// Difficulty picks the note range and the answer window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Notes on or between the five staff lines
    #[default]
    Easy,
    /// Ledger-line notes above and below the staff
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 2] = [Difficulty::Easy, Difficulty::Hard];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "hard" | "advanced" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How answer options are labelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteNaming {
    /// C D E F G A B
    #[default]
    Letter,
    /// Do Re Mi Fa Sol La Si
    Solfege,
}

impl NoteNaming {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "letter" | "letters" | "en" => Some(NoteNaming::Letter),
            "solfege" | "solfège" | "es" => Some(NoteNaming::Solfege),
            _ => None,
        }
    }

    pub const fn label(self, name: NoteName) -> &'static str {
        match self {
            NoteNaming::Letter => name.letter(),
            NoteNaming::Solfege => name.solfege(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_degree_of_middle_c() {
        assert_eq!(Pitch::new(NoteName::C, 4).scale_degree(), 28);
        assert_eq!(Pitch::new(NoteName::E, 4).scale_degree(), 30);
        assert_eq!(Pitch::new(NoteName::G, 2).scale_degree(), 18);
    }

    #[test]
    fn test_scale_degree_orders_across_octave_break() {
        let b3 = Pitch::new(NoteName::B, 3);
        let c4 = Pitch::new(NoteName::C, 4);
        assert!(b3 < c4);
        assert_eq!(c4.scale_degree() - b3.scale_degree(), 1);
    }

    #[test]
    fn test_letter_indices() {
        let indices: Vec<u8> = NoteName::ALL.iter().map(|n| n.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(NoteName::from_index(2), Some(NoteName::E));
        assert_eq!(NoteName::from_index(7), None);
    }

    #[test]
    fn test_midi_and_frequency() {
        let a4 = Pitch::new(NoteName::A, 4);
        assert_eq!(a4.midi_note(), 69);
        assert!((a4.frequency() - 440.0).abs() < 1e-9);

        let c4 = Pitch::new(NoteName::C, 4);
        assert_eq!(c4.midi_note(), 60);
        assert!((c4.frequency() - 261.63).abs() < 0.01);

        let g2 = Pitch::new(NoteName::G, 2);
        assert!((g2.frequency() - 98.0).abs() < 0.01);
    }

    #[test]
    fn test_pitch_parse_and_display() {
        assert_eq!(Pitch::from_str("E4"), Some(Pitch::new(NoteName::E, 4)));
        assert_eq!(Pitch::from_str("c6"), Some(Pitch::new(NoteName::C, 6)));
        assert_eq!(Pitch::from_str("B-1"), Some(Pitch::new(NoteName::B, -1)));
        assert_eq!(Pitch::from_str("H2"), None);
        assert_eq!(Pitch::from_str("E"), None);
        assert_eq!(Pitch::new(NoteName::F, 5).to_string(), "F5");
    }

    #[test]
    fn test_pitch_parse_rejects_absurd_octaves() {
        assert_eq!(Pitch::from_str("C400000000"), None);
        assert_eq!(Pitch::from_str("C-2"), None);
        assert_eq!(Pitch::from_str("C10"), None);

        // Everything that parses can be compared and measured
        let lowest = Pitch::from_str("C-1").unwrap();
        let highest = Pitch::from_str("B9").unwrap();
        let c4 = Pitch::new(NoteName::C, 4);
        assert!(lowest < c4 && c4 < highest);
        assert_eq!(lowest.midi_note(), 0);
        assert_eq!(highest.midi_note(), 131);
    }

    #[test]
    fn test_note_name_from_label() {
        assert_eq!(NoteName::from_label("g"), Some(NoteName::G));
        assert_eq!(NoteName::from_label("Sol"), Some(NoteName::G));
        assert_eq!(NoteName::from_label(" si "), Some(NoteName::B));
        assert_eq!(NoteName::from_label("Ti"), None);
    }

    #[test]
    fn test_clef_selection_parse() {
        assert_eq!(ClefSelection::from_str("mixed"), Some(ClefSelection::Mixed));
        assert_eq!(ClefSelection::from_str("Bass"), Some(ClefSelection::Fixed(Clef::Bass)));
        assert_eq!(ClefSelection::from_str("tenor"), None);
        assert_eq!(Difficulty::from_str("Advanced"), Some(Difficulty::Hard));
    }

    #[test]
    fn test_naming_labels() {
        assert_eq!(NoteNaming::Letter.label(NoteName::G), "G");
        assert_eq!(NoteNaming::Solfege.label(NoteName::G), "Sol");
    }
}
