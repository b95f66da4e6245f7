//! # Staff Position Mapping
//!
//! Converts a pitch on a clef into a vertical staff coordinate, the ledger
//! lines it needs and its stem direction.
//!
//! ## Geometry
//! Coordinates grow downward. The five staff lines sit at y = 80, 100, 120,
//! 140 and 160; adjacent scale degrees are [`STEP_UNIT`] apart, so degrees
//! alternate between lines and spaces.
//!
//! ```text
//!  y   treble  bass  alto
//!  60   (A5)   (C4)  (B4)   <- first ledger line above
//!  80 ── F5 ── A3 ── G4 ──
//! 100 ── D5 ── F3 ── E4 ──
//! 120 ── B4 ── D3 ── C4 ──  center line
//! 140 ── G4 ── B2 ── A3 ──
//! 160 ── E4 ── G2 ── F3 ──
//! 180   (C4)  (E2)  (D3)   <- first ledger line below
//! ```
//!
//! Each clef pins one reference pitch to a known line:
//! - treble: E4 on the bottom line (160)
//! - bass: G2 on the bottom line (160)
//! - alto: C4 on the center line (120)
//!
//! Every other pitch is placed relative to that reference:
//! `offset = reference_offset - (degree(pitch) - degree(reference)) * STEP_UNIT`.

use serde::Serialize;

use crate::model::{Clef, NoteName, Pitch};

/// Vertical distance between adjacent scale degrees (half a line spacing)
pub const STEP_UNIT: i32 = 10;
/// Distance between two staff lines
pub const LINE_SPACING: i32 = STEP_UNIT * 2;
pub const STAFF_TOP: i32 = 80;
pub const STAFF_CENTER: i32 = 120;
pub const STAFF_BOTTOM: i32 = 160;
/// The five staff lines, top to bottom
pub const STAFF_LINES: [i32; 5] = [80, 100, 120, 140, 160];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StemDirection {
    Up,
    Down,
}

/// Where a note head goes on the staff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffPosition {
    /// Vertical coordinate of the note head center (smaller = higher)
    pub line_offset: i32,
    pub ledger_above: u32,
    pub ledger_below: u32,
    pub stem: StemDirection,
}

impl StaffPosition {
    pub fn needs_ledger_lines(&self) -> bool {
        self.ledger_above > 0 || self.ledger_below > 0
    }

    /// Whether the note head sits on a line (staff or ledger) rather than a space.
    pub fn on_line(&self) -> bool {
        (self.line_offset - STAFF_TOP).rem_euclid(LINE_SPACING) == 0
    }

    /// Y coordinates of the ledger lines to draw, nearest the staff first.
    pub fn ledger_lines(&self) -> Vec<i32> {
        let above = (1..=self.ledger_above as i32).map(|i| STAFF_TOP - i * LINE_SPACING);
        let below = (1..=self.ledger_below as i32).map(|i| STAFF_BOTTOM + i * LINE_SPACING);
        above.chain(below).collect()
    }
}

/// Reference pitch and the offset of the line it sits on
fn reference(clef: Clef) -> (Pitch, i32) {
    match clef {
        Clef::Treble => (Pitch::new(NoteName::E, 4), STAFF_BOTTOM),
        Clef::Bass => (Pitch::new(NoteName::G, 2), STAFF_BOTTOM),
        Clef::Alto => (Pitch::new(NoteName::C, 4), STAFF_CENTER),
    }
}

/// Map a pitch on a clef to its staff position.
///
/// # Example
/// ```rust
/// use staff_quiz::{position_for, Clef, NoteName, Pitch, StemDirection};
///
/// // Middle C in treble clef sits on the first ledger line below the staff
/// let pos = position_for(Pitch::new(NoteName::C, 4), Clef::Treble);
/// assert_eq!(pos.line_offset, 180);
/// assert_eq!(pos.ledger_below, 1);
/// assert_eq!(pos.ledger_lines(), vec![180]);
/// assert_eq!(pos.stem, StemDirection::Up);
/// ```
pub fn position_for(pitch: Pitch, clef: Clef) -> StaffPosition {
    let (reference_pitch, reference_offset) = reference(clef);
    let steps = pitch.scale_degree() - reference_pitch.scale_degree();
    let line_offset = reference_offset - steps * STEP_UNIT;

    // One ledger line per full line spacing past the outer lines, rounded
    // toward the staff: the space just outside the staff needs none.
    let ledger_below = if line_offset > STAFF_BOTTOM {
        ((line_offset - STAFF_BOTTOM) / LINE_SPACING) as u32
    } else {
        0
    };
    let ledger_above = if line_offset < STAFF_TOP {
        ((STAFF_TOP - line_offset) / LINE_SPACING) as u32
    } else {
        0
    };

    let stem = if line_offset > STAFF_CENTER {
        StemDirection::Up
    } else {
        StemDirection::Down
    };

    StaffPosition {
        line_offset,
        ledger_above,
        ledger_below,
        stem,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::range_for;
    use crate::model::Difficulty;

    fn pitch(s: &str) -> Pitch {
        Pitch::from_str(s).unwrap()
    }

    #[test]
    fn test_reference_pitches_land_on_their_lines() {
        assert_eq!(position_for(pitch("E4"), Clef::Treble).line_offset, 160);
        assert_eq!(position_for(pitch("G2"), Clef::Bass).line_offset, 160);
        assert_eq!(position_for(pitch("C4"), Clef::Alto).line_offset, 120);
    }

    #[test]
    fn test_treble_e4_is_bottom_line_without_ledgers() {
        let pos = position_for(pitch("E4"), Clef::Treble);
        assert_eq!(pos.line_offset, STAFF_BOTTOM);
        assert_eq!(pos.ledger_above, 0);
        assert_eq!(pos.ledger_below, 0);
        assert!(pos.on_line());
        assert_eq!(pos.stem, StemDirection::Up);
    }

    #[test]
    fn test_staff_lines_per_clef() {
        let treble: Vec<i32> = ["F5", "D5", "B4", "G4", "E4"]
            .iter()
            .map(|s| position_for(pitch(s), Clef::Treble).line_offset)
            .collect();
        assert_eq!(treble, STAFF_LINES.to_vec());

        let bass: Vec<i32> = ["A3", "F3", "D3", "B2", "G2"]
            .iter()
            .map(|s| position_for(pitch(s), Clef::Bass).line_offset)
            .collect();
        assert_eq!(bass, STAFF_LINES.to_vec());

        let alto: Vec<i32> = ["G4", "E4", "C4", "A3", "F3"]
            .iter()
            .map(|s| position_for(pitch(s), Clef::Alto).line_offset)
            .collect();
        assert_eq!(alto, STAFF_LINES.to_vec());
    }

    #[test]
    fn test_line_and_space_parity() {
        // Lines and spaces alternate: F4 is a space, G4 a line in treble
        assert!(!position_for(pitch("F4"), Clef::Treble).on_line());
        assert!(position_for(pitch("G4"), Clef::Treble).on_line());
        // Middle C: ledger line in treble and bass, center line in alto
        assert!(position_for(pitch("C4"), Clef::Treble).on_line());
        assert!(position_for(pitch("C4"), Clef::Bass).on_line());
        assert!(position_for(pitch("C4"), Clef::Alto).on_line());
    }

    #[test]
    fn test_ledger_lines_below_staff() {
        // D4 hangs in the space under the staff: no ledger line
        assert_eq!(position_for(pitch("D4"), Clef::Treble).ledger_below, 0);
        assert_eq!(position_for(pitch("C4"), Clef::Treble).ledger_below, 1);
        assert_eq!(position_for(pitch("B3"), Clef::Treble).ledger_below, 1);

        let a3 = position_for(pitch("A3"), Clef::Treble);
        assert_eq!(a3.line_offset, 200);
        assert_eq!(a3.ledger_below, 2);
        assert_eq!(a3.ledger_lines(), vec![180, 200]);
    }

    #[test]
    fn test_ledger_lines_above_staff() {
        assert_eq!(position_for(pitch("G5"), Clef::Treble).ledger_above, 0);
        assert_eq!(position_for(pitch("A5"), Clef::Treble).ledger_above, 1);

        let c6 = position_for(pitch("C6"), Clef::Treble);
        assert_eq!(c6.line_offset, 40);
        assert_eq!(c6.ledger_above, 2);
        assert_eq!(c6.ledger_lines(), vec![60, 40]);

        let e4 = position_for(pitch("E4"), Clef::Bass);
        assert_eq!(e4.ledger_above, 2);
    }

    #[test]
    fn test_stem_direction_flips_at_center_line() {
        assert_eq!(position_for(pitch("A4"), Clef::Treble).stem, StemDirection::Up);
        assert_eq!(position_for(pitch("B4"), Clef::Treble).stem, StemDirection::Down);
        assert_eq!(position_for(pitch("C5"), Clef::Treble).stem, StemDirection::Down);
        assert_eq!(position_for(pitch("C4"), Clef::Alto).stem, StemDirection::Down);
        assert_eq!(position_for(pitch("B3"), Clef::Alto).stem, StemDirection::Up);
    }

    #[test]
    fn test_mapping_is_strictly_monotonic() {
        for clef in Clef::ALL {
            let range = range_for(clef, Difficulty::Hard);
            for (i, a) in range.iter().enumerate() {
                for b in &range[..i] {
                    // a is higher than b
                    assert!(
                        position_for(*a, clef).line_offset < position_for(*b, clef).line_offset,
                        "{}: {} should sit above {}",
                        clef,
                        a,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_easy_ranges_stay_on_the_staff() {
        for clef in Clef::ALL {
            for p in range_for(clef, Difficulty::Easy) {
                let pos = position_for(*p, clef);
                assert!(!pos.needs_ledger_lines(), "{} {} needs ledger lines", clef, p);
                assert!((STAFF_TOP..=STAFF_BOTTOM).contains(&pos.line_offset));
            }
        }
    }

    #[test]
    fn test_hard_ranges_need_at_most_three_ledger_lines() {
        for clef in Clef::ALL {
            let range = range_for(clef, Difficulty::Hard);
            for p in range {
                let pos = position_for(*p, clef);
                assert!(pos.ledger_above <= 3 && pos.ledger_below <= 3, "{} {}", clef, p);
            }
            assert!(range.iter().any(|p| position_for(*p, clef).needs_ledger_lines()));
        }
    }
}
