//! Plain-text staff drawing for terminals.
//!
//! One text row per scale-degree step, so lines and spaces alternate
//! exactly as on a printed staff:
//!
//! ```text
//!        ------------------------
//!
//!        --------------|---------
//!                      |
//! treble --------------|---------
//!                      |
//!        --------------|---------
//!                      |
//!        -------------O----------
//! ```

use std::io::Write;
use tracing::warn;

use crate::model::{Clef, Pitch};
use crate::round::Renderer;
use crate::staff::{
    StaffPosition, StemDirection, LINE_SPACING, STAFF_BOTTOM, STAFF_CENTER, STAFF_LINES,
    STAFF_TOP, STEP_UNIT,
};

const MARGIN: usize = 7;
const STAFF_WIDTH: usize = 24;
const NOTE_COLUMN: usize = MARGIN + 13;
const LEDGER_HALF_WIDTH: usize = 2;
const STEM_LENGTH: i32 = 3 * LINE_SPACING;

/// Draw the staff, ledger lines, note head and stem for one note.
pub fn draw_staff(clef: Clef, position: &StaffPosition) -> String {
    let offset = position.line_offset;
    let (stem_top, stem_bottom) = match position.stem {
        StemDirection::Up => (offset - STEM_LENGTH, offset - STEP_UNIT),
        StemDirection::Down => (offset + STEP_UNIT, offset + STEM_LENGTH),
    };
    let stem_column = match position.stem {
        StemDirection::Up => NOTE_COLUMN + 1,
        StemDirection::Down => NOTE_COLUMN - 1,
    };

    let top = STAFF_TOP.min(offset).min(stem_top);
    let bottom = STAFF_BOTTOM.max(offset).max(stem_bottom);
    let ledgers = position.ledger_lines();

    let mut rows = Vec::new();
    let mut y = top;
    while y <= bottom {
        let mut row = vec![' '; MARGIN + STAFF_WIDTH];

        if y == STAFF_CENTER {
            for (i, c) in clef.name().chars().take(MARGIN - 1).enumerate() {
                row[i] = c;
            }
        }

        if STAFF_LINES.contains(&y) {
            for cell in &mut row[MARGIN..] {
                *cell = '-';
            }
        } else if ledgers.contains(&y) {
            for cell in &mut row[NOTE_COLUMN - LEDGER_HALF_WIDTH..=NOTE_COLUMN + LEDGER_HALF_WIDTH] {
                *cell = '-';
            }
        }

        if (stem_top..=stem_bottom).contains(&y) {
            row[stem_column] = '|';
        }
        if y == offset {
            row[NOTE_COLUMN] = 'O';
        }

        let line: String = row.into_iter().collect();
        rows.push(line.trim_end().to_string());
        y += STEP_UNIT;
    }

    rows.join("\n")
}

/// [`Renderer`] that writes each question's staff to a text stream.
pub struct TextStaffRenderer<W> {
    out: W,
}

impl<W: Write> TextStaffRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextStaffRenderer<W> {
    fn render(&mut self, _pitch: Pitch, clef: Clef, position: &StaffPosition) {
        let drawing = draw_staff(clef, position);
        if let Err(e) = writeln!(self.out, "\n{}\n", drawing).and_then(|_| self.out.flush()) {
            warn!(error = %e, "failed to draw staff");
        }
    }
}
