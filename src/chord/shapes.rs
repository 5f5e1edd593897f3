//! Chord shape table
//!
//! Movable shapes anchored on string 6 (E-form) or string 5 (A-form). Offsets are
//! relative to the anchor fret and run from string 6 to string 1, `x` = muted.
//!
//! ```text
//! E-form major, anchor fret 3 (G):   3 5 5 4 3 3
//! A-form minor, anchor fret 2 (Bm):  x 2 4 4 3 2
//! ```

use crate::error::FretError;
use crate::fretboard::{GuitarString, FRET_COUNT, STRING_COUNT};

use super::types::{ChordQuality, Fret};

macro_rules! shape {
    (@fret x) => { None };
    (@fret $n:literal) => { Some($n) };
    ($($f:tt)*) => { [$(shape!(@fret $f)),*] };
}

/// One row of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordShape {
    pub quality: ChordQuality,
    /// Anchor string number (5 or 6).
    pub anchor: u8,
    pub offsets: [Option<u8>; STRING_COUNT],
}

const fn row(quality: ChordQuality, anchor: u8, offsets: [Option<u8>; STRING_COUNT]) -> ChordShape {
    ChordShape {
        quality,
        anchor,
        offsets,
    }
}

pub const SHAPES: &[ChordShape] = &[
    // E-form
    row(ChordQuality::Major, 6, shape!(0 2 2 1 0 0)),
    row(ChordQuality::Minor, 6, shape!(0 2 2 0 0 0)),
    row(ChordQuality::Major7, 6, shape!(0 2 0 1 0 0)),
    row(ChordQuality::Minor7, 6, shape!(0 2 0 0 0 0)),
    row(ChordQuality::MajorMaj7, 6, shape!(0 x 1 1 0 x)),
    row(ChordQuality::MinorMaj7, 6, shape!(0 2 1 0 0 0)),
    row(ChordQuality::Major6, 6, shape!(0 2 2 1 2 0)),
    row(ChordQuality::Minor6, 6, shape!(0 2 2 0 2 0)),
    row(ChordQuality::Sus4, 6, shape!(0 2 2 2 0 0)),
    row(ChordQuality::SevenSus4, 6, shape!(0 2 0 2 0 0)),
    row(ChordQuality::Diminished, 6, shape!(0 1 2 0 x x)),
    row(ChordQuality::Augmented, 6, shape!(0 3 2 1 1 0)),
    // A-form
    row(ChordQuality::Major, 5, shape!(x 0 2 2 2 0)),
    row(ChordQuality::Minor, 5, shape!(x 0 2 2 1 0)),
    row(ChordQuality::Major7, 5, shape!(x 0 2 0 2 0)),
    row(ChordQuality::Minor7, 5, shape!(x 0 2 0 1 0)),
    row(ChordQuality::MajorMaj7, 5, shape!(x 0 2 1 2 0)),
    row(ChordQuality::MinorMaj7, 5, shape!(x 0 2 1 1 0)),
    row(ChordQuality::Major6, 5, shape!(x 0 2 2 2 2)),
    row(ChordQuality::Minor6, 5, shape!(x 0 2 2 1 2)),
    row(ChordQuality::Sus4, 5, shape!(x 0 2 2 3 0)),
    row(ChordQuality::SevenSus4, 5, shape!(x 0 2 0 3 0)),
    row(ChordQuality::Diminished, 5, shape!(x 0 1 2 1 x)),
    row(ChordQuality::Augmented, 5, shape!(x 0 3 2 2 1)),
];

/// Shape for `quality` anchored on `string`.
pub fn lookup(quality: ChordQuality, string: GuitarString) -> Result<&'static ChordShape, FretError> {
    SHAPES
        .iter()
        .find(|s| s.quality == quality && s.anchor == string.number())
        .ok_or_else(|| FretError::UnknownChordShape {
            quality: quality.name().to_string(),
            string: string.number(),
        })
}

impl ChordShape {
    /// Place the shape at `anchor_fret`. Any string landing past the last fret fails
    /// the whole chord.
    pub fn apply(&self, symbol: &str, anchor_fret: u8) -> Result<[Fret; STRING_COUNT], FretError> {
        let mut frets = [Fret::Muted; STRING_COUNT];
        for (slot, offset) in self.offsets.iter().enumerate() {
            let Some(offset) = offset else { continue };
            let fret = anchor_fret as i32 + *offset as i32;
            if fret > FRET_COUNT as i32 {
                let string = GuitarString::from_slot(slot).map_or(0, |s| s.number());
                return Err(FretError::FretOutOfRange {
                    symbol: Some(symbol.to_string()),
                    string,
                    fret,
                });
            }
            frets[slot] = Fret::At(fret as u8);
        }
        Ok(frets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fretboard::note_at;
    use crate::pitch::PitchClass;

    #[test]
    fn test_every_quality_has_both_forms() {
        for quality in ChordQuality::ALL {
            for string in [GuitarString::FIFTH, GuitarString::SIXTH] {
                let shape = lookup(quality, string).unwrap();
                assert_eq!(
                    shape.offsets[string.slot()],
                    Some(0),
                    "{} on string {} must keep the anchor at offset 0",
                    quality,
                    string
                );
            }
        }
    }

    #[test]
    fn test_missing_anchor_string() {
        let err = lookup(ChordQuality::Major, GuitarString::new(4).unwrap()).unwrap_err();
        assert_eq!(
            err,
            FretError::UnknownChordShape {
                quality: "major".to_string(),
                string: 4,
            }
        );
    }

    #[test]
    fn test_shapes_spell_their_chords() {
        // Place every shape with root C and check the sounded notes against the intervals.
        let intervals: &[(ChordQuality, &[u8])] = &[
            (ChordQuality::Major, &[0, 4, 7]),
            (ChordQuality::Minor, &[0, 3, 7]),
            (ChordQuality::Major7, &[0, 4, 7, 10]),
            (ChordQuality::Minor7, &[0, 3, 7, 10]),
            (ChordQuality::MajorMaj7, &[0, 4, 7, 11]),
            (ChordQuality::MinorMaj7, &[0, 3, 7, 11]),
            (ChordQuality::Major6, &[0, 4, 7, 9]),
            (ChordQuality::Minor6, &[0, 3, 7, 9]),
            (ChordQuality::Sus4, &[0, 5, 7]),
            (ChordQuality::SevenSus4, &[0, 5, 7, 10]),
            (ChordQuality::Diminished, &[0, 3, 6]),
            (ChordQuality::Augmented, &[0, 4, 8]),
        ];
        for (quality, allowed) in intervals {
            for (string, anchor_fret) in [(GuitarString::SIXTH, 8), (GuitarString::FIFTH, 3)] {
                let frets = lookup(*quality, string).unwrap().apply("C", anchor_fret).unwrap();
                for (slot, fret) in frets.iter().enumerate() {
                    let Some(fret) = fret.number() else { continue };
                    let s = GuitarString::from_slot(slot).unwrap();
                    let note = note_at(s, fret as i32).unwrap();
                    assert!(
                        allowed.contains(&PitchClass::C.interval_to(note)),
                        "{} on string {} sounds {} on string {}",
                        quality,
                        string,
                        note,
                        s
                    );
                }
            }
        }
    }

    #[test]
    fn test_apply_rejects_overflow() {
        let shape = lookup(ChordQuality::Augmented, GuitarString::SIXTH).unwrap();
        assert!(shape.apply("X", 17).is_ok());
        assert_eq!(
            shape.apply("X", 18),
            Err(FretError::FretOutOfRange {
                symbol: Some("X".to_string()),
                string: 5,
                fret: 21,
            })
        );
    }
}
