//! # Fretboard
//!
//! Six standard-tuned strings, frets `0..=FRET_COUNT`.
//!
//! Strings are numbered the way guitarists count them: string 1 is the high E, string 6
//! the low E. Where the crate stores one value per string it orders them from string 6
//! down to string 1 (low to high), matching how chord charts are written (`x32010`).
//!
//! ```text
//! string 1  E |--F--|--F#-|--G--| ...
//! string 2  B |--C--|--C#-|--D--| ...
//! string 3  G |--G#-|--A--|--A#-| ...
//! string 4  D |--D#-|--E--|--F--| ...
//! string 5  A |--A#-|--B--|--C--| ...
//! string 6  E |--F--|--F#-|--G--| ...
//!           0    1     2     3
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::error::FretError;
use crate::pitch::PitchClass;
use crate::scale::Scale;

/// Highest fret on the board.
pub const FRET_COUNT: u8 = 20;

/// Number of strings.
pub const STRING_COUNT: usize = 6;

/// Open-string pitch classes from string 6 to string 1 (E A D G B E).
pub const STANDARD_TUNING: [PitchClass; STRING_COUNT] = [
    PitchClass::E,
    PitchClass::A,
    PitchClass::D,
    PitchClass::G,
    PitchClass::B,
    PitchClass::E,
];

/// One of the six strings, numbered 1 (high E) through 6 (low E).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GuitarString(u8);

impl GuitarString {
    pub const FIFTH: GuitarString = GuitarString(5);
    pub const SIXTH: GuitarString = GuitarString(6);

    pub fn new(number: u8) -> Option<Self> {
        (1..=STRING_COUNT as u8)
            .contains(&number)
            .then_some(GuitarString(number))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Position of this string in low-to-high arrays (string 6 is slot 0).
    pub fn slot(self) -> usize {
        STRING_COUNT - self.0 as usize
    }

    /// String that owns the given low-to-high slot.
    pub fn from_slot(slot: usize) -> Option<Self> {
        (slot < STRING_COUNT).then(|| GuitarString((STRING_COUNT - slot) as u8))
    }

    pub fn open_note(self) -> PitchClass {
        STANDARD_TUNING[self.slot()]
    }

    /// All strings from 6 down to 1.
    pub fn low_to_high() -> impl Iterator<Item = GuitarString> {
        (0..STRING_COUNT).rev().map(|i| GuitarString(i as u8 + 1))
    }
}

impl fmt::Display for GuitarString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pitch class sounded at `fret` on `string`.
pub fn note_at(string: GuitarString, fret: i32) -> Result<PitchClass, FretError> {
    if !(0..=FRET_COUNT as i32).contains(&fret) {
        return Err(FretError::FretOutOfRange {
            symbol: None,
            string: string.number(),
            fret,
        });
    }
    Ok(string.open_note().transpose(fret))
}

/// Every fret on `string` that sounds `pc`, ascending.
pub fn positions_of(pc: PitchClass, string: GuitarString) -> Vec<u8> {
    let first = string.open_note().interval_to(pc);
    (first..=FRET_COUNT).step_by(12).collect()
}

/// Lowest fret on `string` that sounds `pc`. Always within the first octave.
pub fn first_position(pc: PitchClass, string: GuitarString) -> u8 {
    string.open_note().interval_to(pc)
}

/// Union of the frets of every scale note on `string`.
pub fn positions_of_scale(scale: &[PitchClass], string: GuitarString) -> BTreeSet<u8> {
    scale
        .iter()
        .flat_map(|pc| positions_of(*pc, string))
        .collect()
}

/// One scale note on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleMarker {
    pub string: GuitarString,
    pub fret: u8,
    pub note: PitchClass,
    pub is_tonic: bool,
}

/// Every position of a scale across all six strings, for the overview panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleOverlay {
    pub title: String,
    pub scale: Scale,
    pub markers: Vec<ScaleMarker>,
}

/// Lay the scale over the whole board, string 6 first, frets ascending.
pub fn scale_overlay(scale: &Scale) -> ScaleOverlay {
    let markers = GuitarString::low_to_high()
        .flat_map(|string| {
            positions_of_scale(scale.notes(), string)
                .into_iter()
                .map(move |fret| {
                    let note = string.open_note().transpose(fret as i32);
                    ScaleMarker {
                        string,
                        fret,
                        note,
                        is_tonic: note == scale.root,
                    }
                })
        })
        .collect();
    ScaleOverlay {
        title: scale.label(),
        scale: scale.clone(),
        markers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string(n: u8) -> GuitarString {
        GuitarString::new(n).unwrap()
    }

    #[test]
    fn test_string_numbering() {
        assert_eq!(string(6).open_note(), PitchClass::E);
        assert_eq!(string(5).open_note(), PitchClass::A);
        assert_eq!(string(2).open_note(), PitchClass::B);
        assert_eq!(string(6).slot(), 0);
        assert_eq!(string(1).slot(), 5);
        assert_eq!(GuitarString::from_slot(1), Some(GuitarString::FIFTH));
        assert_eq!(GuitarString::new(0), None);
        assert_eq!(GuitarString::new(7), None);
        let order: Vec<u8> = GuitarString::low_to_high().map(|s| s.number()).collect();
        assert_eq!(order, [6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_positions_match_note_at() {
        for s in GuitarString::low_to_high() {
            for pc in PitchClass::all() {
                let positions = positions_of(pc, s);
                let expected: Vec<u8> = (0..=FRET_COUNT)
                    .filter(|f| note_at(s, *f as i32).unwrap() == pc)
                    .collect();
                assert_eq!(positions, expected);
                assert!(positions.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn test_positions_of_open_string_note() {
        assert_eq!(positions_of(PitchClass::E, string(6)), vec![0, 12]);
        assert_eq!(positions_of(PitchClass::new(3).unwrap(), string(6)), vec![11]);
        assert_eq!(positions_of(PitchClass::G, string(6)), vec![3, 15]);
    }

    #[test]
    fn test_note_at_bounds() {
        assert_eq!(note_at(string(5), 3).unwrap(), PitchClass::C);
        assert_eq!(note_at(string(5), 20).unwrap(), PitchClass::new(5).unwrap());
        assert!(matches!(
            note_at(string(5), 21),
            Err(FretError::FretOutOfRange { fret: 21, string: 5, symbol: None })
        ));
        assert_eq!(
            note_at(string(5), 21).unwrap_err().to_string(),
            "Fret 21 on string 5 is outside the fretboard"
        );
        assert!(matches!(
            note_at(string(5), -1),
            Err(FretError::FretOutOfRange { fret: -1, .. })
        ));
    }

    #[test]
    fn test_scale_overlay() {
        let scale = Scale::from_key("C", "major").unwrap();
        let on_sixth = positions_of_scale(scale.notes(), string(6));
        assert_eq!(
            on_sixth.iter().copied().take(8).collect::<Vec<_>>(),
            vec![0, 1, 3, 5, 7, 8, 10, 12]
        );

        let overlay = scale_overlay(&scale);
        assert_eq!(overlay.title, "key_C-major_scale");
        assert!(overlay.markers.iter().all(|m| scale.contains(m.note)));
        let tonics: Vec<(u8, u8)> = overlay
            .markers
            .iter()
            .filter(|m| m.is_tonic && m.string == string(5))
            .map(|m| (m.string.number(), m.fret))
            .collect();
        assert_eq!(tonics, vec![(5, 3), (5, 15)]);
    }
}
