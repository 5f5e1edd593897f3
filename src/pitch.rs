//! # Pitch Space
//!
//! Twelve-tone cyclic pitch classes with a fixed, sharp-only spelling.
//!
//! `0 = C`, `1 = C#`, ... `11 = B`. Arithmetic wraps modulo 12 and every class has exactly
//! one name; there is no context-sensitive respelling (no `Db`, no `E#`).
//!
//! ## Example
//! ```rust
//! use fretbook::pitch::{name_of, pitch_class_of};
//!
//! let g_sharp = pitch_class_of("G#")?;
//! assert_eq!(g_sharp.value(), 8);
//! assert_eq!(name_of(8)?, "G#");
//! assert_eq!(g_sharp.transpose(5).name(), "C#");
//! # Ok::<(), fretbook::FretError>(())
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::FretError;

/// Number of pitch classes in one octave.
pub const OCTAVE: u8 = 12;

/// Canonical spelling of each pitch class, indexed by value.
pub const NOTE_NAMES: [&str; OCTAVE as usize] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// A pitch class in `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);
    pub const D: PitchClass = PitchClass(2);
    pub const E: PitchClass = PitchClass(4);
    pub const G: PitchClass = PitchClass(7);
    pub const A: PitchClass = PitchClass(9);
    pub const B: PitchClass = PitchClass(11);

    /// Build a pitch class, rejecting anything outside `0..12`.
    pub fn new(value: i32) -> Result<Self, FretError> {
        if (0..OCTAVE as i32).contains(&value) {
            Ok(PitchClass(value as u8))
        } else {
            Err(FretError::InvalidPitchClass(value))
        }
    }

    /// Build a pitch class from any integer by reducing it modulo 12.
    pub fn wrapping(value: i32) -> Self {
        PitchClass(value.rem_euclid(OCTAVE as i32) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        NOTE_NAMES[self.0 as usize]
    }

    /// Move up by `semitones` (negative moves down), wrapping at the octave.
    pub fn transpose(self, semitones: i32) -> Self {
        PitchClass::wrapping(self.0 as i32 + semitones)
    }

    /// Upward distance in semitones from `self` to `other`, in `0..12`.
    pub fn interval_to(self, other: PitchClass) -> u8 {
        (other.0 + OCTAVE - self.0) % OCTAVE
    }

    /// Every pitch class from C to B.
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..OCTAVE).map(PitchClass)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for PitchClass {
    type Err = FretError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        pitch_class_of(s)
    }
}

impl Serialize for PitchClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Name of a raw pitch-class value.
pub fn name_of(value: i32) -> Result<&'static str, FretError> {
    PitchClass::new(value).map(PitchClass::name)
}

/// Pitch class of a note name. Case-sensitive, sharps only.
pub fn pitch_class_of(name: &str) -> Result<PitchClass, FretError> {
    NOTE_NAMES
        .iter()
        .position(|n| *n == name)
        .map(|i| PitchClass(i as u8))
        .ok_or_else(|| FretError::UnknownNoteName(name.to_string()))
}
