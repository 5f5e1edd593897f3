//! Chord resolution engine
//!
//! Turns chord symbols into voicings against a fixed key:
//!
//! 1. Parse the symbol into root and quality suffix.
//! 2. Correct the quality family from the root's scale degree (`E` in C major becomes
//!    `Em`). Roots outside the scale keep their written quality and raise an
//!    [`ChordWarning::OutOfScaleChord`] advisory.
//! 3. Pick the anchor: the lower of the root's first fret on string 5 and on
//!    string 6, string 5 on a tie. A preferred string overrides the choice.
//! 4. Look up the shape for (quality, anchor string) and lay it on the anchor fret.

use tracing::{debug, warn};

use crate::error::FretError;
use crate::fretboard::{first_position, note_at, GuitarString};
use crate::pitch::{pitch_class_of, PitchClass};
use crate::scale::Scale;

use super::shapes::lookup;
use super::symbol::parse_chord_symbol;
use super::types::{ChordQuality, ChordWarning, ManualChord, ResolvedChord, Voicing};

/// Resolves chord symbols against one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordResolver {
    scale: Scale,
}

impl ChordResolver {
    /// Resolver for a key spelling and scale name, e.g. `("E", "major")`.
    pub fn new(key: &str, scale_name: &str) -> Result<Self, FretError> {
        Ok(Self::for_scale(Scale::from_key(key, scale_name)?))
    }

    pub fn for_scale(scale: Scale) -> Self {
        ChordResolver { scale }
    }

    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    /// Resolve a symbol, honouring any `@string` suffix it carries.
    pub fn resolve(&self, symbol: &str) -> Result<ResolvedChord, FretError> {
        self.resolve_with(symbol, None)
    }

    /// Resolve a symbol with an explicit preferred anchor string.
    ///
    /// The explicit preference wins over an `@string` suffix in the symbol.
    pub fn resolve_with(
        &self,
        symbol: &str,
        preferred: Option<GuitarString>,
    ) -> Result<ResolvedChord, FretError> {
        let parsed = parse_chord_symbol(symbol)?;
        let written = ChordQuality::from_suffix(parsed.suffix);

        let (quality, warning) = match written {
            Some(quality) => self.correct_quality(parsed.text, parsed.root, quality),
            None => (None, None),
        };

        let (string, fret) = match preferred.or(parsed.anchor) {
            Some(string) => (string, first_position(parsed.root, string)),
            None => select_anchor(parsed.root),
        };

        let quality = quality.ok_or_else(|| FretError::UnknownChordShape {
            quality: parsed.suffix.to_string(),
            string: string.number(),
        })?;

        let voicing = voice(parsed.text, parsed.root, quality, string, fret)?;
        debug!(
            symbol = parsed.text,
            chord = %voicing.name(),
            string = string.number(),
            fret,
            tab = %voicing.tab(),
            "resolved chord"
        );
        Ok(ResolvedChord { voicing, warning })
    }

    /// Resolve a hand-specified chord. The quality is used as given.
    pub fn resolve_manual(&self, chord: &ManualChord) -> Result<Voicing, FretError> {
        let root = pitch_class_of(&chord.root)?;
        let quality =
            ChordQuality::from_name(&chord.quality).ok_or_else(|| FretError::UnknownChordShape {
                quality: chord.quality.clone(),
                string: chord.string.number(),
            })?;
        let symbol = format!("{}{}", root, quality.suffix());

        let fret = match chord.fret {
            Some(fret) => {
                if note_at(chord.string, fret as i32)? != root {
                    return Err(FretError::RootNotAtFret {
                        symbol,
                        string: chord.string.number(),
                        fret,
                    });
                }
                fret
            }
            None => first_position(root, chord.string),
        };

        voice(&symbol, root, quality, chord.string, fret)
    }

    /// Flip the quality family to match the root's scale degree.
    fn correct_quality(
        &self,
        symbol: &str,
        root: PitchClass,
        quality: ChordQuality,
    ) -> (Option<ChordQuality>, Option<ChordWarning>) {
        match self.scale.family_of(root) {
            Some(family) if quality.family().is_some() => {
                (Some(quality.with_family(family)), None)
            }
            Some(_) => (Some(quality), None),
            None => (Some(quality), self.out_of_scale(symbol, root)),
        }
    }

    fn out_of_scale(&self, symbol: &str, root: PitchClass) -> Option<ChordWarning> {
        if self.scale.contains(root) {
            return None;
        }
        let warning = ChordWarning::OutOfScaleChord {
            symbol: symbol.to_string(),
            root,
            scale: self.scale.label(),
        };
        warn!("{}", warning);
        Some(warning)
    }
}

/// Lower of the root's first frets on strings 5 and 6; string 5 wins a tie.
pub fn select_anchor(root: PitchClass) -> (GuitarString, u8) {
    lower_anchor(
        first_position(root, GuitarString::FIFTH),
        first_position(root, GuitarString::SIXTH),
    )
}

/// Pick between the first frets on strings 5 and 6.
pub(crate) fn lower_anchor(on_fifth: u8, on_sixth: u8) -> (GuitarString, u8) {
    if on_fifth <= on_sixth {
        (GuitarString::FIFTH, on_fifth)
    } else {
        (GuitarString::SIXTH, on_sixth)
    }
}

/// Lay the (quality, string) shape on `fret`.
pub fn voice(
    symbol: &str,
    root: PitchClass,
    quality: ChordQuality,
    string: GuitarString,
    fret: u8,
) -> Result<Voicing, FretError> {
    let shape = lookup(quality, string)?;
    let frets = shape.apply(symbol, fret)?;
    Ok(Voicing {
        symbol: symbol.to_string(),
        root,
        quality,
        anchor_string: string,
        anchor_fret: fret,
        frets,
    })
}
