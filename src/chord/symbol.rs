//! Chord symbol parsing
//!
//! Splits symbols such as `G#m`, `C#m7` or `F#@5` into root, quality suffix and an
//! optional preferred anchor string.
//!
//! # Grammar
//! ```text
//! symbol  = root suffix [ "@" string ]
//! root    = "C" | "D" | "E" | "F" | "G" | "A" | "B" [ "#" ]
//! suffix  = "" | "m" | "7" | "m7" | "M7" | "maj7" | "mM7" | "6" | "m6"
//!         | "sus4" | "7sus4" | "dim" | "aug"
//! string  = "1" .. "6"
//! ```
//!
//! Flats are rejected: `Bb` is a malformed symbol, write `A#`.

use crate::error::FretError;
use crate::fretboard::GuitarString;
use crate::pitch::{pitch_class_of, PitchClass};

/// A parsed chord symbol. The suffix is kept verbatim; mapping it to a shape is
/// the resolver's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordSymbol<'a> {
    /// Symbol without the anchor suffix, e.g. `"G#m"`.
    pub text: &'a str,
    pub root: PitchClass,
    pub suffix: &'a str,
    pub anchor: Option<GuitarString>,
}

/// Parse a chord symbol.
///
/// # Examples
/// ```
/// use fretbook::chord::parse_chord_symbol;
///
/// let chord = parse_chord_symbol("C#m7@5")?;
/// assert_eq!(chord.root.name(), "C#");
/// assert_eq!(chord.suffix, "m7");
/// assert_eq!(chord.anchor.map(|s| s.number()), Some(5));
/// # Ok::<(), fretbook::FretError>(())
/// ```
pub fn parse_chord_symbol(symbol: &str) -> Result<ChordSymbol<'_>, FretError> {
    let trimmed = symbol.trim();
    if trimmed.is_empty() {
        return Err(FretError::malformed(symbol, "empty chord symbol"));
    }

    let (text, anchor) = match trimmed.split_once('@') {
        Some((text, string)) => {
            let anchor = string
                .parse::<u8>()
                .ok()
                .and_then(GuitarString::new)
                .ok_or_else(|| {
                    FretError::malformed(symbol, format!("anchor string {:?} is not 1-6", string))
                })?;
            (text, Some(anchor))
        }
        None => (trimmed, None),
    };

    let mut chars = text.char_indices();
    let root_end = match chars.next() {
        Some((_, 'A'..='G')) => match chars.next() {
            Some((i, '#')) => i + 1,
            Some((_, 'b')) => {
                return Err(FretError::malformed(symbol, "flat spellings are not supported"))
            }
            Some((i, _)) => i,
            None => text.len(),
        },
        Some((_, c)) => {
            return Err(FretError::malformed(symbol, format!("unrecognized root {:?}", c)))
        }
        None => return Err(FretError::malformed(symbol, "missing root")),
    };

    let root = pitch_class_of(&text[..root_end])
        .map_err(|_| FretError::malformed(symbol, "unrecognized root"))?;

    Ok(ChordSymbol {
        text,
        root,
        suffix: &text[root_end..],
        anchor,
    })
}
