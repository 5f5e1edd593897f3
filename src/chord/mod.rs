//! # Chord Module
//!
//! Resolve chord symbols into six-string voicings for a given key.
//!
//! ## Sub-modules
//! - `types` - ChordQuality, Fret, Voicing, ChordDiagram, ManualChord, ChordWarning
//! - `symbol` - Chord symbol parsing (`G#m`, `C#m7`, `F#@5`)
//! - `shapes` - Movable E-form and A-form shape table
//! - `resolver` - Quality correction, anchor selection and shape placement
//!
//! ## Example
//! ```rust
//! use fretbook::chord::{ChordResolver, ChordQuality, Fret};
//!
//! let resolver = ChordResolver::new("C", "major")?;
//!
//! // E is the third degree of C major, so the written major chord becomes Em
//! let e = resolver.resolve("E")?;
//! assert_eq!(e.voicing.quality, ChordQuality::Minor);
//! assert_eq!(e.voicing.tab(), "0 2 2 0 0 0");
//!
//! // C sits lower on string 5 (fret 3) than on string 6 (fret 8)
//! let c = resolver.resolve("C")?;
//! assert_eq!(c.voicing.anchor_string.number(), 5);
//! assert_eq!(c.voicing.frets[0], Fret::Muted);
//! # Ok::<(), fretbook::FretError>(())
//! ```
//!
//! ## Quality Correction
//! Family qualities (`major*`, `minor*`) are re-derived from the root's scale degree:
//! the template's major-family degrees take `major`, the rest `minor`, and the
//! extension after the family word is kept (`E7` in C major resolves as `Em7`).
//! Suspended, diminished and augmented chords are never corrected.
//!
//! ## Related Modules
//! - `scale` - Degree lookups and major-family degree sets
//! - `fretboard` - Root positions on strings 5 and 6
//! - `book` - Batch resolution into chord sheets and song books

mod resolver;
mod shapes;
mod symbol;
mod types;


pub use resolver::{select_anchor, voice, ChordResolver};
pub use shapes::{lookup as shape_for, ChordShape, SHAPES};
pub use symbol::{parse_chord_symbol, ChordSymbol};
pub use types::{
    ChordDiagram, ChordQuality, ChordWarning, Fret, FretWindow, ManualChord, ResolvedChord,
    Voicing, WINDOW_WIDTH,
};
