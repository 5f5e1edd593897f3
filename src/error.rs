//! # Error Types
//!
//! This module defines all error types for the fretbook engine.
//!
//! Every error names the thing that could not be resolved (note spelling, scale name,
//! chord symbol, string and fret) so a book builder can flag the offending cell and
//! carry on with the rest of the song.
//!
//! ## Error Types
//! - `InvalidPitchClass` - A pitch class outside `0..12`
//! - `UnknownNoteName` - A note spelling that is not one of the twelve sharp names
//! - `UnknownScale` - A scale name with no interval template
//! - `MalformedChordSymbol` - A chord symbol whose root cannot be read
//! - `UnknownChordShape` - No shape for this quality on this anchor string
//! - `FretOutOfRange` - A voicing that runs off the fretboard
//! - `RootNotAtFret` - A pinned anchor fret that does not sound the chord root
//! - `InvalidLayout` - A page grid that cannot hold the requested rows
//! - `SongError` - A song sheet that fails to parse or validate
//!
//! Out-of-scale chords are not errors; see [`ChordWarning`](crate::ChordWarning).
//!
//! ## Usage
//! ```rust
//! use fretbook::{ChordResolver, FretError};
//!
//! let resolver = ChordResolver::new("C", "major")?;
//! match resolver.resolve("Bb") {
//!     Ok(resolved) => println!("{}", resolved.voicing.tab()),
//!     Err(FretError::MalformedChordSymbol { symbol, reason }) => {
//!         eprintln!("cannot read {}: {}", symbol, reason);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # Ok::<(), FretError>(())
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FretError {
    /// Pitch class outside the twelve-tone range.
    ///
    /// # Example
    /// ```
    /// # use fretbook::FretError;
    /// let err = FretError::InvalidPitchClass(12);
    /// assert_eq!(err.to_string(), "Invalid pitch class: 12 (expected 0..12)");
    /// ```
    #[error("Invalid pitch class: {0} (expected 0..12)")]
    InvalidPitchClass(i32),

    /// Note spelling not found in the sharp-only name table.
    ///
    /// Spelling is case-sensitive and flats are not accepted.
    #[error("Unknown note name: {0:?}")]
    UnknownNoteName(String),

    /// Scale name without an interval template.
    ///
    /// # Example
    /// ```
    /// # use fretbook::FretError;
    /// let err = FretError::UnknownScale("lydian".to_string());
    /// assert_eq!(err.to_string(), "Unknown scale: \"lydian\"");
    /// ```
    #[error("Unknown scale: {0:?}")]
    UnknownScale(String),

    /// Chord symbol whose root spelling could not be read.
    #[error("Malformed chord symbol {symbol:?}: {reason}")]
    MalformedChordSymbol { symbol: String, reason: String },

    /// No chord shape for this quality anchored on this string.
    ///
    /// # Example
    /// ```
    /// # use fretbook::FretError;
    /// let err = FretError::UnknownChordShape {
    ///     quality: "minor9".to_string(),
    ///     string: 6,
    /// };
    /// assert_eq!(err.to_string(), "No chord shape for quality \"minor9\" on string 6");
    /// ```
    #[error("No chord shape for quality {quality:?} on string {string}")]
    UnknownChordShape { quality: String, string: u8 },

    /// A fret computed for a voicing (or asked of the board) lies outside `0..=fret_count`.
    ///
    /// `symbol` names the chord being voiced; it is `None` for a plain board lookup.
    ///
    /// # Example
    /// ```
    /// # use fretbook::FretError;
    /// let err = FretError::FretOutOfRange {
    ///     symbol: Some("G".to_string()),
    ///     string: 5,
    ///     fret: 22,
    /// };
    /// assert_eq!(err.to_string(), "Chord \"G\" needs fret 22 on string 5, outside the fretboard");
    ///
    /// let err = FretError::FretOutOfRange { symbol: None, string: 5, fret: 21 };
    /// assert_eq!(err.to_string(), "Fret 21 on string 5 is outside the fretboard");
    /// ```
    #[error("{}", fret_out_of_range(.symbol, .string, .fret))]
    FretOutOfRange {
        symbol: Option<String>,
        string: u8,
        fret: i32,
    },

    /// A manual voicing pinned to a fret that does not sound its root.
    #[error("Chord {symbol:?} cannot be anchored at fret {fret} on string {string}: root is not there")]
    RootNotAtFret { symbol: String, string: u8, fret: u8 },

    /// The page grid cannot hold the rows handed to the planner.
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// Song sheet YAML that fails to parse or validate.
    ///
    /// # Example
    /// ```
    /// # use fretbook::FretError;
    /// let err = FretError::SongError("row 3 has 4 chords but 3 lyrics".to_string());
    /// assert_eq!(err.to_string(), "Invalid song sheet: row 3 has 4 chords but 3 lyrics");
    /// ```
    #[error("Invalid song sheet: {0}")]
    SongError(String),
}

impl FretError {
    pub(crate) fn malformed(symbol: &str, reason: impl Into<String>) -> Self {
        FretError::MalformedChordSymbol {
            symbol: symbol.to_string(),
            reason: reason.into(),
        }
    }
}

fn fret_out_of_range(symbol: &Option<String>, string: &u8, fret: &i32) -> String {
    match symbol {
        Some(symbol) => format!(
            "Chord {:?} needs fret {} on string {}, outside the fretboard",
            symbol, fret, string
        ),
        None => format!("Fret {} on string {} is outside the fretboard", fret, string),
    }
}
