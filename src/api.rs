//! # Public API
//!
//! Entry points that take a song sheet from YAML to a finished [`SongBook`].
//!
//! ## Functions
//!
//! - [`build_song_book()`] - Use the key and scale written in the song sheet
//! - [`build_song_book_in()`] - Override the key and scale (e.g. a capo-free transposition)
//!
//! ## Typical Usage
//!
//! ```rust
//! use fretbook::build_song_book;
//!
//! let source = r#"
//! title: Bad Day
//! key: E
//! rows:
//!   4:
//!     chord: [G#m, C#m, F#, B]
//!     lyric: [一度はあの光, を見たんだよとて, もキレイ, で]
//! "#;
//!
//! let book = build_song_book(source)?;
//! assert_eq!(book.page_count, 1);
//! assert_eq!(book.document, "key_E-major_scale");
//! # Ok::<(), fretbook::FretError>(())
//! ```

use crate::book::{ChordBook, SongBook};
use crate::error::FretError;
use crate::song::{parse_song, Song};

/// Parse a song sheet and build its book in the sheet's own key.
///
/// # Errors
/// Returns [`FretError`] if the sheet is invalid or names an unknown key or scale.
/// Individual chords that fail are skipped inside the book, not returned here.
pub fn build_song_book(source: &str) -> Result<SongBook, FretError> {
    let song = parse_song(source)?;
    build(&song, &song.key, &song.scale)
}

/// Parse a song sheet and build its book in `key`/`scale` instead of the sheet's key.
pub fn build_song_book_in(source: &str, key: &str, scale: &str) -> Result<SongBook, FretError> {
    let song = parse_song(source)?;
    build(&song, key, scale)
}

fn build(song: &Song, key: &str, scale: &str) -> Result<SongBook, FretError> {
    let book = ChordBook::new(key, scale)?;
    let book = match &song.name {
        Some(name) => book.named(name),
        None => book,
    };
    book.song_book(song)
}
