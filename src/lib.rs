pub mod api;
pub mod book;
pub mod chord;
pub mod error;
pub mod fretboard;
pub mod layout;
pub mod pitch;
pub mod scale;
pub mod song;

pub use api::{build_song_book, build_song_book_in};
pub use book::{CellDiagram, ChordBook, ChordSheet, LyricCell, SongBook};
pub use chord::{
    ChordDiagram, ChordQuality, ChordResolver, ChordWarning, Fret, ManualChord, ResolvedChord,
    Voicing,
};
pub use error::*;
pub use fretboard::{GuitarString, ScaleOverlay};
pub use layout::{BookCell, BookPage, BookRow};
pub use pitch::PitchClass;
pub use scale::Scale;
pub use song::{parse_song, Song};
