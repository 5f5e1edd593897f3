//! # Chord Books
//!
//! Batch resolution of chords into exportable layouts.
//!
//! ## Outputs
//! - [`ChordSheet`] - the scale overview followed by hand-picked chords, two per row
//! - [`SongBook`] - the scale overview followed by lyric pages from a [`Song`]
//!
//! Chords are resolved one cell at a time. A chord that cannot be resolved becomes a
//! [`CellDiagram::Skipped`] cell carrying the reason; the rest of the book is built
//! normally. Out-of-scale advisories are collected in `warnings`.
//!
//! ## Example
//! ```rust
//! use fretbook::{ChordBook, ManualChord, GuitarString};
//!
//! let sheet = ChordBook::new("E", "major")?
//!     .named("practice")
//!     .with_chord(ManualChord::new("G#", GuitarString::SIXTH, "minor"))
//!     .with_chord(ManualChord::new("B", GuitarString::FIFTH, "major"))
//!     .chord_sheet();
//!
//! assert_eq!(sheet.document, "practice-key_E-major_scale");
//! assert_eq!(sheet.rows, 2);
//! assert_eq!(sheet.slots.len(), 2);
//! # Ok::<(), fretbook::FretError>(())
//! ```

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::chord::{ChordDiagram, ChordResolver, ChordWarning, ManualChord};
use crate::error::FretError;
use crate::fretboard::{scale_overlay, ScaleOverlay};
use crate::layout::{max_cols, plan, BookCell, BookPage, GridSlot};
use crate::scale::Scale;
use crate::song::Song;

/// Columns on a chord sheet.
pub const SHEET_COLS: usize = 2;

/// What a renderer draws in one grid slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CellDiagram {
    /// Blank slot, lyric only.
    Rest,
    Chord(ChordDiagram),
    /// The chord could not be voiced; render a placeholder.
    #[serde(rename_all = "camelCase")]
    Skipped { symbol: String, reason: String },
}

impl CellDiagram {
    pub fn diagram(&self) -> Option<&ChordDiagram> {
        match self {
            CellDiagram::Chord(diagram) => Some(diagram),
            _ => None,
        }
    }
}

/// A slot's drawing plus the lyric printed above it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricCell {
    pub lyric: String,
    pub diagram: CellDiagram,
}

/// Overview plus manual chords, two per row below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordSheet {
    pub document: String,
    pub overview: ScaleOverlay,
    /// Grid rows including the overview row.
    pub rows: usize,
    pub cols: usize,
    /// Chord slots; row 0 is reserved for the overview.
    pub slots: Vec<GridSlot<CellDiagram>>,
}

/// Overview plus paginated lyric rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongBook {
    pub title: String,
    pub document: String,
    pub overview: ScaleOverlay,
    pub page_count: usize,
    pub pages: Vec<BookPage<LyricCell>>,
    pub warnings: Vec<ChordWarning>,
}

impl SongBook {
    /// Cells that could not be voiced, as `(symbol, reason)`.
    pub fn skipped(&self) -> Vec<(&str, &str)> {
        self.pages
            .iter()
            .flat_map(|p| p.slots.iter())
            .filter_map(|slot| match &slot.content.diagram {
                CellDiagram::Skipped { symbol, reason } => Some((symbol.as_str(), reason.as_str())),
                _ => None,
            })
            .collect()
    }
}

/// Builder for chord sheets and song books in one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordBook {
    resolver: ChordResolver,
    name: Option<String>,
    chords: Vec<ManualChord>,
}

impl ChordBook {
    pub fn new(key: &str, scale_name: &str) -> Result<Self, FretError> {
        Ok(Self::for_scale(Scale::from_key(key, scale_name)?))
    }

    pub fn for_scale(scale: Scale) -> Self {
        ChordBook {
            resolver: ChordResolver::for_scale(scale),
            name: None,
            chords: Vec::new(),
        }
    }

    /// Prefix for the document name.
    pub fn named(mut self, name: &str) -> Self {
        self.name = (!name.is_empty()).then(|| name.to_string());
        self
    }

    pub fn with_chord(mut self, chord: ManualChord) -> Self {
        self.add_manual_voicing(chord);
        self
    }

    /// Queue a chord for the chord sheet. Order is kept.
    pub fn add_manual_voicing(&mut self, chord: ManualChord) {
        self.chords.push(chord);
    }

    /// Document name without extension, e.g. `song-key_E-major_scale`.
    pub fn document(&self) -> String {
        let label = self.resolver.scale().label();
        match &self.name {
            Some(name) => format!("{}-{}", name, label),
            None => label,
        }
    }

    pub fn overview(&self) -> ScaleOverlay {
        scale_overlay(self.resolver.scale())
    }

    /// Lay out the queued manual chords.
    pub fn chord_sheet(&self) -> ChordSheet {
        let slots: Vec<GridSlot<CellDiagram>> = self
            .chords
            .iter()
            .enumerate()
            .map(|(i, chord)| GridSlot {
                row: 1 + i / SHEET_COLS,
                col: i % SHEET_COLS,
                source_row: i,
                content: match self.resolver.resolve_manual(chord) {
                    Ok(voicing) => CellDiagram::Chord(voicing.into()),
                    Err(e) => skip(&format!("{}({})", chord.root, chord.quality), e),
                },
            })
            .collect();

        ChordSheet {
            document: self.document(),
            overview: self.overview(),
            rows: 1 + self.chords.len().div_ceil(SHEET_COLS),
            cols: SHEET_COLS,
            slots,
        }
    }

    /// Resolve every cell of `song` in this book's key and paginate it.
    pub fn song_book(&self, song: &Song) -> Result<SongBook, FretError> {
        let pages = plan(&song.rows, max_cols(&song.rows), song.rows_per_page)?;
        let mut warnings = Vec::new();

        let pages: Vec<BookPage<LyricCell>> = pages
            .into_iter()
            .map(|page| page.map(|cell| self.lyric_cell(cell, &mut warnings)))
            .collect();

        let book = SongBook {
            title: song.title.clone().unwrap_or_else(|| self.document()),
            document: self.document(),
            overview: self.overview(),
            page_count: pages.len(),
            pages,
            warnings,
        };
        info!(
            document = %book.document,
            pages = book.page_count,
            cells = song.cell_count(),
            skipped = book.skipped().len(),
            warnings = book.warnings.len(),
            "built song book"
        );
        Ok(book)
    }

    fn lyric_cell(&self, cell: BookCell, warnings: &mut Vec<ChordWarning>) -> LyricCell {
        let diagram = if cell.is_rest() {
            CellDiagram::Rest
        } else {
            match self.resolver.resolve(&cell.chord) {
                Ok(resolved) => {
                    warnings.extend(resolved.warning);
                    CellDiagram::Chord(resolved.voicing.into())
                }
                Err(e) => skip(&cell.chord, e),
            }
        };
        debug!(chord = %cell.chord, lyric = %cell.lyric, "placed cell");
        LyricCell {
            lyric: cell.lyric,
            diagram,
        }
    }
}

fn skip(symbol: &str, error: FretError) -> CellDiagram {
    warn!(symbol, %error, "skipping chord");
    CellDiagram::Skipped {
        symbol: symbol.to_string(),
        reason: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fretboard::GuitarString;
    use crate::layout::{BookCell, BookRow};
    use pretty_assertions::assert_eq;

    fn song(rows: Vec<Vec<(&str, &str)>>, rows_per_page: usize) -> Song {
        Song {
            rows: rows
                .into_iter()
                .enumerate()
                .map(|(index, cells)| BookRow {
                    index,
                    cells: cells
                        .into_iter()
                        .map(|(chord, lyric)| BookCell::new(chord, lyric))
                        .collect(),
                })
                .collect(),
            rows_per_page,
            ..Song::default()
        }
    }

    #[test]
    fn test_document_names() {
        let book = ChordBook::new("C", "major").unwrap();
        assert_eq!(book.document(), "key_C-major_scale");
        assert_eq!(book.named("").document(), "key_C-major_scale");
        let named = ChordBook::new("G#", "minor").unwrap().named("tune");
        assert_eq!(named.document(), "tune-key_G#-minor_scale");
    }

    #[test]
    fn test_chord_sheet_grid() {
        let sheet = ChordBook::new("C", "major")
            .unwrap()
            .with_chord(ManualChord::new("C", GuitarString::FIFTH, "major"))
            .with_chord(ManualChord::new("E", GuitarString::SIXTH, "major"))
            .with_chord(ManualChord::new("F", GuitarString::FIFTH, "minor9"))
            .chord_sheet();

        assert_eq!(sheet.rows, 3);
        assert_eq!(sheet.cols, 2);
        let places: Vec<(usize, usize)> = sheet.slots.iter().map(|s| (s.row, s.col)).collect();
        assert_eq!(places, vec![(1, 0), (1, 1), (2, 0)]);

        // Manual chords are not degree-corrected
        let e = sheet.slots[1].content.diagram().unwrap();
        assert_eq!(e.name, "E");

        assert!(matches!(
            &sheet.slots[2].content,
            CellDiagram::Skipped { symbol, .. } if symbol == "F(minor9)"
        ));
    }

    #[test]
    fn test_empty_chord_sheet() {
        let sheet = ChordBook::new("D", "major").unwrap().chord_sheet();
        assert_eq!(sheet.rows, 1);
        assert!(sheet.slots.is_empty());
        assert!(!sheet.overview.markers.is_empty());
    }

    #[test]
    fn test_song_book_pages_and_cells() {
        let rows: Vec<Vec<(&str, &str)>> = (0..12)
            .map(|i| {
                if i == 0 {
                    vec![("", "intro"), ("G#m", "one")]
                } else {
                    vec![("E", "la")]
                }
            })
            .collect();
        let book = ChordBook::new("E", "major")
            .unwrap()
            .song_book(&song(rows, 5))
            .unwrap();

        assert_eq!(book.page_count, 3);
        assert_eq!(book.pages[0].source_rows, vec![0, 1, 2, 3, 4]);
        assert_eq!(book.pages[1].source_rows, vec![5, 6, 7, 8, 9]);
        assert_eq!(book.pages[2].source_rows, vec![10, 11]);
        assert_eq!(book.pages[0].cols, 2);

        let rest = book.pages[0].slot(0, 0).unwrap();
        assert_eq!(rest.content.diagram, CellDiagram::Rest);
        assert_eq!(rest.content.lyric, "intro");

        let gsm = book.pages[0].slot(0, 1).unwrap();
        assert_eq!(gsm.content.diagram.diagram().unwrap().voicing.tab(), "4 6 6 4 4 4");
        assert!(book.warnings.is_empty());
        assert!(book.skipped().is_empty());
    }

    #[test]
    fn test_bad_chords_do_not_abort_the_book() {
        let rows = vec![
            vec![("Am", "one"), ("Bb", "two"), ("Cadd9", "three")],
            vec![("F#", "four"), ("C", "five")],
        ];
        let book = ChordBook::new("C", "major")
            .unwrap()
            .song_book(&song(rows, 5))
            .unwrap();

        assert_eq!(book.page_count, 1);
        let skipped: Vec<&str> = book.skipped().iter().map(|(symbol, _)| *symbol).collect();
        assert_eq!(skipped, vec!["Bb", "Cadd9"]);
        assert_eq!(book.warnings.len(), 1);
        assert!(matches!(
            &book.warnings[0],
            ChordWarning::OutOfScaleChord { symbol, .. } if symbol == "F#"
        ));
        assert!(book.pages[0].slot(1, 1).unwrap().content.diagram.diagram().is_some());
    }

    #[test]
    fn test_title_falls_back_to_document() {
        let book = ChordBook::new("A", "minor")
            .unwrap()
            .song_book(&Song::default())
            .unwrap();
        assert_eq!(book.title, "key_A-minor_scale");
        assert_eq!(book.page_count, 0);
    }
}
