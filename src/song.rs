//! # Song Sheets
//!
//! YAML input for chord books: the key, page setup and the lyric rows.
//!
//! ```yaml
//! title: Bad Day
//! name: badday
//! key: E
//! scale: major
//! rows-per-page: 5
//! rows:
//!   4:
//!     chord: [G#m, C#m, F#, B]
//!     lyric: [一度はあの光, を見たんだよとて, もキレイ, で]
//!   5:
//!     chord: ["", G#m, C#m@5, F#, B]
//!     lyric: [でも, 今思えば, 汚かったあれは, いわゆるBadDay, Dreams]
//! ```
//!
//! `rows` may also be a plain list, in which case rows are numbered from 0. `lyric` may be
//! left out for rows without words; when present it must match `chord` in length.
//! An empty chord (`""`) is a rest.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::FretError;
use crate::layout::{BookCell, BookRow};

pub const DEFAULT_KEY: &str = "C";
pub const DEFAULT_SCALE: &str = "major";
pub const DEFAULT_ROWS_PER_PAGE: usize = 5;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawSong {
    title: Option<String>,
    name: Option<String>,
    key: Option<String>,
    scale: Option<String>,
    rows_per_page: Option<usize>,
    #[serde(default)]
    rows: RawRows,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRows {
    Indexed(BTreeMap<usize, RawRow>),
    Listed(Vec<RawRow>),
}

impl Default for RawRows {
    fn default() -> Self {
        RawRows::Listed(Vec::new())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRow {
    #[serde(default)]
    chord: Vec<String>,
    lyric: Option<Vec<String>>,
}

/// A validated song sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub title: Option<String>,
    /// Prefix for exported document names.
    pub name: Option<String>,
    pub key: String,
    pub scale: String,
    pub rows_per_page: usize,
    pub rows: Vec<BookRow>,
}

impl Default for Song {
    fn default() -> Self {
        Song {
            title: None,
            name: None,
            key: DEFAULT_KEY.to_string(),
            scale: DEFAULT_SCALE.to_string(),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            rows: Vec::new(),
        }
    }
}

impl Song {
    /// Number of chord cells across all rows, rests included.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).sum()
    }
}

/// Parse and validate a YAML song sheet.
pub fn parse_song(source: &str) -> Result<Song, FretError> {
    let raw: RawSong =
        serde_yaml::from_str(source).map_err(|e| FretError::SongError(e.to_string()))?;

    let rows_per_page = raw.rows_per_page.unwrap_or(DEFAULT_ROWS_PER_PAGE);
    if rows_per_page == 0 {
        return Err(FretError::SongError(
            "rows-per-page must be at least 1".to_string(),
        ));
    }

    let indexed: Vec<(usize, RawRow)> = match raw.rows {
        RawRows::Indexed(map) => map.into_iter().collect(),
        RawRows::Listed(list) => list.into_iter().enumerate().collect(),
    };
    let rows = indexed
        .into_iter()
        .map(|(index, row)| build_row(index, row))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Song {
        title: raw.title,
        name: raw.name,
        key: raw.key.unwrap_or_else(|| DEFAULT_KEY.to_string()),
        scale: raw.scale.unwrap_or_else(|| DEFAULT_SCALE.to_string()),
        rows_per_page,
        rows,
    })
}

fn build_row(index: usize, row: RawRow) -> Result<BookRow, FretError> {
    let lyrics = match row.lyric {
        Some(lyrics) if lyrics.len() != row.chord.len() => {
            return Err(FretError::SongError(format!(
                "row {} has {} chords but {} lyrics",
                index,
                row.chord.len(),
                lyrics.len()
            )));
        }
        Some(lyrics) => lyrics,
        None => vec![String::new(); row.chord.len()],
    };
    let cells = row
        .chord
        .into_iter()
        .zip(lyrics)
        .map(|(chord, lyric)| BookCell { chord, lyric })
        .collect();
    Ok(BookRow { index, cells })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_indexed_rows() {
        let song = parse_song(
            r#"
title: Bad Day
key: E
rows:
  5:
    chord: ["", G#m]
    lyric: [でも, 今思えば]
  4:
    chord: [G#m, C#m]
    lyric: [一度は, あの光]
"#,
        )
        .unwrap();
        assert_eq!(song.title.as_deref(), Some("Bad Day"));
        assert_eq!(song.key, "E");
        assert_eq!(song.scale, "major");
        assert_eq!(song.rows_per_page, 5);
        assert_eq!(song.rows.len(), 2);
        assert_eq!(song.rows[0].index, 4);
        assert_eq!(song.rows[1].index, 5);
        assert_eq!(song.rows[1].cells[0], BookCell::new("", "でも"));
        assert_eq!(song.cell_count(), 4);
    }

    #[test]
    fn test_listed_rows_without_lyrics() {
        let song = parse_song(
            r#"
scale: minor
key: A
rows-per-page: 2
rows:
  - chord: [Am, F, C, G]
  - chord: [Dm, E7]
"#,
        )
        .unwrap();
        assert_eq!(song.rows_per_page, 2);
        assert_eq!(song.rows[1].index, 1);
        assert_eq!(song.rows[1].cells[1], BookCell::new("E7", ""));
    }

    #[test]
    fn test_defaults() {
        let song = parse_song("title: Empty\n").unwrap();
        assert_eq!(
            song,
            Song {
                title: Some("Empty".to_string()),
                ..Song::default()
            }
        );
    }

    #[test]
    fn test_validation_errors() {
        let mismatched = parse_song(
            r#"
rows:
  3:
    chord: [A, B]
    lyric: [one]
"#,
        );
        assert_eq!(
            mismatched,
            Err(FretError::SongError(
                "row 3 has 2 chords but 1 lyrics".to_string()
            ))
        );

        assert!(matches!(
            parse_song("rows-per-page: 0\n"),
            Err(FretError::SongError(_))
        ));
        assert!(matches!(
            parse_song("tempo: 120\n"),
            Err(FretError::SongError(_))
        ));
        assert!(matches!(
            parse_song("rows: [[[\n"),
            Err(FretError::SongError(_))
        ));
    }
}
