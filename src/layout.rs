//! # Layout Planner
//!
//! Packs lyric rows of (chord, lyric) cells onto fixed-size page grids.
//!
//! Rows are never re-flowed: a row supplied by the caller stays one grid row, and each
//! cell keeps its column. Pages break every `rows_per_page` rows. An empty chord symbol
//! is a rest and still takes its slot.
//!
//! ```text
//! rows_per_page = 2, max_cols = 3
//!
//! page 1   | G#m  | C#m  | F#   |     row 0
//!          |      | G#m  |      |     row 1
//! page 2   | B    |      |      |     row 2
//! ```
//!
//! Planning is pure: the same rows always produce the same pages.

use serde::Serialize;
use tracing::debug;

use crate::error::FretError;

/// One chord/lyric pair. An empty `chord` is a rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookCell {
    pub chord: String,
    pub lyric: String,
}

impl BookCell {
    pub fn new(chord: &str, lyric: &str) -> Self {
        BookCell {
            chord: chord.to_string(),
            lyric: lyric.to_string(),
        }
    }

    pub fn is_rest(&self) -> bool {
        self.chord.trim().is_empty()
    }
}

/// One lyric line: the caller's row index and its cells in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRow {
    pub index: usize,
    pub cells: Vec<BookCell>,
}

/// A cell placed on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSlot<T> {
    /// Row within the page, `0..rows_per_page`.
    pub row: usize,
    pub col: usize,
    /// Index of the caller's row this slot came from.
    pub source_row: usize,
    pub content: T,
}

/// One page of the book grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPage<T> {
    /// 1-based page number.
    pub number: usize,
    /// Grid bounds reserved on the page, whether or not every row is used.
    pub rows: usize,
    pub cols: usize,
    /// Caller row indices on this page, in order.
    pub source_rows: Vec<usize>,
    pub slots: Vec<GridSlot<T>>,
}

impl<T> BookPage<T> {
    /// Replace every slot's content, keeping the grid.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> BookPage<U> {
        BookPage {
            number: self.number,
            rows: self.rows,
            cols: self.cols,
            source_rows: self.source_rows,
            slots: self
                .slots
                .into_iter()
                .map(|slot| GridSlot {
                    row: slot.row,
                    col: slot.col,
                    source_row: slot.source_row,
                    content: f(slot.content),
                })
                .collect(),
        }
    }

    pub fn slot(&self, row: usize, col: usize) -> Option<&GridSlot<T>> {
        self.slots.iter().find(|s| s.row == row && s.col == col)
    }
}

/// Widest row, i.e. the column count a grid must reserve.
pub fn max_cols(rows: &[BookRow]) -> usize {
    rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
}

/// Split rows into pages of `rows_per_page` grid rows and `max_cols` columns.
pub fn plan(
    rows: &[BookRow],
    max_cols: usize,
    rows_per_page: usize,
) -> Result<Vec<BookPage<BookCell>>, FretError> {
    if rows_per_page == 0 {
        return Err(FretError::InvalidLayout(
            "rows per page must be at least 1".to_string(),
        ));
    }
    if let Some(wide) = rows.iter().find(|r| r.cells.len() > max_cols) {
        return Err(FretError::InvalidLayout(format!(
            "row {} has {} cells but the grid has {} columns",
            wide.index,
            wide.cells.len(),
            max_cols
        )));
    }

    let pages: Vec<BookPage<BookCell>> = rows
        .chunks(rows_per_page)
        .enumerate()
        .map(|(page, chunk)| BookPage {
            number: page + 1,
            rows: rows_per_page,
            cols: max_cols,
            source_rows: chunk.iter().map(|r| r.index).collect(),
            slots: chunk
                .iter()
                .enumerate()
                .flat_map(|(row, source)| {
                    source.cells.iter().enumerate().map(move |(col, cell)| GridSlot {
                        row,
                        col,
                        source_row: source.index,
                        content: cell.clone(),
                    })
                })
                .collect(),
        })
        .collect();

    debug!(rows = rows.len(), pages = pages.len(), "planned book layout");
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rows(count: usize) -> Vec<BookRow> {
        (0..count)
            .map(|index| BookRow {
                index,
                cells: vec![BookCell::new("C", "la"), BookCell::new("G", "la")],
            })
            .collect()
    }

    #[test]
    fn test_twelve_rows_make_three_pages() {
        let pages = plan(&rows(12), 2, 5).unwrap();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].source_rows, vec![0, 1, 2, 3, 4]);
        assert_eq!(pages[1].source_rows, vec![5, 6, 7, 8, 9]);
        assert_eq!(pages[2].source_rows, vec![10, 11]);
        assert_eq!(pages[2].number, 3);
        assert_eq!(pages[2].rows, 5);
        assert_eq!(pages[2].slots.len(), 4);
        assert_eq!(pages[1].slot(0, 1).unwrap().source_row, 5);
    }

    #[test]
    fn test_rest_keeps_its_slot() {
        let input = vec![BookRow {
            index: 5,
            cells: vec![
                BookCell::new("", "でも"),
                BookCell::new("G#m", "今思えば"),
            ],
        }];
        let pages = plan(&input, max_cols(&input), 5).unwrap();
        let rest = pages[0].slot(0, 0).unwrap();
        assert!(rest.content.is_rest());
        assert_eq!(rest.content.lyric, "でも");
        assert_eq!(rest.source_row, 5);
        assert_eq!(pages[0].slot(0, 1).unwrap().content.chord, "G#m");
    }

    #[test]
    fn test_columns_are_not_repacked() {
        let input = vec![
            BookRow {
                index: 0,
                cells: vec![BookCell::new("A", "")],
            },
            BookRow {
                index: 1,
                cells: vec![
                    BookCell::new("B", ""),
                    BookCell::new("C#m", ""),
                    BookCell::new("E", ""),
                ],
            },
        ];
        let pages = plan(&input, 3, 5).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].cols, 3);
        assert!(pages[0].slot(0, 1).is_none());
        assert_eq!(pages[0].slot(1, 2).unwrap().content.chord, "E");
    }

    #[test]
    fn test_plan_is_idempotent() {
        let input = rows(7);
        assert_eq!(plan(&input, 2, 3).unwrap(), plan(&input, 2, 3).unwrap());
    }

    #[test]
    fn test_invalid_layouts() {
        assert!(matches!(
            plan(&rows(3), 2, 0),
            Err(FretError::InvalidLayout(_))
        ));
        assert!(matches!(
            plan(&rows(3), 1, 5),
            Err(FretError::InvalidLayout(_))
        ));
        assert_eq!(plan(&[], 0, 5).unwrap(), Vec::new());
    }

    #[test]
    fn test_map_keeps_grid() {
        let pages = plan(&rows(2), 2, 5).unwrap();
        let mapped = pages[0].clone().map(|cell| cell.chord.len());
        assert_eq!(mapped.slots.len(), 4);
        assert_eq!(mapped.slot(1, 1).unwrap().content, 1);
        assert_eq!(mapped.source_rows, vec![0, 1]);
    }
}
