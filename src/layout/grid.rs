//! Grid helpers: template-area parsing and the auto-placement occupancy grid.

use std::collections::HashMap;

/// A resolved slot in the grid. Zero-based cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPlacement {
    pub col: usize,
    pub row: usize,
    pub col_span: usize,
    pub row_span: usize,
}

/// Named regions parsed from a `grid-template-areas` string, plus the track
/// counts implied by the template.
#[derive(Debug, Clone, Default)]
pub struct GridTemplate {
    areas: HashMap<String, GridPlacement>,
    pub cols: usize,
    pub rows: usize,
}

impl GridTemplate {
    /// Parse a template string line by line. Each whitespace-separated token
    /// names the region covering that cell; `.` marks an empty cell. A
    /// region's slot is the bounding box of its token occurrences, so
    /// non-rectangular regions degrade to their bounds.
    pub fn parse(text: &str) -> Self {
        let mut bounds: HashMap<String, (usize, usize, usize, usize)> = HashMap::new();
        let mut cols = 0;
        let mut rows = 0;

        for (row, line) in text.lines().enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() {
                continue;
            }
            rows = rows.max(row + 1);
            cols = cols.max(tokens.len());

            for (col, token) in tokens.iter().enumerate() {
                if *token == "." {
                    continue;
                }
                let entry = bounds
                    .entry(token.to_string())
                    .or_insert((col, col, row, row));
                entry.0 = entry.0.min(col);
                entry.1 = entry.1.max(col);
                entry.2 = entry.2.min(row);
                entry.3 = entry.3.max(row);
            }
        }

        let areas = bounds
            .into_iter()
            .map(|(name, (c0, c1, r0, r1))| {
                (
                    name,
                    GridPlacement {
                        col: c0,
                        row: r0,
                        col_span: c1 - c0 + 1,
                        row_span: r1 - r0 + 1,
                    },
                )
            })
            .collect();

        Self { areas, cols, rows }
    }

    /// Look up the slot for a named region.
    pub fn area(&self, name: &str) -> Option<GridPlacement> {
        self.areas.get(name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

/// Row-major occupancy grid with on-demand row growth.
#[derive(Debug)]
pub struct Occupancy {
    cols: usize,
    cells: Vec<bool>,
}

impl Occupancy {
    pub fn new(cols: usize) -> Self {
        Self { cols: cols.max(1), cells: Vec::new() }
    }

    pub fn rows(&self) -> usize {
        self.cells.len() / self.cols
    }

    fn ensure_rows(&mut self, rows: usize) {
        if self.rows() < rows {
            self.cells.resize(rows * self.cols, false);
        }
    }

    fn is_free(&self, col: usize, row: usize, col_span: usize, row_span: usize) -> bool {
        if col + col_span > self.cols {
            return false;
        }
        for r in row..row + row_span {
            for c in col..col + col_span {
                let idx = r * self.cols + c;
                if idx < self.cells.len() && self.cells[idx] {
                    return false;
                }
            }
        }
        true
    }

    fn occupy(&mut self, col: usize, row: usize, col_span: usize, row_span: usize) {
        self.ensure_rows(row + row_span);
        for r in row..row + row_span {
            for c in col..col + col_span {
                self.cells[r * self.cols + c] = true;
            }
        }
    }

    /// Attempt an explicit placement. Rejects column overflow and collisions
    /// with already-occupied cells; rows grow as needed.
    pub fn try_place(&mut self, placement: GridPlacement) -> bool {
        let GridPlacement { col, row, col_span, row_span } = placement;
        if !self.is_free(col, row, col_span, row_span) {
            return false;
        }
        self.occupy(col, row, col_span, row_span);
        true
    }

    /// Place at the first free slot scanning row-major, up to `scan_rows`
    /// candidate rows. If every candidate collides, falls back to a fresh row
    /// appended below everything placed so far, which cannot collide.
    pub fn auto_place(
        &mut self,
        col_span: usize,
        row_span: usize,
        scan_rows: usize,
    ) -> GridPlacement {
        let col_span = col_span.min(self.cols).max(1);
        let row_span = row_span.max(1);

        for row in 0..scan_rows {
            for col in 0..self.cols {
                if self.is_free(col, row, col_span, row_span) {
                    self.occupy(col, row, col_span, row_span);
                    return GridPlacement { col, row, col_span, row_span };
                }
            }
        }

        let row = self.rows();
        self.occupy(0, row, col_span, row_span);
        GridPlacement { col: 0, row, col_span, row_span }
    }
}
