//! The assembled tile grid
//!
//! Indexed `[row][col]`, i.e. `rows[y][x]`, with (0, 0) at the top-left.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};

use super::cell::{Cell, TileKind};

/// 4-connected neighbor offsets
pub const CARDINAL: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// 8-connected neighbor offsets
pub const SURROUNDING: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    width: usize,
    height: usize,
    rows: Vec<Vec<Cell>>,
}

impl TileGrid {
    /// Create an all-void grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rows: vec![vec![Cell::void(); width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(&self.rows[y as usize][x as usize])
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(&mut self.rows[y as usize][x as usize])
    }

    /// Kind at a cell; out of bounds reads as void
    pub fn kind(&self, x: i32, y: i32) -> TileKind {
        self.get(x, y).map_or(TileKind::Void, |c| c.kind)
    }

    /// Overwrite a cell; out-of-bounds writes are ignored
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Tile names indexed `[row][col]`
    pub fn tile_names(&self) -> Vec<Vec<&str>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|c| c.tile.as_str()).collect())
            .collect()
    }

    /// Coordinates of every cell of the given kind, row by row
    pub fn positions_of(&self, kind: TileKind) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.rows.iter().enumerate().flat_map(move |(y, row)| {
            row.iter()
                .enumerate()
                .filter(move |(_, c)| c.kind == kind)
                .map(move |(x, _)| (x as i32, y as i32))
        })
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.positions_of(kind).count()
    }

    /// Whether any cardinal neighbor is void (or off the grid)
    pub fn touches_void(&self, x: i32, y: i32) -> bool {
        CARDINAL
            .iter()
            .any(|&(dx, dy)| self.kind(x + dx, y + dy).is_void())
    }

    /// One line per row using `TileKind::symbol`
    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in &self.rows {
            out.extend(row.iter().map(|c| c.kind.symbol()));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_void() {
        let grid = TileGrid::new(4, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.count(TileKind::Void), 12);
        assert_eq!(grid.tile_names()[2][3], "");
    }

    #[test]
    fn test_bounds() {
        let mut grid = TileGrid::new(2, 2);
        assert!(grid.in_bounds(1, 1));
        assert!(!grid.in_bounds(2, 0));
        assert!(!grid.in_bounds(0, -1));
        assert_eq!(grid.kind(-5, 0), TileKind::Void);
        grid.set(9, 9, Cell::floor("floor"));
        assert_eq!(grid.count(TileKind::Floor), 0);
    }

    #[test]
    fn test_row_major_indexing() {
        let mut grid = TileGrid::new(3, 2);
        grid.set(2, 0, Cell::floor("floor"));
        assert_eq!(grid.rows()[0][2].kind, TileKind::Floor);
        assert_eq!(grid.positions_of(TileKind::Floor).collect::<Vec<_>>(), vec![(2, 0)]);
    }

    #[test]
    fn test_touches_void() {
        let mut grid = TileGrid::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                grid.set(x, y, Cell::wall("wall"));
            }
        }
        grid.set(1, 1, Cell::floor("floor"));
        assert!(!grid.touches_void(1, 1));
        // Edge cells look past the grid
        assert!(grid.touches_void(0, 1));
    }

    #[test]
    fn test_render_ascii() {
        let mut grid = TileGrid::new(3, 1);
        grid.set(0, 0, Cell::wall("wall"));
        grid.set(1, 0, Cell::floor("floor"));
        assert_eq!(grid.render_ascii(), "#. \n");
    }
}
