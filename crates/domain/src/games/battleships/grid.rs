//! Grid and cell primitives for the naval combat game.

use serde::{Deserialize, Serialize};

/// Ship orientation on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// One grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub has_ship: bool,
    pub hit: bool,
    /// Index into the owning fleet's ship list.
    pub ship_id: Option<usize>,
}

/// A square grid of cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: (0..size)
                .map(|_| (0..size).map(|_| Cell::default()).collect())
                .collect(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.cells.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Cells covered by a ship of length `len` anchored at `(row, col)`.
    /// `None` when any part of the footprint leaves the grid.
    pub fn footprint(
        &self,
        len: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Option<Vec<(usize, usize)>> {
        let cells: Vec<(usize, usize)> = (0..len)
            .map(|offset| match orientation {
                Orientation::Horizontal => (row, col + offset),
                Orientation::Vertical => (row + offset, col),
            })
            .collect();
        if cells.iter().all(|&(r, c)| self.in_bounds(r, c)) {
            Some(cells)
        } else {
            None
        }
    }

    /// Placement validity: the footprint stays in bounds and no covered
    /// cell belongs to a ship other than `exclude` (moving a ship onto
    /// its own old footprint is always allowed).
    pub fn can_place(
        &self,
        len: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
        exclude: Option<usize>,
    ) -> bool {
        let Some(cells) = self.footprint(len, row, col, orientation) else {
            return false;
        };
        cells.iter().all(|&(r, c)| {
            match self.cell(r, c).and_then(|cell| cell.ship_id) {
                None => true,
                Some(occupant) => Some(occupant) == exclude,
            }
        })
    }

    /// All orthogonal in-bounds neighbors of a cell.
    pub fn neighbors(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        let mut out = Vec::with_capacity(4);
        if row > 0 {
            out.push((row - 1, col));
        }
        if col > 0 {
            out.push((row, col - 1));
        }
        if row + 1 < self.size {
            out.push((row + 1, col));
        }
        if col + 1 < self.size {
            out.push((row, col + 1));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footprint_rejects_out_of_bounds() {
        let grid = Grid::new(8);
        assert!(grid.footprint(4, 0, 5, Orientation::Horizontal).is_none());
        assert!(grid.footprint(4, 5, 0, Orientation::Vertical).is_none());
        assert!(grid.footprint(4, 0, 4, Orientation::Horizontal).is_some());
    }

    #[test]
    fn can_place_on_empty_grid() {
        let grid = Grid::new(8);
        assert!(grid.can_place(5, 3, 3, Orientation::Horizontal, None));
        assert!(!grid.can_place(5, 3, 4, Orientation::Horizontal, None));
    }

    #[test]
    fn can_place_rejects_other_ships_but_allows_excluded() {
        let mut grid = Grid::new(8);
        for col in 2..5 {
            let cell = grid.cell_mut(4, col).unwrap();
            cell.has_ship = true;
            cell.ship_id = Some(1);
        }
        // Crossing ship 1 is illegal unless ship 1 itself is moving.
        assert!(!grid.can_place(3, 3, 3, Orientation::Vertical, None));
        assert!(!grid.can_place(3, 3, 3, Orientation::Vertical, Some(0)));
        assert!(grid.can_place(3, 3, 3, Orientation::Vertical, Some(1)));
    }

    #[test]
    fn neighbors_clip_at_edges() {
        let grid = Grid::new(8);
        assert_eq!(grid.neighbors(0, 0).len(), 2);
        assert_eq!(grid.neighbors(0, 3).len(), 3);
        assert_eq!(grid.neighbors(4, 4).len(), 4);
        assert_eq!(grid.neighbors(7, 7).len(), 2);
    }
}
