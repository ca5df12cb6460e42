//! Fleet state: ships on a grid, shot resolution, auto-placement.

use serde::{Deserialize, Serialize};

use crate::random::RandomSource;

use super::grid::{Grid, Orientation};

/// Random `(row, col, orientation)` draws attempted per ship before
/// auto-placement gives up and leaves the prior position.
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// One ship in a fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    pub size: usize,
    pub hits: usize,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub placed: bool,
}

impl Ship {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            hits: 0,
            row: 0,
            col: 0,
            orientation: Orientation::Horizontal,
            placed: false,
        }
    }

    /// Invariant: a ship is sunk exactly when every cell is hit.
    pub fn sunk(&self) -> bool {
        self.hits >= self.size
    }
}

/// Result of firing at one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Miss,
    Hit { ship_id: usize, sunk: bool },
    /// The cell was already resolved; no state changed.
    AlreadyHit,
}

/// A grid plus the ships placed on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fleet {
    grid: Grid,
    ships: Vec<Ship>,
}

impl Fleet {
    pub fn new(grid_size: usize, ship_sizes: &[usize]) -> Self {
        Self {
            grid: Grid::new(grid_size),
            ships: ship_sizes.iter().map(|&size| Ship::new(size)).collect(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, ship_id: usize) -> Option<&Ship> {
        self.ships.get(ship_id)
    }

    pub fn all_placed(&self) -> bool {
        self.ships.iter().all(|ship| ship.placed)
    }

    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::sunk)
    }

    /// Validity check for placing (or moving) one ship.
    pub fn can_place(
        &self,
        ship_id: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> bool {
        let Some(ship) = self.ships.get(ship_id) else {
            return false;
        };
        self.grid
            .can_place(ship.size, row, col, orientation, Some(ship_id))
    }

    /// Place or move a ship. Returns false (and changes nothing) when
    /// the target footprint is invalid.
    pub fn place(
        &mut self,
        ship_id: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> bool {
        if !self.can_place(ship_id, row, col, orientation) {
            return false;
        }
        self.lift(ship_id);
        let Some(ship) = self.ships.get_mut(ship_id) else {
            return false;
        };
        ship.row = row;
        ship.col = col;
        ship.orientation = orientation;
        ship.placed = true;
        let size = ship.size;
        if let Some(cells) = self.grid.footprint(size, row, col, orientation) {
            for (r, c) in cells {
                if let Some(cell) = self.grid.cell_mut(r, c) {
                    cell.has_ship = true;
                    cell.ship_id = Some(ship_id);
                }
            }
        }
        true
    }

    /// Remove a ship's footprint from the grid (the ship keeps its
    /// coordinates but is no longer `placed`).
    fn lift(&mut self, ship_id: usize) {
        let Some(ship) = self.ships.get(ship_id) else {
            return;
        };
        if !ship.placed {
            return;
        }
        let (size, row, col, orientation) = (ship.size, ship.row, ship.col, ship.orientation);
        if let Some(cells) = self.grid.footprint(size, row, col, orientation) {
            for (r, c) in cells {
                if let Some(cell) = self.grid.cell_mut(r, c) {
                    if cell.ship_id == Some(ship_id) {
                        cell.has_ship = false;
                        cell.ship_id = None;
                    }
                }
            }
        }
        if let Some(ship) = self.ships.get_mut(ship_id) {
            ship.placed = false;
        }
    }

    /// Randomly place every ship, up to [`PLACEMENT_ATTEMPTS`] draws
    /// each. A ship whose draws all fail keeps its previous position;
    /// the bound exists only to guarantee termination.
    pub fn auto_place(&mut self, rng: &mut dyn RandomSource) {
        let max = self.grid.size().saturating_sub(1) as i32;
        for ship_id in 0..self.ships.len() {
            for _ in 0..PLACEMENT_ATTEMPTS {
                let row = rng.gen_range(0, max) as usize;
                let col = rng.gen_range(0, max) as usize;
                let orientation = if rng.gen_range(0, 1) == 0 {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                if self.place(ship_id, row, col, orientation) {
                    break;
                }
            }
        }
    }

    /// Resolve a shot at one cell. Re-firing at an already-hit cell is
    /// a no-op so the caller can treat it as an invalid selection.
    /// Coordinates must be in bounds; callers validate against the grid
    /// before firing.
    pub fn fire(&mut self, row: usize, col: usize) -> ShotOutcome {
        debug_assert!(self.grid.in_bounds(row, col), "shot outside the grid");
        let Some(cell) = self.grid.cell_mut(row, col) else {
            return ShotOutcome::AlreadyHit;
        };
        if cell.hit {
            return ShotOutcome::AlreadyHit;
        }
        cell.hit = true;
        match cell.ship_id {
            None => ShotOutcome::Miss,
            Some(ship_id) => {
                let sunk = match self.ships.get_mut(ship_id) {
                    Some(ship) => {
                        ship.hits += 1;
                        ship.sunk()
                    }
                    None => false,
                };
                ShotOutcome::Hit { ship_id, sunk }
            }
        }
    }

    /// Whether a cell has been fired at.
    pub fn is_hit(&self, row: usize, col: usize) -> bool {
        self.grid.cell(row, col).map(|c| c.hit).unwrap_or(false)
    }

    /// Coordinates of every unhit cell still carrying a ship.
    pub fn unhit_ship_cells(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for row in 0..self.grid.size() {
            for col in 0..self.grid.size() {
                if let Some(cell) = self.grid.cell(row, col) {
                    if cell.has_ship && !cell.hit {
                        out.push((row, col));
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::StepRandom;

    fn fleet() -> Fleet {
        Fleet::new(8, &[5, 4, 3, 2])
    }

    #[test]
    fn place_then_move_frees_old_cells() {
        let mut fleet = fleet();
        assert!(fleet.place(0, 0, 0, Orientation::Horizontal));
        assert!(fleet.place(0, 2, 0, Orientation::Horizontal));
        assert!(fleet.grid().cell(0, 0).unwrap().ship_id.is_none());
        assert_eq!(fleet.grid().cell(2, 0).unwrap().ship_id, Some(0));
    }

    #[test]
    fn moving_a_ship_onto_its_own_footprint_is_allowed() {
        let mut fleet = fleet();
        assert!(fleet.place(0, 0, 0, Orientation::Horizontal));
        // Shift one cell right: overlaps four of its own old cells.
        assert!(fleet.place(0, 0, 1, Orientation::Horizontal));
    }

    #[test]
    fn fire_tracks_hits_and_sinks() {
        let mut fleet = fleet();
        assert!(fleet.place(3, 5, 5, Orientation::Horizontal)); // size 2
        assert_eq!(
            fleet.fire(5, 5),
            ShotOutcome::Hit {
                ship_id: 3,
                sunk: false
            }
        );
        assert_eq!(
            fleet.fire(5, 6),
            ShotOutcome::Hit {
                ship_id: 3,
                sunk: true
            }
        );
        assert!(fleet.ship(3).unwrap().sunk());
    }

    #[test]
    fn refiring_a_resolved_cell_changes_nothing() {
        let mut fleet = fleet();
        assert_eq!(fleet.fire(0, 0), ShotOutcome::Miss);
        assert_eq!(fleet.fire(0, 0), ShotOutcome::AlreadyHit);
    }

    #[test]
    fn sunk_invariant_holds_under_fire() {
        let mut fleet = fleet();
        fleet.auto_place(&mut StepRandom::new(vec![0, 0, 0, 2, 0, 0, 4, 0, 0, 6, 0, 0]));
        assert!(fleet.all_placed());
        for row in 0..8 {
            for col in 0..8 {
                fleet.fire(row, col);
            }
        }
        for ship in fleet.ships() {
            assert_eq!(ship.sunk(), ship.hits >= ship.size);
        }
        assert!(fleet.all_sunk());
    }

    #[test]
    #[should_panic(expected = "shot outside the grid")]
    fn firing_off_the_grid_is_a_programming_error() {
        let mut board = fleet();
        board.fire(99, 0);
    }

    #[test]
    fn auto_place_places_every_ship() {
        let mut fleet = fleet();
        // Cycling draws across the grid terminate well within bounds.
        let mut rng = StepRandom::new((0..60).map(|i| i % 8).collect::<Vec<_>>());
        fleet.auto_place(&mut rng);
        assert!(fleet.all_placed());
    }
}
