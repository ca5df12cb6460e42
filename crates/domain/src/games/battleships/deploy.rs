//! Deployment phase: interactive ship placement before combat.
//!
//! Short-lived state discarded once placement is confirmed; the fleet
//! transfers into the battle unchanged.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::random::RandomSource;

use super::fleet::Fleet;
use super::grid::Orientation;

/// Hover feedback for the cell under the cursor, recomputed on every
/// hover without mutating the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementPreview {
    pub cells: Vec<(usize, usize)>,
    pub valid: bool,
}

/// Interactive placement state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    fleet: Fleet,
    selected: Option<usize>,
    orientation: Orientation,
}

impl Deployment {
    pub fn new(grid_size: usize, ship_sizes: &[usize]) -> Self {
        Self {
            fleet: Fleet::new(grid_size, ship_sizes),
            selected: None,
            orientation: Orientation::Horizontal,
        }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Select a ship; adopts its current orientation when it is already
    /// on the grid.
    pub fn select(&mut self, ship_id: usize) -> Result<(), DomainError> {
        let ship = self
            .fleet
            .ship(ship_id)
            .ok_or_else(|| DomainError::validation(format!("no ship {ship_id}")))?;
        if ship.placed {
            self.orientation = ship.orientation;
        }
        self.selected = Some(ship_id);
        Ok(())
    }

    /// Click on open water: attempt to move the selected ship there.
    /// Returns whether the move happened; an invalid target leaves the
    /// grid untouched.
    pub fn try_place(&mut self, row: usize, col: usize) -> bool {
        let Some(ship_id) = self.selected else {
            return false;
        };
        self.fleet.place(ship_id, row, col, self.orientation)
    }

    /// Footprint preview for the selected ship hovered at a cell.
    pub fn hover_preview(&self, row: usize, col: usize) -> Option<PlacementPreview> {
        let ship_id = self.selected?;
        let ship = self.fleet.ship(ship_id)?;
        let valid = self.fleet.can_place(ship_id, row, col, self.orientation);
        let cells = (0..ship.size)
            .map(|offset| match self.orientation {
                Orientation::Horizontal => (row, col + offset),
                Orientation::Vertical => (row + offset, col),
            })
            .filter(|&(r, c)| self.fleet.grid().in_bounds(r, c))
            .collect();
        Some(PlacementPreview { cells, valid })
    }

    /// Toggle orientation. A placed ship rotates in place only when the
    /// rotated footprint is valid; otherwise it stays as-is and only
    /// the cursor orientation flips for unplaced ships.
    pub fn rotate(&mut self) {
        let next = self.orientation.toggled();
        if let Some(ship_id) = self.selected {
            if let Some(ship) = self.fleet.ship(ship_id) {
                if ship.placed {
                    let (row, col) = (ship.row, ship.col);
                    if self.fleet.place(ship_id, row, col, next) {
                        self.orientation = next;
                    }
                    return;
                }
            }
        }
        self.orientation = next;
    }

    /// Randomly place the whole fleet.
    pub fn auto_place(&mut self, rng: &mut dyn RandomSource) {
        self.fleet.auto_place(rng);
    }

    /// Confirm placement, consuming the deployment. Blocked until every
    /// ship reports placed.
    pub fn confirm(self) -> Result<Fleet, DomainError> {
        if !self.fleet.all_placed() {
            return Err(DomainError::transition(
                "cannot confirm deployment with unplaced ships",
            ));
        }
        Ok(self.fleet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::StepRandom;

    fn deployment() -> Deployment {
        Deployment::new(8, &[5, 4, 3, 2])
    }

    #[test]
    fn selecting_a_placed_ship_adopts_its_orientation() {
        let mut deploy = deployment();
        deploy.select(0).unwrap();
        deploy.rotate(); // cursor now vertical
        assert!(deploy.try_place(0, 0));
        deploy.select(1).unwrap();
        assert_eq!(deploy.orientation(), Orientation::Vertical); // unchanged, ship 1 unplaced
        deploy.select(0).unwrap();
        assert_eq!(deploy.orientation(), Orientation::Vertical);
    }

    #[test]
    fn rotate_in_place_rejected_when_invalid() {
        let mut deploy = deployment();
        deploy.select(0).unwrap();
        assert!(deploy.try_place(7, 0)); // horizontal along the bottom edge
        deploy.rotate(); // vertical would leave the grid
        let ship = deploy.fleet().ship(0).unwrap();
        assert_eq!(ship.orientation, Orientation::Horizontal);
        assert_eq!((ship.row, ship.col), (7, 0));
    }

    #[test]
    fn hover_preview_marks_invalid_footprints() {
        let mut deploy = deployment();
        deploy.select(0).unwrap();
        assert!(deploy.try_place(0, 0));
        deploy.select(1).unwrap();
        let preview = deploy.hover_preview(0, 2).unwrap();
        assert!(!preview.valid); // crosses ship 0
        let preview = deploy.hover_preview(3, 2).unwrap();
        assert!(preview.valid);
        assert_eq!(preview.cells.len(), 4);
    }

    #[test]
    fn hover_preview_does_not_mutate() {
        let mut deploy = deployment();
        deploy.select(0).unwrap();
        let before = deploy.fleet().clone();
        let _ = deploy.hover_preview(4, 4);
        assert_eq!(deploy.fleet(), &before);
    }

    #[test]
    fn confirm_blocked_until_all_placed() {
        let deploy = deployment();
        assert!(deploy.confirm().is_err());

        let mut deploy = deployment();
        deploy.auto_place(&mut StepRandom::new(
            (0..60).map(|i| i % 8).collect::<Vec<_>>(),
        ));
        assert!(deploy.confirm().is_ok());
    }
}
