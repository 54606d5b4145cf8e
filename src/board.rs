//! Square grid of cells with vessel placement, removal and damage marking.
//!
//! Cells live in a row-major arena; neighbours are found by coordinate
//! arithmetic, so a cloned board shares no state with its source.

use alloc::vec::Vec;
use rand::Rng;

use crate::cell::{Cell, CellMark, Coordinate, Segment};
use crate::common::{GameError, HitOutcome};
use crate::config::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, PLACEMENT_ATTEMPTS};
use crate::fleet::Fleet;
use crate::vessel::{Facing, Placement, Vessel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `size`×`size` board.
    pub fn new(size: u8) -> Result<Self, GameError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidBoardSize(size));
        }
        let mut cells = Vec::with_capacity(size as usize * size as usize);
        for row in 0..size {
            for col in 0..size {
                cells.push(Cell::new(Coordinate::new(col, row)));
            }
        }
        Ok(Board { size, cells })
    }

    /// Side length of the board.
    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn contains(&self, at: Coordinate) -> bool {
        at.col < self.size && at.row < self.size
    }

    fn index(&self, at: Coordinate) -> Option<usize> {
        if self.contains(at) {
            Some(at.row as usize * self.size as usize + at.col as usize)
        } else {
            None
        }
    }

    pub fn cell(&self, at: Coordinate) -> Option<&Cell> {
        self.index(at).map(|i| &self.cells[i])
    }

    fn cell_mut(&mut self, at: Coordinate) -> Result<&mut Cell, GameError> {
        let i = self.index(at).ok_or(GameError::OutOfBounds)?;
        Ok(&mut self.cells[i])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Cells of one row, west to east.
    pub fn row(&self, row: u8) -> Option<&[Cell]> {
        if row >= self.size {
            return None;
        }
        let start = row as usize * self.size as usize;
        Some(&self.cells[start..start + self.size as usize])
    }

    /// Adjacent cell in direction `dir`, or `None` at the edge.
    pub fn neighbor(&self, at: Coordinate, dir: Facing) -> Option<Coordinate> {
        if !self.contains(at) {
            return None;
        }
        at.step(dir, self.size)
    }

    /// Number of cells covered by a hull.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// Cells covered by a hull of `length` with its bow at `bow`, bow first.
    pub fn footprint(
        &self,
        bow: Coordinate,
        facing: Facing,
        length: u8,
    ) -> Result<Vec<Coordinate>, GameError> {
        if !self.contains(bow) {
            return Err(GameError::OutOfBounds);
        }
        let mut hull = Vec::with_capacity(length as usize);
        let mut at = bow;
        hull.push(at);
        for _ in 1..length {
            at = self
                .neighbor(at, facing.opposite())
                .ok_or(GameError::OutOfBounds)?;
            hull.push(at);
        }
        Ok(hull)
    }

    /// Validate a placement without committing it; returns the hull cells.
    pub fn check_placement(
        &self,
        length: u8,
        bow: Coordinate,
        facing: Facing,
    ) -> Result<Vec<Coordinate>, GameError> {
        let hull = self.footprint(bow, facing, length)?;
        if hull
            .iter()
            .any(|&at| self.cell(at).is_some_and(Cell::is_occupied))
        {
            return Err(GameError::CellOccupied);
        }
        Ok(hull)
    }

    /// Occupy the hull cells of `vessel` with its bow at `bow`.
    ///
    /// The whole path is validated before any cell is touched.
    pub fn place(
        &mut self,
        vessel: &Vessel,
        bow: Coordinate,
        facing: Facing,
    ) -> Result<Placement, GameError> {
        let hull = self.check_placement(vessel.capacity(), bow, facing)?;
        let last = hull.len() - 1;
        for (i, at) in hull.into_iter().enumerate() {
            let segment = if i == 0 {
                Segment::Bow(facing)
            } else if i == last {
                Segment::Stern(facing)
            } else {
                Segment::Hull(vessel.class())
            };
            self.cell_mut(at)?.occupy(vessel.id(), segment);
        }
        log::debug!("placed {} at {} facing {:?}", vessel.id(), bow, facing);
        Ok(Placement { bow, facing })
    }

    /// Clear every cell occupied by `vessel`.
    pub fn remove(&mut self, vessel: &Vessel) -> Result<(), GameError> {
        let placement = vessel.placement().ok_or(GameError::NotPlaced)?;
        let hull = self.footprint(placement.bow, placement.facing, vessel.capacity())?;
        for at in hull {
            let cell = self.cell_mut(at)?;
            if cell.occupant() == Some(vessel.id()) {
                cell.vacate();
            }
        }
        Ok(())
    }

    /// Resolve a shot against this personal board, damaging `fleet`.
    pub fn mark_hit(&mut self, at: Coordinate, fleet: &mut Fleet) -> Result<HitOutcome, GameError> {
        let cell = self.cell(at).ok_or(GameError::OutOfBounds)?;
        if cell.is_hit() {
            return Err(GameError::AlreadyResolved);
        }
        let Some(id) = cell.occupant() else {
            self.cell_mut(at)?.strike(CellMark::Miss);
            return Ok(HitOutcome::Miss);
        };
        let placement = fleet
            .deployed(id)
            .and_then(Vessel::placement)
            .ok_or(GameError::VesselNotFound)?;
        let hull = self.footprint(placement.bow, placement.facing, id.class.capacity())?;

        if fleet.damage(id)? == 0 {
            self.mark_destroyed(&hull)?;
            Ok(HitOutcome::Destroyed(id))
        } else {
            self.cell_mut(at)?.strike(CellMark::Damaged);
            Ok(HitOutcome::Damaged(id))
        }
    }

    pub fn mark_miss(&mut self, at: Coordinate) -> Result<(), GameError> {
        self.cell_mut(at)?.strike(CellMark::Miss);
        Ok(())
    }

    pub fn mark_damaged(&mut self, at: Coordinate) -> Result<(), GameError> {
        self.cell_mut(at)?.strike(CellMark::Damaged);
        Ok(())
    }

    /// Mark every cell of a sunk hull destroyed.
    pub fn mark_destroyed(&mut self, hull: &[Coordinate]) -> Result<(), GameError> {
        if hull.iter().any(|&at| !self.contains(at)) {
            return Err(GameError::OutOfBounds);
        }
        for &at in hull {
            self.cell_mut(at)?.strike(CellMark::Destroyed);
        }
        Ok(())
    }

    /// Flag a cell as the target of a pending order.
    pub fn mark_targeted(&mut self, at: Coordinate) -> Result<(), GameError> {
        self.cell_mut(at)?.set_targeted(true);
        Ok(())
    }

    pub fn clear_targeted(&mut self, at: Coordinate) -> Result<(), GameError> {
        self.cell_mut(at)?.set_targeted(false);
        Ok(())
    }

    /// Returns a random free `(bow, facing)` for a hull of `length`.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        length: u8,
    ) -> Result<(Coordinate, Facing), GameError> {
        let mut attempts = 0;
        while attempts < PLACEMENT_ATTEMPTS {
            attempts += 1;
            let facing = Facing::ALL[rng.random_range(0..Facing::ALL.len())];
            let bow = Coordinate::new(
                rng.random_range(0..self.size),
                rng.random_range(0..self.size),
            );
            if self.check_placement(length, bow, facing).is_ok() {
                return Ok((bow, facing));
            }
        }
        Err(GameError::NoRoom)
    }
}

impl Default for Board {
    fn default() -> Self {
        let size = DEFAULT_BOARD_SIZE as usize;
        let cells = (0..size * size)
            .map(|i| Cell::new(Coordinate::new((i % size) as u8, (i / size) as u8)))
            .collect();
        Board {
            size: DEFAULT_BOARD_SIZE,
            cells,
        }
    }
}
