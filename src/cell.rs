//! Board coordinates and the per-cell state kept by a `Board`.

use core::fmt;

use crate::common::GameError;
use crate::config::{index_for, label_for};
use crate::vessel::{Facing, VesselClass, VesselId};

/// A zero-based board position. Row 0 is the northern edge, column 0 the
/// western edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub col: u8,
    pub row: u8,
}

impl Coordinate {
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Build a coordinate from its column and row labels, e.g. `('C', 'H')`.
    pub fn parse(col: char, row: char) -> Result<Self, GameError> {
        let c = index_for(col).ok_or(GameError::InvalidLabel(col))?;
        let r = index_for(row).ok_or(GameError::InvalidLabel(row))?;
        Ok(Self::new(c, r))
    }

    /// Column and row labels.
    pub fn labels(&self) -> (char, char) {
        (
            label_for(self.col).unwrap_or('?'),
            label_for(self.row).unwrap_or('?'),
        )
    }

    /// Neighbouring coordinate one step towards `dir` on a `size`×`size` grid.
    pub fn step(self, dir: Facing, size: u8) -> Option<Coordinate> {
        let (col, row) = match dir {
            Facing::North => (Some(self.col), self.row.checked_sub(1)),
            Facing::South => (Some(self.col), self.row.checked_add(1)),
            Facing::East => (self.col.checked_add(1), Some(self.row)),
            Facing::West => (self.col.checked_sub(1), Some(self.row)),
        };
        match (col, row) {
            (Some(c), Some(r)) if c < size && r < size => Some(Coordinate::new(c, r)),
            _ => None,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (c, r) = self.labels();
        write!(f, "({}, {})", c, r)
    }
}

/// Display state of a cell, mapped to styling by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellMark {
    #[default]
    Empty,
    Targeted,
    Miss,
    Damaged,
    Destroyed,
}

/// Which part of a hull occupies a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Bow(Facing),
    Hull(VesselClass),
    Stern(Facing),
}

/// One board position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    coord: Coordinate,
    occupant: Option<VesselId>,
    segment: Option<Segment>,
    hit: bool,
    mark: CellMark,
}

impl Cell {
    pub(crate) fn new(coord: Coordinate) -> Self {
        Self {
            coord,
            occupant: None,
            segment: None,
            hit: false,
            mark: CellMark::Empty,
        }
    }

    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Vessel occupying the cell, if any.
    pub fn occupant(&self) -> Option<VesselId> {
        self.occupant
    }

    pub fn segment(&self) -> Option<Segment> {
        self.segment
    }

    /// `true` once the cell has been fired upon.
    pub fn is_hit(&self) -> bool {
        self.hit
    }

    pub fn mark(&self) -> CellMark {
        self.mark
    }

    pub(crate) fn occupy(&mut self, vessel: VesselId, segment: Segment) {
        self.occupant = Some(vessel);
        self.segment = Some(segment);
    }

    pub(crate) fn vacate(&mut self) {
        self.occupant = None;
        self.segment = None;
        self.mark = CellMark::Empty;
    }

    /// Record a shot landing here with the resulting mark.
    pub(crate) fn strike(&mut self, mark: CellMark) {
        self.hit = true;
        self.mark = mark;
    }

    pub(crate) fn set_targeted(&mut self, targeted: bool) {
        if self.hit {
            return;
        }
        if targeted {
            self.mark = CellMark::Targeted;
        } else if self.mark == CellMark::Targeted {
            self.mark = CellMark::Empty;
        }
    }
}
