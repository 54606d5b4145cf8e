//! Common types for the engine: the error taxonomy and hit outcomes.

use crate::game::Phase;
use crate::player::PlayerId;
use crate::vessel::{VesselClass, VesselId};

/// Result of resolving a single shot against a personal board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum HitOutcome {
    /// Shot landed in open water.
    Miss,
    /// Shot damaged a hull that is still afloat.
    Damaged(VesselId),
    /// Shot took the last hit point of a hull.
    Destroyed(VesselId),
}

impl HitOutcome {
    /// The vessel struck by the shot, if any.
    pub fn vessel(&self) -> Option<VesselId> {
        match self {
            HitOutcome::Miss => None,
            HitOutcome::Damaged(id) | HitOutcome::Destroyed(id) => Some(*id),
        }
    }
}

/// Errors returned by board, fleet, order and match operations.
///
/// Every variant is recoverable: the operation that produced it left state
/// untouched and the caller may retry with different input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate, or part of a hull, falls outside the grid.
    OutOfBounds,
    /// A hull would overlap a cell that is already occupied.
    CellOccupied,
    /// Vessel has no placement record on the board.
    NotPlaced,
    /// No vessel with that class and pennant in the expected lane.
    VesselNotFound,
    /// One order per deployed hull has already been queued.
    QueueFull,
    /// An order for that coordinate is already queued.
    DuplicateTarget,
    /// Target cell has already been fired upon.
    AlreadyResolved,
    /// No queued order carries that sequence number.
    UnknownOrder,
    /// Board side length is not in `1..=36`.
    InvalidBoardSize(u8),
    /// Coordinate label is not part of the board alphabet.
    InvalidLabel(char),
    /// Name provider has no free pennant left for the class.
    RosterExhausted(VesselClass),
    /// Random placement could not find a free position.
    NoRoom,
    /// Operation is not permitted in the current match phase.
    WrongPhase(Phase),
    /// The player handed in for this seat carries another id.
    SeatMismatch(PlayerId),
    /// The two players' boards differ in size.
    BoardMismatch(u8, u8),
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::OutOfBounds => write!(f, "Coordinate is outside the grid"),
            GameError::CellOccupied => write!(f, "Cell is already occupied by another vessel"),
            GameError::NotPlaced => write!(f, "Vessel is not placed on the board"),
            GameError::VesselNotFound => write!(f, "Vessel not found in fleet"),
            GameError::QueueFull => write!(f, "Maximum number of orders already queued"),
            GameError::DuplicateTarget => write!(f, "Coordinate is already targeted by an order"),
            GameError::AlreadyResolved => write!(f, "Coordinate has already been fired upon"),
            GameError::UnknownOrder => write!(f, "No order with that number"),
            GameError::InvalidBoardSize(n) => {
                write!(f, "Board size {} is invalid, must be between 1 and 36", n)
            }
            GameError::InvalidLabel(c) => write!(f, "'{}' is not a valid coordinate label", c),
            GameError::RosterExhausted(class) => {
                write!(f, "No pennant numbers left for class {}", class.abbrev())
            }
            GameError::NoRoom => write!(f, "Unable to find room for vessel"),
            GameError::WrongPhase(phase) => {
                write!(f, "Operation not allowed while match is {:?}", phase)
            }
            GameError::SeatMismatch(seat) => {
                write!(f, "Seat {} needs a player with that id", seat.number())
            }
            GameError::BoardMismatch(a, b) => {
                write!(f, "Boards of {} and {} cells per side cannot face each other", a, b)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
