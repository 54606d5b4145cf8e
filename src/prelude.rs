//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, Coordinate, Facing, Fleet, GameError, HitOutcome, Lane, Match, NameProvider, Numbered,
    Phase, Player, PlayerId, TurnEvent, TurnReport, VesselClass, VesselId,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
