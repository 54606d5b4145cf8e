use alloc::vec::Vec;

use crate::common::GameError;
use crate::vessel::VesselClass;

/// Largest supported board side length.
pub const MAX_BOARD_SIZE: u8 = 36;
pub const DEFAULT_BOARD_SIZE: u8 = 36;

/// Labels for columns and rows; index `i` is written as `COORD_LABELS[i]`.
pub const COORD_LABELS: &[u8; MAX_BOARD_SIZE as usize] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// One vessel of each class, in lane order.
pub const STANDARD_FLEET: [VesselClass; 6] = VesselClass::ALL;

/// Number of entries returned by `ActivityLog::recent`.
pub const RECENT_LOG_LEN: usize = 64;

/// Attempts made by `Board::random_placement` before giving up.
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// Runtime settings for a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub board_size: u8,
    pub fleet: Vec<VesselClass>,
}

impl MatchConfig {
    /// Ensure the board size is usable.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidBoardSize(self.board_size));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            fleet: STANDARD_FLEET.to_vec(),
        }
    }
}

/// Label character for a zero-based index, if it is on the alphabet.
pub fn label_for(index: u8) -> Option<char> {
    COORD_LABELS.get(index as usize).map(|&b| b as char)
}

/// Zero-based index for a label character (case-insensitive).
pub fn index_for(label: char) -> Option<u8> {
    let upper = label.to_ascii_uppercase();
    COORD_LABELS
        .iter()
        .position(|&b| b as char == upper)
        .map(|i| i as u8)
}
