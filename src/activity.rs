//! Structured activity log shared by both players.
//!
//! Entries are semantic events; turning them into text is up to the caller.

use alloc::vec::Vec;

use crate::cell::Coordinate;
use crate::config::RECENT_LOG_LEN;
use crate::player::PlayerId;
use crate::vessel::VesselId;

/// Something a player is told about after a turn resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnEvent {
    /// One of the player's own vessels was hit and is still afloat.
    AlliedDamaged { vessel: VesselId, at: Coordinate },
    /// The player's shot hit an enemy hull; which hull stays unknown.
    EnemyDamaged { at: Coordinate },
    AlliedSunk { vessel: VesselId },
    EnemySunk { vessel: VesselId },
}

/// An event addressed to one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Notice {
    pub to: PlayerId,
    pub event: TurnEvent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    pub turn: u32,
    pub event: TurnEvent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityLog {
    entries: [Vec<LogEntry>; 2],
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, turn: u32, notice: Notice) {
        self.entries[notice.to.index()].push(LogEntry {
            turn,
            event: notice.event,
        });
    }

    /// Every entry addressed to `player`, oldest first.
    pub fn full(&self, player: PlayerId) -> &[LogEntry] {
        &self.entries[player.index()]
    }

    /// The most recent entries for `player`.
    pub fn recent(&self, player: PlayerId) -> &[LogEntry] {
        let all = self.full(player);
        &all[all.len().saturating_sub(RECENT_LOG_LEN)..]
    }

    pub fn len(&self, player: PlayerId) -> usize {
        self.entries[player.index()].len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Vec::is_empty)
    }
}
