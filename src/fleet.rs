//! A player's vessels, partitioned into in-port, deployed and sunk lanes.
//!
//! Every vessel lives in exactly one lane. Transitions move a vessel between
//! lanes and never copy it:
//!
//! - `add` commissions a vessel into port
//! - `deploy` / `undeploy` move it between port and the board
//! - `sink` retires a deployed vessel permanently

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::board::Board;
use crate::cell::Coordinate;
use crate::common::GameError;
use crate::roster::NameProvider;
use crate::vessel::{Facing, Vessel, VesselClass, VesselId};

/// The three stages of a vessel's life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    InPort,
    Deployed,
    Sunk,
}

type Lanes = BTreeMap<VesselClass, Vec<Vessel>>;

fn empty_lanes() -> Lanes {
    VesselClass::ALL.iter().map(|&c| (c, Vec::new())).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    in_port: Lanes,
    deployed: Lanes,
    sunk: Lanes,
}

impl Fleet {
    pub fn new() -> Self {
        Self {
            in_port: empty_lanes(),
            deployed: empty_lanes(),
            sunk: empty_lanes(),
        }
    }

    fn lanes(&self, lane: Lane) -> &Lanes {
        match lane {
            Lane::InPort => &self.in_port,
            Lane::Deployed => &self.deployed,
            Lane::Sunk => &self.sunk,
        }
    }

    /// Vessels of `class` in `lane`.
    pub fn lane(&self, lane: Lane, class: VesselClass) -> &[Vessel] {
        self.lanes(lane)
            .get(&class)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All vessels in `lane`, grouped by class in lane order.
    pub fn vessels(&self, lane: Lane) -> impl Iterator<Item = &Vessel> {
        self.lanes(lane).values().flatten()
    }

    /// Number of vessels currently deployed on the board.
    pub fn battle_total(&self) -> usize {
        self.deployed.values().map(Vec::len).sum()
    }

    pub fn in_port_total(&self) -> usize {
        self.in_port.values().map(Vec::len).sum()
    }

    pub fn sunk_total(&self) -> usize {
        self.sunk.values().map(Vec::len).sum()
    }

    /// Number of vessels ever commissioned.
    pub fn total(&self) -> usize {
        self.in_port_total() + self.battle_total() + self.sunk_total()
    }

    /// Locate a vessel and report which lane holds it.
    pub fn find(&self, id: VesselId) -> Option<(Lane, &Vessel)> {
        [Lane::InPort, Lane::Deployed, Lane::Sunk]
            .into_iter()
            .find_map(|lane| {
                self.lane(lane, id.class)
                    .iter()
                    .find(|v| v.pennant() == id.pennant)
                    .map(|v| (lane, v))
            })
    }

    pub fn lane_of(&self, id: VesselId) -> Option<Lane> {
        self.find(id).map(|(lane, _)| lane)
    }

    /// A deployed vessel by id.
    pub fn deployed(&self, id: VesselId) -> Option<&Vessel> {
        self.lane(Lane::Deployed, id.class)
            .iter()
            .find(|v| v.pennant() == id.pennant)
    }

    /// Pennants of `class` used by any vessel in any lane.
    pub fn pennants(&self, class: VesselClass) -> Vec<u16> {
        [Lane::InPort, Lane::Deployed, Lane::Sunk]
            .into_iter()
            .flat_map(|lane| self.lane(lane, class).iter().map(Vessel::pennant))
            .collect()
    }

    /// Commission a new vessel of `class` into port.
    pub fn add(
        &mut self,
        class: VesselClass,
        names: &mut dyn NameProvider,
    ) -> Result<VesselId, GameError> {
        let taken = self.pennants(class);
        let commission = names
            .commission(class, &taken)
            .filter(|c| !taken.contains(&c.pennant))
            .ok_or(GameError::RosterExhausted(class))?;
        let vessel = Vessel::new(class, commission.pennant, commission.name);
        let id = vessel.id();
        lane_mut(&mut self.in_port, class).push(vessel);
        Ok(id)
    }

    /// Place an in-port vessel on `board` and move it to the deployed lane.
    pub fn deploy(
        &mut self,
        board: &mut Board,
        id: VesselId,
        bow: Coordinate,
        facing: Facing,
    ) -> Result<(), GameError> {
        let port = lane_mut(&mut self.in_port, id.class);
        let pos = position(port, id).ok_or(GameError::VesselNotFound)?;
        let placement = board.place(&port[pos], bow, facing)?;
        let mut vessel = port.remove(pos);
        vessel.set_placement(Some(placement));
        lane_mut(&mut self.deployed, id.class).push(vessel);
        Ok(())
    }

    /// Lift a deployed vessel off `board` and return it to port.
    pub fn undeploy(&mut self, board: &mut Board, id: VesselId) -> Result<(), GameError> {
        let deployed = lane_mut(&mut self.deployed, id.class);
        let pos = position(deployed, id).ok_or(GameError::VesselNotFound)?;
        board.remove(&deployed[pos])?;
        let mut vessel = deployed.remove(pos);
        vessel.set_placement(None);
        lane_mut(&mut self.in_port, id.class).push(vessel);
        Ok(())
    }

    /// Apply one hit to a deployed vessel and return its remaining hit points.
    /// A vessel reduced to zero is sunk.
    pub fn damage(&mut self, id: VesselId) -> Result<u8, GameError> {
        let deployed = lane_mut(&mut self.deployed, id.class);
        let pos = position(deployed, id).ok_or(GameError::VesselNotFound)?;
        let hp = deployed[pos].take_hit();
        if hp == 0 {
            self.sink(id)?;
        }
        Ok(hp)
    }

    /// Retire a deployed vessel to the sunk lane.
    pub fn sink(&mut self, id: VesselId) -> Result<(), GameError> {
        let deployed = lane_mut(&mut self.deployed, id.class);
        let pos = position(deployed, id).ok_or(GameError::VesselNotFound)?;
        let mut vessel = deployed.remove(pos);
        vessel.scuttle();
        lane_mut(&mut self.sunk, id.class).push(vessel);
        log::info!("{} sunk", id);
        Ok(())
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}

fn lane_mut(lanes: &mut Lanes, class: VesselClass) -> &mut Vec<Vessel> {
    lanes.entry(class).or_default()
}

fn position(lane: &[Vessel], id: VesselId) -> Option<usize> {
    lane.iter().position(|v| v.pennant() == id.pennant)
}
