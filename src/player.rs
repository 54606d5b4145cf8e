use alloc::string::String;
use alloc::vec::Vec;
use rand::Rng;

use crate::board::Board;
use crate::cell::Coordinate;
use crate::common::{GameError, HitOutcome};
use crate::fleet::{Fleet, Lane};
use crate::roster::NameProvider;
use crate::vessel::{Facing, VesselClass, VesselId};

/// Seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// Player number as shown to users, 1 or 2.
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

/// One side of a match: its fleet, its own layout and its targeting view of
/// the opponent.
///
/// Cloning yields a fully independent copy, which is how setup snapshots
/// are taken.
///
/// Incoming fire is applied only by [`Match::resolve_turn`](crate::Match),
/// which keeps the opponent's targeting board in step:
///
/// ```compile_fail
/// use flotilla::{Coordinate, Player, PlayerId};
///
/// let mut player = Player::new(PlayerId::Two, "Picket", 5).unwrap();
/// player.receive_fire(Coordinate::new(0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    forfeit: bool,
    fleet: Fleet,
    personal: Board,
    targeting: Board,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, board_size: u8) -> Result<Self, GameError> {
        Ok(Self {
            id,
            name: name.into(),
            forfeit: false,
            fleet: Fleet::new(),
            personal: Board::new(board_size)?,
            targeting: Board::new(board_size)?,
        })
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_forfeited(&self) -> bool {
        self.forfeit
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Board holding this player's own vessels.
    pub fn personal(&self) -> &Board {
        &self.personal
    }

    /// Board tracking this player's shots at the opponent.
    pub fn targeting(&self) -> &Board {
        &self.targeting
    }

    /// Vessels still afloat on the board.
    pub fn battle_total(&self) -> usize {
        self.fleet.battle_total()
    }

    /// Commission one vessel of `class` into port.
    pub fn commission(
        &mut self,
        class: VesselClass,
        names: &mut dyn NameProvider,
    ) -> Result<VesselId, GameError> {
        self.fleet.add(class, names)
    }

    /// Commission one vessel per entry of `classes`.
    pub fn commission_all(
        &mut self,
        classes: &[VesselClass],
        names: &mut dyn NameProvider,
    ) -> Result<Vec<VesselId>, GameError> {
        let mut ids = Vec::with_capacity(classes.len());
        for &class in classes {
            ids.push(self.fleet.add(class, names)?);
        }
        Ok(ids)
    }

    pub fn deploy(
        &mut self,
        id: VesselId,
        bow: Coordinate,
        facing: Facing,
    ) -> Result<(), GameError> {
        self.fleet.deploy(&mut self.personal, id, bow, facing)
    }

    pub fn undeploy(&mut self, id: VesselId) -> Result<(), GameError> {
        self.fleet.undeploy(&mut self.personal, id)
    }

    /// Deploy every vessel still in port at random free positions.
    ///
    /// Either every vessel is deployed or, on failure, none is.
    pub fn deploy_randomly<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let mut next = self.clone();
        let waiting: Vec<VesselId> = next.fleet.vessels(Lane::InPort).map(|v| v.id()).collect();
        for id in waiting {
            let (bow, facing) = next.personal.random_placement(rng, id.class.capacity())?;
            next.deploy(id, bow, facing)?;
        }
        *self = next;
        Ok(())
    }

    /// Resolve an incoming shot against the personal board.
    pub(crate) fn receive_fire(&mut self, at: Coordinate) -> Result<HitOutcome, GameError> {
        self.personal.mark_hit(at, &mut self.fleet)
    }

    pub(crate) fn targeting_mut(&mut self) -> &mut Board {
        &mut self.targeting
    }

    pub(crate) fn set_forfeit(&mut self) {
        self.forfeit = true;
    }
}
