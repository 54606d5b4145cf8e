//! Match controller: setup snapshots, the order queue, turn resolution and
//! the win check.

use alloc::vec::Vec;

use crate::activity::{ActivityLog, Notice, TurnEvent};
use crate::cell::Coordinate;
use crate::common::{GameError, HitOutcome};
use crate::order::{Order, OrderQueue};
use crate::player::{Player, PlayerId};
use crate::vessel::VesselId;

/// Current stage of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Players are arranging their fleets.
    Setup,
    /// The active player may queue and cancel orders.
    Planning,
    /// Orders are being applied.
    Resolving,
    /// Terminal; carries the winner.
    Finished(PlayerId),
}

/// One resolved order and what it struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub order: Order,
    pub outcome: HitOutcome,
}

/// Everything that happened while resolving one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// Turn number the shots were fired in.
    pub turn: u32,
    pub attacker: PlayerId,
    /// Every order in sequence order, misses included.
    pub shots: Vec<Shot>,
    /// Log-worthy events for both sides; misses produce none.
    pub notices: Vec<Notice>,
    pub winner: Option<PlayerId>,
}

/// Both players after a volley, with what it produced.
struct Volley {
    players: [Player; 2],
    shots: Vec<Shot>,
    notices: Vec<Notice>,
}

#[derive(Debug, Clone)]
pub struct Match {
    players: [Player; 2],
    snapshots: [Player; 2],
    active: PlayerId,
    orders: OrderQueue,
    turn: u32,
    phase: Phase,
    log: ActivityLog,
}

impl Match {
    /// Start a match in setup. Each player's current state becomes their
    /// first snapshot.
    ///
    /// `player1` must sit in seat one and `player2` in seat two, on boards of
    /// the same size.
    pub fn new(player1: Player, player2: Player) -> Result<Self, GameError> {
        for (player, seat) in [(&player1, PlayerId::One), (&player2, PlayerId::Two)] {
            if player.id() != seat {
                return Err(GameError::SeatMismatch(seat));
            }
        }
        let (size1, size2) = (player1.personal().size(), player2.personal().size());
        if size1 != size2 {
            return Err(GameError::BoardMismatch(size1, size2));
        }
        let snapshots = [player1.clone(), player2.clone()];
        Ok(Self {
            players: [player1, player2],
            snapshots,
            active: PlayerId::One,
            orders: OrderQueue::new(),
            turn: 1,
            phase: Phase::Setup,
            log: ActivityLog::new(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Player whose turn it is.
    pub fn active(&self) -> PlayerId {
        self.active
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.active)
    }

    pub fn other_player(&self) -> &Player {
        self.player(self.active.other())
    }

    pub fn orders(&self) -> &OrderQueue {
        &self.orders
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    /// Last confirmed setup of `id`.
    pub fn snapshot(&self, id: PlayerId) -> &Player {
        &self.snapshots[id.index()]
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Finished(winner) => Some(winner),
            _ => None,
        }
    }

    fn require(&self, phase: Phase) -> Result<(), GameError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(GameError::WrongPhase(self.phase))
        }
    }

    // ---- setup ----

    /// Mutable access to a player while fleets are being arranged.
    pub fn setup_mut(&mut self, id: PlayerId) -> Result<&mut Player, GameError> {
        self.require(Phase::Setup)?;
        Ok(&mut self.players[id.index()])
    }

    /// Accept the current arrangement of `id` as its new snapshot.
    pub fn confirm_setup(&mut self, id: PlayerId) -> Result<(), GameError> {
        self.require(Phase::Setup)?;
        self.snapshots[id.index()] = self.players[id.index()].clone();
        Ok(())
    }

    /// Discard unconfirmed edits of `id` by restoring a copy of its snapshot.
    pub fn reset_setup(&mut self, id: PlayerId) -> Result<(), GameError> {
        self.require(Phase::Setup)?;
        self.players[id.index()] = self.snapshots[id.index()].clone();
        Ok(())
    }

    /// Leave setup; player one plans first.
    pub fn begin(&mut self) -> Result<Phase, GameError> {
        self.require(Phase::Setup)?;
        self.active = PlayerId::One;
        self.turn = 1;
        self.phase = Phase::Planning;
        self.settle();
        Ok(self.phase)
    }

    // ---- planning ----

    /// Queue a shot at `target` for the active player.
    pub fn add_order(&mut self, target: Coordinate) -> Result<Order, GameError> {
        self.require(Phase::Planning)?;
        let limit = self.current_player().battle_total();
        let cell = self
            .current_player()
            .targeting()
            .cell(target)
            .ok_or(GameError::OutOfBounds)?;
        if self.orders.len() >= limit {
            return Err(GameError::QueueFull);
        }
        if self.orders.contains(target) {
            return Err(GameError::DuplicateTarget);
        }
        if cell.is_hit() {
            return Err(GameError::AlreadyResolved);
        }
        let order = self.orders.push(target, limit)?;
        self.players[self.active.index()]
            .targeting_mut()
            .mark_targeted(target)?;
        log::debug!("player {} queued order {} at {}", self.active.number(), order.seq, target);
        Ok(order)
    }

    /// Cancel a queued order; later orders are renumbered.
    pub fn remove_order(&mut self, seq: u16) -> Result<Order, GameError> {
        self.require(Phase::Planning)?;
        let order = self.orders.remove(seq)?;
        self.players[self.active.index()]
            .targeting_mut()
            .clear_targeted(order.target)?;
        Ok(order)
    }

    // ---- resolution ----

    /// Fire every queued order at the opponent, then pass the turn.
    ///
    /// The volley is resolved against copies of both players. On error the
    /// match is left exactly as it was, still in `Planning` with the queue
    /// intact.
    pub fn resolve_turn(&mut self) -> Result<TurnReport, GameError> {
        self.require(Phase::Planning)?;
        self.phase = Phase::Resolving;
        let volley = match self.fire_volley() {
            Ok(volley) => volley,
            Err(e) => {
                log::warn!("turn {} resolution failed: {}", self.turn, e);
                self.phase = Phase::Planning;
                return Err(e);
            }
        };

        let turn = self.turn;
        let attacker_id = self.active;
        self.players = volley.players;
        self.orders.take();
        for notice in &volley.notices {
            self.log.record(turn, *notice);
        }

        self.active = attacker_id.other();
        if self.active == PlayerId::One {
            self.turn += 1;
        }
        self.phase = Phase::Planning;
        self.settle();
        log::debug!(
            "turn {} player {}: {} shots, {} notices",
            turn,
            attacker_id.number(),
            volley.shots.len(),
            volley.notices.len()
        );

        Ok(TurnReport {
            turn,
            attacker: attacker_id,
            shots: volley.shots,
            notices: volley.notices,
            winner: self.winner(),
        })
    }

    fn fire_volley(&self) -> Result<Volley, GameError> {
        let attacker_id = self.active;
        let defender_id = attacker_id.other();
        let mut players = self.players.clone();
        let mut shots = Vec::with_capacity(self.orders.len());
        let mut notices = Vec::new();

        let (attacker, defender) = pair_mut(&mut players, attacker_id);
        for &order in self.orders.iter() {
            let at = order.target;
            let outcome = defender.receive_fire(at)?;
            match outcome {
                HitOutcome::Miss => {
                    attacker.targeting_mut().mark_miss(at)?;
                }
                HitOutcome::Damaged(vessel) => {
                    attacker.targeting_mut().mark_damaged(at)?;
                    notices.push(Notice {
                        to: defender_id,
                        event: TurnEvent::AlliedDamaged { vessel, at },
                    });
                    notices.push(Notice {
                        to: attacker_id,
                        event: TurnEvent::EnemyDamaged { at },
                    });
                }
                HitOutcome::Destroyed(vessel) => {
                    let hull = wreck_footprint(defender, vessel)?;
                    attacker.targeting_mut().mark_destroyed(&hull)?;
                    notices.push(Notice {
                        to: defender_id,
                        event: TurnEvent::AlliedSunk { vessel },
                    });
                    notices.push(Notice {
                        to: attacker_id,
                        event: TurnEvent::EnemySunk { vessel },
                    });
                }
            }
            shots.push(Shot { order, outcome });
        }
        Ok(Volley {
            players,
            shots,
            notices,
        })
    }

    // ---- outcome ----

    /// The winner, if the match is decided. Pure.
    pub fn check_winner(&self) -> Option<PlayerId> {
        let [p1, p2] = &self.players;
        if p1.has_forfeited() {
            Some(PlayerId::Two)
        } else if p2.has_forfeited() {
            Some(PlayerId::One)
        } else if p1.battle_total() == 0 {
            Some(PlayerId::Two)
        } else if p2.battle_total() == 0 {
            Some(PlayerId::One)
        } else {
            None
        }
    }

    /// `id` concedes; the match ends in favour of the other player.
    pub fn forfeit(&mut self, id: PlayerId) -> PlayerId {
        if let Phase::Finished(winner) = self.phase {
            return winner;
        }
        self.players[id.index()].set_forfeit();
        log::info!("player {} forfeits", id.number());
        let active = self.active.index();
        for order in self.orders.take() {
            if let Err(e) = self.players[active].targeting_mut().clear_targeted(order.target) {
                log::warn!("order {} at {}: {}", order.seq, order.target, e);
            }
        }
        self.settle();
        self.winner().unwrap_or(id.other())
    }

    /// Move to `Finished` if a winner exists.
    fn settle(&mut self) {
        if let Some(winner) = self.check_winner() {
            log::info!("player {} wins on turn {}", winner.number(), self.turn);
            self.phase = Phase::Finished(winner);
        }
    }
}

/// Cells of a sunk hull, read from its wreck record.
fn wreck_footprint(owner: &Player, vessel: VesselId) -> Result<Vec<Coordinate>, GameError> {
    let (_, sunk) = owner.fleet().find(vessel).ok_or(GameError::VesselNotFound)?;
    let wreck = sunk.wreck().ok_or(GameError::NotPlaced)?;
    owner
        .personal()
        .footprint(wreck.bow, wreck.facing, sunk.capacity())
}

/// Split the two players into (attacker, defender).
fn pair_mut(players: &mut [Player; 2], attacker: PlayerId) -> (&mut Player, &mut Player) {
    let [p1, p2] = players;
    match attacker {
        PlayerId::One => (p1, p2),
        PlayerId::Two => (p2, p1),
    }
}
