//! Targeting orders queued during a turn.

use alloc::vec::Vec;

use crate::cell::Coordinate;
use crate::common::GameError;

/// A pending shot: 1-based sequence number and target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    pub seq: u16,
    pub target: Coordinate,
}

/// Orders of the active player, kept dense and 1-based.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderQueue {
    orders: Vec<Order>,
}

impl OrderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Orders in sequence order.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub fn as_slice(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, seq: u16) -> Option<&Order> {
        seq.checked_sub(1)
            .and_then(|i| self.orders.get(i as usize))
    }

    pub fn contains(&self, target: Coordinate) -> bool {
        self.orders.iter().any(|o| o.target == target)
    }

    /// Append an order for `target`, allowing at most `limit` orders.
    pub fn push(&mut self, target: Coordinate, limit: usize) -> Result<Order, GameError> {
        if self.orders.len() >= limit {
            return Err(GameError::QueueFull);
        }
        if self.contains(target) {
            return Err(GameError::DuplicateTarget);
        }
        let order = Order {
            seq: self.orders.len() as u16 + 1,
            target,
        };
        self.orders.push(order);
        Ok(order)
    }

    /// Remove order `seq`; later orders move down by one.
    pub fn remove(&mut self, seq: u16) -> Result<Order, GameError> {
        if seq == 0 || seq as usize > self.orders.len() {
            return Err(GameError::UnknownOrder);
        }
        let removed = self.orders.remove(seq as usize - 1);
        for order in &mut self.orders[seq as usize - 1..] {
            order.seq -= 1;
        }
        Ok(removed)
    }

    /// Empty the queue, returning its orders in sequence order.
    pub fn take(&mut self) -> Vec<Order> {
        core::mem::take(&mut self.orders)
    }
}
