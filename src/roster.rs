//! Name providers used when commissioning vessels into a fleet.
//!
//! The engine never reads name lists itself; callers inject a
//! [`NameProvider`] that decides pennant numbers and names.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use rand::Rng;

use crate::vessel::VesselClass;

/// Pennant number and name handed out for a new vessel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commission {
    pub pennant: u16,
    pub name: String,
}

/// Capability that assigns identities to newly commissioned vessels.
pub trait NameProvider {
    /// Choose a pennant for `class` that is not in `taken`, and its name.
    /// Returns `None` when no pennant is left.
    fn commission(&mut self, class: VesselClass, taken: &[u16]) -> Option<Commission>;
}

/// Hands out the lowest free pennant with a generated name such as
/// `"Frigate 03"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Numbered;

impl NameProvider for Numbered {
    fn commission(&mut self, class: VesselClass, taken: &[u16]) -> Option<Commission> {
        let pennant = (1..=u16::MAX).find(|p| !taken.contains(p))?;
        Some(Commission {
            pennant,
            name: format!("{} {:02}", class.name(), pennant),
        })
    }
}

/// Per-class name lists. A vessel's pennant is the 1-based line number of
/// its name, drawn at random among the lines not yet in use.
#[derive(Debug, Clone)]
pub struct Roster<R> {
    names: BTreeMap<VesselClass, Vec<String>>,
    rng: R,
}

impl<R: Rng> Roster<R> {
    pub fn new(rng: R) -> Self {
        Self {
            names: BTreeMap::new(),
            rng,
        }
    }

    /// Add names for `class`, appended after any already registered.
    pub fn with_names<I, S>(mut self, class: VesselClass, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names
            .entry(class)
            .or_default()
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Add one name per non-blank line of `text`.
    pub fn with_lines(self, class: VesselClass, text: &str) -> Self {
        let names: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(ToString::to_string)
            .collect();
        self.with_names(class, names)
    }

    /// Number of names registered for `class`.
    pub fn len(&self, class: VesselClass) -> usize {
        self.names.get(&class).map_or(0, Vec::len)
    }
}

impl<R: Rng> NameProvider for Roster<R> {
    fn commission(&mut self, class: VesselClass, taken: &[u16]) -> Option<Commission> {
        let names = self.names.get(&class)?;
        let free: Vec<u16> = (1..=names.len() as u16)
            .filter(|p| !taken.contains(p))
            .collect();
        if free.is_empty() {
            return None;
        }
        let pennant = free[self.rng.random_range(0..free.len())];
        let name = names[pennant as usize - 1].clone();
        Some(Commission { pennant, name })
    }
}
