//! Vessel classes, facings and the per-hull state tracked by a fleet.

use alloc::string::String;
use core::fmt;

use crate::cell::Coordinate;

/// Direction the bow of a vessel points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    North,
    South,
    East,
    West,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::North, Facing::South, Facing::East, Facing::West];

    /// The reverse direction; hulls extend this way from the bow.
    pub const fn opposite(self) -> Facing {
        match self {
            Facing::North => Facing::South,
            Facing::South => Facing::North,
            Facing::East => Facing::West,
            Facing::West => Facing::East,
        }
    }

    /// Parse `N`, `S`, `E` or `W` (case-insensitive).
    pub fn from_char(c: char) -> Option<Facing> {
        match c.to_ascii_uppercase() {
            'N' => Some(Facing::North),
            'S' => Some(Facing::South),
            'E' => Some(Facing::East),
            'W' => Some(Facing::West),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Facing::North => 'N',
            Facing::South => 'S',
            Facing::East => 'E',
            Facing::West => 'W',
        }
    }
}

/// The six vessel classes and their fixed hull lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum VesselClass {
    Battleship,
    Cruiser,
    Destroyer,
    Frigate,
    Submarine,
    Carrier,
}

impl VesselClass {
    /// All classes in lane order.
    pub const ALL: [VesselClass; 6] = [
        VesselClass::Battleship,
        VesselClass::Cruiser,
        VesselClass::Destroyer,
        VesselClass::Frigate,
        VesselClass::Submarine,
        VesselClass::Carrier,
    ];

    /// Hit points of an undamaged hull, which is also its length in cells.
    pub const fn capacity(self) -> u8 {
        match self {
            VesselClass::Battleship => 6,
            VesselClass::Cruiser => 5,
            VesselClass::Destroyer => 4,
            VesselClass::Frigate => 3,
            VesselClass::Submarine => 4,
            VesselClass::Carrier => 6,
        }
    }

    /// Two-letter hull classification symbol.
    pub const fn abbrev(self) -> &'static str {
        match self {
            VesselClass::Battleship => "BB",
            VesselClass::Cruiser => "CC",
            VesselClass::Destroyer => "DD",
            VesselClass::Frigate => "FF",
            VesselClass::Submarine => "SM",
            VesselClass::Carrier => "CV",
        }
    }

    /// Glyph used for the midsection of the hull.
    pub const fn symbol(self) -> char {
        match self {
            VesselClass::Battleship => 'B',
            VesselClass::Cruiser => 'C',
            VesselClass::Destroyer => 'D',
            VesselClass::Frigate => 'F',
            VesselClass::Submarine => 'S',
            VesselClass::Carrier => 'V',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            VesselClass::Battleship => "Battleship",
            VesselClass::Cruiser => "Cruiser",
            VesselClass::Destroyer => "Destroyer",
            VesselClass::Frigate => "Frigate",
            VesselClass::Submarine => "Submarine",
            VesselClass::Carrier => "Carrier",
        }
    }

    /// Look up a class by its abbreviation (case-insensitive).
    pub fn from_abbrev(abbrev: &str) -> Option<VesselClass> {
        VesselClass::ALL
            .iter()
            .copied()
            .find(|c| c.abbrev().eq_ignore_ascii_case(abbrev.trim()))
    }
}

/// Identity of a vessel within one fleet: class plus pennant number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct VesselId {
    pub class: VesselClass,
    pub pennant: u16,
}

impl VesselId {
    pub const fn new(class: VesselClass, pennant: u16) -> Self {
        Self { class, pennant }
    }
}

impl fmt::Display for VesselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {:02}", self.class.abbrev(), self.pennant)
    }
}

/// Where a deployed vessel sits: its bow cell and the way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub bow: Coordinate,
    pub facing: Facing,
}

/// Condition of a hull, for renderers that colour vessel rosters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    Intact,
    Damaged,
    Critical,
    Sunk,
}

/// A single vessel and its combat state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vessel {
    id: VesselId,
    name: String,
    hp: u8,
    hits_received: u8,
    hit: bool,
    sunk: bool,
    placement: Option<Placement>,
    wreck: Option<Placement>,
}

impl Vessel {
    /// Commission an undamaged vessel, not yet deployed.
    pub fn new(class: VesselClass, pennant: u16, name: impl Into<String>) -> Self {
        Self {
            id: VesselId::new(class, pennant),
            name: name.into(),
            hp: class.capacity(),
            hits_received: 0,
            hit: false,
            sunk: false,
            placement: None,
            wreck: None,
        }
    }

    pub fn id(&self) -> VesselId {
        self.id
    }

    pub fn class(&self) -> VesselClass {
        self.id.class
    }

    pub fn pennant(&self) -> u16 {
        self.id.pennant
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hull length, taken from the class.
    pub fn capacity(&self) -> u8 {
        self.id.class.capacity()
    }

    /// Remaining hit points.
    pub fn hp(&self) -> u8 {
        self.hp
    }

    pub fn hits_received(&self) -> u8 {
        self.hits_received
    }

    /// `true` once the vessel has taken its first hit.
    pub fn is_hit(&self) -> bool {
        self.hit
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Current position; `Some` exactly while the vessel is deployed.
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Position the vessel held when it went down.
    pub fn wreck(&self) -> Option<Placement> {
        self.wreck
    }

    pub fn health(&self) -> Health {
        if self.sunk {
            Health::Sunk
        } else if self.hp == self.capacity() {
            Health::Intact
        } else if self.hp > 1 {
            Health::Damaged
        } else {
            Health::Critical
        }
    }

    pub(crate) fn set_placement(&mut self, placement: Option<Placement>) {
        self.placement = placement;
    }

    /// Apply one hit and return the hit points left.
    pub(crate) fn take_hit(&mut self) -> u8 {
        self.hp = self.hp.saturating_sub(1);
        self.hits_received = self.hits_received.saturating_add(1);
        self.hit = true;
        self.hp
    }

    pub(crate) fn scuttle(&mut self) {
        self.hp = 0;
        self.sunk = true;
        self.wreck = self.placement.take();
    }
}
