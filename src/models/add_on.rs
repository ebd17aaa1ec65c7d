//! Optional accessories that can be selected alongside a configuration.

use std::fmt;

/// Identifier of an add-on in the fixed accessory list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddOnId {
    /// Smart Lighting
    Lighting,
    /// Power Hub
    Power,
    /// Wall Organizer
    Organizer,
    /// Premium Cushions
    Cushions,
}

/// An accessory with its display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOn {
    /// Unique identifier
    pub id: AddOnId,
    /// Display name
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Price as shown to the user (e.g. "$49")
    pub price: &'static str,
}

/// The accessory list, in display order.
pub static ADD_ONS: [AddOn; 4] = [
    AddOn {
        id: AddOnId::Lighting,
        name: "Smart Lighting",
        description: "Integrated LED lighting system with remote control",
        price: "$49",
    },
    AddOn {
        id: AddOnId::Power,
        name: "Power Hub",
        description: "Built-in USB and power outlets for your devices",
        price: "$39",
    },
    AddOn {
        id: AddOnId::Organizer,
        name: "Wall Organizer",
        description: "Attachable wall-mounted organization grid",
        price: "$29",
    },
    AddOn {
        id: AddOnId::Cushions,
        name: "Premium Cushions",
        description: "Memory foam cushions with washable covers",
        price: "$59",
    },
];

impl AddOnId {
    /// Lower-case identifier ("lighting", "power", ...).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lighting => "lighting",
            Self::Power => "power",
            Self::Organizer => "organizer",
            Self::Cushions => "cushions",
        }
    }

    /// Returns the add-on this id refers to.
    #[must_use]
    pub fn add_on(&self) -> &'static AddOn {
        match self {
            Self::Lighting => &ADD_ONS[0],
            Self::Power => &ADD_ONS[1],
            Self::Organizer => &ADD_ONS[2],
            Self::Cushions => &ADD_ONS[3],
        }
    }
}

impl fmt::Display for AddOnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
