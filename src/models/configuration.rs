//! Furniture configurations and their descriptive text.

use std::fmt;

/// One of the four arrangements the modular system can be set up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConfigurationKey {
    /// Bed with storage drawers and headboard shelf
    #[default]
    Bed,
    /// Desk with drawer unit, shelving, lamp and monitor
    Desk,
    /// Shelving unit with drawers and compartments
    Storage,
    /// Sofa with cushions and side table
    Lounge,
}

/// Immutable descriptive text for a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigurationDescriptor {
    /// Card title (e.g. "Sleep Configuration")
    pub title: &'static str,
    /// One-sentence description shown under the title
    pub description: &'static str,
    /// Name of the icon representing this configuration
    pub icon: &'static str,
    /// Key benefits, in display order
    pub benefits: &'static [&'static str],
    /// Included modules, in display order
    pub modules: &'static [&'static str],
}

const BED: ConfigurationDescriptor = ConfigurationDescriptor {
    title: "Sleep Configuration",
    description: "Transform the modular system into a comfortable bed with integrated storage",
    icon: "bed",
    benefits: &[
        "Maximizes floor space during the day",
        "Hidden storage under mattress",
        "Folds away when not in use",
    ],
    modules: &[
        "Base Frame",
        "Mattress Support",
        "Storage Drawers",
        "Headboard/Shelf",
    ],
};

const DESK: ConfigurationDescriptor = ConfigurationDescriptor {
    title: "Study Configuration",
    description: "A spacious desk with adjustable height and built-in organization",
    icon: "book-open",
    benefits: &[
        "Adjustable height for ergonomic comfort",
        "Cable management system",
        "Integrated lighting options",
    ],
    modules: &[
        "Base Frame",
        "Desk Surface",
        "Shelf Attachments",
        "Organization Grid",
    ],
};

const STORAGE: ConfigurationDescriptor = ConfigurationDescriptor {
    title: "Storage Configuration",
    description: "Maximize your storage with customizable shelving and compartments",
    icon: "layers",
    benefits: &[
        "Modular compartments for different items",
        "Adjustable shelf heights",
        "Lockable sections for valuables",
    ],
    modules: &[
        "Base Frame",
        "Shelf Units",
        "Drawer Modules",
        "Door Attachments",
    ],
};

const LOUNGE: ConfigurationDescriptor = ConfigurationDescriptor {
    title: "Lounge Configuration",
    description: "Create a comfortable seating area for relaxation or socializing",
    icon: "sofa",
    benefits: &[
        "Converts from bed to seating in minutes",
        "Storage within seating",
        "Configurable for one person or guests",
    ],
    modules: &[
        "Base Frame",
        "Cushion Set",
        "Back Support",
        "Side Table Attachment",
    ],
};

impl ConfigurationKey {
    /// All configurations in tab order.
    pub const ALL: [Self; 4] = [Self::Bed, Self::Desk, Self::Storage, Self::Lounge];

    /// Lower-case identifier ("bed", "desk", ...).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bed => "bed",
            Self::Desk => "desk",
            Self::Storage => "storage",
            Self::Lounge => "lounge",
        }
    }

    /// Short tab label ("Bed", "Desk", ...).
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Bed => "Bed",
            Self::Desk => "Desk",
            Self::Storage => "Storage",
            Self::Lounge => "Lounge",
        }
    }

    /// Returns the descriptor for this configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use moduliving::models::ConfigurationKey;
    ///
    /// assert_eq!(ConfigurationKey::Desk.descriptor().title, "Study Configuration");
    /// ```
    #[must_use]
    pub const fn descriptor(&self) -> &'static ConfigurationDescriptor {
        match self {
            Self::Bed => &BED,
            Self::Desk => &DESK,
            Self::Storage => &STORAGE,
            Self::Lounge => &LOUNGE,
        }
    }

    /// Position of this key in [`Self::ALL`].
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Bed => 0,
            Self::Desk => 1,
            Self::Storage => 2,
            Self::Lounge => 3,
        }
    }

    /// The following configuration in tab order, wrapping around.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The preceding configuration in tab order, wrapping around.
    #[must_use]
    pub const fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ConfigurationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
