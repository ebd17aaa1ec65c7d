//! Static catalog data for the modular furniture system.
//!
//! This module contains the configuration descriptors, color palettes and
//! accessory list. Everything here is fixed at compile time and never mutated.

pub mod add_on;
pub mod configuration;
pub mod palette;
pub mod rgb;

// Re-export all model types
pub use add_on::{AddOn, AddOnId, ADD_ONS};
pub use configuration::{ConfigurationDescriptor, ConfigurationKey};
pub use palette::{ColorSchemeKey, PaletteDescriptor};
pub use rgb::RgbColor;
