//! ModuLiving Library
//!
//! This library provides the core of the ModuLiving configurator: the
//! furniture catalog, the selection state, the schematic illustration
//! renderer and the terminal user interface that drives them.

// Module declarations
pub mod config;
pub mod constants;
pub mod illustration;
pub mod logging;
pub mod models;
pub mod selection;
pub mod shortcuts;
pub mod tui;
