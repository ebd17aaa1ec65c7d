//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "ModuLiving";

/// Directory name under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "ModuLiving";
