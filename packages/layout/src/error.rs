//! Error types for the layout engine.
//!
//! Layout operations themselves never fail: a command that names a client the
//! layout does not hold is a no-op, and degenerate states (an empty layout,
//! deleting the last stack) are ordinary states. Errors only surface when a
//! layout or a layout group is constructed from invalid parameters, or when a
//! host hands over a command name the engine does not know.
//!
//! # Error Categories
//!
//! - **Configuration errors**: non-positive counts, ratios or slice widths
//! - **Group errors**: a layout group created without any layout
//! - **Command errors**: unknown command names

use thiserror::Error;

/// Errors that can occur while constructing layouts or parsing commands.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A stack layout needs at least one stack.
    #[error("Stack layout needs at least one stack")]
    InvalidStackCount,

    /// A tile layout needs at least one master window.
    #[error("Tile layout needs at least one master window")]
    InvalidMasterCount,

    /// A ratio was zero, negative, not finite, or outside the range the layout accepts.
    #[error("Invalid ratio: {0}")]
    InvalidRatio(f64),

    /// A slice must reserve at least one pixel.
    #[error("Slice width must be greater than zero")]
    InvalidSliceWidth,

    /// A slice needs a client name to match against.
    #[error("Slice needs a non-empty client name")]
    InvalidSliceName,

    /// A layout group was created without layouts.
    #[error("Layout group needs at least one layout")]
    EmptyGroup,

    /// The command name is not known to the engine.
    #[error("Unknown layout command '{0}'")]
    UnknownCommand(String),
}

impl LayoutError {
    /// Returns `true` if this error was raised while validating configuration values.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidStackCount
                | Self::InvalidMasterCount
                | Self::InvalidRatio(_)
                | Self::InvalidSliceWidth
                | Self::InvalidSliceName
                | Self::EmptyGroup
        )
    }
}

/// Errors that can occur while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    #[error(
        "No configuration file found. Expected at ~/.config/tessel/config.jsonc, \
        ~/.config/tessel/config.json, or ~/.tessel.json"
    )]
    NotFound,

    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file contains invalid JSON.
    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration parsed but describes a layout that cannot be built.
    #[error("Invalid layout configuration: {0}")]
    Invalid(#[from] LayoutError),
}
