//! Configuration types for the layout engine.
//!
//! Each layout variant has a configuration struct with serde defaults, and
//! [`LayoutConfig`] tags them by `type`:
//!
//! ```jsonc
//! {
//!   "layouts": [
//!     { "type": "stack", "stacks": 2 },
//!     { "type": "tile", "masterWindows": 1, "ratio": 0.618 },
//!     { "type": "ratio-tile", "ratio": 1.618 },
//!     { "type": "slice", "side": "left", "width": 200, "name": "dock",
//!       "fallback": { "type": "max" } },
//!     { "type": "max" }
//!   ]
//! }
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::geometry::Side;
use crate::group::LayoutGroup;
use crate::layout::{
    DEFAULT_RATIO, DEFAULT_RATIO_INCREMENT, DEFAULT_STACKS, GOLDEN_RATIO, Layout, Max, RatioTile,
    Slice, Stack, Tile,
};

/// Configuration of a single layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum LayoutConfig {
    /// The focused client fills the whole region.
    #[default]
    Max,
    /// Side-by-side stacks.
    Stack(StackConfig),
    /// Master column and slave column.
    Tile(TileConfig),
    /// Grid approaching a target aspect ratio.
    #[serde(alias = "ratiotile")]
    RatioTile(RatioTileConfig),
    /// Band reserved for a named client, with a fallback layout for the rest.
    Slice(SliceConfig),
}

impl LayoutConfig {
    /// Builds the layout this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if any value is out of range, including
    /// values inside a slice's fallback.
    pub fn build(&self) -> Result<Box<dyn Layout>, LayoutError> {
        Ok(match self {
            Self::Max => Box::new(Max::new()),
            Self::Stack(config) => Box::new(Stack::new(config.stacks)?),
            Self::Tile(config) => {
                Box::new(Tile::new(config.master_windows, config.ratio, config.ratio_increment)?)
            }
            Self::RatioTile(config) => Box::new(RatioTile::new(config.ratio)?),
            Self::Slice(config) => Box::new(Slice::new(
                config.side,
                config.width,
                config.name.clone(),
                config.fallback.build()?,
            )?),
        })
    }
}

/// Stack layout configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct StackConfig {
    /// Number of stacks.
    /// Default: 2
    pub stacks: usize,
}

impl Default for StackConfig {
    fn default() -> Self { Self { stacks: DEFAULT_STACKS } }
}

/// Tile layout configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct TileConfig {
    /// Number of clients in the master column.
    /// Default: 1
    pub master_windows: usize,
    /// Share of the width given to the master column, between 0 and 1.
    /// Default: 0.618
    pub ratio: f64,
    /// Step used by the `increase_ratio` and `decrease_ratio` commands.
    /// Default: 0.05
    pub ratio_increment: f64,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            master_windows: 1,
            ratio: DEFAULT_RATIO,
            ratio_increment: DEFAULT_RATIO_INCREMENT,
        }
    }
}

/// `RatioTile` layout configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct RatioTileConfig {
    /// Target aspect ratio (width / height) of each cell.
    /// Default: 1.618
    pub ratio: f64,
}

impl Default for RatioTileConfig {
    fn default() -> Self { Self { ratio: GOLDEN_RATIO } }
}

/// Slice layout configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SliceConfig {
    /// Edge the band is reserved along.
    /// Default: left
    #[serde(default)]
    pub side: Side,
    /// Band thickness in pixels.
    /// Default: 200
    #[serde(default = "default_slice_width")]
    pub width: u32,
    /// Name of the client that claims the band.
    pub name: String,
    /// Layout for every other client.
    /// Default: max
    #[serde(default)]
    pub fallback: Box<LayoutConfig>,
}

const fn default_slice_width() -> u32 { 200 }

/// Root configuration of the layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Layouts available to every group, in cycle order. The first one starts active.
    /// Default: a single max layout
    pub layouts: Vec<LayoutConfig>,
}

impl Default for EngineConfig {
    fn default() -> Self { Self { layouts: vec![LayoutConfig::Max] } }
}

impl EngineConfig {
    /// Checks that a group can be built from this configuration.
    ///
    /// # Errors
    ///
    /// Returns the error [`EngineConfig::build_group`] would return.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.layouts.is_empty() {
            return Err(LayoutError::EmptyGroup);
        }
        self.build_layouts().map(|_| ())
    }

    /// Builds every configured layout.
    ///
    /// # Errors
    ///
    /// Returns the first [`LayoutError`] raised by a layout configuration.
    pub fn build_layouts(&self) -> Result<Vec<Box<dyn Layout>>, LayoutError> {
        self.layouts.iter().map(LayoutConfig::build).collect()
    }

    /// Builds a layout group holding every configured layout.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EmptyGroup`] if no layout is configured, or the
    /// first error raised by a layout configuration.
    pub fn build_group(&self, name: impl Into<String>) -> Result<LayoutGroup, LayoutError> {
        LayoutGroup::new(name, self.build_layouts()?)
    }
}
