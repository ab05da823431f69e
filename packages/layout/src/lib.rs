//! Tiling layout engine.
//!
//! This crate arranges client windows inside a screen region. It never talks
//! to a window system: a host adds and removes clients, runs commands, and
//! asks for placements, which it then applies itself.
//!
//! ```text
//! host events ──► LayoutGroup ──► active Layout ──► [(ClientId, Rect)]
//!                     │
//!                     └── every Layout receives add / remove
//! ```
//!
//! The main entry points are:
//!
//! - [`Layout`]: the contract shared by [`Max`], [`Stack`], [`Tile`],
//!   [`RatioTile`] and [`Slice`]
//! - [`LayoutGroup`]: a cycle of layouts sharing one set of clients
//! - [`EngineConfig`]: JSONC configuration that builds groups

pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod geometry;
pub mod group;
pub mod info;
pub mod layout;
pub mod schema;

pub use client::{Client, ClientId};
pub use command::LayoutCommand;
pub use config::{
    EngineConfig, LayoutConfig, RatioTileConfig, SliceConfig, StackConfig, TileConfig,
    config_paths, load_config, load_config_from_path, load_or_default, parse_config,
};
pub use error::{ConfigError, LayoutError};
pub use geometry::{Rect, Side};
pub use group::LayoutGroup;
pub use info::{GroupInfo, LayoutDetails, LayoutInfo, StackInfo};
pub use layout::{Layout, LayoutResult, Max, RatioTile, Slice, Stack, Tile};
pub use schema::{generate_schema, generate_schema_json};
