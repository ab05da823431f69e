//! Layout algorithms for the tiling engine.
//!
//! Each layout owns its own ordering of the clients it manages, tracks which
//! one has focus, and computes placements for a screen region on demand.
//!
//! # Supported Layouts
//!
//! - **Max**: the focused client fills the whole region, the rest are hidden
//! - **Stack**: a row of stacks, each showing its current client or all of them
//! - **Tile**: a master column next to a column of slaves
//! - **RatioTile**: a grid whose cells approach a target aspect ratio
//! - **Slice**: a fixed band reserved for one named client, the rest is
//!   handed to a fallback layout
//!
//! # Performance
//!
//! Layout results use `SmallVec` to avoid heap allocations for workspaces with
//! up to 16 windows, which is the common case.

mod max;
mod ratio_tile;
pub mod sequence;
mod slice;
mod stack;
mod tile;

use std::fmt;

pub use max::Max;
pub use ratio_tile::{GOLDEN_RATIO, RatioTile};
use smallvec::SmallVec;
pub use slice::Slice;
pub use stack::{DEFAULT_STACKS, Stack};
pub use tile::{DEFAULT_RATIO, DEFAULT_RATIO_INCREMENT, MAX_RATIO, MIN_RATIO, Tile};

use crate::client::{Client, ClientId};
use crate::command::LayoutCommand;
use crate::geometry::Rect;
use crate::info::{LayoutDetails, LayoutInfo};

// ============================================================================
// Layout Result
// ============================================================================

/// Inline capacity for layout results.
///
/// Most workspaces have fewer than 16 windows, so this allows layout results
/// to be stored on the stack without heap allocation in the common case.
pub const LAYOUT_INLINE_CAP: usize = 16;

/// Result of a layout pass.
///
/// Maps client IDs to their placements. Only visible clients appear.
pub type LayoutResult = SmallVec<[(ClientId, Rect); LAYOUT_INLINE_CAP]>;

// ============================================================================
// Layout Trait
// ============================================================================

/// The contract shared by every layout variant.
///
/// Lookups of absent clients are no-ops, never errors: [`Layout::remove`]
/// returns `None`, [`Layout::focus`] returns `false`. Geometry methods are pure.
pub trait Layout: fmt::Debug + Send {
    /// Static variant name.
    fn name(&self) -> &'static str;

    /// Adds a client. The new client becomes focused.
    fn add(&mut self, client: Client);

    /// Removes a client, transferring focus if it was focused.
    fn remove(&mut self, id: ClientId) -> Option<Client>;

    /// Focuses a held client. Returns `false` if the client is not held.
    fn focus(&mut self, id: ClientId) -> bool;

    /// The focused client. `None` only when the layout is empty.
    fn focused(&self) -> Option<ClientId>;

    /// Held clients in the layout's canonical order.
    fn clients(&self) -> Vec<&Client>;

    /// Returns `true` if the client is held.
    fn contains(&self, id: ClientId) -> bool {
        self.clients().iter().any(|client| client.id() == id)
    }

    /// Number of held clients.
    fn len(&self) -> usize { self.clients().len() }

    /// Returns `true` if no client is held.
    fn is_empty(&self) -> bool { self.len() == 0 }

    /// The focused client handle.
    fn focused_client(&self) -> Option<&Client> {
        let id = self.focused()?;
        self.clients().into_iter().find(|client| client.id() == id)
    }

    /// Computes placements for every visible client.
    fn arrange(&self, screen: &Rect) -> LayoutResult;

    /// Placement of a single client, or `None` if it is hidden or not held.
    fn configure(&self, id: ClientId, screen: &Rect) -> Option<Rect> {
        self.arrange(screen).into_iter().find(|(client, _)| *client == id).map(|(_, frame)| frame)
    }

    /// Runs a variant-specific command.
    ///
    /// Returns whether the layout handled it. Unsupported commands are no-ops.
    fn command(&mut self, command: LayoutCommand) -> bool {
        let _ = command;
        false
    }

    /// Read-only snapshot. Geometry-bearing fields are computed against `screen`.
    fn info(&self, screen: &Rect) -> LayoutInfo;
}

/// Builds the common part of a snapshot from any layout.
pub(crate) fn snapshot<L: Layout + ?Sized>(layout: &L, details: LayoutDetails) -> LayoutInfo {
    LayoutInfo {
        name: layout.name(),
        clients: names(layout.clients()),
        focus: layout.focused_client().map(|client| client.name().to_string()),
        details,
    }
}

/// Display names of a list of clients.
pub(crate) fn names<'a>(clients: impl IntoIterator<Item = &'a Client>) -> Vec<String> {
    clients.into_iter().map(|client| client.name().to_string()).collect()
}
