//! Introspection snapshots.
//!
//! Snapshots are plain data, detached from the layout that produced them, and
//! serialise to JSON so a host can expose them over whatever transport it uses.
//! Variant-specific fields are flattened into the snapshot object, so a stack
//! layout produces `{"name": "stack", "clients": [...], "focus": ..., "stacks":
//! [...], "current_stack": 0}`.

use serde::Serialize;

use crate::geometry::{Rect, Side};

/// Read-only snapshot of a single layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutInfo {
    /// Variant name (`max`, `stack`, `tile`, `ratiotile`, `slice`).
    pub name: &'static str,
    /// Client names in the layout's canonical order.
    pub clients: Vec<String>,
    /// Name of the focused client.
    pub focus: Option<String>,
    /// Variant-specific fields.
    #[serde(flatten)]
    pub details: LayoutDetails,
}

/// Variant-specific part of a [`LayoutInfo`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LayoutDetails {
    /// Max has nothing beyond the client list.
    Max {},
    /// Per-stack state.
    Stack {
        /// Every stack, in slot order.
        stacks: Vec<StackInfo>,
        /// Index of the current stack.
        current_stack: usize,
    },
    /// Master/slave partition.
    Tile {
        /// All clients, most recent first.
        all: Vec<String>,
        /// Clients in the master column.
        master: Vec<String>,
        /// Clients in the slave column.
        slave: Vec<String>,
        /// Configured master count.
        master_windows: usize,
        /// Master column width ratio.
        ratio: f64,
    },
    /// Target ratio and the placements it produces.
    RatioTile {
        /// Target cell aspect ratio.
        ratio: f64,
        /// Placements in sequence order.
        layout_info: Vec<Rect>,
    },
    /// Reserved band and fallback state.
    Slice {
        /// Reserved edge.
        side: Side,
        /// Band thickness in pixels.
        width: u32,
        /// Name of the captured slice client.
        slice: Option<String>,
        /// Snapshot of the fallback layout for the remaining region.
        fallback: Box<LayoutInfo>,
    },
}

/// Snapshot of one stack of the stack layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackInfo {
    /// Client names in stored order.
    pub windows: Vec<String>,
    /// Whether every member is rendered.
    pub split: bool,
    /// Index of the stack's current client within `windows`.
    pub current: usize,
}

impl StackInfo {
    /// Returns the windows rotated so the current one comes first.
    #[must_use]
    pub fn current_relative(&self) -> Vec<String> {
        let mut windows = self.windows.clone();
        let len = windows.len();
        if len > 0 {
            windows.rotate_left(self.current.min(len - 1));
        }
        windows
    }
}

/// Read-only snapshot of a layout group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupInfo {
    /// Group name.
    pub name: String,
    /// Names of the configured layouts, in cycle order.
    pub layouts: Vec<&'static str>,
    /// Index of the active layout.
    pub current_layout: usize,
    /// Name of the focused client.
    pub focus: Option<String>,
    /// Client names in the active layout's order.
    pub windows: Vec<String>,
    /// Snapshot of the active layout.
    pub layout: LayoutInfo,
}
