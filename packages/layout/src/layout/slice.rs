//! Slice layout - a fixed band reserved for one named client.
//!
//! A band of `width` pixels along one edge of the region is reserved for the
//! first client whose name matches the configured slice name. Every other
//! client is handed to a fallback layout, which arranges the rest of the
//! region. The band stays reserved while no slice client is held.
//!
//! ```text
//! Left:                 Top:
//! ┌─────┬───────────┐   ┌─────────────────┐
//! │     │           │   │      slice      │
//! │slice│ fallback  │   ├─────────────────┤
//! │     │           │   │    fallback     │
//! └─────┴───────────┘   └─────────────────┘
//! ```
//!
//! `next` and `previous` walk every held client in insertion order, the slice
//! client included at the position it was added. Any other command goes to the
//! fallback.

use tracing::{debug, trace};

use super::sequence::Direction;
use super::{Layout, LayoutResult, snapshot};
use crate::client::{Client, ClientId};
use crate::command::LayoutCommand;
use crate::error::LayoutError;
use crate::geometry::{Rect, Side};
use crate::info::{LayoutDetails, LayoutInfo};

/// Slice layout state.
#[derive(Debug)]
pub struct Slice {
    side: Side,
    width: u32,
    name: String,
    fallback: Box<dyn Layout>,
    slice: Option<Client>,
    order: Vec<ClientId>,
    focused: Option<ClientId>,
}

impl Slice {
    /// Creates a slice layout.
    ///
    /// # Arguments
    ///
    /// * `side` - Edge the band is reserved along
    /// * `width` - Band thickness in pixels
    /// * `name` - Client name that claims the band
    /// * `fallback` - Layout for every other client
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidSliceWidth`] for a zero width and
    /// [`LayoutError::InvalidSliceName`] for a blank name.
    pub fn new(
        side: Side,
        width: u32,
        name: impl Into<String>,
        fallback: Box<dyn Layout>,
    ) -> Result<Self, LayoutError> {
        let name = name.into();
        if width == 0 {
            return Err(LayoutError::InvalidSliceWidth);
        }
        if name.trim().is_empty() {
            return Err(LayoutError::InvalidSliceName);
        }
        Ok(Self {
            side,
            width,
            name,
            fallback,
            slice: None,
            order: Vec::new(),
            focused: None,
        })
    }

    /// Reserved edge.
    #[must_use]
    pub const fn side(&self) -> Side { self.side }

    /// Band thickness in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 { self.width }

    /// Name that claims the band.
    #[must_use]
    pub fn slice_name(&self) -> &str { &self.name }

    /// The captured slice client, if any.
    #[must_use]
    pub const fn slice_client(&self) -> Option<&Client> { self.slice.as_ref() }

    /// The fallback layout.
    #[must_use]
    pub fn fallback(&self) -> &dyn Layout { self.fallback.as_ref() }

    fn is_slice(&self, id: ClientId) -> bool {
        self.slice.as_ref().is_some_and(|client| client.id() == id)
    }

    /// Focuses the neighbour of the focused client in insertion order.
    fn cycle(&mut self, direction: Direction) {
        let position = self.focused.and_then(|id| self.order.iter().position(|&c| c == id));
        let target = match position {
            Some(position) => self.order.get(direction.apply(position, self.order.len())),
            None => self.order.first(),
        };
        if let Some(&id) = target {
            self.focus(id);
        }
    }
}

impl Layout for Slice {
    fn name(&self) -> &'static str { "slice" }

    fn add(&mut self, client: Client) {
        let id = client.id();
        if self.slice.is_none() && client.name() == self.name {
            debug!(client = %id, side = %self.side, "layout: slice client captured");
            self.slice = Some(client);
        } else {
            trace!(client = %id, "layout: slice forwards add");
            self.fallback.add(client);
        }
        self.order.push(id);
        self.focused = Some(id);
    }

    fn remove(&mut self, id: ClientId) -> Option<Client> {
        let removed = if self.is_slice(id) {
            debug!(client = %id, "layout: slice client released");
            self.slice.take()?
        } else {
            self.fallback.remove(id)?
        };
        self.order.retain(|&c| c != id);
        if self.focused == Some(id) {
            self.focused =
                self.fallback.focused().or_else(|| self.slice.as_ref().map(Client::id));
        }
        Some(removed)
    }

    fn focus(&mut self, id: ClientId) -> bool {
        if self.is_slice(id) || self.fallback.focus(id) {
            self.focused = Some(id);
            return true;
        }
        false
    }

    fn focused(&self) -> Option<ClientId> { self.focused }

    fn clients(&self) -> Vec<&Client> {
        let fallback = self.fallback.clients();
        self.order
            .iter()
            .filter_map(|&id| {
                self.slice
                    .as_ref()
                    .filter(|client| client.id() == id)
                    .or_else(|| fallback.iter().copied().find(|client| client.id() == id))
            })
            .collect()
    }

    fn contains(&self, id: ClientId) -> bool { self.is_slice(id) || self.fallback.contains(id) }

    fn len(&self) -> usize { self.order.len() }

    fn arrange(&self, screen: &Rect) -> LayoutResult {
        let (band, rest) = self.side.carve(screen, self.width);
        let mut result = LayoutResult::new();
        if let Some(client) = &self.slice {
            result.push((client.id(), band));
        }
        result.extend(self.fallback.arrange(&rest));
        result
    }

    fn command(&mut self, command: LayoutCommand) -> bool {
        match command {
            LayoutCommand::Next => self.cycle(Direction::Forward),
            LayoutCommand::Previous => self.cycle(Direction::Backward),
            _ => {
                let before = self.fallback.focused();
                let handled = self.fallback.command(command);
                let after = self.fallback.focused();
                let on_fallback = self.focused.is_some_and(|id| !self.is_slice(id));
                if handled && after.is_some() && (after != before || on_fallback) {
                    self.focused = after;
                }
                return handled;
            }
        }
        true
    }

    fn info(&self, screen: &Rect) -> LayoutInfo {
        let (_, rest) = self.side.carve(screen, self.width);
        snapshot(self, LayoutDetails::Slice {
            side: self.side,
            width: self.width,
            slice: self.slice.as_ref().map(|client| client.name().to_string()),
            fallback: Box::new(self.fallback.info(&rest)),
        })
    }
}
