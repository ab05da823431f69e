//! Layout groups.
//!
//! A group owns the layouts configured for one workspace and the screen
//! region they tile. Exactly one layout is active at a time. Client lifecycle
//! events go to every layout so that each one keeps its own ordering and
//! switching layouts never loses a client; focus, commands and geometry only
//! concern the active one.

use tracing::debug;

use crate::client::{Client, ClientId};
use crate::command::LayoutCommand;
use crate::error::LayoutError;
use crate::geometry::Rect;
use crate::info::GroupInfo;
use crate::layout::sequence::Direction;
use crate::layout::{Layout, LayoutResult};

/// An ordered list of layouts with one active layout.
#[derive(Debug)]
pub struct LayoutGroup {
    name: String,
    layouts: Vec<Box<dyn Layout>>,
    current: usize,
    screen: Rect,
}

impl LayoutGroup {
    /// Creates a group. The first layout starts active.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EmptyGroup`] if `layouts` is empty.
    pub fn new(name: impl Into<String>, layouts: Vec<Box<dyn Layout>>) -> Result<Self, LayoutError> {
        if layouts.is_empty() {
            return Err(LayoutError::EmptyGroup);
        }
        Ok(Self {
            name: name.into(),
            layouts,
            current: 0,
            screen: Rect::default(),
        })
    }

    /// Sets the screen region and returns the group.
    #[must_use]
    pub const fn with_screen(mut self, screen: Rect) -> Self {
        self.screen = screen;
        self
    }

    /// Group name.
    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    /// Names of the configured layouts, in cycle order.
    #[must_use]
    pub fn layout_names(&self) -> Vec<&'static str> {
        self.layouts.iter().map(|layout| layout.name()).collect()
    }

    /// Index of the active layout.
    #[must_use]
    pub const fn current_index(&self) -> usize { self.current }

    /// The active layout.
    #[must_use]
    pub fn layout(&self) -> &dyn Layout { self.layouts[self.current].as_ref() }

    /// The active layout, mutably.
    pub fn layout_mut(&mut self) -> &mut dyn Layout { self.layouts[self.current].as_mut() }

    /// Screen region the group tiles.
    #[must_use]
    pub const fn screen(&self) -> Rect { self.screen }

    /// Replaces the screen region.
    pub const fn set_screen(&mut self, screen: Rect) { self.screen = screen; }

    // ========================================================================
    // Clients
    // ========================================================================

    /// Adds a client to every layout.
    pub fn add(&mut self, client: Client) {
        for layout in &mut self.layouts {
            layout.add(client.clone());
        }
    }

    /// Removes a client from every layout.
    pub fn remove(&mut self, id: ClientId) -> Option<Client> {
        let mut removed = None;
        for layout in &mut self.layouts {
            removed = layout.remove(id).or(removed);
        }
        removed
    }

    /// Focuses a client in the active layout.
    pub fn focus(&mut self, id: ClientId) -> bool { self.layout_mut().focus(id) }

    /// Focused client of the active layout.
    #[must_use]
    pub fn focused(&self) -> Option<ClientId> { self.layout().focused() }

    /// Focused client handle of the active layout.
    #[must_use]
    pub fn focused_client(&self) -> Option<&Client> { self.layout().focused_client() }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Runs a command on the active layout.
    pub fn command(&mut self, command: LayoutCommand) -> bool { self.layout_mut().command(command) }

    /// Parses a command name and runs it on the active layout.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownCommand`] if the name is not a command.
    pub fn dispatch(&mut self, name: &str) -> Result<bool, LayoutError> {
        let command: LayoutCommand = name.parse()?;
        Ok(self.command(command))
    }

    /// Activates the next layout, wrapping.
    pub fn next_layout(&mut self) {
        let index = Direction::Forward.apply(self.current, self.layouts.len());
        self.select_layout(index);
    }

    /// Activates the previous layout, wrapping.
    pub fn previous_layout(&mut self) {
        let index = Direction::Backward.apply(self.current, self.layouts.len());
        self.select_layout(index);
    }

    /// Activates the layout at `index`, handing the current focus over to it.
    ///
    /// Returns `false` and changes nothing if `index` is out of range.
    pub fn select_layout(&mut self, index: usize) -> bool {
        if index >= self.layouts.len() {
            return false;
        }
        let focus = self.focused();
        self.current = index;
        if let Some(id) = focus {
            self.layout_mut().focus(id);
        }
        debug!(group = %self.name, layout = self.layout().name(), index, "layout: switched");
        true
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    /// Placements of the active layout for the group's screen.
    #[must_use]
    pub fn arrange(&self) -> LayoutResult { self.layout().arrange(&self.screen) }

    /// Placement of one client in the active layout.
    #[must_use]
    pub fn configure(&self, id: ClientId) -> Option<Rect> { self.layout().configure(id, &self.screen) }

    /// Read-only snapshot of the group.
    #[must_use]
    pub fn info(&self) -> GroupInfo {
        let layout = self.layout().info(&self.screen);
        GroupInfo {
            name: self.name.clone(),
            layouts: self.layout_names(),
            current_layout: self.current,
            focus: layout.focus.clone(),
            windows: layout.clients.clone(),
            layout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Side;
    use crate::info::{LayoutDetails, LayoutInfo};
    use crate::layout::{Max, Slice, Stack, Tile};

    fn screen() -> Rect { Rect::new(0, 0, 800, 600) }

    fn group(layouts: Vec<Box<dyn Layout>>) -> LayoutGroup {
        LayoutGroup::new("a", layouts).unwrap().with_screen(screen())
    }

    #[test]
    fn test_empty_group_is_rejected() {
        assert_eq!(LayoutGroup::new("a", vec![]).unwrap_err(), LayoutError::EmptyGroup);
    }

    #[test]
    fn test_add_and_remove_are_broadcast() {
        let mut group = group(vec![Box::new(Max::new()), Box::new(Stack::new(2).unwrap())]);
        group.add(Client::new(1, "one"));
        group.add(Client::new(2, "two"));
        for layout in &group.layouts {
            assert_eq!(layout.len(), 2, "{}", layout.name());
        }
        assert_eq!(group.remove(ClientId(1)).map(|c| c.id()), Some(ClientId(1)));
        for layout in &group.layouts {
            assert!(!layout.contains(ClientId(1)), "{}", layout.name());
        }
        assert!(group.remove(ClientId(1)).is_none());
    }

    #[test]
    fn test_layout_cycle_wraps() {
        let mut group = group(vec![Box::new(Max::new()), Box::new(Tile::default())]);
        assert_eq!(group.layout().name(), "max");
        group.next_layout();
        assert_eq!(group.layout().name(), "tile");
        group.next_layout();
        assert_eq!(group.layout().name(), "max");
        group.previous_layout();
        assert_eq!(group.current_index(), 1);
        assert!(!group.select_layout(5));
        assert_eq!(group.current_index(), 1);
    }

    #[test]
    fn test_focus_is_handed_over() {
        let mut group = group(vec![Box::new(Max::new()), Box::new(Tile::default())]);
        group.add(Client::new(1, "one"));
        group.add(Client::new(2, "two"));
        group.add(Client::new(3, "three"));
        group.focus(ClientId(1));
        group.next_layout();
        assert_eq!(group.focused(), Some(ClientId(1)));
    }

    #[test]
    fn test_dispatch() {
        let mut group = group(vec![Box::new(Stack::new(2).unwrap())]);
        assert_eq!(group.dispatch("add-stack"), Ok(true));
        assert_eq!(group.dispatch("increase_ratio"), Ok(false));
        assert_eq!(
            group.dispatch("explode"),
            Err(LayoutError::UnknownCommand("explode".to_string()))
        );
        let LayoutInfo { details, .. } = group.info().layout;
        let LayoutDetails::Stack { stacks, .. } = details else {
            panic!("expected stack details");
        };
        assert_eq!(stacks.len(), 3);
    }

    #[test]
    fn test_geometry_uses_group_screen() {
        let mut group = group(vec![Box::new(Max::new())]);
        group.add(Client::new(1, "one"));
        assert_eq!(group.configure(ClientId(1)), Some(screen()));
        group.set_screen(Rect::new(0, 0, 1024, 768));
        assert_eq!(group.arrange().as_slice(), &[(ClientId(1), Rect::new(0, 0, 1024, 768))]);
    }

    #[test]
    fn test_info() {
        let mut group = group(vec![
            Box::new(Tile::default()),
            Box::new(Slice::new(Side::Left, 200, "slice", Box::new(Max::new())).unwrap()),
        ]);
        group.add(Client::new(1, "one"));
        group.add(Client::new(2, "two"));
        let info = group.info();
        assert_eq!(info.name, "a");
        assert_eq!(info.layouts, ["tile", "slice"]);
        assert_eq!(info.current_layout, 0);
        assert_eq!(info.focus.as_deref(), Some("two"));
        assert_eq!(info.windows, ["two", "one"]);
        assert_eq!(info.layout.name, "tile");
    }
}
