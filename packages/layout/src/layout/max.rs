//! Max layout - the focused client fills the whole region.
//!
//! Order and focus are the same concept here: the head of the sequence is the
//! only visible client and always the focused one. `down` sends the head to
//! the back of the line, `up` brings the last client to the front.

use tracing::trace;

use super::sequence::ClientSequence;
use super::{Layout, LayoutResult, snapshot};
use crate::client::{Client, ClientId};
use crate::command::LayoutCommand;
use crate::geometry::Rect;
use crate::info::{LayoutDetails, LayoutInfo};

/// Max layout state.
#[derive(Debug, Clone, Default)]
pub struct Max {
    clients: ClientSequence,
}

impl Max {
    /// Creates an empty max layout.
    #[must_use]
    pub const fn new() -> Self { Self { clients: ClientSequence::new() } }

    fn down(&mut self) {
        self.clients.rotate_forward();
        self.clients.set_current(0);
    }

    fn up(&mut self) {
        self.clients.rotate_backward();
        self.clients.set_current(0);
    }
}

impl Layout for Max {
    fn name(&self) -> &'static str { "max" }

    fn add(&mut self, client: Client) {
        trace!(client = %client.id(), "layout: max add");
        self.clients.push_front(client);
    }

    fn remove(&mut self, id: ClientId) -> Option<Client> {
        let removed = self.clients.remove(id)?;
        self.clients.set_current(0);
        trace!(client = %id, "layout: max remove");
        Some(removed)
    }

    fn focus(&mut self, id: ClientId) -> bool { self.clients.rotate_to_front(id) }

    fn focused(&self) -> Option<ClientId> { self.clients.as_slice().first().map(Client::id) }

    fn clients(&self) -> Vec<&Client> { self.clients.iter().collect() }

    fn contains(&self, id: ClientId) -> bool { self.clients.contains(id) }

    fn len(&self) -> usize { self.clients.len() }

    fn arrange(&self, screen: &Rect) -> LayoutResult {
        self.focused().map(|id| (id, *screen)).into_iter().collect()
    }

    fn command(&mut self, command: LayoutCommand) -> bool {
        match command {
            LayoutCommand::Down | LayoutCommand::Next => self.down(),
            LayoutCommand::Up | LayoutCommand::Previous => self.up(),
            _ => return false,
        }
        true
    }

    fn info(&self, _screen: &Rect) -> LayoutInfo { snapshot(self, LayoutDetails::Max {}) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect { Rect::new(0, 0, 800, 600) }

    fn names(layout: &Max) -> Vec<String> { layout.info(&screen()).clients }

    fn with(names: &[&str]) -> Max {
        let mut layout = Max::new();
        for (i, name) in names.iter().enumerate() {
            layout.add(Client::new(i as u64 + 1, *name));
        }
        layout
    }

    #[test]
    fn test_max_simple() {
        let mut layout = Max::new();
        layout.add(Client::new(1, "one"));
        assert_eq!(names(&layout), ["one"]);
        layout.add(Client::new(2, "two"));
        assert_eq!(names(&layout), ["two", "one"]);
    }

    #[test]
    fn test_max_updown() {
        let mut layout = with(&["one", "two", "three"]);
        assert_eq!(names(&layout), ["three", "two", "one"]);
        assert!(layout.command(LayoutCommand::Down));
        assert_eq!(names(&layout), ["two", "one", "three"]);
        assert_eq!(layout.focused(), Some(ClientId(2)));
        assert!(layout.command(LayoutCommand::Up));
        assert_eq!(names(&layout), ["three", "two", "one"]);
        assert_eq!(layout.focused(), Some(ClientId(3)));
    }

    #[test]
    fn test_max_remove() {
        let mut layout = with(&["one", "two"]);
        assert_eq!(names(&layout), ["two", "one"]);
        layout.remove(ClientId(2));
        assert_eq!(names(&layout), ["one"]);
        assert_eq!(layout.focused(), Some(ClientId(1)));
    }

    #[test]
    fn test_max_remove_head_promotes_next() {
        let mut layout = with(&["one", "two", "three"]);
        layout.remove(ClientId(3));
        assert_eq!(layout.focused(), Some(ClientId(2)));
    }

    #[test]
    fn test_max_focus_rotates_to_head() {
        let mut layout = with(&["one", "two", "three", "four"]);
        assert!(layout.focus(ClientId(2)));
        assert_eq!(names(&layout), ["two", "one", "four", "three"]);
        assert_eq!(layout.focused(), Some(ClientId(2)));
    }

    #[test]
    fn test_max_rotation_round_trip() {
        let mut layout = with(&["a", "b", "c", "d", "e"]);
        let before = names(&layout);
        for _ in 0..3 {
            layout.command(LayoutCommand::Down);
        }
        for _ in 0..3 {
            layout.command(LayoutCommand::Up);
        }
        assert_eq!(names(&layout), before);
    }

    #[test]
    fn test_max_arranges_only_head() {
        let layout = with(&["one", "two"]);
        let result = layout.arrange(&screen());
        assert_eq!(result.as_slice(), &[(ClientId(2), screen())]);
        assert_eq!(layout.configure(ClientId(1), &screen()), None);
    }

    #[test]
    fn test_max_ignores_stack_commands() {
        let mut layout = with(&["one"]);
        assert!(!layout.command(LayoutCommand::Rotate));
        assert!(!layout.command(LayoutCommand::ToggleSplit));
    }
}
