//! Stack layout - side-by-side stacks of clients.
//!
//! The region is divided into one vertical band per stack. A stack normally
//! shows only its current client, filling the band; in split mode every
//! member gets an equal-height row, starting with the current client.
//!
//! ```text
//! ┌────────┬────────┐   ┌────────┬────────┐
//! │        │        │   │        │   3    │
//! │   1    │   3    │   │   1    ├────────┤
//! │        │        │   │        │   2    │
//! └────────┴────────┘   └────────┴────────┘
//!      normal               split (stack 2)
//! ```
//!
//! New clients go into the lowest-indexed empty stack if there is one, so a
//! fresh two-stack layout spreads its first two clients across both bands.
//! After that they are inserted at the current position of the current stack.

use tracing::{debug, trace};

use super::sequence::{ClientSequence, Direction};
use super::{LAYOUT_INLINE_CAP, Layout, LayoutResult, snapshot};
use crate::client::{Client, ClientId};
use crate::command::LayoutCommand;
use crate::error::LayoutError;
use crate::geometry::{Rect, divide_columns, divide_rows};
use crate::info::{LayoutDetails, LayoutInfo, StackInfo};

/// Default number of stacks.
pub const DEFAULT_STACKS: usize = 2;

/// A single stack: its clients and whether all of them are rendered.
#[derive(Debug, Clone, Default)]
struct WindowStack {
    clients: ClientSequence,
    split: bool,
}

impl WindowStack {
    /// Clients in render order: the current one first, then the ones after it.
    fn current_relative(&self) -> impl Iterator<Item = &Client> {
        let len = self.clients.len();
        let current = self.clients.current_index();
        (0..len).filter_map(move |k| self.clients.as_slice().get((current + k) % len))
    }

    fn info(&self) -> StackInfo {
        StackInfo {
            windows: self.clients.names(),
            split: self.split,
            current: self.clients.current_index(),
        }
    }
}

/// Stack layout state.
#[derive(Debug, Clone)]
pub struct Stack {
    stacks: Vec<WindowStack>,
    current_stack: usize,
}

impl Default for Stack {
    fn default() -> Self {
        Self {
            stacks: vec![WindowStack::default(); DEFAULT_STACKS],
            current_stack: 0,
        }
    }
}

impl Stack {
    /// Creates a stack layout with the given number of stacks.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidStackCount`] if `stacks` is zero.
    pub fn new(stacks: usize) -> Result<Self, LayoutError> {
        if stacks == 0 {
            return Err(LayoutError::InvalidStackCount);
        }
        Ok(Self {
            stacks: vec![WindowStack::default(); stacks],
            current_stack: 0,
        })
    }

    /// Number of stacks, empty ones included.
    #[must_use]
    pub const fn stack_count(&self) -> usize { self.stacks.len() }

    /// Index of the current stack.
    #[must_use]
    pub const fn current_stack(&self) -> usize { self.current_stack }

    fn current(&self) -> &WindowStack { &self.stacks[self.current_stack] }

    fn current_mut(&mut self) -> &mut WindowStack { &mut self.stacks[self.current_stack] }

    fn stack_of(&self, id: ClientId) -> Option<usize> {
        self.stacks.iter().position(|stack| stack.clients.contains(id))
    }

    /// Moves `current_stack` to the lowest non-empty stack if the current one is empty.
    fn retarget(&mut self) {
        if !self.current().clients.is_empty() {
            return;
        }
        if let Some(index) = self.stacks.iter().position(|stack| !stack.clients.is_empty()) {
            trace!(stack = index, "layout: stack retargeted");
            self.current_stack = index;
        }
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Focuses the adjacent client in the flattened view across all stacks.
    fn focus_adjacent(&mut self, direction: Direction) {
        let flat: Vec<ClientId> =
            self.stacks.iter().flat_map(|stack| stack.clients.ids()).collect();
        let target = match self.focused().and_then(|id| flat.iter().position(|&c| c == id)) {
            Some(position) => flat.get(direction.apply(position, flat.len())),
            None => flat.first(),
        };
        if let Some(&id) = target {
            self.focus(id);
        }
    }

    fn add_stack(&mut self) {
        self.stacks.push(WindowStack::default());
        debug!(stacks = self.stacks.len(), "layout: stack added");
    }

    fn delete_stack(&mut self) {
        if self.stacks.len() < 2 {
            return;
        }
        let mut removed = self.stacks.remove(self.current_stack);
        let merged = removed.clients.len();
        self.stacks[0].clients.extend(removed.clients.drain());
        debug!(stack = self.current_stack, merged, "layout: stack deleted");
        self.current_stack = 0;
    }

    fn rotate(&mut self) {
        let count = self.stacks.len();
        self.stacks.rotate_right(1);
        self.current_stack = Direction::Forward.apply(self.current_stack, count);
    }

    fn client_to(&mut self, direction: Direction) {
        let count = self.stacks.len();
        if count < 2 {
            return;
        }
        let Some(id) = self.focused() else {
            return;
        };
        let Some(client) = self.current_mut().clients.remove(id) else {
            return;
        };
        let target = direction.apply(self.current_stack, count);
        self.stacks[target].clients.insert_at_current(client);
        trace!(client = %id, stack = target, "layout: client moved to stack");
        self.current_stack = target;
    }
}

impl Layout for Stack {
    fn name(&self) -> &'static str { "stack" }

    fn add(&mut self, client: Client) {
        trace!(client = %client.id(), "layout: stack add");
        if let Some(index) = self.stacks.iter().position(|stack| stack.clients.is_empty()) {
            self.stacks[index].clients.push_back(client);
            self.current_stack = index;
        } else {
            self.current_mut().clients.insert_at_current(client);
        }
    }

    fn remove(&mut self, id: ClientId) -> Option<Client> {
        let index = self.stack_of(id)?;
        let removed = self.stacks[index].clients.remove(id)?;
        trace!(client = %id, stack = index, "layout: stack remove");
        self.retarget();
        Some(removed)
    }

    fn focus(&mut self, id: ClientId) -> bool {
        let Some(index) = self.stack_of(id) else {
            return false;
        };
        self.current_stack = index;
        self.stacks[index].clients.focus(id)
    }

    fn focused(&self) -> Option<ClientId> { self.current().clients.current_id() }

    fn clients(&self) -> Vec<&Client> {
        self.stacks.iter().flat_map(|stack| stack.clients.iter()).collect()
    }

    fn contains(&self, id: ClientId) -> bool { self.stack_of(id).is_some() }

    fn len(&self) -> usize { self.stacks.iter().map(|stack| stack.clients.len()).sum() }

    fn arrange(&self, screen: &Rect) -> LayoutResult {
        let mut result = LayoutResult::with_capacity(self.len().min(LAYOUT_INLINE_CAP));
        let bands = divide_columns(screen, self.stacks.len());
        for (stack, band) in self.stacks.iter().zip(bands) {
            if stack.split {
                let rows = divide_rows(&band, stack.clients.len());
                result.extend(stack.current_relative().map(Client::id).zip(rows));
            } else if let Some(id) = stack.clients.current_id() {
                result.push((id, band));
            }
        }
        result
    }

    fn command(&mut self, command: LayoutCommand) -> bool {
        match command {
            LayoutCommand::Next => self.focus_adjacent(Direction::Forward),
            LayoutCommand::Previous => self.focus_adjacent(Direction::Backward),
            LayoutCommand::Up => self.current_mut().clients.step(Direction::Forward),
            LayoutCommand::Down => self.current_mut().clients.step(Direction::Backward),
            LayoutCommand::ShuffleUp => {
                self.current_mut().clients.shift_current(Direction::Backward);
            }
            LayoutCommand::ShuffleDown => {
                self.current_mut().clients.shift_current(Direction::Forward);
            }
            LayoutCommand::Rotate => self.rotate(),
            LayoutCommand::Add => self.add_stack(),
            LayoutCommand::Delete => self.delete_stack(),
            LayoutCommand::ToggleSplit => {
                let stack = self.current_mut();
                stack.split = !stack.split;
            }
            LayoutCommand::ClientToNext => self.client_to(Direction::Forward),
            LayoutCommand::ClientToPrevious => self.client_to(Direction::Backward),
            _ => return false,
        }
        true
    }

    fn info(&self, _screen: &Rect) -> LayoutInfo {
        snapshot(self, LayoutDetails::Stack {
            stacks: self.stacks.iter().map(WindowStack::info).collect(),
            current_stack: self.current_stack,
        })
    }
}
