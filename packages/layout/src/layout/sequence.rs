//! Ordered client sequence with a movable current marker.
//!
//! Every layout stores its clients in one or more of these sequences. The
//! sequence owns the ordering rules shared by all layouts, most importantly
//! how the current marker behaves when clients are removed:
//!
//! - removing a client before the current one moves the marker back so the
//!   same client stays current;
//! - removing the current client keeps the marker's index, wrapped to the new
//!   length, so the client that followed it cyclically becomes current;
//! - removing a client after the current one leaves the marker alone.

use crate::client::{Client, ClientId};

/// Direction of a single cyclic step through a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the tail, wrapping to the head.
    Forward,
    /// Toward the head, wrapping to the tail.
    Backward,
}

impl Direction {
    /// Moves `index` one step in this direction within `0..len`, wrapping.
    ///
    /// Returns `0` for an empty range.
    #[must_use]
    pub const fn apply(self, index: usize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        match self {
            Self::Forward => (index + 1) % len,
            Self::Backward => (index + len - 1) % len,
        }
    }
}

/// An ordered list of clients with an explicit current index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientSequence {
    clients: Vec<Client>,
    current: usize,
}

impl ClientSequence {
    /// Creates an empty sequence.
    #[must_use]
    pub const fn new() -> Self { Self { clients: Vec::new(), current: 0 } }

    /// Number of clients held.
    #[must_use]
    pub const fn len(&self) -> usize { self.clients.len() }

    /// Returns `true` if the sequence holds no client.
    #[must_use]
    pub const fn is_empty(&self) -> bool { self.clients.is_empty() }

    /// The clients in stored order.
    #[must_use]
    pub fn as_slice(&self) -> &[Client] { &self.clients }

    /// Iterates over the clients in stored order.
    pub fn iter(&self) -> std::slice::Iter<'_, Client> { self.clients.iter() }

    /// Iterates over the client identities in stored order.
    pub fn ids(&self) -> impl Iterator<Item = ClientId> + '_ { self.clients.iter().map(Client::id) }

    /// Display names in stored order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.clients.iter().map(|client| client.name().to_string()).collect()
    }

    /// Position of the client with the given identity.
    #[must_use]
    pub fn index_of(&self, id: ClientId) -> Option<usize> {
        self.clients.iter().position(|client| client.id() == id)
    }

    /// Returns `true` if the client is held by this sequence.
    #[must_use]
    pub fn contains(&self, id: ClientId) -> bool { self.index_of(id).is_some() }

    /// The current index. Meaningless when the sequence is empty.
    #[must_use]
    pub const fn current_index(&self) -> usize { self.current }

    /// The current client, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Client> { self.clients.get(self.current) }

    /// Identity of the current client, if any.
    #[must_use]
    pub fn current_id(&self) -> Option<ClientId> { self.current().map(Client::id) }

    /// Sets the current index, clamped to the last element.
    pub fn set_current(&mut self, index: usize) {
        self.current = index.min(self.clients.len().saturating_sub(1));
    }

    /// Makes the client with the given identity current.
    ///
    /// Returns `false` and leaves the marker alone if the client is absent.
    pub fn focus(&mut self, id: ClientId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.current = index;
                true
            }
            None => false,
        }
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Inserts a client at the head and makes it current.
    pub fn push_front(&mut self, client: Client) { self.insert_current_at(0, client); }

    /// Inserts a client at the current position and makes it current.
    ///
    /// The previously current client moves one position toward the tail.
    pub fn insert_at_current(&mut self, client: Client) {
        let index = self.current.min(self.clients.len());
        self.insert_current_at(index, client);
    }

    /// Appends a client at the tail and makes it current.
    pub fn push_back(&mut self, client: Client) {
        let index = self.clients.len();
        self.insert_current_at(index, client);
    }

    /// Appends clients at the tail without moving the current marker.
    pub fn extend(&mut self, clients: impl IntoIterator<Item = Client>) {
        self.clients.extend(clients);
    }

    fn insert_current_at(&mut self, index: usize, client: Client) {
        self.clients.insert(index, client);
        self.current = index;
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes the client with the given identity.
    ///
    /// Returns `None` for an absent identity.
    pub fn remove(&mut self, id: ClientId) -> Option<Client> {
        let index = self.index_of(id)?;
        let client = self.clients.remove(index);
        let len = self.clients.len();
        if index < self.current {
            self.current -= 1;
        } else if len == 0 {
            self.current = 0;
        } else if index == self.current {
            self.current %= len;
        }
        Some(client)
    }

    /// Removes every client, resetting the marker.
    pub fn drain(&mut self) -> Vec<Client> {
        self.current = 0;
        std::mem::take(&mut self.clients)
    }

    // ========================================================================
    // Reordering
    // ========================================================================

    /// Moves the current marker one step, wrapping.
    pub fn step(&mut self, direction: Direction) {
        self.current = direction.apply(self.current, self.clients.len());
    }

    /// Moves the head to the tail. The current index is unchanged.
    pub fn rotate_forward(&mut self) {
        if !self.clients.is_empty() {
            self.clients.rotate_left(1);
        }
    }

    /// Moves the tail to the head. The current index is unchanged.
    pub fn rotate_backward(&mut self) {
        if !self.clients.is_empty() {
            self.clients.rotate_right(1);
        }
    }

    /// Rotates the content so the given client becomes the head and current.
    ///
    /// The cyclic order is preserved. Returns `false` if the client is absent.
    pub fn rotate_to_front(&mut self, id: ClientId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.clients.rotate_left(index);
        self.current = 0;
        true
    }

    /// Moves the current client one position, cyclically.
    ///
    /// Moving the head backward puts it at the tail; moving the tail forward
    /// puts it at the head. The marker follows the client.
    pub fn shift_current(&mut self, direction: Direction) {
        let len = self.clients.len();
        if len < 2 {
            return;
        }
        let target = direction.apply(self.current, len);
        let client = self.clients.remove(self.current);
        self.clients.insert(target, client);
        self.current = target;
    }
}
