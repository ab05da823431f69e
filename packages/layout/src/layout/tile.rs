//! Tile layout - a master column next to a column of slaves.
//!
//! The first `master_windows` clients of the sequence form the master set and
//! share the left column; everything else shares the right column. Without
//! slaves the masters take the full width.
//!
//! ```text
//! ┌──────────┬─────┐
//! │          │  2  │
//! │  Master  ├─────┤
//! │          │  3  │
//! └──────────┴─────┘
//! ```
//!
//! The sequence is most-recent first: new clients become the first master.

use tracing::trace;

use super::sequence::{ClientSequence, Direction};
use super::{LAYOUT_INLINE_CAP, Layout, LayoutResult, names, snapshot};
use crate::client::{Client, ClientId};
use crate::command::LayoutCommand;
use crate::error::LayoutError;
use crate::geometry::{Rect, divide_rows, split_horizontal};
use crate::info::{LayoutDetails, LayoutInfo};

/// Default share of the width given to the master column.
pub const DEFAULT_RATIO: f64 = 0.618;

/// Default step used by the ratio commands.
pub const DEFAULT_RATIO_INCREMENT: f64 = 0.05;

/// Smallest ratio reachable through the ratio commands.
pub const MIN_RATIO: f64 = 0.05;

/// Largest ratio reachable through the ratio commands.
pub const MAX_RATIO: f64 = 0.95;

/// Tile layout state.
#[derive(Debug, Clone)]
pub struct Tile {
    clients: ClientSequence,
    master_windows: usize,
    ratio: f64,
    ratio_increment: f64,
}

impl Default for Tile {
    fn default() -> Self {
        Self {
            clients: ClientSequence::new(),
            master_windows: 1,
            ratio: DEFAULT_RATIO,
            ratio_increment: DEFAULT_RATIO_INCREMENT,
        }
    }
}

impl Tile {
    /// Creates a tile layout.
    ///
    /// # Arguments
    ///
    /// * `master_windows` - Number of clients in the master column (at least 1)
    /// * `ratio` - Share of the width given to the master column, in `(0, 1)`
    /// * `ratio_increment` - Step used by the ratio commands, greater than zero
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidMasterCount`] or [`LayoutError::InvalidRatio`]
    /// for out-of-range values.
    pub fn new(master_windows: usize, ratio: f64, ratio_increment: f64) -> Result<Self, LayoutError> {
        if master_windows == 0 {
            return Err(LayoutError::InvalidMasterCount);
        }
        if !ratio.is_finite() || ratio <= 0.0 || ratio >= 1.0 {
            return Err(LayoutError::InvalidRatio(ratio));
        }
        if !ratio_increment.is_finite() || ratio_increment <= 0.0 {
            return Err(LayoutError::InvalidRatio(ratio_increment));
        }
        Ok(Self {
            clients: ClientSequence::new(),
            master_windows,
            ratio,
            ratio_increment,
        })
    }

    /// Configured number of master clients.
    #[must_use]
    pub const fn master_windows(&self) -> usize { self.master_windows }

    /// Current master column ratio.
    #[must_use]
    pub const fn ratio(&self) -> f64 { self.ratio }

    /// Clients in the master column.
    #[must_use]
    pub fn master(&self) -> &[Client] {
        let all = self.clients.as_slice();
        &all[..self.master_windows.min(all.len())]
    }

    /// Clients in the slave column.
    #[must_use]
    pub fn slave(&self) -> &[Client] {
        let all = self.clients.as_slice();
        &all[self.master_windows.min(all.len())..]
    }

    fn rotate(&mut self, direction: Direction) {
        match direction {
            Direction::Forward => self.clients.rotate_forward(),
            Direction::Backward => self.clients.rotate_backward(),
        }
        self.clients.set_current(0);
    }

    fn resize(&mut self, delta: f64) {
        self.ratio = (self.ratio + delta).clamp(MIN_RATIO, MAX_RATIO);
        trace!(ratio = self.ratio, "layout: tile ratio changed");
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Clamped to [0, width]
    fn master_width(&self, width: u32) -> u32 {
        (f64::from(width) * self.ratio).floor().clamp(0.0, f64::from(width)) as u32
    }
}

impl Layout for Tile {
    fn name(&self) -> &'static str { "tile" }

    fn add(&mut self, client: Client) {
        trace!(client = %client.id(), "layout: tile add");
        self.clients.push_front(client);
    }

    fn remove(&mut self, id: ClientId) -> Option<Client> {
        let removed = self.clients.remove(id)?;
        trace!(client = %id, "layout: tile remove");
        Some(removed)
    }

    fn focus(&mut self, id: ClientId) -> bool { self.clients.focus(id) }

    fn focused(&self) -> Option<ClientId> { self.clients.current_id() }

    fn clients(&self) -> Vec<&Client> { self.clients.iter().collect() }

    fn contains(&self, id: ClientId) -> bool { self.clients.contains(id) }

    fn len(&self) -> usize { self.clients.len() }

    fn arrange(&self, screen: &Rect) -> LayoutResult {
        let master = self.master();
        let slave = self.slave();
        let mut result =
            LayoutResult::with_capacity((master.len() + slave.len()).min(LAYOUT_INLINE_CAP));
        if master.is_empty() {
            return result;
        }

        let (master_column, slave_column) = if slave.is_empty() {
            (*screen, Rect::default())
        } else {
            split_horizontal(screen, self.master_width(screen.width))
        };

        let master_rows = divide_rows(&master_column, master.len());
        result.extend(master.iter().map(Client::id).zip(master_rows));
        let slave_rows = divide_rows(&slave_column, slave.len());
        result.extend(slave.iter().map(Client::id).zip(slave_rows));
        result
    }

    fn command(&mut self, command: LayoutCommand) -> bool {
        match command {
            LayoutCommand::Up => self.rotate(Direction::Backward),
            LayoutCommand::Down => self.rotate(Direction::Forward),
            LayoutCommand::Next => self.clients.step(Direction::Backward),
            LayoutCommand::Previous => self.clients.step(Direction::Forward),
            LayoutCommand::IncreaseRatio => self.resize(self.ratio_increment),
            LayoutCommand::DecreaseRatio => self.resize(-self.ratio_increment),
            LayoutCommand::IncreaseMaster => self.master_windows += 1,
            LayoutCommand::DecreaseMaster => {
                self.master_windows = self.master_windows.saturating_sub(1).max(1);
            }
            _ => return false,
        }
        true
    }

    fn info(&self, _screen: &Rect) -> LayoutInfo {
        snapshot(self, LayoutDetails::Tile {
            all: self.clients.names(),
            master: names(self.master()),
            slave: names(self.slave()),
            master_windows: self.master_windows,
            ratio: self.ratio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect { Rect::new(0, 0, 800, 600) }

    fn with(layout: Tile, names: &[&str]) -> Tile {
        let mut layout = layout;
        for (i, name) in names.iter().enumerate() {
            layout.add(Client::new(i as u64 + 1, *name));
        }
        layout
    }

    fn focus_name(layout: &Tile) -> Option<String> {
        layout.focused_client().map(|c| c.name().to_string())
    }

    #[test]
    fn test_new_validates() {
        assert_eq!(Tile::new(0, 0.5, 0.1).unwrap_err(), LayoutError::InvalidMasterCount);
        assert_eq!(Tile::new(1, 1.5, 0.1).unwrap_err(), LayoutError::InvalidRatio(1.5));
        assert_eq!(Tile::new(1, 0.5, 0.0).unwrap_err(), LayoutError::InvalidRatio(0.0));
        assert!(Tile::new(1, f64::NAN, 0.1).is_err());
        assert!(Tile::new(2, 0.5, 0.1).is_ok());
    }

    #[test]
    fn test_tile_updown() {
        let mut layout = with(Tile::default(), &["one", "two", "three"]);
        assert_eq!(layout.clients.names(), ["three", "two", "one"]);
        layout.command(LayoutCommand::Down);
        assert_eq!(layout.clients.names(), ["two", "one", "three"]);
        assert_eq!(focus_name(&layout).as_deref(), Some("two"));
        layout.command(LayoutCommand::Up);
        assert_eq!(layout.clients.names(), ["three", "two", "one"]);
        assert_eq!(focus_name(&layout).as_deref(), Some("three"));
    }

    #[test]
    fn test_tile_nextprev() {
        let mut layout = with(Tile::default(), &["one", "two", "three"]);
        assert_eq!(focus_name(&layout).as_deref(), Some("three"));
        layout.command(LayoutCommand::Previous);
        assert_eq!(focus_name(&layout).as_deref(), Some("two"));
        layout.command(LayoutCommand::Next);
        assert_eq!(focus_name(&layout).as_deref(), Some("three"));
        layout.command(LayoutCommand::Next);
        assert_eq!(focus_name(&layout).as_deref(), Some("one"));
        for _ in 0..3 {
            layout.command(LayoutCommand::Next);
        }
        assert_eq!(focus_name(&layout).as_deref(), Some("one"));
    }

    #[test]
    fn test_tile_master_and_slave() {
        let layout = with(Tile::default(), &["one", "two", "three"]);
        assert_eq!(names(layout.master()), ["three"]);
        assert_eq!(names(layout.slave()), ["two", "one"]);

        let layout = with(Tile::new(2, DEFAULT_RATIO, DEFAULT_RATIO_INCREMENT).unwrap(), &[
            "one", "two", "three",
        ]);
        assert_eq!(names(layout.master()), ["three", "two"]);
        assert_eq!(names(layout.slave()), ["one"]);
    }

    #[test]
    fn test_tile_remove() {
        let mut layout = with(Tile::default(), &["one", "two", "three"]);
        assert_eq!(names(layout.master()), ["three"]);
        layout.remove(ClientId(1));
        assert_eq!(names(layout.master()), ["three"]);
        layout.remove(ClientId(3));
        assert_eq!(names(layout.master()), ["two"]);
        assert_eq!(focus_name(&layout).as_deref(), Some("two"));
    }

    #[test]
    fn test_tile_geometry() {
        let layout = with(Tile::default(), &["one", "two", "three"]);
        assert_eq!(layout.arrange(&screen()).as_slice(), &[
            (ClientId(3), Rect::new(0, 0, 494, 600)),
            (ClientId(2), Rect::new(494, 0, 306, 300)),
            (ClientId(1), Rect::new(494, 300, 306, 300)),
        ]);
    }

    #[test]
    fn test_tile_single_client_fills_region() {
        let layout = with(Tile::default(), &["one"]);
        assert_eq!(layout.arrange(&screen()).as_slice(), &[(ClientId(1), screen())]);
    }

    #[test]
    fn test_tile_masters_only_take_full_width() {
        let layout = with(Tile::new(3, 0.5, 0.1).unwrap(), &["one", "two"]);
        assert_eq!(layout.arrange(&screen()).as_slice(), &[
            (ClientId(2), Rect::new(0, 0, 800, 300)),
            (ClientId(1), Rect::new(0, 300, 800, 300)),
        ]);
    }

    #[test]
    fn test_tile_ratio_commands_clamp() {
        let mut layout = Tile::default();
        for _ in 0..30 {
            layout.command(LayoutCommand::IncreaseRatio);
        }
        assert!((layout.ratio() - MAX_RATIO).abs() < f64::EPSILON);
        for _ in 0..30 {
            layout.command(LayoutCommand::DecreaseRatio);
        }
        assert!((layout.ratio() - MIN_RATIO).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tile_master_commands() {
        let mut layout = with(Tile::default(), &["one", "two", "three"]);
        layout.command(LayoutCommand::IncreaseMaster);
        assert_eq!(names(layout.master()), ["three", "two"]);
        layout.command(LayoutCommand::DecreaseMaster);
        layout.command(LayoutCommand::DecreaseMaster);
        assert_eq!(layout.master_windows(), 1);
    }

    #[test]
    fn test_tile_rotation_round_trip() {
        let mut layout = with(Tile::default(), &["a", "b", "c", "d"]);
        let before = layout.clients.names();
        layout.command(LayoutCommand::Up);
        layout.command(LayoutCommand::Up);
        layout.command(LayoutCommand::Down);
        layout.command(LayoutCommand::Down);
        assert_eq!(layout.clients.names(), before);
    }

    #[test]
    fn test_tile_covers_region_exactly() {
        let region = Rect::new(7, 11, 1013, 767);
        for masters in 1..=3 {
            let mut layout = Tile::new(masters, 0.6, 0.05).unwrap();
            for n in 1..=12_u64 {
                layout.add(Client::new(n, format!("c{n}")));
                let result = layout.arrange(&region);
                assert_eq!(result.len(), layout.len());
                let area: u64 = result.iter().map(|(_, frame)| frame.area()).sum();
                assert_eq!(area, region.area(), "masters={masters} n={n}");
                for (i, (_, a)) in result.iter().enumerate() {
                    assert!(region.contains_rect(a));
                    for (_, b) in result.iter().skip(i + 1) {
                        assert!(!a.overlaps(b), "{a} overlaps {b}");
                    }
                }
            }
        }
    }
}
