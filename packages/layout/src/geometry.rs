//! Screen geometry used by every layout pass.
//!
//! All coordinates are integer pixels. Whenever an area has to be divided into
//! equal parts the integer remainder goes to the last part, so a division never
//! loses pixels.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A list of bands produced by [`divide_columns`] or [`divide_rows`].
pub type Bands = SmallVec<[Rect; 8]>;

// ============================================================================
// Rect
// ============================================================================

/// A screen region or a window placement, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of the origin (top-left corner).
    pub x: i32,
    /// Y coordinate of the origin (top-left corner).
    pub y: i32,
    /// Width of the rectangle.
    pub width: u32,
    /// Height of the rectangle.
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the x coordinate just past the right edge.
    #[must_use]
    pub const fn right(&self) -> i64 { self.x as i64 + self.width as i64 }

    /// Returns the y coordinate just past the bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> i64 { self.y as i64 + self.height as i64 }

    /// Returns the area of the rectangle.
    #[must_use]
    pub const fn area(&self) -> u64 { self.width as u64 * self.height as u64 }

    /// Returns whether the rectangle covers no pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool { self.width == 0 || self.height == 0 }

    /// Returns whether the two rectangles share at least one pixel.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && (self.x as i64) < other.right()
            && (other.x as i64) < self.right()
            && (self.y as i64) < other.bottom()
            && (other.y as i64) < self.bottom()
    }

    /// Returns whether `other` lies entirely inside this rectangle.
    #[must_use]
    pub const fn contains_rect(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.width, self.height)
    }
}

/// Moves `origin` forward by `delta` pixels.
pub(crate) const fn offset(origin: i32, delta: u32) -> i32 { origin.saturating_add_unsigned(delta) }

// ============================================================================
// Splitting
// ============================================================================

/// Splits a frame horizontally (left/right) at `width` pixels from the left edge.
///
/// `width` is clamped to the frame, so the two halves always tile the frame.
///
/// # Returns
///
/// A tuple of (`left_frame`, `right_frame`)
#[must_use]
pub fn split_horizontal(frame: &Rect, width: u32) -> (Rect, Rect) {
    let width = width.min(frame.width);
    let left = Rect::new(frame.x, frame.y, width, frame.height);
    let right = Rect::new(offset(frame.x, width), frame.y, frame.width - width, frame.height);
    (left, right)
}

/// Splits a frame vertically (top/bottom) at `height` pixels from the top edge.
///
/// # Returns
///
/// A tuple of (`top_frame`, `bottom_frame`)
#[must_use]
pub fn split_vertical(frame: &Rect, height: u32) -> (Rect, Rect) {
    let height = height.min(frame.height);
    let top = Rect::new(frame.x, frame.y, frame.width, height);
    let bottom = Rect::new(frame.x, offset(frame.y, height), frame.width, frame.height - height);
    (top, bottom)
}

/// Divides a frame into `count` side-by-side columns of equal width.
///
/// The last column absorbs the remainder of the integer division.
#[must_use]
pub fn divide_columns(frame: &Rect, count: usize) -> Bands {
    let Some(count) = band_count(count) else {
        return Bands::new();
    };
    let width = frame.width / count;
    (0..count)
        .map(|i| {
            let x = width * i;
            let w = if i == count - 1 { frame.width - x } else { width };
            Rect::new(offset(frame.x, x), frame.y, w, frame.height)
        })
        .collect()
}

/// Divides a frame into `count` stacked rows of equal height.
///
/// The last row absorbs the remainder of the integer division.
#[must_use]
pub fn divide_rows(frame: &Rect, count: usize) -> Bands {
    let Some(count) = band_count(count) else {
        return Bands::new();
    };
    let height = frame.height / count;
    (0..count)
        .map(|i| {
            let y = height * i;
            let h = if i == count - 1 { frame.height - y } else { height };
            Rect::new(frame.x, offset(frame.y, y), frame.width, h)
        })
        .collect()
}

fn band_count(count: usize) -> Option<u32> {
    u32::try_from(count).ok().filter(|&count| count > 0)
}

// ============================================================================
// Side
// ============================================================================

/// A screen edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The left edge.
    #[default]
    Left,
    /// The right edge.
    Right,
    /// The top edge.
    Top,
    /// The bottom edge.
    Bottom,
}

impl Side {
    /// All four edges, in the order a layout cycle usually visits them.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Carves a band of `thickness` pixels along this edge out of `frame`.
    ///
    /// The thickness is clamped to the frame.
    ///
    /// # Returns
    ///
    /// A tuple of (`band`, `remaining_frame`)
    #[must_use]
    pub fn carve(self, frame: &Rect, thickness: u32) -> (Rect, Rect) {
        match self {
            Self::Left => split_horizontal(frame, thickness),
            Self::Right => {
                let (rest, band) =
                    split_horizontal(frame, frame.width.saturating_sub(thickness));
                (band, rest)
            }
            Self::Top => split_vertical(frame, thickness),
            Self::Bottom => {
                let (rest, band) =
                    split_vertical(frame, frame.height.saturating_sub(thickness));
                (band, rest)
            }
        }
    }

    /// Returns the lowercase name of the edge.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}
