//! Geometry primitives shared by menus, panel groups and hit-testing
//!
//! All coordinates are window coordinates in logical pixels. Functions here
//! are pure and can be tested without any host.

use serde::{Deserialize, Serialize};

/// A point in window coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Rectangle for layout and containment tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: the right and bottom edges belong to the neighbour
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.contains(point.x, point.y)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Main axis of a panel group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Panels laid out left to right; handles are dragged along x
    #[default]
    Horizontal,
    /// Panels stacked top to bottom; handles are dragged along y
    Vertical,
}

impl Direction {
    /// Project a pointer displacement onto this axis
    #[inline]
    pub fn project(&self, from: Point, to: Point) -> f32 {
        match self {
            Direction::Horizontal => to.x - from.x,
            Direction::Vertical => to.y - from.y,
        }
    }

    /// Length of a rectangle along this axis
    #[inline]
    pub fn extent(&self, rect: &Rect) -> f32 {
        match self {
            Direction::Horizontal => rect.width,
            Direction::Vertical => rect.height,
        }
    }
}
