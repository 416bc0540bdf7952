//! Geometry primitives
//!
//! Clamping, the anchor edge (`Gravity`) and the sign conventions that turn
//! raw screen-axis deltas into edge-relative ones.

use serde::{Deserialize, Serialize};

/// Distance from the anchor edge to a panel's far edge
pub type Offset = f64;

/// Extent of a panel along its gravity axis
pub type Size = f64;

/// Clamp `value` into `[min, max]`
///
/// Total for `min == max` (a fixed-size panel). Callers guarantee `min <= max`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Host edge a panel is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gravity {
    Left,
    Right,
    Top,
    Bottom,
}

impl Gravity {
    /// All gravities for iteration
    pub const ALL: [Gravity; 4] = [Gravity::Left, Gravity::Right, Gravity::Top, Gravity::Bottom];

    /// Screen axis the panel's size is measured along
    pub fn axis(&self) -> Axis {
        match self {
            Gravity::Left | Gravity::Right => Axis::Horizontal,
            Gravity::Top | Gravity::Bottom => Axis::Vertical,
        }
    }

    /// Edge-relative component of a screen-space vector.
    ///
    /// Positive means "away from the anchor edge", so adding it to an offset
    /// always pulls the panel further into view:
    ///
    /// | gravity | pull into view | edge delta |
    /// |---------|----------------|------------|
    /// | bottom  | up (dy < 0)    | `-dy`      |
    /// | top     | down (dy > 0)  | `+dy`      |
    /// | left    | right (dx > 0) | `+dx`      |
    /// | right   | left (dx < 0)  | `-dx`      |
    pub fn edge_delta(&self, v: Vector) -> f64 {
        match self {
            Gravity::Bottom => -v.y,
            Gravity::Top => v.y,
            Gravity::Left => v.x,
            Gravity::Right => -v.x,
        }
    }

    /// Edge of a nested scroll surface facing away from the anchor
    ///
    /// Content resting against this edge has nothing left to reveal when the
    /// user drags toward the anchor, so the drag belongs to the panel.
    pub fn far_scroll_edge(&self) -> ScrollEdge {
        match self {
            Gravity::Bottom => ScrollEdge::Top,
            Gravity::Top => ScrollEdge::Bottom,
            Gravity::Left => ScrollEdge::Right,
            Gravity::Right => ScrollEdge::Left,
        }
    }
}

/// Axis for panel sizing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Resting edges of a scrollable surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollEdge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Screen-space vector (translation or velocity), y grows downward
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector of length `amount` pointing away from `gravity`'s anchor edge
    pub fn away_from(gravity: Gravity, amount: f64) -> Self {
        match gravity {
            Gravity::Bottom => Self::new(0.0, -amount),
            Gravity::Top => Self::new(0.0, amount),
            Gravity::Left => Self::new(amount, 0.0),
            Gravity::Right => Self::new(-amount, 0.0),
        }
    }
}
