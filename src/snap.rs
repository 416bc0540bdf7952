//! Detent snapping for `PanelConfig::adjust_range`

use std::rc::Rc;

use crate::geometry::{clamp, Size};
use crate::panel::AdjustFn;

/// Sorted set of sizes a panel snaps to when a drag settles
#[derive(Debug, Clone, PartialEq)]
pub struct Detents {
    stops: Vec<Size>,
}

impl Detents {
    /// Non-finite stops are dropped; order and duplicates don't matter
    pub fn new(stops: impl IntoIterator<Item = Size>) -> Self {
        let mut stops: Vec<Size> = stops.into_iter().filter(|s| s.is_finite()).collect();
        stops.sort_by(|a, b| a.total_cmp(b));
        stops.dedup();
        Self { stops }
    }

    pub fn stops(&self) -> &[Size] {
        &self.stops
    }

    /// Closest stop to `size`; ties go to the larger stop. Without stops the
    /// size passes through.
    pub fn nearest(&self, size: Size) -> Size {
        let idx = self.stops.partition_point(|s| *s < size);
        let above = self.stops.get(idx).copied();
        let below = idx.checked_sub(1).and_then(|i| self.stops.get(i)).copied();
        match (below, above) {
            (Some(b), Some(a)) => {
                if size - b < a - size {
                    b
                } else {
                    a
                }
            }
            (Some(b), None) => b,
            (None, Some(a)) => a,
            (None, None) => size,
        }
    }

    /// Pull every stop into `[min, max]`, merging the ones that collapse
    pub fn within(self, min: Size, max: Size) -> Self {
        Self::new(self.stops.into_iter().map(|s| clamp(s, min, max)))
    }

    pub fn into_adjust_fn(self) -> AdjustFn {
        Rc::new(move |size| self.nearest(size))
    }
}
