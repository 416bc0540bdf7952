//! Per-edge panel stacks
//!
//! Insertion order is z-order is open order. Only the topmost panel of a stack
//! is active (receives gestures); every panel below it is occluded.

use crate::geometry::Gravity;
use crate::panel::PanelId;

/// Ordered panels presented on one edge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    panel_ids: Vec<PanelId>,
}

impl Stack {
    /// Topmost (visible, active) panel
    pub fn top(&self) -> Option<PanelId> {
        self.panel_ids.last().copied()
    }

    pub fn contains(&self, panel_id: PanelId) -> bool {
        self.panel_ids.contains(&panel_id)
    }

    /// Panel directly beneath `panel_id`, if any
    pub fn below(&self, panel_id: PanelId) -> Option<PanelId> {
        let index = self.panel_ids.iter().position(|id| *id == panel_id)?;
        index.checked_sub(1).map(|i| self.panel_ids[i])
    }

    pub fn push(&mut self, panel_id: PanelId) {
        self.panel_ids.push(panel_id);
    }

    /// Remove a panel, returning whether it was present
    pub fn remove(&mut self, panel_id: PanelId) -> bool {
        match self.panel_ids.iter().position(|id| *id == panel_id) {
            Some(index) => {
                self.panel_ids.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn panel_ids(&self) -> &[PanelId] {
        &self.panel_ids
    }

    pub fn len(&self) -> usize {
        self.panel_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panel_ids.is_empty()
    }
}

/// Stacks for all four edges
#[derive(Debug, Clone, Default)]
pub struct StackLayout {
    pub left: Stack,
    pub right: Stack,
    pub top: Stack,
    pub bottom: Stack,
}

impl StackLayout {
    /// Get stack by gravity
    pub fn stack(&self, gravity: Gravity) -> &Stack {
        match gravity {
            Gravity::Left => &self.left,
            Gravity::Right => &self.right,
            Gravity::Top => &self.top,
            Gravity::Bottom => &self.bottom,
        }
    }

    /// Get mutable stack by gravity
    pub fn stack_mut(&mut self, gravity: Gravity) -> &mut Stack {
        match gravity {
            Gravity::Left => &mut self.left,
            Gravity::Right => &mut self.right,
            Gravity::Top => &mut self.top,
            Gravity::Bottom => &mut self.bottom,
        }
    }

    /// Find which edge presents a panel
    pub fn find_panel(&self, panel_id: PanelId) -> Option<Gravity> {
        Gravity::ALL
            .into_iter()
            .find(|&gravity| self.stack(gravity).contains(panel_id))
    }

    /// Total number of presented panels
    pub fn len(&self) -> usize {
        Gravity::ALL.iter().map(|&g| self.stack(g).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
