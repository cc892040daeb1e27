//! Bounded most-recently-used color history.

use std::collections::HashSet;

use super::Rgba;

/// Number of history slots exposed to the display layer.
pub const HISTORY_SLOTS: usize = 4;

/// An ordered list of up to four distinct recently-picked colors,
/// most-recently-inserted first.
///
/// Membership is tracked by the color's packed `u32` identity so duplicate
/// checks are O(1). Inserting a color that is already present is a no-op:
/// it neither moves the entry to the front nor evicts anything.
#[derive(Debug, Clone, Default)]
pub struct ColorHistory {
    colors: Vec<Rgba>,
    members: HashSet<u32>,
}

impl ColorHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a picked color. When a new color would grow the history past
    /// four entries, the least-recently-inserted one is evicted first.
    /// Returns true if the slot list changed.
    pub fn insert(&mut self, color: Rgba) -> bool {
        if self.members.contains(&color.pack()) {
            return false;
        }
        if self.colors.len() == HISTORY_SLOTS {
            if let Some(evicted) = self.colors.pop() {
                self.members.remove(&evicted.pack());
            }
        }
        self.colors.insert(0, color);
        self.members.insert(color.pack());
        true
    }

    /// The color in a given slot (0 = most recent), if that slot is filled.
    pub fn get(&self, slot: usize) -> Option<Rgba> {
        self.colors.get(slot).copied()
    }

    /// All filled slots, most-recent-first. This is the "history changed"
    /// payload the display layer renders.
    #[inline]
    pub fn slots(&self) -> &[Rgba] {
        &self.colors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
