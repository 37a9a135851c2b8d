#![forbid(unsafe_code)]

//! Visibility state and its pure transitions.
//!
//! [`VisibilityState`] is the value a grid view-model stores between
//! events. Every transition takes the previous state by reference and
//! returns the next one; nothing here mutates in place or emits.
//!
//! # Swap state machine
//!
//! ```text
//!   Unswapped --cycle (candidates exist)--> SwappedAt(first)
//!   SwappedAt(c) --cycle (successor)------> SwappedAt(next)
//!   SwappedAt(last) --cycle---------------> Unswapped
//!   SwappedAt(c) --width change-----------> SwappedAt(c), applied only
//!                                           when c is absent from base
//! ```
//!
//! A swap whose column is already in the new base list is paused, not
//! cleared: `swapped_last_column` keeps the id and a later width where the
//! column is hidden again re-applies it.
//!
//! # Invariants
//!
//! 1. `visible_columns` is always the base list for `container_width`,
//!    with at most its last slot replaced.
//! 2. Cycling with `N` candidates returns to Unswapped after `N + 1` steps.
//! 3. Replacing the last slot of an empty base list leaves it empty.

use crate::column::ColumnId;
use crate::table::BreakpointTable;

/// Width, emitted column list and manual swap of one grid.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityState {
    container_width: f64,
    visible_columns: Vec<ColumnId>,
    swapped_last_column: Option<ColumnId>,
}

/// What a swap cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleStep {
    /// Unswapped → first candidate.
    Activated(ColumnId),
    /// Moved to the next candidate.
    Advanced { from: ColumnId, to: ColumnId },
    /// Ran off the end of the candidate list; swap cleared.
    Reverted { from: ColumnId },
}

/// Result of [`VisibilityState::cycled`].
#[derive(Debug, Clone, PartialEq)]
pub struct Cycle {
    pub state: VisibilityState,
    pub step: CycleStep,
}

impl VisibilityState {
    /// Width 0, no visible columns, no swap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    #[must_use]
    pub fn visible_columns(&self) -> &[ColumnId] {
        &self.visible_columns
    }

    #[must_use]
    pub fn swapped_last_column(&self) -> Option<&ColumnId> {
        self.swapped_last_column.as_ref()
    }

    #[must_use]
    pub fn is_swapped(&self) -> bool {
        self.swapped_last_column.is_some()
    }

    /// Whether the stored swap is currently reflected in `visible_columns`.
    #[must_use]
    pub fn swap_applied(&self) -> bool {
        self.swapped_last_column
            .as_ref()
            .is_some_and(|swap| self.visible_columns.last() == Some(swap))
    }

    /// Whether a stored swap is held back because its column is already in
    /// the base list at the current width.
    #[must_use]
    pub fn swap_paused(&self, table: &BreakpointTable, swap_enabled: bool) -> bool {
        swap_enabled
            && self
                .swapped_last_column
                .as_ref()
                .is_some_and(|swap| table.resolve(self.container_width).contains(swap))
    }

    /// Re-derive the visible list for a new container width.
    ///
    /// When `swap_enabled` is false the stored swap is kept but ignored.
    #[must_use]
    pub fn with_width(&self, width: f64, table: &BreakpointTable, swap_enabled: bool) -> Self {
        let base = table.resolve(width);
        let visible_columns = match &self.swapped_last_column {
            Some(swap) if swap_enabled && !base.contains(swap) => splice_last(base, swap),
            _ => base.to_vec(),
        };
        Self {
            container_width: width,
            visible_columns,
            swapped_last_column: self.swapped_last_column.clone(),
        }
    }

    /// Advance the manual swap one step at the stored width.
    ///
    /// Returns `None` when nothing changes: no swap is active and every
    /// known column is already in the base list.
    #[must_use]
    pub fn cycled(&self, table: &BreakpointTable, known_columns: &[ColumnId]) -> Option<Cycle> {
        let base = table.resolve(self.container_width);
        let candidates = candidates(base, known_columns);

        let Some(current) = &self.swapped_last_column else {
            let first = candidates.first()?;
            return Some(Cycle {
                state: self.swapped_to(base, first.clone()),
                step: CycleStep::Activated(first.clone()),
            });
        };

        let next = candidates
            .iter()
            .position(|candidate| candidate == current)
            .and_then(|idx| candidates.get(idx + 1));

        Some(match next {
            Some(next) => Cycle {
                state: self.swapped_to(base, next.clone()),
                step: CycleStep::Advanced {
                    from: current.clone(),
                    to: next.clone(),
                },
            },
            None => Cycle {
                state: Self {
                    container_width: self.container_width,
                    visible_columns: base.to_vec(),
                    swapped_last_column: None,
                },
                step: CycleStep::Reverted {
                    from: current.clone(),
                },
            },
        })
    }

    /// Replace the visible list wholesale, keeping width and swap.
    #[must_use]
    pub fn with_visible(&self, visible_columns: Vec<ColumnId>) -> Self {
        Self {
            container_width: self.container_width,
            visible_columns,
            swapped_last_column: self.swapped_last_column.clone(),
        }
    }

    fn swapped_to(&self, base: &[ColumnId], swap: ColumnId) -> Self {
        Self {
            container_width: self.container_width,
            visible_columns: splice_last(base, &swap),
            swapped_last_column: Some(swap),
        }
    }
}

/// Known columns absent from `base`, in declared order.
#[must_use]
pub fn candidates(base: &[ColumnId], known_columns: &[ColumnId]) -> Vec<ColumnId> {
    known_columns
        .iter()
        .filter(|id| !base.contains(id))
        .cloned()
        .collect()
}

fn splice_last(base: &[ColumnId], column: &ColumnId) -> Vec<ColumnId> {
    let mut visible = base.to_vec();
    if let Some(last) = visible.last_mut() {
        *last = column.clone();
    }
    visible
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
