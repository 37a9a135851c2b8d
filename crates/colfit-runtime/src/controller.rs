#![forbid(unsafe_code)]

//! Per-grid visibility controller.
//!
//! [`ResponsiveVisibility`] owns the [`VisibilityState`] of one grid. Width
//! changes and swap requests run the pure transitions from
//! `colfit-layout`, store the result, and hand the new visible list to the
//! registered change listener.
//!
//! # Failure Modes
//!
//! - **Re-entrant mutation**: a listener that reaches back into the same
//!   controller through an `Rc<RefCell<..>>` while it is being updated
//!   will panic on the borrow. Listeners should only read the slice they
//!   receive.
//! - **Empty result**: a width no breakpoint covers with no default list
//!   emits an empty slice. This is a valid state, not an error.

use std::fmt;

use colfit_layout::{
    BreakpointTable, ColumnId, CycleStep, VisibilityState, switch_column,
};
use tracing::{debug, debug_span, trace};

use crate::observer::WidthSink;
use crate::options::ResponsiveOptions;

/// Receives every emitted visible-column list.
pub type ChangeListener = Box<dyn FnMut(&[ColumnId])>;

/// Overrides the list produced by [`ResponsiveVisibility::switch_column`].
///
/// Called with the current visible list, the clicked column and the
/// replacement the default rule picked.
pub type SwitchStrategy = Box<dyn Fn(&[ColumnId], &ColumnId, &ColumnId) -> Vec<ColumnId>>;

/// Responsive column visibility for one grid.
pub struct ResponsiveVisibility {
    table: BreakpointTable,
    /// Declared grid column order; candidate lists follow it.
    known_columns: Vec<ColumnId>,
    options: ResponsiveOptions,
    state: VisibilityState,
    listener: Option<ChangeListener>,
    switch_strategy: Option<SwitchStrategy>,
}

impl ResponsiveVisibility {
    /// Create a controller with default options and no listener.
    ///
    /// The state starts at width 0 with nothing visible until the first
    /// [`update_width`](Self::update_width).
    pub fn new<I, S>(table: BreakpointTable, known_columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ColumnId>,
    {
        Self {
            table,
            known_columns: known_columns.into_iter().map(Into::into).collect(),
            options: ResponsiveOptions::default(),
            state: VisibilityState::new(),
            listener: None,
            switch_strategy: None,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ResponsiveOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_listener(mut self, listener: impl FnMut(&[ColumnId]) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    #[must_use]
    pub fn with_switch_strategy(
        mut self,
        strategy: impl Fn(&[ColumnId], &ColumnId, &ColumnId) -> Vec<ColumnId> + 'static,
    ) -> Self {
        self.switch_strategy = Some(Box::new(strategy));
        self
    }

    /// Register the change listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl FnMut(&[ColumnId]) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn set_options(&mut self, options: ResponsiveOptions) {
        self.options = options;
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Recompute the visible columns for a new container width and emit.
    ///
    /// No-op while responsive updates are disabled. Emits even when the
    /// resulting list is unchanged.
    pub fn update_width(&mut self, width: f64) {
        if !self.options.enabled {
            return;
        }
        let _span = debug_span!("colfit.update_width", width).entered();

        if let Some((from, to)) = self
            .table
            .detect_transition(self.state.container_width(), width)
        {
            debug!(?from, ?to, "breakpoint transition");
        }

        let next = self
            .state
            .with_width(width, &self.table, self.options.swap_enabled);
        if next.swap_paused(&self.table, self.options.swap_enabled) {
            trace!(
                swap = ?next.swapped_last_column(),
                "swapped column already visible; swap paused"
            );
        }
        self.commit(next);
    }

    /// Step the last-column swap to the next hidden candidate.
    ///
    /// The first call swaps in the first candidate; after the last
    /// candidate the swap is cleared and the base list restored. No-op
    /// when swapping is disabled, or when nothing is hidden and no swap is
    /// active.
    pub fn cycle_swap(&mut self) {
        if !self.options.swap_enabled {
            return;
        }
        let _span = debug_span!("colfit.cycle_swap", width = self.state.container_width()).entered();

        let Some(cycle) = self.state.cycled(&self.table, &self.known_columns) else {
            trace!("no hidden columns to swap in");
            return;
        };
        match &cycle.step {
            CycleStep::Activated(column) => debug!(%column, "swap activated"),
            CycleStep::Advanced { from, to } => debug!(%from, %to, "swap advanced"),
            CycleStep::Reverted { from } => debug!(%from, "swap cleared"),
        }
        self.commit(cycle.state);
    }

    /// Replace `clicked` with the first hidden known column and emit.
    ///
    /// No-op when the switcher is disabled or nothing is hidden. The
    /// stored swap is left untouched; the next width update recomputes
    /// from the breakpoint table.
    pub fn switch_column(&mut self, clicked: &ColumnId) {
        if !self.options.switcher_enabled {
            return;
        }
        let current = self.state.visible_columns();
        let Some(switch) = switch_column(current, clicked, &self.known_columns) else {
            trace!(%clicked, "no hidden columns to switch in");
            return;
        };
        let columns = match &self.switch_strategy {
            Some(strategy) => strategy(current, clicked, &switch.replacement),
            None => switch.columns,
        };
        debug!(%clicked, replacement = %switch.replacement, "column switched");
        let next = self.state.with_visible(columns);
        self.commit(next);
    }

    fn commit(&mut self, next: VisibilityState) {
        self.state = next;
        debug!(
            width = self.state.container_width(),
            visible = self.state.visible_columns().len(),
            "visible columns updated"
        );
        if let Some(listener) = self.listener.as_mut() {
            listener(self.state.visible_columns());
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Last emitted visible columns. Does not recompute.
    #[must_use]
    pub fn visible_columns(&self) -> &[ColumnId] {
        self.state.visible_columns()
    }

    #[must_use]
    pub fn container_width(&self) -> f64 {
        self.state.container_width()
    }

    #[must_use]
    pub fn swapped_last_column(&self) -> Option<&ColumnId> {
        self.state.swapped_last_column()
    }

    /// Base columns the breakpoint table alone would show at `width`.
    #[must_use]
    pub fn default_visible_columns(&self, width: f64) -> &[ColumnId] {
        self.table.resolve(width)
    }

    #[must_use]
    pub fn state(&self) -> &VisibilityState {
        &self.state
    }

    #[must_use]
    pub fn table(&self) -> &BreakpointTable {
        &self.table
    }

    #[must_use]
    pub fn known_columns(&self) -> &[ColumnId] {
        &self.known_columns
    }

    #[must_use]
    pub fn options(&self) -> ResponsiveOptions {
        self.options
    }
}

impl WidthSink for ResponsiveVisibility {
    fn update_width(&mut self, width: f64) {
        ResponsiveVisibility::update_width(self, width);
    }
}

impl fmt::Debug for ResponsiveVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponsiveVisibility")
            .field("table", &self.table)
            .field("known_columns", &self.known_columns)
            .field("options", &self.options)
            .field("state", &self.state)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
