#![forbid(unsafe_code)]

//! Responsive column visibility primitives.
//!
//! This crate holds the pure half of colfit: breakpoint tables, the width
//! resolver, and the state transitions behind the manual last-column
//! swap. Nothing here owns state across calls or emits notifications;
//! `colfit-runtime` stores the returned [`VisibilityState`] and tells the
//! renderer.
//!
//! # Key Types
//!
//! - [`BreakpointTable`] - validated `min_width → columns` map with a fallback list
//! - [`resolve`] - base visible columns for a width
//! - [`VisibilityState`] - width, emitted columns and stored swap for one grid
//! - [`switch_column`] - replace a clicked column with the first hidden one

pub mod column;
pub mod state;
pub mod switcher;
pub mod table;

pub use column::{ColumnId, column_list};
pub use state::{Cycle, CycleStep, VisibilityState, candidates};
pub use switcher::{ColumnSwitch, first_hidden, switch_column};
pub use table::{BreakpointEntry, BreakpointTable, BreakpointTableBuilder, TableError, resolve};
