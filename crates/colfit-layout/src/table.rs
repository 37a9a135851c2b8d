#![forbid(unsafe_code)]

//! Breakpoint tables and width resolution.
//!
//! A [`BreakpointTable`] maps minimum container widths to the column set
//! that applies once the container reaches that width, plus a fallback
//! list for widths no entry covers.
//!
//! # Usage
//!
//! ```
//! use colfit_layout::BreakpointTable;
//!
//! let table = BreakpointTable::builder()
//!     .breakpoint(1200, ["a", "b", "c", "d"])
//!     .breakpoint(768, ["a", "b", "d"])
//!     .breakpoint(0, ["a", "b"])
//!     .default_columns(["a"])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(table.resolve(1200.0), ["a", "b", "c", "d"]);
//! assert_eq!(table.resolve(900.0), ["a", "b", "d"]);
//! assert_eq!(table.resolve(-1.0), ["a"]);
//! ```
//!
//! # Invariants
//!
//! 1. No two entries share a `min_width`.
//! 2. Column ids are unique within an entry.
//! 3. Entries are stored widest first, so resolution is a linear scan
//!    that stops at the first entry whose `min_width <= width`.
//! 4. A width equal to an entry's `min_width` selects that entry.
//!
//! # Failure Modes
//!
//! Construction fails with [`TableError`] on duplicate or negative
//! minimum widths and on repeated ids inside one entry. Resolution never
//! fails: a width no entry covers (negative, NaN, or below every entry)
//! yields the default list, which may be empty.

use std::collections::HashSet;

use thiserror::Error;

use crate::column::ColumnId;

/// Rejected breakpoint table configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("duplicate breakpoint min_width {min_width}")]
    DuplicateMinWidth { min_width: u32 },

    #[error("breakpoint min_width {min_width} is negative")]
    NegativeMinWidth { min_width: i64 },

    #[error("breakpoint min_width {min_width} exceeds {max}", max = u32::MAX)]
    MinWidthOutOfRange { min_width: i64 },

    #[error("column `{column}` listed twice in breakpoint min_width {min_width}")]
    DuplicateColumn { min_width: u32, column: ColumnId },
}

/// Column set that applies once the container width reaches `min_width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointEntry {
    min_width: u32,
    columns: Vec<ColumnId>,
}

impl BreakpointEntry {
    #[must_use]
    pub fn new<I, S>(min_width: u32, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ColumnId>,
    {
        Self {
            min_width,
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Build an entry from a signed width, as read from configuration.
    pub fn from_signed<I, S>(min_width: i64, columns: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<ColumnId>,
    {
        if min_width < 0 {
            return Err(TableError::NegativeMinWidth { min_width });
        }
        let min_width =
            u32::try_from(min_width).map_err(|_| TableError::MinWidthOutOfRange { min_width })?;
        Ok(Self::new(min_width, columns))
    }

    #[must_use]
    pub fn min_width(&self) -> u32 {
        self.min_width
    }

    #[must_use]
    pub fn columns(&self) -> &[ColumnId] {
        &self.columns
    }

    /// Whether a container of `width` qualifies for this entry.
    #[must_use]
    pub fn covers(&self, width: f64) -> bool {
        width >= f64::from(self.min_width)
    }
}

/// Validated set of breakpoints plus a fallback column list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakpointTable {
    /// Sorted by descending `min_width`.
    breakpoints: Vec<BreakpointEntry>,
    default_columns: Vec<ColumnId>,
}

impl BreakpointTable {
    /// Validate and build a table.
    ///
    /// Entry order is irrelevant; entries are re-sorted widest first.
    pub fn new<I, S>(breakpoints: Vec<BreakpointEntry>, default_columns: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<ColumnId>,
    {
        let mut seen_widths = HashSet::with_capacity(breakpoints.len());
        for entry in &breakpoints {
            if !seen_widths.insert(entry.min_width) {
                return Err(TableError::DuplicateMinWidth {
                    min_width: entry.min_width,
                });
            }
            let mut seen_columns = HashSet::with_capacity(entry.columns.len());
            for column in &entry.columns {
                if !seen_columns.insert(column.as_str()) {
                    return Err(TableError::DuplicateColumn {
                        min_width: entry.min_width,
                        column: column.clone(),
                    });
                }
            }
        }

        let mut breakpoints = breakpoints;
        breakpoints.sort_by(|a, b| b.min_width.cmp(&a.min_width));

        Ok(Self {
            breakpoints,
            default_columns: default_columns.into_iter().map(Into::into).collect(),
        })
    }

    /// Start a table builder.
    #[must_use]
    pub fn builder() -> BreakpointTableBuilder {
        BreakpointTableBuilder::default()
    }

    /// Entries, widest first.
    #[must_use]
    pub fn breakpoints(&self) -> &[BreakpointEntry] {
        &self.breakpoints
    }

    #[must_use]
    pub fn default_columns(&self) -> &[ColumnId] {
        &self.default_columns
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty() && self.default_columns.is_empty()
    }

    /// Largest configured `min_width`, if any entry exists.
    #[must_use]
    pub fn max_min_width(&self) -> Option<u32> {
        self.breakpoints.first().map(BreakpointEntry::min_width)
    }

    /// The entry selected for `width`, or `None` when the default applies.
    #[must_use]
    pub fn active_entry(&self, width: f64) -> Option<&BreakpointEntry> {
        self.breakpoints.iter().find(|entry| entry.covers(width))
    }

    /// Base visible columns for `width`.
    #[must_use]
    pub fn resolve(&self, width: f64) -> &[ColumnId] {
        self.active_entry(width)
            .map_or(self.default_columns.as_slice(), BreakpointEntry::columns)
    }

    /// Check if a width change crosses into a different entry.
    ///
    /// Returns the `min_width` of the old and new entries (`None` meaning
    /// the default list) when they differ.
    #[must_use]
    pub fn detect_transition(
        &self,
        old_width: f64,
        new_width: f64,
    ) -> Option<(Option<u32>, Option<u32>)> {
        let old = self.active_entry(old_width).map(BreakpointEntry::min_width);
        let new = self.active_entry(new_width).map(BreakpointEntry::min_width);
        (old != new).then_some((old, new))
    }

    /// Every column the table mentions, first-seen order, widest entry
    /// first and defaults last.
    #[must_use]
    pub fn referenced_columns(&self) -> Vec<ColumnId> {
        let mut seen = HashSet::new();
        self.breakpoints
            .iter()
            .flat_map(|entry| entry.columns.iter())
            .chain(self.default_columns.iter())
            .filter(|column| seen.insert(column.as_str()))
            .cloned()
            .collect()
    }
}

/// Pure function form of [`BreakpointTable::resolve`].
#[must_use]
pub fn resolve(width: f64, table: &BreakpointTable) -> &[ColumnId] {
    table.resolve(width)
}

/// Incremental builder taking signed widths, validated on [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct BreakpointTableBuilder {
    breakpoints: Vec<(i64, Vec<ColumnId>)>,
    default_columns: Vec<ColumnId>,
}

impl BreakpointTableBuilder {
    #[must_use]
    pub fn breakpoint<I, S>(mut self, min_width: i64, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ColumnId>,
    {
        self.breakpoints
            .push((min_width, columns.into_iter().map(Into::into).collect()));
        self
    }

    #[must_use]
    pub fn default_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ColumnId>,
    {
        self.default_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Result<BreakpointTable, TableError> {
        let entries = self
            .breakpoints
            .into_iter()
            .map(|(min_width, columns)| BreakpointEntry::from_signed(min_width, columns))
            .collect::<Result<Vec<_>, _>>()?;
        BreakpointTable::new(entries, self.default_columns)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
