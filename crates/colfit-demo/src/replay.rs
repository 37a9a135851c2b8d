#![forbid(unsafe_code)]

//! Drive a configured grid through a scripted sequence of events.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use colfit_runtime::{ColumnId, ResizeSignal, ResponsiveVisibility, WidthObserver};
use tracing::info;

use crate::error::{DemoError, Result};

/// One scripted step.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Resize(f64),
    Cycle,
    Switch(ColumnId),
}

/// A visible-column list the grid emitted, with what caused it.
#[derive(Debug, Clone, PartialEq)]
pub struct Emission {
    pub event: &'static str,
    pub width: f64,
    pub visible: Vec<String>,
    pub swapped: Option<String>,
}

impl Emission {
    fn capture(event: &'static str, grid: &ResponsiveVisibility) -> Self {
        Self {
            event,
            width: grid.container_width(),
            visible: grid
                .visible_columns()
                .iter()
                .map(ToString::to_string)
                .collect(),
            swapped: grid.swapped_last_column().map(ToString::to_string),
        }
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "event": self.event,
            "width": self.width,
            "visible": self.visible,
            "swapped": self.swapped,
        })
    }
}

impl fmt::Display for Emission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "event={} width={} visible={} swap={}",
            self.event,
            self.width,
            self.visible.join(","),
            self.swapped.as_deref().unwrap_or("-")
        )
    }
}

/// Attach the grid to a resize signal at `initial_width`, then run `steps`.
///
/// Only steps that made the grid emit produce an [`Emission`].
pub fn replay(grid: ResponsiveVisibility, initial_width: f64, steps: &[Step]) -> Vec<Emission> {
    let emitted = Rc::new(Cell::new(0_u64));
    let counter = Rc::clone(&emitted);
    let grid = Rc::new(RefCell::new(
        grid.with_listener(move |_: &[ColumnId]| counter.set(counter.get() + 1)),
    ));

    let signal = ResizeSignal::new(initial_width);
    let mut out = Vec::new();
    let mut last_seen = 0;
    let mut record = |event: &'static str, out: &mut Vec<Emission>| {
        if emitted.get() != last_seen {
            last_seen = emitted.get();
            out.push(Emission::capture(event, &grid.borrow()));
        }
    };

    let mut observer = WidthObserver::attach(&signal, &grid);
    record("attach", &mut out);

    for step in steps {
        let event = match step {
            Step::Resize(width) => {
                signal.set_width(*width);
                "resize"
            }
            Step::Cycle => {
                grid.borrow_mut().cycle_swap();
                "cycle"
            }
            Step::Switch(column) => {
                grid.borrow_mut().switch_column(column);
                "switch"
            }
        };
        record(event, &mut out);
    }

    observer.detach();
    info!(steps = steps.len(), emissions = out.len(), "replay finished");
    out
}

/// Split widths into the attach width and the resize steps that follow.
pub fn split_widths(widths: &[f64]) -> Result<(f64, Vec<Step>)> {
    let (first, rest) = widths.split_first().ok_or(DemoError::NoWidths)?;
    Ok((*first, rest.iter().copied().map(Step::Resize).collect()))
}
