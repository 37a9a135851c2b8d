#![forbid(unsafe_code)]

//! Resize-driven width updates.
//!
//! [`WidthObserver::attach`] measures the source once, pushes that width
//! into the target synchronously, then forwards every later size report
//! until detached.
//!
//! # Invariants
//!
//! 1. Exactly one synchronous update happens during `attach`, even for a
//!    zero width.
//! 2. Later reports of zero or non-finite widths are dropped: hidden or
//!    collapsed elements report 0 and must not wipe the column set.
//! 3. After `detach` (or drop) the target receives no further updates
//!    from this observer. `detach` is idempotent.
//! 4. The observer holds the target weakly; it never keeps a grid alive.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::signal::{SizeSource, Subscription};

/// Anything that consumes container widths.
pub trait WidthSink {
    fn update_width(&mut self, width: f64);
}

/// Live link from a [`SizeSource`] to a [`WidthSink`].
#[derive(Debug)]
#[must_use = "dropping the observer detaches it immediately"]
pub struct WidthObserver {
    subscription: Option<Subscription>,
}

impl WidthObserver {
    /// Measure `source`, update `target`, and subscribe to further changes.
    pub fn attach<S, T>(source: &S, target: &Rc<RefCell<T>>) -> Self
    where
        S: SizeSource + ?Sized,
        T: WidthSink + 'static,
    {
        let initial = source.measure();
        target.borrow_mut().update_width(initial);
        debug!(width = initial, "width observer attached");

        let weak = Rc::downgrade(target);
        let subscription = source.observe(Box::new(move |width: f64| {
            if !width.is_finite() || width == 0.0 {
                trace!(width, "ignoring empty size report");
                return;
            }
            if let Some(target) = weak.upgrade() {
                target.borrow_mut().update_width(width);
            }
        }));

        Self {
            subscription: Some(subscription),
        }
    }

    /// Stop forwarding size changes. Safe to call repeatedly.
    pub fn detach(&mut self) {
        if self.subscription.take().is_some() {
            debug!("width observer detached");
        }
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
