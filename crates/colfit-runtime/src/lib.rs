#![forbid(unsafe_code)]

//! colfit runtime
//!
//! Stateful half of colfit: one [`ResponsiveVisibility`] per grid, fed by
//! a [`WidthObserver`] and read by the host renderer.
//!
//! # Key Components
//!
//! - [`ResponsiveVisibility`] - owns the visibility state, runs width updates and swap cycles
//! - [`ResponsiveOptions`] - feature switches (responsive updates, swap, switcher)
//! - [`SizeSource`] / [`ResizeSignal`] - where container widths come from
//! - [`WidthObserver`] - forwards size changes into a controller until detached
//! - `ResponsiveConfig` - TOML/JSON configuration (feature `config`)
//!
//! # How it fits
//!
//! ```text
//! SizeSource ──► WidthObserver ──► ResponsiveVisibility::update_width
//!                                        │  colfit_layout::VisibilityState transitions
//!                                        ▼
//!                                  change listener ──► renderer
//! ```
//!
//! Everything is single-threaded: controllers are shared as
//! `Rc<RefCell<ResponsiveVisibility>>` and callbacks run synchronously.

#[cfg(feature = "config")]
pub mod config;
pub mod controller;
pub mod observer;
pub mod options;
pub mod signal;

pub use colfit_layout::{BreakpointTable, ColumnId, TableError, VisibilityState};
#[cfg(feature = "config")]
pub use config::{BreakpointConfig, ConfigError, ResponsiveConfig, ResponsiveParts};
pub use controller::{ChangeListener, ResponsiveVisibility, SwitchStrategy};
pub use observer::{WidthObserver, WidthSink};
pub use options::ResponsiveOptions;
pub use signal::{ResizeSignal, SizeSource, Subscription};
