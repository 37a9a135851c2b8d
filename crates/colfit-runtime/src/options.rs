#![forbid(unsafe_code)]

//! Feature switches for a [`ResponsiveVisibility`](crate::ResponsiveVisibility).

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

/// Which parts of the visibility engine are active.
///
/// Defaults: responsive updates on, last-column swap on, clicked-column
/// switcher off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct ResponsiveOptions {
    /// Recompute visible columns on width changes.
    #[cfg_attr(feature = "config", serde(alias = "enableResponsiveColumns"))]
    pub enabled: bool,

    /// Allow `cycle_swap` and apply the stored swap on width changes.
    #[cfg_attr(feature = "config", serde(alias = "lastColumnSwitchable"))]
    pub swap_enabled: bool,

    /// Allow `switch_column`.
    #[cfg_attr(feature = "config", serde(alias = "enableColumnSwitcher"))]
    pub switcher_enabled: bool,
}

impl Default for ResponsiveOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            swap_enabled: true,
            switcher_enabled: false,
        }
    }
}

impl ResponsiveOptions {
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn swap_enabled(mut self, swap_enabled: bool) -> Self {
        self.swap_enabled = swap_enabled;
        self
    }

    #[must_use]
    pub fn switcher_enabled(mut self, switcher_enabled: bool) -> Self {
        self.switcher_enabled = switcher_enabled;
        self
    }
}
