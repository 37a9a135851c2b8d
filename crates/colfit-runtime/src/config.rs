#![forbid(unsafe_code)]

//! Responsive column configuration as data.
//!
//! A [`ResponsiveConfig`] captures a grid's breakpoint table, its declared
//! columns and the feature switches, loaded from TOML or JSON.
//!
//! ```toml
//! known_columns = ["firstName", "lastName", "age", "email"]
//! default_columns = ["firstName", "lastName"]
//!
//! [options]
//! swap_enabled = true
//!
//! [[breakpoints]]
//! min_width = 1200
//! columns = ["firstName", "lastName", "age", "email"]
//!
//! [[breakpoints]]
//! min_width = 0
//! columns = ["firstName", "email"]
//! ```
//!
//! ```rust,ignore
//! let grid = ResponsiveConfig::from_toml_file("people-grid.toml")?.build()?;
//! let grid = ResponsiveConfig::from_json_str(json)?.build()?;
//! ```
//!
//! JSON written for the browser grid (camelCase: `minWidth`,
//! `defaultColumns`, `lastColumnSwitchable`, ...) is accepted as is.

use std::path::{Path, PathBuf};

use colfit_layout::{BreakpointEntry, BreakpointTable, ColumnId, TableError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::controller::ResponsiveVisibility;
use crate::options::ResponsiveOptions;

/// Failure loading or validating a [`ResponsiveConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid breakpoint table: {0}")]
    Table(#[from] TableError),
}

/// One `min_width → columns` row as written in a config file.
///
/// `min_width` is signed so a negative value reaches validation and is
/// reported as such instead of as a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakpointConfig {
    #[serde(alias = "minWidth")]
    pub min_width: i64,
    pub columns: Vec<ColumnId>,
}

/// Serialized form of a responsive grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsiveConfig {
    /// Declared column order. Derived from the table when absent.
    #[serde(alias = "knownColumns", skip_serializing_if = "Option::is_none")]
    pub known_columns: Option<Vec<ColumnId>>,

    #[serde(alias = "defaultColumns")]
    pub default_columns: Vec<ColumnId>,

    pub options: ResponsiveOptions,

    pub breakpoints: Vec<BreakpointConfig>,
}

/// Validated pieces of a [`ResponsiveConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResponsiveParts {
    pub table: BreakpointTable,
    pub known_columns: Vec<ColumnId>,
    pub options: ResponsiveOptions,
}

impl ResponsiveConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_str(&read(path.as_ref())?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json_str(&read(path.as_ref())?)
    }

    /// Load JSON for a `.json` extension, TOML otherwise.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_file(path)
        } else {
            Self::from_toml_file(path)
        }
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Validate the breakpoint table and settle the known column list.
    pub fn into_parts(self) -> Result<ResponsiveParts, ConfigError> {
        let entries = self
            .breakpoints
            .into_iter()
            .map(|bp| BreakpointEntry::from_signed(bp.min_width, bp.columns))
            .collect::<Result<Vec<_>, _>>()?;
        let table = BreakpointTable::new(entries, self.default_columns)?;
        let known_columns = match self.known_columns {
            Some(known) => known,
            None => table.referenced_columns(),
        };
        Ok(ResponsiveParts {
            table,
            known_columns,
            options: self.options,
        })
    }

    /// Validate and build a controller.
    pub fn build(self) -> Result<ResponsiveVisibility, ConfigError> {
        let parts = self.into_parts()?;
        Ok(ResponsiveVisibility::new(parts.table, parts.known_columns).with_options(parts.options))
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_round_trip_keeps_table() {
        let config = ResponsiveConfig {
            known_columns: Some(colfit_layout::column_list(["a", "b", "c"])),
            default_columns: colfit_layout::column_list(["a"]),
            options: ResponsiveOptions::default(),
            breakpoints: vec![BreakpointConfig {
                min_width: 600,
                columns: colfit_layout::column_list(["a", "b"]),
            }],
        };
        let text = config.to_toml_string().unwrap();
        let back = ResponsiveConfig::from_toml_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config = ResponsiveConfig::from_toml_str("").unwrap();
        assert!(config.breakpoints.is_empty());
        assert_eq!(config.options, ResponsiveOptions::default());
        let parts = config.into_parts().unwrap();
        assert!(parts.table.is_empty());
        assert!(parts.known_columns.is_empty());
    }

    #[test]
    fn negative_width_is_a_table_error() {
        let err = ResponsiveConfig::from_json_str(r#"{"breakpoints":[{"minWidth":-10,"columns":["a"]}]}"#)
            .unwrap()
            .into_parts()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Table(TableError::NegativeMinWidth { min_width: -10 })
        ));
    }
}
