#![forbid(unsafe_code)]

//! Clicked-column switching.
//!
//! Unlike the last-slot swap, a switch replaces whichever visible column
//! the user clicked with the first known column that is currently hidden.

use crate::column::ColumnId;

/// Outcome of [`switch_column`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSwitch {
    /// Hidden column chosen to come in.
    pub replacement: ColumnId,
    /// `visible` with the clicked column replaced.
    pub columns: Vec<ColumnId>,
}

/// First known column not present in `visible`.
#[must_use]
pub fn first_hidden<'a>(visible: &[ColumnId], known_columns: &'a [ColumnId]) -> Option<&'a ColumnId> {
    known_columns.iter().find(|id| !visible.contains(id))
}

/// Replace `clicked` in `visible` with the first hidden known column.
///
/// Returns `None` when every known column is already visible. A `clicked`
/// id that is not visible leaves the list as it was.
#[must_use]
pub fn switch_column(
    visible: &[ColumnId],
    clicked: &ColumnId,
    known_columns: &[ColumnId],
) -> Option<ColumnSwitch> {
    let replacement = first_hidden(visible, known_columns)?.clone();
    let columns = visible
        .iter()
        .map(|id| {
            if id == clicked {
                replacement.clone()
            } else {
                id.clone()
            }
        })
        .collect();
    Some(ColumnSwitch {
        replacement,
        columns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::column_list;

    #[test]
    fn replaces_clicked_with_first_hidden() {
        let visible = column_list(["firstName", "age", "email"]);
        let known = column_list(["firstName", "lastName", "age", "email", "phone"]);
        let switch = switch_column(&visible, &"age".into(), &known).unwrap();
        assert_eq!(switch.replacement, "lastName");
        assert_eq!(switch.columns, ["firstName", "lastName", "email"]);
    }

    #[test]
    fn nothing_hidden_is_none() {
        let visible = column_list(["a", "b"]);
        let known = column_list(["b", "a"]);
        assert!(switch_column(&visible, &"a".into(), &known).is_none());
    }

    #[test]
    fn unknown_click_keeps_list() {
        let visible = column_list(["a", "b"]);
        let known = column_list(["a", "b", "c"]);
        let switch = switch_column(&visible, &"zzz".into(), &known).unwrap();
        assert_eq!(switch.replacement, "c");
        assert_eq!(switch.columns, visible);
    }
}
