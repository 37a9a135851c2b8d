//! Property suites for breakpoint resolution and swap cycling.
//!
//! Tables are generated from random distinct widths over a small column
//! alphabet so that duplicate-width rejection never triggers.

use colfit_layout::{BreakpointEntry, BreakpointTable, ColumnId, VisibilityState, candidates};
use proptest::prelude::*;
use std::collections::BTreeSet;

const ALPHABET: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];

fn known_columns() -> Vec<ColumnId> {
    ALPHABET.iter().copied().map(ColumnId::from).collect()
}

fn column_subset() -> impl Strategy<Value = Vec<ColumnId>> {
    proptest::sample::subsequence(ALPHABET.to_vec(), 0..=ALPHABET.len())
        .prop_map(|ids| ids.into_iter().map(ColumnId::from).collect())
}

fn table_strategy() -> impl Strategy<Value = BreakpointTable> {
    (
        proptest::collection::btree_set(0u32..4000, 0..6),
        proptest::collection::vec(column_subset(), 6),
        column_subset(),
    )
        .prop_map(|(widths, column_sets, defaults): (BTreeSet<u32>, _, _)| {
            let entries = widths
                .into_iter()
                .zip(column_sets)
                .map(|(min_width, columns)| BreakpointEntry::new(min_width, columns))
                .collect();
            BreakpointTable::new(entries, defaults).expect("distinct widths")
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn widths_above_top_breakpoint_agree(
        table in table_strategy(),
        a in 0.0f64..10_000.0,
        b in 0.0f64..10_000.0,
    ) {
        let top = f64::from(table.max_min_width().unwrap_or(0));
        let w1 = top + a;
        let w2 = top + b;
        prop_assert_eq!(table.resolve(w1), table.resolve(w2));
    }

    #[test]
    fn resolve_is_deterministic(table in table_strategy(), width in -100.0f64..5000.0) {
        let first = table.resolve(width).to_vec();
        let second = table.resolve(width).to_vec();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_min_width_selects_its_entry(table in table_strategy()) {
        for entry in table.breakpoints() {
            prop_assert_eq!(table.resolve(f64::from(entry.min_width())), entry.columns());
        }
    }

    #[test]
    fn negative_width_is_default(table in table_strategy(), width in -5000.0f64..-0.001) {
        prop_assert_eq!(table.resolve(width), table.default_columns());
    }

    #[test]
    fn repeated_width_updates_are_stable(table in table_strategy(), width in 0.0f64..5000.0) {
        let once = VisibilityState::new().with_width(width, &table, true);
        let twice = once.with_width(width, &table, true);
        prop_assert_eq!(once.visible_columns(), twice.visible_columns());
    }

    #[test]
    fn cycle_terminates_after_candidates_plus_one(
        table in table_strategy(),
        width in 0.0f64..5000.0,
    ) {
        let known = known_columns();
        let start = VisibilityState::new().with_width(width, &table, true);
        let base = table.resolve(width).to_vec();
        let n = candidates(&base, &known).len();
        prop_assume!(n > 0);

        let mut state = start;
        for _ in 0..n {
            state = state.cycled(&table, &known).expect("candidate available").state;
            prop_assert!(state.is_swapped());
        }
        state = state.cycled(&table, &known).expect("revert step").state;
        prop_assert!(!state.is_swapped());
        prop_assert_eq!(state.visible_columns(), base.as_slice());
    }

    #[test]
    fn visible_is_base_with_at_most_last_slot_changed(
        table in table_strategy(),
        width in 0.0f64..5000.0,
        steps in 0usize..10,
    ) {
        let known = known_columns();
        let mut state = VisibilityState::new().with_width(width, &table, true);
        for _ in 0..steps {
            match state.cycled(&table, &known) {
                Some(cycle) => state = cycle.state,
                None => break,
            }
        }
        let base = table.resolve(width);
        let visible = state.visible_columns();
        prop_assert_eq!(visible.len(), base.len());
        if !base.is_empty() {
            let head = base.len() - 1;
            prop_assert_eq!(&visible[..head], &base[..head]);
        }
    }
}

#[test]
fn scenario_a_table() {
    let table = BreakpointTable::builder()
        .breakpoint(1200, ["a", "b", "c", "d", "e", "f"])
        .breakpoint(768, ["a", "b", "d", "e"])
        .breakpoint(0, ["a", "b", "e"])
        .default_columns(["a", "b"])
        .build()
        .unwrap();
    assert_eq!(table.resolve(1200.0), ["a", "b", "c", "d", "e", "f"]);
    assert_eq!(table.resolve(900.0), ["a", "b", "d", "e"]);
    assert_eq!(table.resolve(500.0), ["a", "b", "e"]);
    assert_eq!(table.resolve(-5.0), ["a", "b"]);
}
