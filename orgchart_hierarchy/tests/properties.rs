// Copyright 2025 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for hierarchy queries and department filtering.

use orgchart_hierarchy::{
    DepartmentFilter, Employee, Hierarchy, ancestors, filter_by_department, manager_of, reports,
    validate_forest,
};
use proptest::prelude::*;
use proptest::sample::Index;

const DEPARTMENTS: [&str; 4] = ["Executive", "Technology", "Sales", "HR"];

/// A shuffled forest: each employee's manager is chosen among earlier ones,
/// or nobody.
fn forest() -> impl Strategy<Value = Vec<Employee>> {
    (1_usize..40)
        .prop_flat_map(|n| {
            (
                proptest::collection::vec(any::<Index>(), n),
                proptest::collection::vec(0..DEPARTMENTS.len(), n),
            )
        })
        .prop_map(|(managers, departments)| {
            managers
                .iter()
                .zip(&departments)
                .enumerate()
                .map(|(i, (manager, &dept))| {
                    let pick = manager.index(i + 1);
                    let manager_id = (pick < i).then(|| pick.to_string());
                    Employee::new(
                        i.to_string(),
                        format!("Employee {i}"),
                        "Role",
                        DEPARTMENTS[dept],
                        manager_id.as_deref(),
                    )
                })
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

/// Arbitrary manager references, cycles and dangling ids included.
fn tangle() -> impl Strategy<Value = Vec<Employee>> {
    (1_usize..30).prop_flat_map(|n| {
        proptest::collection::vec(proptest::option::of(0..n + 3), n).prop_map(|managers| {
            managers
                .iter()
                .enumerate()
                .map(|(i, m)| {
                    let manager_id = m.map(|m| m.to_string());
                    Employee::new(
                        i.to_string(),
                        "",
                        "",
                        DEPARTMENTS[i % DEPARTMENTS.len()],
                        manager_id.as_deref(),
                    )
                })
                .collect()
        })
    })
}

fn ids(list: &[Employee]) -> Vec<&str> {
    list.iter().map(|e| e.id.as_str()).collect()
}

proptest! {
    #[test]
    fn generated_forests_pass_the_guard(all in forest()) {
        prop_assert_eq!(validate_forest(&all), Ok(()));
        for e in &all {
            let mut steps = 0;
            let mut cur = manager_of(&e.id, &all);
            while let Some(id) = cur {
                steps += 1;
                prop_assert!(steps <= all.len(), "chain from {} did not terminate", e.id);
                cur = manager_of(id, &all);
            }
        }
    }

    #[test]
    fn ancestor_walks_terminate_on_any_input(all in tangle()) {
        let hierarchy = Hierarchy::new(&all);
        for e in &all {
            prop_assert!(ancestors(&e.id, &all).count() < all.len());
            prop_assert!(hierarchy.ancestors(&e.id).count() < all.len());
        }
        for dept in DEPARTMENTS {
            let filtered = filter_by_department(&all, &DepartmentFilter::from_selection(dept));
            prop_assert!(filtered.len() <= all.len());
        }
    }

    #[test]
    fn filter_keeps_chains_connected(all in forest()) {
        for dept in DEPARTMENTS {
            let filtered = filter_by_department(&all, &DepartmentFilter::from_selection(dept));
            let kept = Hierarchy::new(&filtered);
            for member in &filtered {
                for manager in ancestors(&member.id, &all) {
                    prop_assert!(
                        kept.contains(&manager.id),
                        "{} kept without its manager {}", member.id, manager.id
                    );
                }
            }
            for e in all.iter().filter(|e| e.department == dept) {
                prop_assert!(kept.contains(&e.id));
            }
        }
    }

    #[test]
    fn filter_is_idempotent(all in forest()) {
        for dept in DEPARTMENTS {
            let filter = DepartmentFilter::from_selection(dept);
            let once = filter_by_department(&all, &filter);
            let twice = filter_by_department(&once, &filter);
            prop_assert_eq!(twice, once);
        }
    }

    #[test]
    fn filter_preserves_relative_order(all in forest()) {
        let positions = Hierarchy::new(&all);
        for dept in DEPARTMENTS {
            let filtered = filter_by_department(&all, &DepartmentFilter::from_selection(dept));
            let order: Vec<_> = ids(&filtered)
                .into_iter()
                .filter_map(|id| positions.position(id))
                .collect();
            prop_assert!(order.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn index_agrees_with_scans(all in forest()) {
        let hierarchy = Hierarchy::new(&all);
        for e in &all {
            prop_assert_eq!(ids_of(hierarchy.reports(&e.id)), ids_of(reports(&e.id, &all)));
        }
    }
}

fn ids_of<'a>(it: impl Iterator<Item = &'a Employee>) -> Vec<&'a str> {
    it.map(|e| e.id.as_str()).collect()
}
