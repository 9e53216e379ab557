// Copyright 2025 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prebuilt lookup tables over a borrowed employee list.

use alloc::vec::Vec;
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::Employee;
use crate::query::{Ancestors, Lookup};

type Children = SmallVec<[usize; 4]>;

/// Indexed view of a flat employee list.
///
/// Answers the same questions as the free functions in this crate
/// ([`reports`](crate::reports), [`manager_of`](crate::manager_of),
/// [`ancestors`](crate::ancestors)) with identical results, without
/// rescanning the list for every call.
///
/// Children are stored as positions into the borrowed slice, so the index
/// holds no owned copies of employee data.
///
/// ```rust
/// use orgchart_hierarchy::{Employee, Hierarchy};
///
/// let list = vec![
///     Employee::new("1", "Sarah", "CEO", "Executive", None),
///     Employee::new("2", "Michael", "CTO", "Technology", Some("1")),
///     Employee::new("3", "Emily", "VP", "Technology", Some("2")),
/// ];
/// let hierarchy = Hierarchy::new(&list);
/// let chain: Vec<_> = hierarchy.ancestors("3").map(|e| e.id.as_str()).collect();
/// assert_eq!(chain, ["2", "1"]);
/// ```
#[derive(Clone, Debug)]
pub struct Hierarchy<'a> {
    employees: &'a [Employee],
    positions: HashMap<&'a str, usize>,
    /// Reports keyed by manager id, including ids that are not in the list.
    children: HashMap<&'a str, Children>,
}

impl<'a> Hierarchy<'a> {
    /// Build the index. If an id repeats, lookups resolve to its first record.
    pub fn new(employees: &'a [Employee]) -> Self {
        let mut positions = HashMap::with_capacity(employees.len());
        let mut children: HashMap<&'a str, Children> = HashMap::new();
        for (pos, employee) in employees.iter().enumerate() {
            positions.entry(employee.id.as_str()).or_insert(pos);
            if let Some(manager) = employee.manager() {
                children.entry(manager).or_default().push(pos);
            }
        }
        Self {
            employees,
            positions,
            children,
        }
    }

    /// The indexed list.
    pub fn employees(&self) -> &'a [Employee] {
        self.employees
    }

    /// Number of records in the list.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Position of `id` in the list.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Returns `true` if `id` is in the list.
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Look up an employee by id.
    pub fn get(&self, id: &str) -> Option<&'a Employee> {
        let employees = self.employees;
        self.position(id).map(|pos| &employees[pos])
    }

    /// Positions of the direct reports of `id`, in list order.
    pub fn report_positions(&self, id: &str) -> &[usize] {
        self.children.get(id).map_or(&[], |c| c.as_slice())
    }

    /// Direct reports of `id`, in list order.
    pub fn reports<'s>(&'s self, id: &str) -> impl Iterator<Item = &'a Employee> + use<'s, 'a> {
        let employees = self.employees;
        self.report_positions(id)
            .iter()
            .map(move |&pos| &employees[pos])
    }

    /// Number of direct reports of `id`.
    pub fn report_count(&self, id: &str) -> usize {
        self.report_positions(id).len()
    }

    /// The manager id of `id`, or `None` for roots and unknown ids.
    pub fn manager_of(&self, id: &str) -> Option<&'a str> {
        self.get(id).and_then(Employee::manager)
    }

    /// Iterate the managers of `id`, nearest first.
    ///
    /// See [`ancestors`](crate::ancestors) for the termination rules.
    pub fn ancestors<'s>(&'s self, id: &str) -> Ancestors<'s> {
        Ancestors::new(Lookup::Indexed(self), self.get(id))
    }

    /// All employees without a manager, in list order.
    pub fn roots(&self) -> Vec<&'a Employee> {
        self.employees.iter().filter(|e| e.is_root()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{manager_of, reports};
    use alloc::vec;

    fn sample() -> Vec<Employee> {
        vec![
            Employee::new("1", "Sarah", "CEO", "Executive", None),
            Employee::new("2", "Michael", "CTO", "Technology", Some("1")),
            Employee::new("3", "Emily", "VP", "Technology", Some("2")),
            Employee::new("4", "Lukas", "VP", "Marketing", Some("2")),
            Employee::new("5", "Colleen", "Assistant", "Executive", Some("1")),
            Employee::new("6", "Orphan", "Temp", "Ops", Some("ghost")),
        ]
    }

    #[test]
    fn matches_free_functions() {
        let list = sample();
        let hierarchy = Hierarchy::new(&list);
        for e in &list {
            let indexed: Vec<_> = hierarchy.reports(&e.id).collect();
            let scanned: Vec<_> = reports(&e.id, &list).collect();
            assert_eq!(indexed, scanned, "reports of {} differ", e.id);
            assert_eq!(hierarchy.manager_of(&e.id), manager_of(&e.id, &list));
        }
    }

    #[test]
    fn report_counts() {
        let list = sample();
        let hierarchy = Hierarchy::new(&list);
        assert_eq!(hierarchy.report_count("1"), 2);
        assert_eq!(hierarchy.report_count("2"), 2);
        assert_eq!(hierarchy.report_count("3"), 0);
        assert_eq!(hierarchy.report_count("missing"), 0);
    }

    #[test]
    fn duplicate_ids_resolve_to_first_record() {
        let list = vec![
            Employee::new("1", "First", "", "A", None),
            Employee::new("1", "Second", "", "B", None),
        ];
        let hierarchy = Hierarchy::new(&list);
        assert_eq!(hierarchy.get("1").map(|e| e.name.as_str()), Some("First"));
        assert_eq!(hierarchy.position("1"), Some(0));
    }

    #[test]
    fn roots_and_dangling_ancestors() {
        let list = sample();
        let hierarchy = Hierarchy::new(&list);
        let roots: Vec<_> = hierarchy.roots().into_iter().map(|e| e.id.as_str()).collect();
        assert_eq!(roots, ["1"]);
        assert!(hierarchy.ancestors("6").next().is_none());
        assert!(hierarchy.contains("6"));
        assert!(!hierarchy.contains("ghost"));
    }
}
