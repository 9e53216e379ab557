// Copyright 2025 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure queries over a flat employee list.
//!
//! These scan the list on every call, which is fine for a handful of lookups.
//! Build a [`Hierarchy`](crate::Hierarchy) when answering many queries against
//! the same list.

use hashbrown::HashSet;

use crate::Employee;
use crate::index::Hierarchy;

/// Direct reports of `id`, in list order.
///
/// Unknown ids yield an empty iterator.
pub fn reports<'a>(id: &str, employees: &'a [Employee]) -> impl Iterator<Item = &'a Employee> {
    employees.iter().filter(move |e| e.manager() == Some(id))
}

/// The manager id of `id`, or `None` for roots and unknown ids.
pub fn manager_of<'a>(id: &str, employees: &'a [Employee]) -> Option<&'a str> {
    employees
        .iter()
        .find(|e| e.id == id)
        .and_then(Employee::manager)
}

/// Look up an employee by id. The first record wins if ids repeat.
pub fn find<'a>(id: &str, employees: &'a [Employee]) -> Option<&'a Employee> {
    employees.iter().find(|e| e.id == id)
}

/// The employee the chart is centered on: the first root, or the first
/// employee if the list has no root.
pub fn find_root(employees: &[Employee]) -> Option<&Employee> {
    employees
        .iter()
        .find(|e| e.is_root())
        .or_else(|| employees.first())
}

/// Iterate the managers of `id`, nearest first.
///
/// The walk ends at a root, at a manager id that is not in the list, or when
/// an id repeats.
pub fn ancestors<'a>(id: &str, employees: &'a [Employee]) -> Ancestors<'a> {
    Ancestors::new(Lookup::Scan(employees), find(id, employees))
}

#[derive(Clone, Copy, Debug)]
pub(crate) enum Lookup<'a> {
    Scan(&'a [Employee]),
    Indexed(&'a Hierarchy<'a>),
}

impl<'a> Lookup<'a> {
    fn get(self, id: &str) -> Option<&'a Employee> {
        match self {
            Self::Scan(employees) => find(id, employees),
            Self::Indexed(hierarchy) => hierarchy.get(id),
        }
    }
}

/// Iterator over an employee's management chain.
///
/// Returned by [`ancestors`] and [`Hierarchy::ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    lookup: Lookup<'a>,
    current: Option<&'a Employee>,
    seen: HashSet<&'a str>,
}

impl<'a> Ancestors<'a> {
    pub(crate) fn new(lookup: Lookup<'a>, start: Option<&'a Employee>) -> Self {
        let mut seen = HashSet::new();
        if let Some(start) = start {
            seen.insert(start.id.as_str());
        }
        Self {
            lookup,
            current: start,
            seen,
        }
    }
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Employee;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        let manager_id = current.manager()?;
        let Some(manager) = self.lookup.get(manager_id) else {
            tracing::debug!(
                id = %current.id,
                manager_id,
                "manager is not in the list; stopping ancestor walk"
            );
            return None;
        };
        if !self.seen.insert(manager.id.as_str()) {
            tracing::warn!(id = %manager.id, "cyclic management chain; stopping ancestor walk");
            return None;
        }
        self.current = Some(manager);
        Some(manager)
    }
}
