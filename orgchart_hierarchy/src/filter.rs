// Copyright 2025 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Department filtering and per-department statistics.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use hashbrown::HashSet;

use crate::Employee;
use crate::index::Hierarchy;

/// Selection value that disables filtering.
pub const ALL_DEPARTMENTS: &str = "all";

/// The department selection driving the chart.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DepartmentFilter {
    /// Show the full hierarchy.
    #[default]
    All,
    /// Show one department's members and their management chain.
    Department(String),
}

impl DepartmentFilter {
    /// Parse a selection value; [`ALL_DEPARTMENTS`] maps to [`DepartmentFilter::All`].
    pub fn from_selection(selection: &str) -> Self {
        if selection == ALL_DEPARTMENTS {
            Self::All
        } else {
            Self::Department(selection.into())
        }
    }

    /// Returns `true` for [`DepartmentFilter::All`].
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The selected department name, if any.
    pub fn department(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Department(name) => Some(name),
        }
    }
}

impl From<&str> for DepartmentFilter {
    fn from(selection: &str) -> Self {
        Self::from_selection(selection)
    }
}

impl fmt::Display for DepartmentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.department().unwrap_or(ALL_DEPARTMENTS))
    }
}

/// Reduce `all` to the selected department plus everyone above its members.
///
/// - [`DepartmentFilter::All`] returns the list unchanged.
/// - Otherwise the result holds every member of the department and every
///   manager reachable from a member, in the original relative order.
///   Ancestor walks stop at manager ids that are not in the list.
/// - A department with no members yields an empty list.
///
/// The result is closed under [`manager_of`](crate::manager_of) up to its
/// topmost member, so the filtered tree stays connected.
///
/// ```rust
/// use orgchart_hierarchy::{DepartmentFilter, Employee, filter_by_department};
///
/// let list = vec![
///     Employee::new("1", "Sarah", "CEO", "X", None),
///     Employee::new("2", "Michael", "CTO", "Y", Some("1")),
///     Employee::new("3", "Emily", "VP", "X", Some("1")),
/// ];
/// let filtered = filter_by_department(&list, &DepartmentFilter::from_selection("Y"));
/// let ids: Vec<_> = filtered.iter().map(|e| e.id.as_str()).collect();
/// assert_eq!(ids, ["1", "2"]);
/// ```
pub fn filter_by_department(all: &[Employee], filter: &DepartmentFilter) -> Vec<Employee> {
    let Some(department) = filter.department() else {
        return all.to_vec();
    };

    let hierarchy = Hierarchy::new(all);
    let mut include: HashSet<&str> = HashSet::new();
    for member in all.iter().filter(|e| e.department == department) {
        if !include.insert(member.id.as_str()) {
            // Already collected as someone's manager, so its chain is in too.
            continue;
        }
        let mut next = member.manager();
        while let Some(id) = next {
            let Some(manager) = hierarchy.get(id) else {
                break;
            };
            if !include.insert(manager.id.as_str()) {
                break;
            }
            next = manager.manager();
        }
    }

    let filtered: Vec<Employee> = all
        .iter()
        .filter(|e| include.contains(e.id.as_str()))
        .cloned()
        .collect();
    tracing::debug!(
        department,
        total = all.len(),
        kept = filtered.len(),
        "filtered hierarchy by department"
    );
    filtered
}

/// Distinct department names, sorted ascending.
pub fn departments(all: &[Employee]) -> Vec<&str> {
    let mut names: Vec<&str> = all.iter().map(|e| e.department.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    names
}

/// Member count of one department.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepartmentStats {
    /// Department name.
    pub name: String,
    /// Number of employees whose department is `name`.
    pub count: usize,
}

impl DepartmentStats {
    /// Label such as `"1 member"` or `"4 members"`.
    pub fn member_label(&self) -> String {
        let noun = if self.count == 1 { "member" } else { "members" };
        alloc::format!("{} {noun}", self.count)
    }
}

/// Member counts for every department, sorted by name.
pub fn department_stats(all: &[Employee]) -> Vec<DepartmentStats> {
    departments(all)
        .into_iter()
        .map(|name| DepartmentStats {
            name: name.into(),
            count: all.iter().filter(|e| e.department == name).count(),
        })
        .collect()
}

/// Stats of the selected department.
///
/// Returns `None` for [`DepartmentFilter::All`] and for departments nobody
/// belongs to.
pub fn stats_for(all: &[Employee], filter: &DepartmentFilter) -> Option<DepartmentStats> {
    let name = filter.department()?;
    let count = all.iter().filter(|e| e.department == name).count();
    (count > 0).then(|| DepartmentStats {
        name: name.into(),
        count,
    })
}
