// Copyright 2025 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The employee record consumed by every other part of the chart.

use alloc::string::String;

/// A single entry in the organization.
///
/// `name`, `role`, and `department` are display attributes. Only `id`,
/// `manager_id`, and (for filtering) `department` are read by the algorithms.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Employee {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Job title.
    pub role: String,
    /// Department name, matched exactly by the department filter.
    pub department: String,
    /// Identifier of this employee's manager; `None` marks a root.
    #[cfg_attr(feature = "serde", serde(rename = "managerId"))]
    pub manager_id: Option<String>,
}

impl Employee {
    /// Create an employee record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
        department: impl Into<String>,
        manager_id: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            department: department.into(),
            manager_id: manager_id.map(String::from),
        }
    }

    /// Returns `true` if this employee has no manager.
    pub fn is_root(&self) -> bool {
        self.manager_id.is_none()
    }

    /// The manager id as a string slice.
    pub fn manager(&self) -> Option<&str> {
        self.manager_id.as_deref()
    }
}
