// Copyright 2025 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orgchart Hierarchy: the data side of an organization chart.
//!
//! Everything here is a pure function of a flat list of [`Employee`] records,
//! each pointing at its manager by id. No geometry, no rendering.
//!
//! - Hierarchy queries: [`reports`], [`manager_of`], [`ancestors`], [`find_root`],
//!   and the prebuilt [`Hierarchy`] index that answers them without rescanning.
//! - Department filtering: [`filter_by_department`] keeps a department's members
//!   plus their management chain so the reduced tree stays connected.
//!   [`departments`], [`department_stats`], and [`stats_for`] feed a filter control.
//! - Expansion: [`ExpansionState`] tracks which nodes show their reports, seeded by
//!   [`initial_expansion`] whenever the department selection changes.
//! - Validation: [`validate_forest`] rejects repeated ids, dangling manager ids,
//!   and cycles. The queries themselves tolerate such input and simply stop.
//!
//! ## Example
//!
//! ```rust
//! use orgchart_hierarchy::{
//!     DepartmentFilter, Employee, ExpansionMode, filter_by_department, initial_expansion,
//!     manager_of, reports,
//! };
//!
//! let list = vec![
//!     Employee::new("1", "Sarah Johnson", "CEO", "X", None),
//!     Employee::new("2", "Michael Chen", "CTO", "X", Some("1")),
//!     Employee::new("3", "Emily Davis", "VP Engineering", "X", Some("1")),
//! ];
//!
//! let direct: Vec<_> = reports("1", &list).map(|e| e.id.as_str()).collect();
//! assert_eq!(direct, ["2", "3"]);
//! assert_eq!(manager_of("2", &list), Some("1"));
//!
//! // Nobody works in "Z": the chart is empty, not an error.
//! assert!(filter_by_department(&list, &DepartmentFilter::from_selection("Z")).is_empty());
//!
//! let open = initial_expansion(ExpansionMode::Unfiltered, Some("1"), None, ["1", "2", "3"]);
//! assert!(open.is_expanded("1"));
//! assert!(!open.is_expanded("2"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod employee;
mod expansion;
mod filter;
mod index;
mod query;
mod validate;

pub use employee::Employee;
pub use expansion::{ExpansionMode, ExpansionState, initial_expansion};
pub use filter::{
    ALL_DEPARTMENTS, DepartmentFilter, DepartmentStats, department_stats, departments,
    filter_by_department, stats_for,
};
pub use index::Hierarchy;
pub use query::{Ancestors, ancestors, find, find_root, manager_of, reports};
pub use validate::{HierarchyError, validate_forest};
