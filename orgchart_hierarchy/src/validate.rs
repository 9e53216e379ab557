// Copyright 2025 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Guard for malformed manager references.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::Employee;

/// Why a list is not a forest.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HierarchyError {
    /// Two records share an id.
    #[error("employee id `{id}` appears more than once")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },
    /// A manager id does not name any record.
    #[error("employee `{id}` reports to unknown manager `{manager_id}`")]
    DanglingManager {
        /// The employee holding the reference.
        id: String,
        /// The missing manager id.
        manager_id: String,
    },
    /// Following manager ids from `id` never reaches a root.
    #[error("management chain through `{id}` forms a cycle")]
    Cycle {
        /// An employee on the cycle.
        id: String,
    },
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Check that every manager chain ends at a root.
///
/// Rejects repeated ids, manager ids that name nobody, and cycles. Runs in
/// linear time; every chain is walked at most once.
pub fn validate_forest(employees: &[Employee]) -> Result<(), HierarchyError> {
    let result = check(employees);
    if let Err(err) = &result {
        tracing::warn!(%err, "employee list is not a forest");
    }
    result
}

fn check(employees: &[Employee]) -> Result<(), HierarchyError> {
    let mut positions: HashMap<&str, usize> = HashMap::with_capacity(employees.len());
    for (pos, e) in employees.iter().enumerate() {
        if positions.insert(e.id.as_str(), pos).is_some() {
            return Err(HierarchyError::DuplicateId { id: e.id.clone() });
        }
    }

    let mut parent = Vec::with_capacity(employees.len());
    for e in employees {
        let p = match e.manager() {
            None => None,
            Some(manager_id) => match positions.get(manager_id) {
                Some(&pos) => Some(pos),
                None => {
                    return Err(HierarchyError::DanglingManager {
                        id: e.id.clone(),
                        manager_id: manager_id.into(),
                    });
                }
            },
        };
        parent.push(p);
    }

    let mut marks = vec![Mark::Unvisited; employees.len()];
    let mut path = Vec::new();
    for start in 0..employees.len() {
        let mut cur = Some(start);
        while let Some(pos) = cur {
            match marks[pos] {
                Mark::Done => break,
                Mark::OnPath => {
                    return Err(HierarchyError::Cycle {
                        id: employees[pos].id.clone(),
                    });
                }
                Mark::Unvisited => {
                    marks[pos] = Mark::OnPath;
                    path.push(pos);
                    cur = parent[pos];
                }
            }
        }
        for pos in path.drain(..) {
            marks[pos] = Mark::Done;
        }
    }
    Ok(())
}
