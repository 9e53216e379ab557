// Copyright 2025 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which nodes have their direct reports shown.

use alloc::string::String;
use hashbrown::HashSet;

use crate::filter::DepartmentFilter;

/// How the expansion set is seeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExpansionMode {
    /// Full hierarchy: only the top of the chart starts open.
    Unfiltered,
    /// Department view: every node of the reduced tree starts open.
    Filtered,
}

impl From<&DepartmentFilter> for ExpansionMode {
    fn from(filter: &DepartmentFilter) -> Self {
        if filter.is_all() {
            Self::Unfiltered
        } else {
            Self::Filtered
        }
    }
}

/// Set of node ids whose reports are rendered.
///
/// Collapsing a node does not touch the entries of its descendants, so
/// opening it again restores whatever was open below it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionState {
    open: HashSet<String>,
}

impl ExpansionState {
    /// Create an empty set (everything collapsed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the set for a fresh department selection.
    ///
    /// - [`ExpansionMode::Unfiltered`]: `root_id` and `manager_id` (each when present).
    /// - [`ExpansionMode::Filtered`]: every id in `filtered_ids`.
    pub fn seeded<'a>(
        mode: ExpansionMode,
        root_id: Option<&str>,
        manager_id: Option<&str>,
        filtered_ids: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let open = match mode {
            ExpansionMode::Unfiltered => root_id
                .into_iter()
                .chain(manager_id)
                .map(String::from)
                .collect(),
            ExpansionMode::Filtered => filtered_ids.into_iter().map(String::from).collect(),
        };
        Self { open }
    }

    /// Returns `true` if `id` is open.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    /// Flip `id` and return its new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        let open = if self.open.remove(id) {
            false
        } else {
            self.open.insert(id.into());
            true
        };
        tracing::trace!(id, open, "toggled node");
        open
    }

    /// A copy of this set with `id` flipped.
    #[must_use]
    pub fn toggled(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.toggle(id);
        next
    }

    /// Open `id`. Returns `false` if it was already open.
    pub fn expand(&mut self, id: &str) -> bool {
        self.open.insert(id.into())
    }

    /// Close `id`. Returns `false` if it was already closed.
    pub fn collapse(&mut self, id: &str) -> bool {
        self.open.remove(id)
    }

    /// Number of open ids.
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// Returns `true` if nothing is open.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Iterate open ids in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.open.iter().map(String::as_str)
    }
}

/// Seed an expansion set; see [`ExpansionState::seeded`].
pub fn initial_expansion<'a>(
    mode: ExpansionMode,
    root_id: Option<&str>,
    manager_id: Option<&str>,
    filtered_ids: impl IntoIterator<Item = &'a str>,
) -> ExpansionState {
    ExpansionState::seeded(mode, root_id, manager_id, filtered_ids)
}
