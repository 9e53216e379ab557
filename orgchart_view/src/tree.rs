// Copyright 2025 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visible tree: which cards are on screen and how they nest.

use alloc::vec;
use alloc::vec::Vec;
use hashbrown::{HashMap, HashSet};
use orgchart_hierarchy::{Employee, ExpansionState, Hierarchy};
use smallvec::SmallVec;

/// Identifier of a node in a [`ViewTree`].
///
/// Only meaningful for the tree that produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewNodeId(u32);

impl ViewNodeId {
    /// Position of the node in depth-first order.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "Charts are far below u32::MAX nodes."
    )]
    const fn from_index(index: usize) -> Self {
        Self(index as u32)
    }
}

/// One visible card.
#[derive(Clone, Debug)]
pub struct ViewNode {
    /// Position of the employee in the list the tree was built from.
    pub employee: usize,
    /// Parent card, `None` for the top of the chart.
    pub parent: Option<ViewNodeId>,
    /// Visible children, in report order. Empty when collapsed.
    pub children: SmallVec<[ViewNodeId; 4]>,
    /// Distance from the top of the chart.
    pub depth: usize,
    /// Number of direct reports, visible or not.
    pub report_count: usize,
    /// Whether the node's reports are shown.
    pub expanded: bool,
}

/// Arena of visible cards in depth-first order.
///
/// Nodes refer to each other and to employees by index, so the tree holds
/// no references into itself. A node's reports are materialized only when the
/// node is expanded.
#[derive(Clone, Debug)]
pub struct ViewTree<'a> {
    employees: &'a [Employee],
    nodes: Vec<ViewNode>,
    by_id: HashMap<&'a str, ViewNodeId>,
}

impl<'a> ViewTree<'a> {
    /// Walk down from `anchor`, descending into expanded nodes only.
    ///
    /// Returns an empty tree when `anchor` is `None` or not in the hierarchy.
    /// An employee reachable twice (malformed input) is shown once.
    pub fn build(
        hierarchy: &Hierarchy<'a>,
        anchor: Option<&str>,
        expansion: &ExpansionState,
    ) -> Self {
        let employees = hierarchy.employees();
        let mut tree = Self {
            employees,
            nodes: Vec::new(),
            by_id: HashMap::new(),
        };
        let Some(start) = anchor.and_then(|id| hierarchy.position(id)) else {
            return tree;
        };

        let mut seen = HashSet::new();
        let mut stack = vec![(start, None::<ViewNodeId>, 0_usize)];
        while let Some((pos, parent, depth)) = stack.pop() {
            if !seen.insert(pos) {
                tracing::warn!(id = %employees[pos].id, "employee reachable twice; skipping");
                continue;
            }
            let employee = &employees[pos];
            let id = ViewNodeId::from_index(tree.nodes.len());
            let reports = hierarchy.report_positions(&employee.id);
            let expanded = expansion.is_expanded(&employee.id);
            tree.nodes.push(ViewNode {
                employee: pos,
                parent,
                children: SmallVec::new(),
                depth,
                report_count: reports.len(),
                expanded,
            });
            tree.by_id.insert(employee.id.as_str(), id);
            if let Some(parent) = parent {
                tree.nodes[parent.index()].children.push(id);
            }
            if expanded {
                // Reversed so reports pop off the stack in list order.
                for &child in reports.iter().rev() {
                    stack.push((child, Some(id), depth + 1));
                }
            }
        }
        tree
    }

    /// Number of visible cards.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The top card.
    pub fn root(&self) -> Option<ViewNodeId> {
        (!self.nodes.is_empty()).then_some(ViewNodeId(0))
    }

    /// Access a node.
    pub fn node(&self, id: ViewNodeId) -> Option<&ViewNode> {
        self.nodes.get(id.index())
    }

    /// The employee shown by a node.
    pub fn employee(&self, id: ViewNodeId) -> Option<&'a Employee> {
        let employees = self.employees;
        self.node(id).map(|n| &employees[n.employee])
    }

    /// The node showing `employee_id`, if visible.
    pub fn find(&self, employee_id: &str) -> Option<ViewNodeId> {
        self.by_id.get(employee_id).copied()
    }

    /// Returns `true` if `employee_id` is visible.
    pub fn contains(&self, employee_id: &str) -> bool {
        self.by_id.contains_key(employee_id)
    }

    /// Visible children of a node, or an empty slice for unknown ids.
    pub fn children_of(&self, id: ViewNodeId) -> &[ViewNodeId] {
        self.node(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Parent of a node.
    pub fn parent_of(&self, id: ViewNodeId) -> Option<ViewNodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Nodes in depth-first order.
    pub fn iter(&self) -> impl Iterator<Item = (ViewNodeId, &ViewNode)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (ViewNodeId::from_index(i), n))
    }

    /// Visible employee ids in depth-first order.
    pub fn ids(&self) -> impl Iterator<Item = &'a str> + '_ {
        let employees = self.employees;
        self.nodes
            .iter()
            .map(move |n| employees[n.employee].id.as_str())
    }

    /// Next card in depth-first order (Tab). Does not wrap.
    pub fn next_depth_first(&self, current: ViewNodeId) -> Option<ViewNodeId> {
        let next = current.index() + 1;
        (next < self.nodes.len()).then(|| ViewNodeId::from_index(next))
    }

    /// Previous card in depth-first order (Shift+Tab). Does not wrap.
    pub fn prev_depth_first(&self, current: ViewNodeId) -> Option<ViewNodeId> {
        if current.index() >= self.nodes.len() {
            return None;
        }
        current.index().checked_sub(1).map(ViewNodeId::from_index)
    }
}
