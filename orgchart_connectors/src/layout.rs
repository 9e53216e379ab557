// Copyright 2025 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Connector layout: from measured boxes to segments.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Line, Point, Rect};
use orgchart_hierarchy::{Employee, Hierarchy};

use crate::types::{BoxLookup, Connector, ConnectorConfig, ConnectorKind};

/// Height of the horizontal bar: halfway between the bottom of the parent's
/// drop gap and the highest child top.
pub fn merge_height(parent: Rect, child_tops: impl IntoIterator<Item = f64>, drop_gap: f64) -> f64 {
    let start_y = parent.y1 + drop_gap;
    let nearest = child_tops.into_iter().fold(f64::INFINITY, f64::min);
    start_y + (nearest - start_y) / 2.0
}

/// Compute every connector segment for the measured part of a chart.
///
/// For each employee in `employees` (in order) whose box and at least one
/// report's box are known:
///
/// 1. a [`MergeBar`](ConnectorKind::MergeBar) spanning the children's centers,
///    if there are two or more children;
/// 2. a [`ParentDrop`](ConnectorKind::ParentDrop) from `drop_gap` below the
///    parent down to the merge height;
/// 3. one [`ChildDrop`](ConnectorKind::ChildDrop) per child, from the merge
///    height to the child's top edge, in report order.
///
/// Reports are looked up within `employees`. Nodes without a box are skipped
/// silently; they join the next pass once measured. The result is a pure
/// function of its inputs.
pub fn compute_connectors(
    employees: &[Employee],
    boxes: &impl BoxLookup,
    config: &ConnectorConfig,
) -> Vec<Connector> {
    let hierarchy = Hierarchy::new(employees);
    let mut connectors = Vec::new();
    let mut children: Vec<(&str, Rect)> = Vec::new();

    for parent in employees {
        if hierarchy.report_count(&parent.id) == 0 {
            continue;
        }
        let Some(parent_box) = boxes.box_of(&parent.id) else {
            continue;
        };
        children.clear();
        children.extend(
            hierarchy
                .reports(&parent.id)
                .filter_map(|c| boxes.box_of(&c.id).map(|b| (c.id.as_str(), b))),
        );
        if children.is_empty() {
            continue;
        }
        push_group(&mut connectors, &parent.id, parent_box, &children, config);
    }

    tracing::debug!(segments = connectors.len(), "computed connectors");
    connectors
}

fn push_group(
    out: &mut Vec<Connector>,
    parent_id: &str,
    parent_box: Rect,
    children: &[(&str, Rect)],
    config: &ConnectorConfig,
) {
    let start_y = parent_box.y1 + config.drop_gap;
    let merge_y = merge_height(parent_box, children.iter().map(|(_, b)| b.y0), config.drop_gap);
    let segment = |kind, child: Option<&str>, p0: Point, p1: Point| Connector {
        parent: String::from(parent_id),
        child: child.map(String::from),
        kind,
        line: Line::new(p0, p1),
    };

    if children.len() > 1 {
        let (left, right) = children
            .iter()
            .map(|(_, b)| b.center().x)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
                (lo.min(x), hi.max(x))
            });
        out.push(segment(
            ConnectorKind::MergeBar,
            None,
            Point::new(left, merge_y),
            Point::new(right, merge_y),
        ));
    }

    let parent_x = parent_box.center().x;
    out.push(segment(
        ConnectorKind::ParentDrop,
        None,
        Point::new(parent_x, start_y),
        Point::new(parent_x, merge_y),
    ));

    for &(child_id, child_box) in children {
        let x = child_box.center().x;
        out.push(segment(
            ConnectorKind::ChildDrop,
            Some(child_id),
            Point::new(x, merge_y),
            Point::new(x, child_box.y0),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use hashbrown::HashMap;

    fn employees() -> Vec<Employee> {
        vec![
            Employee::new("1", "Sarah", "CEO", "X", None),
            Employee::new("2", "Michael", "CTO", "X", Some("1")),
            Employee::new("3", "Emily", "VP", "X", Some("1")),
            Employee::new("4", "David", "Engineer", "X", Some("2")),
        ]
    }

    fn boxes(entries: &[(&str, Rect)]) -> HashMap<String, Rect> {
        entries
            .iter()
            .map(|(id, rect)| (String::from(*id), *rect))
            .collect()
    }

    #[test]
    fn two_children_get_a_merge_bar() {
        let list = employees();
        let measured = boxes(&[
            ("1", Rect::new(100.0, 0.0, 200.0, 100.0)),
            ("2", Rect::new(0.0, 300.0, 100.0, 400.0)),
            ("3", Rect::new(200.0, 300.0, 300.0, 400.0)),
        ]);
        let connectors = compute_connectors(&list, &measured, &ConnectorConfig::default());
        // start 140, nearest child top 300, bar halfway at 220.
        assert_eq!(
            connectors,
            vec![
                Connector {
                    parent: "1".into(),
                    child: None,
                    kind: ConnectorKind::MergeBar,
                    line: Line::new((50.0, 220.0), (250.0, 220.0)),
                },
                Connector {
                    parent: "1".into(),
                    child: None,
                    kind: ConnectorKind::ParentDrop,
                    line: Line::new((150.0, 140.0), (150.0, 220.0)),
                },
                Connector {
                    parent: "1".into(),
                    child: Some("2".into()),
                    kind: ConnectorKind::ChildDrop,
                    line: Line::new((50.0, 220.0), (50.0, 300.0)),
                },
                Connector {
                    parent: "1".into(),
                    child: Some("3".into()),
                    kind: ConnectorKind::ChildDrop,
                    line: Line::new((250.0, 220.0), (250.0, 300.0)),
                },
            ]
        );
    }

    #[test]
    fn single_child_has_no_merge_bar() {
        let list = employees();
        let measured = boxes(&[
            ("2", Rect::new(0.0, 0.0, 100.0, 100.0)),
            ("4", Rect::new(0.0, 300.0, 100.0, 400.0)),
        ]);
        let connectors = compute_connectors(&list, &measured, &ConnectorConfig::default());
        let kinds: Vec<_> = connectors.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, [ConnectorKind::ParentDrop, ConnectorKind::ChildDrop]);
        assert!(connectors[1].has_arrow());
        assert!(!connectors[0].has_arrow());
    }

    #[test]
    fn unmeasured_nodes_are_skipped() {
        let list = employees();
        // Parent measured, only one of its two children measured.
        let measured = boxes(&[
            ("1", Rect::new(100.0, 0.0, 200.0, 100.0)),
            ("3", Rect::new(200.0, 300.0, 300.0, 400.0)),
        ]);
        let connectors = compute_connectors(&list, &measured, &ConnectorConfig::default());
        assert_eq!(connectors.len(), 2);
        assert_eq!(connectors[1].child.as_deref(), Some("3"));

        // Unmeasured parent: nothing for its group.
        let measured = boxes(&[("2", Rect::new(0.0, 300.0, 100.0, 400.0))]);
        assert!(compute_connectors(&list, &measured, &ConnectorConfig::default()).is_empty());
    }

    #[test]
    fn merge_height_uses_the_highest_child() {
        let parent = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(merge_height(parent, [400.0, 300.0, 500.0], 40.0), 220.0);
        assert_eq!(merge_height(parent, [180.0], 0.0), 140.0);
    }

    #[test]
    fn drop_gap_is_configurable() {
        let list = employees();
        let measured = boxes(&[
            ("2", Rect::new(0.0, 0.0, 100.0, 100.0)),
            ("4", Rect::new(0.0, 300.0, 100.0, 400.0)),
        ]);
        let config = ConnectorConfig { drop_gap: 0.0 };
        let connectors = compute_connectors(&list, &measured, &config);
        assert_eq!(connectors[0].line, Line::new((50.0, 100.0), (50.0, 200.0)));
    }

    #[test]
    fn output_is_deterministic() {
        let list = employees();
        let measured = boxes(&[
            ("1", Rect::new(100.0, 0.0, 200.0, 100.0)),
            ("2", Rect::new(0.0, 300.0, 100.0, 400.0)),
            ("3", Rect::new(200.0, 300.0, 300.0, 400.0)),
            ("4", Rect::new(0.0, 600.0, 100.0, 700.0)),
        ]);
        let a = compute_connectors(&list, &measured, &ConnectorConfig::default());
        let b = compute_connectors(&list, &measured, &ConnectorConfig::default());
        assert_eq!(a, b);
        // Groups follow list order: parent 1 first, then parent 2.
        let parents: Vec<_> = a.iter().map(|c| c.parent.as_str()).collect();
        assert_eq!(parents, ["1", "1", "1", "1", "2", "2"]);
    }
}
