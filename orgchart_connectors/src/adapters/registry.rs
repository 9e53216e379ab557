// Copyright 2025 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`BoxLookup`] over an `orgchart_registry` [`Registry`].
//!
//! The registry already stores boxes in container content space, so its
//! measured boxes feed [`compute_connectors`](crate::compute_connectors)
//! directly. Nodes registered since the last measurement pass have no box and
//! are skipped until the next pass.

use kurbo::Rect;
use orgchart_registry::Registry;

use crate::types::BoxLookup;

impl<E> BoxLookup for Registry<E> {
    fn box_of(&self, id: &str) -> Option<Rect> {
        Registry::box_of(self, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConnectorConfig, ConnectorKind, compute_connectors};
    use alloc::vec;
    use kurbo::Vec2;
    use orgchart_hierarchy::Employee;
    use orgchart_registry::ContainerMetrics;

    #[test]
    fn connectors_follow_registry_measurements() {
        let list = vec![
            Employee::new("1", "Sarah", "CEO", "X", None),
            Employee::new("2", "Michael", "CTO", "X", Some("1")),
        ];
        let mut registry = Registry::new();
        registry.register("1", Rect::new(100.0, 100.0, 200.0, 200.0));
        registry.register("2", Rect::new(100.0, 400.0, 200.0, 500.0));

        // Not measured yet: nothing to draw.
        assert!(compute_connectors(&list, &registry, &ConnectorConfig::default()).is_empty());

        let container = ContainerMetrics::new(Rect::new(100.0, 100.0, 900.0, 900.0), Vec2::ZERO);
        let _ = registry.measure(&container);
        let connectors = compute_connectors(&list, &registry, &ConnectorConfig::default());
        assert_eq!(connectors.len(), 2);
        assert_eq!(connectors[0].kind, ConnectorKind::ParentDrop);
        assert_eq!(connectors[1].points()[1].y, 300.0);
    }
}
