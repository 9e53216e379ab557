// Copyright 2025 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Connector segments, configuration, and the box lookup seam.

use alloc::collections::BTreeMap;
use alloc::string::String;
use kurbo::{Line, Point, Rect};

/// Default vertical gap between a parent card and the top of its drop line.
pub const DEFAULT_DROP_GAP: f64 = 40.0;

/// Role of a segment within a parent's connector group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConnectorKind {
    /// Horizontal bar joining the drops of two or more children.
    MergeBar,
    /// Vertical segment from below the parent down to the merge height.
    ParentDrop,
    /// Vertical segment from the merge height down to a child's top edge.
    ChildDrop,
}

/// One straight segment of an org chart connector.
///
/// Connectors carry no identity of their own; they are recomputed from the
/// current boxes on every pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Connector {
    /// Id of the parent whose group this segment belongs to.
    pub parent: String,
    /// Id of the child this segment ends at ([`ConnectorKind::ChildDrop`] only).
    pub child: Option<String>,
    /// Role of the segment.
    pub kind: ConnectorKind,
    /// The segment, in container content space.
    pub line: Line,
}

impl Connector {
    /// Start and end point.
    pub fn points(&self) -> [Point; 2] {
        [self.line.p0, self.line.p1]
    }

    /// Returns `true` if the segment ends in an arrowhead (child drops only).
    pub fn has_arrow(&self) -> bool {
        self.kind == ConnectorKind::ChildDrop
    }

    /// Returns `true` for vertical segments.
    pub fn is_vertical(&self) -> bool {
        self.kind != ConnectorKind::MergeBar
    }
}

/// Tuning for connector geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ConnectorConfig {
    /// Gap between a parent's bottom edge and the start of its drop line.
    pub drop_gap: f64,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            drop_gap: DEFAULT_DROP_GAP,
        }
    }
}

/// Source of measured card boxes, keyed by node id.
pub trait BoxLookup {
    /// The box of `id`, or `None` if it has not been measured.
    fn box_of(&self, id: &str) -> Option<Rect>;
}

impl<T: BoxLookup + ?Sized> BoxLookup for &T {
    fn box_of(&self, id: &str) -> Option<Rect> {
        (**self).box_of(id)
    }
}

impl<S: core::hash::BuildHasher> BoxLookup for hashbrown::HashMap<String, Rect, S> {
    fn box_of(&self, id: &str) -> Option<Rect> {
        self.get(id).copied()
    }
}

impl BoxLookup for BTreeMap<String, Rect> {
    fn box_of(&self, id: &str) -> Option<Rect> {
        self.get(id).copied()
    }
}
