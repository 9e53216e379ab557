// Copyright 2025 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the registry: element handles and container metrics.

use kurbo::{Point, Rect, Vec2};

/// A rendered element whose on-screen box can be read back.
///
/// Hosts implement this for whatever handle their UI toolkit hands out for a
/// mounted card (a DOM node, a widget id, a retained layout node).
pub trait Measurable {
    /// The element's box in viewport coordinates, or `None` if the element is
    /// currently detached and has no box.
    fn client_rect(&self) -> Option<Rect>;
}

impl Measurable for Rect {
    fn client_rect(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl<T: Measurable + ?Sized> Measurable for &T {
    fn client_rect(&self) -> Option<Rect> {
        (**self).client_rect()
    }
}

/// Placement of the scrollable container the chart is drawn in.
///
/// Registry boxes are stored relative to the container's content origin, so
/// they stay put while the container scrolls.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerMetrics {
    /// The container's box in viewport coordinates.
    pub client_rect: Rect,
    /// Current scroll offset of the container's content.
    pub scroll: Vec2,
}

impl ContainerMetrics {
    /// Create metrics from a viewport box and a scroll offset.
    pub const fn new(client_rect: Rect, scroll: Vec2) -> Self {
        Self {
            client_rect,
            scroll,
        }
    }

    /// Map a viewport-space box into container content space.
    pub fn to_content(&self, client: Rect) -> Rect {
        let origin = Point::new(self.client_rect.x0, self.client_rect.y0);
        client - origin.to_vec2() + self.scroll
    }
}
