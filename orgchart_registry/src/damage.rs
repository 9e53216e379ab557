// Copyright 2025 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damage summary types returned from a measurement pass.

use alloc::vec::Vec;
use kurbo::Rect;

/// Regions that changed during [`crate::Registry::measure`].
///
/// For every node that moved, appeared, or disappeared since the previous
/// pass, the old and/or new container-space box is recorded. Rectangles may
/// overlap and are not a minimal cover.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Damage {
    /// Container-space rectangles that should be repainted.
    pub dirty_rects: Vec<Rect>,
}

impl Damage {
    /// Returns `true` if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.dirty_rects.is_empty()
    }

    /// Returns the union of all damage rects.
    pub fn union_rect(&self) -> Option<Rect> {
        let mut it = self.dirty_rects.iter().copied();
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }

    pub(crate) fn push(&mut self, rect: Rect) {
        if rect.width() > 0.0 && rect.height() > 0.0 {
            self.dirty_rects.push(rect);
        }
    }
}
