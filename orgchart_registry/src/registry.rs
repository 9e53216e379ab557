// Copyright 2025 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core registry implementation: registration, measurement, queries.

use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;
use kurbo::Rect;

use crate::damage::Damage;
use crate::types::{ContainerMetrics, Measurable};

/// Mapping from node id to the element rendering it and its last measured box.
///
/// Every rendered card registers its element when it mounts and unregisters
/// when it leaves the tree (collapsed parent, department change). Boxes are
/// only read from elements during [`Registry::measure`], which converts them
/// into container content space.
///
/// A node that is registered but not yet measured has no box and is skipped
/// by box queries until the next measurement pass.
///
/// At a stable point (after mounts are synchronized and a pass has run) the
/// registered ids are exactly the rendered ids; see [`Registry::matches_ids`].
///
/// ## Example
///
/// ```rust
/// use kurbo::{Rect, Vec2};
/// use orgchart_registry::{ContainerMetrics, Registry};
///
/// let mut registry = Registry::new();
/// // `Rect` is a measurable stand-in for a real element handle.
/// registry.register("1", Rect::new(110.0, 60.0, 302.0, 200.0));
///
/// let container = ContainerMetrics::new(Rect::new(100.0, 50.0, 900.0, 650.0), Vec2::new(0.0, 30.0));
/// let damage = registry.measure(&container);
/// assert!(!damage.is_empty());
/// assert_eq!(registry.box_of("1"), Some(Rect::new(10.0, 40.0, 202.0, 180.0)));
/// ```
pub struct Registry<E> {
    /// slots, in first-registration order
    slots: Vec<Option<Slot<E>>>,
    by_id: HashMap<String, usize>,
    free_list: Vec<usize>,
    /// boxes of unregistered nodes, reported by the next pass
    pending: Damage,
    dirty: bool,
    epoch: u64,
}

struct Slot<E> {
    id: String,
    element: E,
    rect: Option<Rect>,
}

impl<E> core::fmt::Debug for Registry<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registry")
            .field("registered", &self.by_id.len())
            .field("measured", &self.measured_len())
            .field("free_list", &self.free_list.len())
            .field("dirty", &self.dirty)
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}

impl<E> Default for Registry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Registry<E> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            by_id: HashMap::new(),
            free_list: Vec::new(),
            pending: Damage::default(),
            dirty: false,
            epoch: 0,
        }
    }

    /// Register the element rendering `id`.
    ///
    /// Registering an id again replaces its element (for example after the
    /// card re-rendered) and keeps its previous box until the next pass.
    pub fn register(&mut self, id: impl Into<String>, element: E) {
        let id = id.into();
        self.dirty = true;
        if let Some(&idx) = self.by_id.get(&id) {
            if let Some(slot) = self.slots[idx].as_mut() {
                slot.element = element;
            }
            tracing::trace!(%id, "re-registered node");
            return;
        }
        let slot = Slot {
            id: id.clone(),
            element,
            rect: None,
        };
        let idx = if let Some(idx) = self.free_list.pop() {
            self.slots[idx] = Some(slot);
            idx
        } else {
            self.slots.push(Some(slot));
            self.slots.len() - 1
        };
        tracing::trace!(%id, "registered node");
        self.by_id.insert(id, idx);
    }

    /// Remove `id` and forget its box immediately.
    ///
    /// Returns the element, or `None` if `id` was not registered. Unregistering
    /// an unknown id means mount bookkeeping went wrong somewhere.
    pub fn unregister(&mut self, id: &str) -> Option<E> {
        let Some(idx) = self.by_id.remove(id) else {
            tracing::warn!(id, "unregister of a node that is not registered");
            return None;
        };
        let slot = self.slots[idx].take()?;
        self.free_list.push(idx);
        if let Some(rect) = slot.rect {
            self.pending.push(rect);
        }
        self.dirty = true;
        tracing::trace!(id, "unregistered node");
        Some(slot.element)
    }

    /// Returns `true` if `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// The element registered for `id`.
    pub fn element(&self, id: &str) -> Option<&E> {
        let idx = *self.by_id.get(id)?;
        self.slots[idx].as_ref().map(|slot| &slot.element)
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Registered ids, in unspecified order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.live().map(|slot| slot.id.as_str())
    }

    /// Returns `true` if the registered ids are exactly `ids`.
    ///
    /// `ids` must not contain duplicates.
    pub fn matches_ids<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> bool {
        let mut count = 0;
        for id in ids {
            if !self.contains(id) {
                return false;
            }
            count += 1;
        }
        count == self.len()
    }

    /// Last measured box of `id` in container content space.
    pub fn box_of(&self, id: &str) -> Option<Rect> {
        let idx = *self.by_id.get(id)?;
        self.slots[idx].as_ref().and_then(|slot| slot.rect)
    }

    /// All measured boxes as `(id, box)` pairs.
    ///
    /// Nodes registered since the last pass, or whose element was detached
    /// during it, are absent.
    pub fn boxes(&self) -> impl Iterator<Item = (&str, Rect)> + '_ {
        self.live()
            .filter_map(|slot| slot.rect.map(|rect| (slot.id.as_str(), rect)))
    }

    /// Returns `true` if registrations changed since the last pass.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of completed measurement passes.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    fn measured_len(&self) -> usize {
        self.live().filter(|slot| slot.rect.is_some()).count()
    }

    fn live(&self) -> impl Iterator<Item = &Slot<E>> + '_ {
        self.slots.iter().filter_map(Option::as_ref)
    }
}

impl<E: Measurable> Registry<E> {
    /// Read every registered element's box and store it in container space.
    ///
    /// Returns the old and new boxes of nodes that moved, appeared, or
    /// disappeared since the previous pass. Elements that report no box keep
    /// their registration but lose their stored box.
    pub fn measure(&mut self, container: &ContainerMetrics) -> Damage {
        let mut damage = core::mem::take(&mut self.pending);
        let mut measured = 0_usize;
        for slot in self.slots.iter_mut().flatten() {
            let old = slot.rect;
            let new = slot
                .element
                .client_rect()
                .map(|client| container.to_content(client));
            if old != new {
                if let Some(old) = old {
                    damage.push(old);
                }
                if let Some(new) = new {
                    damage.push(new);
                }
            }
            measured += usize::from(new.is_some());
            slot.rect = new;
        }
        self.dirty = false;
        self.epoch += 1;
        tracing::debug!(
            epoch = self.epoch,
            registered = self.by_id.len(),
            measured,
            damaged = damage.dirty_rects.len(),
            "measured registry"
        );
        damage
    }
}
