// Copyright 2025 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped subscriptions to the host events that invalidate measurements.

use smallvec::SmallVec;

use crate::scheduler::Triggers;

/// A host event stream the chart listens to while mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subscription {
    /// The chart container scrolled.
    ContainerScroll,
    /// The chart container was resized.
    ContainerResize,
    /// The window was resized.
    WindowResize,
}

impl Subscription {
    /// Every subscription a mounted chart holds.
    pub const ALL: [Self; 3] = [
        Self::ContainerScroll,
        Self::ContainerResize,
        Self::WindowResize,
    ];

    /// The measurement trigger this event maps to.
    pub fn trigger(self) -> Triggers {
        match self {
            Self::ContainerScroll => Triggers::SCROLL,
            Self::ContainerResize => Triggers::CONTAINER_RESIZE,
            Self::WindowResize => Triggers::WINDOW_RESIZE,
        }
    }
}

/// Host hook for attaching and detaching event listeners.
pub trait TriggerSource {
    /// Token identifying one attached listener.
    type Handle;

    /// Attach a listener; the host forwards matching events as
    /// [`Subscription::trigger`] to the chart.
    fn subscribe(&mut self, subscription: Subscription) -> Self::Handle;

    /// Detach a listener previously returned by [`TriggerSource::subscribe`].
    fn unsubscribe(&mut self, handle: Self::Handle);
}

impl<S: TriggerSource + ?Sized> TriggerSource for &mut S {
    type Handle = S::Handle;

    fn subscribe(&mut self, subscription: Subscription) -> Self::Handle {
        (**self).subscribe(subscription)
    }

    fn unsubscribe(&mut self, handle: Self::Handle) {
        (**self).unsubscribe(handle);
    }
}

/// Listeners held for the lifetime of a mounted chart.
///
/// Attaching subscribes to every [`Subscription`]; every handle is released
/// exactly once, either by [`ObserverScope::release`] or on drop. Attach a
/// `&mut` source to keep using it after the scope ends.
pub struct ObserverScope<S: TriggerSource> {
    source: S,
    handles: SmallVec<[S::Handle; 3]>,
}

impl<S: TriggerSource> core::fmt::Debug for ObserverScope<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ObserverScope")
            .field("attached", &self.handles.len())
            .finish_non_exhaustive()
    }
}

impl<S: TriggerSource> ObserverScope<S> {
    /// Subscribe to every chart-relevant event on `source`.
    pub fn attach(mut source: S) -> Self {
        let handles = Subscription::ALL
            .iter()
            .map(|&subscription| source.subscribe(subscription))
            .collect();
        tracing::debug!("attached chart observers");
        Self { source, handles }
    }

    /// Number of listeners currently attached.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns `true` once every listener has been released.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// The source the listeners are attached to.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Detach every listener now; the same as dropping the scope.
    pub fn release(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if self.handles.is_empty() {
            return;
        }
        for handle in self.handles.drain(..) {
            self.source.unsubscribe(handle);
        }
        tracing::debug!("released chart observers");
    }
}

impl<S: TriggerSource> Drop for ObserverScope<S> {
    fn drop(&mut self) {
        self.detach();
    }
}
