// Copyright 2025 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orgchart Registry: where the cards of an org chart actually are.
//!
//! An org chart's connector lines depend on card positions that only exist
//! after the host UI has laid the cards out. This crate is the synchronization
//! point between the two:
//!
//! - [`Registry`] maps node ids to the element rendering them and to the box
//!   last measured for that element, in container content space.
//! - [`MeasureScheduler`] turns bursts of invalidating events ([`Triggers`]) into
//!   one measurement pass per frame: a dirty flag plus a pending-frame flag.
//! - [`ObserverScope`] holds the scroll and resize listeners for as long as a
//!   chart is mounted and releases all of them on drop.
//!
//! ## Not a layout engine
//!
//! Nothing here decides where a card goes. The host lays cards out however it
//! likes and reports their viewport boxes through [`Measurable`]. The registry
//! only records and converts those boxes; [`ContainerMetrics`] describes the
//! scrollable container the boxes are made relative to.
//!
//! ## Measurement cycle
//!
//! 1. Cards mount: [`Registry::register`]; cards unmount: [`Registry::unregister`].
//! 2. Any change calls [`MeasureScheduler::request`]; the host requests a frame
//!    only on [`Schedule::RequestFrame`].
//! 3. In the frame callback, [`MeasureScheduler::take_frame`] then
//!    [`Registry::measure`], which returns a [`Damage`] summary.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod damage;
mod observers;
mod registry;
mod scheduler;
mod types;

pub use damage::Damage;
pub use observers::{ObserverScope, Subscription, TriggerSource};
pub use registry::Registry;
pub use scheduler::{MeasureScheduler, Schedule, Triggers};
pub use types::{ContainerMetrics, Measurable};
