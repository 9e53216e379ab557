// Copyright 2025 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orgchart Connectors: the lines between org chart cards.
//!
//! Given the employees currently shown and the measured box of each card,
//! [`compute_connectors`] derives the classic org chart wiring for every
//! parent with measured children:
//!
//! ```text
//!        ┌────────┐
//!        │ parent │
//!        └────────┘
//!             │        ParentDrop (starts drop_gap below the parent)
//!    ┌────────┴────────┐   MergeBar at the merge height
//!    ▼                 ▼   ChildDrop per child
//! ┌───────┐       ┌───────┐
//! │ child │       │ child │
//! └───────┘       └───────┘
//! ```
//!
//! The merge height sits halfway between the bottom of the parent's drop gap
//! and the highest child top ([`merge_height`]). Output is a pure function of
//! the boxes: no state, no diffing, recomputed after every measurement pass.
//!
//! Boxes come from any [`BoxLookup`]: hash maps keyed by id, or (feature
//! `registry_adapter`) an `orgchart_registry::Registry` directly.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use kurbo::Rect;
//! use orgchart_connectors::{ConnectorConfig, ConnectorKind, compute_connectors};
//! use orgchart_hierarchy::Employee;
//!
//! let list = vec![
//!     Employee::new("1", "Sarah", "CEO", "X", None),
//!     Employee::new("2", "Michael", "CTO", "X", Some("1")),
//!     Employee::new("3", "Emily", "VP", "X", Some("1")),
//! ];
//! let boxes = BTreeMap::from([
//!     ("1".to_string(), Rect::new(100.0, 0.0, 200.0, 100.0)),
//!     ("2".to_string(), Rect::new(0.0, 300.0, 100.0, 400.0)),
//!     ("3".to_string(), Rect::new(200.0, 300.0, 300.0, 400.0)),
//! ]);
//!
//! let connectors = compute_connectors(&list, &boxes, &ConnectorConfig::default());
//! let kinds: Vec<_> = connectors.iter().map(|c| c.kind).collect();
//! assert_eq!(kinds, [
//!     ConnectorKind::MergeBar,
//!     ConnectorKind::ParentDrop,
//!     ConnectorKind::ChildDrop,
//!     ConnectorKind::ChildDrop,
//! ]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `registry_adapter`: implements [`BoxLookup`] for `orgchart_registry::Registry`.
//! - `serde`: derives serde traits for [`ConnectorConfig`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
mod layout;
mod types;

pub use layout::{compute_connectors, merge_height};
pub use types::{BoxLookup, Connector, ConnectorConfig, ConnectorKind, DEFAULT_DROP_GAP};
