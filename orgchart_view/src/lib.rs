// Copyright 2025 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orgchart View: an interactive, department-filterable org chart.
//!
//! [`OrgChart`] ties the other Orgchart crates together. It holds the
//! employee list and the current department selection, decides which cards
//! are visible ([`ViewTree`]), keeps a registry of the mounted card elements,
//! and turns their measured boxes into connectors once per frame.
//!
//! The crate draws nothing itself. The host supplies card elements that can
//! report their on-screen box ([`Measurable`](orgchart_registry::Measurable)),
//! lays them out however it likes, and renders the [`CardView`] models and the
//! SVG connector overlay.
//!
//! ## Frame loop
//!
//! - State changes ([`OrgChart::select_department`], [`OrgChart::toggle`])
//!   are followed by [`OrgChart::sync_mounts`], which mounts and unmounts cards.
//! - Mounts, toggles, filter changes, scrolls, and resizes mark geometry
//!   dirty. Each of these calls returns a
//!   [`Schedule`](orgchart_registry::Schedule); the first one since the last
//!   frame is `RequestFrame`, and the host asks for a frame callback then.
//!   Every later request before that frame is coalesced into the same pass.
//! - [`OrgChart::on_frame`] measures, recomputes connectors, and reports
//!   damage.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Rect, Size, Vec2};
//! use orgchart_hierarchy::Employee;
//! use orgchart_registry::ContainerMetrics;
//! use orgchart_view::OrgChart;
//!
//! let mut chart = OrgChart::new(vec![
//!     Employee::new("1", "Sarah", "CEO", "Executive", None),
//!     Employee::new("2", "Michael", "CTO", "Technology", Some("1")),
//!     Employee::new("3", "David", "CFO", "Finance", Some("1")),
//! ]);
//!
//! // A stand-in layout: cards are plain rectangles in client space.
//! let diff = chart.sync_mounts(|e| match e.id.as_str() {
//!     "1" => Rect::new(150.0, 0.0, 250.0, 60.0),
//!     "2" => Rect::new(0.0, 200.0, 100.0, 260.0),
//!     _ => Rect::new(300.0, 200.0, 400.0, 260.0),
//! });
//! assert_eq!(diff.mounted, ["1", "2", "3"]);
//!
//! let container = ContainerMetrics::new(Rect::new(0.0, 0.0, 400.0, 300.0), Vec2::ZERO);
//! let report = chart.on_frame(&container).unwrap();
//! assert_eq!(report.connector_count, 4);
//!
//! let cards = chart.cards();
//! assert!(cards[0].is_highlighted());
//! assert_eq!(cards[0].toggle_label().as_deref(), Some("Hide 2"));
//!
//! let svg = chart.render_overlay(Size::new(400.0, 300.0));
//! assert_eq!(svg.matches("marker-end").count(), 2);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `serde`: derives serde traits for [`ChartConfig`] and [`SvgStyle`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod chart;
mod config;
mod surface;
mod tree;

pub use chart::{FrameReport, MountDiff, OrgChart};
pub use config::{ChartConfig, SvgStyle};
pub use surface::{
    CardFlags, CardView, EMPTY_STATE_MESSAGE, cards, render_overlay, toggle_label, write_overlay,
};
pub use tree::{ViewNode, ViewNodeId, ViewTree};
