// Copyright 2025 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Card view models and the connector overlay.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};
use kurbo::Size;
use orgchart_connectors::Connector;
use orgchart_hierarchy::Employee;

use crate::config::SvgStyle;
use crate::tree::{ViewNodeId, ViewTree};

/// Shown in place of the chart when the selection matches nobody.
pub const EMPTY_STATE_MESSAGE: &str = "No employees found in this department.";

bitflags::bitflags! {
    /// Display state of a card.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct CardFlags: u8 {
        /// The card is the emphasized top of the full chart.
        const HIGHLIGHTED = 0b0000_0001;
        /// The card's reports are shown.
        const EXPANDED    = 0b0000_0010;
        /// The card has at least one direct report.
        const HAS_REPORTS = 0b0000_0100;
    }
}

/// Everything needed to draw one card.
#[derive(Clone, Copy, Debug)]
pub struct CardView<'a> {
    /// Node in the visible tree.
    pub node: ViewNodeId,
    /// The employee shown.
    pub employee: &'a Employee,
    /// Nesting depth, zero at the top of the chart.
    pub depth: usize,
    /// Number of direct reports.
    pub report_count: usize,
    /// Display state.
    pub flags: CardFlags,
}

impl CardView<'_> {
    /// Label of the expand/collapse control, `None` for leaf cards.
    pub fn toggle_label(&self) -> Option<String> {
        self.flags.contains(CardFlags::HAS_REPORTS).then(|| {
            toggle_label(self.flags.contains(CardFlags::EXPANDED), self.report_count)
        })
    }

    /// Returns `true` if the card is emphasized.
    pub fn is_highlighted(&self) -> bool {
        self.flags.contains(CardFlags::HIGHLIGHTED)
    }
}

/// `"Hide N"` for an open node, `"View N"` for a closed one.
pub fn toggle_label(expanded: bool, reports: usize) -> String {
    if expanded {
        format!("Hide {reports}")
    } else {
        format!("View {reports}")
    }
}

/// Card view models for every visible node, in depth-first order.
pub fn cards<'a>(tree: &ViewTree<'a>, highlight: Option<&str>) -> Vec<CardView<'a>> {
    tree.iter()
        .filter_map(|(id, node)| {
            let employee = tree.employee(id)?;
            let mut flags = CardFlags::empty();
            flags.set(
                CardFlags::HIGHLIGHTED,
                highlight == Some(employee.id.as_str()),
            );
            flags.set(CardFlags::EXPANDED, node.expanded);
            flags.set(CardFlags::HAS_REPORTS, node.report_count > 0);
            Some(CardView {
                node: id,
                employee,
                depth: node.depth,
                report_count: node.report_count,
                flags,
            })
        })
        .collect()
}

/// Render the connector overlay as a standalone `<svg>` element.
///
/// The overlay covers the container's content area and ignores pointer
/// input. Only child drops carry the arrowhead marker.
pub fn render_overlay(connectors: &[Connector], size: Size, style: &SvgStyle) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_overlay(&mut out, connectors, size, style);
    out
}

/// Like [`render_overlay`], writing into any [`fmt::Write`] sink.
pub fn write_overlay(
    out: &mut impl Write,
    connectors: &[Connector],
    size: Size,
    style: &SvgStyle,
) -> fmt::Result {
    let SvgStyle {
        stroke,
        stroke_width,
        marker_size: m,
        marker_id,
    } = style;
    write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" style="position:absolute;left:0;top:0;pointer-events:none">"#,
        size.width, size.height
    )?;
    write!(
        out,
        r#"<defs><marker id="{marker_id}" markerWidth="{m}" markerHeight="{m}" refX="{}" refY="{}" orient="auto" markerUnits="strokeWidth"><path d="M0,0 L{m},{} L0,{m} z" fill="{stroke}" stroke="{stroke}"/></marker></defs>"#,
        m - 1.0,
        m / 2.0,
        m / 2.0,
    )?;
    for connector in connectors {
        let [p0, p1] = connector.points();
        write!(
            out,
            r#"<polyline points="{},{} {},{}" fill="none" stroke="{stroke}" stroke-width="{stroke_width}" stroke-linecap="round" stroke-linejoin="round""#,
            p0.x, p0.y, p1.x, p1.y
        )?;
        if connector.has_arrow() {
            write!(out, r#" marker-end="url(#{marker_id})""#)?;
        }
        out.write_str("/>")?;
    }
    out.write_str("</svg>")
}
