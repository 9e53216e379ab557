// Copyright 2025 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration.

use alloc::string::String;
use orgchart_connectors::ConnectorConfig;

/// Stroke and arrowhead styling of the connector overlay.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SvgStyle {
    /// Stroke and arrowhead fill color.
    pub stroke: String,
    /// Stroke width in pixels.
    pub stroke_width: f64,
    /// Width and height of the arrowhead marker.
    pub marker_size: f64,
    /// Id of the arrowhead `<marker>` element.
    pub marker_id: String,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            stroke: "#d8b4fe".into(),
            stroke_width: 2.0,
            marker_size: 6.0,
            marker_id: "arrow".into(),
        }
    }
}

/// Everything an [`OrgChart`](crate::OrgChart) can be tuned with.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ChartConfig {
    /// Connector geometry.
    pub connector: ConnectorConfig,
    /// Overlay styling.
    pub style: SvgStyle,
}
