use std::collections::BTreeMap;

use serde::Serialize;

/// Placement of a single node: top-left corner plus extent.
#[derive(Debug, Clone)]
pub struct NodeLayout {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub layer: usize,
}

/// How an edge relates to the computed ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeClass {
    /// Target sits on a strictly greater layer.
    Forward,
    /// Points to an equal or earlier layer, typically part of a cycle.
    Backward,
    SelfLoop,
}

/// Drawable path description. Interpreting the curve (and escaping any
/// text that ends up in markup) is entirely the renderer's concern.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgePath {
    /// Cubic Bezier control polygon.
    Bezier {
        start: (f32, f32),
        ctrl1: (f32, f32),
        ctrl2: (f32, f32),
        end: (f32, f32),
    },
    /// Straight segments through the given points.
    Polyline(Vec<(f32, f32)>),
}

/// A routed edge, ready for the renderer.
#[derive(Debug, Clone)]
pub struct EdgeRoute {
    pub from: String,
    pub to: String,
    pub class: EdgeClass,
    pub metadata: Vec<String>,
    pub path: EdgePath,
}

/// Complete result of one layout call.
#[derive(Debug, Clone)]
pub struct Layout {
    pub nodes: BTreeMap<String, NodeLayout>,
    pub edges: Vec<EdgeRoute>,
    pub width: f32,
    pub height: f32,
}
