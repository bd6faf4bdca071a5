use std::collections::BTreeMap;

use crate::graph::GraphModel;

use super::ranking::RankResult;
use super::types::{EdgeClass, EdgePath, EdgeRoute, NodeLayout};

// ── Forward curves ──────────────────────────────────────────────────
/// Fraction of the horizontal span used to offset Bezier control points.
const CONTROL_RATIO: f32 = 0.4;

// ── Backward arcs ───────────────────────────────────────────────────
/// Drop below the lower endpoint for the first backward arc.
const ARC_DROP_BASE: f32 = 18.0;
/// Extra drop per backward edge processed, so concurrent arcs nest
/// instead of overlapping.
const ARC_DROP_STEP: f32 = 10.0;

// ── Self-loops ──────────────────────────────────────────────────────
/// Half-width of the loop drawn above a node.
const LOOP_RADIUS: f32 = 12.0;
/// How far above the node's top edge the loop reaches.
const LOOP_RISE: f32 = 22.0;

fn right_port(node: &NodeLayout) -> (f32, f32) {
    (node.x + node.width, node.y + node.height / 2.0)
}

fn left_port(node: &NodeLayout) -> (f32, f32) {
    (node.x, node.y + node.height / 2.0)
}

fn bottom_port(node: &NodeLayout) -> (f32, f32) {
    (node.x + node.width / 2.0, node.y + node.height)
}

/// Smooth S-curve from the right port of `from` to the left port of
/// `to`; stays clear of node bodies regardless of vertical offset.
fn route_forward(from: &NodeLayout, to: &NodeLayout) -> EdgePath {
    let start = right_port(from);
    let end = left_port(to);
    let reach = (end.0 - start.0) * CONTROL_RATIO;
    EdgePath::Bezier {
        start,
        ctrl1: (start.0 + reach, start.1),
        ctrl2: (end.0 - reach, end.1),
        end,
    }
}

/// Under-arc for an edge pointing to an equal or earlier layer. `index`
/// counts backward edges routed so far; each one dips a step deeper.
fn route_backward(from: &NodeLayout, to: &NodeLayout, index: usize) -> EdgePath {
    let start = bottom_port(from);
    let end = bottom_port(to);
    let dip = start.1.max(end.1) + ARC_DROP_BASE + ARC_DROP_STEP * index as f32;
    EdgePath::Bezier {
        start,
        ctrl1: (start.0, dip),
        ctrl2: (end.0, dip),
        end,
    }
}

/// Small fixed-radius loop above the node, entering and exiting near
/// its horizontal center.
fn route_self_loop(node: &NodeLayout) -> EdgePath {
    let cx = node.x + node.width / 2.0;
    let top = node.y;
    EdgePath::Polyline(vec![
        (cx - LOOP_RADIUS, top),
        (cx - LOOP_RADIUS, top - LOOP_RISE),
        (cx + LOOP_RADIUS, top - LOOP_RISE),
        (cx + LOOP_RADIUS, top),
    ])
}

/// Route every retained edge, in input order. Classification decides
/// the path shape; the class rides along so the renderer can style
/// forward, backward, and loop edges differently.
pub(super) fn route(
    model: &GraphModel,
    ranked: &RankResult,
    nodes: &BTreeMap<String, NodeLayout>,
) -> Vec<EdgeRoute> {
    let mut routes = Vec::with_capacity(model.edges.len());
    let mut backward_seen = 0usize;

    for (idx, entry) in model.edges.iter().enumerate() {
        let class = ranked.classes[idx];
        let (Some(from), Some(to)) = (
            nodes.get(&model.nodes[entry.from].id),
            nodes.get(&model.nodes[entry.to].id),
        ) else {
            continue;
        };

        let path = match class {
            EdgeClass::Forward => route_forward(from, to),
            EdgeClass::Backward => {
                let path = route_backward(from, to, backward_seen);
                backward_seen += 1;
                path
            }
            EdgeClass::SelfLoop => route_self_loop(from),
        };

        routes.push(EdgeRoute {
            from: entry.edge.from.clone(),
            to: entry.edge.to.clone(),
            class,
            metadata: entry.edge.metadata.clone(),
            path,
        });
    }

    routes
}
