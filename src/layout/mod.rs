mod ranking;
mod routing;
pub(crate) mod types;

pub use types::*;

use std::collections::BTreeMap;

use crate::config::Sizing;
use crate::graph::{Graph, GraphError, GraphModel};

/// Vertical margin reserved above and below the node block for
/// self-loops and backward-edge arcs.
const ARC_SPACE: f32 = 48.0;

/// Compute a complete layout for one snapshot of the graph.
///
/// The engine holds no state between invocations: callers re-invoke it
/// with a fresh snapshot whenever the underlying node/edge data
/// changes, and identical input always yields an identical layout.
pub fn compute_layout(graph: &Graph, sizing: &Sizing) -> Result<Layout, GraphError> {
    let model = GraphModel::build(graph)?;

    if model.node_count() == 0 {
        return Ok(Layout {
            nodes: BTreeMap::new(),
            edges: Vec::new(),
            width: sizing.padding * 2.0,
            height: sizing.padding * 2.0,
        });
    }

    let ranked = ranking::rank(&model);

    // Bucket nodes by layer, preserving their relative order in the
    // ranked sequence.
    let max_layer = ranked.layer.iter().copied().max().unwrap_or(0);
    let mut groups: Vec<Vec<usize>> = vec![Vec::new(); max_layer + 1];
    for &node in &ranked.order {
        groups[ranked.layer[node]].push(node);
    }

    let group_height = |len: usize| -> f32 {
        if len == 0 {
            0.0
        } else {
            len as f32 * sizing.node_height + (len - 1) as f32 * sizing.v_gap
        }
    };
    let max_group_height = groups
        .iter()
        .map(|group| group_height(group.len()))
        .fold(0.0, f32::max);

    // Every column shares the tallest column's center line, so layers
    // with few nodes stay vertically balanced.
    let center_y = sizing.padding + ARC_SPACE + max_group_height / 2.0;

    let mut nodes = BTreeMap::new();
    for (layer, group) in groups.iter().enumerate() {
        let x = sizing.padding + layer as f32 * (sizing.node_width + sizing.h_gap);
        let top = center_y - group_height(group.len()) / 2.0;
        for (slot, &idx) in group.iter().enumerate() {
            let node = &model.nodes[idx];
            nodes.insert(
                node.id.clone(),
                NodeLayout {
                    id: node.id.clone(),
                    x,
                    y: top + slot as f32 * (sizing.node_height + sizing.v_gap),
                    width: sizing.node_width,
                    height: sizing.node_height,
                    layer,
                },
            );
        }
    }

    let edges = routing::route(&model, &ranked, &nodes);

    let width = sizing.padding * 2.0
        + (max_layer as f32 + 1.0) * (sizing.node_width + sizing.h_gap)
        - sizing.h_gap;
    let height = sizing.padding * 2.0 + ARC_SPACE * 2.0 + max_group_height;

    tracing::debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        layers = max_layer + 1,
        dropped = model.dropped,
        "layout computed"
    );

    Ok(Layout {
        nodes,
        edges,
        width,
        height,
    })
}
