use std::collections::VecDeque;

use crate::graph::GraphModel;

use super::types::EdgeClass;

/// Result of ranking: a total order over node indices, a layer per
/// node, and one classification per retained edge (parallel to
/// `model.edges`).
#[derive(Debug)]
pub(super) struct RankResult {
    pub(super) order: Vec<usize>,
    pub(super) layer: Vec<usize>,
    pub(super) classes: Vec<EdgeClass>,
}

/// Kahn's algorithm, tolerant of cycles, followed by longest-path layer
/// assignment and edge classification.
pub(super) fn rank(model: &GraphModel) -> RankResult {
    let count = model.node_count();
    let mut indegree: Vec<usize> = model.reverse.iter().map(Vec::len).collect();

    let mut queue: VecDeque<usize> = VecDeque::new();
    for (idx, &degree) in indegree.iter().enumerate() {
        if degree == 0 {
            queue.push_back(idx);
        }
    }

    let mut order = Vec::with_capacity(count);
    let mut placed = vec![false; count];
    while let Some(node) = queue.pop_front() {
        order.push(node);
        placed[node] = true;
        for &next in &model.adjacency[node] {
            indegree[next] -= 1;
            if indegree[next] == 0 {
                queue.push_back(next);
            }
        }
    }

    // Anything left sits inside a cycle with no acyclic entry point.
    // Appending in input order keeps the permutation total and the
    // result reproducible run to run.
    for idx in 0..count {
        if !placed[idx] {
            order.push(idx);
        }
    }

    let mut position = vec![0usize; count];
    for (pos, &node) in order.iter().enumerate() {
        position[node] = pos;
    }

    // Longest-path layers. Only neighbors strictly later in `order` are
    // ever raised, so edges pointing back into a cycle cannot inflate
    // layers without bound.
    let mut layer = vec![0usize; count];
    for &node in &order {
        for &next in &model.adjacency[node] {
            if position[next] > position[node] {
                layer[next] = layer[next].max(layer[node] + 1);
            }
        }
    }

    let classes = model
        .edges
        .iter()
        .map(|edge| {
            if edge.from == edge.to {
                EdgeClass::SelfLoop
            } else if layer[edge.to] > layer[edge.from] {
                EdgeClass::Forward
            } else {
                EdgeClass::Backward
            }
        })
        .collect();

    RankResult {
        order,
        layer,
        classes,
    }
}
