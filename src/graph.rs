use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

/// A work item (task, pipeline stage, agent role) in the input graph.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    pub label: String,
    /// Status/role/etc. for the renderer; opaque to the engine.
    pub attributes: BTreeMap<String, String>,
}

/// A directed relation between two work items. `from == to` denotes a
/// self-loop.
#[derive(Debug, Clone)]
pub struct Edge {
    pub from: String,
    pub to: String,
    /// Routed task types etc.; opaque to the engine.
    pub metadata: Vec<String>,
}

/// One immutable snapshot of nodes and edges, as handed over by the
/// data-fetch collaborator.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, id: &str, label: &str) {
        self.nodes.push(Node {
            id: id.to_string(),
            label: label.to_string(),
            attributes: BTreeMap::new(),
        });
    }

    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.edges.push(Edge {
            from: from.to_string(),
            to: to.to_string(),
            metadata: Vec::new(),
        });
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// Node ids must be unique within a single layout call.
    #[error("duplicate node id `{0}`")]
    DuplicateNode(String),
}

/// An edge retained by [`GraphModel::build`], with endpoints resolved to
/// node indices.
#[derive(Debug, Clone)]
pub struct ModelEdge {
    pub from: usize,
    pub to: usize,
    pub edge: Edge,
}

/// Index-based view of a [`Graph`], ready for ranking.
///
/// Self-loop edges never contribute to `adjacency`/`reverse`; edges with
/// an endpoint missing from the node set are dropped here and never
/// reach layout.
#[derive(Debug)]
pub struct GraphModel {
    pub nodes: Vec<Node>,
    pub node_index: HashMap<String, usize>,
    /// Forward adjacency, self-loops excluded.
    pub adjacency: Vec<Vec<usize>>,
    /// Reverse adjacency, self-loops excluded.
    pub reverse: Vec<Vec<usize>>,
    /// Retained edges in input order, self-loops included.
    pub edges: Vec<ModelEdge>,
    /// Indices into `edges` that are self-loops.
    pub self_loops: Vec<usize>,
    /// Count of edges dropped for referencing unknown node ids.
    pub dropped: usize,
}

impl GraphModel {
    pub fn build(graph: &Graph) -> Result<Self, GraphError> {
        let mut node_index = HashMap::with_capacity(graph.nodes.len());
        for (idx, node) in graph.nodes.iter().enumerate() {
            if node_index.insert(node.id.clone(), idx).is_some() {
                return Err(GraphError::DuplicateNode(node.id.clone()));
            }
        }

        let mut adjacency = vec![Vec::new(); graph.nodes.len()];
        let mut reverse = vec![Vec::new(); graph.nodes.len()];
        let mut edges: Vec<ModelEdge> = Vec::with_capacity(graph.edges.len());
        let mut self_loops = Vec::new();
        let mut dropped = 0usize;

        for edge in &graph.edges {
            let (Some(&from), Some(&to)) =
                (node_index.get(&edge.from), node_index.get(&edge.to))
            else {
                // Routing config may reference a role that is being
                // edited or removed mid-session; skip without failing.
                tracing::warn!(from = %edge.from, to = %edge.to, "dropping edge with unknown endpoint");
                dropped += 1;
                continue;
            };
            if from == to {
                self_loops.push(edges.len());
            } else {
                adjacency[from].push(to);
                reverse[to].push(from);
            }
            edges.push(ModelEdge {
                from,
                to,
                edge: edge.clone(),
            });
        }

        Ok(Self {
            nodes: graph.nodes.clone(),
            node_index,
            adjacency,
            reverse,
            edges,
            self_loops,
            dropped,
        })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
