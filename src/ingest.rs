//! Ingestion boundary for the dashboard's graph payloads.
//!
//! Upstream payloads are loosely shaped; this module pins them to
//! explicit records so malformed input fails here instead of deep in
//! layout math.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::graph::{Edge, Graph, Node};

#[derive(Debug, Deserialize)]
struct GraphFile {
    #[serde(default)]
    nodes: Vec<NodeRecord>,
    #[serde(default)]
    edges: Vec<EdgeRecord>,
}

#[derive(Debug, Deserialize)]
struct NodeRecord {
    id: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(flatten)]
    attributes: BTreeMap<String, Value>,
}

#[derive(Debug, Deserialize)]
struct EdgeRecord {
    from: String,
    to: String,
    #[serde(default)]
    metadata: Vec<String>,
}

fn attribute_string(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

/// Parse a graph payload. Strict JSON is tried first; JSON5 covers
/// hand-authored files with comments and trailing commas.
pub fn parse_graph(input: &str) -> Result<Graph> {
    let file: GraphFile = match serde_json::from_str(input) {
        Ok(file) => file,
        Err(_) => json5::from_str(input).context("graph payload is neither JSON nor JSON5")?,
    };

    let nodes = file
        .nodes
        .into_iter()
        .map(|record| Node {
            label: record.label.unwrap_or_else(|| record.id.clone()),
            id: record.id,
            attributes: record
                .attributes
                .into_iter()
                .map(|(key, value)| (key, attribute_string(value)))
                .collect(),
        })
        .collect();

    let edges = file
        .edges
        .into_iter()
        .map(|record| Edge {
            from: record.from,
            to: record.to,
            metadata: record.metadata,
        })
        .collect();

    Ok(Graph { nodes, edges })
}

/// Read and parse a graph file from disk.
pub fn load_graph(path: &Path) -> Result<Graph> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_graph(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nodes_edges_and_attributes() {
        let graph = parse_graph(
            r#"{
                "nodes": [
                    {"id": "planner", "label": "Planner", "status": "active", "retries": 2},
                    {"id": "coder"}
                ],
                "edges": [
                    {"from": "planner", "to": "coder", "metadata": ["code_task"]}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.nodes[0].attributes.get("status").unwrap(), "active");
        assert_eq!(graph.nodes[0].attributes.get("retries").unwrap(), "2");
        // Missing label falls back to the id.
        assert_eq!(graph.nodes[1].label, "coder");
        assert_eq!(graph.edges[0].metadata, vec!["code_task".to_string()]);
    }

    #[test]
    fn rejects_node_without_id() {
        let result = parse_graph(r#"{"nodes": [{"label": "nameless"}], "edges": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn json5_fallback_accepts_comments() {
        let graph = parse_graph(
            r#"{
                // review loop
                nodes: [{id: "coder"}, {id: "reviewer"}],
                edges: [{from: "coder", to: "reviewer"}],
            }"#,
        )
        .unwrap();
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 1);
    }

    #[test]
    fn empty_payload_is_an_empty_graph() {
        let graph = parse_graph("{}").unwrap();
        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());
    }
}
