use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::layout::{EdgeClass, EdgePath, Layout};

/// JSON mirror of a [`Layout`], shaped for the rendering collaborator.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDump {
    pub node_positions: BTreeMap<String, PositionDump>,
    pub edge_routes: Vec<EdgeRouteDump>,
    pub bounds: BoundsDump,
}

#[derive(Debug, Serialize)]
pub struct PositionDump {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeRouteDump {
    pub from: String,
    pub to: String,
    pub class: EdgeClass,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<String>,
    pub path: PathDump,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PathDump {
    Bezier {
        start: [f32; 2],
        ctrl1: [f32; 2],
        ctrl2: [f32; 2],
        end: [f32; 2],
    },
    Polyline {
        points: Vec<[f32; 2]>,
    },
}

#[derive(Debug, Serialize)]
pub struct BoundsDump {
    pub width: f32,
    pub height: f32,
}

fn point(p: (f32, f32)) -> [f32; 2] {
    [p.0, p.1]
}

impl LayoutDump {
    pub fn from_layout(layout: &Layout) -> Self {
        let node_positions = layout
            .nodes
            .iter()
            .map(|(id, node)| (id.clone(), PositionDump { x: node.x, y: node.y }))
            .collect();

        let edge_routes = layout
            .edges
            .iter()
            .map(|route| EdgeRouteDump {
                from: route.from.clone(),
                to: route.to.clone(),
                class: route.class,
                metadata: route.metadata.clone(),
                path: match &route.path {
                    EdgePath::Bezier {
                        start,
                        ctrl1,
                        ctrl2,
                        end,
                    } => PathDump::Bezier {
                        start: point(*start),
                        ctrl1: point(*ctrl1),
                        ctrl2: point(*ctrl2),
                        end: point(*end),
                    },
                    EdgePath::Polyline(points) => PathDump::Polyline {
                        points: points.iter().copied().map(point).collect(),
                    },
                },
            })
            .collect();

        LayoutDump {
            node_positions,
            edge_routes,
            bounds: BoundsDump {
                width: layout.width,
                height: layout.height,
            },
        }
    }
}

pub fn write_layout_dump(path: &Path, layout: &Layout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Sizing;
    use crate::graph::Graph;
    use crate::layout::compute_layout;

    #[test]
    fn dump_matches_the_wire_shape() {
        let mut graph = Graph::new();
        graph.add_node("coder", "Coder");
        graph.add_node("reviewer", "Reviewer");
        graph.add_edge("coder", "reviewer");
        graph.add_edge("reviewer", "reviewer");
        let layout = compute_layout(&graph, &Sizing::default()).unwrap();
        let json = serde_json::to_string(&LayoutDump::from_layout(&layout)).unwrap();

        assert!(json.contains("\"nodePositions\""));
        assert!(json.contains("\"edgeRoutes\""));
        assert!(json.contains("\"bounds\""));
        assert!(json.contains("\"forward\""));
        assert!(json.contains("\"selfLoop\""));
    }

    #[test]
    fn dump_is_stable_across_runs() {
        let mut graph = Graph::new();
        graph.add_node("a", "A");
        graph.add_node("b", "B");
        graph.add_edge("a", "b");
        graph.add_edge("b", "a");
        let sizing = Sizing::default();
        let first = compute_layout(&graph, &sizing).unwrap();
        let second = compute_layout(&graph, &sizing).unwrap();
        assert_eq!(
            serde_json::to_string(&LayoutDump::from_layout(&first)).unwrap(),
            serde_json::to_string(&LayoutDump::from_layout(&second)).unwrap()
        );
    }
}
