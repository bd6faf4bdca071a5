pub mod config;
pub mod graph;
pub mod ingest;
pub mod layout;
pub mod layout_dump;

pub use config::Sizing;
pub use graph::{Edge, Graph, GraphError, GraphModel, Node};
pub use ingest::{load_graph, parse_graph};
pub use layout::{EdgeClass, EdgePath, EdgeRoute, Layout, NodeLayout, compute_layout};
pub use layout_dump::{LayoutDump, write_layout_dump};
