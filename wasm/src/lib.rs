use layerflow::{LayoutDump, Sizing, compute_layout, parse_graph};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SizingOptions {
    node_width: Option<f32>,
    node_height: Option<f32>,
    h_gap: Option<f32>,
    v_gap: Option<f32>,
    padding: Option<f32>,
}

fn build_sizing(options: SizingOptions) -> Sizing {
    let mut sizing = Sizing::default();
    if let Some(value) = options.node_width {
        sizing.node_width = value;
    }
    if let Some(value) = options.node_height {
        sizing.node_height = value;
    }
    if let Some(value) = options.h_gap {
        sizing.h_gap = value;
    }
    if let Some(value) = options.v_gap {
        sizing.v_gap = value;
    }
    if let Some(value) = options.padding {
        sizing.padding = value;
    }
    sizing
}

#[wasm_bindgen]
pub fn layout_graph(graph_json: &str, sizing_json: Option<String>) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = sizing_json {
        serde_json::from_str::<SizingOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        SizingOptions::default()
    };

    let graph = parse_graph(graph_json).map_err(|error| JsValue::from_str(&error.to_string()))?;
    let layout = compute_layout(&graph, &build_sizing(options))
        .map_err(|error| JsValue::from_str(&error.to_string()))?;
    serde_json::to_string(&LayoutDump::from_layout(&layout))
        .map_err(|error| JsValue::from_str(&error.to_string()))
}

#[cfg(test)]
mod tests {
    use layerflow::{compute_layout, parse_graph};

    use crate::{SizingOptions, build_sizing};

    #[test]
    fn lays_out_a_pipeline_with_a_review_loop() {
        let payload = r#"{
            "nodes": [
                {"id": "planner", "label": "Planner", "role": "agent"},
                {"id": "coder", "label": "Coder", "role": "agent"},
                {"id": "reviewer", "label": "Reviewer", "role": "agent"}
            ],
            "edges": [
                {"from": "planner", "to": "coder"},
                {"from": "coder", "to": "reviewer", "metadata": ["code_review"]},
                {"from": "reviewer", "to": "coder", "metadata": ["rework"]}
            ]
        }"#;

        let graph = parse_graph(payload).expect("payload should parse");
        let layout = compute_layout(&graph, &build_sizing(SizingOptions::default()))
            .expect("pipeline with a cycle should lay out");

        assert_eq!(layout.nodes.len(), 3);
        assert_eq!(layout.edges.len(), 3);
    }
}
