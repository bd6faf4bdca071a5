use serde::{Deserialize, Serialize};
use std::path::Path;

/// Node and gap geometry for one layout call.
///
/// Sizing only scales the resulting coordinate space; it never changes
/// ranking, classification, or route shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Sizing {
    pub node_width: f32,
    pub node_height: f32,
    pub h_gap: f32,
    pub v_gap: f32,
    pub padding: f32,
}

impl Default for Sizing {
    fn default() -> Self {
        Self {
            node_width: 150.0,
            node_height: 44.0,
            h_gap: 60.0,
            v_gap: 24.0,
            padding: 24.0,
        }
    }
}

/// Load sizing overrides from a JSON file. `None` keeps the defaults;
/// fields absent from the file keep their default values.
pub fn load_sizing(path: Option<&Path>) -> anyhow::Result<Sizing> {
    let Some(path) = path else {
        return Ok(Sizing::default());
    };

    let contents = std::fs::read_to_string(path)?;
    let sizing: Sizing = serde_json::from_str(&contents)?;
    Ok(sizing)
}
