//! Pretty JSON object keyed by entity name.

use estatus_core::errors::OutputError;
use estatus_core::models::EntityStatusMap;

use super::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn name(&self) -> &'static str {
        "wrapped-json"
    }

    fn render(&self, statuses: &EntityStatusMap) -> Result<String, OutputError> {
        serde_json::to_string_pretty(statuses).map_err(|e| OutputError::Serialize {
            format: self.name().to_string(),
            reason: e.to_string(),
        })
    }
}
