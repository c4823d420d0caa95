//! YAML mapping keyed by entity name, using serde_yaml.

use estatus_core::errors::OutputError;
use estatus_core::models::EntityStatusMap;

use super::Renderer;

pub struct YamlRenderer;

impl Renderer for YamlRenderer {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn render(&self, statuses: &EntityStatusMap) -> Result<String, OutputError> {
        serde_yaml::to_string(statuses).map_err(|e| OutputError::Serialize {
            format: self.name().to_string(),
            reason: e.to_string(),
        })
    }
}
