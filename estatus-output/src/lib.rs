//! Renderers for the rolled-up entity map.
//!
//! Three formats: a right-aligned table, YAML, and pretty JSON. Rendering
//! only reads the map.

pub mod json;
pub mod tabular;
pub mod yaml;

use std::io::Write;

use estatus_core::config::OutputFormat;
use estatus_core::errors::OutputError;
use estatus_core::models::EntityStatusMap;

/// Renders a finished rollup into a string document.
pub trait Renderer: Send + Sync {
    fn name(&self) -> &'static str;
    fn render(&self, statuses: &EntityStatusMap) -> Result<String, OutputError>;
}

/// Create a renderer for `format`.
pub fn create_renderer(format: OutputFormat) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Tabular => Box::new(tabular::TabularRenderer::default()),
        OutputFormat::Yaml => Box::new(yaml::YamlRenderer),
        OutputFormat::WrappedJson => Box::new(json::JsonRenderer),
    }
}

/// Render `statuses` in `format` and write the document to `writer`.
///
/// Nothing is written unless rendering succeeds.
pub fn render<W: Write + ?Sized>(
    statuses: &EntityStatusMap,
    format: OutputFormat,
    writer: &mut W,
) -> Result<(), OutputError> {
    let span = estatus_core::render_span!(format, statuses.len());
    let _entered = span.enter();

    let renderer = create_renderer(format);
    let mut document = renderer.render(statuses)?;
    if !document.ends_with('\n') {
        document.push('\n');
    }
    writer.write_all(document.as_bytes())?;
    writer.flush()?;

    tracing::info!(
        renderer = renderer.name(),
        entities = statuses.len(),
        bytes = document.len(),
        "rendered entity statuses"
    );
    Ok(())
}
