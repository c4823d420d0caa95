//! Right-aligned text table with `|` column separators.
//!
//! Every column is as wide as its widest cell plus the padding, and the
//! cell text sits flush right:
//!
//! ```text
//!    Entity|   Status|   Events|   Silenced|   Critical|   Warning|   Unknown|   Ok
//!    ------|   ------|   ------|   --------|   --------|   -------|   -------|   --
//!     web-1|     CRIT|        2|          0|          1|         0|         0|    1
//! ```

use estatus_core::errors::OutputError;
use estatus_core::models::{display_token, EntityStatus, EntityStatusMap};

use super::Renderer;

pub const HEADERS: [&str; 8] = [
    "Entity", "Status", "Events", "Silenced", "Critical", "Warning", "Unknown", "Ok",
];

pub const DEFAULT_PADDING: usize = 3;

pub struct TabularRenderer {
    pub padding: usize,
}

impl TabularRenderer {
    pub fn new(padding: usize) -> Self {
        Self { padding }
    }

    fn row(entity: &str, status: &EntityStatus) -> [String; 8] {
        [
            entity.to_string(),
            display_token(status.status.code()).to_string(),
            status.total.to_string(),
            status.silenced.to_string(),
            status.critical.to_string(),
            status.warning.to_string(),
            status.unknown.to_string(),
            status.ok.to_string(),
        ]
    }

    fn write_line(&self, out: &mut String, cells: &[String; 8], widths: &[usize; 8]) {
        for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
            if i > 0 {
                out.push('|');
            }
            out.push_str(&format!("{cell:>w$}", w = width + self.padding));
        }
        out.push('\n');
    }
}

impl Default for TabularRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_PADDING)
    }
}

impl Renderer for TabularRenderer {
    fn name(&self) -> &'static str {
        "tabular"
    }

    fn render(&self, statuses: &EntityStatusMap) -> Result<String, OutputError> {
        let header = HEADERS.map(str::to_string);
        let rule = HEADERS.map(|h| "-".repeat(h.len()));
        let rows: Vec<[String; 8]> = statuses
            .iter()
            .map(|(entity, status)| Self::row(entity, status))
            .collect();

        let mut widths = [0usize; 8];
        for line in std::iter::once(&header).chain(&rows) {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        self.write_line(&mut out, &header, &widths);
        self.write_line(&mut out, &rule, &widths);
        for row in &rows {
            self.write_line(&mut out, row, &widths);
        }
        Ok(out)
    }
}
