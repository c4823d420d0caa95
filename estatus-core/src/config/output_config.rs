use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the rollup is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Tabular,
    Yaml,
    #[serde(alias = "json")]
    WrappedJson,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Tabular => "tabular",
            OutputFormat::Yaml => "yaml",
            OutputFormat::WrappedJson => "wrapped-json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tabular" => Ok(OutputFormat::Tabular),
            "yaml" => Ok(OutputFormat::Yaml),
            "wrapped-json" | "json" => Ok(OutputFormat::WrappedJson),
            other => Err(format!(
                "unknown format '{other}', expected one of: tabular, yaml, wrapped-json"
            )),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}
