//! Configuration loading from transferstat.toml
//!
//! transferstat configuration can be specified in a `transferstat.toml` file in the
//! project root. The configuration is automatically discovered by walking up from the
//! current directory. Command-line flags override file values.

use serde::{Deserialize, Serialize};
use std::path::Path;
use transferstat_report::{ChartStyle, Theme};

/// Name of the configuration file looked up by [`TransferConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "transferstat.toml";

/// transferstat configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TransferConfig {
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Chart configuration
    #[serde(default)]
    pub visuals: VisualsConfig,
}

/// Where the measurements come from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Measurements CSV with `bytes`, `k` and `time` columns
    #[serde(default = "default_input_path")]
    pub path: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

fn default_input_path() -> String {
    "./logs/results.csv".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default report format: "human", "json", "csv"
    #[serde(default = "default_format")]
    pub format: String,
    /// Where `transferstat chart` writes the SVG
    #[serde(default = "default_chart_path")]
    pub chart_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            chart_path: default_chart_path(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}
fn default_chart_path() -> String {
    "target/transferstat/transfer_time.svg".to_string()
}

/// Visualization configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualsConfig {
    /// Color theme: "light" or "dark"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Chart width in pixels
    #[serde(default = "default_width")]
    pub width: u32,
    /// Chart height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for VisualsConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_theme() -> String {
    "light".to_string()
}
fn default_width() -> u32 {
    1000
}
fn default_height() -> u32 {
    600
}

impl VisualsConfig {
    /// Resolve into a chart style, rejecting unknown themes
    pub fn chart_style(&self) -> anyhow::Result<ChartStyle> {
        let theme: Theme = self.theme.parse().map_err(anyhow::Error::msg)?;
        Ok(ChartStyle {
            width: self.width,
            height: self.height,
            theme,
        })
    }
}

impl TransferConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        Self::discover_from(&dir)
    }

    /// Walk up from `start` looking for [`CONFIG_FILE_NAME`]
    pub fn discover_from(start: &Path) -> Option<Self> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        tracing::warn!(
                            path = %config_path.display(),
                            error = %e,
                            "ignoring unreadable config file"
                        );
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# transferstat configuration

[input]
# Measurements CSV (columns: bytes, k, time)
path = "./logs/results.csv"

[output]
# Default report format: human, json, csv
format = "human"
# Where `transferstat chart` writes the SVG
chart_path = "target/transferstat/transfer_time.svg"

[visuals]
# Color theme: light or dark
theme = "light"
# Chart dimensions
width = 1000
height = 600
"#
        .to_string()
    }
}
