use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "relayout.config.json";

/// Relayout configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Resource directory containing the layout variant folders
    #[serde(default = "default_res_dir")]
    pub res_dir: String,

    /// Output directory for generated markup and wrappers
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Path to a replacement-rule JSON file; the built-in web rules apply
    /// when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<String>,

    /// Path to a style-table JSON file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<String>,
}

fn default_res_dir() -> String {
    "res".to_string()
}

fn default_out_dir() -> String {
    "web".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            res_dir: default_res_dir(),
            out_dir: default_out_dir(),
            rules: None,
            styles: None,
        }
    }
}
