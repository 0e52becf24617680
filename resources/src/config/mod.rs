use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CliConfig {
    /// Service manager URL.
    /// Default: http://127.0.0.1:8080/
    pub url: String,
    /// Bearer token sent with every request, if set.
    pub token: Option<String>,
    /// Log level of smctl itself. Default: warn
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            url: "http://127.0.0.1:8080/".to_string(),
            token: None,
            log_level: "warn".to_string(),
        }
    }
}
