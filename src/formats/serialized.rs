//! serde-backed formats

use crate::model::ServerBlock;

/// Pretty-printed JSON array of servers, newline-terminated
pub fn to_json(servers: &[ServerBlock]) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(servers)?;
    json.push('\n');
    Ok(json)
}

/// YAML sequence of servers
pub fn to_yaml(servers: &[ServerBlock]) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(servers)
}
