/// Configuration for the catalog server
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Catalog file name used by the published front end
pub const DEFAULT_CATALOG: &str = "nte_time_with_codes.json";

/// Server configuration, read from a JSON file. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to
    pub address: String,
    pub port: u16,
    /// Catalog file path or http(s) URL
    pub catalog: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8080,
            catalog: DEFAULT_CATALOG.to_string(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to the config file
    ///
    /// # Returns
    /// * `Ok(ServerConfig)` - Loaded configuration, defaults filled in
    /// * `Err` - If the file can't be read or parsed
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: ServerConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// `address:port` for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_config_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"port": 9000}"#).unwrap();

        let config = ServerConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.address, "127.0.0.1");
        assert_eq!(config.catalog, DEFAULT_CATALOG);
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
    }

    #[test]
    fn test_invalid_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"port = 9000").unwrap();
        assert!(ServerConfig::load_from_file(file.path()).is_err());
        assert!(ServerConfig::load_from_file(Path::new("/no/such/config.json")).is_err());
    }
}
