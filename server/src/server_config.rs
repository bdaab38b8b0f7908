use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub static_files_path: String,
    pub session_cleanup_interval_secs: u64,
    pub session_inactivity_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            static_files_path: "static".to_string(),
            session_cleanup_interval_secs: 300,
            session_inactivity_timeout_secs: 3600,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port must be non-zero".to_string());
        }
        if self.session_cleanup_interval_secs == 0 {
            return Err("Session cleanup interval must be non-zero".to_string());
        }
        if self.session_inactivity_timeout_secs == 0 {
            return Err("Session inactivity timeout must be non-zero".to_string());
        }
        Ok(())
    }

    pub fn from_yaml_file(file_path: &str) -> Result<Self, String> {
        let content = std::fs::read_to_string(file_path)
            .map_err(|e| format!("Failed to read config file {}: {}", file_path, e))?;
        let config: ServerConfig = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;

        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        Ok(config)
    }

    pub fn load(file_path: Option<&str>) -> Result<Self, String> {
        match file_path {
            Some(path) => Self::from_yaml_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_port_is_rejected() {
        let config = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let config: ServerConfig = serde_yaml_ng::from_str("port: 8080").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.static_files_path, "static");
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        assert!(ServerConfig::from_yaml_file("does_not_exist.yaml").is_err());
    }
}
