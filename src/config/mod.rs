use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Server configuration, resolved once at startup from the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// TCP port to listen on.
    pub port: u16,
    /// Path of the JSON file backing the users collection.
    pub data_file: PathBuf,
    /// Remote source used to seed the users collection when the file is
    /// absent.
    pub seed_url: String,
    /// Directory served as static assets for the app shell.
    pub static_dir: PathBuf,
    /// Whether the realtime connection endpoint at /ws is mounted.
    pub enable_sockets: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::defaults().with_env_overrides()
    }

    fn defaults() -> Self {
        Self {
            port: 8090,
            data_file: PathBuf::from("database/users.json"),
            seed_url: "https://jsonplaceholder.typicode.com/users".to_string(),
            static_dir: PathBuf::from("dist/assets"),
            enable_sockets: true,
        }
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("PORT") {
            self.port = v.parse().unwrap_or(self.port);
        }
        if let Ok(v) = env::var("DATA_FILE") {
            self.data_file = PathBuf::from(v);
        }
        if let Ok(v) = env::var("SEED_URL") {
            self.seed_url = v;
        }
        if let Ok(v) = env::var("STATIC_DIR") {
            self.static_dir = PathBuf::from(v);
        }
        if let Ok(v) = env::var("ENABLE_SOCKETS") {
            self.enable_sockets = v.parse().unwrap_or(self.enable_sockets);
        }
        self
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::defaults();
        assert_eq!(config.port, 8090);
        assert_eq!(config.data_file, PathBuf::from("database/users.json"));
        assert!(config.seed_url.ends_with("/users"));
        assert!(config.enable_sockets);
    }
}
