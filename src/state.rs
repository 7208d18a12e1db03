use std::path::PathBuf;

use crate::config::AppConfig;
use crate::store::UserStore;
use crate::ws::ConnectionRegistry;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: UserStore,
    pub http: reqwest::Client,
    pub seed_url: String,
    pub static_dir: PathBuf,
    pub enable_sockets: bool,
    pub connections: ConnectionRegistry,
}

impl AppState {
    pub fn new(
        store: UserStore,
        seed_url: impl Into<String>,
        static_dir: PathBuf,
        enable_sockets: bool,
    ) -> Self {
        Self {
            store,
            http: reqwest::Client::new(),
            seed_url: seed_url.into(),
            static_dir,
            enable_sockets,
            connections: ConnectionRegistry::default(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            UserStore::new(&config.data_file),
            config.seed_url.clone(),
            config.static_dir.clone(),
            config.enable_sockets,
        )
    }
}
