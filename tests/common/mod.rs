use std::path::PathBuf;

use anyhow::Result;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::net::TcpListener;

use skillcrucial_server::{app, state::AppState, store::UserStore};

/// A server under test plus the seed-source stub backing it. Each test gets
/// its own instance with a fresh data file, so tests can run concurrently.
pub struct TestServer {
    pub base_url: String,
    pub data_file: PathBuf,
    _data_dir: TempDir,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Parse the backing file as it currently sits on disk.
    pub fn stored_users(&self) -> Result<Value> {
        let text = std::fs::read_to_string(&self.data_file)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Default remote dataset served by the seed stub.
pub fn seed_payload() -> Value {
    json!([{ "id": 1, "name": "A" }])
}

/// Serve a fixed JSON array at /users on an ephemeral port, standing in for
/// the remote users resource.
async fn spawn_seed_source(payload: Value) -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let router = Router::new().route(
        "/users",
        get(move || {
            let payload = payload.clone();
            async move { Json(payload) }
        }),
    );

    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok(format!("http://{}/users", addr))
}

pub async fn spawn_server() -> Result<TestServer> {
    spawn_server_with_payload(seed_payload()).await
}

pub async fn spawn_server_with_payload(payload: Value) -> Result<TestServer> {
    let seed_url = spawn_seed_source(payload).await?;
    spawn_server_with_seed_url(&seed_url).await
}

/// Spawn the app in-process against a temp data file and the given seed URL.
pub async fn spawn_server_with_seed_url(seed_url: &str) -> Result<TestServer> {
    let data_dir = tempfile::tempdir()?;
    let data_file = data_dir.path().join("users.json");

    let state = AppState::new(
        UserStore::new(&data_file),
        seed_url,
        PathBuf::from("dist/assets"),
        true,
    );

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app(state)).await;
    });

    Ok(TestServer {
        base_url: format!("http://{}", addr),
        data_file,
        _data_dir: data_dir,
    })
}
