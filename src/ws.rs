use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;

use crate::state::AppState;

/// Registry of live realtime connections, owned by the app state.
///
/// The /ws endpoint is a connection-tracking stub: clients may connect and
/// are counted, inbound frames are dropped, nothing is ever broadcast.
#[derive(Clone, Default)]
pub struct ConnectionRegistry {
    next_id: Arc<AtomicU64>,
    live: Arc<Mutex<HashSet<u64>>>,
}

impl ConnectionRegistry {
    pub fn add(&self) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.live
            .lock()
            .expect("connection registry poisoned")
            .insert(id);
        id
    }

    pub fn remove(&self, id: u64) {
        self.live
            .lock()
            .expect("connection registry poisoned")
            .remove(&id);
    }

    pub fn len(&self) -> usize {
        self.live.lock().expect("connection registry poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// GET /ws - accept a realtime connection and track it until it closes.
pub async fn upgrade(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| track(state.connections.clone(), socket))
}

async fn track(registry: ConnectionRegistry, mut socket: WebSocket) {
    let id = registry.add();
    tracing::debug!(connection = id, live = registry.len(), "realtime client connected");

    while let Some(Ok(message)) = socket.recv().await {
        if matches!(message, Message::Close(_)) {
            break;
        }
        // inbound data is ignored
    }

    registry.remove(id);
    tracing::debug!(connection = id, live = registry.len(), "realtime client disconnected");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_tracks_adds_and_removes() {
        let registry = ConnectionRegistry::default();
        assert!(registry.is_empty());

        let a = registry.add();
        let b = registry.add();
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);

        registry.remove(a);
        assert_eq!(registry.len(), 1);
        registry.remove(b);
        assert!(registry.is_empty());

        // Removing an unknown id is a no-op.
        registry.remove(a);
        assert!(registry.is_empty());
    }
}
