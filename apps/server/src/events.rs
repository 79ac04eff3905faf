use serde_json::Value;
use tokio::sync::broadcast;

/// Event names pushed to display clients.
pub const PORTFOLIO_UPDATE_START: &str = "portfolio:update-start";
pub const PORTFOLIO_UPDATE_COMPLETE: &str = "portfolio:update-complete";
pub const PORTFOLIO_UPDATE_ERROR: &str = "portfolio:update-error";

/// Serializable envelope that carries event names and optional payloads.
#[derive(Clone, Debug)]
pub struct ServerEvent {
    pub name: &'static str,
    pub payload: Option<Value>,
}

impl ServerEvent {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            payload: None,
        }
    }

    pub fn with_payload(name: &'static str, payload: Value) -> Self {
        Self {
            name,
            payload: Some(payload),
        }
    }
}

/// Broadcast bus that fans out refresh events to connected clients.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ServerEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: ServerEvent) {
        // Sending fails only when nobody is listening.
        let _ = self.sender.send(event);
    }
}
