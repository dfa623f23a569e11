//! Shared application state for the web server.

use std::sync::Arc;
use std::time::Duration;

use bioventure_llm::PlanGenerator;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::controller::Controller;
use crate::templates::Templates;

/// Events pushed to connected clients via SSE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// A blueprint request was sent
    GenerationStarted { request_id: u64 },
    /// The cosmetic loading message advanced
    LoadingMessage { request_id: u64, step: usize, message: String },
    /// A blueprint arrived and is now displayed
    PlanReady { request_id: u64, business_name: String },
    /// The request failed; only the generic notice is exposed
    GenerationFailed { request_id: u64, notice: String },
}

/// Shared state injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<Controller>,
    pub templates: Arc<Templates>,
    /// Broadcast channel for SSE push events
    pub event_tx: broadcast::Sender<AppEvent>,
}

impl AppState {
    pub fn new(generator: PlanGenerator, loading_interval: Duration) -> Self {
        let (event_tx, _) = broadcast::channel(256);
        let controller = Controller::new(generator, event_tx.clone(), loading_interval);
        Self {
            controller: Arc::new(controller),
            templates: Arc::new(Templates::new()),
            event_tx,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.event_tx.subscribe()
    }
}

pub type SharedState = Arc<AppState>;
