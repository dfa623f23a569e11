//! Cosmetic loading-message ticker shown while a blueprint is generated.
//!
//! The ticker is a spawned task stepping through a fixed message list; it
//! stays on the last message once reached. Dropping the handle aborts the
//! task; `stop` also waits for it, so no step is published afterwards.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::state::AppEvent;

pub const LOADING_MESSAGES: [&str; 5] = [
    "Analyzing regulatory frameworks...",
    "Cross-referencing peptide market data...",
    "Mapping competitor landscape...",
    "Modeling unit economics...",
    "Drafting launch roadmap...",
];

pub struct LoadingTicker {
    step: Arc<AtomicUsize>,
    handle: JoinHandle<()>,
}

impl LoadingTicker {
    /// Publish the first message immediately, then advance one step per
    /// `interval` until the last message.
    pub fn start(interval: Duration, request_id: u64, events: broadcast::Sender<AppEvent>) -> Self {
        let step = Arc::new(AtomicUsize::new(0));
        let _ = events.send(loading_event(request_id, 0));

        let shared = step.clone();
        let handle = tokio::spawn(async move {
            let mut ticks = tokio::time::interval(interval);
            ticks.tick().await; // first tick completes immediately

            loop {
                ticks.tick().await;
                let next = shared.load(Ordering::Acquire) + 1;
                if next >= LOADING_MESSAGES.len() {
                    break;
                }
                shared.store(next, Ordering::Release);
                tracing::trace!(request_id, step = next, "loading message advanced");
                let _ = events.send(loading_event(request_id, next));
            }
        });

        Self { step, handle }
    }

    pub fn step(&self) -> usize {
        self.step.load(Ordering::Acquire)
    }

    pub fn message(&self) -> &'static str {
        LOADING_MESSAGES[self.step().min(LOADING_MESSAGES.len() - 1)]
    }

    /// Abort the task and wait until it has finished. A step being sent on
    /// another worker completes before this returns.
    pub async fn stop(mut self) {
        self.handle.abort();
        let _ = (&mut self.handle).await;
    }
}

impl Drop for LoadingTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn loading_event(request_id: u64, step: usize) -> AppEvent {
    AppEvent::LoadingMessage {
        request_id,
        step,
        message: LOADING_MESSAGES[step].to_string(),
    }
}
