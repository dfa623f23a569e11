//! Server-Sent Events (SSE) streaming of generation progress.

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures_core::Stream;
use std::convert::Infallible;
use std::time::Duration;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

use crate::state::{AppEvent, SharedState};

pub const PHASE_EVENT: &str = "phase";

/// SSE endpoint: clients subscribe here for loading messages and results.
/// Each event is named after its `type` tag so pages can listen selectively.
///
/// The stream opens with a `phase` event carrying the current generation
/// phase. The channel keeps no history, so a page that connects after its
/// request settled learns about it from this first event.
pub async fn sse_handler(
    State(state): State<SharedState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    // Subscribe before reading the phase: anything settling in between is
    // still delivered on the channel.
    let rx = state.subscribe();
    let phase = state.controller.phase();
    let opening = Event::default()
        .event(PHASE_EVENT)
        .data(serde_json::json!({ "phase": phase }).to_string());

    let updates = BroadcastStream::new(rx).filter_map(|result| {
        // Lagged receivers skip what they missed.
        let event = result.ok()?;
        let data = serde_json::to_string(&event).ok()?;
        Some(Ok(Event::default().event(event_name(&event)).data(data)))
    });
    let stream = tokio_stream::once(Ok::<_, Infallible>(opening)).chain(updates);

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    )
}

fn event_name(event: &AppEvent) -> &'static str {
    match event {
        AppEvent::GenerationStarted { .. } => "generation_started",
        AppEvent::LoadingMessage { .. }    => "loading_message",
        AppEvent::PlanReady { .. }         => "plan_ready",
        AppEvent::GenerationFailed { .. }  => "generation_failed",
    }
}
