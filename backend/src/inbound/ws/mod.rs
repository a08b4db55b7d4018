//! WebSocket inbound adapter exposing the change feed.
//!
//! Responsibilities:
//! - upgrade `/ws/changes` requests
//! - relay change events as JSON text frames
//! - keep WebSocket framing and heartbeats at the edge of the system

use actix_web::web::Payload;
use actix_web::{HttpRequest, HttpResponse, get, web};
use tracing::error;

use crate::inbound::http::state::HttpState;

mod session;

/// Handle WebSocket upgrade for the change feed.
///
/// Each connected client receives one JSON text frame per mutation, naming
/// the collection that changed, e.g. `{"collection":"rooms"}`. Clients are
/// expected to re-fetch the affected list; no record data travels over the
/// socket.
#[get("/ws/changes")]
pub async fn change_feed(
    state: web::Data<HttpState>,
    req: HttpRequest,
    stream: Payload,
) -> actix_web::Result<HttpResponse> {
    let (response, session, message_stream) =
        actix_ws::handle(&req, stream).inspect_err(|err| {
            error!(error = %err, "WebSocket upgrade failed");
        })?;

    let receiver = state.notifier.subscribe();
    actix_web::rt::spawn(session::relay_changes(session, message_stream, receiver));
    Ok(response)
}
