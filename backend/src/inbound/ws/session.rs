//! Per-connection relay from the change broadcast to a WebSocket session.

use std::time::{Duration, Instant};

use actix_ws::{Message, MessageStream, ProtocolError, Session};
use futures_util::StreamExt;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tokio::time;
use tracing::{debug, warn};

use crate::domain::ChangeEvent;

/// Time between heartbeats to the client.
#[cfg(not(test))]
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);
#[cfg(test)]
const HEARTBEAT_INTERVAL: Duration = Duration::from_millis(50);

/// Max idle time before disconnecting the client.
#[cfg(not(test))]
const CLIENT_TIMEOUT: Duration = Duration::from_secs(10);
#[cfg(test)]
const CLIENT_TIMEOUT: Duration = Duration::from_millis(100);

enum SessionEnd {
    ClientClosed,
    StreamClosed,
    HeartbeatTimeout,
    NotifierClosed,
    Network,
    Protocol(ProtocolError),
}

/// Pump change events to the client until either side goes away.
///
/// A lagged receiver skips the dropped events and carries on; the client's
/// next list fetch resynchronises it, so losing intermediate signals is
/// harmless.
pub(super) async fn relay_changes(
    mut session: Session,
    mut stream: MessageStream,
    mut receiver: broadcast::Receiver<ChangeEvent>,
) {
    let mut last_heartbeat = Instant::now();
    let mut heartbeat = time::interval(HEARTBEAT_INTERVAL);

    let end = loop {
        let result = tokio::select! {
            _ = heartbeat.tick() => {
                if Instant::now().duration_since(last_heartbeat) > CLIENT_TIMEOUT {
                    Err(SessionEnd::HeartbeatTimeout)
                } else {
                    session.ping(b"").await.map_err(|_| SessionEnd::Network)
                }
            }
            event = receiver.recv() => {
                forward_event(&mut session, event).await
            }
            message = stream.next() => {
                handle_client_message(&mut session, &mut last_heartbeat, message).await
            }
        };

        if let Err(end) = result {
            break end;
        }
    };

    log_session_end(&end);
    let _ = session.close(None).await;
}

async fn forward_event(
    session: &mut Session,
    event: Result<ChangeEvent, RecvError>,
) -> Result<(), SessionEnd> {
    let event = match event {
        Ok(event) => event,
        Err(RecvError::Lagged(skipped)) => {
            warn!(skipped, "change feed receiver lagged");
            return Ok(());
        }
        Err(RecvError::Closed) => return Err(SessionEnd::NotifierClosed),
    };

    let payload = serde_json::to_string(&event).map_err(|err| {
        warn!(error = %err, "change event failed to serialize");
        SessionEnd::NotifierClosed
    })?;
    session.text(payload).await.map_err(|_| SessionEnd::Network)
}

async fn handle_client_message(
    session: &mut Session,
    last_heartbeat: &mut Instant,
    message: Option<Result<Message, ProtocolError>>,
) -> Result<(), SessionEnd> {
    let Some(message) = message else {
        return Err(SessionEnd::StreamClosed);
    };
    match message {
        Ok(Message::Ping(bytes)) => {
            *last_heartbeat = Instant::now();
            session.pong(&bytes).await.map_err(|_| SessionEnd::Network)
        }
        Ok(Message::Pong(_)) => {
            *last_heartbeat = Instant::now();
            Ok(())
        }
        Ok(Message::Close(_)) => Err(SessionEnd::ClientClosed),
        // The feed is one-way; inbound frames only refresh the heartbeat.
        Ok(_) => {
            *last_heartbeat = Instant::now();
            Ok(())
        }
        Err(err) => Err(SessionEnd::Protocol(err)),
    }
}

fn log_session_end(end: &SessionEnd) {
    match end {
        SessionEnd::ClientClosed => debug!("change feed client closed"),
        SessionEnd::StreamClosed => debug!("change feed stream ended"),
        SessionEnd::HeartbeatTimeout => debug!("change feed client timed out"),
        SessionEnd::NotifierClosed => debug!("change notifier shut down"),
        SessionEnd::Network => debug!("change feed connection lost"),
        SessionEnd::Protocol(err) => warn!(error = %err, "change feed protocol error"),
    }
}
