//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain services and ports and remain testable without real I/O.

use std::sync::Arc;

use crate::domain::{AuthGateway, BookingService, ChangeNotifier, RoomService, UserService};

/// Dependency bundle for HTTP and WebSocket handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Room inventory service.
    pub rooms: RoomService,
    /// Patient record service.
    pub users: UserService,
    /// Booking lifecycle service.
    pub bookings: BookingService,
    /// Gateway to the external identity service.
    pub auth: Arc<dyn AuthGateway>,
    /// Broadcast handle consumed by the change feed.
    pub notifier: ChangeNotifier,
}
