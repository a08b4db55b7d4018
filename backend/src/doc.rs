//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for the
//! REST API. List endpoints return a pagination envelope whose item type
//! varies per endpoint; the envelope itself is documented in prose on each
//! path rather than as a registered generic schema.

use utoipa::OpenApi;

use crate::domain::booking::{Booking, BookingInput, BookingView};
use crate::domain::error::{Error, ErrorCode};
use crate::domain::room::{Room, RoomCategory, RoomInput, RoomStatus};
use crate::domain::user::{User, UserInput};
use crate::inbound::http::auth::LoginRequest;
use crate::inbound::http::health::HealthResponse;
use crate::inbound::http::rooms::RoomStatusRequest;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hospital administration API",
        description = "Room inventory, patient records, bookings, and login pass-through."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::auth::login,
        crate::inbound::http::rooms::list_rooms,
        crate::inbound::http::rooms::create_room,
        crate::inbound::http::rooms::update_room,
        crate::inbound::http::rooms::delete_room,
        crate::inbound::http::rooms::set_room_status,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::bookings::list_bookings,
        crate::inbound::http::bookings::create_booking,
        crate::inbound::http::bookings::update_booking,
        crate::inbound::http::bookings::delete_booking,
        crate::inbound::http::health::health,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Room,
        RoomCategory,
        RoomStatus,
        RoomInput,
        RoomStatusRequest,
        User,
        UserInput,
        Booking,
        BookingInput,
        BookingView,
        LoginRequest,
        HealthResponse,
    )),
    tags(
        (name = "auth", description = "Login pass-through to the identity service"),
        (name = "rooms", description = "Room inventory"),
        (name = "users", description = "Patient records"),
        (name = "bookings", description = "Reservations and room occupancy"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;
