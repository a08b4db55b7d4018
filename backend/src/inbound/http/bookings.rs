//! Booking HTTP handlers.
//!
//! ```text
//! GET    /api/bookings
//! POST   /api/bookings
//! PUT    /api/bookings/{id}
//! DELETE /api/bookings/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{Booking, BookingInput, BookingView, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::listing::ListQuery;
use crate::inbound::http::state::HttpState;
use pagination::{Page, search_page};

/// List bookings with pagination and search.
///
/// Matches the filter against the joined room name, the joined patient name,
/// and the booking identifier.
#[utoipa::path(
    get,
    path = "/api/bookings",
    params(ListQuery),
    responses(
        (status = 200, description = "One page of bookings", body = [BookingView]),
        (status = 400, description = "Unsupported page size", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["bookings"],
    operation_id = "listBookings"
)]
#[get("/bookings")]
pub async fn list_bookings(
    state: web::Data<HttpState>,
    query: web::Query<ListQuery>,
) -> ApiResult<web::Json<Page<BookingView>>> {
    let request = query.page_request()?;
    let bookings = state.bookings.list()?;
    Ok(web::Json(search_page(bookings, query.query(), &request)))
}

/// Create a booking; the referenced room becomes occupied.
#[utoipa::path(
    post,
    path = "/api/bookings",
    request_body = BookingInput,
    responses(
        (status = 201, description = "Booking created", body = Booking),
        (status = 400, description = "Invalid request or unknown room", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["bookings"],
    operation_id = "createBooking"
)]
#[post("/bookings")]
pub async fn create_booking(
    state: web::Data<HttpState>,
    payload: web::Json<BookingInput>,
) -> ApiResult<HttpResponse> {
    let booking = state.bookings.create(payload.into_inner())?;
    Ok(HttpResponse::Created().json(booking))
}

/// Update a booking, transferring room occupancy when the room changes.
#[utoipa::path(
    put,
    path = "/api/bookings/{id}",
    request_body = BookingInput,
    params(("id" = String, Path, description = "Booking identifier")),
    responses(
        (status = 200, description = "Booking updated", body = Booking),
        (status = 400, description = "Invalid request or unknown room", body = Error),
        (status = 404, description = "Booking not found", body = Error)
    ),
    tags = ["bookings"],
    operation_id = "updateBooking"
)]
#[put("/bookings/{id}")]
pub async fn update_booking(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    payload: web::Json<BookingInput>,
) -> ApiResult<web::Json<Booking>> {
    let booking = state.bookings.update(&id, payload.into_inner())?;
    Ok(web::Json(booking))
}

/// Delete a booking; its room becomes available again.
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    params(("id" = String, Path, description = "Booking identifier")),
    responses(
        (status = 204, description = "Booking deleted"),
        (status = 404, description = "Booking not found", body = Error)
    ),
    tags = ["bookings"],
    operation_id = "deleteBooking"
)]
#[delete("/bookings/{id}")]
pub async fn delete_booking(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.bookings.delete(&id)?;
    Ok(HttpResponse::NoContent().finish())
}
