//! Room inventory HTTP handlers.
//!
//! ```text
//! GET    /api/rooms
//! POST   /api/rooms
//! PUT    /api/rooms/{id}
//! DELETE /api/rooms/{id}
//! PATCH  /api/rooms/{id}/status
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{Error, Room, RoomInput, RoomStatus};
use crate::inbound::http::ApiResult;
use crate::inbound::http::listing::ListQuery;
use crate::inbound::http::state::HttpState;
use pagination::{Page, search_page};

/// Request payload for the status override endpoint.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct RoomStatusRequest {
    /// New status for the room.
    pub status: RoomStatus,
}

/// List rooms with pagination and search.
///
/// Matches the filter against room name, identifier, and status.
#[utoipa::path(
    get,
    path = "/api/rooms",
    params(ListQuery),
    responses(
        (status = 200, description = "One page of rooms", body = [Room]),
        (status = 400, description = "Unsupported page size", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["rooms"],
    operation_id = "listRooms"
)]
#[get("/rooms")]
pub async fn list_rooms(
    state: web::Data<HttpState>,
    query: web::Query<ListQuery>,
) -> ApiResult<web::Json<Page<Room>>> {
    let request = query.page_request()?;
    let rooms = state.rooms.list()?;
    Ok(web::Json(search_page(rooms, query.query(), &request)))
}

/// Create a room.
#[utoipa::path(
    post,
    path = "/api/rooms",
    request_body = RoomInput,
    responses(
        (status = 201, description = "Room created", body = Room),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Duplicate room name", body = Error)
    ),
    tags = ["rooms"],
    operation_id = "createRoom"
)]
#[post("/rooms")]
pub async fn create_room(
    state: web::Data<HttpState>,
    payload: web::Json<RoomInput>,
) -> ApiResult<HttpResponse> {
    let room = state.rooms.create(payload.into_inner())?;
    Ok(HttpResponse::Created().json(room))
}

/// Update a room, keeping its identifier.
#[utoipa::path(
    put,
    path = "/api/rooms/{id}",
    request_body = RoomInput,
    params(("id" = String, Path, description = "Room identifier")),
    responses(
        (status = 200, description = "Room updated", body = Room),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Room not found", body = Error)
    ),
    tags = ["rooms"],
    operation_id = "updateRoom"
)]
#[put("/rooms/{id}")]
pub async fn update_room(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    payload: web::Json<RoomInput>,
) -> ApiResult<web::Json<Room>> {
    let room = state.rooms.update(&id, payload.into_inner())?;
    Ok(web::Json(room))
}

/// Delete a room.
#[utoipa::path(
    delete,
    path = "/api/rooms/{id}",
    params(("id" = String, Path, description = "Room identifier")),
    responses(
        (status = 204, description = "Room deleted"),
        (status = 404, description = "Room not found", body = Error)
    ),
    tags = ["rooms"],
    operation_id = "deleteRoom"
)]
#[delete("/rooms/{id}")]
pub async fn delete_room(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.rooms.delete(&id)?;
    Ok(HttpResponse::NoContent().finish())
}

/// Override a room's status directly.
#[utoipa::path(
    patch,
    path = "/api/rooms/{id}/status",
    request_body = RoomStatusRequest,
    params(("id" = String, Path, description = "Room identifier")),
    responses(
        (status = 200, description = "Status changed", body = Room),
        (status = 404, description = "Room not found", body = Error)
    ),
    tags = ["rooms"],
    operation_id = "setRoomStatus"
)]
#[patch("/rooms/{id}/status")]
pub async fn set_room_status(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    payload: web::Json<RoomStatusRequest>,
) -> ApiResult<web::Json<Room>> {
    let room = state.rooms.set_status(&id, payload.status)?;
    Ok(web::Json(room))
}
