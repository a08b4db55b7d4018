//! Patient record HTTP handlers.
//!
//! ```text
//! GET    /api/users
//! POST   /api/users
//! PUT    /api/users/{id}
//! DELETE /api/users/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{Error, User, UserInput};
use crate::inbound::http::ApiResult;
use crate::inbound::http::listing::ListQuery;
use crate::inbound::http::state::HttpState;
use pagination::{Page, search_page};

/// List patients with pagination and search.
///
/// Matches the filter against patient name and identifier. The first list
/// after a fresh start seeds the bundled roster.
#[utoipa::path(
    get,
    path = "/api/users",
    params(ListQuery),
    responses(
        (status = 200, description = "One page of patients", body = [User]),
        (status = 400, description = "Unsupported page size", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    query: web::Query<ListQuery>,
) -> ApiResult<web::Json<Page<User>>> {
    let request = query.page_request()?;
    let users = state.users.list()?;
    Ok(web::Json(search_page(users, query.query(), &request)))
}

/// Create a patient.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserInput,
    responses(
        (status = 201, description = "Patient created", body = User),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Duplicate email", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserInput>,
) -> ApiResult<HttpResponse> {
    let user = state.users.create(payload.into_inner())?;
    Ok(HttpResponse::Created().json(user))
}

/// Update a patient, keeping their identifier.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    request_body = UserInput,
    params(("id" = String, Path, description = "Patient identifier")),
    responses(
        (status = 200, description = "Patient updated", body = User),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Patient not found", body = Error),
        (status = 409, description = "Duplicate email", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    payload: web::Json<UserInput>,
) -> ApiResult<web::Json<User>> {
    let user = state.users.update(&id, payload.into_inner())?;
    Ok(web::Json(user))
}

/// Delete a patient.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "Patient identifier")),
    responses(
        (status = 204, description = "Patient deleted"),
        (status = 404, description = "Patient not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.users.delete(&id)?;
    Ok(HttpResponse::NoContent().finish())
}
