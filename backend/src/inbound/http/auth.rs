//! Login pass-through HTTP handler.
//!
//! ```text
//! POST /api/auth/login
//! ```
//!
//! Credentials are forwarded to the external identity service and its
//! response is relayed verbatim, success or failure. On success the issued
//! access token is additionally set as an `HttpOnly` cookie so browser
//! clients never handle it in script.

use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::{Error, LoginCredentials};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Name of the cookie carrying the upstream access token.
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// Token lifetime requested when the client does not specify one.
const DEFAULT_EXPIRES_IN_MINS: u32 = 30;

/// Login request body, forwarded upstream after validation.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Upstream account username.
    pub username: String,
    /// Upstream account password.
    pub password: String,
    /// Requested token lifetime in minutes; defaults to 30.
    #[serde(default)]
    pub expires_in_mins: Option<u32>,
}

/// Forward a login attempt to the identity service.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Upstream accepted the credentials; body relayed verbatim"),
        (status = 400, description = "Missing username or password", body = Error),
        (status = 500, description = "Identity service unreachable")
    ),
    tags = ["auth"],
    operation_id = "login"
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let request = payload.into_inner();
    let credentials = LoginCredentials::try_from_parts(&request.username, &request.password)
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    let expires = request.expires_in_mins.unwrap_or(DEFAULT_EXPIRES_IN_MINS);

    let upstream = match state.auth.login(&credentials, expires).await {
        Ok(upstream) => upstream,
        Err(err) => {
            warn!(error = %err, "identity service round-trip failed");
            // Shape fixed by the public contract, not the domain envelope.
            return Ok(HttpResponse::InternalServerError()
                .json(json!({ "message": "Internal server error" })));
        }
    };

    let status =
        StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut builder = HttpResponse::build(status);
    if status.is_success() {
        if let Some(token) = upstream.access_token() {
            builder.cookie(
                Cookie::build(ACCESS_TOKEN_COOKIE, token.to_owned())
                    .path("/")
                    .http_only(true)
                    .same_site(SameSite::Lax)
                    .finish(),
            );
        }
    }
    Ok(builder.json(upstream.body))
}
