//! Server construction and route wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;

use crate::domain::{BookingService, ChangeNotifier, RoomService, UserService};
use crate::inbound::http::auth::login;
use crate::inbound::http::bookings::{
    create_booking, delete_booking, list_bookings, update_booking,
};
use crate::inbound::http::health::health;
use crate::inbound::http::rooms::{
    create_room, delete_room, list_rooms, set_room_status, update_room,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, delete_user, list_users, update_user};
use crate::inbound::ws::change_feed;
use crate::outbound::auth::HttpAuthGateway;
use crate::outbound::persistence::JsonFileStore;
use crate::outbound::seed::BundledRoster;
#[cfg(debug_assertions)]
use crate::ApiDoc;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Assemble the dependency bundle from configuration.
#[must_use]
pub fn build_state(config: &ServerConfig) -> HttpState {
    let store = Arc::new(JsonFileStore::new(config.data_dir.clone()));
    let notifier = ChangeNotifier::new();
    HttpState {
        rooms: RoomService::new(store.clone(), notifier.clone()),
        users: UserService::new(store.clone(), notifier.clone(), Arc::new(BundledRoster)),
        bookings: BookingService::new(store, notifier.clone(), Arc::new(DefaultClock)),
        auth: Arc::new(HttpAuthGateway::new(
            reqwest::Client::new(),
            config.auth_upstream_url.clone(),
        )),
        notifier,
    }
}

/// Build the Actix application around a prepared state bundle.
///
/// Shared between the production server and the HTTP integration tests so
/// both exercise the same routing table.
pub fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(login)
        .service(list_rooms)
        .service(create_room)
        .service(update_room)
        .service(delete_room)
        .service(set_room_status)
        .service(list_users)
        .service(create_user)
        .service(update_user)
        .service(delete_user)
        .service(list_bookings)
        .service(create_booking)
        .service(update_booking)
        .service(delete_booking);

    let app = App::new()
        .app_data(state)
        .service(api)
        .service(change_feed)
        .service(health);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server from the given configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: &ServerConfig) -> std::io::Result<Server> {
    let state = web::Data::new(build_state(config));
    let server = HttpServer::new(move || build_app(state.clone()))
        .bind(config.bind_addr)?
        .run();
    Ok(server)
}
