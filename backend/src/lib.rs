//! Hospital ward administration backend.
//!
//! Room inventory, patient records, and booking reservations over a
//! key-value collection store, plus a thin login proxy to a demo identity
//! service. The crate follows a hexagonal layout: `domain` holds the entity
//! rules and ports, `inbound` the HTTP/WebSocket adapters, `outbound` the
//! persistence and upstream-auth adapters, and `server` the wiring.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
