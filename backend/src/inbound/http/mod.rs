//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod bookings;
pub mod error;
pub mod health;
pub mod listing;
pub mod rooms;
pub mod state;
pub mod users;

pub use crate::domain::ApiResult;
