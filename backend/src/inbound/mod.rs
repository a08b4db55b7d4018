//! Driving adapters translating transports into domain calls.

pub mod http;
pub mod ws;
