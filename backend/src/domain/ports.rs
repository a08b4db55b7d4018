//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters
//! (the collection store, the upstream identity service, the seed roster).
//! Each trait exposes strongly typed errors so adapters map their failures
//! into predictable variants.
//!
//! The collection store is synchronous by design: the concurrency model is
//! strictly serial and the store is process-local, so an async trait would
//! buy nothing. The auth gateway is async because it is a genuine network
//! round-trip.

use std::fmt;

use async_trait::async_trait;
use example_data::SeedPatient;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use super::auth::LoginCredentials;
use super::error::Error;

/// Named collections persisted by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    /// Room inventory records.
    Rooms,
    /// Patient records.
    Users,
    /// Booking reservations.
    Bookings,
}

impl Collection {
    /// Stable storage key for the collection.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Rooms => "rooms",
            Self::Users => "users",
            Self::Bookings => "bookings",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Errors surfaced by collection store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The collection could not be read.
    #[error("collection '{collection}' read failed: {message}")]
    Read {
        /// Collection key involved.
        collection: &'static str,
        /// Adapter-level description.
        message: String,
    },
    /// The collection could not be written.
    #[error("collection '{collection}' write failed: {message}")]
    Write {
        /// Collection key involved.
        collection: &'static str,
        /// Adapter-level description.
        message: String,
    },
}

impl StoreError {
    /// Helper for read failures.
    pub fn read(collection: Collection, message: impl Into<String>) -> Self {
        Self::Read {
            collection: collection.key(),
            message: message.into(),
        }
    }

    /// Helper for write failures.
    pub fn write(collection: Collection, message: impl Into<String>) -> Self {
        Self::Write {
            collection: collection.key(),
            message: message.into(),
        }
    }
}

/// Persistence port over named collections of JSON-encoded records.
///
/// `load` returns `None` when the key has never been written; callers treat
/// that as an empty collection (except first-load seeding, which
/// distinguishes "never written" from "explicitly emptied").
pub trait CollectionStore: Send + Sync {
    /// Read the raw JSON array stored under the collection key.
    fn load(&self, collection: Collection) -> Result<Option<String>, StoreError>;

    /// Replace the collection with the given raw JSON array.
    fn save(&self, collection: Collection, payload: &str) -> Result<(), StoreError>;
}

/// Load and decode a collection, treating an absent key as empty.
pub(crate) fn load_records<T: DeserializeOwned>(
    store: &dyn CollectionStore,
    collection: Collection,
) -> Result<Vec<T>, Error> {
    let Some(raw) = store
        .load(collection)
        .map_err(|err| Error::internal(err.to_string()))?
    else {
        return Ok(Vec::new());
    };
    serde_json::from_str(&raw)
        .map_err(|err| Error::internal(format!("collection '{collection}' is corrupt: {err}")))
}

/// Encode and persist a whole collection.
pub(crate) fn save_records<T: Serialize>(
    store: &dyn CollectionStore,
    collection: Collection,
    records: &[T],
) -> Result<(), Error> {
    let payload = serde_json::to_string(records)
        .map_err(|err| Error::internal(format!("collection '{collection}' encode failed: {err}")))?;
    store
        .save(collection, &payload)
        .map_err(|err| Error::internal(err.to_string()))
}

/// Relayed response from the upstream identity service.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    /// Upstream HTTP status code.
    pub status: u16,
    /// Upstream JSON body, relayed verbatim.
    pub body: Value,
}

impl UpstreamResponse {
    /// Access token issued by the upstream on success, when present.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.body.get("accessToken").and_then(Value::as_str)
    }
}

/// Errors surfaced by the auth gateway adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthGatewayError {
    /// The upstream request could not be completed at all.
    #[error("upstream auth request failed: {message}")]
    Transport {
        /// Adapter-level description.
        message: String,
    },
}

impl AuthGatewayError {
    /// Helper for transport-level failures.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}

/// Gateway port forwarding login attempts to the external identity service.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Forward the credentials upstream, returning whatever it answered.
    async fn login(
        &self,
        credentials: &LoginCredentials,
        expires_in_mins: u32,
    ) -> Result<UpstreamResponse, AuthGatewayError>;
}

/// Errors surfaced by seed roster adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedSourceError {
    /// The roster could not be loaded or failed validation.
    #[error("seed roster unavailable: {message}")]
    Unavailable {
        /// Adapter-level description.
        message: String,
    },
}

/// Source of the patient roster used for first-load seeding.
pub trait SeedSource: Send + Sync {
    /// The id-less records to seed an empty patient collection with.
    fn roster(&self) -> Result<Vec<SeedPatient>, SeedSourceError>;
}
