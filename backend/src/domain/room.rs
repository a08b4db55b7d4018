//! Room inventory records.

use pagination::Searchable;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Room category, fixed by the admissions workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RoomCategory {
    /// Premium single-occupancy rooms.
    #[serde(rename = "VIP")]
    Vip,
    /// Standard ward rooms.
    Regular,
    /// Intensive care units.
    #[serde(rename = "ICU")]
    Icu,
}

/// Availability status of a room.
///
/// `Occupied` is maintained as a side effect of booking operations;
/// `Maintenance` is an admin-only manual state orthogonal to bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RoomStatus {
    /// Free for booking.
    Available,
    /// Held by an active booking.
    Occupied,
    /// Taken out of service by an administrator.
    Maintenance,
}

impl RoomStatus {
    /// Wire/display spelling of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
            Self::Maintenance => "Maintenance",
        }
    }
}

/// A room record as persisted in the `rooms` collection.
///
/// ## Invariants
/// - `id` is derived from `name` at creation and never changes.
/// - `status == Occupied` iff exactly one active booking references this
///   room. Maintained by convention: every booking mutation path patches it,
///   but nothing structurally enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Room {
    /// Derived identifier, e.g. `ROOM-VI-SU-22-19-8`.
    #[schema(example = "ROOM-VI-SU-22-19-8")]
    pub id: String,
    /// Display name; at least two words.
    #[schema(example = "VIP Suite")]
    pub name: String,
    /// Patient capacity, at least 1.
    pub capacity: u32,
    /// Room category.
    pub category: RoomCategory,
    /// Price per day in whole rupiah.
    #[schema(example = 1_000_000_i64)]
    pub price: i64,
    /// Availability status.
    pub status: RoomStatus,
}

/// Caller-supplied fields for creating or updating a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct RoomInput {
    /// Display name; at least two words.
    pub name: String,
    /// Patient capacity, at least 1.
    pub capacity: u32,
    /// Room category.
    pub category: RoomCategory,
    /// Price per day in whole rupiah.
    pub price: i64,
    /// Availability status.
    pub status: RoomStatus,
}

impl Searchable for Room {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.id.clone(),
            self.status.as_str().to_owned(),
        ]
    }
}
