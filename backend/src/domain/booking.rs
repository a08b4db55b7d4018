//! Booking reservations.

use chrono::{DateTime, NaiveDate, Utc};
use pagination::Searchable;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A booking record as persisted in the `bookings` collection.
///
/// `room_id`/`user_id` are weak references: deleting the referenced room or
/// patient neither cascades nor blocks, so orphans are possible.
/// `total_price` is a snapshot of `room.price * days` at write time and is
/// not recomputed when the room's price later changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Booking {
    /// Timestamp-derived identifier (Unix milliseconds as decimal).
    #[schema(example = "1735689600123")]
    pub id: String,
    /// Referenced room identifier.
    pub room_id: String,
    /// Referenced patient identifier.
    pub user_id: String,
    /// Start of the reservation, stored as a UTC instant.
    pub booking_date: DateTime<Utc>,
    /// Duration in days, at least 1.
    pub days: u32,
    /// Derived total in whole rupiah at the time of the write.
    pub total_price: i64,
}

/// Caller-supplied fields for creating or updating a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct BookingInput {
    /// Room to reserve.
    pub room_id: String,
    /// Patient the reservation is for.
    pub user_id: String,
    /// Calendar date the reservation starts on.
    #[schema(example = "2026-01-15")]
    pub booking_date: NaiveDate,
    /// Duration in days, at least 1.
    pub days: u32,
}

/// A booking joined with the names of its referenced room and patient.
///
/// Names are `None` when the reference is orphaned; search treats a missing
/// name as an empty string, matching the source list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingView {
    /// The underlying booking record.
    #[serde(flatten)]
    pub booking: Booking,
    /// Name of the referenced room, when it still exists.
    pub room_name: Option<String>,
    /// Name of the referenced patient, when they still exist.
    pub user_name: Option<String>,
}

impl Searchable for BookingView {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.room_name.clone().unwrap_or_default(),
            self.user_name.clone().unwrap_or_default(),
            self.booking.id.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn booking() -> Booking {
        Booking {
            id: "1735689600123".to_owned(),
            room_id: "ROOM-VI-SU-22-19-8".to_owned(),
            user_id: "2000-JO-DO-10-4-7".to_owned(),
            booking_date: Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).single().unwrap_or_default(),
            days: 3,
            total_price: 3_000_000,
        }
    }

    #[rstest]
    fn record_serializes_camel_case_with_iso_date() {
        let value = serde_json::to_value(booking()).unwrap_or_default();
        assert_eq!(value.get("roomId").and_then(|v| v.as_str()), Some("ROOM-VI-SU-22-19-8"));
        assert_eq!(value.get("totalPrice").and_then(serde_json::Value::as_i64), Some(3_000_000));
        let date = value.get("bookingDate").and_then(|v| v.as_str()).unwrap_or_default();
        assert!(date.starts_with("2026-01-15T00:00:00"));
    }

    #[rstest]
    fn view_flattens_the_booking_and_searches_joined_names() {
        let view = BookingView {
            booking: booking(),
            room_name: Some("VIP Suite".to_owned()),
            user_name: None,
        };
        let value = serde_json::to_value(&view).unwrap_or_default();
        assert!(value.get("roomId").is_some());
        assert_eq!(value.get("roomName").and_then(|v| v.as_str()), Some("VIP Suite"));

        let fields = view.search_fields();
        assert!(fields.contains(&"VIP Suite".to_owned()));
        assert!(fields.contains(&String::new()));
        assert!(fields.contains(&"1735689600123".to_owned()));
    }
}
