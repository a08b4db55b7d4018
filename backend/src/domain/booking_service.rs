//! Booking lifecycle and room-status coordination.
//!
//! Every booking mutation also rewrites the rooms collection: creating a
//! booking occupies its room, deleting one frees it, and moving a booking to
//! another room frees the original and occupies the new one. Rooms are saved
//! before bookings so a failure between the two writes leaves a room marked
//! occupied with no booking, never a booking against a free room.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::Clock;
use serde_json::json;
use tracing::info;

use super::ApiResult;
use super::booking::{Booking, BookingInput, BookingView};
use super::error::Error;
use super::ids;
use super::notify::ChangeNotifier;
use super::ports::{Collection, CollectionStore, load_records, save_records};
use super::room::{Room, RoomStatus};
use super::user::User;

/// Service owning the `bookings` collection and the coupled room statuses.
#[derive(Clone)]
pub struct BookingService {
    store: Arc<dyn CollectionStore>,
    notifier: ChangeNotifier,
    clock: Arc<dyn Clock>,
}

impl BookingService {
    /// Build a service over the given store, notifier, and clock.
    pub fn new(
        store: Arc<dyn CollectionStore>,
        notifier: ChangeNotifier,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            notifier,
            clock,
        }
    }

    /// All bookings joined with room and patient names.
    ///
    /// Orphaned references yield `None` names rather than an error.
    pub fn list(&self) -> ApiResult<Vec<BookingView>> {
        let bookings: Vec<Booking> = load_records(self.store.as_ref(), Collection::Bookings)?;
        let rooms: Vec<Room> = load_records(self.store.as_ref(), Collection::Rooms)?;
        let users: Vec<User> = load_records(self.store.as_ref(), Collection::Users)?;

        Ok(bookings
            .into_iter()
            .map(|booking| {
                let room_name = rooms
                    .iter()
                    .find(|room| room.id == booking.room_id)
                    .map(|room| room.name.clone());
                let user_name = users
                    .iter()
                    .find(|user| user.id == booking.user_id)
                    .map(|user| user.name.clone());
                BookingView {
                    booking,
                    room_name,
                    user_name,
                }
            })
            .collect())
    }

    /// Create a booking and mark its room occupied.
    pub fn create(&self, input: BookingInput) -> ApiResult<Booking> {
        validate(&input)?;

        let mut rooms: Vec<Room> = load_records(self.store.as_ref(), Collection::Rooms)?;
        let Some(room) = rooms.iter_mut().find(|room| room.id == input.room_id) else {
            return Err(
                Error::invalid_request("no room selected").with_details(json!({ "field": "roomId" }))
            );
        };
        let total_price = room.price * i64::from(input.days);
        room.status = RoomStatus::Occupied;

        let booking = Booking {
            id: ids::booking_id(self.clock.as_ref()),
            room_id: input.room_id,
            user_id: input.user_id,
            booking_date: start_of_day(input.booking_date)?,
            days: input.days,
            total_price,
        };

        let mut bookings: Vec<Booking> = load_records(self.store.as_ref(), Collection::Bookings)?;
        bookings.push(booking.clone());

        save_records(self.store.as_ref(), Collection::Rooms, &rooms)?;
        save_records(self.store.as_ref(), Collection::Bookings, &bookings)?;
        self.notifier.notify(Collection::Rooms);
        self.notifier.notify(Collection::Bookings);
        info!(booking = %booking.id, room = %booking.room_id, "booking created");
        Ok(booking)
    }

    /// Update a booking, transferring room occupancy when the room changes.
    pub fn update(&self, id: &str, input: BookingInput) -> ApiResult<Booking> {
        validate(&input)?;

        let mut bookings: Vec<Booking> = load_records(self.store.as_ref(), Collection::Bookings)?;
        let Some(existing) = bookings.iter_mut().find(|booking| booking.id == id) else {
            return Err(Error::not_found("booking not found"));
        };
        let previous_room_id = existing.room_id.clone();

        let mut rooms: Vec<Room> = load_records(self.store.as_ref(), Collection::Rooms)?;
        let Some(room) = rooms.iter().find(|room| room.id == input.room_id) else {
            return Err(
                Error::invalid_request("no room selected").with_details(json!({ "field": "roomId" }))
            );
        };
        let total_price = room.price * i64::from(input.days);

        // Free the old room only on an actual move; the previous room may
        // already be gone, in which case there is nothing to free.
        if previous_room_id != input.room_id {
            if let Some(old) = rooms.iter_mut().find(|room| room.id == previous_room_id) {
                old.status = RoomStatus::Available;
            }
        }
        if let Some(new) = rooms.iter_mut().find(|room| room.id == input.room_id) {
            new.status = RoomStatus::Occupied;
        }

        existing.room_id = input.room_id;
        existing.user_id = input.user_id;
        existing.booking_date = start_of_day(input.booking_date)?;
        existing.days = input.days;
        existing.total_price = total_price;
        let updated = existing.clone();

        save_records(self.store.as_ref(), Collection::Rooms, &rooms)?;
        save_records(self.store.as_ref(), Collection::Bookings, &bookings)?;
        self.notifier.notify(Collection::Rooms);
        self.notifier.notify(Collection::Bookings);
        info!(booking = %id, room = %updated.room_id, "booking updated");
        Ok(updated)
    }

    /// Delete a booking and free its room.
    ///
    /// A booking whose room was deleted in the meantime still deletes
    /// cleanly; the room-freeing step is skipped.
    pub fn delete(&self, id: &str) -> ApiResult<()> {
        let mut bookings: Vec<Booking> = load_records(self.store.as_ref(), Collection::Bookings)?;
        let Some(index) = bookings.iter().position(|booking| booking.id == id) else {
            return Err(Error::not_found("booking not found"));
        };
        let removed = bookings.remove(index);

        let mut rooms: Vec<Room> = load_records(self.store.as_ref(), Collection::Rooms)?;
        if let Some(room) = rooms.iter_mut().find(|room| room.id == removed.room_id) {
            room.status = RoomStatus::Available;
        }

        save_records(self.store.as_ref(), Collection::Rooms, &rooms)?;
        save_records(self.store.as_ref(), Collection::Bookings, &bookings)?;
        self.notifier.notify(Collection::Rooms);
        self.notifier.notify(Collection::Bookings);
        info!(booking = %id, room = %removed.room_id, "booking deleted");
        Ok(())
    }
}

fn validate(input: &BookingInput) -> ApiResult<()> {
    if input.days < 1 {
        return Err(Error::invalid_request("days must be at least 1")
            .with_details(json!({ "field": "days" })));
    }
    Ok(())
}

/// Store the calendar date as midnight UTC.
fn start_of_day(date: NaiveDate) -> ApiResult<chrono::DateTime<chrono::Utc>> {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .ok_or_else(|| Error::invalid_request("invalid booking date"))
}
