//! Room inventory CRUD and status control.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use super::error::Error;
use super::ids;
use super::notify::ChangeNotifier;
use super::ports::{Collection, CollectionStore, load_records, save_records};
use super::room::{Room, RoomInput, RoomStatus};
use super::ApiResult;

/// Service owning the `rooms` collection.
///
/// `set_status` is shared between the manual admin action and the booking
/// coordinator's side effects; both paths are last-writer-wins overwrites.
#[derive(Clone)]
pub struct RoomService {
    store: Arc<dyn CollectionStore>,
    notifier: ChangeNotifier,
}

impl RoomService {
    /// Build a service over the given store and notifier.
    pub fn new(store: Arc<dyn CollectionStore>, notifier: ChangeNotifier) -> Self {
        Self { store, notifier }
    }

    /// All rooms, sorted by name (case-insensitive), absent key as empty.
    pub fn list(&self) -> ApiResult<Vec<Room>> {
        let mut rooms: Vec<Room> = load_records(self.store.as_ref(), Collection::Rooms)?;
        rooms.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(rooms)
    }

    /// Create a room, deriving its identifier from the name.
    pub fn create(&self, input: RoomInput) -> ApiResult<Room> {
        validate(&input)?;
        let id = ids::room_id(&input.name).map_err(name_error)?;

        let mut rooms: Vec<Room> = load_records(self.store.as_ref(), Collection::Rooms)?;
        let duplicate = rooms
            .iter()
            .any(|room| room.name.to_lowercase() == input.name.to_lowercase());
        if duplicate {
            return Err(Error::conflict("room name already exists")
                .with_details(json!({ "field": "name" })));
        }

        let room = Room {
            id,
            name: input.name,
            capacity: input.capacity,
            category: input.category,
            price: input.price,
            status: input.status,
        };
        rooms.push(room.clone());
        save_records(self.store.as_ref(), Collection::Rooms, &rooms)?;
        self.notifier.notify(Collection::Rooms);
        info!(room = %room.id, "room created");
        Ok(room)
    }

    /// Update a room in place, preserving its identifier.
    ///
    /// Duplication against other rooms is deliberately not re-checked here,
    /// matching the source system.
    pub fn update(&self, id: &str, input: RoomInput) -> ApiResult<Room> {
        validate(&input)?;

        let mut rooms: Vec<Room> = load_records(self.store.as_ref(), Collection::Rooms)?;
        let Some(room) = rooms.iter_mut().find(|room| room.id == id) else {
            return Err(Error::not_found("room not found"));
        };
        room.name = input.name;
        room.capacity = input.capacity;
        room.category = input.category;
        room.price = input.price;
        room.status = input.status;
        let updated = room.clone();

        save_records(self.store.as_ref(), Collection::Rooms, &rooms)?;
        self.notifier.notify(Collection::Rooms);
        info!(room = %id, "room updated");
        Ok(updated)
    }

    /// Delete a room by identifier.
    ///
    /// Bookings referencing the room are left orphaned; their deletion path
    /// tolerates the missing room.
    pub fn delete(&self, id: &str) -> ApiResult<()> {
        let mut rooms: Vec<Room> = load_records(self.store.as_ref(), Collection::Rooms)?;
        let before = rooms.len();
        rooms.retain(|room| room.id != id);
        if rooms.len() == before {
            return Err(Error::not_found("room not found"));
        }

        save_records(self.store.as_ref(), Collection::Rooms, &rooms)?;
        self.notifier.notify(Collection::Rooms);
        info!(room = %id, "room deleted");
        Ok(())
    }

    /// Overwrite a room's status directly.
    pub fn set_status(&self, id: &str, status: RoomStatus) -> ApiResult<Room> {
        let mut rooms: Vec<Room> = load_records(self.store.as_ref(), Collection::Rooms)?;
        let Some(room) = rooms.iter_mut().find(|room| room.id == id) else {
            return Err(Error::not_found("room not found"));
        };
        room.status = status;
        let updated = room.clone();

        save_records(self.store.as_ref(), Collection::Rooms, &rooms)?;
        self.notifier.notify(Collection::Rooms);
        info!(room = %id, status = status.as_str(), "room status changed");
        Ok(updated)
    }
}

fn validate(input: &RoomInput) -> ApiResult<()> {
    ids::ensure_multiword(&input.name).map_err(name_error)?;
    if input.capacity < 1 {
        return Err(Error::invalid_request("capacity must be at least 1")
            .with_details(json!({ "field": "capacity" })));
    }
    if input.price < 0 {
        return Err(Error::invalid_request("price must not be negative")
            .with_details(json!({ "field": "price" })));
    }
    Ok(())
}

fn name_error(err: ids::IdDerivationError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({ "field": "name" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::room::RoomCategory;
    use crate::domain::ErrorCode;
    use crate::outbound::persistence::MemoryStore;
    use rstest::{fixture, rstest};

    fn input(name: &str) -> RoomInput {
        RoomInput {
            name: name.to_owned(),
            capacity: 2,
            category: RoomCategory::Vip,
            price: 1_000_000,
            status: RoomStatus::Available,
        }
    }

    #[fixture]
    fn service() -> RoomService {
        RoomService::new(Arc::new(MemoryStore::default()), ChangeNotifier::new())
    }

    #[rstest]
    fn create_derives_the_identifier(service: RoomService) {
        let room = match service.create(input("VIP Suite")) {
            Ok(room) => room,
            Err(err) => panic!("create should succeed: {err}"),
        };
        assert_eq!(room.id, "ROOM-VI-SU-22-19-8");
        assert_eq!(service.list().unwrap_or_default().len(), 1);
    }

    #[rstest]
    fn single_word_names_are_rejected_and_nothing_persists(service: RoomService) {
        let err = service.create(input("Suite")).err();
        assert_eq!(err.map(|e| e.code), Some(ErrorCode::InvalidRequest));
        assert!(service.list().unwrap_or_default().is_empty());
    }

    #[rstest]
    #[case("VIP Suite")]
    #[case("vip suite")]
    #[case("VIP SUITE")]
    fn duplicate_names_conflict_case_insensitively(service: RoomService, #[case] name: &str) {
        assert!(service.create(input("VIP Suite")).is_ok());
        let err = service.create(input(name)).err();
        assert_eq!(err.map(|e| e.code), Some(ErrorCode::Conflict));
        assert_eq!(service.list().unwrap_or_default().len(), 1);
    }

    #[rstest]
    fn update_preserves_the_identifier(service: RoomService) {
        let created = service.create(input("VIP Suite")).ok();
        let id = created.map(|r| r.id).unwrap_or_default();
        let updated = match service.update(&id, input("Royal Ward")) {
            Ok(room) => room,
            Err(err) => panic!("update should succeed: {err}"),
        };
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Royal Ward");
    }

    #[rstest]
    fn update_missing_room_is_not_found(service: RoomService) {
        let err = service.update("ROOM-XX", input("Some Room")).err();
        assert_eq!(err.map(|e| e.code), Some(ErrorCode::NotFound));
    }

    #[rstest]
    fn delete_removes_the_record(service: RoomService) {
        let id = service
            .create(input("VIP Suite"))
            .map(|r| r.id)
            .unwrap_or_default();
        assert!(service.delete(&id).is_ok());
        assert!(service.list().unwrap_or_default().is_empty());
        assert_eq!(
            service.delete(&id).err().map(|e| e.code),
            Some(ErrorCode::NotFound)
        );
    }

    #[rstest]
    fn set_status_overwrites(service: RoomService) {
        let id = service
            .create(input("VIP Suite"))
            .map(|r| r.id)
            .unwrap_or_default();
        let room = service.set_status(&id, RoomStatus::Maintenance).ok();
        assert_eq!(room.map(|r| r.status), Some(RoomStatus::Maintenance));
    }

    #[rstest]
    fn list_is_sorted_by_name(service: RoomService) {
        assert!(service.create(input("Zulu Ward")).is_ok());
        assert!(service.create(input("alpha ward")).is_ok());
        let names: Vec<String> = service
            .list()
            .unwrap_or_default()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["alpha ward".to_owned(), "Zulu Ward".to_owned()]);
    }

    #[rstest]
    fn mutations_broadcast_room_changes(service: RoomService) {
        let mut receiver = service.notifier.subscribe();
        assert!(service.create(input("VIP Suite")).is_ok());
        assert_eq!(
            receiver.try_recv().map(|event| event.collection),
            Ok(Collection::Rooms)
        );
    }
}
