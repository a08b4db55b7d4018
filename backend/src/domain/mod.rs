//! Domain entities, services, and ports.
//!
//! Purpose: keep every business rule (identifier derivation, name and
//! email validation, the booking/room-status coordination) behind typed
//! services that receive the collection store and change notifier as
//! injected dependencies. Inbound adapters translate transport payloads into
//! these types; outbound adapters implement the ports.

pub mod auth;
pub mod booking;
pub mod booking_service;
pub mod error;
pub mod ids;
pub mod notify;
pub mod ports;
pub mod room;
pub mod room_service;
pub mod user;
pub mod user_service;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::booking::{Booking, BookingInput, BookingView};
pub use self::booking_service::BookingService;
pub use self::error::{Error, ErrorCode};
pub use self::notify::{ChangeEvent, ChangeNotifier};
pub use self::ports::{
    AuthGateway, AuthGatewayError, Collection, CollectionStore, SeedSource, SeedSourceError,
    StoreError, UpstreamResponse,
};
pub use self::room::{Room, RoomCategory, RoomInput, RoomStatus};
pub use self::room_service::RoomService;
pub use self::user::{User, UserInput};
pub use self::user_service::UserService;

/// Convenient result alias for operations surfacing domain errors.
pub type ApiResult<T> = Result<T, Error>;
