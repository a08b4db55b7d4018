//! Bundled seed roster of patient records.
//!
//! The application populates an empty patient collection on first load from
//! a fixed roster shipped with the binary. This crate owns that roster and
//! its loader so the backend does not parse raw JSON at call sites. Records
//! carry only a name and an email; identifiers are assigned by the backend
//! when the roster is persisted for the first time.
//!
//! # Example
//!
//! ```
//! let roster = example_data::bundled_roster().expect("bundled roster parses");
//! assert!(!roster.is_empty());
//! assert!(roster.iter().all(|p| p.email.contains('@')));
//! ```

mod error;
mod roster;

pub use error::RosterError;
pub use roster::{SeedPatient, bundled_roster, roster_from_json};
