//! Seed roster records and their loader.

use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// JSON roster bundled into the binary at compile time.
const BUNDLED_ROSTER: &str = include_str!("../data/roster.json");

/// A patient record awaiting first-load seeding.
///
/// Identifier-less by design: the backend derives identifiers from the name
/// when the roster is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct SeedPatient {
    /// Full patient name; at least two words, as the backend requires.
    pub name: String,
    /// Contact email, unique within the roster.
    pub email: String,
}

/// Parse and validate a roster from raw JSON.
///
/// # Errors
///
/// Returns [`RosterError::Parse`] for malformed JSON, [`RosterError::Empty`]
/// for a roster with no records, and [`RosterError::BlankField`] when a
/// record's name or email is blank once trimmed.
pub fn roster_from_json(json: &str) -> Result<Vec<SeedPatient>, RosterError> {
    let records: Vec<SeedPatient> =
        serde_json::from_str(json).map_err(|err| RosterError::Parse {
            message: err.to_string(),
        })?;

    if records.is_empty() {
        return Err(RosterError::Empty);
    }

    for (index, record) in records.iter().enumerate() {
        if record.name.trim().is_empty() {
            return Err(RosterError::BlankField {
                index,
                field: "name",
            });
        }
        if record.email.trim().is_empty() {
            return Err(RosterError::BlankField {
                index,
                field: "email",
            });
        }
    }

    Ok(records)
}

/// Load the roster bundled with the binary.
///
/// # Errors
///
/// Propagates [`roster_from_json`] failures; these only occur if the bundled
/// data itself is broken, which the crate's tests guard against.
pub fn bundled_roster() -> Result<Vec<SeedPatient>, RosterError> {
    roster_from_json(BUNDLED_ROSTER)
}
