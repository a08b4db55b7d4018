//! Identifier derivation for rooms, patients, and bookings.
//!
//! Room and patient identifiers are deterministic codes derived from the
//! record's name: the uppercased first two letters of each word, each word's
//! leading character code minus 64 ('A' = 1), and the count of
//! non-whitespace characters, all joined by hyphens. The schemes differ only
//! in their literal prefix (`ROOM-` vs `2000-`).
//!
//! Derived codes are NOT globally unique: distinct names can reduce to the
//! same code. The services' name/email uniqueness checks are the only
//! defence, matching the source system.

use std::fmt;

use mockable::Clock;

/// Failure to derive an identifier from a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdDerivationError {
    /// The trimmed name splits into fewer than two words.
    NameTooShort,
}

impl fmt::Display for IdDerivationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameTooShort => write!(f, "name must contain at least 2 words"),
        }
    }
}

impl std::error::Error for IdDerivationError {}

/// Validate the two-word naming rule without deriving an identifier.
///
/// Used by update paths, which keep the existing identifier but still
/// enforce the rule the derivation would have applied.
pub fn ensure_multiword(name: &str) -> Result<(), IdDerivationError> {
    if name.split_whitespace().count() < 2 {
        return Err(IdDerivationError::NameTooShort);
    }
    Ok(())
}

/// Derive a room identifier: `ROOM-<initials>-<positions>-<letters>`.
pub fn room_id(name: &str) -> Result<String, IdDerivationError> {
    Ok(format!("ROOM-{}", name_code(name)?))
}

/// Derive a patient identifier: `2000-<initials>-<positions>-<letters>`.
pub fn user_id(name: &str) -> Result<String, IdDerivationError> {
    Ok(format!("2000-{}", name_code(name)?))
}

/// Derive a booking identifier from the clock: Unix milliseconds as decimal.
///
/// Two submissions within the same millisecond collide. Known gap carried
/// over from the source system; the clock is injected so the behaviour is at
/// least testable.
pub fn booking_id(clock: &dyn Clock) -> String {
    clock.utc().timestamp_millis().to_string()
}

/// Shared code segment: initials, alphabet positions, letter count.
fn name_code(name: &str) -> Result<String, IdDerivationError> {
    let parts: Vec<&str> = name.split_whitespace().collect();
    if parts.len() < 2 {
        return Err(IdDerivationError::NameTooShort);
    }

    let initials: Vec<String> = parts
        .iter()
        .map(|part| part.chars().take(2).flat_map(char::to_uppercase).collect())
        .collect();

    // Raw character code minus 64, no case folding: mirrors the source
    // scheme where 'A' = 1 and anything else lands where it lands.
    let positions: Vec<String> = parts
        .iter()
        .filter_map(|part| part.chars().next())
        .map(|ch| (i64::from(u32::from(ch)) - 64).to_string())
        .collect();

    let letters = name.chars().filter(|ch| !ch.is_whitespace()).count();

    Ok(format!(
        "{}-{}-{letters}",
        initials.join("-"),
        positions.join("-")
    ))
}
