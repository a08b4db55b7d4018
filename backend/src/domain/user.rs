//! Patient records.

use pagination::Searchable;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A patient record as persisted in the `users` collection.
///
/// ## Invariants
/// - `id` is derived from `name` at creation and never changes.
/// - `email` is unique across the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct User {
    /// Derived identifier, e.g. `2000-JO-DO-10-4-7`.
    #[schema(example = "2000-JO-DO-10-4-7")]
    pub id: String,
    /// Full name; at least two words.
    #[schema(example = "John Doe")]
    pub name: String,
    /// Contact email, unique across patients.
    #[schema(example = "john.doe@example.com")]
    pub email: String,
}

/// Caller-supplied fields for creating or updating a patient.
///
/// When `email` is absent the service derives one from the name; an
/// explicitly supplied email is never overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct UserInput {
    /// Full name; at least two words.
    pub name: String,
    /// Contact email; derived from the name when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Default email derived from a name: lowercase, whitespace runs replaced by
/// dots, at `example.com`.
#[must_use]
pub fn derive_email(name: &str) -> String {
    let lowered = name.to_lowercase();
    let local: Vec<&str> = lowered.split_whitespace().collect();
    format!("{}@example.com", local.join("."))
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<String> {
        vec![self.name.clone(), self.id.clone()]
    }
}
