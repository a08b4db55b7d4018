//! Patient record CRUD with first-load seeding.

use std::sync::{Arc, OnceLock};

use regex::Regex;
use serde_json::json;
use tracing::info;

use super::ApiResult;
use super::error::Error;
use super::ids;
use super::notify::ChangeNotifier;
use super::ports::{Collection, CollectionStore, SeedSource, save_records};
use super::user::{User, UserInput, derive_email};

/// Shape check only; deliverability is out of scope.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // The pattern is a constant; compilation cannot fail at runtime.
        Regex::new(EMAIL_PATTERN).expect("email pattern must compile")
    })
}

/// Service owning the `users` collection.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn CollectionStore>,
    notifier: ChangeNotifier,
    seeds: Arc<dyn SeedSource>,
}

impl UserService {
    /// Build a service over the given store, notifier, and seed roster.
    pub fn new(
        store: Arc<dyn CollectionStore>,
        notifier: ChangeNotifier,
        seeds: Arc<dyn SeedSource>,
    ) -> Self {
        Self {
            store,
            notifier,
            seeds,
        }
    }

    /// All patients, seeding the roster when the collection key is absent.
    ///
    /// Seeding happens only when the key has never been written. A collection
    /// explicitly emptied by deletions stays empty.
    pub fn list(&self) -> ApiResult<Vec<User>> {
        let raw = self
            .store
            .load(Collection::Users)
            .map_err(|err| Error::internal(err.to_string()))?;
        match raw {
            Some(payload) => serde_json::from_str(&payload)
                .map_err(|err| Error::internal(format!("collection 'users' is corrupt: {err}"))),
            None => self.seed_initial(),
        }
    }

    fn seed_initial(&self) -> ApiResult<Vec<User>> {
        let roster = self
            .seeds
            .roster()
            .map_err(|err| Error::internal(err.to_string()))?;
        let users = roster
            .into_iter()
            .map(|patient| {
                let id = ids::user_id(&patient.name)
                    .map_err(|err| Error::internal(format!("seed roster invalid: {err}")))?;
                Ok(User {
                    id,
                    name: patient.name,
                    email: patient.email,
                })
            })
            .collect::<ApiResult<Vec<User>>>()?;
        save_records(self.store.as_ref(), Collection::Users, &users)?;
        info!(count = users.len(), "patient roster seeded");
        Ok(users)
    }

    /// Create a patient, deriving the identifier and, if absent, the email.
    pub fn create(&self, input: UserInput) -> ApiResult<User> {
        let id = ids::user_id(&input.name).map_err(name_error)?;
        let email = resolve_email(&input)?;

        let mut users = self.list()?;
        ensure_email_free(&users, &email, None)?;

        let user = User {
            id,
            name: input.name,
            email,
        };
        users.push(user.clone());
        save_records(self.store.as_ref(), Collection::Users, &users)?;
        self.notifier.notify(Collection::Users);
        info!(user = %user.id, "patient created");
        Ok(user)
    }

    /// Update a patient in place, preserving their identifier.
    pub fn update(&self, id: &str, input: UserInput) -> ApiResult<User> {
        ids::ensure_multiword(&input.name).map_err(name_error)?;
        let email = resolve_email(&input)?;

        let mut users = self.list()?;
        ensure_email_free(&users, &email, Some(id))?;
        let Some(user) = users.iter_mut().find(|user| user.id == id) else {
            return Err(Error::not_found("patient not found"));
        };
        user.name = input.name;
        user.email = email;
        let updated = user.clone();

        save_records(self.store.as_ref(), Collection::Users, &users)?;
        self.notifier.notify(Collection::Users);
        info!(user = %id, "patient updated");
        Ok(updated)
    }

    /// Delete a patient by identifier.
    ///
    /// Bookings referencing the patient are left orphaned.
    pub fn delete(&self, id: &str) -> ApiResult<()> {
        let mut users = self.list()?;
        let before = users.len();
        users.retain(|user| user.id != id);
        if users.len() == before {
            return Err(Error::not_found("patient not found"));
        }

        save_records(self.store.as_ref(), Collection::Users, &users)?;
        self.notifier.notify(Collection::Users);
        info!(user = %id, "patient deleted");
        Ok(())
    }
}

/// Explicit email validated as supplied; absent email derived from the name.
fn resolve_email(input: &UserInput) -> ApiResult<String> {
    let email = match &input.email {
        Some(email) => email.clone(),
        None => derive_email(&input.name),
    };
    if !email_regex().is_match(&email) {
        return Err(
            Error::invalid_request("invalid email format").with_details(json!({ "field": "email" }))
        );
    }
    Ok(email)
}

/// Exact, case-sensitive uniqueness, excluding the record being updated.
fn ensure_email_free(users: &[User], email: &str, exclude_id: Option<&str>) -> ApiResult<()> {
    let taken = users
        .iter()
        .any(|user| user.email == email && exclude_id != Some(user.id.as_str()));
    if taken {
        return Err(
            Error::conflict("email already registered").with_details(json!({ "field": "email" }))
        );
    }
    Ok(())
}

fn name_error(err: ids::IdDerivationError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({ "field": "name" }))
}
