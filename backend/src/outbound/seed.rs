//! Seed roster adapter over the bundled example data.

use example_data::SeedPatient;

use crate::domain::{SeedSource, SeedSourceError};

/// Roster compiled into the binary via the `example-data` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledRoster;

impl SeedSource for BundledRoster {
    fn roster(&self) -> Result<Vec<SeedPatient>, SeedSourceError> {
        example_data::bundled_roster().map_err(|err| SeedSourceError::Unavailable {
            message: err.to_string(),
        })
    }
}
