//! Shared query-string handling for paginated list endpoints.

use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::domain::{ApiResult, Error};
use pagination::{PageRequest, PageSize};

/// Query parameters accepted by every list endpoint.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Requested 1-based page; out-of-range values are clamped, not rejected.
    pub page: Option<usize>,
    /// Page size; must be one of 5, 10, 20, 50.
    pub size: Option<usize>,
    /// Case-insensitive filter matched as a substring of the searchable
    /// fields. Empty or absent keeps every record.
    pub q: Option<String>,
}

impl ListQuery {
    /// Resolve the pagination window, rejecting unsupported sizes.
    pub fn page_request(&self) -> ApiResult<PageRequest> {
        let size = match self.size {
            Some(raw) => PageSize::try_from(raw).map_err(|err| {
                Error::invalid_request(err.to_string()).with_details(json!({ "field": "size" }))
            })?,
            None => PageSize::default(),
        };
        Ok(PageRequest::new(self.page.unwrap_or(1), size))
    }

    /// The search filter, empty when absent.
    #[must_use]
    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }
}
