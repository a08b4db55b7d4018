//! Search filtering and offset pagination primitives shared by list endpoints.
//!
//! List views across the application behave identically: a case-insensitive
//! substring query is matched against a per-entity set of indexed fields
//! (OR across fields), the filtered sequence is windowed into pages of an
//! enumerated size, and out-of-range page requests clamp into the valid
//! range instead of failing.
//!
//! # Example
//!
//! ```
//! use pagination::{PageRequest, PageSize, Searchable, search_page};
//!
//! struct Ward(&'static str);
//!
//! impl Searchable for Ward {
//!     fn search_fields(&self) -> Vec<String> {
//!         vec![self.0.to_owned()]
//!     }
//! }
//!
//! let wards = vec![Ward("ICU North"), Ward("ICU South"), Ward("Recovery")];
//! let page = search_page(wards, "icu", &PageRequest::new(1, PageSize::Five));
//! assert_eq!(page.total_items, 2);
//! assert_eq!(page.total_pages, 1);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Enumerated page sizes selectable by list views.
///
/// Only the fixed set {5, 10, 20, 50} is representable; arbitrary sizes are
/// rejected at the boundary via [`PageSize::try_from`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    /// Five records per page (the default).
    #[default]
    Five,
    /// Ten records per page.
    Ten,
    /// Twenty records per page.
    Twenty,
    /// Fifty records per page.
    Fifty,
}

impl PageSize {
    /// Number of records per page.
    #[must_use]
    pub const fn get(self) -> usize {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
        }
    }
}

/// Rejection returned when a raw value is not one of the supported sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unsupported page size {0}; expected one of 5, 10, 20, 50")]
pub struct PageSizeError(pub usize);

impl TryFrom<usize> for PageSize {
    type Error = PageSizeError;

    fn try_from(value: usize) -> Result<Self, PageSizeError> {
        match value {
            5 => Ok(Self::Five),
            10 => Ok(Self::Ten),
            20 => Ok(Self::Twenty),
            50 => Ok(Self::Fifty),
            other => Err(PageSizeError(other)),
        }
    }
}

impl From<PageSize> for usize {
    fn from(value: PageSize) -> Self {
        value.get()
    }
}

/// A requested window into a filtered list.
///
/// `page` is 1-based. Values of 0 or beyond the final page are accepted and
/// clamped during pagination rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Requested 1-based page number, clamped into range when windowing.
    pub page: usize,
    /// Records per page.
    pub size: PageSize,
}

impl PageRequest {
    /// Build a request for the given page and size.
    #[must_use]
    pub const fn new(page: usize, size: PageSize) -> Self {
        Self { page, size }
    }

    /// The first page at the given size.
    #[must_use]
    pub const fn first(size: PageSize) -> Self {
        Self::new(1, size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(PageSize::default())
    }
}

/// One page of a filtered list together with its windowing metadata.
///
/// `range_start`/`range_end` are the 1-based positions of the first and last
/// record on this page within the filtered list, both 0 when the list is
/// empty. `total_pages` is `ceil(total_items / size)` and is therefore 0 for
/// an empty list even though `page` is reported as 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Records on this page, in filtered order.
    pub items: Vec<T>,
    /// Effective 1-based page number after clamping.
    pub page: usize,
    /// Records per page used for the window.
    pub per_page: usize,
    /// Number of records in the filtered list.
    pub total_items: usize,
    /// Number of pages the filtered list spans.
    pub total_pages: usize,
    /// 1-based position of the first record on this page, 0 when empty.
    pub range_start: usize,
    /// 1-based position of the last record on this page, 0 when empty.
    pub range_end: usize,
}

/// Window `items` according to `request`, clamping the page into range.
///
/// The effective page is `max(1, min(total_pages, requested))`, so page 0 and
/// pages past the end resolve to the nearest valid page.
///
/// # Example
///
/// ```
/// use pagination::{PageRequest, PageSize, paginate};
///
/// let page = paginate((1..=12).collect::<Vec<_>>(), &PageRequest::new(9, PageSize::Five));
/// assert_eq!(page.page, 3);
/// assert_eq!(page.items, vec![11, 12]);
/// assert_eq!(page.range_start, 11);
/// assert_eq!(page.range_end, 12);
/// ```
#[must_use]
pub fn paginate<T>(items: Vec<T>, request: &PageRequest) -> Page<T> {
    let size = request.size.get();
    let total_items = items.len();
    let total_pages = total_items.div_ceil(size);
    let page = request.page.min(total_pages).max(1);
    let offset = (page - 1) * size;

    let window: Vec<T> = items.into_iter().skip(offset).take(size).collect();
    let (range_start, range_end) = if total_items == 0 {
        (0, 0)
    } else {
        (offset + 1, (offset + size).min(total_items))
    };

    Page {
        items: window,
        page,
        per_page: size,
        total_items,
        total_pages,
        range_start,
        range_end,
    }
}

/// Entities that expose indexed fields for substring search.
pub trait Searchable {
    /// The field values a query is matched against.
    fn search_fields(&self) -> Vec<String>;
}

/// Keep the items whose indexed fields contain `query`, case-insensitively.
///
/// A record matches when ANY of its fields contains the query as a
/// substring. An empty query keeps every record.
#[must_use]
pub fn search<T: Searchable>(items: Vec<T>, query: &str) -> Vec<T> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| {
            item.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Filter by `query` then window the result according to `request`.
#[must_use]
pub fn search_page<T: Searchable>(items: Vec<T>, query: &str, request: &PageRequest) -> Page<T> {
    paginate(search(items, query), request)
}

#[cfg(test)]
mod tests;
