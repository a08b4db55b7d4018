//! Regression coverage for search filtering and page windowing.

use rstest::rstest;

use super::{Page, PageRequest, PageSize, PageSizeError, Searchable, paginate, search, search_page};

struct Record {
    id: &'static str,
    name: &'static str,
}

impl Searchable for Record {
    fn search_fields(&self) -> Vec<String> {
        vec![self.id.to_owned(), self.name.to_owned()]
    }
}

fn records() -> Vec<Record> {
    vec![
        Record {
            id: "ROOM-VI-SU-22-19-8",
            name: "VIP Suite",
        },
        Record {
            id: "ROOM-IC-WA-9-23-7",
            name: "ICU Ward",
        },
        Record {
            id: "ROOM-RE-RO-18-18-12",
            name: "Recovery Room",
        },
    ]
}

#[rstest]
#[case(5, Ok(PageSize::Five))]
#[case(10, Ok(PageSize::Ten))]
#[case(20, Ok(PageSize::Twenty))]
#[case(50, Ok(PageSize::Fifty))]
#[case(0, Err(PageSizeError(0)))]
#[case(25, Err(PageSizeError(25)))]
fn page_size_accepts_only_the_enumerated_values(
    #[case] raw: usize,
    #[case] expected: Result<PageSize, PageSizeError>,
) {
    assert_eq!(PageSize::try_from(raw), expected);
}

#[rstest]
fn page_size_defaults_to_five() {
    assert_eq!(PageSize::default().get(), 5);
}

#[rstest]
#[case(12, 5, 3)]
#[case(10, 5, 2)]
#[case(1, 50, 1)]
#[case(0, 5, 0)]
fn total_pages_is_the_ceiling_of_count_over_size(
    #[case] count: usize,
    #[case] size: usize,
    #[case] expected: usize,
) {
    let items: Vec<usize> = (0..count).collect();
    let size = PageSize::try_from(size).unwrap_or_default();
    let page = paginate(items, &PageRequest::new(1, size));
    assert_eq!(page.total_pages, expected);
}

#[rstest]
#[case(0, 1)]
#[case(1, 1)]
#[case(3, 3)]
#[case(4, 3)]
#[case(99, 3)]
fn requested_page_clamps_into_valid_range(#[case] requested: usize, #[case] effective: usize) {
    let items: Vec<usize> = (0..12).collect();
    let page = paginate(items, &PageRequest::new(requested, PageSize::Five));
    assert_eq!(page.page, effective);
}

#[rstest]
fn window_and_range_bounds_follow_the_offset() {
    let items: Vec<usize> = (1..=12).collect();
    let page = paginate(items, &PageRequest::new(2, PageSize::Five));
    assert_eq!(page.items, vec![6, 7, 8, 9, 10]);
    assert_eq!(page.range_start, 6);
    assert_eq!(page.range_end, 10);
}

#[rstest]
fn final_page_range_is_capped_at_the_item_count() {
    let items: Vec<usize> = (1..=12).collect();
    let page = paginate(items, &PageRequest::new(3, PageSize::Five));
    assert_eq!(page.items, vec![11, 12]);
    assert_eq!(page.range_start, 11);
    assert_eq!(page.range_end, 12);
}

#[rstest]
fn empty_list_reports_zeroed_ranges_on_page_one() {
    let page: Page<usize> = paginate(Vec::new(), &PageRequest::default());
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.range_start, 0);
    assert_eq!(page.range_end, 0);
    assert!(page.items.is_empty());
}

#[rstest]
#[case("vip", 1)]
#[case("VIP", 1)]
#[case("room", 3)]
#[case("ward", 1)]
#[case("no-such", 0)]
fn search_matches_any_indexed_field_case_insensitively(
    #[case] query: &str,
    #[case] expected: usize,
) {
    assert_eq!(search(records(), query).len(), expected);
}

#[rstest]
fn empty_query_keeps_every_record() {
    assert_eq!(search(records(), "").len(), 3);
}

#[rstest]
fn search_page_combines_filter_and_window() {
    let page = search_page(records(), "room", &PageRequest::new(1, PageSize::Five));
    assert_eq!(page.total_items, 3);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.items.len(), 3);
}

#[rstest]
fn page_serialises_camel_case() {
    let page = paginate(vec![1, 2, 3], &PageRequest::default());
    let json = serde_json::to_value(&page).unwrap_or_default();
    assert!(json.get("totalPages").is_some());
    assert!(json.get("rangeStart").is_some());
    assert!(json.get("perPage").is_some());
}
