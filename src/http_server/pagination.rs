//! Page parsing and slicing for question listings.

/// Questions returned per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Parse the `page` query value. Absent means page 1.
///
/// Returns `None` for anything that is not an integer >= 1.
pub fn parse_page(raw: Option<&str>) -> Option<usize> {
    match raw {
        None => Some(1),
        Some(raw) => raw.parse::<usize>().ok().filter(|page| *page >= 1),
    }
}

/// The window `[(page - 1) * per_page, page * per_page)` of `items`,
/// clipped to its length. Empty when the page starts past the end.
pub fn page_window<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}
