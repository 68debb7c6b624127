pub const DEFAULT_PAGE: usize = 1;

/// One window of an ordered result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of items in this page.
    pub page_count: usize,
    /// Number of items in the whole, unsliced input.
    pub total_count: usize,
}

/// Parses the raw `page` query value. Missing, non-numeric and zero values fall back to the
/// first page.
pub fn page_number(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(DEFAULT_PAGE)
}

/// Slices `items` into the `page`-th window of `page_size` elements.
///
/// Pages past the end yield an empty window rather than an error. `page` values below 1 are
/// treated as the first page.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let total_count = items.len();
    let start = page
        .max(DEFAULT_PAGE)
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(total_count);
    let end = start.saturating_add(page_size).min(total_count);

    let items: Vec<T> = items.into_iter().skip(start).take(end - start).collect();
    Page {
        page_count: items.len(),
        items,
        total_count,
    }
}
