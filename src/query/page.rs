//! Result pagination
//!
//! Slices an ordered result set into fixed-size pages. Page numbers are
//! 1-indexed; out-of-range pages yield an empty slice, never an error.
//! The caller validates `page >= 1` and `page_size >= 1`.

/// Total number of pages for `len` items at `page_size` per page
///
/// Ceiling division; 0 items means 0 pages.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

/// Slice out one page of `items`.
///
/// Returns the sub-slice for the requested page (clipped to bounds)
/// together with the total page count.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> (&[T], usize) {
    let total = total_pages(items.len(), page_size);

    let start = page.saturating_sub(1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(items.len());
    let slice = if start >= items.len() {
        &[]
    } else {
        &items[start..end]
    };

    (slice, total)
}
