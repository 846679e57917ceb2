//! Page-count arithmetic for paginated lists.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Number of pages for `count` results, never less than one.
pub fn total_pages(count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    let pages = count.div_ceil(u64::from(page_size)).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Clamp a requested page into `1..=total`.
pub fn clamp_page(page: u32, total: u32) -> u32 {
    page.clamp(1, total.max(1))
}
