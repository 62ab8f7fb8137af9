use crate::server::error::AppError;

/// Largest page size a client may request.
pub const MAX_ENTRIES: u64 = 100;

/// Clamps a requested page size into `1..=MAX_ENTRIES`.
pub fn per_page(entries: u64) -> u64 {
    entries.clamp(1, MAX_ENTRIES)
}

/// Number of pages needed to show `total` items at `per_page` items per page.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// Index of the first item on `page`.
///
/// # Returns
/// - `Err(AppError::BadRequest)` - The offset does not fit a database offset
pub fn offset(page: u64, per_page: u64) -> Result<u64, AppError> {
    page.checked_mul(per_page)
        .filter(|offset| i64::try_from(*offset).is_ok())
        .ok_or_else(|| AppError::BadRequest(format!("Page {} is out of range", page)))
}
