//! Page assembly, including the deferred-count strategy.
//!
//! Two ways to produce a [`Page`]:
//! - [`paginate_counted`]: the caller already ran an unconditional count
//!   query and hands over the total.
//! - [`paginate_deferred`]: the count stays behind a thunk. When the first
//!   page comes back short the total is already proven by the content and
//!   the thunk is never invoked; otherwise it runs exactly once.

use std::future::Future;

/// One page of results with its paging coordinates and total row count.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub offset: u64,
    pub limit: u64,
    pub total: u64,
}

impl<T> Page<T> {
    #[must_use]
    pub fn new(items: Vec<T>, offset: u64, limit: u64, total: u64) -> Self {
        Self {
            items,
            offset,
            limit,
            total,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Map page items into another type, keeping the paging coordinates.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            offset: self.offset,
            limit: self.limit,
            total: self.total,
        }
    }
}

/// Assemble a page whose total came from an unconditional count query.
#[must_use]
pub fn paginate_counted<T>(items: Vec<T>, offset: u64, limit: u64, total: u64) -> Page<T> {
    Page::new(items, offset, limit, total)
}

/// Assemble a page, invoking `count` only when the total is not already
/// proven by the content: a first page shorter than `limit` pins the total
/// at `items.len()`. In every other case (full page, or any non-zero
/// offset) the thunk runs exactly once.
///
/// # Errors
/// Propagates the error of the `count` thunk unchanged.
pub async fn paginate_deferred<T, E, F, Fut>(
    items: Vec<T>,
    offset: u64,
    limit: u64,
    count: F,
) -> Result<Page<T>, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<u64, E>>,
{
    let fetched = items.len() as u64;
    if offset == 0 && fetched < limit {
        return Ok(Page::new(items, offset, limit, fetched));
    }
    let total = count().await?;
    Ok(Page::new(items, offset, limit, total))
}
