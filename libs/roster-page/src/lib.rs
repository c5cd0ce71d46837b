//! Offset/limit pagination and sorting primitives.
//!
//! This crate carries the protocol-level types shared by modules that page
//! over a relational store:
//! - `SortDir` / `SortKey`: an ordered list of (field, direction) pairs
//! - `PageRequest`: offset, limit and sort specification for one page
//! - `Page`: the returned slice plus its total row count
//! - `PageLimits`: default/max caps for requested page sizes
//! - page assembly helpers, including the deferred-count strategy that
//!   skips the count query when the content already proves the total
//!
//! Query construction and execution belong to the consuming module; nothing
//! here depends on an ORM.

pub mod limits;
pub mod page;

pub use limits::PageLimits;
pub use page::{Page, paginate_counted, paginate_deferred};

/// Sort direction for a single key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SortDir {
    #[serde(rename = "asc")]
    Asc,
    #[serde(rename = "desc")]
    Desc,
}

impl SortDir {
    /// Reverse the sort direction (Asc <-> Desc)
    #[must_use]
    pub fn reverse(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

/// One entry of a sort specification list.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SortKey {
    pub field: String,
    pub dir: SortDir,
}

impl SortKey {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            dir: SortDir::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            dir: SortDir::Desc,
        }
    }
}

/// Page descriptor: where the page starts, how many rows it holds, and the
/// requested ordering. Field names in `sort` are resolved by the executor
/// against its projection; an unknown name is a request error
/// ([`Error::InvalidSortField`]) raised before any query runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[must_use]
pub struct PageRequest {
    pub offset: u64,
    pub limit: u64,
    pub sort: Vec<SortKey>,
}

impl PageRequest {
    pub fn new(offset: u64, limit: u64) -> Self {
        Self {
            offset,
            limit,
            sort: Vec::new(),
        }
    }

    /// Replace the whole sort specification.
    pub fn with_sort(mut self, sort: Vec<SortKey>) -> Self {
        self.sort = sort;
        self
    }

    /// Append one sort key (keys apply in insertion order).
    pub fn sorted_by(mut self, field: impl Into<String>, dir: SortDir) -> Self {
        self.sort.push(SortKey {
            field: field.into(),
            dir,
        });
        self
    }
}

impl std::fmt::Display for PageRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "offset={} limit={}", self.offset, self.limit)?;
        for key in &self.sort {
            let dir = match key.dir {
                SortDir::Asc => "asc",
                SortDir::Desc => "desc",
            };
            write!(f, " {} {dir}", key.field)?;
        }
        Ok(())
    }
}

/// Unified error type for paging operations.
///
/// Sort-field validation fails fast before the content query executes;
/// store failures propagate from the backend with their message intact.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unsupported sort field: {0}")]
    InvalidSortField(String),

    #[error("invalid page limit")]
    InvalidLimit,

    #[error("database error: {0}")]
    Db(String),
}
