//! Repository seam for dynamic member search.

use async_trait::async_trait;
use roster_page::{Error, Page, PageRequest};
use sea_orm::ConnectionTrait;

use crate::domain::condition::MemberSearchCondition;
use crate::domain::model::MemberTeamRow;

/// Dynamic search over the member/team relation.
///
/// Implementations are stateless and safe to share across threads; the
/// execution context is the per-call `conn`, which stays request-scoped.
#[async_trait]
pub trait MemberSearchRepository: Send + Sync {
    /// Unpaged search: every row matching the condition, in storage order.
    async fn search<C>(
        &self,
        conn: &C,
        cond: &MemberSearchCondition,
    ) -> Result<Vec<MemberTeamRow>, Error>
    where
        C: ConnectionTrait + Send + Sync;

    /// Paged search that always issues a count query alongside the content
    /// query — exactly two queries per call.
    ///
    /// # Errors
    /// `Error::InvalidSortField` before any query executes when the sort
    /// list names a field outside the projection; `Error::Db` on store
    /// failures.
    async fn search_page_simple<C>(
        &self,
        conn: &C,
        cond: &MemberSearchCondition,
        page: &PageRequest,
    ) -> Result<Page<MemberTeamRow>, Error>
    where
        C: ConnectionTrait + Send + Sync;

    /// Paged search that defers the count query: at most one count query
    /// per call, and none when a short first page already proves the total.
    ///
    /// # Errors
    /// Same contract as [`Self::search_page_simple`].
    async fn search_page_optimized<C>(
        &self,
        conn: &C,
        cond: &MemberSearchCondition,
        page: &PageRequest,
    ) -> Result<Page<MemberTeamRow>, Error>
    where
        C: ConnectionTrait + Send + Sync;
}
