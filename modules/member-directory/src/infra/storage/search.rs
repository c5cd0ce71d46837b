//! Dynamic member search: predicate composition, projection and paging.
//!
//! All queries run over the member relation left-joined to team, so members
//! without a team stay in every result set. Filters compose with AND only;
//! a condition field that is absent (or blank, for strings) contributes no
//! predicate at all.

use async_trait::async_trait;
use roster_page::{Error, Page, PageRequest, SortDir, paginate_counted, paginate_deferred};
use sea_orm::sea_query::{Order, SimpleExpr};
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, EntityTrait, IntoSimpleExpr, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};
use tracing::debug;

use crate::domain::condition::MemberSearchCondition;
use crate::domain::model::{MemberTeamField, MemberTeamRow};
use crate::domain::repos::MemberSearchRepository;
use crate::infra::storage::entity::{member, team};

/// `SeaORM`-backed implementation of [`MemberSearchRepository`].
///
/// Stateless; the per-call connection is the only execution context.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemberSearchStore;

/* ---------- predicate builder ---------- */

fn username_eq(cond: &MemberSearchCondition) -> Option<SimpleExpr> {
    cond.username_text().map(|u| member::Column::Username.eq(u))
}

fn team_name_eq(cond: &MemberSearchCondition) -> Option<SimpleExpr> {
    cond.team_name_text().map(|t| team::Column::Name.eq(t))
}

fn age_goe(cond: &MemberSearchCondition) -> Option<SimpleExpr> {
    cond.age_goe.map(|b| member::Column::Age.gte(b))
}

fn age_loe(cond: &MemberSearchCondition) -> Option<SimpleExpr> {
    cond.age_loe.map(|b| member::Column::Age.lte(b))
}

/// Fold the present predicates into one AND condition. With every field
/// absent the condition stays empty and the query matches every row.
fn search_filters(cond: &MemberSearchCondition) -> Condition {
    [
        username_eq(cond),
        team_name_eq(cond),
        age_loe(cond),
        age_goe(cond),
    ]
    .into_iter()
    .flatten()
    .fold(Condition::all(), |all, expr| all.add(expr))
}

/* ---------- sort resolution ---------- */

fn sort_expr(field: MemberTeamField) -> SimpleExpr {
    match field {
        MemberTeamField::MemberId => member::Column::Id.into_simple_expr(),
        MemberTeamField::Username => member::Column::Username.into_simple_expr(),
        MemberTeamField::Age => member::Column::Age.into_simple_expr(),
        MemberTeamField::TeamId => team::Column::Id.into_simple_expr(),
        MemberTeamField::TeamName => team::Column::Name.into_simple_expr(),
    }
}

fn sort_order(dir: SortDir) -> Order {
    match dir {
        SortDir::Asc => Order::Asc,
        SortDir::Desc => Order::Desc,
    }
}

/// Resolve and apply the whole sort list. A name outside the projection's
/// field set fails here, before the query ever reaches the store.
fn apply_sort(
    mut query: Select<member::Entity>,
    page: &PageRequest,
) -> Result<Select<member::Entity>, Error> {
    for key in &page.sort {
        let field = MemberTeamField::from_name(&key.field)
            .ok_or_else(|| Error::InvalidSortField(key.field.clone()))?;
        query = query.order_by(sort_expr(field), sort_order(key.dir));
    }
    Ok(query)
}

/* ---------- query construction ---------- */

fn joined(select: Select<member::Entity>) -> Select<member::Entity> {
    select.join(JoinType::LeftJoin, member::Relation::Team.def())
}

/// Content query: the flat projection over the left-joined, filtered
/// relation.
fn content_query(cond: &MemberSearchCondition) -> Select<member::Entity> {
    joined(member::Entity::find())
        .select_only()
        .column_as(member::Column::Id, "member_id")
        .column(member::Column::Username)
        .column(member::Column::Age)
        .column_as(team::Column::Id, "team_id")
        .column_as(team::Column::Name, "team_name")
        .filter(search_filters(cond))
}

/// Count query: the member primary key over the same filtered relation.
/// Never carries projection columns, sort, offset or limit. The join stays:
/// the team-name predicate is compiled against the joined relation.
fn count_query(cond: &MemberSearchCondition) -> Select<member::Entity> {
    joined(member::Entity::find())
        .select_only()
        .column(member::Column::Id)
        .filter(search_filters(cond))
}

fn db_err(e: sea_orm::DbErr) -> Error {
    Error::Db(e.to_string())
}

/* ---------- executors ---------- */

#[async_trait]
impl MemberSearchRepository for MemberSearchStore {
    async fn search<C>(
        &self,
        conn: &C,
        cond: &MemberSearchCondition,
    ) -> Result<Vec<MemberTeamRow>, Error>
    where
        C: ConnectionTrait + Send + Sync,
    {
        debug!(?cond, "running member search");
        content_query(cond)
            .into_model::<MemberTeamRow>()
            .all(conn)
            .await
            .map_err(db_err)
    }

    async fn search_page_simple<C>(
        &self,
        conn: &C,
        cond: &MemberSearchCondition,
        page: &PageRequest,
    ) -> Result<Page<MemberTeamRow>, Error>
    where
        C: ConnectionTrait + Send + Sync,
    {
        let query = apply_sort(content_query(cond), page)?
            .offset(page.offset)
            .limit(page.limit);
        debug!(?cond, %page, "running member search page, counted");
        let items = query
            .into_model::<MemberTeamRow>()
            .all(conn)
            .await
            .map_err(db_err)?;
        let total = count_query(cond).count(conn).await.map_err(db_err)?;
        Ok(paginate_counted(items, page.offset, page.limit, total))
    }

    async fn search_page_optimized<C>(
        &self,
        conn: &C,
        cond: &MemberSearchCondition,
        page: &PageRequest,
    ) -> Result<Page<MemberTeamRow>, Error>
    where
        C: ConnectionTrait + Send + Sync,
    {
        let query = apply_sort(content_query(cond), page)?
            .offset(page.offset)
            .limit(page.limit);
        debug!(?cond, %page, "running member search page, deferred count");
        let items = query
            .into_model::<MemberTeamRow>()
            .all(conn)
            .await
            .map_err(db_err)?;
        paginate_deferred(items, page.offset, page.limit, || async move {
            debug!("page total not derivable from content; running count query");
            count_query(cond).count(conn).await.map_err(db_err)
        })
        .await
    }
}
