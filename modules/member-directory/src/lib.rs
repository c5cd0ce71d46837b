//! Member/team directory: dynamic, typed search over a relational schema.
//!
//! The module composes optional filter predicates (username, team name, age
//! bounds) with logical AND, runs a single left-joined query producing a
//! flat projection, and pages results with either of two strategies:
//! - counted: content query plus an unconditional count query
//! - deferred: content query first, count only when the total is not
//!   already proven by the content
//!
//! Layout follows the usual split:
//! - `domain`: search condition, projection row, repository seam
//! - `infra::storage`: `SeaORM` entities, connection options and the
//!   repository implementation

pub mod domain;
pub mod infra;

pub use domain::condition::MemberSearchCondition;
pub use domain::model::{MemberTeamField, MemberTeamRow};
pub use domain::repos::MemberSearchRepository;
pub use infra::storage::search::MemberSearchStore;
