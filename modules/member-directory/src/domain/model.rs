//! The flat search projection and its sortable field set.

use sea_orm::FromQueryResult;
use serde::Serialize;

/// One search result row: a member with its (optional) team, mapped straight
/// from columns — no entity hydration. Team fields are `None` for members
/// without a team, since the search left-joins member to team.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct MemberTeamRow {
    pub member_id: i64,
    pub username: String,
    pub age: i32,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
}

/// Sortable fields of the search projection.
///
/// Sort specifications resolve against this set; a name outside it is
/// rejected before any query executes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MemberTeamField {
    MemberId,
    Username,
    Age,
    TeamId,
    TeamName,
}

impl MemberTeamField {
    pub const FIELDS: &'static [Self] = &[
        Self::MemberId,
        Self::Username,
        Self::Age,
        Self::TeamId,
        Self::TeamName,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::MemberId => "member_id",
            Self::Username => "username",
            Self::Age => "age",
            Self::TeamId => "team_id",
            Self::TeamName => "team_name",
        }
    }

    /// Case-insensitive lookup against the projection's field set.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::FIELDS
            .iter()
            .copied()
            .find(|f| f.name().eq_ignore_ascii_case(name))
    }
}
