//! The member search condition: optional fields, absent means unconstrained.

use serde::Deserialize;

/// Immutable search condition, constructed once per request.
///
/// Deserializes from query-string-like key/value pairs (`username`,
/// `teamName`, `ageGoe`, `ageLoe`). A missing or blank string field applies
/// no constraint; a missing age bound likewise.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[must_use]
pub struct MemberSearchCondition {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<i32>,
    pub age_loe: Option<i32>,
}

impl MemberSearchCondition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    pub fn with_age_goe(mut self, bound: i32) -> Self {
        self.age_goe = Some(bound);
        self
    }

    pub fn with_age_loe(mut self, bound: i32) -> Self {
        self.age_loe = Some(bound);
        self
    }

    /// Username constraint, or `None` when absent or blank.
    #[must_use]
    pub fn username_text(&self) -> Option<&str> {
        has_text(self.username.as_deref())
    }

    /// Team-name constraint, or `None` when absent or blank.
    #[must_use]
    pub fn team_name_text(&self) -> Option<&str> {
        has_text(self.team_name.as_deref())
    }
}

fn has_text(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_string_fields_apply_no_constraint() {
        let cond = MemberSearchCondition::new()
            .with_username("   ")
            .with_team_name("");
        assert_eq!(cond.username_text(), None);
        assert_eq!(cond.team_name_text(), None);
    }

    #[test]
    fn present_fields_are_exposed_verbatim() {
        let cond = MemberSearchCondition::new()
            .with_username("member1")
            .with_team_name("teamA");
        assert_eq!(cond.username_text(), Some("member1"));
        assert_eq!(cond.team_name_text(), Some("teamA"));
    }

    #[test]
    fn builds_from_query_string_pairs() {
        let cond: MemberSearchCondition =
            serde_urlencoded::from_str("username=member1&teamName=teamA&ageGoe=10&ageLoe=40")
                .unwrap();
        assert_eq!(
            cond,
            MemberSearchCondition::new()
                .with_username("member1")
                .with_team_name("teamA")
                .with_age_goe(10)
                .with_age_loe(40)
        );
    }

    #[test]
    fn empty_query_string_builds_empty_condition() {
        let cond: MemberSearchCondition = serde_urlencoded::from_str("").unwrap();
        assert_eq!(cond, MemberSearchCondition::default());
    }
}
