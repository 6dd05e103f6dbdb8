//! Non-fatal notices for endpoints that have better-suited alternatives.
//!
//! Advisories are reported as `tracing` warnings under the
//! `retroachievements::advisory` target and never change control flow.

use std::fmt;

pub const TARGET: &str = "retroachievements::advisory";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// `get_user_progress` only gives per-game summaries for explicit ids.
    UserProgress,
    /// `get_user_summary` is slow and over-fetches.
    UserSummary,
    /// `get_user_completed_games` is a legacy endpoint.
    UserCompletedGames,
}

impl Advisory {
    pub fn operation(self) -> &'static str {
        match self {
            Advisory::UserProgress => "get_user_progress",
            Advisory::UserSummary => "get_user_summary",
            Advisory::UserCompletedGames => "get_user_completed_games",
        }
    }

    /// Operations to use instead.
    pub fn preferred(self) -> &'static [&'static str] {
        match self {
            Advisory::UserProgress | Advisory::UserCompletedGames => {
                &["get_user_completion_progress"]
            }
            Advisory::UserSummary => &["get_user_profile", "get_user_completion_progress"],
        }
    }

    pub fn is_deprecation(self) -> bool {
        matches!(self, Advisory::UserCompletedGames)
    }

    pub fn message(self) -> &'static str {
        match self {
            Advisory::UserProgress => {
                "unless you explicitly want summary progress for specific game ids, \
                 get_user_completion_progress is almost certainly better suited"
            }
            Advisory::UserSummary => {
                "this endpoint is slow and often over-fetches; use get_user_profile for basic \
                 profile data and get_user_completion_progress for game progress. Recent \
                 achievements are drawn from recent games only, so with zero recent games \
                 none are returned"
            }
            Advisory::UserCompletedGames => {
                "this endpoint is legacy; get_user_completion_progress is almost always a \
                 better fit"
            }
        }
    }

    pub(crate) fn emit(self) {
        tracing::warn!(
            target: TARGET,
            operation = self.operation(),
            deprecated = self.is_deprecation(),
            preferred = ?self.preferred(),
            "{}",
            self.message()
        );
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.operation(), self.message())
    }
}
