//! Comments, feeds, claims and events.

use serde_json::Value;

use crate::client::RaClient;
use crate::error::Result;
use crate::http::Transport;
use crate::params::Params;
use crate::validate;

use super::{count_or, offset_or};

/// Comment targets: game, achievement, user.
const COMMENT_TARGETS: &[u8] = &[1, 2, 3];
const COMMENT_SORTS: &[&str] = &["submitted", "-submitted"];
const AWARD_KINDS: &[&str] = &["beaten-softcore", "beaten-hardcore", "completed", "mastered"];
/// Inactive claim kinds: completed, dropped, expired.
const CLAIM_KINDS: &[u8] = &[1, 2, 3];

impl<T: Transport> RaClient<T> {
    /// Comments on a game (`target` 1), an achievement (2) or a user (3).
    /// Count defaults to 100 (max 500); `sort` is `submitted` (oldest first,
    /// the default) or `-submitted`.
    pub fn get_comments(
        &self,
        id: u32,
        target: u8,
        count: Option<u32>,
        offset: Option<u32>,
        sort: Option<&str>,
    ) -> Result<Value> {
        let sort = sort.unwrap_or("submitted");
        validate::one_of("target", target, COMMENT_TARGETS)?;
        validate::one_of("sort", sort, COMMENT_SORTS)?;
        let params = Params::new()
            .with("i", id)
            .with("t", target)
            .with("c", count_or(count, 100))
            .with("o", offset_or(offset))
            .with("sort", sort);
        self.dispatch("API_GetComments.php", params)
    }

    /// Game awards granted on `date` (default today). Count defaults to 25
    /// (max 100). `kind` filters to one award type when given.
    pub fn get_recent_game_awards(
        &self,
        date: Option<&str>,
        offset: Option<u32>,
        count: Option<u32>,
        kind: Option<&str>,
    ) -> Result<Value> {
        let date = validate::date_or_today(date)?;
        if let Some(kind) = kind {
            validate::one_of("kind", kind, AWARD_KINDS)?;
        }
        let params = Params::new()
            .with("d", date)
            .with("o", offset_or(offset))
            .with("c", count_or(count, 25))
            .with_opt("k", kind);
        self.dispatch("API_GetRecentGameAwards.php", params)
    }

    /// Active set claims (at most 1000).
    pub fn get_active_claims(&self) -> Result<Value> {
        self.dispatch("API_GetActiveClaims.php", Params::new())
    }

    /// Completed (`kind` 1), dropped (2) or expired (3) claims.
    pub fn get_inactive_claims(&self, kind: u8) -> Result<Value> {
        validate::one_of("kind", kind, CLAIM_KINDS)?;
        self.dispatch("API_GetInactiveClaims.php", Params::new().with("k", kind))
    }

    pub fn get_top_ten_users(&self) -> Result<Value> {
        self.dispatch("API_GetTopTenUsers.php", Params::new())
    }

    pub fn get_achievement_of_the_week(&self) -> Result<Value> {
        self.dispatch("API_GetAchievementOfTheWeek.php", Params::new())
    }
}
