//! User endpoints. `user` accepts a username or a ULID unless noted.

use serde_json::Value;

use crate::advisory::Advisory;
use crate::client::RaClient;
use crate::error::Result;
use crate::http::Transport;
use crate::params::Params;
use crate::types::IdList;
use crate::validate;

use super::{count_or, offset_or, FLAG};

impl<T: Transport> RaClient<T> {
    /// Profile information for `user`, optionally looked up by ULID.
    pub fn get_user_profile(&self, user: &str, ulid: Option<&str>) -> Result<Value> {
        let params = Params::new().with("u", user).with_opt("i", ulid);
        self.dispatch("API_GetUserProfile.php", params)
    }

    /// Achievements unlocked in the last `minutes` (default 60).
    pub fn get_user_recent_achievements(&self, user: &str, minutes: Option<u32>) -> Result<Value> {
        let params = Params::new().with("u", user).with("m", minutes.unwrap_or(60));
        self.dispatch("API_GetUserRecentAchievements.php", params)
    }

    /// Achievements unlocked between two epoch timestamps.
    pub fn get_user_achievements_earned_between(
        &self,
        user: &str,
        start: i64,
        end: i64,
    ) -> Result<Value> {
        let params = Params::new().with("u", user).with("s", start).with("e", end);
        self.dispatch("API_GetAchievementsEarnedBetween.php", params)
    }

    /// Achievements unlocked on `date` (`YYYY-MM-DD`, default today).
    pub fn get_user_achievements_earned_on_day(&self, user: &str, date: Option<&str>) -> Result<Value> {
        let date = validate::date_or_today(date)?;
        let params = Params::new().with("u", user).with("d", date);
        self.dispatch("API_GetAchievementsEarnedOnDay.php", params)
    }

    /// Game metadata plus the user's progress. `awards` is 0 or 1.
    pub fn get_game_info_and_user_progress(&self, user: &str, game: u32, awards: u8) -> Result<Value> {
        validate::one_of("awards", awards, FLAG)?;
        let params = Params::new().with("u", user).with("g", game).with("a", awards);
        self.dispatch("API_GetGameInfoAndUserProgress.php", params)
    }

    /// Completion progress across games; count defaults to 100 (max 500).
    pub fn get_user_completion_progress(
        &self,
        user: &str,
        count: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value> {
        let params = Params::new()
            .with("u", user)
            .with("c", count_or(count, 100))
            .with("o", offset_or(offset));
        self.dispatch("API_GetUserCompletionProgress.php", params)
    }

    pub fn get_user_awards(&self, user: &str) -> Result<Value> {
        self.dispatch("API_GetUserAwards.php", Params::new().with("u", user))
    }

    pub fn get_user_claims(&self, user: &str) -> Result<Value> {
        self.dispatch("API_GetUserClaims.php", Params::new().with("u", user))
    }

    pub fn get_user_game_rank_and_score(&self, user: &str, game: u32) -> Result<Value> {
        let params = Params::new().with("u", user).with("g", game);
        self.dispatch("API_GetUserGameRankAndScore.php", params)
    }

    /// Total hardcore and softcore points.
    pub fn get_user_points(&self, user: &str) -> Result<Value> {
        self.dispatch("API_GetUserPoints.php", Params::new().with("u", user))
    }

    /// Summary progress for one game id or a CSV of game ids.
    ///
    /// Emits an advisory: `get_user_completion_progress` usually fits better.
    pub fn get_user_progress(&self, user: &str, games: impl Into<IdList>) -> Result<Value> {
        Advisory::UserProgress.emit();
        let games = games.into();
        validate::identifier_list("game", &games)?;
        let params = Params::new().with("u", user).with("i", games);
        self.dispatch("API_GetUserProgress.php", params)
    }

    /// Recently played games; count defaults to 10 (max 50).
    pub fn get_user_recently_played_games(
        &self,
        user: &str,
        count: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value> {
        let params = Params::new()
            .with("u", user)
            .with("c", count_or(count, 10))
            .with("o", offset_or(offset));
        self.dispatch("API_GetUserRecentlyPlayedGames.php", params)
    }

    /// Exhaustive profile metadata. Recent games default to 0 and recent
    /// achievements to 10; achievements are only drawn from the recent games.
    ///
    /// Emits an advisory: the endpoint is slow and over-fetches.
    pub fn get_user_summary(
        &self,
        user: &str,
        recent_games: Option<u32>,
        recent_achievements: Option<u32>,
    ) -> Result<Value> {
        Advisory::UserSummary.emit();
        let params = Params::new()
            .with("u", user)
            .with("g", recent_games.unwrap_or(0))
            .with("a", recent_achievements.unwrap_or(10));
        self.dispatch("API_GetUserSummary.php", params)
    }

    /// Legacy endpoint; emits a deprecation advisory.
    pub fn get_user_completed_games(&self, user: &str) -> Result<Value> {
        Advisory::UserCompletedGames.emit();
        self.dispatch("API_GetUserCompletedGames.php", Params::new().with("u", user))
    }

    /// The "Want to Play" list; count defaults to 100 (max 500).
    pub fn get_user_want_to_play_list(
        &self,
        user: &str,
        count: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value> {
        let params = Params::new()
            .with("u", user)
            .with("c", count_or(count, 100))
            .with("o", offset_or(offset));
        self.dispatch("API_GetUserWantToPlayList.php", params)
    }

    /// Users that `user` follows.
    pub fn get_users_i_follow(&self, user: &str, count: Option<u32>, offset: Option<u32>) -> Result<Value> {
        let params = Params::new()
            .with("u", user)
            .with("c", count_or(count, 100))
            .with("o", offset_or(offset));
        self.dispatch("API_GetUsersIFollow.php", params)
    }

    /// Users following `user`.
    pub fn get_users_following_me(
        &self,
        user: &str,
        count: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value> {
        let params = Params::new()
            .with("u", user)
            .with("c", count_or(count, 100))
            .with("o", offset_or(offset));
        self.dispatch("API_GetUsersFollowingMe.php", params)
    }

    /// Set requests: `list_type` 0 for active, 1 for all.
    pub fn get_user_set_requests(&self, user: &str, list_type: u8) -> Result<Value> {
        validate::one_of("list_type", list_type, FLAG)?;
        let params = Params::new().with("u", user).with("t", list_type);
        self.dispatch("API_GetUserSetRequests.php", params)
    }
}
