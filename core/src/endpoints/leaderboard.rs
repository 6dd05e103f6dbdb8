//! Leaderboard endpoints.

use serde_json::Value;

use crate::client::RaClient;
use crate::error::Result;
use crate::http::Transport;
use crate::params::Params;

use super::{count_or, offset_or};

impl<T: Transport> RaClient<T> {
    /// Leaderboards of a game; count defaults to 100 (max 500).
    pub fn get_game_leaderboards(&self, game: u32, count: Option<u32>, offset: Option<u32>) -> Result<Value> {
        let params = Params::new()
            .with("i", game)
            .with("c", count_or(count, 100))
            .with("o", offset_or(offset));
        self.dispatch("API_GetGameLeaderboards.php", params)
    }

    /// Entries of one leaderboard; count defaults to 100 (max 500).
    pub fn get_leaderboard_entries(
        &self,
        leaderboard: u32,
        count: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value> {
        let params = Params::new()
            .with("i", leaderboard)
            .with("c", count_or(count, 100))
            .with("o", offset_or(offset));
        self.dispatch("API_GetLeaderboardEntries.php", params)
    }

    /// A user's entries on a game's leaderboards; count defaults to 200
    /// (max 500).
    pub fn get_user_game_leaderboards(
        &self,
        game: u32,
        user: &str,
        count: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value> {
        let params = Params::new()
            .with("i", game)
            .with("u", user)
            .with("c", count_or(count, 200))
            .with("o", offset_or(offset));
        self.dispatch("API_GetUserGameLeaderboards.php", params)
    }
}
