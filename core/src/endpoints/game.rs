//! Game, system and achievement endpoints.

use serde_json::Value;

use crate::client::RaClient;
use crate::error::Result;
use crate::http::Transport;
use crate::params::Params;
use crate::validate;

use super::{count_or, offset_or, FLAG, SET_LEVEL};

impl<T: Transport> RaClient<T> {
    /// Basic metadata about a game.
    pub fn get_game(&self, game: u32) -> Result<Value> {
        self.dispatch("API_GetGame.php", Params::new().with("i", game))
    }

    /// Extended metadata. `set_level` 3 lists official achievements, 5
    /// unofficial and demoted ones.
    pub fn get_game_extended(&self, game: u32, set_level: u8) -> Result<Value> {
        validate::one_of("set_level", set_level, SET_LEVEL)?;
        let params = Params::new().with("i", game).with("f", set_level);
        self.dispatch("API_GetGameExtended.php", params)
    }

    pub fn get_game_hashes(&self, game: u32) -> Result<Value> {
        self.dispatch("API_GetGameHashes.php", Params::new().with("i", game))
    }

    /// The achievement ids of a game.
    pub fn get_achievement_count(&self, game: u32) -> Result<Value> {
        self.dispatch("API_GetAchievementCount.php", Params::new().with("i", game))
    }

    /// How many players unlocked how many achievements. `achievement_type` 1
    /// counts hardcore unlocks only; `set_level` is 3 or 5.
    pub fn get_achievement_distribution(
        &self,
        game: u32,
        achievement_type: u8,
        set_level: u8,
    ) -> Result<Value> {
        validate::one_of("achievement_type", achievement_type, FLAG)?;
        validate::one_of("set_level", set_level, SET_LEVEL)?;
        let params = Params::new()
            .with("i", game)
            .with("h", achievement_type)
            .with("f", set_level);
        self.dispatch("API_GetAchievementDistribution.php", params)
    }

    /// `list_type` 0 for latest masters, 1 for high scores.
    pub fn get_game_rank_and_score(&self, game: u32, list_type: u8) -> Result<Value> {
        validate::one_of("list_type", list_type, FLAG)?;
        let params = Params::new().with("g", game).with("t", list_type);
        self.dispatch("API_GetGameRankAndScore.php", params)
    }

    /// Every console id and name.
    pub fn get_console_ids(&self) -> Result<Value> {
        self.dispatch("API_GetConsoleIDs.php", Params::new())
    }

    /// Games for a console. `has_cheevos` 1 keeps only games with
    /// achievements; `hashes` 1 includes supported hashes.
    pub fn get_game_list(&self, system: u32, has_cheevos: u8, hashes: u8) -> Result<Value> {
        validate::one_of("has_cheevos", has_cheevos, FLAG)?;
        validate::one_of("hashes", hashes, FLAG)?;
        let params = Params::new()
            .with("i", system)
            .with("f", has_cheevos)
            .with("h", hashes);
        self.dispatch("API_GetGameList.php", params)
    }

    /// Players who unlocked an achievement; count defaults to 50 (max 500).
    pub fn get_achievement_unlocks(
        &self,
        achievement: u32,
        count: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value> {
        let params = Params::new()
            .with("a", achievement)
            .with("c", count_or(count, 50))
            .with("o", offset_or(offset));
        self.dispatch("API_GetAchievementUnlocks.php", params)
    }
}
