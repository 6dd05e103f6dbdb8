//! Ticket queries. All of them share `API_GetTicketData.php`; the set of
//! keys sent selects which report the server returns.

use serde_json::Value;

use crate::client::RaClient;
use crate::error::Result;
use crate::http::Transport;
use crate::params::Params;
use crate::validate;

use super::{count_or, offset_or, FLAG, SET_LEVEL};

const TICKET_DATA: &str = "API_GetTicketData.php";

impl<T: Transport> RaClient<T> {
    pub fn get_ticket_data(&self, ticket: u32) -> Result<Value> {
        self.dispatch(TICKET_DATA, Params::new().with("i", ticket))
    }

    /// Games with the most open tickets. The server only accepts `focus` 1.
    pub fn get_most_ticketed_games(&self, focus: Option<u8>) -> Result<Value> {
        let focus = focus.unwrap_or(1);
        validate::one_of("focus", focus, &[1])?;
        self.dispatch(TICKET_DATA, Params::new().with("f", focus))
    }

    /// Most recent tickets; count defaults to 10 (max 100).
    pub fn get_most_recent_tickets(&self, count: Option<u32>, offset: Option<u32>) -> Result<Value> {
        let params = Params::new()
            .with("c", count_or(count, 10))
            .with("o", offset_or(offset));
        self.dispatch(TICKET_DATA, params)
    }

    /// Ticket stats for a game. `focus` 3 for official, 5 for unofficial
    /// achievements; `depth` 1 adds per-ticket metadata.
    pub fn get_game_ticket_stats(&self, game: u32, focus: u8, depth: u8) -> Result<Value> {
        validate::one_of("focus", focus, SET_LEVEL)?;
        validate::one_of("depth", depth, FLAG)?;
        let params = Params::new().with("g", game).with("f", focus).with("d", depth);
        self.dispatch(TICKET_DATA, params)
    }

    pub fn get_developer_ticket_stats(&self, user: &str, ulid: Option<&str>) -> Result<Value> {
        let params = Params::new().with("u", user).with_opt("i", ulid);
        self.dispatch(TICKET_DATA, params)
    }

    pub fn get_achievement_ticket_stats(&self, achievement: u32) -> Result<Value> {
        self.dispatch(TICKET_DATA, Params::new().with("a", achievement))
    }
}
