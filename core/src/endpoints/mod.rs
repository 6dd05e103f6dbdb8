//! Endpoint wrappers, one `impl RaClient` block per API area.
//!
//! Every wrapper checks its own arguments, maps them onto the endpoint's
//! short query keys and hands off to `RaClient::dispatch`. Optional counts
//! and offsets fall back to the server-documented defaults and are always
//! sent.

mod feed;
mod game;
mod leaderboard;
mod ticket;
mod user;

/// Legal values of 0/1 switches.
const FLAG: &[u8] = &[0, 1];

/// Legal values of "official (3) or unofficial (5)" selectors.
const SET_LEVEL: &[u8] = &[3, 5];

fn count_or(count: Option<u32>, default: u32) -> u32 {
    count.unwrap_or(default)
}

fn offset_or(offset: Option<u32>) -> u32 {
    offset.unwrap_or(0)
}
