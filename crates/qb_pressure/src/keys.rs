//! Synthetic join keys. A play is identified by `"{gameId} {playId}"` and a
//! player on a play by `"{gameId} {playId} {nflId}"`.

use polars::prelude::*;

pub const GAME_PLAY_ID: &str = "game_play_id";
pub const GAME_PLAY_NFL_ID: &str = "game_play_nfl_id";

const SEPARATOR: &str = " ";

/// Builds `game_play_id` from the `gameId` and `playId` columns.
#[must_use]
pub fn game_play_id() -> Expr {
	concat_str([col("gameId").cast(DataType::String), col("playId").cast(DataType::String)], SEPARATOR, false).alias(GAME_PLAY_ID)
}

/// Builds `game_play_nfl_id`. Needs `game_play_id` to already be present.
#[must_use]
pub fn game_play_nfl_id() -> Expr {
	concat_str([col(GAME_PLAY_ID), col("nflId").cast(DataType::String)], SEPARATOR, false).alias(GAME_PLAY_NFL_ID)
}

#[must_use]
pub fn format_game_play_id(game_id: i64, play_id: i64) -> String {
	format!("{game_id}{SEPARATOR}{play_id}")
}

#[must_use]
pub fn format_game_play_nfl_id(game_play_id: &str, nfl_id: i64) -> String {
	format!("{game_play_id}{SEPARATOR}{nfl_id}")
}
