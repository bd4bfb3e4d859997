// Shared fixture: two games, a handful of plays covering every branch of the
// extraction.
#![allow(dead_code)]

use polars::df;
use polars::prelude::*;
use qb_pressure::PlayTables;
use std::collections::BTreeSet;

pub const KC_BUF: i64 = 2022091100;
pub const PHI_DAL: i64 = 2022091101;

pub const SMITH: i64 = 1;
pub const JONES: i64 = 2;
pub const MILLER: i64 = 3;
pub const HURTS: i64 = 4;
pub const PARSONS: i64 = 5;
pub const PRESCOTT: i64 = 6;
pub const ALLEN: i64 = 7;

pub struct PlayRow {
	pub game_id: i64,
	pub play_id: i64,
	pub description: &'static str,
	pub home_score: i64,
	pub visitor_score: i64,
}

pub struct ParticipationRow {
	pub game_id: i64,
	pub play_id: i64,
	pub nfl_id: i64,
	pub team: &'static str,
	pub caused_pressure: bool,
}

#[derive(Default)]
pub struct Fixture {
	pub games: Vec<(i64, &'static str, &'static str)>,
	pub players: Vec<(i64, &'static str, &'static str)>,
	pub plays: Vec<PlayRow>,
	pub participation: Vec<ParticipationRow>,
}

impl Fixture {
	pub fn game(mut self, game_id: i64, home: &'static str, visitor: &'static str) -> Self {
		self.games.push((game_id, home, visitor));
		self
	}

	pub fn player(mut self, nfl_id: i64, name: &'static str, position: &'static str) -> Self {
		self.players.push((nfl_id, name, position));
		self
	}

	pub fn play(mut self, game_id: i64, play_id: i64, description: &'static str, home_score: i64, visitor_score: i64) -> Self {
		self.plays.push(PlayRow {
			game_id,
			play_id,
			description,
			home_score,
			visitor_score,
		});
		self
	}

	pub fn on_play(mut self, game_id: i64, play_id: i64, nfl_id: i64, team: &'static str, caused_pressure: bool) -> Self {
		self.participation.push(ParticipationRow {
			game_id,
			play_id,
			nfl_id,
			team,
			caused_pressure,
		});
		self
	}

	pub fn tables(&self) -> PolarsResult<PlayTables> {
		let games = df!(
			"gameId" => self.games.iter().map(|g| g.0).collect::<Vec<_>>(),
			"homeTeamAbbr" => self.games.iter().map(|g| g.1).collect::<Vec<_>>(),
			"visitorTeamAbbr" => self.games.iter().map(|g| g.2).collect::<Vec<_>>()
		)?;

		let players = df!(
			"nflId" => self.players.iter().map(|p| p.0).collect::<Vec<_>>(),
			"displayName" => self.players.iter().map(|p| p.1).collect::<Vec<_>>(),
			"position" => self.players.iter().map(|p| p.2).collect::<Vec<_>>()
		)?;

		let n = self.plays.len();
		let plays = df!(
			"gameId" => self.plays.iter().map(|p| p.game_id).collect::<Vec<_>>(),
			"playId" => self.plays.iter().map(|p| p.play_id).collect::<Vec<_>>(),
			"playDescription" => self.plays.iter().map(|p| p.description).collect::<Vec<_>>(),
			"preSnapHomeScore" => self.plays.iter().map(|p| p.home_score).collect::<Vec<_>>(),
			"preSnapVisitorScore" => self.plays.iter().map(|p| p.visitor_score).collect::<Vec<_>>(),
			"down" => vec![2i64; n],
			"yardsToGo" => vec![7i64; n],
			"absoluteYardlineNumber" => vec![45i64; n],
			"passResult" => vec!["C"; n],
			"prePenaltyYardsGained" => vec![9i64; n],
			"passLength" => vec![Some(6.0f64); n],
			"timeToThrow" => vec![Some(2.7f64); n],
			"timeInTackleBox" => vec![Some(2.5f64); n],
			"qbSneak" => vec![false; n],
			"qbKneel" => vec![0i64; n],
			"qbSpike" => vec![false; n]
		)?;

		let m = self.participation.len();
		let player_play = df!(
			"gameId" => self.participation.iter().map(|r| r.game_id).collect::<Vec<_>>(),
			"playId" => self.participation.iter().map(|r| r.play_id).collect::<Vec<_>>(),
			"nflId" => self.participation.iter().map(|r| r.nfl_id).collect::<Vec<_>>(),
			"teamAbbr" => self.participation.iter().map(|r| r.team).collect::<Vec<_>>(),
			"causedPressure" => self.participation.iter().map(|r| r.caused_pressure).collect::<Vec<_>>(),
			"hadRushAttempt" => vec![0i64; m],
			"rushingYards" => vec![0i64; m],
			"passingYards" => vec![9i64; m]
		)?;

		Ok(PlayTables::new(games, player_play, players, plays))
	}
}

/// Two games with:
/// - KC_BUF 1: Smith under pressure
/// - KC_BUF 2: Smith, clean pocket, KC up 7-3
/// - KC_BUF 3: Smith and Jones both logged, pressure, description names Smith
/// - KC_BUF 4: Allen (visitor) under pressure, BUF up 10-7
/// - PHI_DAL 1: Hurts and Prescott both logged, clean, description names neither
/// - PHI_DAL 2: defenders only
/// - PHI_DAL 3: Hurts, clean pocket, PHI down 14-21
pub fn standard() -> Fixture {
	Fixture::default()
		.game(KC_BUF, "KC", "BUF")
		.game(PHI_DAL, "PHI", "DAL")
		.player(SMITH, "Joe Smith", "QB")
		.player(JONES, "Tom Jones", "QB")
		.player(MILLER, "Von Miller", "OLB")
		.player(HURTS, "Jalen Hurts", "QB")
		.player(PARSONS, "Micah Parsons", "OLB")
		.player(PRESCOTT, "Dak Prescott", "QB")
		.player(ALLEN, "Josh Allen", "QB")
		.play(KC_BUF, 1, "(14:55) J.Smith pass short right to T.Kelce for 8 yards", 0, 0)
		.play(KC_BUF, 2, "(14:20) J.Smith pass incomplete deep left", 7, 3)
		.play(KC_BUF, 3, "(10:02) Smith pass complete short middle", 7, 3)
		.play(KC_BUF, 4, "(8:41) J.Allen sacked at BUF 30 for -6 yards", 7, 10)
		.play(PHI_DAL, 1, "(0:40) T.Brady kneels to PHI 30 for -1 yards", 0, 0)
		.play(PHI_DAL, 2, "(5:00) Punt formation", 0, 0)
		.play(PHI_DAL, 3, "(3:12) J.Hurts pass short left", 14, 21)
		.on_play(KC_BUF, 1, SMITH, "KC", false)
		.on_play(KC_BUF, 1, MILLER, "BUF", true)
		.on_play(KC_BUF, 2, SMITH, "KC", false)
		.on_play(KC_BUF, 2, MILLER, "BUF", false)
		.on_play(KC_BUF, 3, SMITH, "KC", false)
		.on_play(KC_BUF, 3, JONES, "KC", false)
		.on_play(KC_BUF, 3, MILLER, "BUF", true)
		.on_play(KC_BUF, 4, ALLEN, "BUF", false)
		.on_play(KC_BUF, 4, PARSONS, "KC", true)
		.on_play(PHI_DAL, 1, HURTS, "PHI", false)
		.on_play(PHI_DAL, 1, PRESCOTT, "PHI", false)
		.on_play(PHI_DAL, 2, PARSONS, "DAL", false)
		.on_play(PHI_DAL, 3, HURTS, "PHI", false)
		.on_play(PHI_DAL, 3, PARSONS, "DAL", false)
}

pub fn play_keys(frame: &DataFrame) -> PolarsResult<BTreeSet<(i64, i64)>> {
	let games = frame.column("gameId")?.i64()?;
	let plays = frame.column("playId")?.i64()?;
	Ok(games.into_no_null_iter().zip(plays.into_no_null_iter()).collect())
}

pub fn column_names(frame: &DataFrame) -> Vec<String> {
	frame.get_column_names().iter().map(|name| name.to_string()).collect()
}
