use crate::disambiguation::{find_ambiguous_plays, resolve_ambiguous_plays, AmbiguousPlay, FamilyNameMatcher, Quarterback, QuarterbackMatcher};
use crate::error::{ExtractError, ExtractWarning};
use crate::keys::{self, GAME_PLAY_ID, GAME_PLAY_NFL_ID};
use crate::mode::PressureMode;
use crate::schema::{self, Table, OUTPUT_COLUMNS};
use polars::prelude::*;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, info_span, warn};

/// The four input tables of one dataset.
#[derive(Debug, Clone, Default)]
pub struct PlayTables {
	pub games: DataFrame,
	pub player_play: DataFrame,
	pub players: DataFrame,
	pub plays: DataFrame,
}

impl PlayTables {
	#[must_use]
	pub const fn new(games: DataFrame, player_play: DataFrame, players: DataFrame, plays: DataFrame) -> Self {
		Self {
			games,
			player_play,
			players,
			plays,
		}
	}

	#[must_use]
	pub const fn table(&self, table: Table) -> &DataFrame {
		match table {
			Table::Games => &self.games,
			Table::PlayerPlay => &self.player_play,
			Table::Players => &self.players,
			Table::Plays => &self.plays,
		}
	}

	pub fn validate(&self) -> Result<(), ExtractError> {
		Table::ALL.into_iter().try_for_each(|table| schema::validate(table, self.table(table)))
	}

	/// Every table is inner-joined, so one empty table empties the output.
	#[must_use]
	pub fn has_empty_table(&self) -> bool {
		Table::ALL.into_iter().any(|table| schema::is_empty_table(self.table(table)))
	}
}

#[derive(Debug, Clone)]
pub struct Extraction {
	pub mode: PressureMode,
	pub frame: DataFrame,
	pub warnings: Vec<ExtractWarning>,
}

impl Extraction {
	#[must_use]
	pub fn height(&self) -> usize {
		self.frame.height()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.frame.height() == 0
	}
}

/// Selects quarterback plays on one side of the pressure partition, leaving at
/// most one quarterback per play.
#[derive(Debug, Clone, Default)]
pub struct PressurePlayExtractor<M = FamilyNameMatcher> {
	matcher: M,
}

impl PressurePlayExtractor {
	#[must_use]
	pub const fn new() -> Self {
		Self { matcher: FamilyNameMatcher }
	}
}

impl<M: QuarterbackMatcher> PressurePlayExtractor<M> {
	pub const fn with_matcher(matcher: M) -> Self {
		Self { matcher }
	}

	pub fn extract(&self, tables: &PlayTables, mode: PressureMode) -> Result<Extraction, ExtractError> {
		let _span = info_span!("extract", %mode).entered();

		tables.validate()?;

		let mut warnings = Vec::new();
		if tables.has_empty_table() {
			warnings.push(empty_result(mode));
			return Ok(Extraction {
				mode,
				frame: schema::empty_output()?,
				warnings,
			});
		}

		let quarterbacks = quarterback_roster(&tables.players)?;
		let roster = roster_order(&quarterbacks)?;
		info!(quarterbacks = roster.len(), "filtered roster");

		let qb_rows = quarterback_rows(&tables.player_play, &quarterbacks, mode)?;
		info!(rows = qb_rows.height(), "quarterback participation rows");

		let qb_rows = self.disambiguate(qb_rows, &tables.plays, &roster, &mut warnings)?;
		let frame = join_and_project(qb_rows, tables, quarterbacks)?;
		info!(plays = frame.height(), "extracted plays");

		if frame.height() == 0 {
			warnings.push(empty_result(mode));
		}

		Ok(Extraction { mode, frame, warnings })
	}

	fn disambiguate(&self, qb_rows: DataFrame, plays: &DataFrame, roster: &[Quarterback], warnings: &mut Vec<ExtractWarning>) -> Result<DataFrame, ExtractError> {
		let play_keys = qb_rows.column(GAME_PLAY_ID)?.str()?;
		let nfl_ids = qb_rows.column("nflId")?.i64()?;

		let ambiguous = find_ambiguous_plays(play_keys.into_iter().zip(nfl_ids).filter_map(|(key, nfl_id)| Some((key?, nfl_id?))));
		if ambiguous.is_empty() {
			return Ok(qb_rows);
		}

		let descriptions = play_descriptions(plays, &ambiguous)?;
		let resolution = resolve_ambiguous_plays(&ambiguous, &descriptions, roster, &self.matcher);
		for (game_play_id, nfl_id) in &resolution.resolved {
			debug!(%game_play_id, nfl_id, "resolved ambiguous play");
		}
		for play in &resolution.dropped {
			let warning = ExtractWarning::AmbiguityDrop {
				game_play_id: play.game_play_id.clone(),
				candidates: play.candidates.clone(),
			};
			warn!("{warning}");
			warnings.push(warning);
		}

		let ambiguous_keys: HashSet<&str> = ambiguous.iter().map(|play| play.game_play_id.as_str()).collect();
		let kept_keys = resolution.kept_keys();
		let row_keys = qb_rows.column(GAME_PLAY_NFL_ID)?.str()?;
		let keep: BooleanChunked = play_keys
			.into_iter()
			.zip(row_keys)
			.map(|(play_key, row_key)| match (play_key, row_key) {
				(Some(play_key), Some(row_key)) if ambiguous_keys.contains(play_key) => kept_keys.contains(row_key),
				_ => true,
			})
			.collect();

		Ok(qb_rows.filter(&keep)?)
	}
}

fn empty_result(mode: PressureMode) -> ExtractWarning {
	let warning = ExtractWarning::EmptyResult { mode };
	warn!("{warning}");
	warning
}

/// Quarterbacks in player-table order, with only the columns the output needs.
fn quarterback_roster(players: &DataFrame) -> PolarsResult<DataFrame> {
	players
		.clone()
		.lazy()
		.filter(col("position").cast(DataType::String).eq(lit("QB")))
		.select([col("nflId").cast(DataType::Int64), col("displayName").cast(DataType::String)])
		.collect()
}

fn roster_order(quarterbacks: &DataFrame) -> PolarsResult<Vec<Quarterback>> {
	let nfl_ids = quarterbacks.column("nflId")?.i64()?;
	let names = quarterbacks.column("displayName")?.str()?;

	Ok(nfl_ids.into_iter().zip(names).filter_map(|(nfl_id, name)| Some(Quarterback::new(nfl_id?, name?))).collect())
}

/// `causedPressure` may arrive as a boolean, a TRUE/FALSE string, or 0/1.
fn caused_pressure(dtype: &DataType) -> Expr {
	let flag = col("causedPressure");
	match dtype {
		DataType::Boolean => flag.eq(lit(true)),
		DataType::String => flag.str().to_lowercase().eq(lit("true")),
		_ => flag.cast(DataType::Int64).eq(lit(1i64)),
	}
}

/// Keyed participation rows of quarterbacks on plays from the requested side
/// of the pressure partition. Pressure is a property of the whole play: one
/// pressuring defender puts every row of that play on the pressure side.
fn quarterback_rows(player_play: &DataFrame, quarterbacks: &DataFrame, mode: PressureMode) -> PolarsResult<DataFrame> {
	let pressure = caused_pressure(player_play.column("causedPressure")?.dtype());

	let participation = player_play
		.clone()
		.lazy()
		.with_columns([col("nflId").cast(DataType::Int64), keys::game_play_id()])
		.with_column(keys::game_play_nfl_id());

	let pressured_plays = participation.clone().filter(pressure).select([col(GAME_PLAY_ID)]);
	let quarterback_ids = quarterbacks.clone().lazy().select([col("nflId")]);

	participation
		.join(pressured_plays, [col(GAME_PLAY_ID)], [col(GAME_PLAY_ID)], JoinArgs::new(mode.partition_join()))
		.join(quarterback_ids, [col("nflId")], [col("nflId")], JoinArgs::new(JoinType::Semi))
		.collect()
}

fn play_descriptions(plays: &DataFrame, ambiguous: &[AmbiguousPlay]) -> PolarsResult<HashMap<String, String>> {
	let wanted: HashSet<&str> = ambiguous.iter().map(|play| play.game_play_id.as_str()).collect();
	let keyed = plays
		.clone()
		.lazy()
		.select([keys::game_play_id(), col("playDescription").cast(DataType::String)])
		.collect()?;

	let play_keys = keyed.column(GAME_PLAY_ID)?.str()?;
	let texts = keyed.column("playDescription")?.str()?;

	Ok(play_keys
		.into_iter()
		.zip(texts)
		.filter_map(|(key, text)| match (key, text) {
			(Some(key), Some(text)) if wanted.contains(key) => Some((key.to_string(), text.to_string())),
			_ => None,
		})
		.collect())
}

/// Offense point differential at the snap, one columnar select.
#[must_use]
pub fn score_delta() -> Expr {
	let home = col("preSnapHomeScore").cast(DataType::Int64);
	let visitor = col("preSnapVisitorScore").cast(DataType::Int64);

	when(col("teamAbbr").eq(col("homeTeamAbbr")))
		.then(home.clone() - visitor.clone())
		.otherwise(visitor - home)
		.alias("scoreDelta")
}

/// Attaches play, game, and roster columns to the surviving quarterback rows.
/// Each side is projected before joining so that `gameId`/`playId` come only
/// from the participation rows and `nflId` does not reach the output.
fn join_and_project(qb_rows: DataFrame, tables: &PlayTables, quarterbacks: DataFrame) -> PolarsResult<DataFrame> {
	let qb_rows = qb_rows.lazy().select([
		col("gameId"),
		col("playId"),
		col(GAME_PLAY_ID),
		col("nflId"),
		col("teamAbbr"),
		col("hadRushAttempt"),
		col("rushingYards"),
		col("passingYards"),
	]);

	let games = tables.games.clone().lazy().select([col("gameId").cast(DataType::Int64), col("homeTeamAbbr")]);

	let plays = tables
		.plays
		.clone()
		.lazy()
		.with_column(keys::game_play_id())
		.join(qb_rows.clone().select([col(GAME_PLAY_ID)]), [col(GAME_PLAY_ID)], [col(GAME_PLAY_ID)], JoinArgs::new(JoinType::Semi))
		.with_column(col("gameId").cast(DataType::Int64))
		.join(games, [col("gameId")], [col("gameId")], JoinType::Inner.into())
		.select([
			col(GAME_PLAY_ID),
			col("homeTeamAbbr"),
			col("preSnapHomeScore"),
			col("preSnapVisitorScore"),
			col("down"),
			col("yardsToGo"),
			col("absoluteYardlineNumber"),
			col("passResult"),
			col("prePenaltyYardsGained"),
			col("passLength"),
			col("timeToThrow"),
			col("timeInTackleBox"),
			col("qbSneak"),
			col("qbKneel"),
			col("qbSpike"),
		]);

	qb_rows
		.join(plays, [col(GAME_PLAY_ID)], [col(GAME_PLAY_ID)], JoinType::Inner.into())
		.join(quarterbacks.lazy(), [col("nflId")], [col("nflId")], JoinType::Inner.into())
		.with_column(score_delta())
		.select(OUTPUT_COLUMNS.iter().map(|&name| col(name)).collect::<Vec<_>>())
		.sort(vec!["gameId", "playId"], SortMultipleOptions::default())
		.collect()
}
