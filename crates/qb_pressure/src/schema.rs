use crate::error::ExtractError;
use polars::prelude::*;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
	Games,
	PlayerPlay,
	Players,
	Plays,
}

impl Table {
	pub const ALL: [Self; 4] = [Self::Games, Self::PlayerPlay, Self::Players, Self::Plays];

	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::Games => "games",
			Self::PlayerPlay => "player_play",
			Self::Players => "players",
			Self::Plays => "plays",
		}
	}

	#[must_use]
	pub const fn file_name(self) -> &'static str {
		match self {
			Self::Games => "games.csv",
			Self::PlayerPlay => "player_play.csv",
			Self::Players => "players.csv",
			Self::Plays => "plays.csv",
		}
	}

	/// Columns the extraction reads from this table. Anything else is ignored.
	#[must_use]
	pub const fn required_columns(self) -> &'static [&'static str] {
		match self {
			Self::Games => &["gameId", "homeTeamAbbr"],
			Self::PlayerPlay => &[
				"gameId",
				"playId",
				"nflId",
				"teamAbbr",
				"causedPressure",
				"hadRushAttempt",
				"rushingYards",
				"passingYards",
			],
			Self::Players => &["nflId", "displayName", "position"],
			Self::Plays => &[
				"gameId",
				"playId",
				"playDescription",
				"preSnapHomeScore",
				"preSnapVisitorScore",
				"down",
				"yardsToGo",
				"absoluteYardlineNumber",
				"passResult",
				"prePenaltyYardsGained",
				"passLength",
				"timeToThrow",
				"timeInTackleBox",
				"qbSneak",
				"qbKneel",
				"qbSpike",
			],
		}
	}
}

impl fmt::Display for Table {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

pub const OUTPUT_COLUMNS: [&str; 19] = [
	"gameId",
	"playId",
	"game_play_id",
	"scoreDelta",
	"displayName",
	"down",
	"yardsToGo",
	"absoluteYardlineNumber",
	"passResult",
	"prePenaltyYardsGained",
	"passLength",
	"timeToThrow",
	"timeInTackleBox",
	"hadRushAttempt",
	"rushingYards",
	"qbSneak",
	"qbKneel",
	"qbSpike",
	"passingYards",
];

/// Column types used when there is nothing to infer them from.
fn output_dtype(column: &str) -> DataType {
	match column {
		"game_play_id" | "displayName" | "passResult" => DataType::String,
		"passLength" | "timeToThrow" | "timeInTackleBox" => DataType::Float64,
		"qbSneak" | "qbSpike" => DataType::Boolean,
		_ => DataType::Int64,
	}
}

/// Zero-row frame carrying the output header.
pub fn empty_output() -> PolarsResult<DataFrame> {
	let columns: Vec<Column> = OUTPUT_COLUMNS.iter().map(|&name| Series::new_empty(name.into(), &output_dtype(name)).into()).collect();
	DataFrame::new(columns)
}

/// A table with no header or no rows contributes nothing to the output.
#[must_use]
pub fn is_empty_table(frame: &DataFrame) -> bool {
	frame.width() == 0 || frame.height() == 0
}

/// Checks that `frame` carries every column `table` requires. Headerless
/// tables are treated as empty input and pass.
pub fn validate(table: Table, frame: &DataFrame) -> Result<(), ExtractError> {
	if frame.width() == 0 {
		return Ok(());
	}

	match table.required_columns().iter().find(|column| frame.column(column).is_err()) {
		Some(missing) => Err(ExtractError::schema(table, missing)),
		None => Ok(()),
	}
}
