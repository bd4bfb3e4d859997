use crate::error::ExtractError;
use crate::extractor::PlayTables;
use crate::schema::Table;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;
use tracing::info;

/// Reads a headered CSV file, inferring column types from every row. A
/// zero-byte file reads as an empty table.
pub fn read_csv(path: &Path) -> Result<DataFrame, ExtractError> {
	let file = File::open(path).map_err(|e| ExtractError::io(path, e))?;

	let is_empty = file.metadata().map(|m| m.len() == 0).map_err(|e| ExtractError::io(path, e))?;
	if is_empty {
		return Ok(DataFrame::empty());
	}

	let frame = CsvReadOptions::default()
		.with_has_header(true)
		.with_infer_schema_length(None)
		.into_reader_with_file_handle(file)
		.finish()?;

	info!(path = %path.display(), rows = frame.height(), columns = frame.width(), "loaded table");
	Ok(frame)
}

/// Writes `frame` with a header row, creating parent directories as needed.
/// Nulls are written as empty fields.
pub fn write_csv(frame: &mut DataFrame, path: &Path) -> Result<(), ExtractError> {
	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		fs::create_dir_all(parent).map_err(|e| ExtractError::io(parent, e))?;
	}

	let mut file = File::create(path).map_err(|e| ExtractError::io(path, e))?;
	CsvWriter::new(&mut file).include_header(true).finish(frame)?;

	info!(path = %path.display(), rows = frame.height(), "wrote table");
	Ok(())
}

impl PlayTables {
	pub fn from_paths(games: &Path, player_play: &Path, players: &Path, plays: &Path) -> Result<Self, ExtractError> {
		Ok(Self::new(read_csv(games)?, read_csv(player_play)?, read_csv(players)?, read_csv(plays)?))
	}

	/// Loads `games.csv`, `player_play.csv`, `players.csv` and `plays.csv` from `dir`.
	pub fn from_dir(dir: &Path) -> Result<Self, ExtractError> {
		Self::from_paths(
			&dir.join(Table::Games.file_name()),
			&dir.join(Table::PlayerPlay.file_name()),
			&dir.join(Table::Players.file_name()),
			&dir.join(Table::Plays.file_name()),
		)
	}

	/// Writes the four tables into `dir` under their conventional file names.
	pub fn write_dir(&mut self, dir: &Path) -> Result<(), ExtractError> {
		write_csv(&mut self.games, &dir.join(Table::Games.file_name()))?;
		write_csv(&mut self.player_play, &dir.join(Table::PlayerPlay.file_name()))?;
		write_csv(&mut self.players, &dir.join(Table::Players.file_name()))?;
		write_csv(&mut self.plays, &dir.join(Table::Plays.file_name()))
	}
}
