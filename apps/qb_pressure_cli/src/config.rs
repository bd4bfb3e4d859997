use clap::{Parser, ValueEnum};
use qb_pressure::schema::Table;
use qb_pressure::PressureMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunMode {
	Pressure,
	NoPressure,
	/// Pressure then no-pressure, over the same loaded inputs
	Both,
}

impl RunMode {
	pub fn modes(self) -> Vec<PressureMode> {
		match self {
			Self::Pressure => vec![PressureMode::Pressure],
			Self::NoPressure => vec![PressureMode::NoPressure],
			Self::Both => PressureMode::ALL.to_vec(),
		}
	}
}

#[derive(Parser, Clone, Debug, Serialize, Deserialize)]
#[command(author, version, about = "Extract QB plays with and without defensive pressure", long_about = None)]
pub struct Config {
	/// Directory holding games.csv, player_play.csv, players.csv and plays.csv
	#[arg(long, env = "QB_DATA_DIR", default_value = ".")]
	pub data_dir: PathBuf,

	/// Override path for games.csv
	#[arg(long, env = "QB_GAMES_FILE")]
	pub games: Option<PathBuf>,

	/// Override path for player_play.csv
	#[arg(long, env = "QB_PLAYER_PLAY_FILE")]
	pub player_play: Option<PathBuf>,

	/// Override path for players.csv
	#[arg(long, env = "QB_PLAYERS_FILE")]
	pub players: Option<PathBuf>,

	/// Override path for plays.csv
	#[arg(long, env = "QB_PLAYS_FILE")]
	pub plays: Option<PathBuf>,

	/// Directory the output CSVs are written to
	#[arg(long, env = "QB_OUTPUT_DIR", default_value = ".")]
	pub output_dir: PathBuf,

	/// Which side of the pressure partition to extract
	#[arg(long, env = "QB_MODE", value_enum, default_value_t = RunMode::Both)]
	pub mode: RunMode,

	/// Log filter
	#[arg(long, env = "RUST_LOG", default_value = "info")]
	pub rust_log: String,

	/// Use JSON formatting for tracing
	#[arg(long, env = "LOG_JSON", default_value = "false")]
	pub log_json: bool,
}

impl Config {
	pub fn input_path(&self, table: Table) -> PathBuf {
		let explicit = match table {
			Table::Games => &self.games,
			Table::PlayerPlay => &self.player_play,
			Table::Players => &self.players,
			Table::Plays => &self.plays,
		};
		explicit.clone().unwrap_or_else(|| self.data_dir.join(table.file_name()))
	}

	pub fn output_path(&self, mode: PressureMode) -> PathBuf {
		self.output_dir.join(mode.output_file_name())
	}
}
