use crate::mode::PressureMode;
use crate::schema::Table;
use polars::prelude::PolarsError;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
	#[error("{table} table is missing required column `{column}`")]
	Schema { table: Table, column: String },

	#[error("Polars error: {0}")]
	Polars(#[from] PolarsError),

	#[error("IO error on {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

impl ExtractError {
	pub fn schema(table: Table, column: &str) -> Self {
		Self::Schema {
			table,
			column: column.to_string(),
		}
	}

	pub fn io(path: &Path, source: io::Error) -> Self {
		Self::Io {
			path: path.to_path_buf(),
			source,
		}
	}
}

/// Non-fatal conditions raised during an extraction. They are logged as they
/// happen and handed back to the caller alongside the output frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractWarning {
	/// No play survived the filters; the output is empty but well formed.
	EmptyResult { mode: PressureMode },

	/// An ambiguous play where the description named none of its quarterbacks.
	/// Every participation row of that play was dropped.
	AmbiguityDrop { game_play_id: String, candidates: Vec<i64> },
}

impl fmt::Display for ExtractWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::EmptyResult { mode } => write!(f, "no quarterback plays matched in {mode} mode"),
			Self::AmbiguityDrop { game_play_id, candidates } => {
				write!(f, "play {game_play_id} dropped: description names none of quarterbacks {candidates:?}")
			}
		}
	}
}
