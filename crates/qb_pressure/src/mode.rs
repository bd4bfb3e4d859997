use polars::prelude::JoinType;
use std::fmt;

/// Which side of the pressure partition an extraction keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressureMode {
	/// Plays where at least one defender caused pressure.
	Pressure,
	/// Plays where no defender caused pressure.
	NoPressure,
}

impl PressureMode {
	pub const ALL: [Self; 2] = [Self::Pressure, Self::NoPressure];

	#[must_use]
	pub const fn is_pressure(self) -> bool {
		matches!(self, Self::Pressure)
	}

	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Pressure => "pressure",
			Self::NoPressure => "no-pressure",
		}
	}

	#[must_use]
	pub const fn output_file_name(self) -> &'static str {
		match self {
			Self::Pressure => "qb_with_pressure_plays.csv",
			Self::NoPressure => "qb_without_pressure_plays.csv",
		}
	}

	// semi keeps rows whose play is in the pressured set, anti keeps the rest
	pub(crate) const fn partition_join(self) -> JoinType {
		match self {
			Self::Pressure => JoinType::Semi,
			Self::NoPressure => JoinType::Anti,
		}
	}
}

impl From<bool> for PressureMode {
	fn from(pressure: bool) -> Self {
		if pressure {
			Self::Pressure
		} else {
			Self::NoPressure
		}
	}
}

impl fmt::Display for PressureMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
