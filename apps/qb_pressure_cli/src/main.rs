mod config;

use anyhow::Context;
use clap::Parser;
use qb_pressure::schema::Table;
use qb_pressure::{write_csv, PlayTables, PressurePlayExtractor};
use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt::format::JsonFields, util::SubscriberInitExt, Layer};

use crate::config::Config;

fn main() -> anyhow::Result<()> {
	dotenv::dotenv().ok();

	let config = Config::parse();
	init_tracing(&config)?;

	let tables = PlayTables::from_paths(
		&config.input_path(Table::Games),
		&config.input_path(Table::PlayerPlay),
		&config.input_path(Table::Players),
		&config.input_path(Table::Plays),
	)
	.context("could not load input tables")?;

	let extractor = PressurePlayExtractor::new();
	for mode in config.mode.modes() {
		let mut extraction = extractor.extract(&tables, mode).with_context(|| format!("{mode} extraction failed"))?;

		let output = config.output_path(mode);
		write_csv(&mut extraction.frame, &output).with_context(|| format!("could not write {}", output.display()))?;

		info!(%mode, plays = extraction.height(), warnings = extraction.warnings.len(), "extraction complete");
		println!("Processed QB {mode} data saved to {}", output.display());
	}

	Ok(())
}

fn init_tracing(config: &Config) -> anyhow::Result<()> {
	use tracing_subscriber::layer::SubscriberExt;

	let filter = EnvFilter::try_new(&config.rust_log).with_context(|| format!("invalid log filter {:?}", config.rust_log))?;

	tracing_subscriber::registry()
		.with(if config.log_json {
			Box::new(
				tracing_subscriber::fmt::layer()
					.with_writer(std::io::stderr)
					.fmt_fields(JsonFields::default())
					.event_format(tracing_subscriber::fmt::format().json().flatten_event(true).with_span_list(false))
					.with_filter(filter),
			) as Box<dyn Layer<_> + Send + Sync>
		} else {
			Box::new(
				tracing_subscriber::fmt::layer()
					.with_writer(std::io::stderr)
					.event_format(tracing_subscriber::fmt::format().pretty())
					.with_filter(filter),
			)
		})
		.try_init()?;

	Ok(())
}
