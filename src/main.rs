// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{path::PathBuf, process::ExitCode};

mod util;
util::mod_days![02, 03, 04, 07, 08];


/// Advent of Code 2022 puzzle solvers; prints the answer for one day & part.
#[derive(Debug, clap::Parser)]
#[command(name = "advent22", version, about)]
struct Args {
	/// Input file path
	#[arg(default_value = "./input.txt")]
	input: PathBuf,

	/// Puzzle day
	#[arg(short, long, default_value_t = 8, value_parser = parse_day)]
	day: u8,

	/// Puzzle part
	#[arg(short, long, value_enum, default_value_t = util::Part::One)]
	part: util::Part,

	/// Scan day 8 grids on the rayon thread pool
	#[arg(long)]
	parallel: bool,

	/// Raise log verbosity (repeatable); `RUST_LOG` takes precedence
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

fn parse_day(s: &str) -> Result<u8, String> {
	use itertools::Itertools as _;
	let day = s.parse::<u8>().map_err(|e| e.to_string())?;
	if DAYS.contains(&day) { return Ok(day) }
	Err(format!("no solver for day {day} (expected one of {})", DAYS.iter().join(", ")))
}


fn init_tracing(verbose: u8) {
	use tracing_subscriber::{prelude::*, EnvFilter};

	let default_directive = match verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_directive));

	// Stdout is reserved for the answer
	tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer()
			.with_writer(std::io::stderr)
			.with_target(false))
		.init();
}


fn run(args: &Args) -> anyhow::Result<u64> {
	use anyhow::Context as _;

	let input = std::fs::read_to_string(&args.input)
		.with_context(|| format!("Failed to read {}", args.input.display()))?;
	tracing::info!(day = args.day, part = %args.part, input = %args.input.display(), "Solving");

	let options = util::Options { parallel: args.parallel };
	let answer = solve(args.day, args.part, &input, &options)
		.with_context(|| format!("Day {}, part {} failed", args.day, args.part))?;
	tracing::info!(answer, "Solved");
	Ok(answer)
}

fn main() -> ExitCode {
	use clap::{CommandFactory as _, Parser as _};

	let args = Args::parse();
	init_tracing(args.verbose);

	if !args.input.exists() {
		println!("{}", Args::command().render_usage());
		println!("No input file at {}", args.input.display());
		return ExitCode::SUCCESS
	}

	match run(&args) {
		Ok(answer) => {
			println!("Day {}, part {}: {answer}", args.day, args.part);
			ExitCode::SUCCESS
		}
		Err(err) => {
			eprintln!("Error: {err:#}");
			ExitCode::FAILURE
		}
	}
}
