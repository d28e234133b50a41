// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum Part {
	#[value(name = "1")]
	One,
	#[value(name = "2")]
	Two,
}

impl std::fmt::Display for Part {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Part::One => f.write_str("1"),
			Part::Two => f.write_str("2"),
		}
	}
}


/// Knobs shared by every day’s `part1` & `part2`; days that have no use for one ignore it.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Options {
	/// Scan on the `rayon` global thread pool instead of the calling thread.
	pub(crate) parallel: bool,
}


/// Declares a `dayNN` module per listed day, plus:
/// - `DAYS`, the listed days in order;
/// - `solve`, dispatching a day & [`Part`] to that module’s `part1` or `part2`.
///
/// Every module must provide `part1` & `part2` taking `(&str, &Options)` and returning a
/// `Result<u64, E>` whose `E` converts into [`anyhow::Error`].
macro_rules! mod_days { ( $( $day:literal ),+ $(,)? ) => { paste::paste! {
	$( mod [<day $day>]; )+

	#[allow(clippy::zero_prefixed_literal)]
	pub(crate) const DAYS: &[u8] = &[ $( $day ),+ ];

	#[allow(clippy::zero_prefixed_literal)]
	#[tracing::instrument(level = "debug", skip(input, options))]
	pub(crate) fn solve(
		day: u8,
		part: $crate::util::Part,
		input: &str,
		options: &$crate::util::Options,
	) -> anyhow::Result<u64> {
		use $crate::util::Part;
		match (day, part) {
			$(
				($day, Part::One) => Ok([<day $day>]::part1(input, options)?),
				($day, Part::Two) => Ok([<day $day>]::part2(input, options)?),
			)+
			_ => anyhow::bail!("No solver for day {day}"),
		}
	}
} } }

pub(crate) use mod_days;
