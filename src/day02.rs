// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::util::Options;


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Play { Rock = 1, Paper = 2, Scissors = 3 }

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum End { Lose = 0, Draw = 3, Win = 6 }

#[derive(Debug, PartialEq, Eq)]
struct Round<SecondColumn>(Play, SecondColumn);


fn input_rounds_from_str<SecondColumn>(s: &str) -> Result<Vec<Round<SecondColumn>>, parsing::RoundsError>
where SecondColumn: std::str::FromStr<Err = parsing::ColumnError> {
	parsing::rounds_from_str(s).collect()
}


fn part1_impl(input_rounds: Vec<Round<Play>>) -> u64 {
	input_rounds.into_iter().map(|round| {
		use {Play::*, End::*, Round as R};
		round.1 as u64 + match round {
			R(Rock, Scissors) | R(Paper, Rock) | R(Scissors, Paper) => Lose as u64,
			R(Rock, Rock) | R(Paper, Paper) | R(Scissors, Scissors) => Draw as u64,
			R(Rock, Paper) | R(Paper, Scissors) | R(Scissors, Rock) => Win as u64,
		}
	}).sum()
}

pub(crate) fn part1(input: &str, _options: &Options) -> Result<u64, parsing::RoundsError> {
	Ok(part1_impl(input_rounds_from_str(input)?))
}


fn part2_impl(input_rounds: Vec<Round<End>>) -> u64 {
	input_rounds.into_iter().map(|round| {
		use {Play::*, End::*, Round as R};
		round.1 as u64 + match round {
			R(Paper, Lose) | R(Rock, Draw) | R(Scissors, Win) => Rock as u64,
			R(Scissors, Lose) | R(Paper, Draw) | R(Rock, Win) => Paper as u64,
			R(Rock, Lose) | R(Scissors, Draw) | R(Paper, Win) => Scissors as u64,
		}
	}).sum()
}

pub(crate) fn part2(input: &str, _options: &Options) -> Result<u64, parsing::RoundsError> {
	Ok(part2_impl(input_rounds_from_str(input)?))
}


mod parsing {
	use {std::str::FromStr, itertools::Itertools as _};
	use super::{Play, End, Round};

	/// A play read from the opponent’s column (`YOU == false`, `ABC`) or yours (`XYZ`).
	struct PlayerPlay<const YOU: bool>(Play);

	impl<const YOU: bool> TryFrom<char> for PlayerPlay<YOU> {
		type Error = Option<char>;
		fn try_from(value: char) -> Result<Self, Self::Error> {
			use Play::*;
			match (YOU, value) {
				(false, 'A') => Ok(PlayerPlay(Rock)),
				(false, 'B') => Ok(PlayerPlay(Paper)),
				(false, 'C') => Ok(PlayerPlay(Scissors)),
				(false, 'X' | 'Y' | 'Z') => Err(None),
				(true, 'X') => Ok(PlayerPlay(Rock)),
				(true, 'Y') => Ok(PlayerPlay(Paper)),
				(true, 'Z') => Ok(PlayerPlay(Scissors)),
				(true, 'A' | 'B' | 'C') => Err(None),
				(_, invalid) => Err(Some(invalid)),
			}
		}
	}

	/// Error for a single column of a round, either player’s.
	#[derive(Debug, thiserror::Error)]
	pub(crate) enum ColumnError {
		#[error("expected a single letter, found {len}")]
		Format { len: usize },
		#[error("letter belongs to the other player")]
		WrongPlayer,
		#[error("invalid letter {found:?}")]
		Invalid { found: char },
	}

	macro_rules! exactly_one_err { ( $chars:expr ) => { {
		let (low, upp) = $chars.size_hint();
		Err(ColumnError::Format { len: upp.unwrap_or(low) })
	} }}

	impl<const YOU: bool> FromStr for PlayerPlay<YOU> {
		type Err = ColumnError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use ColumnError::*;
			match s.chars().exactly_one() {
				Ok(chr) => PlayerPlay::<YOU>::try_from(chr).map_err(|e|
					e.map(|found| Invalid { found }).unwrap_or(WrongPlayer)),
				Err(chars) => exactly_one_err!(chars),
			}
		}
	}

	impl FromStr for Play {
		type Err = ColumnError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			Ok(PlayerPlay::<true>::from_str(s)?.0)
		}
	}

	impl TryFrom<char> for End {
		type Error = ();
		fn try_from(value: char) -> Result<Self, Self::Error> {
			use End::*;
			match value {
				'X' => Ok(Lose),
				'Y' => Ok(Draw),
				'Z' => Ok(Win),
				_ => Err(())
			}
		}
	}

	impl FromStr for End {
		type Err = ColumnError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			match s.chars().exactly_one() {
				Ok(chr) => End::try_from(chr).map_err(|_| ColumnError::Invalid { found: chr }),
				Err(chars) => exactly_one_err!(chars),
			}
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum RoundError {
		#[error("expected two space-separated columns")]
		Format,
		#[error("invalid opponent column")]
		Play(#[source] ColumnError),
		#[error("invalid second column")]
		SecondColumn(#[source] ColumnError),
	}

	impl<SecondColumn: FromStr<Err = ColumnError>> FromStr for Round<SecondColumn> {
		type Err = RoundError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (other, second_column) = s.split_once(' ')
				.ok_or(RoundError::Format)?;
			Ok(Round(
				other.parse::<PlayerPlay<false>>()
					.map_err(RoundError::Play)?.0,
				second_column.parse::<SecondColumn>()
					.map_err(RoundError::SecondColumn)?,
			))
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum RoundsError {
		#[error("line {line}: invalid round")]
		Round { line: usize, #[source] source: RoundError },
	}

	/// Whether `line` starts like a round (`[ABC] [XYZ]`); anything may follow.
	fn is_round_line(line: &str) -> bool {
		matches!(line.as_bytes(), [b'A'..=b'C', b' ', b'X'..=b'Z', ..])
	}

	/// Lines that don’t start like a round are skipped; ones that do must hold nothing else.
	pub(super) fn rounds_from_str<'s, SecondColumn: FromStr<Err = ColumnError> + 's>(s: &'s str)
	-> impl Iterator<Item = Result<Round<SecondColumn>, RoundsError>> + 's {
		s.lines()
			.enumerate()
			.filter(|(l, line)| {
				let keep = is_round_line(line);
				if !keep { tracing::debug!(line = l + 1, "Skipping non-round line") }
				keep
			})
			.map(|(l, line)| line.trim_end().parse()
				.map_err(|e| RoundsError::Round { line: l + 1, source: e }))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		A Y
		B X
		C Z
	" };
	assert_eq!(part1(INPUT, &Options::default()).unwrap(), 15);
	assert_eq!(part2(INPUT, &Options::default()).unwrap(), 12);
}


#[cfg(test)]
mod tests {
	use super::*;
	use test_case::test_case;

	#[test_case("A Y" => 8 ; "paper beats rock")]
	#[test_case("B X" => 1 ; "rock loses to paper")]
	#[test_case("C Z" => 6 ; "scissors draw")]
	fn part1_round(input: &str) -> u64 {
		part1(input, &Options::default()).unwrap()
	}

	#[test_case("A Y" => 4 ; "draw against rock")]
	#[test_case("B X" => 1 ; "lose against paper")]
	#[test_case("C Z" => 7 ; "win against scissors")]
	fn part2_round(input: &str) -> u64 {
		part2(input, &Options::default()).unwrap()
	}

	#[test]
	fn parses_rounds() {
		assert_eq!(input_rounds_from_str::<Play>("A Y\nC X\n").unwrap(),
			[Round(Play::Rock, Play::Paper), Round(Play::Scissors, Play::Rock)]);
		assert_eq!(input_rounds_from_str::<End>("B Z\n").unwrap(),
			[Round(Play::Paper, End::Win)]);
	}

	#[test]
	fn skips_non_round_lines() {
		let input = "\nA Y\nX A\nhello\nB X\n\nC Z\n";
		assert_eq!(part1(input, &Options::default()).unwrap(), 15);
	}

	#[test]
	fn rejects_trailing_garbage() {
		let err = part1("A Y\nB XY\n", &Options::default()).unwrap_err();
		assert!(matches!(err, parsing::RoundsError::Round {
			line: 2,
			source: parsing::RoundError::SecondColumn(parsing::ColumnError::Format { len: 2 }),
		}));
	}
}
