// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::util::Options;


type Assignment = std::ops::RangeInclusive<u64>;

#[derive(Debug, PartialEq, Eq)]
struct AssignmentsPair([Assignment; 2]);

trait RangeInclusiveExt {
	fn contains_range(&self, other: &Self) -> bool;
	fn overlaps_range(&self, other: &Self) -> bool;
}

impl<T: PartialOrd> RangeInclusiveExt for std::ops::RangeInclusive<T> {
	fn contains_range(&self, other: &Self) -> bool {
		*self.start() <= *other.start() && *self.end() >= *other.end()
	}

	fn overlaps_range(&self, other: &Self) -> bool {
		*self.start() <= *other.end() && *self.end() >= *other.start()
	}
}


fn input_assignments_pairs_from_str(s: &str) -> Result<Vec<AssignmentsPair>, parsing::AssignmentsPairsError> {
	parsing::assignments_pairs_from_str(s).collect()
}

fn count_pairs(
	input_assignment_pairs: Vec<AssignmentsPair>,
	predicate: impl Fn(&Assignment, &Assignment) -> bool,
) -> u64 {
	input_assignment_pairs.iter()
		.filter(|AssignmentsPair([left, right])| predicate(left, right))
		.count() as u64
}


fn part1_impl(input_assignment_pairs: Vec<AssignmentsPair>) -> u64 {
	count_pairs(input_assignment_pairs, |left, right|
		left.contains_range(right) || right.contains_range(left))
}

pub(crate) fn part1(input: &str, _options: &Options) -> Result<u64, parsing::AssignmentsPairsError> {
	Ok(part1_impl(input_assignments_pairs_from_str(input)?))
}


fn part2_impl(input_assignment_pairs: Vec<AssignmentsPair>) -> u64 {
	count_pairs(input_assignment_pairs, |left, right| left.overlaps_range(right))
}

pub(crate) fn part2(input: &str, _options: &Options) -> Result<u64, parsing::AssignmentsPairsError> {
	Ok(part2_impl(input_assignments_pairs_from_str(input)?))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Assignment, AssignmentsPair};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum AssignmentError {
		#[error("expected `start-end`")]
		NoHyphen,
		#[error("invalid start")]
		StartError(#[source] ParseIntError),
		#[error("invalid end")]
		EndError(#[source] ParseIntError),
		#[error("end {end} comes before start {start}")]
		Negative { start: u64, end: u64 },
	}

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum AssignmentsPairError {
		#[error("expected two comma-separated assignments")]
		NoComma,
		#[error("invalid left assignment")]
		LeftAssignment(#[source] AssignmentError),
		#[error("invalid right assignment")]
		RightAssignment(#[source] AssignmentError),
	}

	fn assignment_from_str(s: &str) -> Result<Assignment, AssignmentError> {
		let (start, end) = s.split_once('-')
			.ok_or(AssignmentError::NoHyphen)?;
		let start = start.trim().parse().map_err(AssignmentError::StartError)?;
		let end = end.trim().parse().map_err(AssignmentError::EndError)?;
		if end < start { return Err(AssignmentError::Negative { start, end }) }
		Ok(start..=end)
	}

	impl FromStr for AssignmentsPair {
		type Err = AssignmentsPairError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (left, right) = s.split_once(',')
				.ok_or(AssignmentsPairError::NoComma)?;
			let left = assignment_from_str(left)
				.map_err(AssignmentsPairError::LeftAssignment)?;
			let right = assignment_from_str(right)
				.map_err(AssignmentsPairError::RightAssignment)?;
			Ok(AssignmentsPair([left, right]))
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum AssignmentsPairsError {
		#[error("line {line}: invalid assignments pair")]
		Pair { line: usize, #[source] source: AssignmentsPairError },
	}

	/// Blank lines are skipped.
	pub(super) fn assignments_pairs_from_str(s: &str) -> impl Iterator<Item = Result<AssignmentsPair, AssignmentsPairsError>> + '_ {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.trim().parse()
				.map_err(|e| AssignmentsPairsError::Pair { line: l + 1, source: e }))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		2-4,6-8
		2-3,4-5
		5-7,7-9
		2-8,3-7
		6-6,4-6
		2-6,4-8
	" };
	assert_eq!(part1(INPUT, &Options::default()).unwrap(), 2);
	assert_eq!(part2(INPUT, &Options::default()).unwrap(), 4);
}


#[cfg(test)]
mod tests {
	use super::*;
	use test_case::test_case;

	#[test_case(2..=8, 3..=7 => true ; "outer contains inner")]
	#[test_case(6..=6, 4..=6 => false ; "inner does not contain outer")]
	#[test_case(5..=7, 7..=9 => false ; "touching")]
	fn contains_range(left: Assignment, right: Assignment) -> bool {
		left.contains_range(&right)
	}

	#[test_case(5..=7, 7..=9 => true ; "touching")]
	#[test_case(2..=4, 6..=8 => false ; "disjoint")]
	#[test_case(6..=8, 2..=4 => false ; "disjoint reversed")]
	#[test_case(3..=3, 1..=9 => true ; "nested")]
	fn overlaps_range(left: Assignment, right: Assignment) -> bool {
		left.overlaps_range(&right)
	}

	#[test]
	fn parses_pair() {
		assert_eq!("12-34,5-6".parse::<AssignmentsPair>().unwrap(), AssignmentsPair([12..=34, 5..=6]));
	}

	#[test]
	fn skips_blank_lines() {
		assert_eq!(part1("\n2-8,3-7\n\n6-6,4-6\n\n", &Options::default()).unwrap(), 2);
	}

	#[test]
	fn reports_line_of_malformed_pair() {
		let err = part2("2-4,6-8\n2-3;4-5\n", &Options::default()).unwrap_err();
		assert!(matches!(err, parsing::AssignmentsPairsError::Pair {
			line: 2, source: parsing::AssignmentsPairError::NoComma }));
	}

	#[test]
	fn rejects_backwards_range() {
		let err = "4-2,1-1".parse::<AssignmentsPair>().unwrap_err();
		assert!(matches!(err, parsing::AssignmentsPairError::LeftAssignment(
			parsing::AssignmentError::Negative { start: 4, end: 2 })));
	}
}
