// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashSet;
use crate::util::Options;


struct Rucksack<'s>(&'s str);

impl<'s> Rucksack<'s> {
	fn compartments(&self) -> [&'s str; 2] {
		let half_len = self.0.len() / 2;
		[&self.0[..half_len], &self.0[half_len..]]
	}

	fn items(&self) -> HashSet<u8> {
		self.0.bytes().collect()
	}

	fn priority(item: u8) -> u64 {
		(if item >= b'a' { 1 + item - b'a' } else { 27 + item - b'A' }) as u64
	}

	/// Sums the priorities of `common_items`, which should hold exactly one item.
	fn prioritize_common_items<'i>(common_items: impl Iterator<Item = &'i u8>) -> u64 {
		let mut count = 0;
		let priority = common_items
			.inspect(|_| count += 1)
			.map(|&item| {
				let priority = Self::priority(item);
				tracing::trace!(item = %(item as char), priority);
				priority
			})
			.sum();
		if count != 1 { tracing::warn!(count, "Expected exactly 1 common item") }
		priority
	}
}


fn input_rucksacks_from_str(s: &str) -> impl Iterator<Item = Result<Rucksack<'_>, parsing::RucksacksError>> + '_ {
	parsing::rucksacks_from_str(s)
}


fn part1_impl<'s>(
	input_rucksacks: impl Iterator<Item = Result<Rucksack<'s>, parsing::RucksacksError>>,
) -> Result<u64, parsing::RucksacksError> {
	input_rucksacks
		.map(|r| -> Result<_, parsing::RucksacksError> {
			let [c0, c1] = r?.compartments();
			let s0 = HashSet::<u8>::from_iter(c0.bytes());
			let s1 = HashSet::<u8>::from_iter(c1.bytes());
			Ok(Rucksack::prioritize_common_items(s0.intersection(&s1)))
		})
		.sum()
}

pub(crate) fn part1(input: &str, _options: &Options) -> Result<u64, parsing::RucksacksError> {
	part1_impl(input_rucksacks_from_str(input))
}


fn part2_impl<'s>(
	input_rucksacks: impl Iterator<Item = Result<Rucksack<'s>, parsing::RucksacksError>>,
) -> Result<u64, parsing::RucksacksError> {
	use itertools::Itertools as _;
	let mut total = 0;
	for chunk in &input_rucksacks.chunks(3) {
		let group = chunk.collect::<Result<Vec<_>, _>>()?;
		let [r0, r1, r2] = group.as_slice() else {
			tracing::debug!(len = group.len(), "Dropping incomplete group");
			continue
		};
		let common = r0.items()
			.intersection(&r1.items())
			.copied()
			.collect::<HashSet<_>>();
		total += Rucksack::prioritize_common_items(common.intersection(&r2.items()));
	}
	Ok(total)
}

pub(crate) fn part2(input: &str, _options: &Options) -> Result<u64, parsing::RucksacksError> {
	part2_impl(input_rucksacks_from_str(input))
}


mod parsing {
	use super::Rucksack;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum RucksackError {
		#[error("odd number of items ({0})")]
		OddLen(usize),
	}

	impl<'s> TryFrom<&'s str> for Rucksack<'s> {
		type Error = RucksackError;
		fn try_from(s: &'s str) -> Result<Self, Self::Error> {
			if s.len() % 2 != 0 { return Err(RucksackError::OddLen(s.len())) }
			Ok(Rucksack(s))
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum RucksacksError {
		#[error("line {line}: invalid rucksack")]
		Rucksack { line: usize, #[source] source: RucksackError },
	}

	fn is_rucksack_line(line: &str) -> bool {
		line.len() >= 2 && line.bytes().all(|b| b.is_ascii_alphabetic())
	}

	/// Lines that aren’t at least two letters long are skipped.
	pub(super) fn rucksacks_from_str(s: &str) -> impl Iterator<Item = Result<Rucksack<'_>, RucksacksError>> + '_ {
		s.lines()
			.enumerate()
			.filter(|(l, line)| {
				let keep = is_rucksack_line(line);
				if !keep { tracing::debug!(line = l + 1, "Skipping non-rucksack line") }
				keep
			})
			.map(|(l, line)| line.try_into()
				.map_err(|e| RucksacksError::Rucksack { line: l + 1, source: e }))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		vJrwpWtwJgWrhcsFMMfFFhFp
		jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
		PmmdzqPrVvPwwTWBwg
		wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
		ttgJtRGJQctTZtZT
		CrZsJsPPZsGzwwsLwLmpwMDw
	" };
	assert_eq!(part1(INPUT, &Options::default()).unwrap(), 157);
	assert_eq!(part2(INPUT, &Options::default()).unwrap(), 70);
}


#[cfg(test)]
mod tests {
	use super::*;
	use test_case::test_case;

	#[test_case(b'a' => 1)]
	#[test_case(b'p' => 16)]
	#[test_case(b'z' => 26)]
	#[test_case(b'A' => 27)]
	#[test_case(b'L' => 38)]
	#[test_case(b'Z' => 52)]
	fn priority(item: u8) -> u64 {
		Rucksack::priority(item)
	}

	#[test]
	fn skips_junk_lines() {
		let input = "\nvJrwpWtwJgWrhcsFMMfFFhFp\n1234\nx\n\n";
		assert_eq!(part1(input, &Options::default()).unwrap(), 16);
	}

	#[test]
	fn sums_every_common_item() {
		// `a` & `B` are in both compartments
		assert_eq!(part1("aBcaBd", &Options::default()).unwrap(), 1 + 28);
	}

	#[test]
	fn drops_incomplete_group() {
		let input = indoc::indoc! { "
			vJrwpWtwJgWrhcsFMMfFFhFp
			jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
			PmmdzqPrVvPwwTWBwg
			wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
		" };
		assert_eq!(part2(input, &Options::default()).unwrap(), 18);
	}

	#[test]
	fn odd_len_is_an_error() {
		let err = part1("abc\n", &Options::default()).unwrap_err();
		assert!(matches!(err, parsing::RucksacksError::Rucksack {
			line: 1, source: parsing::RucksackError::OddLen(3) }));
	}

	#[test]
	fn skips_lines_with_non_letters() {
		let input = "ab-d\nvJrwpWtwJgWrhcsFMMfFFhFp\nabc1\n";
		assert_eq!(part1(input, &Options::default()).unwrap(), 16);
	}

	#[test]
	fn compartments_outlive_the_rucksack() {
		let line = String::from("aBcaBd");
		let [c0, c1] = Rucksack::try_from(line.as_str()).unwrap().compartments();
		assert_eq!((c0, c1), ("aBc", "aBd"));
	}
}
