// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::util::Options;


/// Row-major tree heights; every row is `width` long.
#[cfg_attr(test, derive(Debug))]
struct Grid {
	tree_heights: Vec<u8>,
	width: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Coord { x: usize, y: usize }

#[derive(Clone, Copy, Debug)]
enum Direction { North, East, South, West }

impl Direction {
	const ALL: [Direction; 4] = [Direction::North, Direction::East, Direction::South, Direction::West];
}

impl Grid {
	fn height(&self) -> usize {
		if self.width == 0 { 0 } else { self.tree_heights.len() / self.width }
	}

	fn tree_height_xy(&self, x: usize, y: usize) -> u8 {
		self.tree_heights[y * self.width + x]
	}

	fn tree_height(&self, at: Coord) -> u8 {
		self.tree_height_xy(at.x, at.y)
	}

	fn coords(&self) -> impl Iterator<Item = Coord> {
		use itertools::iproduct;
		iproduct!(0..self.height(), 0..self.width).map(|(y, x)| Coord { x, y })
	}

	fn is_boundary(&self, Coord { x, y }: Coord) -> bool {
		x == 0 || y == 0 || x == self.width - 1 || y == self.height() - 1
	}

	/// Returns an [`Iterator`] over the heights of the trees between `from` and the edge in
	/// direction `dir`, nearest first. The tree at `from` itself is not included.
	fn line_of_sight(&self, from: Coord, dir: Direction) -> impl Iterator<Item = u8> + '_ {
		use Direction::*;
		let Coord { x, y } = from;
		let len = match dir {
			North => y,
			East => self.width - 1 - x,
			South => self.height() - 1 - y,
			West => x,
		};
		(1..=len).map(move |d| match dir {
			North => self.tree_height_xy(x, y - d),
			East => self.tree_height_xy(x + d, y),
			South => self.tree_height_xy(x, y + d),
			West => self.tree_height_xy(x - d, y),
		})
	}

	fn is_visible(&self, at: Coord) -> bool {
		if self.is_boundary(at) { return true }
		let height = self.tree_height(at);
		Direction::ALL.into_iter()
			.any(|dir| self.line_of_sight(at, dir).all(|h| h < height))
	}

	/// Trees seen from `from` looking towards `dir`, up to and including the first one that is
	/// at least as tall.
	fn viewing_distance(&self, from: Coord, dir: Direction) -> usize {
		use itertools::Itertools as _;
		let height = self.tree_height(from);
		let mut line = self.line_of_sight(from, dir).peekable();
		let count = line
			.peeking_take_while(|&h| h < height)
			.count();
		count + if line.next().is_some() { 1 } else { 0 }
	}

	fn scenic_score(&self, at: Coord) -> u64 {
		if self.is_boundary(at) { return 0 }
		Direction::ALL.into_iter()
			.map(|dir| self.viewing_distance(at, dir) as u64)
			.try_fold(1, |score, distance| (distance > 0).then_some(score * distance))
			.unwrap_or(0)
	}

	fn row_coords(&self, y: usize) -> impl Iterator<Item = Coord> {
		(0..self.width).map(move |x| Coord { x, y })
	}
}


fn input_grid_from_str(s: &str) -> Result<Grid, parsing::GridError> {
	let grid: Grid = s.parse()?;
	tracing::debug!(width = grid.width, height = grid.height(), "Parsed grid");
	Ok(grid)
}


fn part1_impl(input_grid: &Grid, options: &Options) -> u64 {
	if options.parallel {
		use rayon::prelude::*;
		return (0..input_grid.height())
			.into_par_iter()
			.map(|y| input_grid.row_coords(y)
				.filter(|&at| input_grid.is_visible(at))
				.count() as u64)
			.sum()
	}

	input_grid.coords()
		.filter(|&at| {
			let visible = input_grid.is_visible(at);
			tracing::trace!(x = at.x, y = at.y, visible);
			visible
		})
		.count() as u64
}

pub(crate) fn part1(input: &str, options: &Options) -> Result<u64, parsing::GridError> {
	Ok(part1_impl(&input_grid_from_str(input)?, options))
}


fn part2_impl(input_grid: &Grid, options: &Options) -> u64 {
	if options.parallel {
		use rayon::prelude::*;
		return (0..input_grid.height())
			.into_par_iter()
			.filter_map(|y| input_grid.row_coords(y)
				.map(|at| input_grid.scenic_score(at))
				.max())
			.max()
			.unwrap_or(0)
	}

	input_grid.coords()
		.map(|at| {
			let score = input_grid.scenic_score(at);
			tracing::trace!(x = at.x, y = at.y, score);
			score
		})
		.max()
		.unwrap_or(0)
}

pub(crate) fn part2(input: &str, options: &Options) -> Result<u64, parsing::GridError> {
	Ok(part2_impl(&input_grid_from_str(input)?, options))
}


mod parsing {
	use std::str::FromStr;
	use super::Grid;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum GridError {
		#[error("line {line}: expected a row of {len} trees, found {found}")]
		LineLen { line: usize, len: usize, found: usize },
	}

	/// Lines that aren’t made up of digits only (blank ones included) are skipped.
	impl FromStr for Grid {
		type Err = GridError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut tree_heights = vec![];
			let mut width = None;
			let mut skipped = 0;

			for (l, line) in s.lines().enumerate() {
				if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
					skipped += 1;
					continue
				}

				match width {
					None => width = Some(line.len()),
					Some(len) if len != line.len() =>
						return Err(GridError::LineLen { line: l + 1, len, found: line.len() }),
					Some(_) => (),
				}

				tree_heights.extend(line.bytes().map(|b| b - b'0'));
			}

			if skipped > 0 { tracing::debug!(skipped, "Skipped non-grid lines") }
			Ok(Grid { tree_heights, width: width.unwrap_or(0) })
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		30373
		25512
		65332
		33549
		35390
	" };
	let sequential = Options::default();
	let parallel = Options { parallel: true };
	assert_eq!(part1(INPUT, &sequential).unwrap(), 21);
	assert_eq!(part1(INPUT, &parallel).unwrap(), 21);
	assert_eq!(part2(INPUT, &sequential).unwrap(), 8);
	assert_eq!(part2(INPUT, &parallel).unwrap(), 8);
}
