// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::util::Options;


const DISK_SIZE: u64 = 70_000_000;
const UPDATE_SIZE: u64 = 30_000_000;
const SMALL_DIR_SIZE: u64 = 100_000;


#[cfg_attr(test, derive(Debug))]
struct Dir<'s> {
	name: &'s str,
	parent: Option<usize>,
	subdirs: Vec<usize>,
	files: Vec<(&'s str, u64)>,
}

impl<'s> Dir<'s> {
	fn new(name: &'s str, parent: Option<usize>) -> Self {
		Dir { name, parent, subdirs: vec![], files: vec![] }
	}
}

/// Arena of directories, indexed by position; a subdirectory always comes after its parent.
#[cfg_attr(test, derive(Debug))]
struct Filesystem<'s> {
	dirs: Vec<Dir<'s>>,
}

impl<'s> Filesystem<'s> {
	const ROOT: usize = 0;

	fn new() -> Self {
		Filesystem { dirs: vec![Dir::new("/", None)] }
	}

	fn parent(&self, dir: usize) -> Option<usize> {
		self.dirs[dir].parent
	}

	fn subdir(&self, dir: usize, name: &str) -> Option<usize> {
		self.dirs[dir].subdirs.iter()
			.copied()
			.find(|&subdir| self.dirs[subdir].name == name)
	}

	/// Listing the same directory twice doesn’t add it twice.
	fn add_dir(&mut self, parent: usize, name: &'s str) {
		if self.subdir(parent, name).is_some() { return }
		let dir = self.dirs.len();
		self.dirs.push(Dir::new(name, Some(parent)));
		self.dirs[parent].subdirs.push(dir);
	}

	/// Listing the same file twice doesn’t add it twice.
	fn add_file(&mut self, dir: usize, name: &'s str, size: u64) {
		let files = &mut self.dirs[dir].files;
		if files.iter().any(|&(file, _)| file == name) { return }
		files.push((name, size));
	}

	/// Total sizes of all directories (nested ones included), indexed like `dirs`.
	fn total_sizes(&self) -> Vec<u64> {
		let mut sizes = self.dirs.iter()
			.map(|dir| dir.files.iter().map(|&(_, size)| size).sum())
			.collect::<Vec<u64>>();
		for (dir, parent) in self.dirs.iter().enumerate().rev()
			.filter_map(|(d, dir)| Some((d, dir.parent?))) {
			sizes[parent] += sizes[dir];
		}
		sizes
	}
}


#[derive(Debug, thiserror::Error)]
pub(crate) enum FilesystemError {
	#[error(transparent)]
	Terminal(#[from] parsing::TerminalError),
	#[error("no directory frees up the {needed} bytes needed")]
	NoDirectoryLargeEnough { needed: u64 },
}


fn input_filesystem_from_str(s: &str) -> Result<Filesystem<'_>, parsing::TerminalError> {
	let filesystem = parsing::try_filesystem_from_str(s)?;
	tracing::debug!(dirs = filesystem.dirs.len(), "Parsed filesystem");
	Ok(filesystem)
}


fn part1_impl(input_filesystem: &Filesystem<'_>) -> u64 {
	// Files in nested directories get counted more than once; that’s the puzzle
	input_filesystem.total_sizes()[Filesystem::ROOT + 1..].iter()
		.filter(|&&size| size <= SMALL_DIR_SIZE)
		.sum()
}

pub(crate) fn part1(input: &str, _options: &Options) -> Result<u64, FilesystemError> {
	Ok(part1_impl(&input_filesystem_from_str(input)?))
}


fn part2_impl(input_filesystem: &Filesystem<'_>) -> Result<u64, FilesystemError> {
	let sizes = input_filesystem.total_sizes();
	let needed = (sizes[Filesystem::ROOT] + UPDATE_SIZE).saturating_sub(DISK_SIZE);
	tracing::debug!(used = sizes[Filesystem::ROOT], needed);
	sizes[Filesystem::ROOT + 1..].iter()
		.copied()
		.filter(|&size| size >= needed)
		.min()
		.ok_or(FilesystemError::NoDirectoryLargeEnough { needed })
}

pub(crate) fn part2(input: &str, _options: &Options) -> Result<u64, FilesystemError> {
	part2_impl(&input_filesystem_from_str(input)?)
}


mod parsing {
	use std::num::ParseIntError;
	use super::Filesystem;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum TerminalError {
		#[error("line {line}: invalid file size")]
		InvalidFilesize { line: usize, #[source] source: ParseIntError },
	}

	/// Replays a terminal transcript of `cd`s & `ls` output, starting in the root directory.
	/// Changing into an unlisted directory is ignored (with a warning), as are lines that are
	/// neither commands nor listing output.
	pub(super) fn try_filesystem_from_str(s: &str) -> Result<Filesystem<'_>, TerminalError> {
		let mut filesystem = Filesystem::new();
		let mut cwd = Filesystem::ROOT;

		for (l, line) in s.lines().enumerate() {
			let mut tokens = line.split_whitespace();
			match (tokens.next(), tokens.next(), tokens.next()) {
				(Some("$"), Some("cd"), Some("/")) => cwd = Filesystem::ROOT,
				(Some("$"), Some("cd"), Some("..")) =>
					cwd = filesystem.parent(cwd).unwrap_or(Filesystem::ROOT),
				(Some("$"), Some("cd"), Some(name)) => match filesystem.subdir(cwd, name) {
					Some(dir) => cwd = dir,
					None => tracing::warn!(line = l + 1, dir = name, "Not a listed directory; staying put"),
				}
				(Some("$"), Some("ls"), None) => (),
				(Some("dir"), Some(name), None) => filesystem.add_dir(cwd, name),
				(Some(size), Some(name), None) if size.bytes().all(|b| b.is_ascii_digit()) => {
					let size = size.parse()
						.map_err(|e| TerminalError::InvalidFilesize { line: l + 1, source: e })?;
					filesystem.add_file(cwd, name, size)
				}
				_ => tracing::debug!(line = l + 1, "Skipping line"),
			}
		}

		Ok(filesystem)
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		$ cd /
		$ ls
		dir a
		14848514 b.txt
		8504156 c.dat
		dir d
		$ cd a
		$ ls
		dir e
		29116 f
		2557 g
		62596 h.lst
		$ cd e
		$ ls
		584 i
		$ cd ..
		$ cd ..
		$ cd d
		$ ls
		4060174 j
		8033020 d.log
		5626152 d.ext
		7214296 k
	" };
	assert_eq!(part1(INPUT, &Options::default()).unwrap(), 95437);
	assert_eq!(part2(INPUT, &Options::default()).unwrap(), 24933642);
}


#[cfg(test)]
mod tests {
	use super::*;

	fn filesystem(s: &str) -> Filesystem<'_> {
		input_filesystem_from_str(s).unwrap()
	}

	#[test]
	fn total_sizes() {
		let fs = filesystem(indoc::indoc! { "
			$ cd /
			$ ls
			dir a
			10 x
			$ cd a
			$ ls
			dir b
			20 y
			$ cd b
			$ ls
			30 z
		" });
		assert_eq!(fs.total_sizes(), [60, 50, 30]);
	}

	#[test]
	fn repeated_listing_counts_once() {
		let fs = filesystem(indoc::indoc! { "
			$ ls
			dir a
			100 x
			$ ls
			dir a
			100 x
		" });
		assert_eq!(fs.dirs.len(), 2);
		assert_eq!(fs.total_sizes()[Filesystem::ROOT], 100);
	}

	#[test]
	fn cd_into_unlisted_dir_stays_put() {
		let fs = filesystem("$ cd nowhere\n$ ls\n5 x\n");
		assert_eq!(fs.dirs[Filesystem::ROOT].files, [("x", 5)]);
	}

	#[test]
	fn cd_out_of_root_stays_at_root() {
		let fs = filesystem("$ cd ..\n$ cd ..\n$ ls\ndir a\n");
		assert_eq!(fs.dirs[Filesystem::ROOT].subdirs, [1]);
		assert_eq!(fs.dirs[1].parent, Some(Filesystem::ROOT));
	}

	#[test]
	fn skips_junk_lines() {
		assert_eq!(filesystem("\n$ frobnicate\nhello\n$ cd\n").dirs.len(), 1);
	}

	#[test]
	fn root_is_not_a_candidate() {
		let input = "$ ls\n50000000 big\n";
		assert_eq!(part1("$ ls\n5 small\n", &Options::default()).unwrap(), 0);
		assert!(matches!(part2(input, &Options::default()),
			Err(FilesystemError::NoDirectoryLargeEnough { needed: 10_000_000 })));
	}

	#[test]
	fn nothing_needed_picks_smallest_dir() {
		let input = "$ ls\ndir a\ndir b\n$ cd a\n$ ls\n7 x\n$ cd /\n$ cd b\n$ ls\n3 y\n";
		assert_eq!(part2(input, &Options::default()).unwrap(), 3);
	}

	#[test]
	fn oversized_file_is_an_error() {
		let err = part1("$ ls\n99999999999999999999 x\n", &Options::default()).unwrap_err();
		assert!(matches!(err, FilesystemError::Terminal(
			parsing::TerminalError::InvalidFilesize { line: 2, .. })));
	}
}
