//! Entry type shared by both SMALLF container layouts.

use std::fmt::{self, Formatter};

use crate::file::SmfError;

use super::constants;

/// One archived file
///
/// The path is kept as the raw bytes stored on disk so a decode/encode
/// round-trip reproduces the TOC exactly; [`Entry::name`] decodes it for
/// display. The end offset is the absolute position of the first byte
/// *after* this entry's data, not the start; the start is implied by the
/// previous entry (or the end of the TOC for the first entry).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
	raw_path: Vec<u8>,
	end_offset: u32,
	data: Vec<u8>,
}

impl Entry {
	/// Creates an entry from a relative path and raw file bytes
	///
	/// The end offset is assigned when the archive lays out its data region.
	pub fn new(path: impl AsRef<[u8]>, data: Vec<u8>) -> Result<Self, SmfError> {
		let raw_path = path.as_ref().to_vec();
		if raw_path.is_empty() {
			return Err(SmfError::EmptyPath);
		}
		if raw_path.len() > constants::MAX_PATH_LEN {
			return Err(SmfError::PathTooLong {
				length: raw_path.len(),
				max: constants::MAX_PATH_LEN,
			});
		}

		Ok(Self {
			raw_path,
			end_offset: 0,
			data,
		})
	}

	/// Builds a TOC-only entry; the data region is filled in afterwards
	pub(crate) fn from_parts(raw_path: Vec<u8>, end_offset: u32) -> Self {
		Self {
			raw_path,
			end_offset,
			data: Vec::new(),
		}
	}

	pub(crate) fn set_end_offset(&mut self, end_offset: u32) {
		self.end_offset = end_offset;
	}

	pub(crate) fn set_data(&mut self, data: Vec<u8>) {
		self.data = data;
	}

	/// Returns the relative path exactly as stored on disk
	pub fn path_bytes(&self) -> &[u8] {
		&self.raw_path
	}

	/// Returns the path decoded for display
	///
	/// Archive paths are not guaranteed to be UTF-8; the original tooling
	/// assumed a Windows single-byte codepage, so Windows-1252 it is.
	pub fn name(&self) -> String {
		let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&self.raw_path);
		decoded.into_owned()
	}

	/// Returns the absolute offset of the first byte after this entry's data
	pub fn end_offset(&self) -> u32 {
		self.end_offset
	}

	/// Returns the raw file bytes
	pub fn data(&self) -> &[u8] {
		&self.data
	}

	/// Returns the size of the file in bytes
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Returns `true` when the file holds no bytes
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Number of path segments, counting both separator styles so archives
	/// packed on either platform order identically
	pub(crate) fn depth(&self) -> usize {
		self.raw_path.iter().filter(|&&b| b == b'/' || b == b'\\').count() + 1
	}
}

impl fmt::Display for Entry {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Entry {{ path: '{}', end_offset: {}, size: {} }}",
			self.name(),
			self.end_offset,
			self.data.len()
		)
	}
}
