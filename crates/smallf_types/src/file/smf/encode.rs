//! Archive serialization for SMALLF containers.
//!
//! End offsets are computed before any data is emitted, so writing is a
//! single forward pass: header, TOC records, concatenated data, then zero
//! padding up to the next block boundary.

use std::path::Path;

use crate::file::{SMF_BLOCK_SIZE, SmfError};

use super::constants;
use super::{Entry, File, Variant};

impl File {
	/// Builds an archive from (relative path, contents) pairs
	///
	/// Entries are ordered the way the original tooling wrote them: deeper
	/// paths first, lexicographic on the full path within one depth. The
	/// ordering has no effect on extraction, it only groups nested files
	/// ahead of top-level ones in the TOC.
	pub fn from_pairs<P, I>(variant: Variant, pairs: I) -> Result<Self, SmfError>
	where
		P: AsRef<[u8]>,
		I: IntoIterator<Item = (P, Vec<u8>)>,
	{
		let mut entries = pairs
			.into_iter()
			.map(|(path, data)| Entry::new(path, data))
			.collect::<Result<Vec<_>, _>>()?;
		sort_entries(&mut entries);

		let mut file = Self {
			variant,
			reserved: constants::DEFAULT_RESERVED,
			entries,
		};

		// Assign end offsets now so the entries can be inspected before
		// serialization; `to_bytes` recomputes them from scratch either way
		let (_, offsets) = file.layout()?;
		for (entry, offset) in file.entries.iter_mut().zip(offsets) {
			entry.set_end_offset(offset);
		}

		Ok(file)
	}

	/// Serializes the archive, zero-padded to the next 2048-byte boundary
	pub fn to_bytes(&self) -> Result<Vec<u8>, SmfError> {
		let (toc_size, offsets) = self.layout()?;

		let data_size: usize = self.entries.iter().map(Entry::len).sum();
		let mut buffer = Vec::with_capacity(align_to_block(toc_size + data_size));

		match self.variant {
			Variant::V1 => {
				// Count byte carries a +1 bias
				buffer.push((self.entries.len() + 1) as u8);
				buffer.extend_from_slice(&self.reserved);
			}
			Variant::V2 => {
				let header_size = u32::try_from(toc_size)
					.map_err(|_| SmfError::ArchiveTooLarge {
						size: toc_size,
					})?;
				buffer.extend_from_slice(&header_size.to_le_bytes());
			}
		}

		for (entry, end_offset) in self.entries.iter().zip(&offsets) {
			let stored_len = self.variant.stored_path_len(entry.path_bytes().len())?;
			buffer.push(stored_len);
			buffer.extend_from_slice(entry.path_bytes());
			if self.variant == Variant::V2 {
				buffer.push(0);
			}
			buffer.extend_from_slice(&end_offset.to_le_bytes());
		}

		for entry in &self.entries {
			buffer.extend_from_slice(entry.data());
		}

		buffer.resize(align_to_block(buffer.len()), 0);

		Ok(buffer)
	}

	/// Serializes and writes the archive to the given path
	pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), SmfError> {
		let bytes = self.to_bytes()?;
		std::fs::write(path, bytes)?;
		Ok(())
	}

	/// Total TOC size in bytes, including the layout's fixed header
	pub fn toc_size(&self) -> usize {
		let records: usize = self
			.entries
			.iter()
			.map(|e| self.variant.record_size(e.path_bytes().len()))
			.sum();
		match self.variant {
			Variant::V1 => 1 + constants::RESERVED_LEN + records,
			Variant::V2 => 4 + records + constants::V2_TRAILER_LEN,
		}
	}

	/// Computes the TOC size and every entry's end offset
	///
	/// The data cursor starts at the end of the TOC region; the V2 layout's
	/// stored TOC size counts 2 bytes past the last record, so its data
	/// region starts that much earlier.
	fn layout(&self) -> Result<(usize, Vec<u32>), SmfError> {
		if self.variant == Variant::V1 && self.entries.len() > constants::MAX_ENTRIES {
			return Err(SmfError::TooManyEntries {
				count: self.entries.len(),
				max: constants::MAX_ENTRIES,
			});
		}

		// Surface EmptyPath / PathTooLong before any offsets are computed
		for entry in &self.entries {
			self.variant.stored_path_len(entry.path_bytes().len())?;
		}

		let toc_size = self.toc_size();
		let mut cursor = match self.variant {
			Variant::V1 => toc_size,
			Variant::V2 => toc_size - constants::V2_TRAILER_LEN,
		};

		let mut offsets = Vec::with_capacity(self.entries.len());
		for entry in &self.entries {
			cursor += entry.len();
			let offset = u32::try_from(cursor).map_err(|_| SmfError::ArchiveTooLarge {
				size: cursor,
			})?;
			offsets.push(offset);
		}

		Ok((toc_size, offsets))
	}
}

/// Rounds `size` up to the next 2048-byte boundary
fn align_to_block(size: usize) -> usize {
	(size + SMF_BLOCK_SIZE - 1) & !(SMF_BLOCK_SIZE - 1)
}

/// Deeper paths first, lexicographic on the full path within one depth
pub(crate) fn sort_entries(entries: &mut [Entry]) {
	entries.sort_by(|a, b| {
		b.depth().cmp(&a.depth()).then_with(|| a.path_bytes().cmp(b.path_bytes()))
	});
}
