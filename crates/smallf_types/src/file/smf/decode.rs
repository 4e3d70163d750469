//! Archive parsing for SMALLF containers.
//!
//! Both layouts are parsed with strictly sequential reads: end offsets are
//! cumulative and the data regions are laid out back to back, so the cursor
//! only ever moves forward and no seeking is required.

use std::io::Read;
use std::path::Path;

use crate::file::SmfError;

use super::constants;
use super::{Entry, File, Variant};

/// Forward-only reader over a byte slice
struct SliceReader<'a> {
	data: &'a [u8],
	pos: usize,
}

impl<'a> SliceReader<'a> {
	fn new(data: &'a [u8]) -> Self {
		Self {
			data,
			pos: 0,
		}
	}

	fn pos(&self) -> usize {
		self.pos
	}

	fn remaining(&self) -> usize {
		self.data.len() - self.pos
	}

	fn take(&mut self, count: usize) -> Result<&'a [u8], SmfError> {
		if count > self.remaining() {
			return Err(SmfError::Truncated {
				expected: count,
				actual: self.remaining(),
			});
		}
		let slice = &self.data[self.pos..self.pos + count];
		self.pos += count;
		Ok(slice)
	}

	fn read_u8(&mut self) -> Result<u8, SmfError> {
		Ok(self.take(1)?[0])
	}

	fn read_u32_le(&mut self) -> Result<u32, SmfError> {
		let bytes = self.take(4)?;
		Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
	}
}

impl File {
	/// Parses an archive laid out as `variant` from a byte slice
	pub fn from_bytes(data: &[u8], variant: Variant) -> Result<Self, SmfError> {
		let mut reader = SliceReader::new(data);

		let mut file = match variant {
			Variant::V1 => Self::read_toc_v1(&mut reader)?,
			Variant::V2 => Self::read_toc_v2(&mut reader)?,
		};
		file.read_data(&mut reader)?;

		Ok(file)
	}

	/// Parses an archive, trying [`Variant::V1`] first and falling back to
	/// [`Variant::V2`] when the V1 framing does not hold up
	pub fn from_bytes_auto(data: &[u8]) -> Result<Self, SmfError> {
		Self::from_bytes(data, Variant::V1).or_else(|_| Self::from_bytes(data, Variant::V2))
	}

	/// Reads an archive from any reader
	///
	/// The whole stream is buffered up front; parsing itself never seeks.
	pub fn from_reader<R: Read>(reader: &mut R, variant: Variant) -> Result<Self, SmfError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::from_bytes(&data, variant)
	}

	/// Opens an archive from the given path, auto-detecting the layout
	pub fn open(path: impl AsRef<Path>) -> Result<Self, SmfError> {
		let data = std::fs::read(path)?;
		Self::from_bytes_auto(&data)
	}

	fn read_toc_v1(reader: &mut SliceReader<'_>) -> Result<Self, SmfError> {
		// The stored count carries a +1 bias; 0 behaves like 1 (no entries)
		let stored_count = reader.read_u8()?;
		let num_entries = usize::from(stored_count).saturating_sub(1);

		let reserved = reader.take(constants::RESERVED_LEN)?;
		let reserved = [reserved[0], reserved[1], reserved[2]];

		let mut entries = Vec::with_capacity(num_entries);
		for _ in 0..num_entries {
			let stored_len = reader.read_u8()?;
			let path_len = Variant::V1.path_len_from_stored(stored_len);
			let raw_path = reader.take(path_len)?.to_vec();
			let end_offset = reader.read_u32_le()?;
			entries.push(Entry::from_parts(raw_path, end_offset));
		}

		Ok(Self {
			variant: Variant::V1,
			reserved,
			entries,
		})
	}

	fn read_toc_v2(reader: &mut SliceReader<'_>) -> Result<Self, SmfError> {
		let header_size = reader.read_u32_le()?;

		// The stored TOC size counts 2 bytes past the last record; the data
		// region starts right where the records stop
		let toc_end = (header_size as usize).saturating_sub(constants::V2_TRAILER_LEN);
		if toc_end < reader.pos() {
			return Err(SmfError::MalformedOffsets {
				index: 0,
				offset: header_size,
				cursor: reader.pos() as u32,
			});
		}

		let mut entries = Vec::new();
		while reader.pos() < toc_end {
			let stored_len = reader.read_u8()?;
			let path_len = Variant::V2.path_len_from_stored(stored_len);
			let raw_path = reader.take(path_len)?.to_vec();
			// NUL terminator, not counted in the stored length
			reader.read_u8()?;
			let end_offset = reader.read_u32_le()?;
			entries.push(Entry::from_parts(raw_path, end_offset));
		}

		// A record crossing the stored TOC boundary means the header lied
		if reader.pos() != toc_end {
			return Err(SmfError::MalformedOffsets {
				index: entries.len().saturating_sub(1),
				offset: header_size,
				cursor: reader.pos() as u32,
			});
		}

		Ok(Self {
			variant: Variant::V2,
			reserved: constants::DEFAULT_RESERVED,
			entries,
		})
	}

	/// Fills every entry's data in TOC order
	///
	/// The cursor already sits at each entry's start position because the
	/// offsets are cumulative; anything after the last entry is block
	/// padding and is left alone.
	fn read_data(&mut self, reader: &mut SliceReader<'_>) -> Result<(), SmfError> {
		for (index, entry) in self.entries.iter_mut().enumerate() {
			let end = entry.end_offset() as usize;
			if end < reader.pos() {
				return Err(SmfError::MalformedOffsets {
					index,
					offset: entry.end_offset(),
					cursor: reader.pos() as u32,
				});
			}
			let data = reader.take(end - reader.pos())?.to_vec();
			entry.set_data(data);
		}
		Ok(())
	}
}
