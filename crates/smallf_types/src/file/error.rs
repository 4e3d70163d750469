//! Error types for file format parsing and manipulation.

use thiserror::Error;

/// Errors that can occur when parsing or building SMALLF archives
#[derive(Debug, Error)]
pub enum SmfError {
	/// Stream ended before an expected read completed
	#[error("Truncated archive: needed {expected} more bytes, only {actual} left")]
	Truncated {
		/// Number of bytes the current read required
		expected: usize,
		/// Number of bytes left in the stream
		actual: usize,
	},

	/// Non-monotonic or out-of-range end offset in the table of contents
	#[error("Malformed end offset for entry {index}: offset {offset} is behind cursor {cursor}")]
	MalformedOffsets {
		/// Index of the offending entry in TOC order
		index: usize,
		/// Stored end offset
		offset: u32,
		/// Position the data cursor had reached
		cursor: u32,
	},

	/// More entries than the single-byte count field can represent
	#[error("Too many entries: {count} exceeds the format limit of {max}")]
	TooManyEntries {
		/// Number of entries in the archive
		count: usize,
		/// Maximum number of entries the format can store
		max: usize,
	},

	/// Path longer than the single-byte length field can represent
	#[error("Path too long: {length} bytes exceeds the format limit of {max}")]
	PathTooLong {
		/// Length of the offending path in bytes
		length: usize,
		/// Maximum path length the format can store
		max: usize,
	},

	/// Entry paths must be non-empty
	#[error("Entry path is empty")]
	EmptyPath,

	/// Archive body grew past what a 32-bit end offset can address
	#[error("Archive too large: {size} bytes cannot be addressed by 32-bit offsets")]
	ArchiveTooLarge {
		/// Total size that overflowed the offset field
		size: usize,
	},

	/// Operation found no entries to work with
	#[error("No entries found")]
	NoEntries,

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}
