//! Benchmark helper utilities for smallf-rs
//!
//! This module provides utilities for generating synthetic SMALLF archives
//! so the codec benchmarks don't depend on real game data.

use smallf_types::file::smf::{File, Variant};

/// Builds the (path, contents) pairs for a synthetic archive
///
/// Paths are nested one level deep and contents follow a cheap byte pattern
/// that varies per entry.
pub fn generate_test_pairs(num_entries: usize, entry_size: usize) -> Vec<(String, Vec<u8>)> {
	(0..num_entries)
		.map(|i| {
			let path = format!("data/file_{i:03}.bin");
			let data = (0..entry_size).map(|b| ((b + i) % 256) as u8).collect();
			(path, data)
		})
		.collect()
}

/// Builds a serialized synthetic archive with `num_entries` files of
/// `entry_size` bytes each
pub fn generate_test_archive(variant: Variant, num_entries: usize, entry_size: usize) -> Vec<u8> {
	let pairs = generate_test_pairs(num_entries, entry_size);
	File::from_pairs(variant, pairs)
		.expect("valid synthetic archive")
		.to_bytes()
		.expect("serializable archive")
}

/// Common benchmark shapes: (entry count, bytes per entry)
pub mod sizes {
	/// A handful of small files
	pub const SMALL: (usize, usize) = (16, 512);
	/// Mid-size archive, typical of the real data files
	pub const MEDIUM: (usize, usize) = (64, 4 * 1024);
	/// The V1 entry-count ceiling with chunky payloads
	pub const LARGE: (usize, usize) = (254, 16 * 1024);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generate_test_archive() {
		let bytes = generate_test_archive(Variant::V1, 16, 512);

		// Block aligned and decodable back to the same entry count
		assert_eq!(bytes.len() % 2048, 0);
		let archive = File::from_bytes(&bytes, Variant::V1).unwrap();
		assert_eq!(archive.num_entries(), 16);
	}

	#[test]
	fn test_sizes_constants() {
		assert_eq!(sizes::SMALL, (16, 512));
		assert_eq!(sizes::MEDIUM, (64, 4 * 1024));
		assert_eq!(sizes::LARGE, (254, 16 * 1024));
	}
}
