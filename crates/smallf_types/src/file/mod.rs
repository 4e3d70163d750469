//! File type support for the `smallf-rs` project.

mod error;

pub mod smf;

/// Alignment block size for SMALLF archives (2048 bytes / 0x0800)
pub const SMF_BLOCK_SIZE: usize = 0x0800;

// Re-export error type
pub use error::SmfError;

// Re-export main file types
pub use smf::{Entry, File as SmfFile, Variant};
