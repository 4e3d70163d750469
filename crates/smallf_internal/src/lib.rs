//! This module is separated into its own crate to keep the `smallf-rs` facade thin, and should not be used directly.

/// `use smallf_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export smallf_types for convenience
pub use smallf_types;

// Re-export commonly used types at crate root
pub use smallf_types::file::{Entry, SMF_BLOCK_SIZE, SmfError, SmfFile, Variant};
