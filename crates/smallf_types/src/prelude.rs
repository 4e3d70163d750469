//! Prelude module for `smallf_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```
//! use smallf_types::prelude::*;
//!
//! // Now you can use all common types directly
//! let archive = SmfFile::new(Variant::V1);
//! assert!(archive.is_empty());
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	// Constants
	SMF_BLOCK_SIZE,

	// SMALLF types
	Entry,
	SmfError,
	SmfFile,
	Variant,
};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
