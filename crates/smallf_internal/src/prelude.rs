//! Prelude module for `smallf_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use smallf_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let archive = SmfFile::new(Variant::V1);
//! assert_eq!(archive.num_entries(), 0);
//! ```

// Re-export everything from smallf_types::prelude
#[doc(inline)]
pub use smallf_types::prelude::*;

// Re-export the entire smallf_types module for advanced usage
#[doc(inline)]
pub use smallf_types;
