//! This crate provides core data types and file format support for the `smallf-rs` project.
//!
//! # File Formats
//!
//! - **SMALLF**: Flat archive containers (`SMALLF.DAT`) that bundle many small
//!   files into one blob, 2048-byte aligned, in two header layouts
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use smallf_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Open an archive, auto-detecting the layout
//! let archive = SmfFile::open("SMALLF.DAT")?;
//!
//! for entry in archive.entries() {
//!     println!("{}: {} bytes", entry.name(), entry.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```
//! use smallf_types::file::smf::{File, Variant};
//!
//! let archive = File::new(Variant::V1);
//! assert!(archive.is_empty());
//! ```

pub mod file;

/// `use smallf_types::prelude::*;` to import commonly used items.
pub mod prelude;
