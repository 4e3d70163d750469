#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `smallf-rs` is tooling for the SMALLF flat archive container (`SMALLF.DAT`)
//! used by an old game to bundle many small files into one 2048-byte-aligned
//! blob.
//!
pub use smallf_internal::*;
