//! Decoders for archive search result documents.
//!
//! The archive returns scene metadata as JSON with loosely typed values
//! (orbits as strings, directions in upper case). This module turns such a
//! document into typed [`RawScene`](crate::core::domain::RawScene) values at
//! the boundary, so nothing downstream does dynamic key lookups.
//!
//! # Example
//!
//! ```no_run
//! use scene_inventory::parsing::json_parser::parse_archive_json;
//! use std::path::Path;
//!
//! let scenes = parse_archive_json(Path::new("query_S1A.json"), false)
//!     .expect("Failed to parse archive result");
//! ```

pub mod json_parser;


pub use json_parser::{parse_archive_json, parse_archive_json_str};
