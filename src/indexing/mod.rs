//! SVG source discovery
//!
//! Builds the run-scoped [`SourceIndex`]: a recursive walk of the source root
//! that records, for every `.svg` file, the slug of its file stem mapped to
//! its containing directory. Sibling subtrees are scanned concurrently; each
//! scan fills a private partial index that merges at the join point, so no
//! map is ever written from two tasks at once.

mod walk;

pub use walk::{build_index, SourceIndex, SVG_EXTENSION};
