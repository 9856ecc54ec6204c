//! Common test utilities and fixtures for glyphgen integration tests
//!
//! This module provides:
//! - `SvgTree` builder for creating on-disk SVG library trees
//! - A sample SVG document exercising prolog/comment/class stripping
//! - Spec construction helpers

#![allow(dead_code)]

pub mod svg_tree;

use glyphgen::IconSpec;

pub use svg_tree::{SvgTree, SAMPLE_SVG};

/// Build a plain icon spec (no flags).
pub fn spec(name: &str, file: &str) -> IconSpec {
    IconSpec {
        name: name.to_string(),
        file: file.to_string(),
        preserve_attributes: false,
    }
}
