//! Icon name resolution against the source index
//!
//! A pure lookup: each configured icon's file identifier is slugified and
//! looked up in the index. Misses are collected for reporting, never fatal.

use std::path::PathBuf;

use crate::config::IconSpec;
use crate::indexing::{SourceIndex, SVG_EXTENSION};
use crate::slug::normalize;

/// A configured icon paired with its discovered source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Logical component name from the configuration table
    pub name: String,
    /// Normalized file key, also the generated module's base file name
    pub slug: String,
    /// Absolute path of the source file
    pub path: PathBuf,
    /// Per-icon flag threaded through to the transformer
    pub preserve_attributes: bool,
}

/// Outcome of resolving a configuration table: matches in table order plus
/// the entries with no matching source file.
#[derive(Debug, Default)]
pub struct Resolution {
    pub matches: Vec<Match>,
    pub misses: Vec<IconSpec>,
}

/// Resolve each spec's slug against the index.
///
/// Deterministic given identical inputs; the index is never mutated. There
/// is no fallback search: a slug absent from the index is a miss.
pub fn resolve(specs: &[IconSpec], index: &SourceIndex) -> Resolution {
    let mut resolution = Resolution::default();

    for spec in specs {
        let slug = normalize(&spec.file);
        match index.get(&slug) {
            Some(dir) => {
                let path = dir.join(format!("{slug}.{SVG_EXTENSION}"));
                resolution.matches.push(Match {
                    name: spec.name.clone(),
                    slug,
                    path,
                    preserve_attributes: spec.preserve_attributes,
                });
            }
            None => resolution.misses.push(spec.clone()),
        }
    }

    resolution
}
