// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persisted graph document naming and framing.
//!
//! The core neither reads nor writes these files; it observes graphs only as in-memory
//! documents handed to it through [`crate::GraphCatalog`]. These are free functions a storage
//! collaborator calls, exercised only by this crate's own tests.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{self, Read, Write};

const FILE_SUFFIX: &str = ".gph";

/// Returns the basename under which `graph_name` is persisted: the URL-safe base64 of the
/// lowercased name, suffixed `.gph`.
#[must_use]
pub fn file_name_for(graph_name: &str) -> String {
    let encoded = URL_SAFE.encode(graph_name.to_lowercase());
    format!("{encoded}{FILE_SUFFIX}")
}

/// Gzip-compresses a serialized graph document body.
///
/// # Errors
///
/// Returns an [`io::Error`] if the underlying encoder fails.
pub fn compress(body: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(body)?;
    encoder.finish()
}

/// Reverses [`compress`].
///
/// # Errors
///
/// Returns an [`io::Error`] if `body` is not valid gzip.
pub fn decompress(body: &[u8]) -> io::Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(body);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    Ok(out)
}
