//! Error types for cursor file parsing.

use std::str::Utf8Error;

use thiserror::Error;

/// Convenience alias used throughout the decoder
pub type Result<T, E = XcurError> = std::result::Result<T, E>;

/// Errors that can occur when decoding an Xcursor file
///
/// Every variant is fatal to the decode call that produced it; no partially
/// decoded file is ever returned alongside an error.
#[derive(Debug, Error)]
pub enum XcurError {
	/// The byte source refused to seek
	#[error("Source is not seekable: {source}")]
	SourceNotSeekable {
		/// Error returned by the failed seek
		source: std::io::Error,
	},

	/// The first four bytes are not `Xcur`
	#[error("Invalid magic word: {actual:02X?}")]
	InvalidMagicWord {
		/// Bytes actually read (fewer than four if the source was shorter)
		actual: Vec<u8>,
	},

	/// Fewer bytes remain than a field or region requires
	#[error("Truncated input: {what} at offset {offset:#x} needs {needed} bytes, {available} available")]
	TruncatedInput {
		/// Field or region being read
		what: &'static str,
		/// Absolute offset of the read
		offset: u64,
		/// Number of bytes required
		needed: u64,
		/// Number of bytes remaining in the source
		available: u64,
	},

	/// A chunk header disagrees with the TOC entry that points at it
	#[error(
		"Corrupt TOC reference at entry {index}: expected kind {expected_kind:#010x} subtype {expected_subtype}, found kind {actual_kind:#010x} subtype {actual_subtype}"
	)]
	CorruptTocReference {
		/// TOC entry index
		index: usize,
		/// Kind recorded in the TOC
		expected_kind: u32,
		/// Subtype recorded in the TOC
		expected_subtype: u32,
		/// Kind found in the chunk header
		actual_kind: u32,
		/// Subtype found in the chunk header
		actual_subtype: u32,
	},

	/// An image has out-of-range dimensions or hotspot, or a pixel buffer of
	/// the wrong length
	#[error("Invalid image dimensions at entry {index}: {field} = {value}, limit {limit}")]
	InvalidImageDimensions {
		/// TOC entry index (0 for frames not read from a file)
		index: usize,
		/// Offending field name
		field: &'static str,
		/// Offending value
		value: u32,
		/// Largest value allowed for the field (exact required length for `pixels`)
		limit: u32,
	},

	/// A comment body is not valid UTF-8
	#[error("Invalid UTF-8 in comment at entry {index}: {source}")]
	InvalidEncoding {
		/// TOC entry index
		index: usize,
		/// Underlying decode error
		source: Utf8Error,
	},

	/// A TOC entry has a kind this decoder does not interpret
	///
	/// Only raised when unknown chunks are configured to be rejected.
	#[error("Unknown chunk kind {kind:#010x} at entry {index}")]
	UnknownChunkKind {
		/// TOC entry index
		index: usize,
		/// Raw kind value
		kind: u32,
	},

	/// IO error
	#[error(transparent)]
	Io(#[from] std::io::Error),
}
