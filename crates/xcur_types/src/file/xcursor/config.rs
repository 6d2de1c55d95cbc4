//! Decode configuration for Xcursor files.
//!
//! The default configuration follows the file format to the letter: comments
//! must be valid UTF-8 and chunks of unrecognised kinds are skipped after
//! their header is checked against the TOC.

/// How comment bytes are turned into text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CommentEncoding {
	/// Reject invalid UTF-8 with [`XcurError::InvalidEncoding`](crate::file::XcurError::InvalidEncoding)
	#[default]
	Strict,

	/// Replace invalid sequences with U+FFFD
	Lossy,
}

/// What to do with TOC entries of an unrecognised kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnknownChunkPolicy {
	/// Validate the chunk header, then ignore the body
	#[default]
	Skip,

	/// Fail with [`XcurError::UnknownChunkKind`](crate::file::XcurError::UnknownChunkKind)
	Reject,
}

/// Configuration for decoding Xcursor files.
///
/// # Presets
///
/// - `default()`: strict UTF-8, unknown chunks skipped
/// - `strict()`: strict UTF-8, unknown chunks rejected
/// - `lenient()`: lossy UTF-8, unknown chunks skipped
///
/// # Examples
///
/// ```
/// use xcur_types::file::xcursor::{CommentEncoding, DecodeConfig};
///
/// let config = DecodeConfig::lenient();
/// assert_eq!(config.comment_encoding, CommentEncoding::Lossy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DecodeConfig {
	/// Comment text decoding
	pub comment_encoding: CommentEncoding,
	/// Handling of unrecognised chunk kinds
	pub unknown_chunks: UnknownChunkPolicy,
}

impl DecodeConfig {
	/// Create a new configuration from explicit settings.
	pub fn new(comment_encoding: CommentEncoding, unknown_chunks: UnknownChunkPolicy) -> Self {
		Self {
			comment_encoding,
			unknown_chunks,
		}
	}

	/// Create a strict configuration that also rejects unknown chunk kinds.
	pub fn strict() -> Self {
		Self {
			comment_encoding: CommentEncoding::Strict,
			unknown_chunks: UnknownChunkPolicy::Reject,
		}
	}

	/// Create a lenient configuration that accepts malformed comment text.
	pub fn lenient() -> Self {
		Self {
			comment_encoding: CommentEncoding::Lossy,
			unknown_chunks: UnknownChunkPolicy::Skip,
		}
	}
}
