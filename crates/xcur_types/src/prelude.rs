//! Prelude module for `xcur_types`.
//!
//! This module provides a convenient way to import commonly used types and constants.
//!
//! # Examples
//!
//! ```no_run
//! use xcur_types::prelude::*;
//!
//! let config = DecodeConfig::strict();
//! ```

#[doc(inline)]
pub use crate::file::{
	// Chunk types
	ChunkKind,
	Comment,
	CommentEncoding,
	CommentKind,

	// Decoding
	DecodeConfig,
	Frame,
	UnknownChunkPolicy,
	XcurError,
	XcursorFile,
};

#[doc(inline)]
pub use crate::file::xcursor::{COMMENT_TYPE, IMAGE_TYPE, MAGIC, MAX_IMAGE_DIMENSION};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
