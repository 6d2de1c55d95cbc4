//! File type support for `xcur-rs` project.

mod error;

pub mod xcursor;

// Re-export unified error type
pub use error::{Result, XcurError};

// Re-export main file types
pub use xcursor::{
	ChunkKind, Comment, CommentEncoding, CommentKind, DecodeConfig, File as XcursorFile, Frame,
	UnknownChunkPolicy,
};
