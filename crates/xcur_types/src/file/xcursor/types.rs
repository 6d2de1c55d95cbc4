//! Chunk classification types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::constants::{COMMENT_TYPE, IMAGE_TYPE};

/// Logical type of a chunk, as recorded in the TOC and chunk headers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChunkKind {
	/// Text comment chunk (`0xfffe0001`)
	Comment,

	/// Image (animation frame) chunk (`0xfffd0002`)
	Image,

	/// Any other kind; legal but not interpreted
	Unknown(u32),
}

impl From<u32> for ChunkKind {
	fn from(value: u32) -> Self {
		match value {
			COMMENT_TYPE => ChunkKind::Comment,
			IMAGE_TYPE => ChunkKind::Image,
			other => ChunkKind::Unknown(other),
		}
	}
}

impl From<ChunkKind> for u32 {
	fn from(kind: ChunkKind) -> Self {
		match kind {
			ChunkKind::Comment => COMMENT_TYPE,
			ChunkKind::Image => IMAGE_TYPE,
			ChunkKind::Unknown(other) => other,
		}
	}
}

impl Display for ChunkKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ChunkKind::Comment => write!(f, "Comment"),
			ChunkKind::Image => write!(f, "Image"),
			ChunkKind::Unknown(value) => write!(f, "Unknown({value:#010x})"),
		}
	}
}

/// Classification carried in the subtype of a comment chunk
///
/// Informational only: decoded comments do not keep it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum CommentKind {
	/// Copyright notice
	Copyright = 1,

	/// License text
	License = 2,

	/// Anything else
	Other = 3,
}

impl TryFrom<u32> for CommentKind {
	type Error = u32;

	fn try_from(value: u32) -> Result<Self, Self::Error> {
		match value {
			1 => Ok(CommentKind::Copyright),
			2 => Ok(CommentKind::License),
			3 => Ok(CommentKind::Other),
			other => Err(other),
		}
	}
}

impl Display for CommentKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			CommentKind::Copyright => write!(f, "Copyright"),
			CommentKind::License => write!(f, "License"),
			CommentKind::Other => write!(f, "Other"),
		}
	}
}
