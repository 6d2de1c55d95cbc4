//! Comment chunks: copyright, license and free-form text.

use std::fmt::Display;
use std::io::{Read, Seek};

use serde::{Deserialize, Serialize};

use crate::file::error::{Result, XcurError};

use super::config::CommentEncoding;
use super::reader::FieldReader;

/// A decoded text comment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Comment {
	text: String,
}

impl Comment {
	/// Comment text
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Consumes the comment and returns its text
	pub fn into_text(self) -> String {
		self.text
	}

	/// Reads a comment body; the reader must sit right after a validated
	/// comment chunk header.
	pub(super) fn read<R: Read + Seek>(
		reader: &mut FieldReader<'_, R>,
		index: usize,
		encoding: CommentEncoding,
	) -> Result<Self> {
		let length = reader.read_u32("comment length")?;
		let bytes = reader.read_bytes(u64::from(length), "comment text")?;

		let text = match encoding {
			CommentEncoding::Strict => String::from_utf8(bytes).map_err(|e| XcurError::InvalidEncoding {
				index,
				source: e.utf8_error(),
			})?,
			CommentEncoding::Lossy => String::from_utf8_lossy(&bytes).into_owned(),
		};

		Ok(Self {
			text,
		})
	}
}

impl Display for Comment {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.text)
	}
}

impl AsRef<str> for Comment {
	fn as_ref(&self) -> &str {
		&self.text
	}
}
