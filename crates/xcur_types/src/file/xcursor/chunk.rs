//! Chunk header validation against the TOC.

use std::io::{Read, Seek};

use crate::file::error::{Result, XcurError};

use super::reader::FieldReader;
use super::toc::TocEntry;
use super::types::ChunkKind;

/// Common header at the start of every chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ChunkHeader {
	/// Declared header size, including type-specific fields
	pub header_size: u32,
	/// Chunk kind, must match the TOC
	pub kind: ChunkKind,
	/// Chunk subtype, must match the TOC
	pub subtype: u32,
	/// Version of this chunk type
	pub version: u32,
}

impl ChunkHeader {
	/// Seeks to the chunk referenced by `entry` and reads its header,
	/// leaving the reader at the start of the chunk body.
	///
	/// Only kind and subtype are checked; the declared header size and chunk
	/// version are accepted as-is.
	pub fn read_for<R: Read + Seek>(
		reader: &mut FieldReader<'_, R>,
		index: usize,
		entry: &TocEntry,
	) -> Result<Self> {
		reader.seek_to(u64::from(entry.position))?;

		let [header_size, kind, subtype, version] = reader.read_u32s::<4>("chunk header")?;
		let header = Self {
			header_size,
			kind: ChunkKind::from(kind),
			subtype,
			version,
		};

		if header.kind != entry.kind || header.subtype != entry.subtype {
			return Err(XcurError::CorruptTocReference {
				index,
				expected_kind: entry.kind.into(),
				expected_subtype: entry.subtype,
				actual_kind: kind,
				actual_subtype: subtype,
			});
		}

		Ok(header)
	}
}
