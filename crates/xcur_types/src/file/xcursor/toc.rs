//! File header and table of contents.

use std::io::{Read, Seek};

use log::trace;

use crate::file::error::{Result, XcurError};

use super::constants::{MAGIC, TOC_ENTRY_SIZE};
use super::reader::FieldReader;
use super::types::ChunkKind;

/// File-level header, read once to locate the TOC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct FileHeader {
	/// Declared header size, including reserved trailing space
	pub header_size: u32,
	/// File format version
	pub version: u32,
	/// Number of TOC entries
	pub toc_count: u32,
}

impl FileHeader {
	/// Validates the magic word, reads the header and leaves the reader at
	/// the first TOC entry.
	pub fn read<R: Read + Seek>(reader: &mut FieldReader<'_, R>) -> Result<Self> {
		let mut magic = [0u8; 4];
		let read = reader.read_prefix(&mut magic)?;
		if read != MAGIC.len() || magic != MAGIC {
			return Err(XcurError::InvalidMagicWord {
				actual: magic[..read].to_vec(),
			});
		}

		let [header_size, version, toc_count] = reader.read_u32s::<3>("file header")?;

		let header = Self {
			header_size,
			version,
			toc_count,
		};
		trace!("xcursor header: {header:?}");

		// the header may carry reserved space past the fields we know about
		reader.seek_to(u64::from(header.header_size))?;

		Ok(header)
	}
}

/// One entry of the table of contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct TocEntry {
	/// Chunk kind
	pub kind: ChunkKind,
	/// Type-specific label: nominal size for images, comment class for comments
	pub subtype: u32,
	/// Absolute byte offset of the chunk header
	pub position: u32,
}

impl TocEntry {
	/// Reads one entry at the current position
	pub fn read<R: Read + Seek>(reader: &mut FieldReader<'_, R>) -> Result<Self> {
		let [kind, subtype, position] = reader.read_u32s::<3>("TOC entry")?;
		Ok(Self {
			kind: ChunkKind::from(kind),
			subtype,
			position,
		})
	}

	/// Reads `count` contiguous entries
	pub fn read_all<R: Read + Seek>(reader: &mut FieldReader<'_, R>, count: u32) -> Result<Vec<Self>> {
		// a bogus count must not drive the allocation
		let fits = reader.remaining() / TOC_ENTRY_SIZE;
		let capacity = u64::from(count).min(fits) as usize;

		let mut entries = Vec::with_capacity(capacity);
		for _ in 0..count {
			entries.push(Self::read(reader)?);
		}
		Ok(entries)
	}
}
