//! Decoded Xcursor file and the decode pipeline.

use std::io::{Read, Seek};
use std::path::Path;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::file::error::{Result, XcurError};

use super::chunk::ChunkHeader;
use super::comment::Comment;
use super::config::{DecodeConfig, UnknownChunkPolicy};
use super::image::Frame;
use super::reader::FieldReader;
use super::toc::{FileHeader, TocEntry};
use super::types::ChunkKind;

/// A fully decoded Xcursor file
///
/// Frames and comments are each kept in TOC order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct File {
	version: u32,
	frames: Vec<Frame>,
	comments: Vec<Comment>,
}

impl File {
	/// Decodes a file from any seekable reader with the default configuration
	///
	/// The reader is rewound to offset 0 first; TOC offsets are absolute. It
	/// stays owned by the caller and is left open.
	pub fn from_reader<R: Read + Seek>(reader: &mut R) -> Result<Self> {
		Self::from_reader_with(reader, DecodeConfig::default())
	}

	/// Decodes a file from any seekable reader with an explicit configuration
	pub fn from_reader_with<R: Read + Seek>(reader: &mut R, config: DecodeConfig) -> Result<Self> {
		let mut reader = FieldReader::new(reader)?;

		let header = FileHeader::read(&mut reader)?;
		let entries = TocEntry::read_all(&mut reader, header.toc_count)?;

		let frame_count = entries.iter().filter(|e| e.kind == ChunkKind::Image).count();
		let comment_count = entries.iter().filter(|e| e.kind == ChunkKind::Comment).count();
		let mut frames = Vec::with_capacity(frame_count);
		let mut comments = Vec::with_capacity(comment_count);

		for (index, entry) in entries.iter().enumerate() {
			let chunk = ChunkHeader::read_for(&mut reader, index, entry)?;
			trace!(
				"chunk {index}: {} subtype={} header_size={} version={} at {:#x}",
				chunk.kind, chunk.subtype, chunk.header_size, chunk.version, entry.position
			);

			match entry.kind {
				ChunkKind::Image => frames.push(Frame::read(&mut reader, index, entry.subtype)?),
				ChunkKind::Comment => {
					comments.push(Comment::read(&mut reader, index, config.comment_encoding)?);
				}
				ChunkKind::Unknown(kind) => match config.unknown_chunks {
					UnknownChunkPolicy::Skip => debug!("skipping chunk {index} of unknown kind {kind:#010x}"),
					UnknownChunkPolicy::Reject => {
						return Err(XcurError::UnknownChunkKind {
							index,
							kind,
						});
					}
				},
			}
		}

		debug!(
			"decoded xcursor v{:#x}: {} frames, {} comments",
			header.version,
			frames.len(),
			comments.len()
		);

		Ok(Self {
			version: header.version,
			frames,
			comments,
		})
	}

	/// Decodes a file held in memory
	pub fn from_bytes(data: &[u8]) -> Result<Self> {
		let mut cursor = std::io::Cursor::new(data);
		Self::from_reader(&mut cursor)
	}

	/// Opens and decodes a file from the given path
	///
	/// The file handle is closed before this returns, on success or failure.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		Self::open_with(path, DecodeConfig::default())
	}

	/// Opens and decodes a file from the given path with an explicit configuration
	pub fn open_with(path: impl AsRef<Path>, config: DecodeConfig) -> Result<Self> {
		let file = std::fs::File::open(path)?;
		let mut reader = std::io::BufReader::new(file);
		Self::from_reader_with(&mut reader, config)
	}

	/// File format version from the file header
	pub fn version(&self) -> u32 {
		self.version
	}

	/// All frames in TOC order
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// All comments in TOC order
	pub fn comments(&self) -> &[Comment] {
		&self.comments
	}

	/// Returns `true` if the file holds neither frames nor comments
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty() && self.comments.is_empty()
	}

	/// Nominal sizes present in the file, sorted and deduplicated
	pub fn sizes(&self) -> Vec<u32> {
		let mut sizes: Vec<u32> = self.frames.iter().map(Frame::nominal_size).collect();
		sizes.sort_unstable();
		sizes.dedup();
		sizes
	}

	/// Frames authored for `size`, in TOC order
	pub fn frames_for_size(&self, size: u32) -> impl Iterator<Item = &Frame> + '_ {
		self.frames.iter().filter(move |frame| frame.nominal_size() == size)
	}

	/// Nominal size closest to `target`; ties go to the larger size
	pub fn best_size(&self, target: u32) -> Option<u32> {
		self.sizes().into_iter().min_by_key(|&size| (size.abs_diff(target), std::cmp::Reverse(size)))
	}

	/// Length of one animation cycle at `size`, in milliseconds
	pub fn total_delay_ms(&self, size: u32) -> u64 {
		self.frames_for_size(size).map(|frame| u64::from(frame.delay_ms())).sum()
	}
}

impl TryFrom<&[u8]> for File {
	type Error = XcurError;

	fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
		Self::from_bytes(value)
	}
}

impl TryFrom<&Vec<u8>> for File {
	type Error = XcurError;

	fn try_from(value: &Vec<u8>) -> Result<Self, Self::Error> {
		Self::from_bytes(value)
	}
}
