//! Positioned little-endian field reader over a seekable source.

use std::io::{ErrorKind, Read, Seek, SeekFrom};

use crate::file::error::{Result, XcurError};

/// Reads `u32` fields and byte runs while tracking the absolute position.
///
/// The source length is measured up front so every read can be checked
/// against what remains, and no buffer is ever sized from a declared length
/// the source cannot actually supply. A source that changes size mid-decode
/// is measured again before a truncation is reported.
pub(super) struct FieldReader<'a, R> {
	inner: &'a mut R,
	position: u64,
	len: u64,
}

impl<'a, R: Read + Seek> FieldReader<'a, R> {
	/// Wraps `inner` and rewinds it to offset 0.
	///
	/// Any seek failure here is reported as [`XcurError::SourceNotSeekable`],
	/// before a single byte has been interpreted.
	pub fn new(inner: &'a mut R) -> Result<Self> {
		let len = inner.seek(SeekFrom::End(0)).map_err(|source| XcurError::SourceNotSeekable {
			source,
		})?;
		inner.seek(SeekFrom::Start(0)).map_err(|source| XcurError::SourceNotSeekable {
			source,
		})?;

		Ok(Self {
			inner,
			position: 0,
			len,
		})
	}

	/// Bytes left between the current position and the end of the source
	pub fn remaining(&self) -> u64 {
		self.len.saturating_sub(self.position)
	}

	/// Measures the source again, keeping the current position
	fn refresh_len(&mut self) -> Result<()> {
		self.len = self.inner.seek(SeekFrom::End(0))?;
		self.inner.seek(SeekFrom::Start(self.position))?;
		Ok(())
	}

	/// Moves to an absolute offset
	pub fn seek_to(&mut self, offset: u64) -> Result<()> {
		self.inner.seek(SeekFrom::Start(offset))?;
		self.position = offset;
		Ok(())
	}

	/// Reads one little-endian `u32`
	pub fn read_u32(&mut self, what: &'static str) -> Result<u32> {
		let mut buffer = [0u8; 4];
		self.fill(&mut buffer, what)?;
		Ok(u32::from_le_bytes(buffer))
	}

	/// Reads `N` consecutive little-endian `u32` values
	pub fn read_u32s<const N: usize>(&mut self, what: &'static str) -> Result<[u32; N]> {
		let mut values = [0u32; N];
		for value in &mut values {
			*value = self.read_u32(what)?;
		}
		Ok(values)
	}

	/// Reads exactly `count` raw bytes
	pub fn read_bytes(&mut self, count: u64, what: &'static str) -> Result<Vec<u8>> {
		if count > self.remaining() {
			self.refresh_len()?;
		}
		let available = self.remaining();
		let size = match usize::try_from(count) {
			Ok(size) if count <= available => size,
			_ => {
				return Err(XcurError::TruncatedInput {
					what,
					offset: self.position,
					needed: count,
					available,
				});
			}
		};

		let mut buffer = vec![0u8; size];
		self.fill(&mut buffer, what)?;
		Ok(buffer)
	}

	/// Fills as much of `buffer` as the source allows and returns the count.
	///
	/// Used for the magic word, where a short read is a signature mismatch
	/// rather than a truncation.
	pub fn read_prefix(&mut self, buffer: &mut [u8]) -> Result<usize> {
		let mut filled = 0;
		while filled < buffer.len() {
			match self.inner.read(&mut buffer[filled..]) {
				Ok(0) => break,
				Ok(n) => filled += n,
				Err(e) if e.kind() == ErrorKind::Interrupted => continue,
				Err(e) => return Err(e.into()),
			}
		}
		self.position += filled as u64;
		Ok(filled)
	}

	fn fill(&mut self, buffer: &mut [u8], what: &'static str) -> Result<()> {
		match self.inner.read_exact(buffer) {
			Ok(()) => {
				self.position += buffer.len() as u64;
				Ok(())
			}
			Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
				self.refresh_len()?;
				Err(XcurError::TruncatedInput {
					what,
					offset: self.position,
					needed: buffer.len() as u64,
					available: self.remaining(),
				})
			}
			Err(e) => Err(e.into()),
		}
	}
}
