//! Image chunks: one animation frame each.

use std::io::{Read, Seek};

use serde::{Deserialize, Serialize};

use crate::file::error::{Result, XcurError};

use super::constants::{BYTES_PER_PIXEL, MAX_IMAGE_DIMENSION};
use super::reader::FieldReader;

/// A decoded cursor frame
///
/// Pixels are packed 32-bit ARGB samples stored little-endian, row-major,
/// with no row padding, so `pixels().len() == width * height * 4`.
///
/// Deserialized frames go through the same checks as decoded ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFrame")]
pub struct Frame {
	nominal_size: u32,
	width: u32,
	height: u32,
	xhot: u32,
	yhot: u32,
	delay_ms: u32,
	pixels: Vec<u8>,
}

impl Frame {
	/// Nominal size this frame was authored for (the image chunk subtype)
	pub fn nominal_size(&self) -> u32 {
		self.nominal_size
	}

	/// Width in pixels
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Height in pixels
	pub fn height(&self) -> u32 {
		self.height
	}

	/// Hotspot X coordinate
	pub fn xhot(&self) -> u32 {
		self.xhot
	}

	/// Hotspot Y coordinate
	pub fn yhot(&self) -> u32 {
		self.yhot
	}

	/// Delay before the next animation frame, in milliseconds
	pub fn delay_ms(&self) -> u32 {
		self.delay_ms
	}

	/// Raw pixel bytes
	pub fn pixels(&self) -> &[u8] {
		&self.pixels
	}

	/// Consumes the frame and returns its pixel buffer
	pub fn into_pixels(self) -> Vec<u8> {
		self.pixels
	}

	/// Returns the packed ARGB sample at `(x, y)`, or `None` outside the frame
	pub fn pixel_at(&self, x: u32, y: u32) -> Option<u32> {
		if x >= self.width || y >= self.height {
			return None;
		}
		let offset = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL as usize;
		let bytes = self.pixels.get(offset..offset + BYTES_PER_PIXEL as usize)?;
		Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
	}

	/// Reads an image body; the reader must sit right after a validated
	/// image chunk header.
	pub(super) fn read<R: Read + Seek>(
		reader: &mut FieldReader<'_, R>,
		index: usize,
		nominal_size: u32,
	) -> Result<Self> {
		let [width, height, xhot, yhot, delay_ms] = reader.read_u32s::<5>("image header")?;
		check_dimensions(index, width, height, xhot, yhot)?;

		let pixels = reader.read_bytes(pixel_len(width, height), "image pixels")?;

		Ok(Self {
			nominal_size,
			width,
			height,
			xhot,
			yhot,
			delay_ms,
			pixels,
		})
	}
}

/// Serialized form of [`Frame`], checked before it becomes one
#[derive(Deserialize)]
struct RawFrame {
	nominal_size: u32,
	width: u32,
	height: u32,
	xhot: u32,
	yhot: u32,
	delay_ms: u32,
	pixels: Vec<u8>,
}

impl TryFrom<RawFrame> for Frame {
	type Error = XcurError;

	fn try_from(raw: RawFrame) -> Result<Self, Self::Error> {
		check_dimensions(0, raw.width, raw.height, raw.xhot, raw.yhot)?;

		let expected = pixel_len(raw.width, raw.height);
		if raw.pixels.len() as u64 != expected {
			return Err(XcurError::InvalidImageDimensions {
				index: 0,
				field: "pixels",
				value: u32::try_from(raw.pixels.len()).unwrap_or(u32::MAX),
				limit: expected as u32,
			});
		}

		Ok(Self {
			nominal_size: raw.nominal_size,
			width: raw.width,
			height: raw.height,
			xhot: raw.xhot,
			yhot: raw.yhot,
			delay_ms: raw.delay_ms,
			pixels: raw.pixels,
		})
	}
}

fn check_dimensions(index: usize, width: u32, height: u32, xhot: u32, yhot: u32) -> Result<()> {
	let checks = [
		("width", width, MAX_IMAGE_DIMENSION),
		("height", height, MAX_IMAGE_DIMENSION),
		("xhot", xhot, width),
		("yhot", yhot, height),
	];
	match checks.iter().find(|(_, value, limit)| value > limit) {
		Some(&(field, value, limit)) => Err(XcurError::InvalidImageDimensions {
			index,
			field,
			value,
			limit,
		}),
		None => Ok(()),
	}
}

// at most 0x7fff * 0x7fff * 4, which fits a u32
fn pixel_len(width: u32, height: u32) -> u64 {
	u64::from(width) * u64::from(height) * BYTES_PER_PIXEL
}
