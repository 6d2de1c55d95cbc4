//! Xcursor file support for `xcur-rs`.
//!
//! Xcursor files hold the frames of an X11 cursor theme entry, possibly at
//! several nominal sizes and animated, plus optional copyright, license and
//! free-form comments.
//!
//! # File Structure
//!
//! All integers are little-endian `u32`.
//!
//! ```text
//! 0x00  magic "Xcur"
//! 0x04  header size (may include reserved space)
//! 0x08  file version
//! 0x0C  TOC entry count N
//! [header size]  N x (kind, subtype, absolute position)
//! ```
//!
//! Each TOC position points at a chunk header (header size, kind, subtype,
//! version) whose kind and subtype must match the TOC entry. Image chunks
//! (`0xfffd0002`) continue with width, height, hotspot, delay and
//! `width * height` packed ARGB pixels; comment chunks (`0xfffe0001`) continue
//! with a byte length and UTF-8 text. Other kinds are legal and skipped.
//!
//! # Examples
//!
//! ```no_run
//! use xcur_types::file::xcursor::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cursor = File::open("left_ptr")?;
//!
//! for size in cursor.sizes() {
//!     println!("size {}: {} ms cycle", size, cursor.total_delay_ms(size));
//! }
//! for comment in cursor.comments() {
//!     println!("{comment}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Decoding from an already open source leaves it with the caller:
//!
//! ```no_run
//! use std::io::Cursor;
//! use xcur_types::file::xcursor::{DecodeConfig, File};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut source = Cursor::new(std::fs::read("watch")?);
//! let cursor = File::from_reader_with(&mut source, DecodeConfig::lenient())?;
//! let best = cursor.best_size(24);
//! # Ok(())
//! # }
//! ```

mod chunk;
mod comment;
mod config;
mod constants;
mod file;
mod image;
mod reader;
mod toc;
mod types;

pub use self::comment::Comment;
pub use self::config::{CommentEncoding, DecodeConfig, UnknownChunkPolicy};
pub use self::constants::*;
pub use self::file::File;
pub use self::image::Frame;
pub use self::types::{ChunkKind, CommentKind};
