//! Constants used in Xcursor files

/// Magic bytes at the start of every Xcursor file
pub const MAGIC: [u8; 4] = [0x58, 0x63, 0x75, 0x72]; // "Xcur"

/// Size of the fixed file header fields (magic, header size, version, TOC count)
pub const FILE_HEADER_SIZE: u32 = 16;

/// Size of each TOC entry in bytes (kind, subtype, position)
pub const TOC_ENTRY_SIZE: u64 = 12;

/// Size of the common chunk header in bytes (header size, kind, subtype, version)
pub const CHUNK_HEADER_SIZE: u32 = 16;

/// Declared header size of an image chunk (common header + five image fields)
pub const IMAGE_HEADER_SIZE: u32 = 36;

/// Declared header size of a comment chunk (common header + length field)
pub const COMMENT_HEADER_SIZE: u32 = 20;

/// Chunk kind of comment chunks
pub const COMMENT_TYPE: u32 = 0xfffe_0001;

/// Chunk kind of image chunks
pub const IMAGE_TYPE: u32 = 0xfffd_0002;

/// Largest width or height an image chunk may declare
pub const MAX_IMAGE_DIMENSION: u32 = 0x7fff;

/// Bytes per packed ARGB pixel
pub const BYTES_PER_PIXEL: u64 = 4;
