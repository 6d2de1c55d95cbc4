//! This crate provides the Xcursor file decoder for the `xcur-rs` project.
//!
//! # File Formats
//!
//! - **Xcursor**: X11 cursor files holding sized, animated ARGB frames and text comments
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use xcur_types::prelude::*;
//!
//! # fn main() -> Result<(), XcurError> {
//! let cursor = XcursorFile::open("left_ptr")?;
//! for frame in cursor.frames() {
//!     println!("{}x{} hot=({}, {})", frame.width(), frame.height(), frame.xhot(), frame.yhot());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use xcur_types::file::xcursor::File;
//!
//! let cursor = File::from_bytes(&[]);
//! assert!(cursor.is_err());
//! ```

pub mod file;

/// `use xcur_types::prelude::*;` to import commonly used items.
pub mod prelude;
