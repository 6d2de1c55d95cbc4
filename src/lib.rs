#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `xcur-rs` reads X11 Xcursor files into immutable frames and comments.
//!
//! ```no_run
//! use xcur_rs::prelude::*;
//!
//! # fn main() -> Result<(), XcurError> {
//! let cursor = XcursorFile::open("/usr/share/icons/Adwaita/cursors/left_ptr")?;
//! println!("version {:#x}, {} frames", cursor.version(), cursor.frames().len());
//! # Ok(())
//! # }
//! ```
//!
pub use xcur_types::*;
