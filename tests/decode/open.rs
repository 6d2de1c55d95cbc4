//! Path-based entry point

use std::io::Write;

use xcur_rs::prelude::*;

use crate::common::{build, comment, image};

#[test_log::test]
fn opens_from_path() {
	let data = build(1, &[image(24, 4, 4, (2, 2), 0, 9), comment(2, "GPL")]);

	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(&data).unwrap();
	file.flush().unwrap();

	let cursor = XcursorFile::open(file.path()).unwrap();
	assert_eq!(cursor.frames()[0].pixels()[0], 9);
	assert_eq!(cursor.comments()[0].text(), "GPL");

	let strict = XcursorFile::open_with(file.path(), DecodeConfig::strict()).unwrap();
	assert_eq!(cursor, strict);
}

#[test_log::test]
fn missing_path_is_io_error() {
	let dir = tempfile::tempdir().unwrap();
	let result = XcursorFile::open(dir.path().join("does-not-exist"));
	assert!(matches!(result, Err(XcurError::Io(_))));
}

#[test_log::test]
fn bad_magic_from_path() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(b"PNG\x00not a cursor").unwrap();
	file.flush().unwrap();

	assert!(matches!(XcursorFile::open(file.path()), Err(XcurError::InvalidMagicWord { .. })));
}
