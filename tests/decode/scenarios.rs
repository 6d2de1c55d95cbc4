//! End-to-end decoding scenarios

use std::io::Cursor;

use log::info;
use xcur_rs::prelude::*;

use crate::common::{build, comment, image};

#[test_log::test]
fn decodes_single_frame() {
	let data = build(1, &[image(32, 32, 32, (0, 0), 0, 0)]);
	let cursor = XcursorFile::from_bytes(&data).unwrap();

	assert_eq!(cursor.version(), 1);
	assert!(cursor.comments().is_empty());
	let [frame] = cursor.frames() else {
		panic!("expected exactly one frame");
	};
	assert_eq!((frame.width(), frame.height(), frame.xhot(), frame.yhot(), frame.delay_ms()), (32, 32, 0, 0, 0));
	assert_eq!(frame.pixels(), &[0u8; 4096][..]);
}

#[test_log::test]
fn rejects_oversized_width() {
	let data = build(1, &[image(32, 0x8000, 32, (0, 0), 0, 0)]);
	let err = XcursorFile::from_bytes(&data).unwrap_err();
	info!("{err}");

	assert!(matches!(
		err,
		XcurError::InvalidImageDimensions {
			field: "width",
			value: 0x8000,
			..
		}
	));
}

#[test_log::test]
fn decodes_single_comment() {
	let data = build(1, &[comment(CommentKind::Copyright as u32, "MIT (c)")]);
	let cursor = XcursorFile::from_bytes(&data).unwrap();

	assert!(cursor.frames().is_empty());
	assert_eq!(cursor.comments().len(), 1);
	assert_eq!(cursor.comments()[0].as_ref(), "MIT (c)");
}

#[test_log::test]
fn animated_multi_size_theme_entry() {
	let data = build(
		0x0001_0000,
		&[
			comment(CommentKind::Copyright as u32, "(c) 2024 someone"),
			comment(CommentKind::License as u32, "CC-BY-SA"),
			image(24, 24, 24, (4, 4), 80, 1),
			image(24, 24, 24, (4, 4), 80, 2),
			image(48, 48, 48, (8, 8), 80, 3),
			image(48, 48, 48, (8, 8), 80, 4),
			comment(CommentKind::Other as u32, "watch"),
		],
	);
	let cursor = XcursorFile::from_bytes(&data).unwrap();

	assert_eq!(cursor.frames().len(), 4);
	let texts: Vec<&str> = cursor.comments().iter().map(Comment::text).collect();
	assert_eq!(texts, ["(c) 2024 someone", "CC-BY-SA", "watch"]);

	let fills: Vec<u8> = cursor.frames().iter().map(|f| f.pixels()[0]).collect();
	assert_eq!(fills, [1, 2, 3, 4]);

	for frame in cursor.frames() {
		assert!(frame.width() <= MAX_IMAGE_DIMENSION && frame.height() <= MAX_IMAGE_DIMENSION);
		assert!(frame.xhot() <= frame.width() && frame.yhot() <= frame.height());
		assert_eq!(frame.pixels().len(), (frame.width() * frame.height() * 4) as usize);
	}

	assert_eq!(cursor.sizes(), [24, 48]);
	assert_eq!(cursor.best_size(32), Some(24));
	assert_eq!(cursor.best_size(36), Some(48));
	assert_eq!(cursor.total_delay_ms(48), 160);
}

#[test_log::test]
fn truncated_file_never_partially_decodes() {
	let data = build(1, &[comment(1, "kept?"), image(16, 16, 16, (0, 0), 0, 0)]);

	for len in [0, 3, 10, 20, data.len() / 2, data.len() - 1] {
		let result = XcursorFile::from_bytes(&data[..len]);
		assert!(result.is_err(), "prefix of {len} bytes decoded");
	}
}

#[test_log::test]
fn same_bytes_same_result() {
	let data = build(1, &[image(16, 2, 2, (1, 1), 30, 7), comment(3, "x")]);
	let a = XcursorFile::from_reader(&mut Cursor::new(&data)).unwrap();
	let b = XcursorFile::from_reader(&mut Cursor::new(&data)).unwrap();
	assert_eq!(a, b);
}
