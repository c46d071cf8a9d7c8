use crosshatch::raw::{
    check::checksum_region,
    cursor::ByteCursor,
    extension::{self, Markup},
    header::{Header, HeaderError},
    text,
};

#[test]
fn cursor_short_reads() {
    let mut c = ByteCursor::new(&[1, 2, 3, 4, 5]);

    assert_eq!(c.read_n(3), [1, 2, 3]);
    assert_eq!(c.position(), 3);
    assert_eq!(c.read_n(3), [4, 5]);
    assert_eq!(c.position(), 5);
    assert!(c.read_n(1).is_empty());
    assert!(c.read_one().is_empty());
    assert_eq!(c.remaining(), 0);
}

#[test]
fn cursor_read_one() {
    let mut c = ByteCursor::new(&[1, 2]);

    assert_eq!(c.read_one(), [1]);
    assert_eq!(c.read_one(), [2]);
    assert!(c.read_one().is_empty());
}

#[test]
fn cursor_read_array_is_all_or_nothing() {
    let mut c = ByteCursor::new(&[1, 2, 3]);

    assert_eq!(c.read_array::<2>(), Some([1, 2]));
    assert_eq!(c.read_array::<2>(), None);
    assert_eq!(c.position(), 2);
    assert_eq!(c.read_array::<1>(), Some([3]));
}

#[test]
fn cursor_cstrings() {
    let mut c = ByteCursor::new(b"Hello\0World\0");

    assert_eq!(c.read_cstring(), Some((&b"Hello"[..], 6)));
    assert_eq!(c.position(), 6);
    assert_eq!(c.read_cstring(), Some((&b"World"[..], 6)));
    assert_eq!(c.position(), 12);
    assert_eq!(c.read_cstring(), None);
}

#[test]
fn cursor_empty_cstring() {
    let mut c = ByteCursor::new(b"\0ABC");

    assert_eq!(c.read_cstring(), Some((&b""[..], 1)));
    assert_eq!(c.position(), 1);
}

#[test]
fn cursor_missing_terminator_leaves_position() {
    let mut c = ByteCursor::new(b"Test");

    assert_eq!(c.read_cstring(), None);
    assert_eq!(c.position(), 0);
    assert_eq!(c.read_n(4), b"Test");
}

#[test]
fn checksum_known_values() {
    assert_eq!(checksum_region(b"ABCDEFG", 0), 0x048b);
    assert_eq!(checksum_region(b"ABCDEFGH", 0), 0x828d);
    assert_eq!(checksum_region(&[1], 1), 0x8001);
}

#[test]
fn checksum_empty_region_is_seed() {
    assert_eq!(checksum_region(&[], 0x1234), 0x1234);
}

#[test]
fn checksum_is_deterministic_and_order_sensitive() {
    let a = checksum_region(b"ABCDEFG", 0);
    assert_eq!(a, checksum_region(b"ABCDEFG", 0));
    assert_ne!(a, checksum_region(b"ABCDEFH", 0));
    assert_ne!(a, checksum_region(b"GFEDCBA", 0));
}

#[test]
fn checksum_chains() {
    let whole = checksum_region(b"ABCDEFGH", 7);
    let chained = checksum_region(b"EFGH", checksum_region(b"ABCD", 7));
    assert_eq!(whole, chained);
}

#[test]
fn header_too_short() {
    let r = [0; 0x20];
    let err = Header::decode(&mut ByteCursor::new(&r)).unwrap_err();
    assert!(matches!(err, HeaderError::Truncated { len: 0x20 }));
}

#[test]
fn header_empty_grid() {
    let mut r = [0; 0x34];
    r[0x2C] = 0;
    r[0x2D] = 4;
    let err = Header::decode(&mut ByteCursor::new(&r)).unwrap_err();
    assert!(matches!(err, HeaderError::EmptyGrid { width: 0, height: 4 }));
}

#[test]
fn header_fields() {
    let r = std::fs::read("fixtures/garden.puz").unwrap();
    let header = Header::decode(&mut ByteCursor::new(&r)).unwrap();

    assert_eq!(header.checksum, 0xb016);
    assert_eq!(header.cib_checksum, 0x7e00);
    assert_eq!((header.width, header.height), (5, 5));
    assert_eq!(header.clue_count, 8);
    assert_eq!(header.puzzle_type, 1);
    assert_eq!(header.grid_len(), 25);
    assert_eq!(header.version(), "1.3");
}

#[test]
fn extension_sections() {
    let mut r = Vec::new();
    r.extend_from_slice(b"GEXT\x02\x00\x34\x12\x80\x00\x00");
    r.extend_from_slice(b"RUSR\x03\x00\x00\x00abc\x00");

    let sections = extension::decode_all(&mut ByteCursor::new(&r));

    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].tag, *b"GEXT");
    assert_eq!(sections[0].checksum, 0x1234);
    assert_eq!(sections[0].data, [0x80, 0x00]);
    assert_eq!(sections[1].name(), Some("RUSR"));
    assert_eq!(sections[1].data, b"abc");
}

#[test]
fn extension_truncated_data_ends_scan() {
    let r = b"LTIM\x01\x00\x00\x00\x31\x00GEXT\x05\x00\x00\x00\x80\x00";
    let sections = extension::decode_all(&mut ByteCursor::new(r));

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].name(), Some("LTIM"));
    assert_eq!(sections[0].data, b"1");
}

#[test]
fn extension_truncated_header_ends_scan() {
    let r = b"GEXT\x01\x00\x00\x00\x80\x00LT";
    let sections = extension::decode_all(&mut ByteCursor::new(r));
    assert_eq!(sections.len(), 1);
}

#[test]
fn gext_markup() {
    assert!(Markup::from(0x80).circled);
    assert!(!Markup::from(0x40).circled);
    assert!(Markup::from(0x40).revealed);
    assert_eq!(
        Markup::from(0x30),
        Markup {
            previously_incorrect: true,
            incorrect: true,
            ..Markup::default()
        }
    );
}

#[test]
fn latin1_text() {
    let s = text::decode(b"\xa9 2026");
    assert_eq!(s, "\u{a9} 2026");
    assert_eq!(text::encode(&s).collect::<Vec<_>>(), b"\xa9 2026");
}
