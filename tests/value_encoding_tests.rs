use callwire::wire::{ObjectHandle, WireCursor, WireEncodeError, WireValueEncoder};

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn varint_hex(value: u64) -> String {
    let mut cursor = WireCursor::unbounded();
    WireValueEncoder::encode_varint(&mut cursor, value).expect("varint encode failed");
    to_hex(cursor.as_slice())
}

#[test]
fn varint_group_boundaries() {
    assert_eq!(varint_hex(0), "00");
    assert_eq!(varint_hex(127), "7f");
    assert_eq!(varint_hex(128), "8001");
    assert_eq!(varint_hex(16383), "ff7f");
    assert_eq!(varint_hex(16384), "808001");
    assert_eq!(varint_hex(u64::from(u32::MAX)), "ffffffff0f");
    assert_eq!(varint_hex(u64::MAX), "ffffffffffffffffff01");
}

#[test]
fn uint32_reference_vector() {
    let mut cursor = WireCursor::with_capacity(2);
    WireValueEncoder::encode_uint32(&mut cursor, 300).expect("encode failed");
    assert_eq!(to_hex(cursor.as_slice()), "ac02");
}

#[test]
fn sint_zigzag_mapping() {
    let cases: [(i64, &str); 6] = [
        (0, "00"),
        (-1, "01"),
        (1, "02"),
        (42, "54"),
        (i64::from(i32::MAX), "feffffff0f"),
        (i64::from(i32::MIN), "ffffffff0f"),
    ];

    for (value, expected) in cases {
        let mut cursor = WireCursor::unbounded();
        WireValueEncoder::encode_svarint(&mut cursor, value).expect("encode failed");
        assert_eq!(to_hex(cursor.as_slice()), expected, "value {value}");
    }
}

#[test]
fn bool_encodes_as_single_varint_byte() {
    let mut cursor = WireCursor::unbounded();
    WireValueEncoder::encode_bool(&mut cursor, true).expect("encode failed");
    WireValueEncoder::encode_bool(&mut cursor, false).expect("encode failed");
    assert_eq!(cursor.as_slice(), &[0x01, 0x00]);
}

#[test]
fn double_encodes_little_endian_binary64() {
    let mut cursor = WireCursor::unbounded();
    WireValueEncoder::encode_double(&mut cursor, 3.14159).expect("encode failed");
    assert_eq!(to_hex(cursor.as_slice()), "6e861bf0f9210940");
}

#[test]
fn float_encodes_little_endian_binary32() {
    let mut cursor = WireCursor::unbounded();
    WireValueEncoder::encode_float(&mut cursor, 1.0).expect("encode failed");
    assert_eq!(to_hex(cursor.as_slice()), "0000803f");
}

#[test]
fn string_reference_vector() {
    let mut cursor = WireCursor::with_capacity(4);
    WireValueEncoder::encode_string(&mut cursor, "foo").expect("encode failed");
    assert_eq!(to_hex(cursor.as_slice()), "03666f6f");
}

#[test]
fn string_length_prefix_counts_bytes_not_chars() {
    // U+2122 TRADE MARK SIGN is one char but three UTF-8 bytes.
    let text = "\u{2122}";
    assert_eq!(text.chars().count(), 1);

    let mut cursor = WireCursor::unbounded();
    WireValueEncoder::encode_string(&mut cursor, text).expect("encode failed");
    assert_eq!(to_hex(cursor.as_slice()), "03e284a2");
}

#[test]
fn empty_string_encodes_as_zero_length_prefix() {
    let mut cursor = WireCursor::unbounded();
    WireValueEncoder::encode_string(&mut cursor, "").expect("encode failed");
    assert_eq!(cursor.as_slice(), &[0x00]);
}

#[test]
fn object_handle_nonzero_encodes_as_varint() {
    let mut cursor = WireCursor::with_capacity(2);
    WireValueEncoder::encode_object(&mut cursor, ObjectHandle::from_raw(300))
        .expect("encode failed");
    assert_eq!(to_hex(cursor.as_slice()), "ac02");
}

#[test]
fn object_handle_none_encodes_as_single_zero_byte() {
    let mut cursor = WireCursor::with_capacity(1);
    WireValueEncoder::encode_object(&mut cursor, ObjectHandle::none()).expect("encode failed");
    assert_eq!(cursor.as_slice(), &[0x00]);
}

#[test]
fn object_handle_zero_raw_is_the_null_handle() {
    assert_eq!(ObjectHandle::from_raw(0), ObjectHandle::none());
    assert!(ObjectHandle::from_raw(0).is_none());
    assert_eq!(ObjectHandle::from_raw(300).raw(), 300);
}

#[test]
fn bounded_cursor_rejects_overflowing_write() {
    let mut cursor = WireCursor::with_capacity(2);
    WireValueEncoder::encode_uint32(&mut cursor, 300).expect("encode failed");

    assert_eq!(
        WireValueEncoder::encode_bool(&mut cursor, true),
        Err(WireEncodeError::CapacityExceeded)
    );

    // Previously committed bytes stay intact.
    assert_eq!(to_hex(cursor.as_slice()), "ac02");
    assert_eq!(cursor.remaining(), Some(0));
}

#[test]
fn overflowing_varint_leaves_a_valid_prefix() {
    let mut cursor = WireCursor::with_capacity(1);

    assert_eq!(
        WireValueEncoder::encode_varint(&mut cursor, 300),
        Err(WireEncodeError::CapacityExceeded)
    );

    // The first group was committed before the overflow. The message is
    // incomplete and must be discarded, but nothing was corrupted.
    assert_eq!(cursor.as_slice(), &[0xac]);
}

#[test]
fn overflowing_slice_write_commits_nothing() {
    let mut cursor = WireCursor::with_capacity(3);
    cursor.write_bytes(b"ab").expect("write failed");

    assert_eq!(cursor.write_bytes(b"cd"), Err(WireEncodeError::CapacityExceeded));
    assert_eq!(cursor.as_slice(), b"ab");
    assert_eq!(cursor.remaining(), Some(1));
}
