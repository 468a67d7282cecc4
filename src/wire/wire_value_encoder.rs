use crate::constants::{WIRE_TYPE_LENGTH_DELIMITED, WIRE_TYPE_VARINT};
use crate::wire::{ObjectHandle, WireCursor, WireEncodeError};

/// Encodes primitive values into a cursor in the protocol's base wire
/// formats.
///
/// Integers are base-128 varints (least-significant group first, high bit
/// set on every group but the last). Signed integers are zig-zag mapped
/// before varint encoding, matching the protocol's signed-field
/// convention. Floating-point values are raw little-endian IEEE-754
/// bytes. Strings and byte blobs are a varint byte-length prefix followed
/// by the raw bytes.
///
/// Every operation either appends the complete encoding or fails with
/// `CapacityExceeded`. A failed operation may leave a partial prefix of
/// its own encoding behind; callers must discard the whole message.
pub struct WireValueEncoder;

impl WireValueEncoder {
    pub fn encode_varint(cursor: &mut WireCursor, value: u64) -> Result<(), WireEncodeError> {
        let mut remainder = value;

        loop {
            let group = (remainder & 0x7f) as u8;
            remainder >>= 7;

            if remainder == 0 {
                return cursor.write_byte(group);
            }

            cursor.write_byte(group | 0x80)?;
        }
    }

    /// Zig-zag maps `value` so small negative integers stay small on the
    /// wire, then varint-encodes the result.
    pub fn encode_svarint(cursor: &mut WireCursor, value: i64) -> Result<(), WireEncodeError> {
        let zigzag = ((value << 1) ^ (value >> 63)) as u64;
        Self::encode_varint(cursor, zigzag)
    }

    pub fn encode_uint32(cursor: &mut WireCursor, value: u32) -> Result<(), WireEncodeError> {
        Self::encode_varint(cursor, u64::from(value))
    }

    pub fn encode_uint64(cursor: &mut WireCursor, value: u64) -> Result<(), WireEncodeError> {
        Self::encode_varint(cursor, value)
    }

    pub fn encode_sint32(cursor: &mut WireCursor, value: i32) -> Result<(), WireEncodeError> {
        Self::encode_svarint(cursor, i64::from(value))
    }

    pub fn encode_sint64(cursor: &mut WireCursor, value: i64) -> Result<(), WireEncodeError> {
        Self::encode_svarint(cursor, value)
    }

    pub fn encode_bool(cursor: &mut WireCursor, value: bool) -> Result<(), WireEncodeError> {
        cursor.write_byte(value as u8)
    }

    /// 8 raw bytes, IEEE-754 binary64, little-endian.
    pub fn encode_double(cursor: &mut WireCursor, value: f64) -> Result<(), WireEncodeError> {
        cursor.write_bytes(&value.to_le_bytes())
    }

    /// 4 raw bytes, IEEE-754 binary32, little-endian.
    pub fn encode_float(cursor: &mut WireCursor, value: f32) -> Result<(), WireEncodeError> {
        cursor.write_bytes(&value.to_le_bytes())
    }

    /// Varint byte-length prefix followed by the raw bytes. An empty blob
    /// encodes as the single byte `00`.
    pub fn encode_bytes(cursor: &mut WireCursor, data: &[u8]) -> Result<(), WireEncodeError> {
        Self::encode_varint(cursor, data.len() as u64)?;
        cursor.write_bytes(data)
    }

    /// Length-prefixed text. Byte-oriented: multi-byte UTF-8 sequences
    /// pass through verbatim and the prefix counts bytes, not characters.
    pub fn encode_string(cursor: &mut WireCursor, text: &str) -> Result<(), WireEncodeError> {
        Self::encode_bytes(cursor, text.as_bytes())
    }

    /// A nonzero handle encodes as the varint of its instance ID. The
    /// null handle encodes as the single byte `00`, the protocol's
    /// absent-value form.
    pub fn encode_object(
        cursor: &mut WireCursor,
        handle: ObjectHandle,
    ) -> Result<(), WireEncodeError> {
        match handle.instance_id() {
            Some(id) => Self::encode_varint(cursor, id.get()),
            None => cursor.write_byte(0),
        }
    }

    /// Field tag: `(field_number << 3) | wire_type`, as a varint.
    pub fn encode_tag(
        cursor: &mut WireCursor,
        field_number: u32,
        wire_type: u8,
    ) -> Result<(), WireEncodeError> {
        debug_assert!(wire_type == WIRE_TYPE_VARINT || wire_type == WIRE_TYPE_LENGTH_DELIMITED);
        Self::encode_varint(cursor, (u64::from(field_number) << 3) | u64::from(wire_type))
    }
}
