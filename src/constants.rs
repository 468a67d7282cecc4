// Wire-format constants
//
// Field tags are `(field_number << 3) | wire_type`. Only the two wire
// types this protocol uses are defined here.

/// Wire type for base-128 varint fields.
pub const WIRE_TYPE_VARINT: u8 = 0;

/// Wire type for length-delimited fields (strings, bytes, submessages).
pub const WIRE_TYPE_LENGTH_DELIMITED: u8 = 2;

/// ProcedureCall field 1: the target service name (length-delimited).
pub const CALL_SERVICE_FIELD: u32 = 1;

/// ProcedureCall field 2: the target procedure name (length-delimited).
pub const CALL_PROCEDURE_FIELD: u32 = 2;

/// ProcedureCall field 3: repeated Argument submessage (length-delimited),
/// one record per attached argument, emitted in ascending position order.
pub const CALL_ARGUMENT_FIELD: u32 = 3;

/// Argument submessage field 1: the argument's 0-based position (varint).
/// Omitted on the wire when the position is 0, matching the protocol's
/// default-value convention.
pub const ARGUMENT_POSITION_FIELD: u32 = 1;

/// Argument submessage field 2: the encoded value bytes (length-delimited).
pub const ARGUMENT_VALUE_FIELD: u32 = 2;

/// Maximum encoded size of a varint (a u64 takes at most 10 groups).
pub const MAX_VARINT_SIZE: usize = 10;
