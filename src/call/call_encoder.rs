use crate::call::{CallArgument, ProcedureCall};
use crate::constants::{
    ARGUMENT_POSITION_FIELD, ARGUMENT_VALUE_FIELD, CALL_ARGUMENT_FIELD, CALL_PROCEDURE_FIELD,
    CALL_SERVICE_FIELD, WIRE_TYPE_LENGTH_DELIMITED, WIRE_TYPE_VARINT,
};
use crate::wire::{WireCursor, WireEncodeError, WireValueEncoder};

/// Serializes a populated `ProcedureCall` into one tag-framed wire
/// message.
///
/// Layout: field 1 the service name, field 2 the procedure name, then one
/// length-delimited Argument record per attached slot in ascending
/// position order. Each record carries the argument's position (omitted
/// when 0) and its producer's output framed as length-delimited bytes.
///
/// Because a length-delimited field needs its byte length up front and an
/// argument's length is unknown until its producer runs, each value and
/// each record is first encoded into an unbounded scratch cursor, then
/// framed into the destination. Declared lengths therefore always match
/// actual byte counts.
pub struct ProcedureCallEncoder;

impl ProcedureCallEncoder {
    /// Encodes `call` into `cursor`, returning the number of bytes
    /// written.
    ///
    /// The first capacity failure aborts the whole serialization. Bytes
    /// already written are not rolled back; the caller must discard the
    /// cursor's contents rather than transmit a partial message.
    pub fn encode(call: &ProcedureCall, cursor: &mut WireCursor) -> Result<usize, WireEncodeError> {
        let start = cursor.bytes_written();

        if let Err(err) = Self::encode_fields(call, cursor) {
            tracing::warn!(
                service = call.service(),
                procedure = call.procedure(),
                "procedure call serialization aborted: {:?}",
                err
            );
            return Err(err);
        }

        Ok(cursor.bytes_written() - start)
    }

    fn encode_fields(call: &ProcedureCall, cursor: &mut WireCursor) -> Result<(), WireEncodeError> {
        WireValueEncoder::encode_tag(cursor, CALL_SERVICE_FIELD, WIRE_TYPE_LENGTH_DELIMITED)?;
        WireValueEncoder::encode_string(cursor, call.service())?;

        WireValueEncoder::encode_tag(cursor, CALL_PROCEDURE_FIELD, WIRE_TYPE_LENGTH_DELIMITED)?;
        WireValueEncoder::encode_string(cursor, call.procedure())?;

        for argument in call.arguments() {
            let record = Self::encode_argument_record(argument)?;

            WireValueEncoder::encode_tag(cursor, CALL_ARGUMENT_FIELD, WIRE_TYPE_LENGTH_DELIMITED)?;
            WireValueEncoder::encode_bytes(cursor, record.as_slice())?;
        }

        Ok(())
    }

    /// Builds one Argument record in a scratch cursor: the position field
    /// (skipped for position 0, the wire default), then the value bytes.
    fn encode_argument_record(argument: &CallArgument) -> Result<WireCursor, WireEncodeError> {
        let mut value_buf = WireCursor::unbounded();
        argument.encode_value(&mut value_buf)?;

        let mut record = WireCursor::unbounded();

        if argument.position() != 0 {
            WireValueEncoder::encode_tag(&mut record, ARGUMENT_POSITION_FIELD, WIRE_TYPE_VARINT)?;
            WireValueEncoder::encode_varint(&mut record, u64::from(argument.position()))?;
        }

        WireValueEncoder::encode_tag(&mut record, ARGUMENT_VALUE_FIELD, WIRE_TYPE_LENGTH_DELIMITED)?;
        WireValueEncoder::encode_bytes(&mut record, value_buf.as_slice())?;

        Ok(record)
    }
}
