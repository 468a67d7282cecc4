mod wire_cursor;
mod wire_error;
mod wire_object;
mod wire_value_encoder;

pub use wire_cursor::WireCursor;
pub use wire_error::WireEncodeError;
pub use wire_object::ObjectHandle;
pub use wire_value_encoder::WireValueEncoder;
