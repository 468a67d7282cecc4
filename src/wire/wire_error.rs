#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireEncodeError {
    /// The output cursor does not have room for the bytes being written.
    ///
    /// Bytes committed before the failing write are left in place, but the
    /// message as a whole is incomplete and must not be transmitted.
    CapacityExceeded,
}
