use std::num::NonZeroU64;

/// Opaque handle identifying a remote object instance.
///
/// The protocol reserves instance ID 0 to mean "no object". That sentinel
/// is held here as an explicit `None` rather than a raw zero, so a handle
/// can never be confused with a valid object whose ID happens to be the
/// default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectHandle(Option<NonZeroU64>);

impl ObjectHandle {
    /// Builds a handle from a raw wire integer. 0 maps to the "no object"
    /// handle.
    pub fn from_raw(raw: u64) -> Self {
        Self(NonZeroU64::new(raw))
    }

    /// The "no object" (null reference) handle.
    pub fn none() -> Self {
        Self(None)
    }

    /// The instance ID, or `None` for the null handle.
    pub fn instance_id(&self) -> Option<NonZeroU64> {
        self.0
    }

    /// The raw wire integer, 0 for the null handle.
    pub fn raw(&self) -> u64 {
        self.0.map_or(0, |id| id.get())
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }
}
