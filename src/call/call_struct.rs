use crate::call::{CallArgument, CallBuildError};
use crate::wire::{WireCursor, WireEncodeError};

/// In-memory descriptor of one procedure call: a (service, procedure)
/// name pair plus argument slots.
///
/// Slots are stored indexed by position, with the capacity fixed at
/// creation, so attach order never affects wire order. A call is built
/// per invocation and serialized once; re-encoding re-invokes every
/// producer, which is only safe while the borrowed values are unchanged.
pub struct ProcedureCall<'a> {
    service: String,
    procedure: String,
    arguments: Vec<Option<CallArgument<'a>>>,
}

impl<'a> ProcedureCall<'a> {
    /// Creates a call with `argument_count` empty slots. Zero is valid
    /// for calls that take no arguments.
    pub fn new(
        service: &str,
        procedure: &str,
        argument_count: usize,
    ) -> Result<Self, CallBuildError> {
        if service.is_empty() || procedure.is_empty() {
            return Err(CallBuildError::InvalidCallName);
        }

        let mut arguments = Vec::with_capacity(argument_count);
        arguments.resize_with(argument_count, || None);

        Ok(Self {
            service: service.to_string(),
            procedure: procedure.to_string(),
            arguments,
        })
    }

    /// Attaches a deferred value producer at `position`.
    ///
    /// The producer is not invoked here; it runs when the call is
    /// serialized, so the value it borrows must stay valid and unchanged
    /// until then.
    pub fn add_argument<F>(&mut self, position: u32, producer: F) -> Result<(), CallBuildError>
    where
        F: Fn(&mut WireCursor) -> Result<(), WireEncodeError> + 'a,
    {
        let slot = self
            .arguments
            .get_mut(position as usize)
            .ok_or(CallBuildError::InvalidArgumentPosition)?;

        if slot.is_some() {
            return Err(CallBuildError::InvalidArgumentPosition);
        }

        *slot = Some(CallArgument::new(position, Box::new(producer)));

        Ok(())
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn procedure(&self) -> &str {
        &self.procedure
    }

    /// The argument capacity declared at creation.
    pub fn argument_count(&self) -> usize {
        self.arguments.len()
    }

    /// Number of slots that have an argument attached.
    pub fn attached_count(&self) -> usize {
        self.arguments.iter().flatten().count()
    }

    /// Attached arguments in ascending position order.
    pub fn arguments(&self) -> impl Iterator<Item = &CallArgument<'a>> {
        self.arguments.iter().flatten()
    }
}
