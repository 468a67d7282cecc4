use crate::wire::{WireCursor, WireEncodeError};

/// Deferred value encoder for one call argument.
///
/// The producer borrows the caller's value and encodes it into a cursor
/// on demand. Nothing runs at attach time; the borrow keeps the value
/// alive until the owning call is serialized.
pub type ArgumentProducer<'a> = Box<dyn Fn(&mut WireCursor) -> Result<(), WireEncodeError> + 'a>;

/// One call parameter: a 0-based position paired with its deferred
/// producer.
///
/// Holding a producer instead of encoded bytes keeps the argument list
/// open to any value type without a universal variant representation;
/// each producer independently knows how to encode its own value.
pub struct CallArgument<'a> {
    position: u32,
    producer: ArgumentProducer<'a>,
}

impl<'a> CallArgument<'a> {
    pub fn new(position: u32, producer: ArgumentProducer<'a>) -> Self {
        Self { position, producer }
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    /// Runs the producer, appending the argument's value bytes.
    pub fn encode_value(&self, cursor: &mut WireCursor) -> Result<(), WireEncodeError> {
        (self.producer)(cursor)
    }
}
