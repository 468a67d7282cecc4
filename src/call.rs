mod call_argument;
mod call_encoder;
mod call_error;
mod call_struct;

pub use call_argument::{ArgumentProducer, CallArgument};
pub use call_encoder::ProcedureCallEncoder;
pub use call_error::CallBuildError;
pub use call_struct::ProcedureCall;
