pub mod call;
pub mod constants;
pub mod wire;
