#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallBuildError {
    /// The service or procedure name was empty at creation.
    InvalidCallName,

    /// The attached position duplicates an already-occupied slot, or falls
    /// outside the argument capacity declared at creation.
    InvalidArgumentPosition,
}
