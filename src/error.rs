use thiserror::Error;

/// Errors reported by [`Function::try_call`].
///
/// [`Function::try_call`]: struct.Function.html#method.try_call
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// The function was created empty or its slot was moved out.
    #[error("tried to call an empty function")]
    Empty,
}
