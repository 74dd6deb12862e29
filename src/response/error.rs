use super::WriterState;

/// An error returned when [`Writer`] methods are called out of order.
///
/// [`Writer`]: super::Writer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriterError {
    /// Writer is not in the state required by the call.
    State {
        /// State required by the call.
        expected: WriterState,
        /// Current writer state.
        actual: WriterState,
    },
    /// Full body write after chunked body has been started.
    ChunkedBody,
}

impl std::error::Error for WriterError {}

impl std::fmt::Display for WriterError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::State { expected, actual } => {
                write!(f, "writer in incorrect state, expected {expected:?}, found {actual:?}")
            }
            Self::ChunkedBody => f.write_str("cannot write full body after chunked body"),
        }
    }
}
