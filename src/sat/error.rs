//! Errors raised while building the CNF encoding

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A plan needs at least one crossing slot
    #[error("step bound must be at least 1")]
    ZeroSteps,

    #[error("encoding needs {required} variables, more than DIMACS literals can address")]
    TooManyVariables { required: u128 },

    #[error("{kind} index {index} out of bounds (limit: {limit})")]
    VariableOutOfRange {
        kind: &'static str,
        index: usize,
        limit: usize,
    },
}
