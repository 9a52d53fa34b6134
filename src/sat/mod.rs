//! SAT encoding components for the river crossing puzzle

pub mod variables;
pub mod constraints;
pub mod dimacs;
pub mod encoder;
pub mod error;

pub use variables::{VariableManager, VariableType};
pub use constraints::{Clause, ClauseGroup, ConstraintGenerator};
pub use dimacs::CnfFormula;
pub use encoder::{CnfEncoder, Encoding, EncodingStatistics, GroupStatistics};
pub use error::EncodeError;
