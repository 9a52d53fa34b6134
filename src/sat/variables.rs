//! Variable numbering for the CNF encoding

use super::EncodeError;

/// Kinds of variables used in the encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableType {
    /// The plan touches the state at this 0-based enumeration index
    State { index: usize },
    /// Transition `id` (1-based) is taken at step `t`
    Transition { t: usize, id: usize },
}

/// Maps variable types to DIMACS variable numbers.
///
/// State variables take `1..=N`. Transition variables follow step-major:
/// `N + t * M + id`.
#[derive(Debug, Clone)]
pub struct VariableManager {
    state_count: usize,
    transition_count: usize,
    steps: usize,
}

impl VariableManager {
    /// Create a manager, checking that every variable fits in a DIMACS literal
    pub fn new(state_count: usize, transition_count: usize, steps: usize) -> Result<Self, EncodeError> {
        let required = state_count as u128 + transition_count as u128 * steps as u128;
        if required > i32::MAX as u128 {
            return Err(EncodeError::TooManyVariables { required });
        }

        Ok(Self {
            state_count,
            transition_count,
            steps,
        })
    }

    /// Get the variable number for the given variable type
    pub fn get_variable(&self, var_type: VariableType) -> Result<i32, EncodeError> {
        self.validate_variable(&var_type)?;

        let number = match var_type {
            VariableType::State { index } => index + 1,
            VariableType::Transition { t, id } => self.state_count + t * self.transition_count + id,
        };
        // Bounded by the check in `new`
        Ok(number as i32)
    }

    /// Variable for the state at `index` in enumeration order
    pub fn state_variable(&self, index: usize) -> Result<i32, EncodeError> {
        self.get_variable(VariableType::State { index })
    }

    /// Variable for transition `id` taken at step `t`
    pub fn transition_variable(&self, t: usize, id: usize) -> Result<i32, EncodeError> {
        self.get_variable(VariableType::Transition { t, id })
    }

    /// All transition variables at step `t`, in identifier order
    pub fn all_transition_variables_at_step(&self, t: usize) -> Result<Vec<i32>, EncodeError> {
        (1..=self.transition_count)
            .map(|id| self.transition_variable(t, id))
            .collect()
    }

    /// Total number of variables in the encoding
    pub fn variable_count(&self) -> usize {
        self.state_count + self.transition_count * self.steps
    }

    fn validate_variable(&self, var_type: &VariableType) -> Result<(), EncodeError> {
        match *var_type {
            VariableType::State { index } => {
                if index >= self.state_count {
                    return Err(EncodeError::VariableOutOfRange {
                        kind: "state",
                        index,
                        limit: self.state_count,
                    });
                }
            }
            VariableType::Transition { t, id } => {
                if t >= self.steps {
                    return Err(EncodeError::VariableOutOfRange {
                        kind: "step",
                        index: t,
                        limit: self.steps,
                    });
                }
                if id == 0 || id > self.transition_count {
                    return Err(EncodeError::VariableOutOfRange {
                        kind: "transition",
                        index: id,
                        limit: self.transition_count,
                    });
                }
            }
        }
        Ok(())
    }
}
