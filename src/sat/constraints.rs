//! Clause generation for the bounded river crossing plan

use super::{EncodeError, VariableManager};
use crate::puzzle::{State, TransitionTable};
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// Represents a SAT clause (disjunction of literals)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub literals: Vec<i32>, // Positive for variable, negative for negation
}

impl Clause {
    /// Create a new clause from literals
    pub fn new(literals: Vec<i32>) -> Self {
        Self { literals }
    }

    /// Create a unit clause (single literal)
    pub fn unit(literal: i32) -> Self {
        Self { literals: vec![literal] }
    }

    /// Create a binary clause (two literals)
    pub fn binary(lit1: i32, lit2: i32) -> Self {
        Self { literals: vec![lit1, lit2] }
    }

    /// Check if clause is empty (unsatisfiable)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Check if clause is unit
    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }
}

/// The clause families of the encoding, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseGroup {
    StartAndGoal,
    AtMostOnePerStep,
    FinalStepUsed,
    EdgeImpliesEndpoints,
    AdjacencyContinuity,
    NodeRequiresEdge,
}

impl ClauseGroup {
    pub const ALL: [ClauseGroup; 6] = [
        ClauseGroup::StartAndGoal,
        ClauseGroup::AtMostOnePerStep,
        ClauseGroup::FinalStepUsed,
        ClauseGroup::EdgeImpliesEndpoints,
        ClauseGroup::AdjacencyContinuity,
        ClauseGroup::NodeRequiresEdge,
    ];

    pub fn description(self) -> &'static str {
        match self {
            ClauseGroup::StartAndGoal => "start and goal states",
            ClauseGroup::AtMostOnePerStep => "at most one transition per step",
            ClauseGroup::FinalStepUsed => "transition at final step",
            ClauseGroup::EdgeImpliesEndpoints => "transition implies endpoints",
            ClauseGroup::AdjacencyContinuity => "adjacent steps share a state",
            ClauseGroup::NodeRequiresEdge => "touched state has a transition",
        }
    }
}

impl fmt::Display for ClauseGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Generates the CNF clauses for a plan of exactly `steps` crossings
pub struct ConstraintGenerator<'a> {
    variable_manager: VariableManager,
    states: &'a [State],
    transitions: &'a TransitionTable,
    steps: usize,
    group_counts: Vec<(ClauseGroup, usize)>,
}

impl<'a> ConstraintGenerator<'a> {
    /// Create a new constraint generator.
    ///
    /// `steps` must be at least 1 and `states` must start with the start state
    /// and end with the goal state.
    pub fn new(
        states: &'a [State],
        transitions: &'a TransitionTable,
        steps: usize,
    ) -> Result<Self, EncodeError> {
        if steps == 0 {
            return Err(EncodeError::ZeroSteps);
        }
        let variable_manager = VariableManager::new(states.len(), transitions.len(), steps)?;

        Ok(Self {
            variable_manager,
            states,
            transitions,
            steps,
            group_counts: Vec::new(),
        })
    }

    /// Generate every clause group in emission order
    pub fn generate_all_constraints(&mut self) -> Result<Vec<Clause>, EncodeError> {
        let mut clauses = Vec::new();
        self.group_counts.clear();

        for group in ClauseGroup::ALL {
            let generated = match group {
                ClauseGroup::StartAndGoal => self.generate_endpoint_constraints()?,
                ClauseGroup::AtMostOnePerStep => self.generate_at_most_one_constraints()?,
                ClauseGroup::FinalStepUsed => self.generate_final_step_constraints()?,
                ClauseGroup::EdgeImpliesEndpoints => self.generate_endpoint_implication_constraints()?,
                ClauseGroup::AdjacencyContinuity => self.generate_adjacency_constraints()?,
                ClauseGroup::NodeRequiresEdge => self.generate_node_support_constraints()?,
            };
            self.group_counts.push((group, generated.len()));
            clauses.extend(generated);
        }

        Ok(clauses)
    }

    /// The first enumerated state (start) and the last (goal) are both part of the plan
    fn generate_endpoint_constraints(&self) -> Result<Vec<Clause>, EncodeError> {
        let last = self.states.len().saturating_sub(1);
        Ok(vec![
            Clause::unit(self.variable_manager.state_variable(0)?),
            Clause::unit(self.variable_manager.state_variable(last)?),
        ])
    }

    /// Pairwise exclusion of transitions within each step
    fn generate_at_most_one_constraints(&self) -> Result<Vec<Clause>, EncodeError> {
        let mut clauses = Vec::new();

        for t in 0..self.steps {
            let vars = self.variable_manager.all_transition_variables_at_step(t)?;
            clauses.extend(
                vars.iter()
                    .tuple_combinations()
                    .map(|(&x, &y)| Clause::binary(-x, -y)),
            );
        }

        Ok(clauses)
    }

    /// The last step must take some transition
    fn generate_final_step_constraints(&self) -> Result<Vec<Clause>, EncodeError> {
        let vars = self.variable_manager.all_transition_variables_at_step(self.steps - 1)?;
        Ok(vec![Clause::new(vars)])
    }

    /// Taking a transition touches both of its states
    fn generate_endpoint_implication_constraints(&self) -> Result<Vec<Clause>, EncodeError> {
        let mut clauses = Vec::new();

        for t in 0..self.steps {
            for transition in self.transitions.iter() {
                let edge_var = self.variable_manager.transition_variable(t, transition.id)?;
                let from_var = self.variable_manager.state_variable(self.state_index(&transition.from)?)?;
                let to_var = self.variable_manager.state_variable(self.state_index(&transition.to)?)?;

                clauses.push(Clause::binary(-edge_var, from_var));
                clauses.push(Clause::binary(-edge_var, to_var));
            }
        }

        Ok(clauses)
    }

    /// A transition at step t >= 1 departs from a state reached at step t - 1.
    ///
    /// Both directions share one variable, so the departure state may be
    /// either endpoint: the clause ranges over transitions incident to either.
    fn generate_adjacency_constraints(&self) -> Result<Vec<Clause>, EncodeError> {
        let mut clauses = Vec::new();

        for t in 1..self.steps {
            for transition in self.transitions.iter() {
                let mut literals = vec![-self.variable_manager.transition_variable(t, transition.id)?];

                let predecessors = self
                    .transitions
                    .incident(&transition.from)
                    .chain(self.transitions.incident(&transition.to))
                    .sorted()
                    .dedup();
                for id in predecessors {
                    literals.push(self.variable_manager.transition_variable(t - 1, id)?);
                }

                clauses.push(Clause::new(literals));
            }
        }

        Ok(clauses)
    }

    /// A touched state needs at least one incident transition at some step
    fn generate_node_support_constraints(&self) -> Result<Vec<Clause>, EncodeError> {
        let mut clauses = Vec::new();

        for (index, state) in self.states.iter().enumerate() {
            let mut literals = vec![-self.variable_manager.state_variable(index)?];

            for t in 0..self.steps {
                for neighbour in self.states {
                    if let Some(id) = self.transitions.id(state, neighbour) {
                        literals.push(self.variable_manager.transition_variable(t, id)?);
                    }
                }
            }

            clauses.push(Clause::new(literals));
        }

        Ok(clauses)
    }

    fn state_index(&self, state: &State) -> Result<usize, EncodeError> {
        self.states
            .iter()
            .position(|s| s == state)
            .ok_or(EncodeError::VariableOutOfRange {
                kind: "state",
                index: self.states.len(),
                limit: self.states.len(),
            })
    }

    /// Get the variable manager (for external access)
    pub fn variable_manager(&self) -> &VariableManager {
        &self.variable_manager
    }

    /// Clause counts per group from the last call to `generate_all_constraints`
    pub fn group_counts(&self) -> &[(ClauseGroup, usize)] {
        &self.group_counts
    }
}
