//! CNF encoder for the bounded river crossing problem

use super::{ClauseGroup, CnfFormula, ConstraintGenerator, EncodeError};
use crate::puzzle::{enumerate_valid_states, State, TransitionTable};
use serde::Serialize;
use tracing::{debug, info};

/// Builds the puzzle tables once and encodes a plan of `steps` crossings
pub struct CnfEncoder {
    steps: usize,
    states: Vec<State>,
    transitions: TransitionTable,
}

/// Result of encoding: the formula plus a breakdown of what went into it
#[derive(Debug, Clone)]
pub struct Encoding {
    pub formula: CnfFormula,
    pub statistics: EncodingStatistics,
}

impl CnfEncoder {
    /// Create a new encoder for the given step bound
    pub fn new(steps: usize) -> Result<Self, EncodeError> {
        if steps == 0 {
            return Err(EncodeError::ZeroSteps);
        }

        let states = enumerate_valid_states();
        let transitions = TransitionTable::build(&states);
        debug!(
            states = states.len(),
            transitions = transitions.len(),
            steps,
            "Prepared puzzle tables"
        );

        Ok(Self {
            steps,
            states,
            transitions,
        })
    }

    /// Generate the full clause set
    pub fn encode(&self) -> Result<Encoding, EncodeError> {
        let mut generator = ConstraintGenerator::new(&self.states, &self.transitions, self.steps)?;
        let clauses = generator.generate_all_constraints()?;
        let num_vars = generator.variable_manager().variable_count();

        let statistics = EncodingStatistics {
            steps: self.steps,
            states: self.states.len(),
            transitions: self.transitions.len(),
            total_variables: num_vars,
            total_clauses: clauses.len(),
            groups: generator
                .group_counts()
                .iter()
                .map(|&(group, clauses)| GroupStatistics { group, clauses })
                .collect(),
        };

        info!(
            variables = statistics.total_variables,
            clauses = statistics.total_clauses,
            steps = self.steps,
            "Encoded river crossing plan"
        );

        Ok(Encoding {
            formula: CnfFormula::new(num_vars, clauses),
            statistics,
        })
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Valid states in variable order
    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn transitions(&self) -> &TransitionTable {
        &self.transitions
    }
}

/// Statistics about the CNF encoding
#[derive(Debug, Clone, Serialize)]
pub struct EncodingStatistics {
    pub steps: usize,
    pub states: usize,
    pub transitions: usize,
    pub total_variables: usize,
    pub total_clauses: usize,
    pub groups: Vec<GroupStatistics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupStatistics {
    pub group: ClauseGroup,
    pub clauses: usize,
}

impl std::fmt::Display for EncodingStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "CNF Encoding Statistics:")?;
        writeln!(f, "  Step bound: {}", self.steps)?;
        writeln!(f, "  Valid states: {}", self.states)?;
        writeln!(f, "  Transitions: {}", self.transitions)?;
        writeln!(f, "  Total variables: {}", self.total_variables)?;
        writeln!(f, "  Total clauses: {}", self.total_clauses)?;
        for entry in &self.groups {
            writeln!(f, "    {:<32} {}", entry.group.description(), entry.clauses)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadical::Solver;

    fn encode(steps: usize) -> Encoding {
        CnfEncoder::new(steps).unwrap().encode().unwrap()
    }

    fn is_satisfiable(formula: &CnfFormula) -> bool {
        let mut solver: Solver = Solver::new();
        for clause in &formula.clauses {
            solver.add_clause(clause.literals.iter().copied());
        }
        solver.solve() == Some(true)
    }

    #[test]
    fn test_encoder_creation() {
        let encoder = CnfEncoder::new(7).unwrap();
        assert_eq!(encoder.steps(), 7);
        assert_eq!(encoder.states().len(), 10);
        assert_eq!(encoder.transitions().len(), 10);
    }

    #[test]
    fn test_zero_steps() {
        assert!(matches!(CnfEncoder::new(0), Err(EncodeError::ZeroSteps)));
    }

    #[test]
    fn test_header_matches_body() {
        for steps in [1, 2, 3, 5] {
            let text = encode(steps).formula.to_dimacs_string();
            let mut lines = text.lines();
            let header = lines.next().unwrap();
            let body: Vec<&str> = lines.collect();

            let fields: Vec<&str> = header.split_whitespace().collect();
            assert_eq!(&fields[..2], &["p", "cnf"]);
            let num_vars: usize = fields[2].parse().unwrap();
            let num_clauses: usize = fields[3].parse().unwrap();

            assert_eq!(num_vars, 10 + 10 * steps);
            assert_eq!(num_clauses, 75 * steps + 3);
            assert_eq!(num_clauses, body.len(), "steps = {}", steps);
            assert!(body.iter().all(|line| line.ends_with(" 0")));
        }
    }

    #[test]
    fn test_statistics() {
        let stats = encode(3).statistics;
        assert_eq!(stats.total_variables, 40);
        assert_eq!(stats.total_clauses, 228);
        assert_eq!(stats.groups.len(), ClauseGroup::ALL.len());
        assert_eq!(stats.groups.iter().map(|g| g.clauses).sum::<usize>(), 228);

        let rendered = stats.to_string();
        assert!(rendered.contains("Total clauses: 228"));

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["groups"][1]["group"], "at_most_one_per_step");
    }

    #[test]
    fn test_output_is_deterministic() {
        let first = encode(5).formula.to_dimacs_string();
        let second = encode(5).formula.to_dimacs_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_classic_plan_is_satisfiable() {
        assert!(is_satisfiable(&encode(7).formula));
    }

    #[test]
    fn test_single_crossing_is_unsatisfiable() {
        assert!(!is_satisfiable(&encode(1).formula));
    }

    #[test]
    fn test_shortest_plan_needs_seven_crossings() {
        assert!(!is_satisfiable(&encode(6).formula));
        assert!(is_satisfiable(&encode(8).formula));
    }
}
