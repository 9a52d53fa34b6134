//! DIMACS CNF rendering
//!
//! Clauses are collected first and rendered in one pass, since the header
//! carries the clause count.

use super::constraints::Clause;
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;

/// A complete CNF formula ready for output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CnfFormula {
    pub num_vars: usize,
    pub clauses: Vec<Clause>,
}

impl CnfFormula {
    pub fn new(num_vars: usize, clauses: Vec<Clause>) -> Self {
        Self { num_vars, clauses }
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// The `p cnf <vars> <clauses>` problem line
    pub fn header(&self) -> String {
        format!("p cnf {} {}", self.num_vars, self.num_clauses())
    }

    /// Render the formula as DIMACS text, one clause per line
    pub fn to_dimacs_string(&self) -> String {
        let mut output = String::with_capacity(16 + self.clauses.len() * 12);
        output.push_str(&self.header());
        output.push('\n');

        for clause in &self.clauses {
            for literal in &clause.literals {
                // Writing to a String cannot fail
                let _ = write!(output, "{} ", literal);
            }
            output.push_str("0\n");
        }

        output
    }

    /// Write the formula to any writer
    pub fn write_dimacs<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.to_dimacs_string().as_bytes())
    }

    /// Save the formula to `path` in a single write
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P, create_parent_dirs: bool) -> Result<()> {
        let path = path.as_ref();

        if create_parent_dirs {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }

        std::fs::write(path, self.to_dimacs_string())
            .with_context(|| format!("Failed to write CNF file: {}", path.display()))?;

        Ok(())
    }
}
