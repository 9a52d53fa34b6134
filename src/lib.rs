//! River Crossing CNF Encoder
//!
//! Encodes the bounded-step wolf, rabbit and carrot river crossing puzzle as
//! a SAT problem and writes it in DIMACS CNF format for an external solver.

pub mod config;
pub mod puzzle;
pub mod sat;
pub mod utils;

pub use config::Settings;
pub use sat::{CnfEncoder, CnfFormula, EncodeError, Encoding};

use anyhow::{Context, Result};

/// Encode the puzzle for `settings` and write the CNF (and optional statistics) to disk
pub fn write_cnf(settings: &Settings) -> Result<Encoding> {
    settings.validate().context("Configuration validation failed")?;

    let encoder = CnfEncoder::new(settings.encoding.steps)?;
    let encoding = encoder.encode().context("Failed to encode river crossing plan")?;

    encoding
        .formula
        .save_to_file(&settings.output.path, settings.output.create_parent_dirs)?;

    if let Some(ref stats_path) = settings.output.statistics_file {
        let json = serde_json::to_string_pretty(&encoding.statistics)
            .context("Failed to serialize encoding statistics")?;
        std::fs::write(stats_path, json)
            .with_context(|| format!("Failed to write statistics file: {}", stats_path.display()))?;
    }

    Ok(encoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_cnf_with_statistics() {
        let temp_dir = tempdir().unwrap();
        let mut settings = Settings::default();
        settings.encoding.steps = 2;
        settings.output.path = temp_dir.path().join("plan.cnf");
        settings.output.statistics_file = Some(temp_dir.path().join("plan.json"));

        let encoding = write_cnf(&settings).unwrap();

        let cnf = std::fs::read_to_string(&settings.output.path).unwrap();
        assert_eq!(cnf, encoding.formula.to_dimacs_string());
        assert!(cnf.starts_with("p cnf 30 153\n"));

        let stats: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(temp_dir.path().join("plan.json")).unwrap())
                .unwrap();
        assert_eq!(stats["total_clauses"], 153);
    }

    #[test]
    fn test_write_cnf_rejects_zero_steps() {
        let temp_dir = tempdir().unwrap();
        let mut settings = Settings::default();
        settings.encoding.steps = 0;
        settings.output.path = temp_dir.path().join("plan.cnf");

        assert!(write_cnf(&settings).is_err());
        assert!(!settings.output.path.exists());
    }
}
