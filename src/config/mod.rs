//! Configuration management for the river crossing CNF encoder

pub mod settings;

pub use settings::{CliOverrides, EncodingConfig, OutputConfig, Settings};
