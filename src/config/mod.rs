pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "nb2zed")]
#[command(about = "Convert a Jupyter notebook to a Python file for the Zed editor REPL")]
pub struct CliConfig {
    /// Input .ipynb file
    pub input: String,

    /// Output .py file
    pub output: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn new(input: String, output: String) -> Self {
        Self {
            input,
            output,
            verbose: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output", &self.output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_plain_paths() {
        let config = CliConfig::new("notebook.ipynb".to_string(), "out.py".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_paths() {
        let config = CliConfig::new(String::new(), "out.py".to_string());
        assert!(config.validate().is_err());

        let config = CliConfig::new("notebook.ipynb".to_string(), String::new());
        assert!(config.validate().is_err());
    }
}
