pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::core::matcher::DEFAULT_MAX_ATTEMPTS;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extensions, validate_output_formats, validate_path, validate_positive_number,
    Validate, SUPPORTED_INPUT_EXTENSIONS,
};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "secret-santa"))]
#[cfg_attr(feature = "cli", command(about = "Draw Secret Santa assignments from a participant list"))]
pub struct CliConfig {
    /// Participants file (.csv with Employee_Name/Employee_EmailID, or .json request)
    #[cfg_attr(feature = "cli", arg(long))]
    pub participants: String,

    /// Previous round's assignments (.csv or .json)
    #[cfg_attr(feature = "cli", arg(long))]
    pub history: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, default_value = "./output"))]
    pub output_path: String,

    #[cfg_attr(feature = "cli", arg(long, value_delimiter = ',', default_value = "csv"))]
    pub output_formats: Vec<String>,

    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS))]
    pub max_attempts: usize,

    /// Seed the shuffle for a reproducible draw
    #[cfg_attr(feature = "cli", arg(long))]
    pub seed: Option<u64>,

    /// Validate the input files without drawing or writing anything
    #[cfg_attr(feature = "cli", arg(long))]
    pub dry_run: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn participants_file(&self) -> &str {
        &self.participants
    }

    fn history_file(&self) -> Option<&str> {
        self.history.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output_formats
    }

    fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("participants", &self.participants)?;
        let mut inputs = vec![self.participants.as_str()];
        if let Some(history) = &self.history {
            validate_path("history", history)?;
            inputs.push(history.as_str());
        }
        validate_file_extensions("input files", &inputs, &SUPPORTED_INPUT_EXTENSIONS)?;
        validate_path("output_path", &self.output_path)?;
        validate_output_formats("output_formats", &self.output_formats)?;
        validate_positive_number("max_attempts", self.max_attempts, 1)?;
        Ok(())
    }
}
