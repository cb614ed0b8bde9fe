pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};

pub use crate::core::{
    engine::SantaEngine, pipeline::AssignmentPipeline, service::AssignmentService,
};
pub use crate::domain::model::{AssignmentPair, HistoricalPair, Participant};
pub use crate::utils::error::{Result, SantaError};
