pub mod directory;
pub mod engine;
pub mod history;
pub mod matcher;
pub mod pipeline;
pub mod service;
pub mod validator;

pub use crate::domain::model::{
    AssignmentPair, AssignmentRequest, HistoricalPair, Participant, RenderedOutput, TransformResult,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
