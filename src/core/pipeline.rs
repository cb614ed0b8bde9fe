use crate::adapters::{csv_codec, json_codec, InputFormat};
use crate::core::service::AssignmentService;
use crate::core::{
    AssignmentRequest, ConfigProvider, HistoricalPair, Pipeline, RenderedOutput, Storage,
    TransformResult,
};
use crate::domain::model::OutputFormat;
use crate::utils::error::{Result, SantaError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

pub struct AssignmentPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> AssignmentPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn input_format(field: &str, path: &str) -> Result<InputFormat> {
        InputFormat::from_path(path).ok_or_else(|| SantaError::InvalidConfigValueError {
            field: field.to_string(),
            value: path.to_string(),
            reason: "Input files must be .csv or .json".to_string(),
        })
    }

    async fn read_history(&self, path: &str) -> Result<Vec<HistoricalPair>> {
        let format = Self::input_format("history_file", path)?;
        let raw = self.storage.read_file(path).await?;
        match format {
            InputFormat::Csv => csv_codec::parse_history(&raw),
            InputFormat::Json => json_codec::parse_history(&raw),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for AssignmentPipeline<S, C> {
    async fn extract(&self) -> Result<AssignmentRequest> {
        let participants_path = self.config.participants_file();
        let format = Self::input_format("participants_file", participants_path)?;

        tracing::debug!("Reading participants from: {}", participants_path);
        let raw = self.storage.read_file(participants_path).await?;

        let mut request = match format {
            InputFormat::Csv => AssignmentRequest {
                current_employees: csv_codec::parse_participants(&raw)?,
                previous_assignments: None,
            },
            InputFormat::Json => json_codec::parse_request(&raw)?,
        };

        if let Some(history_path) = self.config.history_file() {
            tracing::debug!("Reading previous assignments from: {}", history_path);
            let from_file = self.read_history(history_path).await?;
            // 檔案中的紀錄排在後面，同一個 giver 以檔案為準
            request
                .previous_assignments
                .get_or_insert_with(Vec::new)
                .extend(from_file);
        }

        Ok(request)
    }

    async fn transform(&self, request: AssignmentRequest) -> Result<TransformResult> {
        let service = AssignmentService::with_max_attempts(self.config.max_attempts());
        let previous = request.previous_assignments.as_deref();

        let assignments = match self.config.seed() {
            Some(seed) => {
                tracing::debug!("Using seeded RNG: {}", seed);
                let mut rng = StdRng::seed_from_u64(seed);
                service.generate_with_rng(request.current_employees, previous, &mut rng)?
            }
            None => service.generate(request.current_employees, previous)?,
        };

        let mut outputs = Vec::new();
        for name in self.config.output_formats() {
            let format = OutputFormat::parse(name).ok_or_else(|| {
                SantaError::InvalidConfigValueError {
                    field: "output_formats".to_string(),
                    value: name.clone(),
                    reason: "Unsupported format".to_string(),
                }
            })?;
            let content = match format {
                OutputFormat::Csv => csv_codec::write_assignments(&assignments)?,
                OutputFormat::Json => json_codec::render_report(&assignments)?,
            };
            outputs.push(RenderedOutput { format, content });
        }

        Ok(TransformResult {
            assignments,
            outputs,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let mut written = Vec::with_capacity(result.outputs.len());

        for output in &result.outputs {
            let path = Path::new(self.config.output_path())
                .join(output.format.file_name())
                .to_string_lossy()
                .into_owned();
            tracing::debug!(
                "Writing {:?} output ({} bytes) to {}",
                output.format,
                output.content.len(),
                path
            );
            self.storage.write_file(&path, output.content.as_bytes()).await?;
            written.push(path);
        }

        written
            .into_iter()
            .next()
            .ok_or_else(|| SantaError::MissingConfigError {
                field: "output_formats".to_string(),
            })
    }
}
