use crate::core::directory::Directory;
use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DryRunSummary {
    pub participants: usize,
    pub previous_assignments: usize,
}

pub struct SantaEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SantaEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("🎄 Starting Secret Santa run");

        tracing::info!("📥 Reading input...");
        let request = self.pipeline.extract().await?;
        tracing::info!(
            "Read {} participants, {} previous assignments",
            request.current_employees.len(),
            request.previous_assignments.as_ref().map_or(0, Vec::len)
        );

        tracing::info!("🎲 Drawing assignments...");
        let result = self.pipeline.transform(request).await?;
        tracing::info!(
            "Drew {} assignments, rendered {} output(s)",
            result.assignments.len(),
            result.outputs.len()
        );

        tracing::info!("💾 Writing output...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {} ({:?})", output_path, started.elapsed());

        Ok(output_path)
    }

    /// 只讀取並檢查輸入（名單人數、重複 email），不進行配對也不寫檔
    pub async fn dry_run(&self) -> Result<DryRunSummary> {
        let request = self.pipeline.extract().await?;
        let previous_assignments = request.previous_assignments.as_ref().map_or(0, Vec::len);
        let directory = Directory::new(request.current_employees)?;

        tracing::info!(
            "🔍 Dry run: {} participants, {} previous assignments look valid",
            directory.count(),
            previous_assignments
        );

        Ok(DryRunSummary {
            participants: directory.count(),
            previous_assignments,
        })
    }
}
