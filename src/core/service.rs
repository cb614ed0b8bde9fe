use crate::core::directory::Directory;
use crate::core::history::HistoryIndex;
use crate::core::matcher::{Matcher, DEFAULT_MAX_ATTEMPTS};
use crate::domain::model::{AssignmentPair, HistoricalPair, Participant};
use crate::utils::error::Result;
use rand::Rng;

/// 每次請求都重新建立 Directory / HistoryIndex / Matcher，不保留任何共享狀態
#[derive(Debug, Clone, Copy)]
pub struct AssignmentService {
    max_attempts: usize,
}

impl Default for AssignmentService {
    fn default() -> Self {
        Self::new()
    }
}

impl AssignmentService {
    pub fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    pub fn generate(
        &self,
        participants: Vec<Participant>,
        previous_pairs: Option<&[HistoricalPair]>,
    ) -> Result<Vec<AssignmentPair>> {
        self.generate_with_rng(participants, previous_pairs, &mut rand::thread_rng())
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        participants: Vec<Participant>,
        previous_pairs: Option<&[HistoricalPair]>,
        rng: &mut R,
    ) -> Result<Vec<AssignmentPair>> {
        let directory = Directory::new(participants)?;
        let history = previous_pairs
            .map(HistoryIndex::new)
            .unwrap_or_else(HistoryIndex::empty);

        tracing::info!(
            "🎁 Matching {} participants ({} previous assignments)",
            directory.count(),
            history.len()
        );

        let assignments = Matcher::new(&directory, &history)
            .with_max_attempts(self.max_attempts)
            .assign_with_rng(rng)?;

        tracing::info!("✅ Generated {} assignments", assignments.len());
        Ok(assignments)
    }
}
