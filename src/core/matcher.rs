use crate::core::directory::Directory;
use crate::core::history::HistoryIndex;
use crate::core::validator::{self, PairRejection};
use crate::domain::model::{AssignmentPair, Participant};
use crate::utils::error::{Result, SantaError};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// 隨機洗牌 + 驗證 + 重試的配對引擎。
///
/// 每一輪把參與者清單複製一份洗牌後與原順序逐位配對；任何一組配對不合法就
/// 放棄這一輪。超過 `max_attempts` 仍找不到就回傳 `MatchingFailed`，
/// 不會退回窮舉搜尋。
pub struct Matcher<'a> {
    directory: &'a Directory,
    history: &'a HistoryIndex,
    max_attempts: usize,
}

impl<'a> Matcher<'a> {
    pub fn new(directory: &'a Directory, history: &'a HistoryIndex) -> Self {
        Self {
            directory,
            history,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn assign(&self) -> Result<Vec<AssignmentPair>> {
        self.assign_with_rng(&mut rand::thread_rng())
    }

    pub fn assign_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<AssignmentPair>> {
        for attempt in 1..=self.max_attempts {
            match self.attempt(rng) {
                Ok(pairs) if self.all_receivers_distinct(&pairs) => {
                    tracing::debug!("Found valid assignment on attempt {}", attempt);
                    return Ok(pairs);
                }
                Ok(_) => {
                    tracing::trace!("Attempt {} repeated a receiver", attempt);
                }
                Err(rejection) => {
                    tracing::trace!("Attempt {} abandoned: {}", attempt, rejection);
                }
            }
        }

        tracing::warn!(
            "No valid assignment for {} participants after {} attempts",
            self.directory.count(),
            self.max_attempts
        );
        Err(SantaError::MatchingFailed {
            attempts: self.max_attempts,
        })
    }

    fn attempt<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> std::result::Result<Vec<AssignmentPair>, PairRejection> {
        let givers = self.directory.participants();
        let mut receivers: Vec<&Participant> = givers.iter().collect();
        receivers.shuffle(rng);

        let mut pairs = Vec::with_capacity(givers.len());
        for (giver, receiver) in givers.iter().zip(receivers) {
            validator::validate(giver, receiver, self.history)?;
            pairs.push(AssignmentPair::between(giver, receiver));
        }
        Ok(pairs)
    }

    fn all_receivers_distinct(&self, pairs: &[AssignmentPair]) -> bool {
        let receivers: HashSet<&str> = pairs
            .iter()
            .map(|pair| pair.receiver_identity.as_str())
            .collect();
        receivers.len() == self.directory.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::HistoricalPair;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn people(names: &[&str]) -> Vec<Participant> {
        names
            .iter()
            .map(|name| Participant::new(*name, format!("{}@x.com", name.to_lowercase())))
            .collect()
    }

    fn assert_valid(pairs: &[AssignmentPair], directory: &Directory, history: &HistoryIndex) {
        assert_eq!(pairs.len(), directory.count());

        let givers: HashSet<&str> = pairs.iter().map(|p| p.giver_identity.as_str()).collect();
        let receivers: HashSet<&str> = pairs.iter().map(|p| p.receiver_identity.as_str()).collect();
        assert_eq!(givers.len(), directory.count());
        assert_eq!(receivers.len(), directory.count());

        for pair in pairs {
            assert_ne!(pair.giver_identity, pair.receiver_identity);
            assert_ne!(pair.giver_name, pair.receiver_name);
            assert!(history.permits(&pair.giver_identity, &pair.receiver_identity));
            assert!(directory.lookup(&pair.receiver_identity).is_some());
        }
    }

    #[test]
    fn test_givers_keep_input_order() {
        let directory = Directory::new(people(&["Alice", "Bob", "Charlie", "Dana"])).unwrap();
        let history = HistoryIndex::empty();
        let mut rng = StdRng::seed_from_u64(7);

        let pairs = Matcher::new(&directory, &history)
            .assign_with_rng(&mut rng)
            .unwrap();

        let givers: Vec<&str> = pairs.iter().map(|p| p.giver_name.as_str()).collect();
        assert_eq!(givers, vec!["Alice", "Bob", "Charlie", "Dana"]);
        assert_valid(&pairs, &directory, &history);
    }

    #[test]
    fn test_many_seeds_produce_valid_derangements() {
        let directory =
            Directory::new(people(&["Ann", "Ben", "Cat", "Dan", "Eve", "Fay", "Gus"])).unwrap();
        let history = HistoryIndex::new(&[
            HistoricalPair::new(&directory.all()[0], &directory.all()[1]),
            HistoricalPair::new(&directory.all()[1], &directory.all()[2]),
            HistoricalPair::new(&directory.all()[6], &directory.all()[0]),
        ]);

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pairs = Matcher::new(&directory, &history)
                .assign_with_rng(&mut rng)
                .unwrap();
            assert_valid(&pairs, &directory, &history);
        }
    }

    #[test]
    fn test_two_participants_swap() {
        let directory = Directory::new(people(&["Alice", "Bob"])).unwrap();
        let history = HistoryIndex::empty();

        let pairs = Matcher::new(&directory, &history).assign().unwrap();

        assert_eq!(pairs[0].receiver_identity, "bob@x.com");
        assert_eq!(pairs[1].receiver_identity, "alice@x.com");
    }

    #[test]
    fn test_forced_repeat_exhausts_attempts() {
        let directory = Directory::new(people(&["Alice", "Bob"])).unwrap();
        let all = directory.all();
        let history = HistoryIndex::new(&[HistoricalPair::new(&all[0], &all[1])]);

        let result = Matcher::new(&directory, &history)
            .with_max_attempts(25)
            .assign();

        match result {
            Err(SantaError::MatchingFailed { attempts }) => assert_eq!(attempts, 25),
            other => panic!("expected MatchingFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_shared_display_name_is_unsatisfiable_for_two() {
        let directory = Directory::new(vec![
            Participant::new("Sam", "sam.one@x.com"),
            Participant::new("Sam", "sam.two@x.com"),
        ])
        .unwrap();
        let history = HistoryIndex::empty();

        assert!(matches!(
            Matcher::new(&directory, &history).assign(),
            Err(SantaError::MatchingFailed { attempts: DEFAULT_MAX_ATTEMPTS })
        ));
    }

    #[test]
    fn test_zero_attempts_fails_immediately() {
        let directory = Directory::new(people(&["Alice", "Bob"])).unwrap();
        let history = HistoryIndex::empty();
        let matcher = Matcher::new(&directory, &history).with_max_attempts(0);

        assert_eq!(matcher.max_attempts(), 0);
        assert!(matches!(
            matcher.assign(),
            Err(SantaError::MatchingFailed { attempts: 0 })
        ));
    }
}
