use crate::domain::model::HistoricalPair;
use std::collections::HashMap;

/// giver email -> 上一輪的 receiver email
#[derive(Debug, Clone, Default)]
pub struct HistoryIndex {
    previous: HashMap<String, String>,
}

impl HistoryIndex {
    pub fn new(pairs: &[HistoricalPair]) -> Self {
        let mut previous = HashMap::with_capacity(pairs.len());
        // 同一個 giver 重複出現時以最後一筆為準
        for pair in pairs {
            previous.insert(pair.giver_identity.clone(), pair.receiver_identity.clone());
        }
        Self { previous }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn previous_receiver(&self, giver_identity: &str) -> Option<&str> {
        self.previous.get(giver_identity).map(String::as_str)
    }

    pub fn permits(&self, giver_identity: &str, receiver_identity: &str) -> bool {
        self.previous_receiver(giver_identity) != Some(receiver_identity)
    }

    pub fn len(&self) -> usize {
        self.previous.len()
    }

    pub fn is_empty(&self) -> bool {
        self.previous.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(giver: &str, receiver: &str) -> HistoricalPair {
        HistoricalPair {
            giver_name: giver.to_string(),
            giver_identity: format!("{}@x.com", giver),
            receiver_name: receiver.to_string(),
            receiver_identity: format!("{}@x.com", receiver),
        }
    }

    #[test]
    fn test_empty_index_permits_everything() {
        let index = HistoryIndex::new(&[]);
        assert!(index.is_empty());
        assert_eq!(index.previous_receiver("alice@x.com"), None);
        assert!(index.permits("alice@x.com", "bob@x.com"));
    }

    #[test]
    fn test_permits_rejects_only_the_previous_receiver() {
        let index = HistoryIndex::new(&[pair("alice", "bob")]);
        assert_eq!(index.previous_receiver("alice@x.com"), Some("bob@x.com"));
        assert!(!index.permits("alice@x.com", "bob@x.com"));
        assert!(index.permits("alice@x.com", "charlie@x.com"));
        // 反方向不受限制
        assert!(index.permits("bob@x.com", "alice@x.com"));
    }

    #[test]
    fn test_last_write_wins_for_repeated_giver() {
        let index = HistoryIndex::new(&[pair("alice", "bob"), pair("alice", "charlie")]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.previous_receiver("alice@x.com"), Some("charlie@x.com"));
        assert!(index.permits("alice@x.com", "bob@x.com"));
        assert!(!index.permits("alice@x.com", "charlie@x.com"));
    }
}
