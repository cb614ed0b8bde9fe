use crate::domain::model::Participant;
use crate::utils::error::{Result, SantaError};
use std::collections::HashMap;

pub const MIN_PARTICIPANTS: usize = 2;

/// 一次請求內的參與者名單，建立後唯讀
#[derive(Debug, Clone)]
pub struct Directory {
    participants: Vec<Participant>,
    by_identity: HashMap<String, usize>,
}

impl Directory {
    pub fn new(participants: Vec<Participant>) -> Result<Self> {
        if participants.len() < MIN_PARTICIPANTS {
            return Err(SantaError::InsufficientParticipants {
                count: participants.len(),
            });
        }

        let mut by_identity = HashMap::with_capacity(participants.len());
        let mut duplicates: Vec<String> = Vec::new();
        for (index, participant) in participants.iter().enumerate() {
            if by_identity
                .insert(participant.identity.clone(), index)
                .is_some()
                && !duplicates.contains(&participant.identity)
            {
                duplicates.push(participant.identity.clone());
            }
        }

        if !duplicates.is_empty() {
            return Err(SantaError::DuplicateIdentity {
                identities: duplicates,
            });
        }

        tracing::debug!("Directory built with {} participants", participants.len());
        Ok(Self {
            participants,
            by_identity,
        })
    }

    pub fn all(&self) -> Vec<Participant> {
        self.participants.clone()
    }

    pub(crate) fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn lookup(&self, identity: &str) -> Option<&Participant> {
        self.by_identity
            .get(identity)
            .map(|&index| &self.participants[index])
    }

    pub fn count(&self) -> usize {
        self.participants.len()
    }
}
