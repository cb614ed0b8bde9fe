use crate::core::history::HistoryIndex;
use crate::domain::model::Participant;
use std::fmt;

/// 配對被拒絕的原因，依檢查順序排列
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairRejection {
    SelfAssignment { giver: String },
    SameName {
        name: String,
        giver_identity: String,
        receiver_identity: String,
    },
    RepeatsHistory { giver: String, receiver: String },
}

impl fmt::Display for PairRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairRejection::SelfAssignment { giver } => {
                write!(f, "{} cannot be assigned to themselves", giver)
            }
            PairRejection::SameName {
                name,
                giver_identity,
                receiver_identity,
            } => write!(
                f,
                "Cannot assign {name} ({giver_identity}) to {name} ({receiver_identity}) - same name"
            ),
            PairRejection::RepeatsHistory { giver, receiver } => write!(
                f,
                "{} had {} as their secret child last year",
                giver, receiver
            ),
        }
    }
}

/// 檢查單一 (giver, receiver) 配對；第一個不符合的規則即回傳
pub fn validate(
    giver: &Participant,
    receiver: &Participant,
    history: &HistoryIndex,
) -> Result<(), PairRejection> {
    if giver.identity == receiver.identity {
        return Err(PairRejection::SelfAssignment {
            giver: giver.display_name.clone(),
        });
    }

    if giver.display_name == receiver.display_name {
        return Err(PairRejection::SameName {
            name: giver.display_name.clone(),
            giver_identity: giver.identity.clone(),
            receiver_identity: receiver.identity.clone(),
        });
    }

    if !history.permits(&giver.identity, &receiver.identity) {
        return Err(PairRejection::RepeatsHistory {
            giver: giver.display_name.clone(),
            receiver: receiver.display_name.clone(),
        });
    }

    Ok(())
}
