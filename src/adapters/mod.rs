// Adapters layer: serialization boundary around the matching core.
// Everything here turns raw bytes into validated domain values (or back).

pub mod csv_codec;
pub mod json_codec;

use crate::domain::model::{HistoricalPair, Participant};
use crate::utils::error::Result;
use crate::utils::validation::{validate_email, validate_non_empty_string};

/// 檢查 email 格式並把 domain 部分轉成小寫；local part 保持原樣
pub(crate) fn normalize_email(field_name: &str, email: &str) -> Result<String> {
    let email = email.trim();
    validate_email(field_name, email)?;
    match email.rsplit_once('@') {
        Some((local, domain)) => Ok(format!("{}@{}", local, domain.to_ascii_lowercase())),
        None => Ok(email.to_string()),
    }
}

/// 去除空白並檢查名稱與 email 格式
pub(crate) fn normalize_participant(name: &str, email: &str) -> Result<Participant> {
    let name = name.trim();
    validate_non_empty_string("Employee name", name)?;
    let email = normalize_email("Employee email", email)?;
    Ok(Participant::new(name, email))
}

pub(crate) fn normalize_historical_pair(pair: HistoricalPair) -> Result<HistoricalPair> {
    let giver_identity = normalize_email("Employee email", &pair.giver_identity)?;
    let receiver_identity = normalize_email("Secret child email", &pair.receiver_identity)?;

    Ok(HistoricalPair {
        giver_name: pair.giver_name.trim().to_string(),
        giver_identity,
        receiver_name: pair.receiver_name.trim().to_string(),
        receiver_identity,
    })
}

/// 依副檔名判斷輸入格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    pub fn from_path(path: &str) -> Option<Self> {
        let extension = std::path::Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())?
            .to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(InputFormat::Csv),
            "json" => Some(InputFormat::Json),
            _ => None,
        }
    }
}
