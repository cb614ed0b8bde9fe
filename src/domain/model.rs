use serde::{Deserialize, Serialize};

/// 參與交換禮物的人，`identity`（email）在同一次請求中必須唯一
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "email")]
    pub identity: String,
}

impl Participant {
    pub fn new(display_name: impl Into<String>, identity: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            identity: identity.into(),
        }
    }
}

/// 前一輪的配對紀錄
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalPair {
    #[serde(rename = "employee_name")]
    pub giver_name: String,
    #[serde(rename = "employee_email")]
    pub giver_identity: String,
    #[serde(rename = "secret_child_name")]
    pub receiver_name: String,
    #[serde(rename = "secret_child_email")]
    pub receiver_identity: String,
}

impl HistoricalPair {
    pub fn new(giver: &Participant, receiver: &Participant) -> Self {
        Self {
            giver_name: giver.display_name.clone(),
            giver_identity: giver.identity.clone(),
            receiver_name: receiver.display_name.clone(),
            receiver_identity: receiver.identity.clone(),
        }
    }
}

/// 配對結果，只由 matcher 產生
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentPair {
    #[serde(rename = "employee_name")]
    pub giver_name: String,
    #[serde(rename = "employee_email")]
    pub giver_identity: String,
    #[serde(rename = "secret_child_name")]
    pub receiver_name: String,
    #[serde(rename = "secret_child_email")]
    pub receiver_identity: String,
}

impl AssignmentPair {
    pub(crate) fn between(giver: &Participant, receiver: &Participant) -> Self {
        Self {
            giver_name: giver.display_name.clone(),
            giver_identity: giver.identity.clone(),
            receiver_name: receiver.display_name.clone(),
            receiver_identity: receiver.identity.clone(),
        }
    }
}

// 今年的結果就是明年的歷史紀錄
impl From<AssignmentPair> for HistoricalPair {
    fn from(pair: AssignmentPair) -> Self {
        Self {
            giver_name: pair.giver_name,
            giver_identity: pair.giver_identity,
            receiver_name: pair.receiver_name,
            receiver_identity: pair.receiver_identity,
        }
    }
}

/// 解碼後的輸入：目前的參與者與（可選的）去年配對
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRequest {
    pub current_employees: Vec<Participant>,
    #[serde(default)]
    pub previous_assignments: Option<Vec<HistoricalPair>>,
}

/// JSON 輸出格式
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentReport {
    pub success: bool,
    pub message: String,
    pub assignments: Option<Vec<AssignmentPair>>,
    pub total_assignments: Option<usize>,
    pub generated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(OutputFormat::Csv),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "secret_santa_assignments.csv",
            OutputFormat::Json => "secret_santa_assignments.json",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderedOutput {
    pub format: OutputFormat,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub assignments: Vec<AssignmentPair>,
    pub outputs: Vec<RenderedOutput>,
}
