use crate::adapters::{normalize_historical_pair, normalize_participant};
use crate::domain::model::{AssignmentPair, HistoricalPair, Participant};
use crate::utils::error::{Result, SantaError};
use serde::Deserialize;

pub const NAME_COLUMN: &str = "Employee_Name";
pub const EMAIL_COLUMN: &str = "Employee_EmailID";
pub const CHILD_NAME_COLUMN: &str = "Secret_Child_Name";
pub const CHILD_EMAIL_COLUMN: &str = "Secret_Child_EmailID";

#[derive(Debug, Deserialize)]
struct ParticipantRow {
    #[serde(rename = "Employee_Name")]
    name: String,
    #[serde(rename = "Employee_EmailID")]
    email: String,
}

#[derive(Debug, Deserialize)]
struct AssignmentRow {
    #[serde(rename = "Employee_Name")]
    employee_name: String,
    #[serde(rename = "Employee_EmailID")]
    employee_email: String,
    #[serde(rename = "Secret_Child_Name")]
    secret_child_name: String,
    #[serde(rename = "Secret_Child_EmailID")]
    secret_child_email: String,
}

fn reader(content: &[u8]) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content)
}

/// 解析參與者 CSV（欄位 `Employee_Name`, `Employee_EmailID`）
pub fn parse_participants(content: &[u8]) -> Result<Vec<Participant>> {
    let mut reader = reader(content);

    let headers = reader
        .headers()
        .map_err(|e| SantaError::malformed(format!("CSV parsing error: {}", e)))?;
    // 完全空白的檔案沒有標題列
    if headers.iter().all(|h| h.is_empty()) {
        return Err(SantaError::malformed("CSV file contains no employee data"));
    }
    if !headers.iter().any(|h| h == NAME_COLUMN) || !headers.iter().any(|h| h == EMAIL_COLUMN) {
        return Err(SantaError::malformed(format!(
            "CSV must contain '{}' and '{}' columns",
            NAME_COLUMN, EMAIL_COLUMN
        )));
    }

    let mut participants = Vec::new();
    for (line, row) in reader.deserialize::<ParticipantRow>().enumerate() {
        let row = row.map_err(|e| SantaError::malformed(format!("CSV parsing error: {}", e)))?;
        let participant = normalize_participant(&row.name, &row.email).map_err(|e| match e {
            SantaError::MalformedInput { message } => {
                SantaError::malformed(format!("Row {}: {}", line + 1, message))
            }
            other => other,
        })?;
        participants.push(participant);
    }

    if participants.is_empty() {
        return Err(SantaError::malformed("CSV file contains no employee data"));
    }

    tracing::debug!("Parsed {} participants from CSV", participants.len());
    Ok(participants)
}

/// 解析去年配對 CSV；格式與 `write_assignments` 的輸出相同
pub fn parse_history(content: &[u8]) -> Result<Vec<HistoricalPair>> {
    let mut reader = reader(content);
    let mut pairs = Vec::new();

    for row in reader.deserialize::<AssignmentRow>() {
        let row = row.map_err(|e| {
            SantaError::malformed(format!("Previous assignments parsing error: {}", e))
        })?;
        pairs.push(normalize_historical_pair(HistoricalPair {
            giver_name: row.employee_name,
            giver_identity: row.employee_email,
            receiver_name: row.secret_child_name,
            receiver_identity: row.secret_child_email,
        })?);
    }

    tracing::debug!("Parsed {} previous assignments from CSV", pairs.len());
    Ok(pairs)
}

pub fn write_assignments(assignments: &[AssignmentPair]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    // 沒有資料列時 serialize 不會寫出標題，因此手動寫入
    writer.write_record([NAME_COLUMN, EMAIL_COLUMN, CHILD_NAME_COLUMN, CHILD_EMAIL_COLUMN])?;
    for assignment in assignments {
        writer.write_record([
            assignment.giver_name.as_str(),
            assignment.giver_identity.as_str(),
            assignment.receiver_name.as_str(),
            assignment.receiver_identity.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| SantaError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| SantaError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
