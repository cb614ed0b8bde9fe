use crate::adapters::{normalize_historical_pair, normalize_participant};
use crate::domain::model::{AssignmentPair, AssignmentReport, AssignmentRequest, HistoricalPair, Participant};
use crate::utils::error::{Result, SantaError};

fn request_error(e: serde_json::Error) -> SantaError {
    SantaError::malformed(format!("JSON request parsing error: {}", e))
}

/// 接受完整請求物件，或只有參與者陣列
pub fn parse_request(content: &[u8]) -> Result<AssignmentRequest> {
    let document: serde_json::Value = serde_json::from_slice(content).map_err(request_error)?;

    // 先判斷頂層型別再反序列化，錯誤訊息才會指出缺少的欄位
    let raw = if document.is_array() {
        AssignmentRequest {
            current_employees: serde_json::from_value::<Vec<Participant>>(document)
                .map_err(request_error)?,
            previous_assignments: None,
        }
    } else {
        serde_json::from_value::<AssignmentRequest>(document).map_err(request_error)?
    };

    let current_employees = raw
        .current_employees
        .iter()
        .map(|p| normalize_participant(&p.display_name, &p.identity))
        .collect::<Result<Vec<_>>>()?;

    let previous_assignments = raw
        .previous_assignments
        .map(|pairs| {
            pairs
                .into_iter()
                .map(normalize_historical_pair)
                .collect::<Result<Vec<_>>>()
        })
        .transpose()?;

    Ok(AssignmentRequest {
        current_employees,
        previous_assignments,
    })
}

pub fn parse_history(content: &[u8]) -> Result<Vec<HistoricalPair>> {
    let pairs: Vec<HistoricalPair> = serde_json::from_slice(content).map_err(|e| {
        SantaError::malformed(format!("Previous assignments parsing error: {}", e))
    })?;
    pairs.into_iter().map(normalize_historical_pair).collect()
}

pub fn render_report(assignments: &[AssignmentPair]) -> Result<String> {
    let report = AssignmentReport {
        success: true,
        message: "Assignments generated successfully".to_string(),
        assignments: Some(assignments.to_vec()),
        total_assignments: Some(assignments.len()),
        generated_at: chrono::Utc::now().to_rfc3339(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
