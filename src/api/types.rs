use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::SearchRecord;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
        }
    }
}

/// Error payload returned for every failed request.
///
/// `inputString` and `count` are only present when a result was computed but
/// could not be saved.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    /// Absent and `null` are both treated as empty input.
    #[serde(default)]
    pub input_string: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub input_string: String,
    pub count: u32,
    pub message: String,
}

impl CalculateResponse {
    pub fn success(input_string: impl Into<String>, count: u32) -> Self {
        Self {
            input_string: input_string.into(),
            count,
            message: "Success".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistoryDto {
    pub id: i64,
    pub input_string: String,
    pub result_count: i32,
    pub created_at: DateTime<Utc>,
}

impl From<SearchRecord> for SearchHistoryDto {
    fn from(record: SearchRecord) -> Self {
        Self {
            id: record.id,
            input_string: record.input_string,
            result_count: record.result_count,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub version: String,
    pub uptime: u64,
    pub total_searches: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_response_uses_camel_case() {
        let json = serde_json::to_value(CalculateResponse::success("flight", 1)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "inputString": "flight", "count": 1, "message": "Success" })
        );
    }

    #[test]
    fn calculate_request_accepts_missing_field() {
        let req: CalculateRequest = serde_json::from_str("{}").unwrap();
        assert!(req.input_string.is_none());

        let req: CalculateRequest = serde_json::from_str(r#"{"inputString":null}"#).unwrap();
        assert!(req.input_string.is_none());

        let req: CalculateRequest = serde_json::from_str(r#"{"inputString":"abc"}"#).unwrap();
        assert_eq!(req.input_string.as_deref(), Some("abc"));
    }

    #[test]
    fn history_dto_from_record() {
        let created_at = Utc::now();
        let dto = SearchHistoryDto::from(SearchRecord {
            id: 7,
            input_string: "flight".to_string(),
            result_count: 1,
            created_at,
        });

        assert_eq!(dto.id, 7);
        assert_eq!(dto.input_string, "flight");
        assert_eq!(dto.result_count, 1);
        assert_eq!(dto.created_at, created_at);

        let json = serde_json::to_value(&dto).unwrap();
        assert!(json["createdAt"].is_string());
        assert_eq!(json["resultCount"], 1);
    }
}
