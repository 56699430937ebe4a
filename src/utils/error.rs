use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Invalid JSON in response body: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unexpected response body: expected {expected}, found {found}")]
    UnexpectedShape { expected: String, found: String },

    #[error("Response is missing field `{field}`")]
    MissingField { field: String },

    #[error("Status: {status}, {source}")]
    ResponseError {
        status: u16,
        #[source]
        source: Box<ProbeError>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for `{field}` ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// 錯誤分類，只用於日誌欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Response,
    Output,
    Configuration,
}

impl ProbeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProbeError::ApiError(_) => ErrorCategory::Transport,
            ProbeError::SerializationError(_)
            | ProbeError::UnexpectedShape { .. }
            | ProbeError::MissingField { .. }
            | ProbeError::ResponseError { .. } => ErrorCategory::Response,
            ProbeError::IoError(_) => ErrorCategory::Output,
            ProbeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn unexpected_shape(expected: &str, value: &serde_json::Value) -> Self {
        ProbeError::UnexpectedShape {
            expected: expected.to_string(),
            found: json_kind(value).to_string(),
        }
    }

    pub fn missing_field(field: &str) -> Self {
        ProbeError::MissingField {
            field: field.to_string(),
        }
    }

    /// 回應已收到但內容不符時，補上狀態碼；傳輸錯誤維持原樣
    pub fn with_status(self, status: u16) -> Self {
        match self {
            ProbeError::ResponseError { .. } => self,
            err if err.category() == ErrorCategory::Response => ProbeError::ResponseError {
                status,
                source: Box::new(err),
            },
            err => err,
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unexpected_shape_message() {
        let err = ProbeError::unexpected_shape("a JSON array", &json!({"message": "Server error"}));
        assert_eq!(
            err.to_string(),
            "Unexpected response body: expected a JSON array, found an object"
        );
        assert_eq!(err.category(), ErrorCategory::Response);
    }

    #[test]
    fn test_serde_error_is_response_category() {
        let err: ProbeError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert_eq!(err.category(), ErrorCategory::Response);
        assert!(err.to_string().starts_with("Invalid JSON in response body"));
    }

    #[test]
    fn test_with_status_prefixes_response_errors() {
        let err = ProbeError::missing_field("name").with_status(401);
        assert_eq!(
            err.to_string(),
            "Status: 401, Response is missing field `name`"
        );
        assert_eq!(err.category(), ErrorCategory::Response);

        // 已帶狀態碼的錯誤不會重複包裝
        let twice = err.with_status(500);
        assert!(twice.to_string().starts_with("Status: 401, "));
    }

    #[test]
    fn test_with_status_leaves_other_errors_alone() {
        let err = ProbeError::IoError(std::io::Error::other("closed")).with_status(200);
        assert!(matches!(err, ProbeError::IoError(_)));
    }

    #[test]
    fn test_missing_field_message() {
        let err = ProbeError::missing_field("name");
        assert_eq!(err.to_string(), "Response is missing field `name`");
    }
}
