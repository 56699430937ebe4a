use crate::utils::error::{ProbeError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const TEST_USER_NAME: &str = "Test User";
pub const TEST_USER_PASSWORD: &str = "password123";

/// 以秒級時間戳產生唯一的測試信箱
pub fn signup_email(now: DateTime<Utc>) -> String {
    format!("test_{}@example.com", now.timestamp())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupRequest {
    pub fn test_user(now: DateTime<Utc>) -> Self {
        Self {
            name: TEST_USER_NAME.to_string(),
            email: signup_email(now),
            password: TEST_USER_PASSWORD.to_string(),
        }
    }
}

impl Validate for SignupRequest {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;
        validate_non_empty_string("email", &self.email)?;
        validate_non_empty_string("password", &self.password)
    }
}

/// 註冊回應。`user` 與 `token` 都可能不存在（例如信箱重複時的 400）。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupResponse {
    #[serde(default)]
    pub user: Option<serde_json::Value>,
    #[serde(default)]
    pub token: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl SignupResponse {
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(ProbeError::unexpected_shape("a JSON object", &value));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// 只接受非空白的字串 token，其餘一律視為沒有 token
    pub fn bearer_token(&self) -> Option<&str> {
        self.token
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .filter(|token| !token.trim().is_empty())
    }

    pub fn user_summary(&self) -> String {
        match &self.user {
            Some(serde_json::Value::Null) | None => "Error".to_string(),
            Some(user) => user.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub name: String,
}

impl CurrentUser {
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| ProbeError::unexpected_shape("a JSON object", value))?;

        let name = object
            .get("name")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| ProbeError::missing_field("name"))?;

        Ok(Self {
            name: name.to_string(),
        })
    }
}

/// 原始 HTTP 回應：狀態碼與文字內容
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// 裁切後的內容摘要，避免大型 HTML 錯誤頁洗版
    pub fn excerpt(&self, max_chars: usize) -> String {
        excerpt(&self.body, max_chars)
    }
}

pub fn excerpt(body: &str, max_chars: usize) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(max_chars).collect();
    format!("{}...", cut)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeDetail {
    Response(String),
    Count(usize),
    User(String),
}

impl fmt::Display for OutcomeDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeDetail::Response(text) => write!(f, "Response: {}", text),
            OutcomeDetail::Count(count) => write!(f, "Count: {}", count),
            OutcomeDetail::User(name) => write!(f, "User: {}", name),
        }
    }
}

/// 單一探測成功完成時的摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub status: u16,
    pub detail: OutcomeDetail,
}

impl ProbeOutcome {
    pub fn new(status: u16, detail: OutcomeDetail) -> Self {
        Self { status, detail }
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status: {}, {}", self.status, self.detail)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResult {
    Completed(ProbeOutcome),
    Failed(String),
    Skipped,
}

#[derive(Debug, Clone)]
pub struct StepReport {
    pub name: String,
    pub result: StepResult,
}

/// 整次執行的結果，只供日誌與測試使用，不影響結束碼
#[derive(Debug, Clone, Default)]
pub struct ProbeReport {
    pub steps: Vec<StepReport>,
}

impl ProbeReport {
    pub fn push(&mut self, name: &str, result: StepResult) {
        self.steps.push(StepReport {
            name: name.to_string(),
            result,
        });
    }

    pub fn get(&self, name: &str) -> Option<&StepResult> {
        self.steps.iter().find(|s| s.name == name).map(|s| &s.result)
    }

    pub fn completed(&self) -> usize {
        self.count(|r| matches!(r, StepResult::Completed(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|r| matches!(r, StepResult::Failed(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|r| matches!(r, StepResult::Skipped))
    }

    fn count(&self, pred: impl Fn(&StepResult) -> bool) -> usize {
        self.steps.iter().filter(|s| pred(&s.result)).count()
    }
}
