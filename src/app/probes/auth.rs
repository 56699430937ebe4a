use crate::adapters::http::ApiClient;
use crate::domain::model::{
    CurrentUser, OutcomeDetail, ProbeOutcome, SignupRequest, SignupResponse,
};
use crate::domain::ports::{Probe, ProbeContext};
use crate::utils::error::{ProbeError, Result};
use crate::utils::validation::Validate;
use chrono::{DateTime, Utc};

/// `POST /api/auth/signup`，成功時把 token 存進上下文
#[derive(Debug, Default)]
pub struct SignupProbe {
    fixed_time: Option<DateTime<Utc>>,
}

impl SignupProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// 固定產生信箱用的時間，讓同一個信箱可以重送
    pub fn at(time: DateTime<Utc>) -> Self {
        Self {
            fixed_time: Some(time),
        }
    }

    pub fn request(&self) -> SignupRequest {
        SignupRequest::test_user(self.fixed_time.unwrap_or_else(Utc::now))
    }
}

#[async_trait::async_trait]
impl Probe for SignupProbe {
    fn name(&self) -> &str {
        "Auth Signup"
    }

    fn title(&self) -> String {
        "POST /api/auth/signup".to_string()
    }

    async fn run(&self, client: &ApiClient, context: &mut ProbeContext) -> Result<ProbeOutcome> {
        let request = self.request();
        request.validate()?;
        tracing::debug!("📝 Signing up as {}", request.email);

        let response = client.post_json("auth/signup", &request).await?;
        let signup = response
            .json()
            .and_then(SignupResponse::from_value)
            .map_err(|e| e.with_status(response.status))?;

        if let Some(message) = &signup.message {
            tracing::debug!("📝 Signup message: {}", message);
        }

        match signup.bearer_token() {
            Some(token) => context.set_bearer_token(token.to_string()),
            None => tracing::debug!("🔑 No token in signup response, follow-up will be skipped"),
        }

        Ok(ProbeOutcome::new(
            response.status,
            OutcomeDetail::Response(signup.user_summary()),
        ))
    }
}

/// 帶 bearer token 的 `GET /api/auth/me`，沒有 token 時不執行
#[derive(Debug, Default)]
pub struct CurrentUserProbe;

impl CurrentUserProbe {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Probe for CurrentUserProbe {
    fn name(&self) -> &str {
        "Current User"
    }

    fn title(&self) -> String {
        "GET /api/auth/me (Authenticated)".to_string()
    }

    fn should_run(&self, context: &ProbeContext) -> bool {
        context.bearer_token().is_some()
    }

    async fn run(&self, client: &ApiClient, context: &mut ProbeContext) -> Result<ProbeOutcome> {
        let token = context
            .bearer_token()
            .ok_or_else(|| ProbeError::missing_field("token"))?;
        let response = client.get_with_bearer("auth/me", token).await?;
        let user = response
            .json()
            .and_then(|value| CurrentUser::from_value(&value))
            .map_err(|e| e.with_status(response.status))?;

        Ok(ProbeOutcome::new(response.status, OutcomeDetail::User(user.name)))
    }
}
