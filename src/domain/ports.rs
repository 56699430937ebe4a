use crate::adapters::http::ApiClient;
use crate::domain::model::ProbeOutcome;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    /// 伺服器根路徑，例如 `http://localhost:5000/`
    fn root_url(&self) -> &str;
    /// API 前綴，例如 `http://localhost:5000/api`
    fn api_base_url(&self) -> &str;
}

/// 探測之間唯一共享的狀態：註冊取得的 bearer token
#[derive(Debug, Clone, Default)]
pub struct ProbeContext {
    bearer_token: Option<String>,
}

impl ProbeContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bearer_token(&mut self, token: String) {
        self.bearer_token = Some(token);
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }
}

#[async_trait]
pub trait Probe: Send + Sync {
    /// 失敗訊息與報告使用的步驟名稱
    fn name(&self) -> &str;

    /// 標頭 `Testing <title>...` 中顯示的描述
    fn title(&self) -> String;

    async fn run(&self, client: &ApiClient, context: &mut ProbeContext) -> Result<ProbeOutcome>;

    /// 回傳 false 時靜默跳過，不輸出任何內容
    fn should_run(&self, _context: &ProbeContext) -> bool {
        true
    }
}
