use crate::adapters::http::ApiClient;
use crate::domain::model::{OutcomeDetail, ProbeOutcome};
use crate::domain::ports::{Probe, ProbeContext};
use crate::utils::error::Result;

pub const EXCERPT_CHARS: usize = 200;

/// 未驗證的 `GET /`，回報狀態碼與文字內容摘要
#[derive(Debug, Default)]
pub struct RootProbe;

impl RootProbe {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Probe for RootProbe {
    fn name(&self) -> &str {
        "Base Route"
    }

    fn title(&self) -> String {
        "Base Route".to_string()
    }

    async fn run(&self, client: &ApiClient, _context: &mut ProbeContext) -> Result<ProbeOutcome> {
        let response = client.get_root().await?;
        Ok(ProbeOutcome::new(
            response.status,
            OutcomeDetail::Response(response.excerpt(EXCERPT_CHARS)),
        ))
    }
}
