use crate::adapters::http::ApiClient;
use crate::domain::model::{OutcomeDetail, ProbeOutcome};
use crate::domain::ports::{Probe, ProbeContext};
use crate::utils::error::{ProbeError, Result};

/// 列表端點探測：內容必須是 JSON 陣列，回報其長度
#[derive(Debug, Clone)]
pub struct ListProbe {
    name: String,
    path: String,
}

impl ListProbe {
    pub fn new(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.trim_start_matches('/').to_string(),
        }
    }

    pub fn exercises() -> Self {
        Self::new("Exercises", "exercises")
    }

    pub fn skills() -> Self {
        Self::new("Skills", "skills")
    }
}

#[async_trait::async_trait]
impl Probe for ListProbe {
    fn name(&self) -> &str {
        &self.name
    }

    fn title(&self) -> String {
        format!("GET /api/{}", self.path)
    }

    async fn run(&self, client: &ApiClient, _context: &mut ProbeContext) -> Result<ProbeOutcome> {
        let response = client.get(&self.path).await?;
        let count = match response.json().map_err(|e| e.with_status(response.status))? {
            serde_json::Value::Array(items) => items.len(),
            other => {
                return Err(ProbeError::unexpected_shape("a JSON array", &other)
                    .with_status(response.status))
            }
        };

        tracing::debug!("📥 {}: {} records", self.name, count);
        Ok(ProbeOutcome::new(response.status, OutcomeDetail::Count(count)))
    }
}
