use crate::adapters::http::ApiClient;
use crate::app::probes::standard_probes;
use crate::domain::model::{ProbeReport, StepResult};
use crate::domain::ports::{ConfigProvider, Probe, ProbeContext};
use crate::utils::error::Result;
use std::io::Write;
use std::time::Instant;

/// 依序執行探測。每一步的錯誤只印出來，不會中斷後續步驟。
pub struct ProbeRunner {
    client: ApiClient,
    probes: Vec<Box<dyn Probe>>,
}

impl ProbeRunner {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            probes: Vec::new(),
        }
    }

    /// 根路徑、兩個列表、註冊與驗證後的 `/auth/me`
    pub fn standard<C: ConfigProvider>(config: &C) -> Self {
        let mut runner = Self::new(ApiClient::from_config(config));
        for probe in standard_probes() {
            runner.add_probe(probe);
        }
        runner
    }

    pub fn add_probe(&mut self, probe: Box<dyn Probe>) {
        self.probes.push(probe);
    }

    /// 報告寫到 stdout
    pub async fn run(&self) -> Result<ProbeReport> {
        let mut stdout = std::io::stdout();
        self.run_with_output(&mut stdout).await
    }

    /// 只有輸出寫入失敗才會回傳錯誤
    pub async fn run_with_output<W: Write + Send>(&self, out: &mut W) -> Result<ProbeReport> {
        let mut report = ProbeReport::default();
        let mut context = ProbeContext::new();
        let mut printed_any = false;

        for probe in &self.probes {
            if !probe.should_run(&context) {
                tracing::debug!("⏭️ Skipping probe: {} (condition not met)", probe.name());
                report.push(probe.name(), StepResult::Skipped);
                continue;
            }

            if printed_any {
                writeln!(out)?;
            }
            writeln!(out, "Testing {}...", probe.title())?;
            out.flush()?;
            printed_any = true;

            let start_time = Instant::now();
            let result = match probe.run(&self.client, &mut context).await {
                Ok(outcome) => {
                    tracing::info!(
                        "✅ Probe completed: {} (status: {}, duration: {:?})",
                        probe.name(),
                        outcome.status,
                        start_time.elapsed()
                    );
                    writeln!(out, "{}", outcome)?;
                    StepResult::Completed(outcome)
                }
                Err(e) => {
                    tracing::warn!(
                        "❌ Probe failed: {} (category: {:?}): {}",
                        probe.name(),
                        e.category(),
                        e
                    );
                    let message = format!("{} failed: {}", probe.name(), e);
                    writeln!(out, "{}", message)?;
                    StepResult::Failed(message)
                }
            };
            out.flush()?;

            report.push(probe.name(), result);
        }

        tracing::info!(
            "📊 Probe run finished: {} completed, {} failed, {} skipped",
            report.completed(),
            report.failed(),
            report.skipped()
        );

        Ok(report)
    }
}
