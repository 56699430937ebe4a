use calispro_probe::utils::{logger, validation::Validate};
use calispro_probe::{ProbeConfig, ProbeRunner};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_cli_logger();

    let config = ProbeConfig::default();
    tracing::debug!("Probe config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let runner = ProbeRunner::standard(&config);
    let report = runner.run().await?;

    tracing::info!(
        "🏁 Finished {} probes ({} failed)",
        report.steps.len(),
        report.failed()
    );

    Ok(())
}
