use clap::Parser;
use llm_fanout::utils::{logger, validation::Validate};
use llm_fanout::{CliConfig, GatherEngine, HttpModelClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting llm-fanout");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let client = match HttpModelClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("❌ Could not build HTTP client: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let engine = GatherEngine::from_config(client, &config);
    tracing::info!("Endpoint: {} ({})", engine.client().endpoint(), config.kind);

    match engine.run(config.items).await {
        Ok(report) => {
            tracing::info!(
                "✅ {} requests completed in {:?}",
                report.item_count,
                report.elapsed
            );
            println!("{}", serde_json::to_string_pretty(&report.results)?);
        }
        Err(e) => {
            tracing::error!("❌ Batch failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
