use anyhow::Result;
use clap::Parser;
use futures::StreamExt;
use oracle_deviation::{
    cli::Cli,
    config::{AppConfig, ProtocolConstants},
    deviation::DeviationAnalyzer,
    dex::{EthersPairReader, parse_token_address},
    lending::CometClient,
    report, utils,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    utils::init_logging();
    let cli = Cli::parse();

    // Configuration
    let config = AppConfig::load()?;
    let comet_address = config.require_comet()?;
    let asset = cli.asset.as_deref().map(parse_token_address).transpose()?;

    tracing::info!(
        comet = %comet_address,
        asset = ?asset,
        concurrency = cli.concurrency,
        "[INIT] oracle-deviation starting"
    );

    let provider = utils::connect(&config.rpc_url)?;
    let analyzer = DeviationAnalyzer::new(
        CometClient::new(comet_address, provider.clone()),
        EthersPairReader::new(provider),
        ProtocolConstants::mainnet(),
    );

    let targets = analyzer.resolve_targets(asset).await;
    tracing::info!(count = targets.len(), "[TARGETS] resolved assets");

    let results = analyzer.analyze_buffered(targets, cli.concurrency);
    futures::pin_mut!(results);
    let mut stdout = std::io::stdout();
    while let Some(record) = results.next().await {
        report::emit(&mut stdout, &record)?;
        if let Some(max) = cli.max_deviation {
            report::alert_if_exceeds(&record, max);
        }
    }
    Ok(())
}
