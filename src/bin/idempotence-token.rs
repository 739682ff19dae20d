use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use idempotence_token::generator::build_generator;
use idempotence_token::observability::metrics::Metrics;
use idempotence_token::server;
use idempotence_token::server::server::AppState;
use idempotence_token::store::build_store;
use idempotence_token::utils::config_loader;
use idempotence_token::utils::logging;
use idempotence_token::utils::logging::LogLevel;
use idempotence_token::TokenService;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG", default_value = "idempotence-token.yaml")]
    config: String,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Load YAML config, init logging
    // -------------------------------

    let args = Args::parse();
    let service_config = config_loader::run(&args.config).await?;
    logging::run(&service_config, args.log_level);

    // -------------------------------
    // 2. Wire store + generator into the token service
    // -------------------------------

    let token_config = &service_config.token;
    let service = TokenService::new(
        build_store(token_config.store),
        build_generator(token_config.generator, token_config.node_id),
    );
    info!(
        "token service: store={}, generator={}",
        token_config.store.as_str(),
        token_config.generator.as_str()
    );

    // -------------------------------
    // 3. Metrics
    // -------------------------------

    let metrics = Metrics::new()?;

    // -------------------------------
    // 4. Start http server
    // -------------------------------

    let state = AppState::new(Arc::new(service), Arc::new(metrics));
    info!("Service starting...");
    server::server::start(&service_config.settings, state).await
}
