use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::{Context, Result};
use audius_tip_action::{
    actions::{self, TipService},
    audius::AudiusProfileResolver,
    chain::{RpcBlockhashSource, TipTransactionBuilder},
    config::Config,
};
use solana_client::nonblocking::rpc_client::RpcClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[actix_web::main]
async fn main() -> Result<()> {
    // ========================================================================
    // Step 1: Load configuration using Config::load()
    // ========================================================================
    let config = Config::load().context("Failed to load configuration")?;

    // ========================================================================
    // Step 2: Initialize tracing subscriber with EnvFilter
    // ========================================================================
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Failed to create EnvFilter")?;

    let (text_layer, json_layer) = if config.log_json {
        (None, Some(fmt::layer().json().with_current_span(false)))
    } else {
        (Some(fmt::layer()
            .with_target(false)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
        ), None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(text_layer)
        .with(json_layer)
        .init();

    info!("🚀 Starting Audius tip action service...");
    debug!("Config: {:?}", config);

    // ========================================================================
    // Step 3: Initialize upstream clients
    // ========================================================================
    let rpc_client = Arc::new(RpcClient::new_with_timeout_and_commitment(
        config.rpc.url.clone(),
        Duration::from_secs(config.rpc.timeout_seconds),
        config.rpc.commitment,
    ));
    info!("✅ RPC client initialized");
    info!("   RPC: {}", config.rpc.url);
    info!("   Commitment: {:?}", config.rpc.commitment.commitment);

    let resolver = AudiusProfileResolver::new(config.audius.api_url.clone(), config.audius.timeout)
        .context("Failed to create Audius HTTP client")?;
    info!("✅ Audius profile resolver initialized: {}", config.audius.api_url);

    let builder = TipTransactionBuilder::new(
        Arc::new(RpcBlockhashSource::new(rpc_client, config.rpc.commitment)),
        config.tip.recipient_account,
    );
    info!("✅ Transaction builder initialized");
    info!("   Mint: {}", builder.mint());
    info!("   Recipient account: {:?}", builder.recipient_account());

    let service = web::Data::new(TipService::new(Arc::new(resolver), builder));

    // ========================================================================
    // Step 4: Start HTTP server
    // ========================================================================
    info!("🌐 Listening on {}", config.server.addr);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(actions::action_headers())
            .wrap(actions::cors())
            .app_data(service.clone())
            .configure(actions::init_routes)
    })
    .bind(&config.server.addr)
    .with_context(|| format!("Failed to bind {}", config.server.addr))?;

    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    server.run().await.context("HTTP server failed")?;

    info!("👋 Shutting down...");
    Ok(())
}
