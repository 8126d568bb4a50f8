use std::time::Duration;

use color_eyre::eyre::Result;
use driftmail_adapters::config::Settings;
use driftmail_adapters::{MailTmClient, PostgresLinkedAccountStore, SupabaseIdentityClient};
use driftmail_service::{DriftmailService, configure_postgresql};
use reqwest::Client as HttpClient;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    // Load configuration
    let config = Settings::load();

    // Setup database connection pool and run migrations
    let pg_pool = configure_postgresql().await;

    // Remote clients are constructed once and cloned into each route
    let mailbox_http_client = HttpClient::builder()
        .timeout(Duration::from_millis(
            config.mailbox_provider.timeout_in_millis,
        ))
        .build()?;
    let identity_http_client = HttpClient::builder()
        .timeout(Duration::from_millis(
            config.identity_backend.timeout_in_millis,
        ))
        .build()?;

    let mailbox_provider = MailTmClient::new(
        config.mailbox_provider.base_url.clone(),
        mailbox_http_client,
    );
    let identity_backend = SupabaseIdentityClient::new(
        config.identity_backend.base_url.clone(),
        config.identity_backend.anon_key.clone(),
        identity_http_client,
    );
    let linked_accounts = PostgresLinkedAccountStore::new(pg_pool);

    // Create the account service
    let service = DriftmailService::new(
        mailbox_provider,
        identity_backend,
        linked_accounts,
        config.identity_backend.redirect_to.clone(),
        config.app.assets_dir.clone(),
    );

    // Run as standalone server
    let listener = tokio::net::TcpListener::bind(&config.app.address).await?;
    tracing::info!("Starting driftmail account service...");

    service.run_standalone(listener).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
