use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use voice_agent_leads::app;
use voice_agent_leads::config::Config;
use voice_agent_leads::handlers::AppState;
use voice_agent_leads::mailer::ResendMailer;

/// Main entry point for the application.
///
/// Initializes logging, loads configuration, builds the mail provider
/// client and serves the intake API.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "voice_agent_leads=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    let mailer = ResendMailer::new(
        config.mail_api_base_url.clone(),
        config.mail_api_key.clone(),
        Duration::from_secs(config.mail_timeout_secs),
    )?;
    tracing::info!("✓ Mail client initialized: {}", config.mail_api_base_url);

    let app_state = Arc::new(AppState {
        mail: config.mail.clone(),
        mailer: Arc::new(mailer),
    });

    // Configure rate limiter: 10 requests/second per IP, burst of 20
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .ok_or_else(|| anyhow::anyhow!("Invalid rate limiter configuration"))?,
    );

    // Health and docs bypass rate limiting
    let intake = app::intake_routes().layer(GovernorLayer {
        config: governor_conf,
    });
    let app = app::router(intake, app_state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
