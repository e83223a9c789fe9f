//! fishdesk application entry point.
//!
//! Loads configuration, builds the selected backend and the service
//! facades, and reports the state of the data set.

mod config;

use fishdesk_auth::{AuthError, build_codec};
use fishdesk_core::FishdeskError;
use fishdesk_core::query::ListQuery;
use fishdesk_db::{Backend, DbError};
use fishdesk_service::{AccountService, StatisticsService, TenantService};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("password codec: {0}")]
    Codec(#[from] AuthError),

    #[error("backend: {0}")]
    Backend(#[from] DbError),

    #[error(transparent)]
    Service(#[from] FishdeskError),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fishdesk=info")),
        )
        .json()
        .init();

    info!("Starting fishdesk...");

    if let Err(e) = run().await {
        error!(error = %e, "fishdesk failed to start");
        std::process::exit(1);
    }

    info!("fishdesk stopped.");
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    info!(
        mode = ?config.backend.mode,
        codec = ?config.auth.codec,
        simulate_latency = config.service.simulate_latency,
        "Configuration loaded"
    );

    let codec = build_codec(&config.auth)?;
    let backend = Backend::from_config(&config.backend, &config.seed, codec.clone())?;

    let tenants = TenantService::new(backend.clone(), &config.service);
    let accounts = AccountService::new(backend.clone(), codec, &config.service);
    let statistics = StatisticsService::new(backend, &config.service);

    let page = tenants.list_tenants(ListQuery::new().excluding_test()).await?;
    info!(
        tenants = page.items.len(),
        has_more = !page.is_last(),
        "Loaded first tenant page"
    );

    if let Some(first) = page.items.first() {
        let details = tenants.get_tenant_with_members(&first.id).await?;
        if let Some(member) = details.members.first() {
            let member = accounts.get_account(&member.id).await?;
            info!(
                tenant_id = %first.id,
                members = details.members.len(),
                member_devices = member.map_or(0, |m| m.device_count()),
                "Loaded tenant members"
            );
        }
    }

    let stats = statistics.dashboard_stats().await?;
    info!(
        total_tenants = stats.total_tenants,
        total_fisher_users = stats.total_fisher_users,
        total_devices = stats.total_devices,
        open_accidents = stats.open_accidents,
        "Dashboard statistics"
    );

    Ok(())
}
