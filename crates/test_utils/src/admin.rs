use common::config::CatalogConnectionConfig;
use common::config::{read_connection_config, ConfigError};
use common::error::diagnostics::DiagnosticMessage;
use shared_clients::{CatalogApi, CatalogClient, CatalogClientError};
use thiserror::Error;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Error)]
pub enum AdminBootstrapError {
    #[error("catalog config error: {0}")]
    Config(#[from] ConfigError),
    #[error("catalog client error: {0}")]
    Client(#[from] CatalogClientError),
    #[error("catalog is not healthy: {context}")]
    Unhealthy { context: DiagnosticMessage },
}

/// Client logged in as the default admin against the server at `url`
/// (the local default when `None`).
///
/// The server must pass its health check; any failure here means the
/// integration run cannot proceed.
pub async fn int_admin_client(url: Option<&str>) -> Result<CatalogClient, AdminBootstrapError> {
    let mut config = CatalogConnectionConfig::local_admin();
    if let Some(url) = url {
        config.host_port = url.to_string();
    }
    admin_client_from(&config).await
}

pub async fn admin_client_from(
    config: &CatalogConnectionConfig,
) -> Result<CatalogClient, AdminBootstrapError> {
    let client = CatalogClient::new(config)?;
    if !client.health_check().await? {
        return Err(AdminBootstrapError::Unhealthy {
            context: DiagnosticMessage::new(format!(
                "health check against {} failed",
                client.base_url()
            )),
        });
    }
    info!("admin session ready against {}", client.base_url());
    Ok(client)
}

/// Same as [`int_admin_client`] but connection details come from
/// `catalog-connection.yml` in `config_dir` (or the working directory).
pub async fn admin_client_from_file(
    config_dir: Option<PathBuf>,
) -> Result<CatalogClient, AdminBootstrapError> {
    let config = read_connection_config(config_dir)?;
    admin_client_from(&config).await
}
