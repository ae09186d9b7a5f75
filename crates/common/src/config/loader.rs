use crate::config::connection::CatalogConnectionConfig;
use crate::config::error::ConfigError;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONNECTION_FILE_NAME: &str = "catalog-connection.yml";
pub const HOST_PORT_ENV: &str = "CATALOG_HOST_PORT";
pub const JWT_TOKEN_ENV: &str = "CATALOG_JWT_TOKEN";

/// Load a connection config from an explicit YAML file and apply the
/// `CATALOG_*` environment overrides on top.
pub fn load_connection_config(path: &Path) -> Result<CatalogConnectionConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::missing_connection(path));
    }
    info!("loading catalog connection from {}", path.display());
    let file = fs::File::open(path)?;
    let config: CatalogConnectionConfig = serde_yaml::from_reader(file)?;

    let config = apply_overrides(config, |key| env::var(key).ok());
    validate(&config)?;
    Ok(config)
}

/// Resolve `catalog-connection.yml` inside `config_dir`, or the working
/// directory when no directory is given.
pub fn read_connection_config(
    config_dir: Option<PathBuf>,
) -> Result<CatalogConnectionConfig, ConfigError> {
    let path = match config_dir {
        Some(dir) => dir.join(CONNECTION_FILE_NAME),
        None => PathBuf::from(CONNECTION_FILE_NAME),
    };
    load_connection_config(&path)
}

/// Apply overrides looked up through `lookup`, keyed by the `CATALOG_*`
/// variable names.
pub fn apply_overrides<F>(mut config: CatalogConnectionConfig, lookup: F) -> CatalogConnectionConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host_port) = lookup(HOST_PORT_ENV) {
        debug!("{} overrides hostPort", HOST_PORT_ENV);
        config.host_port = host_port;
    }
    if let Some(token) = lookup(JWT_TOKEN_ENV) {
        debug!("{} overrides securityConfig.jwtToken", JWT_TOKEN_ENV);
        config = config.with_jwt(token);
    }
    config
}

fn validate(config: &CatalogConnectionConfig) -> Result<(), ConfigError> {
    let host = config.host_port.trim();
    if host.is_empty() {
        return Err(ConfigError::invalid_value("hostPort", "must not be empty"));
    }
    if !(host.starts_with("http://") || host.starts_with("https://")) {
        return Err(ConfigError::invalid_value(
            "hostPort",
            format!("must be an http(s) URL, got '{host}'"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::connection::AuthProvider;
    use std::io::Write;
    use tempfile::tempdir;
    use test_utils::with_chdir;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join(CONNECTION_FILE_NAME);
        let mut file = fs::File::create(&path).expect("create config file");
        file.write_all(contents.as_bytes()).expect("write config");
        path
    }

    #[test]
    fn loads_yaml_connection() -> Result<(), ConfigError> {
        let dir = tempdir()?;
        let path = write_config(
            dir.path(),
            "hostPort: http://catalog:8585/api\nauthProvider: openmetadata\nsecurityConfig:\n  jwtToken: abc\n",
        );

        let config = load_connection_config(&path)?;
        assert_eq!(config.auth_provider, AuthProvider::Openmetadata);
        assert_eq!(config.bearer_token(), Some("abc"));
        Ok(())
    }

    #[test]
    fn no_auth_has_no_bearer_token() -> Result<(), ConfigError> {
        let dir = tempdir()?;
        write_config(
            dir.path(),
            "hostPort: http://localhost:8585/api\nauthProvider: no-auth\n",
        );

        let config = read_connection_config(Some(dir.path().to_path_buf()))?;
        assert_eq!(config.auth_provider, AuthProvider::NoAuth);
        assert_eq!(config.bearer_token(), None);
        Ok(())
    }

    #[test]
    fn reads_from_working_directory() -> Result<(), ConfigError> {
        let dir = tempdir()?;
        write_config(dir.path(), "hostPort: https://example.org/api\n");

        let config = with_chdir(dir.path(), || read_connection_config(None))??;
        assert_eq!(config.security_config, None);
        Ok(())
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempdir().expect("tempdir");
        let err = read_connection_config(Some(dir.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, ConfigError::MissingConnection { .. }));
    }

    #[test]
    fn rejects_non_http_host() -> Result<(), ConfigError> {
        let dir = tempdir()?;
        let path = write_config(dir.path(), "hostPort: localhost:8585\n");

        let err = load_connection_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    }

    #[test]
    fn overrides_take_precedence() {
        let base = CatalogConnectionConfig::new("http://localhost:8585/api");
        let config = apply_overrides(base, |key| match key {
            HOST_PORT_ENV => Some("http://other:9000/api".to_string()),
            JWT_TOKEN_ENV => Some("tok".to_string()),
            _ => None,
        });
        assert_eq!(config.host_port, "http://other:9000/api");
        assert_eq!(config.bearer_token(), Some("tok"));
    }
}
