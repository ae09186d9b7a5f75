pub mod connection;
pub mod error;
pub mod loader;

pub use connection::{AuthProvider, CatalogConnectionConfig, JwtClientConfig};
pub use error::ConfigError;
pub use loader::{load_connection_config, read_connection_config};
