use serde::Deserialize;

fn default_database_url() -> String {
    "shelfsort.db".to_string()
}

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}

/// Configuration options for the Shelfsort server, loaded from `config.yaml`
/// and the environment.
#[derive(Clone, Deserialize)]
pub struct ServerConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Shared secret used to validate admin JWT bearer tokens.
    pub jwt_secret: String,
}
