use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use notecraft_bedrock::notes::{DEFAULT_GENERATE_MODEL, DEFAULT_REWRITE_MODEL};

const DEFAULT_BIND: &str = "127.0.0.1:8080";
const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_APPROVED_NOTES: &str = "approved_notes.txt";

/// Server settings, read from the environment with local-development
/// defaults.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub region: String,
    pub approved_notes_path: PathBuf,
    pub generate_model: String,
    pub rewrite_model: String,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Unset keys fall back
    /// to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bind_raw = lookup("NOTECRAFT_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .parse()
            .map_err(|e| eyre::eyre!("invalid NOTECRAFT_BIND {bind_raw:?}: {e}"))?;

        Ok(Self {
            bind,
            region: lookup("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            approved_notes_path: lookup("NOTECRAFT_APPROVED_NOTES")
                .unwrap_or_else(|| DEFAULT_APPROVED_NOTES.to_string())
                .into(),
            generate_model: lookup("NOTECRAFT_GENERATE_MODEL")
                .unwrap_or_else(|| DEFAULT_GENERATE_MODEL.to_string()),
            rewrite_model: lookup("NOTECRAFT_REWRITE_MODEL")
                .unwrap_or_else(|| DEFAULT_REWRITE_MODEL.to_string()),
        })
    }
}
