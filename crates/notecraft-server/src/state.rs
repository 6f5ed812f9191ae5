use std::sync::Arc;

use aws_sdk_bedrockruntime::Client as BedrockClient;

use notecraft_storage::approved::ApprovedNotes;

use crate::config::ServerConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub bedrock: BedrockClient,
    pub approved: Arc<ApprovedNotes>,
    pub generate_model: String,
    pub rewrite_model: String,
}

impl AppState {
    pub fn new(config: &ServerConfig, bedrock: BedrockClient) -> Self {
        Self {
            bedrock,
            approved: Arc::new(ApprovedNotes::new(&config.approved_notes_path)),
            generate_model: config.generate_model.clone(),
            rewrite_model: config.rewrite_model.clone(),
        }
    }
}
