//! Conversation delivery over the Bedrock Converse API.
//!
//! The Converse API takes system prompts as a separate list of blocks and
//! requires the message turns to start with a user message and alternate.
//! [`Conversation`] already has that shape, so mapping is one-to-one.

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use notecraft_core::models::conversation::{ChatRole, Conversation};
use notecraft_core::models::token_count::TokenCount;

use crate::error::BedrockError;
use crate::tokens;

/// Sampling parameters for a single call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InferenceSettings {
    pub temperature: f32,
    pub max_tokens: i32,
}

impl Default for InferenceSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 1500,
        }
    }
}

impl InferenceSettings {
    fn to_configuration(self) -> InferenceConfiguration {
        InferenceConfiguration::builder()
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .build()
    }
}

/// The assistant's reply text and what it cost in tokens.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub text: String,
    pub usage: TokenCount,
}

/// Map a conversation onto Converse system blocks and messages.
pub fn to_converse_input(
    conversation: &Conversation,
) -> Result<(Vec<SystemContentBlock>, Vec<Message>), BedrockError> {
    let system = conversation
        .system
        .iter()
        .map(|text| SystemContentBlock::Text(text.clone()))
        .collect();

    let messages = conversation
        .messages
        .iter()
        .map(|msg| {
            let role = match msg.role {
                ChatRole::User => ConversationRole::User,
                ChatRole::Assistant => ConversationRole::Assistant,
            };
            Message::builder()
                .role(role)
                .content(ContentBlock::Text(msg.content.clone()))
                .build()
                .map_err(|e| BedrockError::Invocation(e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((system, messages))
}

/// Send a conversation to `model_id` and return the assistant's reply.
pub async fn converse(
    client: &Client,
    model_id: &str,
    conversation: &Conversation,
    settings: InferenceSettings,
) -> Result<ChatReply, BedrockError> {
    let (system, messages) = to_converse_input(conversation)?;

    info!(
        model = model_id,
        turns = messages.len(),
        temperature = settings.temperature,
        max_tokens = settings.max_tokens,
        "sending conversation"
    );

    let response = client
        .converse()
        .model_id(model_id)
        .set_system(Some(system))
        .set_messages(Some(messages))
        .inference_config(settings.to_configuration())
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    if text.trim().is_empty() {
        return Err(BedrockError::EmptyResponse);
    }

    let usage = tokens::extract_token_usage(response.usage());

    info!(
        model = model_id,
        input_tokens = usage.input,
        output_tokens = usage.output,
        total_tokens = usage.total(),
        "conversation reply received"
    );

    Ok(ChatReply { text, usage })
}
