use notecraft_core::models::token_count::TokenCount;

/// Extract token counts from a Bedrock Converse response.
pub fn extract_token_usage(
    usage: Option<&aws_sdk_bedrockruntime::types::TokenUsage>,
) -> TokenCount {
    usage
        .map(|u| TokenCount {
            input: u.input_tokens.max(0) as u64,
            output: u.output_tokens.max(0) as u64,
        })
        .unwrap_or_default()
}
