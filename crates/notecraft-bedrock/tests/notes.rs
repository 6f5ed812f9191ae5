//! Note workflow tests.
//!
//! Validation tests run offline: invalid requests are rejected before any
//! call is made. The live test calls Bedrock and requires valid AWS
//! credentials in the environment.
//!
//! Run with: `cargo test -p notecraft-bedrock --test notes -- --ignored`

use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockruntime::Client;

use notecraft_bedrock::error::BedrockError;
use notecraft_bedrock::notes::{
    advance_progress_note, convert_note, generate_note, DEFAULT_GENERATE_MODEL,
};
use notecraft_core::error::CoreError;
use notecraft_core::models::note::{
    ConvertNoteRequest, GenerateNoteRequest, NoteKind, ProgressNoteRequest,
};

fn offline_client() -> Client {
    let config = aws_sdk_bedrockruntime::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .build();
    Client::from_conf(config)
}

fn generate_request(case_details: &str) -> GenerateNoteRequest {
    GenerateNoteRequest {
        example_notes: "# HTN\n- continue amlodipine".to_string(),
        case_details: case_details.to_string(),
        note_format: None,
        problem_list_format: None,
        use_icd10: false,
        include_qol: true,
        custom_instruction: String::new(),
        model_id: None,
    }
}

#[tokio::test]
async fn generate_rejects_blank_case_before_calling_bedrock() {
    let err = generate_note(&offline_client(), DEFAULT_GENERATE_MODEL, &generate_request(""))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        BedrockError::InvalidRequest(CoreError::MissingField(ref f)) if f == "case_details"
    ));
}

#[tokio::test]
async fn convert_rejects_blank_examples() {
    let request = ConvertNoteRequest {
        example_notes: " ".to_string(),
        note: "pt stable".to_string(),
        model_id: None,
    };
    let err = convert_note(&offline_client(), DEFAULT_GENERATE_MODEL, &request)
        .await
        .unwrap_err();

    assert!(matches!(err, BedrockError::InvalidRequest(_)));
}

#[tokio::test]
async fn progress_rejects_blank_previous_note() {
    let request = ProgressNoteRequest {
        example_notes: "1. CHF".to_string(),
        previous_note: String::new(),
        model_id: None,
    };
    let err = advance_progress_note(&offline_client(), DEFAULT_GENERATE_MODEL, &request)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        BedrockError::InvalidRequest(CoreError::MissingField(ref f)) if f == "previous_note"
    ));
}

#[tokio::test]
#[ignore]
async fn generate_note_against_live_bedrock() {
    let client = notecraft_bedrock::client::build_client_with_region("us-east-1").await;
    let draft = generate_note(
        &client,
        DEFAULT_GENERATE_MODEL,
        &generate_request("58F with cellulitis of left leg, afebrile, WBC 11."),
    )
    .await
    .expect("generate_note should succeed");

    println!("{}", draft.text);
    assert_eq!(draft.kind, NoteKind::Generated);
    assert!(!draft.text.trim().is_empty());
    assert!(draft.instruction.is_some());
}
