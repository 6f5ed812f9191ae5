use notecraft_core::error::CoreError;
use notecraft_core::models::conversation::ChatRole;
use notecraft_core::models::format::{NoteFormat, ProblemListFormat};
use notecraft_core::models::note::{ConvertNoteRequest, GenerateNoteRequest, ProgressNoteRequest};
use notecraft_core::prompt::{
    convert_note_conversation, generate_note_conversation, progress_note_conversation,
};

fn generate_request() -> GenerateNoteRequest {
    GenerateNoteRequest {
        example_notes: "# Diabetes\n- continue metformin".to_string(),
        case_details: "65M with chest pain, troponin negative.".to_string(),
        note_format: None,
        problem_list_format: None,
        use_icd10: false,
        include_qol: false,
        custom_instruction: String::new(),
        model_id: None,
    }
}

#[test]
fn generate_detects_formats_from_examples() {
    let (conversation, instruction) = generate_note_conversation(&generate_request()).unwrap();

    assert!(instruction.starts_with("Format the note using hashtags structure."));
    assert_eq!(conversation.system.len(), 2);
    assert_eq!(conversation.system[1], instruction);
    assert!(conversation.messages[0]
        .content
        .starts_with("Here is an example note style (Hashtags, problem list: Hashtags):\n"));
    assert!(conversation.messages[2].content.ends_with("troponin negative."));
}

#[test]
fn generate_uses_overrides_over_detection() {
    let mut request = generate_request();
    request.note_format = Some(NoteFormat::PlainText);
    request.problem_list_format = Some(ProblemListFormat::Dashes);

    let (_, instruction) = generate_note_conversation(&request).unwrap();
    assert!(instruction.starts_with(
        "Format the note using plain text structure. Format the problem list using dashes."
    ));
}

#[test]
fn conversations_alternate_starting_with_user() {
    let convert = convert_note_conversation(&ConvertNoteRequest {
        example_notes: "1. HTN".to_string(),
        note: "pt doing ok".to_string(),
        model_id: None,
    })
    .unwrap();
    let progress = progress_note_conversation(&ProgressNoteRequest {
        example_notes: "1. HTN".to_string(),
        previous_note: "Day 1: admitted for CHF".to_string(),
        model_id: None,
    })
    .unwrap();
    let (generate, _) = generate_note_conversation(&generate_request()).unwrap();

    for conversation in [convert, progress, generate] {
        let roles: Vec<ChatRole> = conversation.messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![ChatRole::User, ChatRole::Assistant, ChatRole::User]);
    }
}

#[test]
fn progress_conversation_embeds_previous_note() {
    let conversation = progress_note_conversation(&ProgressNoteRequest {
        example_notes: "- HTN".to_string(),
        previous_note: "Day 1: admitted for CHF".to_string(),
        model_id: None,
    })
    .unwrap();

    assert_eq!(
        conversation.messages[2].content,
        "Previous Progress Note:\nDay 1: admitted for CHF\n\nGenerate an updated version for the next day's progress note."
    );
}

#[test]
fn blank_inputs_are_rejected_by_field() {
    let mut request = generate_request();
    request.case_details = "   \n".to_string();
    let err = generate_note_conversation(&request).unwrap_err();
    assert!(matches!(err, CoreError::MissingField(ref f) if f == "case_details"));

    let err = convert_note_conversation(&ConvertNoteRequest {
        example_notes: String::new(),
        note: "something".to_string(),
        model_id: None,
    })
    .unwrap_err();
    assert!(matches!(err, CoreError::MissingField(ref f) if f == "example_notes"));
}
