//! Formatting directive sent alongside every note generation request.

use crate::models::format::{NoteFormat, ProblemListFormat};

const ICD10_CLAUSE: &str = "Use ICD-10 standard terminology for problems.";
const NATURAL_PHRASING_CLAUSE: &str = "Use natural clinical phrasing for problems.";
const QOL_CLAUSE: &str = "Include standard quality-of-life orders like telemetry for chest pain, \
DVT prophylaxis, and IV fluids for dehydration if relevant. ";

/// Compose the formatting instruction for a generation request.
///
/// Clause order is fixed: note structure, problem list style, ICD-10 or
/// natural phrasing, the quality-of-life clause when enabled, then `custom`
/// verbatim. Whitespace is never normalised, so an empty `custom` leaves
/// the trailing separator in place and the output always ends with
/// `custom`.
pub fn compose_instruction(
    style: NoteFormat,
    problem_list_style: ProblemListFormat,
    use_icd10: bool,
    include_qol: bool,
    custom: &str,
) -> String {
    let terminology = if use_icd10 {
        ICD10_CLAUSE
    } else {
        NATURAL_PHRASING_CLAUSE
    };
    let qol = if include_qol { QOL_CLAUSE } else { "" };

    format!(
        "Format the note using {} structure. Format the problem list using {}. {terminology} {qol}{custom}",
        style.phrase(),
        problem_list_style.phrase(),
    )
}
