//! Defensive cleanup of collaborator output.
//!
//! The completion collaborator is instructed to return plain paragraphs, but
//! models routinely echo markdown markers or a leading field-name label
//! anyway. Every service operation routes its output through these helpers
//! before returning it.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_MARKERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*#+\s*").expect("valid heading pattern"));

static BULLET_MARKERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*(?:[-*•]\s+)+").expect("valid bullet pattern"));

static REPEATED_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Strip markdown bold and heading/bullet markers from collaborator output.
pub fn strip_markup(text: &str) -> String {
    let without_bold = text.replace("**", "");
    let without_headings = HEADING_MARKERS.replace_all(&without_bold, "");
    BULLET_MARKERS.replace_all(&without_headings, "").into_owned()
}

/// Strip a leading "<field label>:" echo of the instruction context.
///
/// Case-insensitive; matches both the raw identifier (`chief_complaint:`)
/// and its display form (`chief complaint:`).
pub fn strip_field_label(text: &str, field: &str) -> String {
    let trimmed = text.trim_start();
    let display = field.replace('_', " ");
    for label in [field, display.as_str()] {
        let Some(prefix) = trimmed.get(..label.len()) else {
            continue;
        };
        if !prefix.eq_ignore_ascii_case(label) {
            continue;
        }
        let Some(rest) = trimmed.get(label.len()..) else {
            continue;
        };
        if let Some(stripped) = rest.trim_start().strip_prefix(':') {
            return stripped.trim_start().to_string();
        }
    }
    trimmed.to_string()
}

/// Collapse all runs of whitespace (including newlines) into single spaces,
/// producing one trimmed paragraph.
pub fn to_paragraph(text: &str) -> String {
    REPEATED_WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Full cleanup applied to condensed fragments and the final narrative.
///
/// Runs to a fixpoint so the result is stable under re-application: label
/// stripping can expose markup and vice versa. Every pass shrinks the text,
/// so the loop terminates.
pub fn clean_fragment(text: &str, field: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = strip_field_label(&to_paragraph(&strip_markup(&current)), field);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Cleanup applied to generated questions, where no field label is expected.
pub fn clean_question(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = to_paragraph(&strip_markup(&current));
        if next == current {
            return current;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strips_bold_and_headings() {
        let cleaned = clean_fragment("## Summary\n**Severe** headache for two days", "symptoms");
        assert_eq!(cleaned, "Summary Severe headache for two days");
    }

    #[test]
    fn test_strips_leading_field_label() {
        let cleaned = clean_fragment("Chief complaint: persistent cough", "chief_complaint");
        assert_eq!(cleaned, "persistent cough");
    }

    #[test]
    fn test_strips_raw_identifier_label() {
        let cleaned = clean_fragment("chief_complaint: persistent cough", "chief_complaint");
        assert_eq!(cleaned, "persistent cough");
    }

    #[test]
    fn test_strips_bolded_label() {
        let cleaned = clean_fragment("**Chief complaint**: persistent cough", "chief_complaint");
        assert_eq!(cleaned, "persistent cough");
    }

    #[test]
    fn test_label_in_midsentence_is_kept() {
        let cleaned = clean_fragment(
            "Patient reports the chief complaint: cough is worsening",
            "chief_complaint",
        );
        assert!(cleaned.contains("chief complaint"));
    }

    #[test]
    fn test_bullets_joined_into_paragraph() {
        let cleaned = clean_fragment("- fever\n- chills\n- night sweats", "symptoms");
        assert_eq!(cleaned, "fever chills night sweats");
    }

    #[test]
    fn test_question_cleanup_preserves_punctuation() {
        let cleaned = clean_question("**Thank you.** Could you tell me about your allergies?");
        assert_eq!(cleaned, "Thank you. Could you tell me about your allergies?");
    }

    proptest! {
        #[test]
        fn prop_no_markup_survives_cleanup(input in ".{0,200}") {
            let cleaned = clean_fragment(&input, "medical_history");
            prop_assert!(!cleaned.contains("**"));
            prop_assert!(!cleaned.starts_with('#'));
            prop_assert!(!cleaned.contains('\n'));
        }

        #[test]
        fn prop_cleanup_is_idempotent(input in ".{0,200}") {
            let once = clean_fragment(&input, "symptoms");
            let twice = clean_fragment(&once, "symptoms");
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_injected_label_always_removed(body in "[a-zA-Z ]{1,80}") {
            let labelled = format!("Chief Complaint: {}", body);
            let cleaned = clean_fragment(&labelled, "chief_complaint");
            prop_assert!(!cleaned.to_lowercase().starts_with("chief complaint:"));
        }
    }
}
