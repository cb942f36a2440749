//! Instruction templates for the completion collaborator.
//!
//! The four service operations differ only in their system instruction and
//! input context; the templates live here so the service code stays free of
//! prompt text.

/// Human-readable form of a field identifier (`chief_complaint` → `chief complaint`).
pub fn display_name(field: &str) -> String {
    field.replace('_', " ")
}

pub const INTERVIEWER_SYSTEM: &str = "You are a medical assistant conducting an initial \
     patient screening. Keep your questions clear, concise, compassionate, and professional. \
     Ask only one question at a time.";

pub const TRANSITION_SYSTEM: &str = "You are a medical assistant conducting a patient \
     screening. Be concise, compassionate, and professional. Ask only one specific question.";

pub fn opening_request(first_field: &str) -> String {
    format!(
        "Start the medical screening interview with an introduction and ask about the {}.",
        display_name(first_field)
    )
}

pub fn condense_system(field: &str) -> String {
    format!(
        "You are a medical assistant extracting key information about a patient's {}. \
         Provide a concise, professional summary of the key medical information in the \
         patient's response.\n\n\
         Important guidelines:\n\
         1. Write in paragraph format\n\
         2. Do not use headings or bold text\n\
         3. Do not include labels like \"{}:\" in your response\n\
         4. Focus only on factual medical information\n\
         5. Use professional but straightforward language",
        display_name(field),
        display_name(field)
    )
}

pub fn transition_request(completed_field: &str, condensed: &str, next_field: &str) -> String {
    format!(
        "The patient just told me about their {}: \"{}\". Now I need to ask about their {}. \
         Generate a smooth transition and ask a specific question about this topic.",
        display_name(completed_field),
        condensed,
        display_name(next_field)
    )
}

pub const REPORT_SYSTEM: &str = "You are a medical professional creating a concise summary \
     report from patient screening data. Provide a professional medical assessment based on \
     the information provided.\n\n\
     Important formatting guidelines:\n\
     1. Format your response as a single cohesive paragraph of 3-5 sentences\n\
     2. Do not use bullet points, lists, or headings\n\
     3. Do not use any markdown formatting like bold or italics\n\
     4. Use professional medical terminology but ensure it's understandable to non-specialists\n\
     5. Focus on synthesizing the key medical insights rather than listing all data points\n\
     6. Start with the chief complaint, then cover key symptoms, and end with relevant medical context\n\
     7. Keep it concise but comprehensive";

pub fn report_request(fields: &[(String, String)]) -> String {
    let field_lines = fields
        .iter()
        .map(|(field, value)| {
            let value = if value.trim().is_empty() {
                "N/A"
            } else {
                value.as_str()
            };
            format!("{}: {}", display_name(field), value)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Generate a concise yet comprehensive medical summary report from the following \
         patient screening data:\n\n{}",
        field_lines
    )
}

// Deterministic fallbacks returned when the collaborator is unavailable.

pub const FALLBACK_OPENING: &str =
    "Hello, I'm here to help with your medical screening. What brings you in today?";

pub fn fallback_question(field: &str) -> String {
    format!("Could you tell me about your {}?", display_name(field))
}

pub const FALLBACK_REPORT: &str =
    "Error generating medical report. Please contact your healthcare provider.";
