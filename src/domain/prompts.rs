//! Prompt templates for transcript analysis
//!
//! Provides the fixed system and user prompts for the LLM completion call.
//! The user template carries a `{transcript}` placeholder that the analysis
//! service substitutes before dispatch.

/// Fixed prompt templates for the analysis workflow
pub struct PromptTemplates;

impl PromptTemplates {
    /// System prompt framing the model's role
    pub fn system() -> &'static str {
        "You are an expert meeting analyst. You read call and meeting transcripts, \
         distill what was discussed into a brief, insightful summary, and recommend \
         concrete next actions. Respond with a JSON object containing a 'summary' \
         string and an 'action_items' array of strings."
    }

    /// User prompt template with the transcript placeholder
    pub fn user() -> &'static str {
        r#"Analyze the following transcript. Provide a concise summary of the discussion and a list of recommended action items based on what was said.

Transcript:
{transcript}"#
    }
}
