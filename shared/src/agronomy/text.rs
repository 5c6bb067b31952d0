//! Cleanup of AI analysis text

/// Markup the language model leaks into its answers
const MODEL_MARKUP: &[&str] = &["<s>", "</s>", "**", "##", "`"];

/// Strip model markup and surrounding whitespace; `None` becomes an empty string
pub fn clean_analysis_text(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    MODEL_MARKUP
        .iter()
        .fold(text.to_string(), |acc, token| acc.replace(token, ""))
        .trim()
        .to_string()
}
