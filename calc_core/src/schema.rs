//! # FAQ Structured Data
//!
//! Converts (question, answer) pairs into a schema.org `FAQPage` JSON-LD
//! object for search engines. An empty list produces nothing, so pages
//! without FAQs emit no script tag at all.
//!
//! ## Output Shape
//!
//! ```json
//! {
//!   "@context": "https://schema.org",
//!   "@type": "FAQPage",
//!   "mainEntity": [
//!     {
//!       "@type": "Question",
//!       "name": "What is a logarithm?",
//!       "acceptedAnswer": { "@type": "Answer", "text": "..." }
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One question and its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        FaqEntry {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Build the `FAQPage` object, or `None` for an empty list.
///
/// # Example
///
/// ```rust
/// use calc_core::schema::{faq_schema, FaqEntry};
///
/// assert!(faq_schema(&[]).is_none());
///
/// let schema = faq_schema(&[FaqEntry::new("What is 2 + 2?", "4")]).unwrap();
/// assert_eq!(schema["@type"], "FAQPage");
/// assert_eq!(schema["mainEntity"][0]["acceptedAnswer"]["text"], "4");
/// ```
pub fn faq_schema(entries: &[FaqEntry]) -> Option<Value> {
    if entries.is_empty() {
        return None;
    }

    let main_entity: Vec<Value> = entries
        .iter()
        .map(|entry| {
            json!({
                "@type": "Question",
                "name": entry.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": entry.answer,
                },
            })
        })
        .collect();

    Some(json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": main_entity,
    }))
}

/// Render the schema as an embeddable `<script type="application/ld+json">` tag.
///
/// `</` inside the JSON is escaped so an answer can never close the script
/// element early.
pub fn faq_script_tag(entries: &[FaqEntry]) -> Option<String> {
    let schema = faq_schema(entries)?;
    let body = schema.to_string().replace("</", "<\\/");
    Some(format!("<script type=\"application/ld+json\">{}</script>", body))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<FaqEntry> {
        vec![
            FaqEntry::new("What is the GCF?", "The largest number that divides all inputs."),
            FaqEntry::new("Can I enter decimals?", "No, only whole numbers."),
        ]
    }

    #[test]
    fn test_empty_list_gives_nothing() {
        assert_eq!(faq_schema(&[]), None);
        assert_eq!(faq_script_tag(&[]), None);
    }

    #[test]
    fn test_well_formed_schema() {
        let schema = faq_schema(&sample()).unwrap();
        assert_eq!(schema["@context"], "https://schema.org");
        assert_eq!(schema["@type"], "FAQPage");

        let entities = schema["mainEntity"].as_array().unwrap();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0]["@type"], "Question");
        assert_eq!(entities[0]["name"], "What is the GCF?");
        assert_eq!(entities[1]["acceptedAnswer"]["@type"], "Answer");
        assert_eq!(entities[1]["acceptedAnswer"]["text"], "No, only whole numbers.");
    }

    #[test]
    fn test_script_tag() {
        let tag = faq_script_tag(&sample()).unwrap();
        assert!(tag.starts_with("<script type=\"application/ld+json\">"));
        assert!(tag.ends_with("</script>"));

        let inner = &tag["<script type=\"application/ld+json\">".len()..tag.len() - "</script>".len()];
        let parsed: Value = serde_json::from_str(inner).unwrap();
        assert_eq!(parsed["@type"], "FAQPage");
    }

    #[test]
    fn test_script_tag_cannot_be_closed_by_answer() {
        let entries = vec![FaqEntry::new("Sneaky?", "</script><b>hi</b>")];
        let tag = faq_script_tag(&entries).unwrap();
        assert_eq!(tag.matches("</script>").count(), 1);
    }
}
