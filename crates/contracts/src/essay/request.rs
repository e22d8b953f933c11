use super::attachment::Attachment;
use super::evaluation::EvaluationError;
use super::model_id::ModelId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current, possibly incomplete, contents of the essay form.
///
/// Submit policy: topic, content and model are all required. Text fields
/// count as present only when non-empty after trimming. The attachment is
/// optional and never stands in for the content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EssayDraft {
    pub topic: String,
    pub content: String,
    pub model_id: Option<ModelId>,
    pub attachment: Option<Attachment>,
}

impl EssayDraft {
    pub fn can_submit(&self) -> bool {
        self.missing_field().is_none()
    }

    /// First required field that is still empty, in form order
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.topic.trim().is_empty() {
            return Some("tema");
        }
        if self.content.trim().is_empty() {
            return Some("conteúdo");
        }
        if self.model_id.is_none() {
            return Some("modelo");
        }
        None
    }

    /// Freezes the draft into a request with a fresh submission id.
    pub fn to_request(&self) -> Result<EssayRequest, EvaluationError> {
        if let Some(field) = self.missing_field() {
            return Err(EvaluationError::Validation(format!("campo obrigatório: {}", field)));
        }
        let model_id = self
            .model_id
            .ok_or_else(|| EvaluationError::Validation("campo obrigatório: modelo".into()))?;

        Ok(EssayRequest {
            submission_id: Uuid::new_v4(),
            topic: self.topic.trim().to_string(),
            content: self.content.trim().to_string(),
            model_id,
            attachment: self.attachment.clone(),
            submitted_at: Utc::now(),
        })
    }
}

/// Payload sent to the evaluation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EssayRequest {
    pub submission_id: Uuid,
    pub topic: String,
    pub content: String,
    pub model_id: ModelId,
    pub attachment: Option<Attachment>,
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(topic: &str, content: &str, model_id: Option<ModelId>) -> EssayDraft {
        EssayDraft {
            topic: topic.into(),
            content: content.into(),
            model_id,
            attachment: None,
        }
    }

    #[test]
    fn test_policy_requires_all_three_fields() {
        for topic in ["", "Meio ambiente"] {
            for content in ["", "texto..."] {
                for model_id in [None, Some(ModelId::Gemini)] {
                    let expected = !topic.is_empty() && !content.is_empty() && model_id.is_some();
                    assert_eq!(
                        draft(topic, content, model_id).can_submit(),
                        expected,
                        "topic={:?} content={:?} model={:?}",
                        topic,
                        content,
                        model_id
                    );
                }
            }
        }
    }

    #[test]
    fn test_whitespace_only_fields_are_empty() {
        assert!(!draft("   ", "texto", Some(ModelId::Gemini)).can_submit());
        assert!(!draft("Tema", "\n\t ", Some(ModelId::Gemini)).can_submit());
    }

    #[test]
    fn test_attachment_does_not_replace_content() {
        let mut d = draft("Tema", "", Some(ModelId::Maritaca));
        d.attachment = Some(Attachment::accept("redacao.png", 1024).unwrap());
        assert!(!d.can_submit());
        assert_eq!(d.missing_field(), Some("conteúdo"));
    }

    #[test]
    fn test_missing_field_follows_form_order() {
        assert_eq!(draft("", "", None).missing_field(), Some("tema"));
        assert_eq!(draft("Tema", "", None).missing_field(), Some("conteúdo"));
        assert_eq!(draft("Tema", "x", None).missing_field(), Some("modelo"));
        assert_eq!(draft("Tema", "x", Some(ModelId::DeepSeek)).missing_field(), None);
    }

    #[test]
    fn test_to_request_trims_and_assigns_id() {
        let d = draft("  Meio ambiente ", " texto... ", Some(ModelId::Gemini));
        let a = d.to_request().unwrap();
        let b = d.to_request().unwrap();
        assert_eq!(a.topic, "Meio ambiente");
        assert_eq!(a.content, "texto...");
        assert_eq!(a.model_id, ModelId::Gemini);
        assert_ne!(a.submission_id, b.submission_id);
    }

    #[test]
    fn test_to_request_on_incomplete_draft_is_validation_error() {
        let err = draft("", "x", Some(ModelId::Gemini)).to_request().unwrap_err();
        assert_eq!(err, EvaluationError::Validation("campo obrigatório: tema".into()));
    }
}
