use super::model_id::ModelId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest grade on the ENEM essay scale
pub const MAX_GRADE: f64 = 1000.0;

/// Grading returned by the evaluation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub model_id: ModelId,
    /// Grade in 0..=1000
    pub grade: f64,
    /// Step-by-step reasoning produced by the model
    pub reasoning: String,
    /// Feedback addressed to the student
    pub feedback: String,
    /// No model was consulted; `grade` carries no meaning
    #[serde(default)]
    pub simulated: bool,
}

impl EvaluationResult {
    /// Result reported when no model was actually consulted
    pub fn simulated(model_id: ModelId) -> Self {
        Self {
            model_id,
            grade: 0.0,
            reasoning: String::new(),
            feedback: format!(
                "Avaliação simulada: o modelo {} ainda não foi consultado.",
                model_id
            ),
            simulated: true,
        }
    }

    /// "880 / 1000" for a real grading, `None` for a simulated one.
    pub fn grade_label(&self) -> Option<String> {
        if self.simulated {
            return None;
        }
        Some(format!("{:.0} / {:.0}", self.grade, MAX_GRADE))
    }

    pub fn validate(&self) -> Result<(), EvaluationError> {
        if !(0.0..=MAX_GRADE).contains(&self.grade) {
            return Err(EvaluationError::Network(format!(
                "nota fora do intervalo 0-1000: {}",
                self.grade
            )));
        }
        Ok(())
    }
}

/// Failures of an evaluation call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error("Não foi possível contatar o serviço de avaliação: {0}")]
    Network(String),

    #[error("Dados da redação incompletos: {0}")]
    Validation(String),

    #[error("O modelo {0} não está disponível no momento.")]
    ModelUnavailable(ModelId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_json_shape() {
        let json = r#"{
            "model_id": "gemini",
            "grade": 880.0,
            "reasoning": "C1: 160, C2: 200",
            "feedback": "Bom repertório."
        }"#;
        let result: EvaluationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.model_id, ModelId::Gemini);
        assert_eq!(result.grade, 880.0);
        assert!(!result.simulated);
        assert!(result.validate().is_ok());
        assert_eq!(result.grade_label().as_deref(), Some("880 / 1000"));
    }

    #[test]
    fn test_simulated_result_has_no_grade_label() {
        let result = EvaluationResult::simulated(ModelId::Gemini);
        assert!(result.simulated);
        assert_eq!(result.grade_label(), None);
        assert!(result.feedback.contains("Gemini Pro (Google)"));
    }

    #[test]
    fn test_out_of_range_grade_is_rejected() {
        let mut result = EvaluationResult::simulated(ModelId::Maritaca);
        result.grade = 1200.0;
        assert!(matches!(result.validate(), Err(EvaluationError::Network(_))));
    }

    #[test]
    fn test_error_messages_name_the_model() {
        let err = EvaluationError::ModelUnavailable(ModelId::DeepSeek);
        assert_eq!(err.to_string(), "O modelo DeepSeek não está disponível no momento.");
    }
}
