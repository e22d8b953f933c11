//! Essay form - Model Layer
//!
//! The evaluation collaborator and its two implementations: a stub that
//! simulates the call and an HTTP client for the grading service.

use crate::config::{EvaluatorConfig, EvaluatorMode};
use crate::shared::api_utils::resolve_endpoint;
use async_trait::async_trait;
use contracts::essay::{EssayRequest, EvaluationError, EvaluationResult, ModelId};
use gloo_net::http::Request;
use serde::Deserialize;
use std::rc::Rc;
use web_sys::{File, FormData};

/// Performs the grading of one essay
///
/// `file` is the browser handle of `request.attachment`, when the user
/// picked or dropped one.
#[async_trait(?Send)]
pub trait Evaluator {
    async fn evaluate(
        &self,
        request: &EssayRequest,
        file: Option<&File>,
    ) -> Result<EvaluationResult, EvaluationError>;
}

/// Waits a fixed delay, then reports a simulated success
pub struct StubEvaluator {
    pub delay_ms: u32,
}

#[async_trait(?Send)]
impl Evaluator for StubEvaluator {
    async fn evaluate(
        &self,
        request: &EssayRequest,
        file: Option<&File>,
    ) -> Result<EvaluationResult, EvaluationError> {
        log::info!(
            "Essay evaluation submitted (stub): id={} topic='{}' model={} content_len={} attachment={:?} file_handle={}",
            request.submission_id,
            request.topic,
            request.model_id.as_str(),
            request.content.chars().count(),
            request.attachment.as_ref().map(|a| a.file_name.as_str()),
            file.is_some(),
        );
        gloo_timers::future::TimeoutFuture::new(self.delay_ms).await;
        Ok(EvaluationResult::simulated(request.model_id))
    }
}

/// Sends the request to the grading service.
///
/// Without a file the body is the request JSON. With one it is
/// `multipart/form-data` holding a `request` part (the same JSON) and an
/// `attachment` part with the file bytes. Attachment metadata restored
/// without a browser handle travels in the JSON only.
pub struct HttpEvaluator {
    pub url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[async_trait(?Send)]
impl Evaluator for HttpEvaluator {
    async fn evaluate(
        &self,
        request: &EssayRequest,
        file: Option<&File>,
    ) -> Result<EvaluationResult, EvaluationError> {
        let builder = Request::post(&self.url).header("Accept", "application/json");
        let prepared = match file {
            Some(file) => builder.body(multipart_body(request, file)?),
            None => builder.json(request),
        };

        let response = prepared
            .map_err(|e| EvaluationError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| EvaluationError::Network(e.to_string()))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or(body);
            return Err(classify_status(response.status(), request.model_id, detail));
        }

        let result: EvaluationResult = response
            .json()
            .await
            .map_err(|e| EvaluationError::Network(format!("resposta inválida: {}", e)))?;
        result.validate()?;
        Ok(result)
    }
}

fn multipart_body(request: &EssayRequest, file: &File) -> Result<FormData, EvaluationError> {
    let to_network = |e: wasm_bindgen::JsValue| EvaluationError::Network(format!("{:?}", e));

    let json = serde_json::to_string(request)
        .map_err(|e| EvaluationError::Network(e.to_string()))?;
    let form = FormData::new().map_err(to_network)?;
    form.append_with_str("request", &json).map_err(to_network)?;
    form.append_with_blob_and_filename("attachment", file, &file.name())
        .map_err(to_network)?;
    Ok(form)
}

/// Maps a non-2xx status of the grading service to an evaluation error.
pub fn classify_status(status: u16, model_id: ModelId, detail: String) -> EvaluationError {
    match status {
        400 | 422 => EvaluationError::Validation(detail),
        404 | 503 => EvaluationError::ModelUnavailable(model_id),
        _ if detail.is_empty() => EvaluationError::Network(format!("HTTP {}", status)),
        _ => EvaluationError::Network(format!("HTTP {}: {}", status, detail)),
    }
}

/// Builds the evaluator selected by the configuration.
pub fn build_evaluator(config: &EvaluatorConfig) -> Rc<dyn Evaluator> {
    match config.mode {
        EvaluatorMode::Stub => Rc::new(StubEvaluator {
            delay_ms: config.stub_delay_ms,
        }),
        EvaluatorMode::Http => {
            let url = resolve_endpoint(&config.endpoint);
            log::info!("Essays will be evaluated by {}", url);
            Rc::new(HttpEvaluator { url })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_status() {
        assert_eq!(
            classify_status(422, ModelId::Gemini, "tema vazio".into()),
            EvaluationError::Validation("tema vazio".into())
        );
        assert_eq!(
            classify_status(503, ModelId::Maritaca, String::new()),
            EvaluationError::ModelUnavailable(ModelId::Maritaca)
        );
        assert_eq!(
            classify_status(404, ModelId::DeepSeek, "no route".into()),
            EvaluationError::ModelUnavailable(ModelId::DeepSeek)
        );
        assert_eq!(
            classify_status(500, ModelId::Gemini, String::new()),
            EvaluationError::Network("HTTP 500".into())
        );
        assert_eq!(
            classify_status(502, ModelId::Gemini, "bad gateway".into()),
            EvaluationError::Network("HTTP 502: bad gateway".into())
        );
    }
}
