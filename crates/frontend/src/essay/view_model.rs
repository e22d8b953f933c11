//! Essay form - ViewModel
//!
//! Field state, submit eligibility and the Idle → Submitting → Idle
//! lifecycle of the essay form.

use super::model::Evaluator;
use crate::shared::state::SubmittingGuard;
use contracts::essay::{
    Attachment, EssayDraft, EvaluationError, EvaluationResult, ModelId,
};
use leptos::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use web_sys::File;

/// What a call to [`EssayFormVm::submit`] did
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Not eligible or already submitting; nothing happened
    Skipped,
    /// The form was torn down before the call finished; result dropped
    Discarded,
    Completed(Result<EvaluationResult, EvaluationError>),
}

/// ViewModel for the essay form
#[derive(Clone, Copy)]
pub struct EssayFormVm {
    // Fields
    pub topic: RwSignal<String>,
    pub content: RwSignal<String>,
    pub model_id: RwSignal<Option<ModelId>>,
    pub attachment: RwSignal<Option<Attachment>>,

    // Drop zone
    pub attachment_error: RwSignal<Option<String>>,
    pub drag_active: RwSignal<bool>,

    // Submission
    pub is_submitting: RwSignal<bool>,
    pub result: RwSignal<Option<EvaluationResult>>,
    pub error: RwSignal<Option<String>>,

    // Browser handle of `attachment`, when it came from a picker or drop
    file: StoredValue<Option<File>, LocalStorage>,
    alive: StoredValue<Arc<AtomicBool>>,
}

impl EssayFormVm {
    pub fn new() -> Self {
        Self {
            topic: RwSignal::new(String::new()),
            content: RwSignal::new(String::new()),
            model_id: RwSignal::new(None),
            attachment: RwSignal::new(None),
            attachment_error: RwSignal::new(None),
            drag_active: RwSignal::new(false),
            is_submitting: RwSignal::new(false),
            result: RwSignal::new(None),
            error: RwSignal::new(None),
            file: StoredValue::new_local(None),
            alive: StoredValue::new(Arc::new(AtomicBool::new(true))),
        }
    }

    pub fn set_topic(&self, value: String) {
        self.topic.set(value);
    }

    pub fn set_content(&self, value: String) {
        self.content.set(value);
    }

    pub fn set_model(&self, model_id: Option<ModelId>) {
        self.model_id.set(model_id);
    }

    /// Sets the model from a `<select>` value; empty or unknown clears it.
    pub fn set_model_str(&self, value: &str) {
        let parsed = if value.is_empty() {
            None
        } else {
            match ModelId::from_str(value) {
                Ok(model_id) => Some(model_id),
                Err(e) => {
                    log::warn!("{}", e);
                    None
                }
            }
        };
        self.set_model(parsed);
    }

    /// Reactive snapshot of the form fields
    pub fn draft(&self) -> EssayDraft {
        EssayDraft {
            topic: self.topic.get(),
            content: self.content.get(),
            model_id: self.model_id.get(),
            attachment: self.attachment.get(),
        }
    }

    fn draft_untracked(&self) -> EssayDraft {
        EssayDraft {
            topic: self.topic.get_untracked(),
            content: self.content.get_untracked(),
            model_id: self.model_id.get_untracked(),
            attachment: self.attachment.get_untracked(),
        }
    }

    pub fn can_submit(&self) -> bool {
        self.draft().can_submit()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting.get()
    }

    /// Submit button state: eligible and nothing in flight
    pub fn submit_enabled(&self) -> bool {
        self.can_submit() && !self.is_submitting()
    }

    /// Records a dropped or picked file if it passes the accept filter.
    ///
    /// A rejected file leaves the previously accepted attachment in place.
    /// The attachment is frozen while an evaluation is in flight.
    pub fn accept_file(&self, file_name: &str, size_bytes: u64) -> bool {
        if self.is_submitting.get_untracked() {
            log::warn!("Attachment ignored: an evaluation is in flight");
            return false;
        }
        match Attachment::accept(file_name, size_bytes) {
            Ok(attachment) => {
                log::info!(
                    "Attachment accepted: {} ({})",
                    attachment.file_name,
                    attachment.size_label()
                );
                self.attachment.set(Some(attachment));
                self.attachment_error.set(None);
                self.file.set_value(None);
                true
            }
            Err(e) => {
                log::warn!("Attachment rejected: {}", e);
                self.attachment_error.set(Some(e.to_string()));
                false
            }
        }
    }

    /// [`accept_file`](Self::accept_file) for a browser `File`, keeping the
    /// handle so the evaluator can upload its bytes.
    pub fn accept_browser_file(&self, file: File) -> bool {
        let accepted = self.accept_file(&file.name(), file.size() as u64);
        if accepted {
            self.file.set_value(Some(file));
        }
        accepted
    }

    pub fn clear_attachment(&self) {
        if self.is_submitting.get_untracked() {
            log::warn!("Attachment removal ignored: an evaluation is in flight");
            return;
        }
        self.attachment.set(None);
        self.attachment_error.set(None);
        self.file.set_value(None);
    }

    /// Runs one evaluation of the current fields.
    ///
    /// No-op unless the form is eligible and idle. The submitting flag is
    /// held by a guard for the whole call and released on every exit path.
    pub async fn submit(&self, evaluator: &dyn Evaluator) -> SubmitOutcome {
        let draft = self.draft_untracked();
        if let Some(field) = draft.missing_field() {
            log::warn!("Submit ignored: missing {}", field);
            return SubmitOutcome::Skipped;
        }
        let Some(_guard) = SubmittingGuard::acquire(self.is_submitting) else {
            log::warn!("Submit ignored: an evaluation is already in flight");
            return SubmitOutcome::Skipped;
        };

        self.result.set(None);
        self.error.set(None);
        let alive = self.alive.get_value();
        let file = self.file.get_value();

        let outcome = match draft.to_request() {
            Ok(request) => {
                log::info!(
                    "Submitting essay {} to {}",
                    request.submission_id,
                    request.model_id.as_str()
                );
                evaluator.evaluate(&request, file.as_ref()).await
            }
            Err(e) => Err(e),
        };

        if !alive.load(Ordering::Relaxed) {
            log::debug!("Essay form torn down during evaluation, dropping outcome");
            return SubmitOutcome::Discarded;
        }

        match &outcome {
            Ok(result) => {
                log::info!("Evaluation completed: grade {}", result.grade);
                self.result.set(Some(result.clone()));
            }
            Err(e) => {
                log::error!("Evaluation failed: {:?}", e);
                self.error.set(Some(e.to_string()));
            }
        }
        SubmitOutcome::Completed(outcome)
    }

    /// The explicit "try again" action, available only after a failure.
    pub async fn retry(&self, evaluator: &dyn Evaluator) -> SubmitOutcome {
        if self.error.get_untracked().is_none() {
            return SubmitOutcome::Skipped;
        }
        self.submit(evaluator).await
    }

    /// Callback that marks the form as torn down, for `on_cleanup`.
    ///
    /// In-flight results are dropped afterwards. The callback owns its
    /// handle, so it still works once the VM's storage is disposed.
    pub fn teardown(self) -> impl Fn() + Send + Sync + 'static {
        let alive = self.alive.get_value();
        move || alive.store(false, Ordering::Relaxed)
    }
}

impl Default for EssayFormVm {
    fn default() -> Self {
        Self::new()
    }
}
