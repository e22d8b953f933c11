//! Essay submission contracts
//!
//! - model_id.rs: grading model identifiers
//! - attachment.rs: uploaded file metadata and the accept filter
//! - request.rs: form draft, submit policy and the evaluation request
//! - evaluation.rs: evaluation result and error taxonomy

pub mod attachment;
pub mod evaluation;
pub mod model_id;
pub mod request;

pub use attachment::{Attachment, AttachmentError, AttachmentKind, MAX_ATTACHMENT_BYTES};
pub use evaluation::{EvaluationError, EvaluationResult};
pub use model_id::ModelId;
pub use request::{EssayDraft, EssayRequest};
