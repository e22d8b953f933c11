//! Essay form UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: evaluation collaborators (stub and HTTP)
//! - view_model.rs: EssayFormVm with RwSignals and the submit lifecycle
//! - view.rs: Main component EssayForm

pub mod model;
mod view;
pub mod view_model;

pub use model::{build_evaluator, Evaluator};
pub use view::EssayForm;
pub use view_model::{EssayFormVm, SubmitOutcome};
