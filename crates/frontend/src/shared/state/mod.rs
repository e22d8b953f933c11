pub mod submitting_guard;

pub use submitting_guard::SubmittingGuard;
