//! Types shared between the essay form and the evaluation service.

pub mod essay;
