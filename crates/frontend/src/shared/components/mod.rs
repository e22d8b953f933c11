pub mod card;
pub mod loading_overlay;
pub mod ui;

pub use card::Card;
pub use loading_overlay::LoadingOverlay;
