use serde::{Deserialize, Serialize};
use std::fmt;

/// AI model that grades the essay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelId {
    #[serde(rename = "gemini")]
    Gemini,
    #[serde(rename = "deep-seek")]
    DeepSeek,
    #[serde(rename = "maritaca")]
    Maritaca,
}

impl ModelId {
    /// Order in which the models are offered in the form
    pub const ALL: [ModelId; 3] = [ModelId::Gemini, ModelId::DeepSeek, ModelId::Maritaca];

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.trim() {
            "gemini" => Ok(ModelId::Gemini),
            "deep-seek" => Ok(ModelId::DeepSeek),
            "maritaca" => Ok(ModelId::Maritaca),
            other => Err(format!("Unknown model id: {}", other)),
        }
    }

    /// Wire identifier, also used as the `<option>` value
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Gemini => "gemini",
            ModelId::DeepSeek => "deep-seek",
            ModelId::Maritaca => "maritaca",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ModelId::Gemini => "Gemini Pro (Google)",
            ModelId::DeepSeek => "DeepSeek",
            ModelId::Maritaca => "Maritaca AI",
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
