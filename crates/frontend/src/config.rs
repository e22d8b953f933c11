//! Runtime configuration of the essay page
//!
//! Defaults are embedded as TOML. The page query string may override them,
//! e.g. `?evaluator=http&delay_ms=500`.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluatorMode {
    /// Waits `stub_delay_ms` and reports a simulated success
    Stub,
    /// POSTs the request to `endpoint`
    Http,
}

impl EvaluatorMode {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stub" => Ok(EvaluatorMode::Stub),
            "http" => Ok(EvaluatorMode::Http),
            other => Err(format!("Unknown evaluator mode: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    pub evaluator: EvaluatorConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EvaluatorConfig {
    pub mode: EvaluatorMode,
    pub stub_delay_ms: u32,
    /// Absolute URL, or a path resolved against the API base
    pub endpoint: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[evaluator]
mode = "stub"
stub_delay_ms = 3000
endpoint = "/api/essay/evaluate"
"#;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            evaluator: EvaluatorConfig {
                mode: EvaluatorMode::Stub,
                stub_delay_ms: 3000,
                endpoint: "/api/essay/evaluate".to_string(),
            },
        }
    }
}

/// Raw override values; each one is validated on its own
#[derive(Debug, Default, Deserialize)]
struct QueryOverrides {
    evaluator: Option<String>,
    delay_ms: Option<String>,
    endpoint: Option<String>,
}

/// Parses a TOML document and applies query string overrides on top.
///
/// A bad override is skipped with a warning; the others still apply.
pub fn parse_config(document: &str, query: &str) -> Result<AppConfig, String> {
    let mut config: AppConfig = toml::from_str(document).map_err(|e| e.to_string())?;

    let query = query.trim_start_matches('?');
    if query.is_empty() {
        return Ok(config);
    }
    let overrides: QueryOverrides = match serde_qs::from_str(query) {
        Ok(overrides) => overrides,
        Err(e) => {
            log::warn!("Ignoring unreadable query string '{}': {}", query, e);
            return Ok(config);
        }
    };

    if let Some(mode) = overrides.evaluator {
        match EvaluatorMode::from_str(&mode) {
            Ok(mode) => config.evaluator.mode = mode,
            Err(e) => log::warn!("Ignoring override evaluator: {}", e),
        }
    }
    if let Some(delay_ms) = overrides.delay_ms {
        match delay_ms.trim().parse::<u32>() {
            Ok(delay_ms) => config.evaluator.stub_delay_ms = delay_ms,
            Err(e) => log::warn!("Ignoring override delay_ms='{}': {}", delay_ms, e),
        }
    }
    if let Some(endpoint) = overrides.endpoint {
        if !endpoint.trim().is_empty() {
            config.evaluator.endpoint = endpoint;
        }
    }
    Ok(config)
}

/// Loads the embedded config, overridden by the current page's query string.
pub fn load_config() -> AppConfig {
    let query = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();

    match parse_config(DEFAULT_CONFIG, &query) {
        Ok(config) => {
            log::debug!("Loaded config: {:?}", config);
            config
        }
        Err(e) => {
            log::error!("Embedded config is invalid: {}", e);
            AppConfig::default()
        }
    }
}
