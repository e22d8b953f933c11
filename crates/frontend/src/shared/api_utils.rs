//! URL helpers for calls to the evaluation service

/// Port the evaluation service listens on during development
const API_PORT: u16 = 3000;

/// Base URL of the evaluation service, derived from the page location.
///
/// Returns an empty string when there is no window (native tests).
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Resolves a configured endpoint: absolute URLs are kept, paths get the API base.
pub fn resolve_endpoint(endpoint: &str) -> String {
    join_endpoint(&api_base(), endpoint)
}

fn join_endpoint(base: &str, endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint.to_string();
    }
    let base = base.trim_end_matches('/');
    if endpoint.starts_with('/') {
        format!("{}{}", base, endpoint)
    } else {
        format!("{}/{}", base, endpoint)
    }
}
