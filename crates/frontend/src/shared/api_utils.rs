//! API utilities for talking to the audit service
//!
//! The service base URL is fixed at build time through the `AUDIT_API_BASE`
//! environment variable.

const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Get the base URL for API requests
///
/// # Returns
/// - Value of `AUDIT_API_BASE` at compile time, without a trailing slash
/// - "http://localhost:8000" if the variable was unset or blank
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/audit/start", api_base());
/// ```
pub fn api_base() -> String {
    resolve_base(option_env!("AUDIT_API_BASE"))
}

fn resolve_base(configured: Option<&str>) -> String {
    configured
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base() {
        assert_eq!(resolve_base(None), "http://localhost:8000");
        assert_eq!(resolve_base(Some("  ")), "http://localhost:8000");
    }

    #[test]
    fn test_configured_base_trims_slash() {
        assert_eq!(
            resolve_base(Some("https://audit.example.com/")),
            "https://audit.example.com"
        );
    }
}
