/// Desktop Chrome user agent sent when the caller does not configure one.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/103.0.0.0 Safari/537.36";

/// Returns the configured user agent, or the default when none (or a blank one) is given.
pub fn get_user_agent(configured: Option<&str>) -> String {
    match configured.map(str::trim) {
        Some(ua) if !ua.is_empty() => ua.to_string(),
        _ => DEFAULT_USER_AGENT.to_string(),
    }
}
