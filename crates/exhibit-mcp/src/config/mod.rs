//! Configuration loading and resolution.

/// Default listen address when nothing else is configured.
const DEFAULT_ADDR: &str = "127.0.0.1:3111";

/// Resolve the listen address: explicit flag, then `EXHIBIT_ADDR`, then the
/// default.
pub fn resolve_addr(explicit: Option<&str>) -> String {
    if let Some(addr) = explicit {
        return addr.to_string();
    }

    if let Ok(env_addr) = std::env::var("EXHIBIT_ADDR") {
        return env_addr;
    }

    DEFAULT_ADDR.to_string()
}
