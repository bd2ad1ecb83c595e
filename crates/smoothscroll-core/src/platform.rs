//! Host capability probing
//!
//! Capabilities are resolved by the host once per scroll call and passed in
//! as plain values instead of being read from ambient globals.

use std::sync::OnceLock;

use regex::Regex;

/// Capability flags reported by the host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Host supports `scroll-behavior: smooth`
    pub smooth_scroll: bool,
    /// Host user-agent string
    pub user_agent: String,
}

impl HostCapabilities {
    pub fn new(smooth_scroll: bool, user_agent: impl Into<String>) -> Self {
        Self {
            smooth_scroll,
            user_agent: user_agent.into(),
        }
    }

    /// Slack added to the client size before comparing with the scroll size
    pub fn rounding_tolerance(&self) -> f64 {
        if is_microsoft_browser(&self.user_agent) {
            1.0
        } else {
            0.0
        }
    }
}

/// IE and legacy Edge report fractional element sizes imprecisely
pub fn is_microsoft_browser(user_agent: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"MSIE |Trident/|Edge/").expect("valid user-agent pattern"))
        .is_match(user_agent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_microsoft_user_agents() {
        assert!(is_microsoft_browser(
            "Mozilla/5.0 (compatible; MSIE 10.0; Windows NT 6.1; Trident/6.0)"
        ));
        assert!(is_microsoft_browser(
            "Mozilla/5.0 (Windows NT 10.0; Trident/7.0; rv:11.0) like Gecko"
        ));
        assert!(is_microsoft_browser(
            "Mozilla/5.0 (Windows NT 10.0) AppleWebKit/537.36 Chrome/70.0 Safari/537.36 Edge/18.17763"
        ));
    }

    #[test]
    fn test_chromium_edge_is_not_legacy() {
        // Chromium Edge uses "Edg/", not "Edge/"
        assert!(!is_microsoft_browser(
            "Mozilla/5.0 (Windows NT 10.0) AppleWebKit/537.36 Chrome/120.0 Safari/537.36 Edg/120.0"
        ));
        assert!(!is_microsoft_browser("Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Firefox/128.0"));
    }

    #[test]
    fn test_rounding_tolerance() {
        assert_eq!(HostCapabilities::new(false, "Trident/7.0").rounding_tolerance(), 1.0);
        assert_eq!(HostCapabilities::new(false, "Firefox/128.0").rounding_tolerance(), 0.0);
    }
}
