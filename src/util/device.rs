//! Mobile device detection from the user-agent string.

#[cfg(test)]
#[path = "device_test.rs"]
mod device_test;

use std::sync::LazyLock;

use regex::Regex;

static MOBILE_AGENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini").expect("mobile agent regex should compile")
});

#[must_use]
pub fn is_mobile_agent(user_agent: &str) -> bool {
    MOBILE_AGENT.is_match(user_agent)
}

/// Whether the current browser reports a mobile user agent.
///
/// Always `false` outside the browser or when the agent cannot be read.
pub fn is_mobile() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.navigator().user_agent() {
            Ok(agent) => is_mobile_agent(&agent),
            Err(_) => false,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
