//! Effect tuning parsed from the page.
//!
//! The page may carry a `<script type="application/json" id="effects-config">`
//! block; any key it omits keeps the default below. A page without the block
//! behaves exactly like the defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::*;
use crate::error::ConfigError;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct EffectsConfig {
    pub parallax_factor: f64,
    pub navbar_shadow_threshold_px: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub reveal_animation: String,
    pub counter_steps: u32,
    pub counter_tick_ms: u32,
    pub submit_delay_ms: u32,
    pub submit_timeout_ms: u32,
    pub success_hide_ms: u32,
    pub ripple_lifetime_ms: u32,
    /// Real contact endpoint. `None` keeps the simulated submission.
    pub contact_endpoint: Option<String>,
    pub respect_reduced_motion: bool,
    pub log_level: String,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            parallax_factor: DEFAULT_PARALLAX_FACTOR,
            navbar_shadow_threshold_px: DEFAULT_NAVBAR_SHADOW_THRESHOLD_PX,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_root_margin: DEFAULT_REVEAL_ROOT_MARGIN.to_owned(),
            reveal_animation: DEFAULT_REVEAL_ANIMATION.to_owned(),
            counter_steps: DEFAULT_COUNTER_STEPS,
            counter_tick_ms: DEFAULT_COUNTER_TICK_MS,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            submit_timeout_ms: DEFAULT_SUBMIT_TIMEOUT_MS,
            success_hide_ms: DEFAULT_SUCCESS_HIDE_MS,
            ripple_lifetime_ms: DEFAULT_RIPPLE_LIFETIME_MS,
            contact_endpoint: None,
            respect_reduced_motion: true,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl EffectsConfig {
    /// Parse and validate a JSON config block.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown keys and
    /// [`ConfigError::Invalid`] when a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every value the effects rely on.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range field as [`ConfigError::Invalid`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(invalid("revealThreshold", format!("{} is outside [0, 1]", self.reveal_threshold)));
        }
        if !is_root_margin(&self.reveal_root_margin) {
            return Err(invalid(
                "revealRootMargin",
                format!("'{}' is not 1 to 4 px or % lengths", self.reveal_root_margin),
            ));
        }
        if !self.parallax_factor.is_finite() || self.parallax_factor < 0.0 {
            return Err(invalid("parallaxFactor", format!("{} must be a non-negative number", self.parallax_factor)));
        }
        if !self.navbar_shadow_threshold_px.is_finite() {
            return Err(invalid("navbarShadowThresholdPx", "must be finite".to_owned()));
        }
        if self.counter_steps == 0 {
            return Err(invalid("counterSteps", "must be at least 1".to_owned()));
        }
        if self.counter_tick_ms == 0 {
            return Err(invalid("counterTickMs", "must be at least 1".to_owned()));
        }
        if self.submit_timeout_ms == 0 {
            return Err(invalid("submitTimeoutMs", "must be at least 1".to_owned()));
        }
        if self.contact_endpoint.as_deref().is_some_and(|e| e.trim().is_empty()) {
            return Err(invalid("contactEndpoint", "must not be empty when set".to_owned()));
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(invalid("logLevel", format!("unknown level '{}'", self.log_level)));
        }
        Ok(())
    }

    /// The configured log level, falling back to `info`.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        match self.log_level.as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }
}

/// Whether `margin` is a valid `IntersectionObserver` root margin: one to
/// four whitespace-separated lengths, each in `px` or `%`.
fn is_root_margin(margin: &str) -> bool {
    let parts: Vec<&str> = margin.split_whitespace().collect();
    (1..=4).contains(&parts.len())
        && parts.iter().all(|part| {
            let number = part.strip_suffix("px").or_else(|| part.strip_suffix('%'));
            number.is_some_and(|n| n.parse::<f64>().is_ok_and(f64::is_finite))
        })
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
