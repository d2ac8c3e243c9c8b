//! Console logging setup.

use crate::consts::WELCOME_BANNER;

/// Install the console logger at `level`.
///
/// A second call keeps the first logger and only adjusts the level.
pub fn init(level: log::Level) {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = console_log::init_with_level(level) {
            web_sys::console::warn_1(&format!("console logger already installed: {e}").into());
        }
    }
    log::set_max_level(level.to_level_filter());
}

/// Print the styled greeting to the browser console.
pub fn welcome_banner() {
    for (text, css) in WELCOME_BANNER {
        #[cfg(feature = "hydrate")]
        web_sys::console::log_2(&text.into(), &css.into());
        #[cfg(not(feature = "hydrate"))]
        log::info!("{} [{css}]", text.trim_start_matches("%c"));
    }
}
