//! Utility helpers shared across effects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from effect logic;
//! the string helpers here are also exported to page scripts.

pub mod clipboard;
pub mod device;
pub mod dark_mode;
pub mod logging;
pub mod phone;
