//! Pure per-effect state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each effect owns one of these machines; the browser layer only feeds it
//! events and applies what it returns. No type here touches the DOM, so the
//! behavior is tested on the host.

pub mod counter;
pub mod form;
pub mod lazy;
pub mod nav;
pub mod reveal;
pub mod scroll;
