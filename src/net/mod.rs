//! Network-facing pieces of the page.

pub mod contact;
