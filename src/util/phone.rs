//! Phone number display formatting.

#[cfg(test)]
#[path = "phone_test.rs"]
mod phone_test;

use std::sync::LazyLock;

use regex::Regex;

static PHONE_GROUPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{2})([0-9]{3})([0-9]{3})([0-9]{3})").expect("phone regex should compile"));

/// Format the first run of eleven ASCII digits as `+CC (AAA) BBB-CCC`.
///
/// Text around the run is kept; input without such a run is returned as-is.
#[must_use]
pub fn format_phone(number: &str) -> String {
    PHONE_GROUPS.replace(number, "+${1} (${2}) ${3}-${4}").into_owned()
}
