use super::*;

#[test]
fn phone_and_tablet_agents_are_mobile() {
    assert!(is_mobile_agent(
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148"
    ));
    assert!(is_mobile_agent("Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Chrome/120 Mobile"));
    assert!(is_mobile_agent("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80) Presto/2.5.25"));
}

#[test]
fn match_is_case_insensitive() {
    assert!(is_mobile_agent("some-ANDROID-shell"));
    assert!(is_mobile_agent("ipad-app/1.0"));
}

#[test]
fn desktop_agents_are_not_mobile() {
    assert!(!is_mobile_agent(
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120 Safari/537.36"
    ));
    assert!(!is_mobile_agent(""));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn is_mobile_is_false_outside_browser() {
    assert!(!is_mobile());
}
