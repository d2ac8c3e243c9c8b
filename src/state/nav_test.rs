use super::*;

#[test]
fn toggle_flips_and_close_resets() {
    let mut menu = MenuState::default();
    assert!(menu.toggle());
    assert!(!menu.toggle());
    menu.toggle();
    menu.close();
    assert!(!menu.open);
}

#[test]
fn close_on_closed_menu_stays_closed() {
    let mut menu = MenuState::default();
    menu.close();
    assert_eq!(menu, MenuState { open: false });
}

#[test]
fn fragment_target_extracts_id() {
    assert_eq!(fragment_target("#proyectos"), Some("proyectos"));
    assert_eq!(fragment_target("#acerca-de"), Some("acerca-de"));
}

#[test]
fn fragment_target_ignores_bare_hash_and_other_pages() {
    assert_eq!(fragment_target("#"), None);
    assert_eq!(fragment_target(""), None);
    assert_eq!(fragment_target("/blog#top"), None);
    assert_eq!(fragment_target("https://example.com/#x"), None);
    assert_eq!(fragment_target("#two words"), None);
}
