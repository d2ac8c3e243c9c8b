use super::*;

#[test]
fn eleven_digits_are_grouped() {
    assert_eq!(format_phone("52555123456"), "+52 (555) 123-456");
}

#[test]
fn only_first_run_is_formatted() {
    assert_eq!(format_phone("tel 52555123456"), "tel +52 (555) 123-456");
    assert_eq!(
        format_phone("52555123456 / 52555654321"),
        "+52 (555) 123-456 / 52555654321"
    );
}

#[test]
fn longer_runs_keep_trailing_digits() {
    assert_eq!(format_phone("525551234567"), "+52 (555) 123-4567");
}

#[test]
fn short_or_separated_numbers_are_untouched() {
    assert_eq!(format_phone("5551234"), "5551234");
    assert_eq!(format_phone("+52 555 123 456"), "+52 555 123 456");
}

#[test]
fn non_ascii_digits_are_untouched() {
    assert_eq!(format_phone("５２５５５１２３４５６"), "５２５５５１２３４５６");
    assert_eq!(format_phone("٥٢٥٥٥١٢٣٤٥٦"), "٥٢٥٥٥١٢٣٤٥٦");
}
