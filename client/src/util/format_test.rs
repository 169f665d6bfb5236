use super::*;

#[test]
fn format_size_bytes() {
    assert_eq!(format_size(0), "0 B");
    assert_eq!(format_size(1023), "1023 B");
}

#[test]
fn format_size_kilobytes() {
    assert_eq!(format_size(1024), "1.0 KB");
    assert_eq!(format_size(12_595), "12.3 KB");
}

#[test]
fn format_size_megabytes() {
    assert_eq!(format_size(4 * 1024 * 1024), "4.0 MB");
}

#[test]
fn selection_caption_joins_name_and_size() {
    assert_eq!(selection_caption("samosa.jpg", 2048), "samosa.jpg (2.0 KB)");
}
