//! Property tests for output filename sanitizing

use folder2pdf::convert::{output_path, sanitize_filename, FORBIDDEN_CHARS};
use proptest::prelude::*;
use std::path::Path;

proptest! {
    #[test]
    fn sanitized_name_has_no_forbidden_chars(name in ".*") {
        let sanitized = sanitize_filename(&name);
        prop_assert!(!sanitized.chars().any(|c| FORBIDDEN_CHARS.contains(&c)));
    }

    #[test]
    fn sanitize_is_idempotent(name in ".*") {
        let once = sanitize_filename(&name);
        prop_assert_eq!(sanitize_filename(&once), once);
    }

    #[test]
    fn sanitize_preserves_char_count(name in r#"[a-z<>:"/\\|?* ]{0,40}"#) {
        prop_assert_eq!(sanitize_filename(&name).chars().count(), name.chars().count());
    }

    #[test]
    fn output_stays_inside_export_dir(name in "[^\u{0}]{1,30}") {
        let path = output_path(&name, Path::new("export"));
        prop_assert_eq!(path.parent(), Some(Path::new("export")));
    }
}

#[test]
fn test_already_clean_name_unchanged() {
    assert_eq!(sanitize_filename("Summer_2024 (final)"), "Summer_2024 (final)");
}
