use proptest::prelude::*;

use skillforge::core::frontmatter::parse_frontmatter_value;
use skillforge::core::quick_validate;
use skillforge::test_utils::BundleFixture;

proptest! {
    #[test]
    fn test_frontmatter_parser_never_panics(text in ".*") {
        let _ = parse_frontmatter_value(&text);
    }

    #[test]
    fn test_frontmatter_parser_never_panics_on_delimited_input(body in ".*") {
        let _ = parse_frontmatter_value(&format!("---\n{body}\n---\n"));
    }

    #[test]
    fn test_validation_is_idempotent(body in "[ -~\n]{0,200}") {
        let fixture = BundleFixture::new("testing-skill");
        fixture.write_manifest(&format!("---\n{body}\n---\n"));
        let first = quick_validate(&fixture.bundle_path);
        let second = quick_validate(&fixture.bundle_path);
        prop_assert_eq!(first, second);
    }
}
