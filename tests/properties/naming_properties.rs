use proptest::prelude::*;

use skillforge::core::quick_validate;
use skillforge::test_utils::{BundleFixture, manifest};

fn validate(dir: &str, name: &str, description: &str) -> (bool, String) {
    let fixture = BundleFixture::new(dir);
    fixture.write_manifest(&manifest(name, description));
    quick_validate(&fixture.bundle_path)
}

/// Hyphen-case names with a gerund first segment, free of reserved words.
fn valid_name() -> impl Strategy<Value = String> {
    ("[a-z]{1,8}ing", prop::collection::vec("[a-z0-9]{1,8}", 0..4)).prop_map(|(first, rest)| {
        let mut segments = vec![first];
        segments.extend(rest.into_iter().filter(|s| s != "claude" && s != "anthropic"));
        segments.join("-")
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn valid_names_pass_in_matching_folder(name in valid_name()) {
        let (valid, message) = validate(&name, &name, "Does things");
        prop_assert!(valid, "{}: {}", name, message);
    }

    #[test]
    fn folder_must_equal_name(name in valid_name(), dir in valid_name()) {
        prop_assume!(name != dir);
        let (valid, message) = validate(&dir, &name, "Does things");
        prop_assert!(!valid);
        prop_assert_eq!(
            message,
            format!("Name '{name}' must match directory name '{dir}' exactly")
        );
    }

    #[test]
    fn non_hyphen_case_characters_fail(
        prefix in "[a-z]{0,4}",
        bad in "[A-Z_.~]",
        suffix in "[a-z]{0,4}",
    ) {
        let name = format!("{prefix}{bad}{suffix}ing");
        let (valid, message) = validate("testing-skill", &name, "Does things");
        prop_assert!(!valid);
        prop_assert!(message.contains("should be hyphen-case"), "{}", message);
    }

    #[test]
    fn first_segment_must_be_gerund(first in "[a-z]{1,8}", rest in "[a-z]{1,8}") {
        prop_assume!(!first.ends_with("ing"));
        let name = format!("{first}-{rest}");
        let (valid, message) = validate(&name, &name, "Does things");
        prop_assert!(!valid);
        prop_assert_eq!(
            message,
            "Name should use gerund form (verb + -ing) for the first segment"
        );
    }
}

#[test]
fn name_length_boundary() {
    let exact = format!("testing-{}", "a".repeat(56));
    assert_eq!(exact.len(), 64);
    assert!(validate(&exact, &exact, "x").0);

    let over = format!("{exact}a");
    let (valid, message) = validate(&over, &over, "x");
    assert!(!valid);
    assert_eq!(message, "Name is too long (65 characters). Maximum is 64 characters.");
}

#[test]
fn description_length_boundary() {
    assert!(validate("testing-skill", "testing-skill", &"a".repeat(1024)).0);

    let (valid, message) = validate("testing-skill", "testing-skill", &"a".repeat(1025));
    assert!(!valid);
    assert_eq!(
        message,
        "Description is too long (1025 characters). Maximum is 1024 characters."
    );
}

#[test]
fn unknown_key_is_named() {
    let fixture = BundleFixture::new("testing-skill");
    fixture.write_frontmatter("name: testing-skill\ndescription: x\nextra_field: 1");
    let (valid, message) = quick_validate(&fixture.bundle_path);
    assert!(!valid);
    assert!(message.starts_with("Unexpected key(s) in SKILL.md frontmatter: extra_field."));
}
