use super::*;

// =============================================================
// Validator predicates
// =============================================================

#[test]
fn required_rejects_only_empty() {
    assert!(!Validator::Required.check(""));
    assert!(Validator::Required.check(" "));
    assert!(Validator::Required.check("a"));
}

#[test]
fn min_length_rejects_empty_and_short_values() {
    let v = Validator::MinLength(2);
    assert!(!v.check(""));
    assert!(!v.check("A"));
    assert!(v.check("Al"));
}

#[test]
fn max_length_allows_empty_and_bounds_long_values() {
    let v = Validator::MaxLength(15);
    assert!(v.check(""));
    assert!(v.check(&"x".repeat(15)));
    assert!(!v.check(&"x".repeat(16)));
}

#[test]
fn lengths_count_characters_not_bytes() {
    assert!(Validator::MaxLength(2).check("éé"));
    assert!(!Validator::MinLength(2).check("é"));
}

#[test]
fn one_of_requires_exact_option() {
    let v = Validator::OneOf(RATING_OPTIONS);
    assert!(v.check("3"));
    assert!(!v.check(""));
    assert!(!v.check("6"));
}

// =============================================================
// Rule tables
// =============================================================

#[test]
fn empty_author_reports_required_and_min_length() {
    assert_eq!(
        validate_field(Field::Author, ""),
        vec!["Required", "Must be at least 2 characters"]
    );
}

#[test]
fn long_author_reports_max_length_only() {
    assert_eq!(
        validate_field(Field::Author, "Bartholomew Smithers"),
        vec!["Must be at most 15 characters"]
    );
}

#[test]
fn author_at_bounds_is_valid() {
    assert!(validate_field(Field::Author, "Al").is_empty());
    assert!(validate_field(Field::Author, &"a".repeat(15)).is_empty());
}

#[test]
fn rating_rules_require_a_selection() {
    assert_eq!(validate_field(Field::Rating, ""), vec!["You must select an option"]);
    assert!(validate_field(Field::Rating, "5").is_empty());
}

#[test]
fn text_has_no_upper_bound() {
    assert!(validate_field(Field::Text, &"t".repeat(5000)).is_empty());
    assert_eq!(validate_field(Field::Text, "t"), vec!["Must be at least 2 characters"]);
}

// =============================================================
// Whole-comment validation
// =============================================================

#[test]
fn validate_comment_passes_valid_input() {
    let errors = validate_comment("Alice", "3", "Great spot");
    assert!(errors.is_empty());
}

#[test]
fn validate_comment_collects_each_field_separately() {
    let errors = validate_comment("A", "", "hi");
    assert_eq!(errors.for_field(Field::Author), ["Must be at least 2 characters"]);
    assert_eq!(errors.for_field(Field::Rating), ["You must select an option"]);
    assert!(errors.for_field(Field::Text).is_empty());
    assert!(!errors.is_empty());
}

#[test]
fn field_errors_display_joins_failing_fields() {
    let errors = validate_comment("A", "3", "");
    assert_eq!(
        errors.to_string(),
        "author: Must be at least 2 characters; text: Required, Must be at least 2 characters"
    );
}
