//! End-to-end scenarios for the rule evaluator.

use formcheck::prelude::*;
use rstest::rstest;
use serde_json::{Value, json};

fn username() -> Constraints {
    Constraints::new().required().min(3.0).max(20.0)
}

fn signup_email() -> Constraints {
    Constraints::new().required().email()
}

fn age() -> Constraints {
    Constraints::new().number().greater(17.0).less(130.0)
}

#[rstest]
#[case(username(), json!("alice"), true)]
#[case(username(), json!("ab"), false)]
#[case(username(), json!(""), false)]
#[case(username(), json!("a".repeat(21)), false)]
#[case(signup_email(), json!("alice@example.com"), true)]
#[case(signup_email(), json!("alice"), false)]
#[case(signup_email(), json!(null), false)]
#[case(age(), json!(30), true)]
#[case(age(), json!("30"), true)]
#[case(age(), json!(17), false)]
#[case(age(), json!(150), false)]
#[case(age(), json!(null), true)] // optional, empty passes
fn descriptor_scenarios(
    #[case] constraints: Constraints,
    #[case] value: Value,
    #[case] expected: bool,
) {
    assert_eq!(evaluate(&constraints, &value), expected);
}

#[test]
fn empty_value_on_optional_field_short_circuits() {
    let constraints = Constraints::new()
        .min(10.0)
        .email()
        .number()
        .valid(json!("exact"));
    for empty in [json!(null), json!(""), json!([])] {
        assert!(evaluate(&constraints, &empty));
    }
    // Whitespace and zero are not empty.
    assert!(!evaluate(&constraints, &json!(" ")));
    assert!(!evaluate(&constraints, &json!(0)));
}

#[test]
fn presence_not_truthiness() {
    // A target of 0 or false is a real rule, and 0 or false as a value is a
    // real value.
    let constraints = Constraints::new().valid(json!(0));
    assert!(evaluate(&constraints, &json!(0)));
    assert!(!evaluate(&constraints, &json!(1)));

    let constraints = Constraints::new().required().valid(json!(false));
    assert!(evaluate(&constraints, &json!(false)));
    assert!(!evaluate(&constraints, &json!(true)));
}

#[test]
fn first_violated_rule_names_the_error() {
    let constraints = Constraints::new().min(10.0).email();
    let err = check(&constraints, &json!("x")).unwrap_err();
    assert_eq!(err.code, "min");

    // Once min passes, the email rule reports.
    let err = check(&constraints, &json!("not-an-email")).unwrap_err();
    assert_eq!(err.code, "email");
}

#[test]
fn depend_takes_precedence_over_everything() {
    let constraints = Constraints::new()
        .required()
        .email()
        .min(50.0)
        .depend(json!("secret"));

    // Matching the snapshot passes even though every other rule would fail.
    assert!(evaluate(&constraints, &json!("secret")));

    let err = check(&constraints, &json!("user@example.com")).unwrap_err();
    assert_eq!(err.code, "depend");
}

#[test]
fn negative_membership_round_trip() {
    let reserved = vec![json!("admin"), json!("root")];
    let constraints = Constraints::new().not_in(reserved.clone());
    assert!(evaluate(&constraints, &json!("alice")));
    let err = check(&constraints, &json!("admin")).unwrap_err();
    assert_eq!(err.code, "is_not");

    // The positive dual accepts exactly what the negative rejects.
    let constraints = Constraints::new().is_in(reserved);
    assert!(evaluate(&constraints, &json!("admin")));
    assert!(!evaluate(&constraints, &json!("alice")));
}

#[test]
fn exclusion_rules_report_their_own_codes() {
    let err = check(
        &Constraints::new().invalid(json!("taken")),
        &json!("taken"),
    )
    .unwrap_err();
    assert_eq!(err.code, "invalid");

    let err = check(
        &Constraints::new().contains_not(json!("<script>")),
        &json!("hi <script>alert(1)</script>"),
    )
    .unwrap_err();
    assert_eq!(err.code, "contains_not");
}

#[test]
fn date_with_format() {
    let constraints = Constraints::new().date_format("%d.%m.%Y");
    assert!(evaluate(&constraints, &json!("24.12.2025")));
    assert!(!evaluate(&constraints, &json!("2025-12-24")));

    let constraints = Constraints::new().date();
    assert!(evaluate(&constraints, &json!("2025-12-24T18:00:00Z")));
    assert!(evaluate(&constraints, &json!(1735000000000i64)));
    assert!(!evaluate(&constraints, &json!("tomorrow")));
}

#[test]
fn regex_and_case_rules() {
    let pattern = regex::Regex::new(r"^[a-z]+(-[a-z]+)*$").unwrap();
    let constraints = Constraints::new().regex(pattern).lowercase();
    assert!(evaluate(&constraints, &json!("kebab-case-slug")));
    let err = check(&constraints, &json!("Not A Slug")).unwrap_err();
    assert_eq!(err.code, "regex");
}

#[test]
fn type_rules() {
    assert!(evaluate(&Constraints::new().array(), &json!([1, 2])));
    assert!(!evaluate(&Constraints::new().array(), &json!("nope")));

    assert!(evaluate(&Constraints::new().boolean(), &json!(true)));
    assert!(!evaluate(&Constraints::new().boolean(), &json!("true")));

    assert!(evaluate(&Constraints::new().number(), &json!("3.5")));
    assert!(!evaluate(&Constraints::new().number(), &json!("three")));
}
