//! Property-based tests for the evaluation engine.

use formcheck::prelude::*;
use proptest::prelude::*;
use serde_json::{Value, json};

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1e9f64..1e9f64).prop_map(Value::from),
        "\\PC{0,24}".prop_map(Value::from),
    ]
}

fn arb_constraints() -> impl Strategy<Value = Constraints> {
    (
        any::<bool>(),
        proptest::option::of(0.0..64.0f64),
        proptest::option::of(0.0..64.0f64),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(required, min, max, number, email)| {
            let mut constraints = Constraints::new();
            if required {
                constraints = constraints.required();
            }
            if let Some(limit) = min {
                constraints = constraints.min(limit);
            }
            if let Some(limit) = max {
                constraints = constraints.max(limit);
            }
            if number {
                constraints = constraints.number();
            }
            if email {
                constraints = constraints.email();
            }
            constraints
        })
}

proptest! {
    // Evaluation is a pure function: the same inputs always give the same
    // answer.
    #[test]
    fn evaluation_is_deterministic(constraints in arb_constraints(), value in arb_scalar()) {
        let first = evaluate(&constraints, &value);
        let second = evaluate(&constraints, &value);
        prop_assert_eq!(first, second);
    }

    // check and evaluate always agree.
    #[test]
    fn check_and_evaluate_agree(constraints in arb_constraints(), value in arb_scalar()) {
        prop_assert_eq!(check(&constraints, &value).is_ok(), evaluate(&constraints, &value));
    }

    // An empty value on a non-required descriptor passes no matter what
    // other rules are active.
    #[test]
    fn empty_optional_always_passes(constraints in arb_constraints()) {
        if !constraints.is_required() {
            prop_assert!(evaluate(&constraints, &json!(null)));
            prop_assert!(evaluate(&constraints, &json!("")));
            prop_assert!(evaluate(&constraints, &json!([])));
        }
    }

    // A depend rule makes the outcome depend only on snapshot equality.
    #[test]
    fn depend_overrides_all(constraints in arb_constraints(), snapshot in arb_scalar(), value in arb_scalar()) {
        // Skip the case where the empty-optional exit fires first.
        prop_assume!(constraints.is_required() || !is_empty_value(&value));
        let constraints = constraints.depend(snapshot.clone());
        let expected = match (&snapshot, &value) {
            (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
            (a, b) => a == b,
        };
        prop_assert_eq!(evaluate(&constraints, &value), expected);
    }

    // A matching snapshot always satisfies a required depend descriptor.
    #[test]
    fn depend_accepts_its_own_snapshot(snapshot in arb_scalar()) {
        prop_assume!(!is_empty_value(&snapshot));
        let constraints = Constraints::new().required().depend(snapshot.clone());
        prop_assert!(evaluate(&constraints, &snapshot));
    }

    // The reported code is always one of the activated rules (or "depend").
    #[test]
    fn error_code_names_an_active_rule(constraints in arb_constraints(), value in arb_scalar()) {
        if let Err(error) = check(&constraints, &value) {
            let code = error.code.as_ref();
            prop_assert!(
                matches!(code, "required" | "min" | "max" | "number" | "email"),
                "unexpected code {code}"
            );
        }
    }

    // required() is exactly the complement of emptiness for null, strings
    // without content, and sequences; whitespace strings also fail it.
    #[test]
    fn required_rejects_empty(value in arb_scalar()) {
        let constraints = Constraints::new().required();
        if is_empty_value(&value) {
            prop_assert!(!evaluate(&constraints, &value));
        }
    }
}
