//! Property-based tests for run-level invariants.

use assay_registry::kinds::NOT_BLANK;
use assay_tests::prelude::*;
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z ]{0,12}".prop_map(Value::from),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            proptest::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|entries| Value::Map(entries.into_iter().collect())),
        ]
    })
}

/// Leaf and composite rules that accept `null`.
fn null_tolerant_rules() -> Vec<Constraint> {
    vec![
        Constraint::builder(&NOT_BLANK)
            .option("allowNull", true)
            .build()
            .unwrap(),
        rules::length(1, 3),
        rules::range(0, 10),
        rules::regex("^x$"),
        rules::type_of("int"),
        rules::choice(vec![Value::from("x")]),
        rules::all(vec![rules::not_null()]),
        rules::collection(vec![Field::required("x", vec![])]),
    ]
}

fn validator() -> Validator {
    Validator::builder().build().unwrap()
}

#[test]
fn test_null_passes_null_tolerant_rules() {
    let violations = validator()
        .validate(&Value::Null, &null_tolerant_rules(), GroupSpec::default())
        .unwrap();

    assert!(violations.is_empty(), "{}", violations);
}

proptest! {
    #[test]
    fn prop_runs_are_repeatable(value in value()) {
        let validator = validator();
        let rules = vec![
            rules::collection(vec![
                Field::new("a", vec![rules::not_blank()]),
                Field::optional("b", vec![rules::all(vec![rules::type_of("string")])]),
            ]),
        ];

        let first = validator.validate(&value, &rules, GroupSpec::default());
        let second = validator.validate(&value, &rules, GroupSpec::default());

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_null_tolerant_rules_ignore_null_fields(groups in proptest::sample::subsequence(vec!["Default", "Extra"], 1..=2)) {
        let value = Value::Map(map! { "x" => Value::Null });
        let rule = rules::collection(vec![Field::required("x", null_tolerant_rules())]);

        let violations = validator()
            .validate(&value, &[rule], groups)
            .unwrap();

        prop_assert!(violations.is_empty());
    }

    #[test]
    fn prop_every_undeclared_key_is_reported(
        keys in proptest::collection::btree_set("[a-z]{1,6}", 0..8)
    ) {
        let value = Value::Map(keys.iter().map(|k| (k.clone(), Value::from(1))).collect());
        let rule = rules::collection(vec![]);

        let violations = validator()
            .validate(&value, &[rule], GroupSpec::default())
            .unwrap();

        prop_assert_eq!(violations.len(), keys.len());
        prop_assert!(violations.iter().all(|v| v.has_code(NO_SUCH_FIELD_ERROR)));
    }

    #[test]
    fn prop_paths_stay_under_root(value in value()) {
        let validator = Validator::builder()
            .config(ValidatorConfig::default().with_root_path("payload"))
            .build()
            .unwrap();
        let rule = rules::all(vec![rules::type_of("string")]);

        if let Ok(violations) = validator.validate(&value, &[rule], GroupSpec::default()) {
            prop_assert!(violations.iter().all(|v| v.property_path.starts_with("payload[")));
        }
    }
}
