//! Property-based tests for rule evaluation.

use std::collections::BTreeMap;

use field_rules::{ErrorKind, FieldValue, Rule, RuleEngine, RuleMap};
use proptest::prelude::*;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Serialize)]
struct Sample {
    text: String,
    count: i64,
    flags: Vec<bool>,
}

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        ".{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
struct Address {
    street: String,
    number: u32,
}

#[derive(Debug, Clone, Serialize)]
struct Typed {
    maybe: Option<u32>,
    scores: BTreeMap<String, u32>,
    ratio: f64,
    address: Address,
    pair: (i8, bool),
    digits: [u8; 2],
}

fn arb_typed() -> impl Strategy<Value = Typed> {
    let maybe = prop_oneof![Just(None), Just(Some(0)), any::<Option<u32>>()];
    let scores = prop::collection::btree_map("[a-z]{1,3}", 0u32..3, 0..3);
    let ratio = prop_oneof![Just(0.0), Just(-0.0), Just(f64::NAN), any::<f64>()];
    let address = (prop_oneof![Just(String::new()), "[a-z]{1,5}"], 0u32..2)
        .prop_map(|(street, number)| Address { street, number });
    let pair = (-1i8..=1, any::<bool>());
    let digits = (0u8..2, 0u8..2).prop_map(|(a, b)| [a, b]);

    (maybe, scores, ratio, address, pair, digits).prop_map(
        |(maybe, scores, ratio, address, pair, digits)| Typed {
            maybe,
            scores,
            ratio,
            address,
            pair,
            digits,
        },
    )
}

/// Outcome of a lone required rule on `field`
fn required_fails(field: &str, record: &Typed) -> bool {
    let engine = RuleEngine::new(RuleMap::new().field(field, Rule::<Typed>::required()));
    match engine.evaluate_first(record) {
        Ok(()) => false,
        Err(error) => {
            assert_eq!(error.to_string(), format!("{} is required", field));
            assert_eq!(error.kind, ErrorKind::Required);
            true
        }
    }
}

fn arb_sample() -> impl Strategy<Value = Sample> {
    (".{0,8}", any::<i64>(), prop::collection::vec(any::<bool>(), 0..3))
        .prop_map(|(text, count, flags)| Sample { text, count, flags })
}

// ============================================================================
// A rule with nothing configured never fails
// ============================================================================

proptest! {
    #[test]
    fn noop_rule_never_fails(value in arb_value(), field in "[A-Za-z]{1,10}") {
        let rule = Rule::<()>::new();
        prop_assert!(rule.evaluate(&FieldValue::from(value), &field, &()).is_ok());
    }
}

// ============================================================================
// A required rule fails exactly on zero values, with the right message
// ============================================================================

proptest! {
    #[test]
    fn required_fails_iff_field_equals_its_default(record in arb_typed()) {
        prop_assert_eq!(required_fails("maybe", &record), record.maybe == Option::default());
        prop_assert_eq!(required_fails("scores", &record), record.scores == BTreeMap::default());
        prop_assert_eq!(required_fails("ratio", &record), record.ratio == f64::default());
        prop_assert_eq!(required_fails("address", &record), record.address == Address::default());
        prop_assert_eq!(required_fails("pair", &record), record.pair == <(i8, bool)>::default());
        prop_assert_eq!(required_fails("digits", &record), record.digits == <[u8; 2]>::default());
    }

    #[test]
    fn override_replaces_any_failure(value in arb_value(), message in "[a-z ]{1,20}") {
        let rule = Rule::<()>::required()
            .validator(|_, _, _| Err("validator text".into()))
            .message(message.clone());

        let error = rule.evaluate(&FieldValue::from(value), "Field", &()).unwrap_err();
        prop_assert_eq!(error.to_string(), message);
    }
}

// ============================================================================
// Evaluation is deterministic for a given record
// ============================================================================

proptest! {
    #[test]
    fn evaluate_first_is_deterministic(sample in arb_sample()) {
        let engine = RuleEngine::new(
            RuleMap::new()
                .field("text", Rule::<Sample>::required())
                .field("count", Rule::required())
                .field("flags", Rule::required()),
        );

        let first = engine.evaluate_first(&sample);
        let second = engine.evaluate_first(&sample);
        prop_assert_eq!(first, second);
    }
}
