//! Property tests for the per-variant total order and structural equality.

use proptest::prelude::*;
use tinylisp::{Environment, Value, evaluate};

fn small_i64() -> impl Strategy<Value = i64> {
    -1_000_000i64..1_000_000i64
}

fn leaf_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Integer),
        "[a-z]{1,6}".prop_map(|name| Value::symbol(&name)),
    ]
}

fn any_value() -> impl Strategy<Value = Value> {
    leaf_value().prop_recursive(3, 16, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Value::list)
    })
}

proptest! {
    #[test]
    fn equality_is_reflexive(v in any_value()) {
        prop_assert!(v == v.clone());
    }

    #[test]
    fn less_than_is_irreflexive(v in any_value()) {
        prop_assert!(!v.less_than(&v));
    }

    #[test]
    fn less_than_is_asymmetric(a in any_value(), b in any_value()) {
        prop_assert!(!(a.less_than(&b) && b.less_than(&a)));
    }

    #[test]
    fn leaves_of_one_variant_are_totally_ordered(a in leaf_value(), b in leaf_value()) {
        // For integers and symbols, exactly one of <, >, = holds.
        if std::mem::discriminant(&a) == std::mem::discriminant(&b) {
            let ordered = a.less_than(&b) as u8 + b.less_than(&a) as u8 + (a == b) as u8;
            prop_assert_eq!(ordered, 1);
        }
    }

    #[test]
    fn integer_lists_are_totally_ordered(
        a in prop::collection::vec(any::<i64>(), 0..5),
        b in prop::collection::vec(any::<i64>(), 0..5),
    ) {
        let a = Value::list(a.into_iter().map(Value::Integer).collect());
        let b = Value::list(b.into_iter().map(Value::Integer).collect());
        let ordered = a.less_than(&b) as u8 + b.less_than(&a) as u8 + (a == b) as u8;
        prop_assert_eq!(ordered, 1);
    }

    #[test]
    fn cross_variant_comparison_is_always_false(n in any::<i64>(), name in "[a-z]{1,6}") {
        let int = Value::Integer(n);
        let sym = Value::symbol(&name);
        prop_assert!(!int.less_than(&sym));
        prop_assert!(!sym.less_than(&int));
        prop_assert!(int != sym);
    }

    #[test]
    fn integer_order_matches_native(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(Value::Integer(a).less_than(&Value::Integer(b)), a < b);
    }

    #[test]
    fn symbol_order_matches_str_order(a in "[a-z]{1,6}", b in "[a-z]{1,6}") {
        prop_assert_eq!(
            Value::symbol(&a).less_than(&Value::symbol(&b)),
            a.as_str() < b.as_str()
        );
    }

    #[test]
    fn subtract_matches_native_arithmetic(a in small_i64(), b in small_i64()) {
        let mut env = Environment::new();
        // Built directly since the reader has no negative literals.
        let expr = Value::list(vec![
            Value::symbol("s"),
            Value::Integer(a),
            Value::Integer(b),
        ]);
        prop_assert_eq!(evaluate(&mut env, &expr).unwrap(), Value::Integer(a - b));
    }

    #[test]
    fn less_than_builtin_agrees_with_value_order(a in any_value(), b in any_value()) {
        let mut env = Environment::new();
        let expr = Value::list(vec![
            Value::symbol("l"),
            Value::list(vec![Value::symbol("q"), a.clone()]),
            Value::list(vec![Value::symbol("q"), b.clone()]),
        ]);
        let expected = Value::Integer(a.less_than(&b) as i64);
        prop_assert_eq!(evaluate(&mut env, &expr).unwrap(), expected);
    }
}
