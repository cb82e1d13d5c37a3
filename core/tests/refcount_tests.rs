//! Ownership and lifetime checks, observed through `Rc` strong counts.

use std::rc::Rc;

use tinylisp::{Environment, Value, evaluate};

#[test]
fn test_acquire_release_symmetry() {
    let shared: Rc<Vec<Value>> = Rc::new(vec![Value::Integer(1), Value::symbol("a")]);
    let value = Value::List(Rc::clone(&shared));
    let before = Rc::strong_count(&shared);

    drop(value.clone());

    assert_eq!(Rc::strong_count(&shared), before);
    assert_eq!(value.as_list().unwrap().len(), 2);
}

#[test]
fn test_last_list_reference_releases_elements_exactly_once() {
    let text: Rc<str> = Rc::from("shared");
    let list = Value::list(vec![
        Value::Symbol(Rc::clone(&text)),
        Value::Symbol(Rc::clone(&text)),
    ]);
    assert_eq!(Rc::strong_count(&text), 3);

    // A clone shares the backing storage instead of copying elements.
    let alias = list.clone();
    assert_eq!(Rc::strong_count(&text), 3);

    drop(list);
    assert_eq!(Rc::strong_count(&text), 3);
    drop(alias);
    assert_eq!(Rc::strong_count(&text), 1);
}

#[test]
fn test_release_is_recursive_through_nesting() {
    let text: Rc<str> = Rc::from("deep");
    let outer = Value::list(vec![Value::list(vec![Value::list(vec![Value::Symbol(
        Rc::clone(&text),
    )])])]);
    assert_eq!(Rc::strong_count(&text), 2);
    drop(outer);
    assert_eq!(Rc::strong_count(&text), 1);
}

#[test]
fn test_evaluation_does_not_leak_operands() {
    let payload: Rc<str> = Rc::from("payload");
    let mut env = Environment::new();

    // (h (q (payload)))
    let quoted = Value::list(vec![
        Value::symbol("q"),
        Value::list(vec![Value::Symbol(Rc::clone(&payload))]),
    ]);
    let expr = Value::list(vec![Value::symbol("h"), quoted]);
    let before = Rc::strong_count(&payload);

    let result = evaluate(&mut env, &expr).unwrap();
    assert_eq!(result, Value::Symbol(Rc::clone(&payload)));
    drop(result);

    assert_eq!(Rc::strong_count(&payload), before);
    drop(expr);
    assert_eq!(Rc::strong_count(&payload), 1);
}

#[test]
fn test_failed_evaluation_releases_partial_results() {
    let payload: Rc<str> = Rc::from("partial");
    let mut env = Environment::new();

    // (c (q payload) 2) - the first operand evaluates, then the second
    // fails the list type check.
    let expr = Value::list(vec![
        Value::symbol("c"),
        Value::list(vec![
            Value::symbol("q"),
            Value::Symbol(Rc::clone(&payload)),
        ]),
        Value::Integer(2),
    ]);
    let before = Rc::strong_count(&payload);

    assert!(evaluate(&mut env, &expr).is_err());
    assert_eq!(Rc::strong_count(&payload), before);
}

#[test]
fn test_popped_frames_release_their_bindings() {
    let payload: Rc<str> = Rc::from("bound");
    let mut env = Environment::new();

    // ((q ((x) 0)) (q payload)) binds the payload in the call frame and
    // returns without retaining it.
    let closure = Value::list(vec![
        Value::symbol("q"),
        Value::list(vec![
            Value::list(vec![Value::symbol("x")]),
            Value::Integer(0),
        ]),
    ]);
    let expr = Value::list(vec![
        closure,
        Value::list(vec![
            Value::symbol("q"),
            Value::Symbol(Rc::clone(&payload)),
        ]),
    ]);
    let before = Rc::strong_count(&payload);

    let result = evaluate(&mut env, &expr).unwrap();
    assert_eq!(result, Value::Integer(0));
    assert_eq!(Rc::strong_count(&payload), before);
}
