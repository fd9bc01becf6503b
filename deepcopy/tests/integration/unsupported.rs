use deepcopy::{Chan, CopyError, Kind, Map, Struct, Value, anything, must_anything};

fn noop() -> Value {
    Value::func("noop", |_| Value::Nil)
}

#[test]
fn unsupported_kinds_are_rejected() {
    deepcopy_testhelpers::setup();

    let x = noop();
    let tests = [
        x.clone(),
        Value::from(Map::new().with(true, x.clone())),
        Value::from(vec![x.clone()]),
    ];

    for test in tests {
        let err = anything(&test).unwrap_err();
        assert_eq!(err.kind(), Kind::Func);
        assert!(matches!(err, CopyError::UnsupportedKind { .. }));
    }
}

#[test]
fn error_paths_point_at_the_offender() {
    deepcopy_testhelpers::setup();

    let x = noop();
    let tests = [
        x.clone(),
        Value::from(Map::new().with(true, x.clone())),
        Value::from(vec![x.clone()]),
        Value::pointer(Struct::new("Button").with_field("on_click", x.clone())),
        Value::boxed(Value::from([Value::Nil, Value::from(Chan::new())])),
        Value::from(Map::new().with("base", Value::RawPointer(0x7f00))),
    ];

    let messages: Vec<String> = tests
        .iter()
        .map(|t| anything(t).unwrap_err().to_string())
        .collect();
    insta::assert_snapshot!(messages.join("\n"), @r#"
    unable to copy a value of kind `func` at `$`
    unable to copy a value of kind `func` at `$[true]`
    unable to copy a value of kind `func` at `$[0]`
    unable to copy a value of kind `func` at `$.*.on_click`
    unable to copy a value of kind `chan` at `$.(dyn)[1]`
    unable to copy a value of kind `rawptr` at `$["base"]`
    "#);
}

#[test]
fn nil_func_is_still_a_func() {
    deepcopy_testhelpers::setup();

    let err = anything(&Value::Func(None)).unwrap_err();
    assert_eq!(err.kind(), Kind::Func);
}

#[test]
fn first_failure_aborts_the_whole_copy() {
    deepcopy_testhelpers::setup();

    let x = Value::from(vec![
        Value::pointer(1i32),
        noop(),
        Value::from(Chan::new()),
    ]);
    let err = anything(&x).unwrap_err();
    assert_eq!(err.kind(), Kind::Func);
    assert_eq!(err.path().to_string(), "$[1]");
}

#[test]
#[should_panic(expected = "unable to copy a value of kind `func`")]
fn must_anything_panics_on_unsupported_kind() {
    must_anything(&noop());
}

#[test]
fn must_anything_panics_for_nested_offenders() {
    deepcopy_testhelpers::setup();

    let tests = [
        Value::from(Map::new().with(true, noop())),
        Value::from(vec![noop()]),
    ];
    for test in tests {
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| must_anything(&test)));
        assert!(result.is_err());
    }
}
