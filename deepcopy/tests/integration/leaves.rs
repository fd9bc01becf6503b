use deepcopy::{Value, anything, must_anything};

#[test]
fn leaves_copy_to_equal_values() {
    deepcopy_testhelpers::setup();

    let tests = [
        Value::from("\"Now cut that out!\""),
        Value::from(39i64),
        Value::from(true),
        Value::from(false),
        Value::from(2.14f64),
        Value::from(-7i8),
        Value::from(u128::MAX),
        Value::from(usize::MAX),
        Value::from('λ'),
        Value::from(f32::MIN_POSITIVE),
    ];

    for expected in tests {
        let actual = anything(&expected).unwrap();
        assert_eq!(actual, expected);
        assert_eq!(actual.kind(), expected.kind());
    }
}

#[test]
fn sequences_of_leaves_print_like_the_source() {
    deepcopy_testhelpers::setup();

    let tests = [
        Value::from(vec![
            "Phil Harris",
            "Rochester van Jones",
            "Mary Livingstone",
            "Dennis Day",
        ]),
        Value::from(["Jell-O", "Grape-Nuts"]),
    ];

    let printed: Vec<String> = tests
        .iter()
        .map(|expected| must_anything(expected).to_string())
        .collect();
    insta::assert_snapshot!(printed.join("\n"), @r"
    [Phil Harris Rochester van Jones Mary Livingstone Dennis Day]
    [Jell-O Grape-Nuts]
    ");
}

#[test]
fn strings_share_their_immutable_buffer() {
    deepcopy_testhelpers::setup();

    let original = Value::from("shared text");
    let copy = must_anything(&original);
    let (Value::String(a), Value::String(b)) = (&original, &copy) else {
        panic!("expected strings");
    };
    assert!(std::rc::Rc::ptr_eq(a, b));
}
