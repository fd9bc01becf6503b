use deepcopy::{Key, Map, Ptr, Struct, Value, Visibility, anything, must_anything};

/// `&Foo{Bar: bar}`
fn foo(bar: i64) -> Value {
    Value::pointer(
        Struct::new("Foo")
            .with_field("Foo", Value::nil_pointer())
            .with_field("Bar", bar),
    )
}

fn field_ptr<'a>(value: &'a Value, name: &str) -> Option<&'a Ptr> {
    value.as_struct()?.field(name)?.as_pointer()
}

#[test]
fn map_of_pointers_shares_nothing() {
    deepcopy_testhelpers::setup();

    let x = Value::from(Map::new().with("foo", foo(1)).with("bar", foo(2)));
    let y = must_anything(&x);
    assert_eq!(x, y);

    let (xm, ym) = (x.as_map().unwrap(), y.as_map().unwrap());
    assert_eq!(ym.len(), 2);
    assert_eq!(
        xm.keys().collect::<Vec<_>>(),
        ym.keys().collect::<Vec<_>>()
    );

    for k in ["foo", "bar"] {
        let xp = xm.get(k).unwrap().as_pointer().unwrap();
        let yp = ym.get(k).unwrap().as_pointer().unwrap();
        assert!(!xp.ptr_eq(yp), "x[{k:?}] and y[{k:?}] share a cell");

        let (xt, yt) = (xp.borrow(), yp.borrow());
        // both nil: equal, and no cell to share
        assert!(field_ptr(&xt, "Foo").is_none());
        assert!(field_ptr(&yt, "Foo").is_none());
        assert_eq!(
            xt.as_struct().unwrap().field("Bar"),
            yt.as_struct().unwrap().field("Bar")
        );
    }
}

#[test]
fn mutating_the_copy_leaves_the_source_alone() {
    deepcopy_testhelpers::setup();

    let x = Value::from(vec![foo(1), foo(2)]);
    let y = must_anything(&x);

    let first = y.as_slice().unwrap()[0].as_pointer().unwrap();
    if let Value::Struct(s) = &mut *first.borrow_mut() {
        *s.field_mut("Bar").unwrap() = Value::I64(100);
    }

    assert_ne!(x, y);
    let original = x.as_slice().unwrap()[0].as_pointer().unwrap().borrow();
    assert_eq!(original.as_struct().unwrap().field("Bar"), Some(&Value::I64(1)));
}

#[test]
fn element_order_is_preserved() {
    deepcopy_testhelpers::setup();

    let x: Value = (0..64u32).map(|i| Value::pointer(i * i)).collect();
    let y = must_anything(&x);
    for (i, item) in y.as_slice().unwrap().iter().enumerate() {
        let i = i as u32;
        assert_eq!(*item.as_pointer().unwrap().borrow(), Value::U32(i * i));
    }
}

#[test]
fn arrays_keep_their_length_and_kind() {
    deepcopy_testhelpers::setup();

    let x = Value::from([foo(1), foo(2), Value::nil_pointer()]);
    let y = must_anything(&x);
    assert_eq!(y.kind(), deepcopy::Kind::Array);
    assert_eq!(y.as_array().unwrap().len(), 3);
    assert_eq!(x, y);
}

#[test]
fn map_with_many_keys_drops_and_duplicates_nothing() {
    deepcopy_testhelpers::setup();

    let x: Map = (0..100i32).map(|i| (i, Value::boxed(i.to_string()))).collect();
    let y = must_anything(&Value::from(x.clone()));
    let y = y.as_map().unwrap();
    assert_eq!(y.len(), 100);
    for (k, v) in &x {
        assert_eq!(y.get(k.clone()), Some(v));
    }
}

#[test]
fn interface_is_reboxed_with_the_same_kind() {
    deepcopy_testhelpers::setup();

    let x = Value::boxed(foo(3));
    let y = must_anything(&x);
    let (xi, yi) = (x.as_interface().unwrap(), y.as_interface().unwrap());
    assert_eq!(xi.kind(), yi.kind());
    assert!(!xi.as_pointer().unwrap().ptr_eq(yi.as_pointer().unwrap()));
    assert_eq!(x, y);
}

#[test]
fn private_fields_hold_their_zero_value() {
    deepcopy_testhelpers::setup();

    let x = Value::from(
        Struct::new("Account")
            .with_field("Name", "ada")
            .with_private_field("balance", 120u64)
            .with_private_field("history", vec![1i32, 2, 3])
            .with_private_field("owner", foo(1)),
    );
    let y = anything(&x).unwrap();
    let s = y.as_struct().unwrap();

    assert_eq!(s.field("Name"), Some(&Value::from("ada")));
    assert_eq!(s.field("balance"), Some(&Value::U64(0)));
    assert_eq!(s.field("history"), Some(&Value::Slice(Vec::new())));
    assert_eq!(s.field("owner"), Some(&Value::nil_pointer()));
    let visibilities: Vec<_> = s.fields().iter().map(|f| f.visibility()).collect();
    assert_eq!(
        visibilities,
        [
            Visibility::Public,
            Visibility::Private,
            Visibility::Private,
            Visibility::Private
        ]
    );
}

#[test]
fn keys_of_every_leaf_kind() {
    deepcopy_testhelpers::setup();

    let x = Map::new()
        .with(true, 1u8)
        .with(-1i64, 2u8)
        .with(7u16, 3u8)
        .with('c', 4u8)
        .with("s", 5u8);
    let y = must_anything(&Value::from(x));
    let keys: Vec<_> = y.as_map().unwrap().keys().cloned().collect();
    assert_eq!(
        keys,
        [
            Key::Bool(true),
            Key::I64(-1),
            Key::U16(7),
            Key::Char('c'),
            Key::from("s")
        ]
    );
}
