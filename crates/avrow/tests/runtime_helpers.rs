use std::collections::BTreeSet;

use avrow::{
    item::Item,
    requiredness::Requiredness,
    runtime,
    value::{AttributeKind, Value},
};

#[test]
fn scenario_e_set_semantics() {
    let mut item = Item::new();

    // empty set is omitted entirely
    runtime::set_string_set(&mut item, "tags", Some(&BTreeSet::new()), true);
    assert!(item.get("tags").is_none());

    // duplicates collapse, matching a `BTreeSet<String>` source
    let tags: BTreeSet<String> = ["a", "b", "a"].into_iter().map(String::from).collect();
    runtime::set_string_set(&mut item, "tags", Some(&tags), true);
    let Some(Value::Ss(stored)) = item.get("tags") else {
        panic!("expected SS variant")
    };
    assert_eq!(stored, &BTreeSet::from(["a".to_string(), "b".to_string()]));
}

#[test]
fn p2_omit_null_determinism() {
    let mut item = Item::new();
    runtime::set_string(&mut item, "nickname", None, false, true, AttributeKind::S);
    assert!(!item.contains_key("nickname"));

    let mut item_keep_null = Item::new();
    runtime::set_string(&mut item_keep_null, "nickname", None, false, false, AttributeKind::S);
    assert_eq!(item_keep_null.get("nickname"), Some(&Value::Null));
}

#[test]
fn p3_sets_never_appear_empty() {
    let mut item = Item::new();
    runtime::set_number_set::<i64>(&mut item, "scores", Some(&BTreeSet::new()), true, i64::to_string);
    assert!(item.get("scores").is_none());
}

#[test]
fn p7_requiredness_contract() {
    let mut item = Item::new();
    runtime::set_string(
        &mut item,
        "first_name",
        Some(&"Ada".to_string()),
        false,
        true,
        AttributeKind::S,
    );

    let name: String =
        runtime::get_string(&item, "first_name", Requiredness::Required, AttributeKind::S).unwrap();
    assert_eq!(name, "Ada");

    item.remove("first_name");
    let err = runtime::get_string(&item, "first_name", Requiredness::Required, AttributeKind::S)
        .unwrap_err();
    assert_eq!(err.to_string(), "missing required attribute key `first_name`");
}

#[test]
fn p8_invariant_culture_numeric_text() {
    let mut item = Item::new();
    runtime::set_double(
        &mut item,
        "price",
        Some(&1234.5_f64),
        false,
        true,
        AttributeKind::N,
    );
    assert_eq!(item.get("price"), Some(&Value::N("1234.5".to_string())));
}

#[test]
fn missing_optional_yields_zero_value_not_null() {
    let item = Item::new();
    let age: i32 =
        runtime::get_int(&item, "age", Requiredness::Optional, AttributeKind::N).unwrap();
    assert_eq!(age, 0);
}

#[test]
fn nested_list_round_trips_through_encode_decode_closures() {
    let mut item = Item::new();
    let xs = vec![1_i32, 2, 3];
    runtime::set_list(
        &mut item,
        "xs",
        Some(xs.as_slice()),
        false,
        true,
        |v| Value::N(v.to_string()),
    );

    let decoded: Vec<i32> = runtime::get_list(&item, "xs", Requiredness::Required, |v| {
        v.as_n()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| avrow::error::RuntimeError::parse_failure("xs", "bad element"))
    })
    .unwrap();
    assert_eq!(decoded, xs);
}
