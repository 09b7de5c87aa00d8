use super::*;

#[test]
fn kind_matches_active_variant() {
    assert_eq!(Value::S("x".into()).kind(), AttributeKind::S);
    assert_eq!(Value::N("1".into()).kind(), AttributeKind::N);
    assert_eq!(Value::Bool(true).kind(), AttributeKind::Bool);
    assert_eq!(Value::Null.kind(), AttributeKind::Null);
    assert_eq!(Value::L(vec![]).kind(), AttributeKind::L);
    assert_eq!(Value::M(BTreeMap::new()).kind(), AttributeKind::M);
}

#[test]
fn null_is_its_own_variant() {
    assert!(Value::Null.is_null());
    assert!(!Value::S(String::new()).is_null());
}

#[test]
fn accessors_narrow_by_variant() {
    let v = Value::Ss(BTreeSet::from(["a".to_string(), "b".to_string()]));
    assert_eq!(v.as_ss().unwrap().len(), 2);
    assert!(v.as_n().is_none());
}
