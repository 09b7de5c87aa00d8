use crate::{
    error::{RuntimeError, RuntimeResult},
    item::Item,
    requiredness::Requiredness,
    traits::FromItem,
    value::{AttributeKind, Value},
};

/// `get-X` for a nested mapper member: missing+Required fails; a present
/// `M` is rebuilt into an `Item` and decoded via the nested type's own
/// `FromItem`. Unlike the `TextScalar` family there is no generic
/// "zero value" for an arbitrary nested type, so the missing+Optional
/// case falls back to `T::default()` rather than a runtime-constructed
/// placeholder.
pub fn get_nested<T: FromItem + Default>(
    item: &Item,
    key: &str,
    requiredness: Requiredness,
) -> RuntimeResult<T> {
    match item.get(key) {
        None if requiredness.is_required() => Err(RuntimeError::missing_required_key(key)),
        None | Some(Value::Null) => Ok(T::default()),
        Some(Value::M(map)) => T::from_item(&Item::from(map)),
        Some(other) => Err(RuntimeError::unsupported_kind(
            key.to_string(),
            AttributeKind::M.label(),
            other.kind().label(),
        )),
    }
}

pub fn get_nullable_nested<T: FromItem>(
    item: &Item,
    key: &str,
    requiredness: Requiredness,
) -> RuntimeResult<Option<T>> {
    match item.get(key) {
        None if requiredness.is_required() => Err(RuntimeError::missing_required_key(key)),
        None | Some(Value::Null) => Ok(None),
        Some(Value::M(map)) => T::from_item(&Item::from(map)).map(Some),
        Some(other) => Err(RuntimeError::unsupported_kind(
            key.to_string(),
            AttributeKind::M.label(),
            other.kind().label(),
        )),
    }
}
