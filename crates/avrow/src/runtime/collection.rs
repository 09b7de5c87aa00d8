use std::collections::{BTreeMap, BTreeSet};

use crate::{
    error::{RuntimeError, RuntimeResult},
    item::Item,
    requiredness::Requiredness,
    value::{AttributeKind, Value},
};

/// `get-list<T>`: missing+Required fails; missing+Optional and `Null` yield
/// an empty `Vec`; otherwise decode each element of the `L` sequence with
/// `decode_elem`.
pub fn get_list<T>(
    item: &Item,
    key: &str,
    requiredness: Requiredness,
    decode_elem: impl Fn(&Value) -> RuntimeResult<T>,
) -> RuntimeResult<Vec<T>> {
    match item.get(key) {
        None if requiredness.is_required() => Err(RuntimeError::missing_required_key(key)),
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::L(items)) => items.iter().map(decode_elem).collect(),
        Some(other) => Err(RuntimeError::unsupported_kind(
            key.to_string(),
            AttributeKind::L.label(),
            other.kind().label(),
        )),
    }
}

pub fn get_nullable_list<T>(
    item: &Item,
    key: &str,
    requiredness: Requiredness,
    decode_elem: impl Fn(&Value) -> RuntimeResult<T>,
) -> RuntimeResult<Option<Vec<T>>> {
    match item.get(key) {
        None if requiredness.is_required() => Err(RuntimeError::missing_required_key(key)),
        None | Some(Value::Null) => Ok(None),
        Some(Value::L(items)) => items.iter().map(decode_elem).collect::<RuntimeResult<_>>().map(Some),
        Some(other) => Err(RuntimeError::unsupported_kind(
            key.to_string(),
            AttributeKind::L.label(),
            other.kind().label(),
        )),
    }
}

/// `set-list<T>`: an absent collection is `Null`/no-op per `omit_null`; a
/// present collection is always written, even empty, unless
/// `omit_empty_collections` and it has no elements.
pub fn set_list<T>(
    item: &mut Item,
    key: &str,
    value: Option<&[T]>,
    omit_empty_collections: bool,
    omit_null: bool,
    encode_elem: impl Fn(&T) -> Value,
) {
    match value {
        None => {
            if !omit_null {
                item.insert(key, Value::Null);
            }
        }
        Some(elems) => {
            if elems.is_empty() && omit_empty_collections {
                return;
            }
            item.insert(key, Value::L(elems.iter().map(encode_elem).collect()));
        }
    }
}

/// `get-map<T>`: as `get_list`, over the `M` variant keyed by the source's
/// string keys.
pub fn get_map<T>(
    item: &Item,
    key: &str,
    requiredness: Requiredness,
    decode_elem: impl Fn(&Value) -> RuntimeResult<T>,
) -> RuntimeResult<BTreeMap<String, T>> {
    match item.get(key) {
        None if requiredness.is_required() => Err(RuntimeError::missing_required_key(key)),
        None | Some(Value::Null) => Ok(BTreeMap::new()),
        Some(Value::M(map)) => map
            .iter()
            .map(|(k, v)| decode_elem(v).map(|decoded| (k.clone(), decoded)))
            .collect(),
        Some(other) => Err(RuntimeError::unsupported_kind(
            key.to_string(),
            AttributeKind::M.label(),
            other.kind().label(),
        )),
    }
}

pub fn get_nullable_map<T>(
    item: &Item,
    key: &str,
    requiredness: Requiredness,
    decode_elem: impl Fn(&Value) -> RuntimeResult<T>,
) -> RuntimeResult<Option<BTreeMap<String, T>>> {
    match item.get(key) {
        None if requiredness.is_required() => Err(RuntimeError::missing_required_key(key)),
        None | Some(Value::Null) => Ok(None),
        Some(Value::M(map)) => map
            .iter()
            .map(|(k, v)| decode_elem(v).map(|decoded| (k.clone(), decoded)))
            .collect::<RuntimeResult<BTreeMap<_, _>>>()
            .map(Some),
        Some(other) => Err(RuntimeError::unsupported_kind(
            key.to_string(),
            AttributeKind::M.label(),
            other.kind().label(),
        )),
    }
}

pub fn set_map<T>(
    item: &mut Item,
    key: &str,
    value: Option<&BTreeMap<String, T>>,
    omit_empty_collections: bool,
    omit_null: bool,
    encode_elem: impl Fn(&T) -> Value,
) {
    match value {
        None => {
            if !omit_null {
                item.insert(key, Value::Null);
            }
        }
        Some(map) => {
            if map.is_empty() && omit_empty_collections {
                return;
            }
            let encoded = map
                .iter()
                .map(|(k, v)| (k.clone(), encode_elem(v)))
                .collect();
            item.insert(key, Value::M(encoded));
        }
    }
}

/// `get-string-set`: missing+Required fails; missing+Optional and `Null`
/// yield an empty set; a present `SS` is copied verbatim (already
/// deduplicated by construction).
pub fn get_string_set(
    item: &Item,
    key: &str,
    requiredness: Requiredness,
) -> RuntimeResult<BTreeSet<String>> {
    match item.get(key) {
        None if requiredness.is_required() => Err(RuntimeError::missing_required_key(key)),
        None | Some(Value::Null) => Ok(BTreeSet::new()),
        Some(Value::Ss(set)) => Ok(set.clone()),
        Some(other) => Err(RuntimeError::unsupported_kind(
            key.to_string(),
            AttributeKind::Ss.label(),
            other.kind().label(),
        )),
    }
}

pub fn get_nullable_string_set(
    item: &Item,
    key: &str,
    requiredness: Requiredness,
) -> RuntimeResult<Option<BTreeSet<String>>> {
    match item.get(key) {
        None if requiredness.is_required() => Err(RuntimeError::missing_required_key(key)),
        None | Some(Value::Null) => Ok(None),
        Some(Value::Ss(set)) => Ok(Some(set.clone())),
        Some(other) => Err(RuntimeError::unsupported_kind(
            key.to_string(),
            AttributeKind::Ss.label(),
            other.kind().label(),
        )),
    }
}

/// `set-string-set`: an empty set is silently dropped (§4.9, P3) — sets
/// never appear empty on the wire.
pub fn set_string_set(
    item: &mut Item,
    key: &str,
    value: Option<&BTreeSet<String>>,
    omit_null: bool,
) {
    match value {
        None => {
            if !omit_null {
                item.insert(key, Value::Null);
            }
        }
        Some(set) => {
            if set.is_empty() {
                return;
            }
            item.insert(key, Value::Ss(set.clone()));
        }
    }
}

/// `get-number-set<T>`: as `get_string_set` over `NS`, decoding each member
/// via `decode_elem`.
pub fn get_number_set<T: Ord>(
    item: &Item,
    key: &str,
    requiredness: Requiredness,
    decode_elem: impl Fn(&str) -> RuntimeResult<T>,
) -> RuntimeResult<BTreeSet<T>> {
    match item.get(key) {
        None if requiredness.is_required() => Err(RuntimeError::missing_required_key(key)),
        None | Some(Value::Null) => Ok(BTreeSet::new()),
        Some(Value::Ns(set)) => set.iter().map(|s| decode_elem(s)).collect(),
        Some(other) => Err(RuntimeError::unsupported_kind(
            key.to_string(),
            AttributeKind::Ns.label(),
            other.kind().label(),
        )),
    }
}

pub fn get_nullable_number_set<T: Ord>(
    item: &Item,
    key: &str,
    requiredness: Requiredness,
    decode_elem: impl Fn(&str) -> RuntimeResult<T>,
) -> RuntimeResult<Option<BTreeSet<T>>> {
    match item.get(key) {
        None if requiredness.is_required() => Err(RuntimeError::missing_required_key(key)),
        None | Some(Value::Null) => Ok(None),
        Some(Value::Ns(set)) => set
            .iter()
            .map(|s| decode_elem(s))
            .collect::<RuntimeResult<BTreeSet<_>>>()
            .map(Some),
        Some(other) => Err(RuntimeError::unsupported_kind(
            key.to_string(),
            AttributeKind::Ns.label(),
            other.kind().label(),
        )),
    }
}

pub fn set_number_set<T>(
    item: &mut Item,
    key: &str,
    value: Option<&BTreeSet<T>>,
    omit_null: bool,
    encode_elem: impl Fn(&T) -> String,
) {
    match value {
        None => {
            if !omit_null {
                item.insert(key, Value::Null);
            }
        }
        Some(set) => {
            if set.is_empty() {
                return;
            }
            item.insert(key, Value::Ns(set.iter().map(encode_elem).collect()));
        }
    }
}

/// `get-binary-set`: as `get_string_set` over `BS`.
pub fn get_binary_set(
    item: &Item,
    key: &str,
    requiredness: Requiredness,
) -> RuntimeResult<BTreeSet<Vec<u8>>> {
    match item.get(key) {
        None if requiredness.is_required() => Err(RuntimeError::missing_required_key(key)),
        None | Some(Value::Null) => Ok(BTreeSet::new()),
        Some(Value::Bs(set)) => Ok(set.clone()),
        Some(other) => Err(RuntimeError::unsupported_kind(
            key.to_string(),
            AttributeKind::Bs.label(),
            other.kind().label(),
        )),
    }
}

pub fn get_nullable_binary_set(
    item: &Item,
    key: &str,
    requiredness: Requiredness,
) -> RuntimeResult<Option<BTreeSet<Vec<u8>>>> {
    match item.get(key) {
        None if requiredness.is_required() => Err(RuntimeError::missing_required_key(key)),
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bs(set)) => Ok(Some(set.clone())),
        Some(other) => Err(RuntimeError::unsupported_kind(
            key.to_string(),
            AttributeKind::Bs.label(),
            other.kind().label(),
        )),
    }
}

pub fn set_binary_set(
    item: &mut Item,
    key: &str,
    value: Option<&BTreeSet<Vec<u8>>>,
    omit_null: bool,
) {
    match value {
        None => {
            if !omit_null {
                item.insert(key, Value::Null);
            }
        }
        Some(set) => {
            if set.is_empty() {
                return;
            }
            item.insert(key, Value::Bs(set.clone()));
        }
    }
}
