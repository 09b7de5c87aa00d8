use crate::{
    error::{RuntimeError, RuntimeResult},
    item::Item,
    requiredness::Requiredness,
    value::Value,
};

///
/// AvEnum
///
/// Implemented by `#[derive(AvEnum)]` for any fieldless enum used as a
/// mapper member. Bridges the two enum formats the spec allows: `"G"`
/// (variant name) and `"D"` (discriminant, decimal text).
///
pub trait AvEnum: Sized + Copy {
    fn to_name(&self) -> &'static str;
    fn from_name(name: &str) -> Option<Self>;
    fn to_discriminant(&self) -> i64;
    fn from_discriminant(discriminant: i64) -> Option<Self>;
}

/// Resolved enum format literal. `"G"` and `"D"` are the only formats the
/// spec names; anything else is a build-time diagnostic, never reaching
/// the runtime.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EnumFormat {
    Name,
    Discriminant,
}

fn decode_enum<T: AvEnum>(key: &str, value: &Value, format: EnumFormat) -> RuntimeResult<T> {
    let Value::S(text) = value else {
        return Err(RuntimeError::unsupported_kind(
            key.to_string(),
            "S",
            value.kind().label(),
        ));
    };

    match format {
        EnumFormat::Name => T::from_name(text)
            .ok_or_else(|| RuntimeError::parse_failure(key, format!("unknown variant {text:?}"))),
        EnumFormat::Discriminant => {
            let discriminant: i64 = text
                .parse()
                .map_err(|_| RuntimeError::parse_failure(key, format!("{text:?}: not an integer")))?;
            T::from_discriminant(discriminant).ok_or_else(|| {
                RuntimeError::parse_failure(key, format!("unknown discriminant {discriminant}"))
            })
        }
    }
}

fn encode_enum<T: AvEnum>(value: &T, format: EnumFormat) -> Value {
    match format {
        EnumFormat::Name => Value::S(value.to_name().to_string()),
        EnumFormat::Discriminant => Value::S(value.to_discriminant().to_string()),
    }
}

/// `get-Enum`: missing+Required fails; missing+Optional and `Null` yield
/// `default` (the non-nullable enum strategy's default-literal, §4.3).
pub fn get_enum<T: AvEnum>(
    item: &Item,
    key: &str,
    requiredness: Requiredness,
    format: EnumFormat,
    default: T,
) -> RuntimeResult<T> {
    match item.get(key) {
        None if requiredness.is_required() => Err(RuntimeError::missing_required_key(key)),
        None | Some(Value::Null) => Ok(default),
        Some(value) => decode_enum(key, value, format),
    }
}

pub fn get_nullable_enum<T: AvEnum>(
    item: &Item,
    key: &str,
    requiredness: Requiredness,
    format: EnumFormat,
) -> RuntimeResult<Option<T>> {
    match item.get(key) {
        None if requiredness.is_required() => Err(RuntimeError::missing_required_key(key)),
        None | Some(Value::Null) => Ok(None),
        Some(value) => decode_enum(key, value, format).map(Some),
    }
}

pub fn set_enum<T: AvEnum>(
    item: &mut Item,
    key: &str,
    value: Option<&T>,
    omit_null: bool,
    format: EnumFormat,
) {
    match value {
        None => {
            if !omit_null {
                item.insert(key, Value::Null);
            }
        }
        Some(v) => {
            item.insert(key, encode_enum(v, format));
        }
    }
}
