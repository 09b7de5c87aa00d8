use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::format::{parse_failure, text_for_kind, value_for_kind};
use crate::{
    duration::Duration,
    error::{RuntimeError, RuntimeResult},
    item::Item,
    requiredness::Requiredness,
    value::{AttributeKind, Value},
};

///
/// TextScalar
///
/// A scalar type whose default wire representation is culture-invariant
/// decimal/ISO text. Implemented once per supported type so
/// `get_scalar`/`set_scalar` need a single generic body instead of one
/// hand-rolled pair per type.
///
pub trait TextScalar: Sized {
    fn zero_value() -> Self;
    fn encode_text(&self) -> String;
    fn decode_text(text: &str) -> Result<Self, String>;

    /// Format-aware encode for the temporal/duration/uuid families (spec
    /// §4.3, §4.9); every other `TextScalar` ignores `format` and falls
    /// back to the plain encoding.
    fn encode_text_fmt(&self, _format: Option<&str>) -> String {
        self.encode_text()
    }

    /// Format-aware decode counterpart of `encode_text_fmt`.
    fn decode_text_fmt(text: &str, _format: Option<&str>) -> Result<Self, String> {
        Self::decode_text(text)
    }
}

macro_rules! impl_text_scalar_numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TextScalar for $ty {
                fn zero_value() -> Self {
                    Self::default()
                }

                fn encode_text(&self) -> String {
                    self.to_string()
                }

                fn decode_text(text: &str) -> Result<Self, String> {
                    text.parse::<Self>().map_err(|e| e.to_string())
                }
            }
        )*
    };
}

impl_text_scalar_numeric!(i16, i32, i64, u8, f32, f64, Decimal);

impl TextScalar for String {
    fn zero_value() -> Self {
        Self::new()
    }

    fn encode_text(&self) -> String {
        self.clone()
    }

    fn decode_text(text: &str) -> Result<Self, String> {
        Ok(text.to_string())
    }
}

impl TextScalar for Uuid {
    fn zero_value() -> Self {
        Self::nil()
    }

    fn encode_text(&self) -> String {
        self.hyphenated().to_string()
    }

    fn decode_text(text: &str) -> Result<Self, String> {
        Self::parse_str(text).map_err(|e| e.to_string())
    }

    /// `"D"` (the mapper-level default) is the hyphenated form already
    /// produced by `encode_text`; `"N"` drops the hyphens. `Uuid::parse_str`
    /// accepts either spelling, so decode needs no format awareness.
    fn encode_text_fmt(&self, format: Option<&str>) -> String {
        match format {
            Some("N") => self.simple().to_string(),
            _ => self.hyphenated().to_string(),
        }
    }
}

impl TextScalar for Duration {
    fn zero_value() -> Self {
        Self::ZERO
    }

    fn encode_text(&self) -> String {
        self.to_string()
    }

    fn decode_text(text: &str) -> Result<Self, String> {
        text.parse::<Self>().map_err(|e| e.to_string())
    }
}

impl TextScalar for DateTime<Utc> {
    fn zero_value() -> Self {
        Self::from_timestamp(0, 0).expect("zero timestamp is always valid")
    }

    fn encode_text(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    fn decode_text(text: &str) -> Result<Self, String> {
        DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| e.to_string())
    }
}

impl TextScalar for DateTime<FixedOffset> {
    fn zero_value() -> Self {
        DateTime::<Utc>::from_timestamp(0, 0)
            .expect("zero timestamp is always valid")
            .fixed_offset()
    }

    fn encode_text(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    fn decode_text(text: &str) -> Result<Self, String> {
        DateTime::parse_from_rfc3339(text).map_err(|e| e.to_string())
    }
}

/// `get-X` for any `TextScalar`: missing+Required fails, missing+Optional and
/// `Null` yield the zero value, otherwise decode the text-bearing kind.
pub fn get_scalar<T: TextScalar>(
    item: &Item,
    key: &str,
    requiredness: Requiredness,
    kind: AttributeKind,
) -> RuntimeResult<T> {
    match item.get(key) {
        None if requiredness.is_required() => Err(RuntimeError::missing_required_key(key)),
        None | Some(Value::Null) => Ok(T::zero_value()),
        Some(value) => {
            let text = text_for_kind(key, value, kind)?;
            parse_failure(key, text, T::decode_text(text))
        }
    }
}

/// `get-nullable-X`: as `get_scalar`, but missing-Optional and `Null` yield
/// `None` rather than the zero value.
pub fn get_nullable_scalar<T: TextScalar>(
    item: &Item,
    key: &str,
    requiredness: Requiredness,
    kind: AttributeKind,
) -> RuntimeResult<Option<T>> {
    match item.get(key) {
        None if requiredness.is_required() => Err(RuntimeError::missing_required_key(key)),
        None | Some(Value::Null) => Ok(None),
        Some(value) => {
            let text = text_for_kind(key, value, kind)?;
            parse_failure(key, text, T::decode_text(text)).map(Some)
        }
    }
}

/// `set-X`: `None` writes `Null` unless `omit_null`; `Some` writes the
/// encoded text unless it is empty and `omit_empty_strings`.
pub fn set_scalar<T: TextScalar>(
    item: &mut Item,
    key: &str,
    value: Option<&T>,
    omit_empty_strings: bool,
    omit_null: bool,
    kind: AttributeKind,
) {
    match value {
        None => {
            if !omit_null {
                item.insert(key, Value::Null);
            }
        }
        Some(v) => {
            let text = v.encode_text();
            if text.is_empty() && omit_empty_strings {
                return;
            }
            item.insert(key, value_for_kind(kind, text));
        }
    }
}

/// Format-aware counterpart of `get_scalar`, for the temporal/duration/
/// uuid families whose mapper-level/per-field format literal (spec §4.3,
/// §4.9) resolves to `format`.
pub fn get_scalar_fmt<T: TextScalar>(
    item: &Item,
    key: &str,
    requiredness: Requiredness,
    kind: AttributeKind,
    format: Option<&str>,
) -> RuntimeResult<T> {
    match item.get(key) {
        None if requiredness.is_required() => Err(RuntimeError::missing_required_key(key)),
        None | Some(Value::Null) => Ok(T::zero_value()),
        Some(value) => {
            let text = text_for_kind(key, value, kind)?;
            parse_failure(key, text, T::decode_text_fmt(text, format))
        }
    }
}

pub fn get_nullable_scalar_fmt<T: TextScalar>(
    item: &Item,
    key: &str,
    requiredness: Requiredness,
    kind: AttributeKind,
    format: Option<&str>,
) -> RuntimeResult<Option<T>> {
    match item.get(key) {
        None if requiredness.is_required() => Err(RuntimeError::missing_required_key(key)),
        None | Some(Value::Null) => Ok(None),
        Some(value) => {
            let text = text_for_kind(key, value, kind)?;
            parse_failure(key, text, T::decode_text_fmt(text, format)).map(Some)
        }
    }
}

/// Format-aware counterpart of `set_scalar`.
pub fn set_scalar_fmt<T: TextScalar>(
    item: &mut Item,
    key: &str,
    value: Option<&T>,
    omit_empty_strings: bool,
    omit_null: bool,
    kind: AttributeKind,
    format: Option<&str>,
) {
    match value {
        None => {
            if !omit_null {
                item.insert(key, Value::Null);
            }
        }
        Some(v) => {
            let text = v.encode_text_fmt(format);
            if text.is_empty() && omit_empty_strings {
                return;
            }
            item.insert(key, value_for_kind(kind, text));
        }
    }
}

/// `get-Bool`: the default kind is the native `Bool` AV variant, not text,
/// so the codec lives outside the `TextScalar` generic family.
pub fn get_bool(
    item: &Item,
    key: &str,
    requiredness: Requiredness,
    kind: AttributeKind,
) -> RuntimeResult<bool> {
    match item.get(key) {
        None if requiredness.is_required() => Err(RuntimeError::missing_required_key(key)),
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) if kind == AttributeKind::Bool => Ok(*b),
        Some(value) => {
            let text = text_for_kind(key, value, kind)?;
            parse_failure(key, text, text.parse::<BoolText>().map(|b| b.0))
        }
    }
}

pub fn get_nullable_bool(
    item: &Item,
    key: &str,
    requiredness: Requiredness,
    kind: AttributeKind,
) -> RuntimeResult<Option<bool>> {
    match item.get(key) {
        None if requiredness.is_required() => Err(RuntimeError::missing_required_key(key)),
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) if kind == AttributeKind::Bool => Ok(Some(*b)),
        Some(value) => {
            let text = text_for_kind(key, value, kind)?;
            parse_failure(key, text, text.parse::<BoolText>().map(|b| b.0)).map(Some)
        }
    }
}

pub fn set_bool(
    item: &mut Item,
    key: &str,
    value: Option<bool>,
    omit_null: bool,
    kind: AttributeKind,
) {
    match value {
        None => {
            if !omit_null {
                item.insert(key, Value::Null);
            }
        }
        Some(b) => {
            let av = if kind == AttributeKind::Bool {
                Value::Bool(b)
            } else {
                value_for_kind(kind, if b { "true" } else { "false" }.to_string())
            };
            item.insert(key, av);
        }
    }
}

struct BoolText(bool);

impl std::str::FromStr for BoolText {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" | "1" => Ok(Self(true)),
            "false" | "0" => Ok(Self(false)),
            other => Err(format!("not a boolean literal: {other}")),
        }
    }
}

/// `get-Blob`: the default kind is the native `B` AV variant (raw bytes).
pub fn get_blob(
    item: &Item,
    key: &str,
    requiredness: Requiredness,
) -> RuntimeResult<Vec<u8>> {
    match item.get(key) {
        None if requiredness.is_required() => Err(RuntimeError::missing_required_key(key)),
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::B(bytes)) => Ok(bytes.clone()),
        Some(other) => Err(RuntimeError::unsupported_kind(
            key.to_string(),
            AttributeKind::B.label(),
            other.kind().label(),
        )),
    }
}

pub fn get_nullable_blob(
    item: &Item,
    key: &str,
    requiredness: Requiredness,
) -> RuntimeResult<Option<Vec<u8>>> {
    match item.get(key) {
        None if requiredness.is_required() => Err(RuntimeError::missing_required_key(key)),
        None | Some(Value::Null) => Ok(None),
        Some(Value::B(bytes)) => Ok(Some(bytes.clone())),
        Some(other) => Err(RuntimeError::unsupported_kind(
            key.to_string(),
            AttributeKind::B.label(),
            other.kind().label(),
        )),
    }
}

pub fn set_blob(item: &mut Item, key: &str, value: Option<&[u8]>, omit_null: bool) {
    match value {
        None => {
            if !omit_null {
                item.insert(key, Value::Null);
            }
        }
        Some(bytes) => {
            item.insert(key, Value::B(bytes.to_vec()));
        }
    }
}

// Named per-type aliases matching the spec's `get-X`/`set-X` nomenclature.
// Each forwards to the generic `TextScalar` implementation above.

macro_rules! named_scalar_ops {
    ($ty:ty, $get:ident, $get_nullable:ident, $set:ident) => {
        pub fn $get(
            item: &Item,
            key: &str,
            requiredness: Requiredness,
            kind: AttributeKind,
        ) -> RuntimeResult<$ty> {
            get_scalar::<$ty>(item, key, requiredness, kind)
        }

        pub fn $get_nullable(
            item: &Item,
            key: &str,
            requiredness: Requiredness,
            kind: AttributeKind,
        ) -> RuntimeResult<Option<$ty>> {
            get_nullable_scalar::<$ty>(item, key, requiredness, kind)
        }

        pub fn $set(
            item: &mut Item,
            key: &str,
            value: Option<&$ty>,
            omit_empty_strings: bool,
            omit_null: bool,
            kind: AttributeKind,
        ) {
            set_scalar::<$ty>(item, key, value, omit_empty_strings, omit_null, kind);
        }
    };
}

named_scalar_ops!(String, get_string, get_nullable_string, set_string);
named_scalar_ops!(i16, get_short, get_nullable_short, set_short);
named_scalar_ops!(i32, get_int, get_nullable_int, set_int);
named_scalar_ops!(i64, get_long, get_nullable_long, set_long);
named_scalar_ops!(u8, get_byte, get_nullable_byte, set_byte);
named_scalar_ops!(f32, get_float, get_nullable_float, set_float);
named_scalar_ops!(f64, get_double, get_nullable_double, set_double);
named_scalar_ops!(Decimal, get_decimal, get_nullable_decimal, set_decimal);
named_scalar_ops!(Uuid, get_uuid, get_nullable_uuid, set_uuid);
named_scalar_ops!(Duration, get_time_span, get_nullable_time_span, set_time_span);
named_scalar_ops!(
    DateTime<Utc>,
    get_date_time,
    get_nullable_date_time,
    set_date_time
);
named_scalar_ops!(
    DateTime<FixedOffset>,
    get_date_time_offset,
    get_nullable_date_time_offset,
    set_date_time_offset
);

// Format-aware named aliases for the four scalar kinds a mapper/field
// format literal applies to (spec §4.3, §4.9).

macro_rules! named_scalar_ops_fmt {
    ($ty:ty, $get:ident, $get_nullable:ident, $set:ident) => {
        pub fn $get(
            item: &Item,
            key: &str,
            requiredness: Requiredness,
            kind: AttributeKind,
            format: Option<&str>,
        ) -> RuntimeResult<$ty> {
            get_scalar_fmt::<$ty>(item, key, requiredness, kind, format)
        }

        pub fn $get_nullable(
            item: &Item,
            key: &str,
            requiredness: Requiredness,
            kind: AttributeKind,
            format: Option<&str>,
        ) -> RuntimeResult<Option<$ty>> {
            get_nullable_scalar_fmt::<$ty>(item, key, requiredness, kind, format)
        }

        pub fn $set(
            item: &mut Item,
            key: &str,
            value: Option<&$ty>,
            omit_empty_strings: bool,
            omit_null: bool,
            kind: AttributeKind,
            format: Option<&str>,
        ) {
            set_scalar_fmt::<$ty>(item, key, value, omit_empty_strings, omit_null, kind, format);
        }
    };
}

named_scalar_ops_fmt!(Uuid, get_uuid_fmt, get_nullable_uuid_fmt, set_uuid_fmt);
named_scalar_ops_fmt!(
    Duration,
    get_time_span_fmt,
    get_nullable_time_span_fmt,
    set_time_span_fmt
);
named_scalar_ops_fmt!(
    DateTime<Utc>,
    get_date_time_fmt,
    get_nullable_date_time_fmt,
    set_date_time_fmt
);
named_scalar_ops_fmt!(
    DateTime<FixedOffset>,
    get_date_time_offset_fmt,
    get_nullable_date_time_offset_fmt,
    set_date_time_offset_fmt
);
