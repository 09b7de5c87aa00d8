//! Runtime get/set primitives over `Item`, invoked by generated `to_item`
//! and `from_item` functions. Each pair implements the contract in spec
//! §4.9: missing+Required fails, missing+Optional and `Null` yield a zero
//! value (or `None` for the nullable variant), and `set_*` honors the
//! omit-null / omit-empty-collection flags baked in by the derive crate.

mod collection;
mod enum_;
mod format;
mod nested;
mod scalar;

pub use nested::{get_nested, get_nullable_nested};
pub use collection::{
    get_binary_set, get_list, get_map, get_nullable_binary_set, get_nullable_list,
    get_nullable_map, get_nullable_number_set, get_nullable_string_set, get_number_set,
    get_string_set, set_binary_set, set_list, set_map, set_number_set, set_string_set,
};
pub use enum_::{get_enum, get_nullable_enum, set_enum, AvEnum, EnumFormat};
pub use format::{parse_failure, text_for_kind, value_for_kind};
pub use scalar::{
    get_blob, get_bool, get_byte, get_date_time, get_date_time_offset, get_date_time_offset_fmt,
    get_date_time_fmt, get_decimal, get_double, get_float, get_int, get_long, get_nullable_blob,
    get_nullable_bool, get_nullable_byte, get_nullable_date_time, get_nullable_date_time_fmt,
    get_nullable_date_time_offset, get_nullable_date_time_offset_fmt, get_nullable_decimal,
    get_nullable_double, get_nullable_float, get_nullable_int, get_nullable_long,
    get_nullable_scalar, get_nullable_scalar_fmt, get_nullable_short, get_nullable_string,
    get_nullable_time_span, get_nullable_time_span_fmt, get_nullable_uuid, get_nullable_uuid_fmt,
    get_scalar, get_scalar_fmt, get_short, get_string, get_time_span, get_time_span_fmt, get_uuid,
    get_uuid_fmt, set_blob, set_bool, set_byte, set_date_time, set_date_time_fmt,
    set_date_time_offset, set_date_time_offset_fmt, set_decimal, set_double, set_float, set_int,
    set_long, set_scalar, set_scalar_fmt, set_short, set_string, set_time_span, set_time_span_fmt,
    set_uuid, set_uuid_fmt, TextScalar,
};
