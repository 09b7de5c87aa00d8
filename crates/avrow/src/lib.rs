//! Runtime support for `avrow`: the attribute-value `Value`/`Item` types,
//! the `Requiredness`/`AttributeKind` vocabulary shared with the derive
//! crate, and the `runtime::*` get/set primitives invoked by generated
//! `to_item`/`from_item` functions.
#![warn(unreachable_pub)]

pub mod duration;
pub mod error;
pub mod item;
pub mod requiredness;
pub mod runtime;
pub mod traits;
pub mod value;

///
/// Prelude
///
/// Domain vocabulary re-exported for generated code and downstream users;
/// no runtime helper functions live here (those are reached through
/// `avrow::runtime::*`, matching the teacher's split between a vocabulary
/// prelude and an explicit helpers namespace).
///
pub mod prelude {
    pub use crate::{
        error::{RuntimeError, RuntimeResult},
        item::Item,
        requiredness::Requiredness,
        traits::{FromItem, MapperHooks, ToItem},
        value::{AttributeKind, Value},
    };
}

pub use prelude::*;
