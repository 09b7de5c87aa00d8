use crate::{error::RuntimeResult, item::Item};

///
/// ToItem
///
/// Converts a model value into the wire `Item` representation.
/// `#[derive(Mapper)]` always implements both this and `FromItem`.
///
pub trait ToItem {
    fn to_item(&self) -> RuntimeResult<Item>;
}

///
/// FromItem
///
/// Rebuilds a model value from a wire `Item`.
///
pub trait FromItem: Sized {
    fn from_item(item: &Item) -> RuntimeResult<Self>;
}

///
/// MapperHooks
///
/// Optional extension points bracketing each direction's generated body.
/// Every method has a no-op default. `#[mapper(hooks = "off")]` (the
/// default) calls none of these at all. `#[mapper(hooks = "auto")]` calls
/// through and also emits a blank `impl MapperHooks for Model {}`, so every
/// hook is a no-op until the user overrides one. `#[mapper(hooks =
/// "manual")]` calls through but emits no impl, so the user's own `impl
/// MapperHooks for Model { .. }` is the one that runs.
///
pub trait MapperHooks: Sized {
    /// Invoked on a fresh, empty item before any member is written.
    fn before_to_item(&self, _item: &mut Item) {}

    /// Invoked after every member has been written, before the item is
    /// returned from `to_item`.
    fn after_to_item(&self, _item: &mut Item) {}

    /// Invoked on the source item before any member is read.
    fn before_from_item(_item: &Item) {}

    /// Invoked on the freshly constructed model, after every member has
    /// been populated, before it is returned from `from_item`.
    fn after_from_item(_item: &Item, _model: &mut Self) {}
}
