//! Spec Builder (spec §4.7): combines the Model Scanner's descriptor with
//! every analyzer stage's findings into one `MapperPlan` the Code
//! Renderer consumes without re-deriving any classification decision.

pub mod builder;

pub use builder::{FieldPlan, FieldStrategy, MapperPlan, ResolvedRequiredness};
