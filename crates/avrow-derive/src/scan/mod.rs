//! Model Scanner (spec §4.1): turns the `DeriveInput` rustc hands the
//! proc-macro into a `MapperDescriptor` and records the model's name in
//! the process-local `MapperRegistry` so later expansions in this
//! compilation can detect it as a nested-delegate target.

pub mod attrs;
pub mod mapper_decl;

pub use mapper_decl::{MapperDescriptor, MapperFieldDescriptor};
