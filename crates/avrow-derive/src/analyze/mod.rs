//! The analyzer stages downstream of the Model Scanner (spec §4.2–§4.6):
//! classify each member's Rust-level shape, resolve it against the scalar
//! type table, detect collection containers, and decide whether a nested
//! object's delegate call would introduce a mapper cycle.

pub mod collection;
pub mod ctor;
pub mod member;
pub mod nested;
pub mod type_strategy;
