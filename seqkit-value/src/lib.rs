//! Dynamic values for the seqkit sequence utilities.
//!
//! [`Value`] is what untyped data looks like once it has been brought into
//! Rust: parsed JSON records, mixed lists of strings and numbers, and so on.
//! It knows the handful of things the sequence functions need to ask of an
//! untyped value: is it truthy, what is its `length`, what is stored under
//! a field name, and how does it print.

mod display;
mod error;
mod json;
mod value;

pub use error::{Error, Result};
pub use value::{Record, Value};
