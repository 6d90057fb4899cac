//! Small, pure utility functions over sequences.
//!
//! Every function takes its input by reference and returns a new value (or
//! a borrowed sub-slice); nothing here mutates what it is given.
//!
//! ```
//! use seqkit::{chunk, difference, is_sorted, SortOrder};
//!
//! assert_eq!(chunk(&[1, 2, 3, 4, 5], 2).unwrap(), vec![vec![1, 2], vec![3, 4], vec![5]]);
//! assert_eq!(difference(&[1, 2, 3], &[1, 2, 4]), vec![3]);
//! assert_eq!(is_sorted(&[4, 3, 2]), SortOrder::Descending);
//! ```

mod array;
mod csv;
mod error;
mod key;
mod text;
mod truthy;

pub use array::*;
pub use csv::{array_to_csv, join, join_default, json_text_to_csv, json_to_csv, DEFAULT_SEPARATOR};
pub use error::{Error, Result};
pub use key::{Field, FieldAccess, KeySelector, Length};
pub use text::{extend_hex, hex_to_rgb, is_valid_json, url_parameters, Rgb};
pub use truthy::Truthy;

pub use seqkit_value::{Record, Value};
