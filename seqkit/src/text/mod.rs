// Small helpers over strings that travel with the sequence utilities.

mod color;
mod json;
mod url;

pub use color::{extend_hex, hex_to_rgb, Rgb};
pub use json::is_valid_json;
pub use url::url_parameters;
