//! Display formatting for tag keys and raw tag values.
//!
//! Both the tabular view and the JSON dump go through these two functions so
//! that every rendering of a tag shows the same string.

mod key;
mod value;

pub use key::format_key;
pub use value::{stringify_value, BINARY_DATA};
