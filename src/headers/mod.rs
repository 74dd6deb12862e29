//! Case-insensitive HTTP header map.
//!
//! Field names are lower-cased when they enter the map, and setting a name that is already
//! present appends the new value separated by `", "`, the way multiple field lines with the same
//! name are combined in [RFC 9110].
//!
//! [RFC 9110]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-field-order>
mod map;
mod iter;
mod parse;
mod error;


pub use map::HeaderMap;
pub use iter::Iter;
pub use parse::HeaderLine;
pub use error::HeaderError;
