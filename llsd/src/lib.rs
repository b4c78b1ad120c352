//! LLSD value model and XML encoder.
//!
//! LLSD (Linden Lab Structured Data) is a self-describing value format. This
//! crate turns a [`value::Value`] tree into the LLSD XML text encoding, byte
//! for byte as other LLSD XML producers emit it:
//!
//! ```rust
//! use llsd::{to_xml_string, value::Value};
//!
//! let value = Value::map([
//!     ("name", Value::from("a&b")),
//!     ("sizes", Value::array([1, 2])),
//! ]);
//! assert_eq!(
//!     to_xml_string(&value).unwrap(),
//!     "<?xml version=\"1.0\" ?><llsd><map>\
//!      <key>name</key><string>a&amp;b</string>\
//!      <key>sizes</key><array><integer>1</integer><integer>2</integer></array>\
//!      </map></llsd>"
//! );
//! ```
//!
//! Decoding is not provided. Encoding is synchronous and allocation is the
//! only side effect; see [`utils::conf::EncoderConfig`] for the optional
//! safety ceilings.

pub mod encoding;
pub mod utils;
pub mod value;

pub use encoding::document::{to_xml, to_xml_string, to_xml_with};
pub use utils::error::{Error, LlsdResult};
pub use value::Value;

pub extern crate chrono;
pub extern crate num_bigint;
pub extern crate uuid;
