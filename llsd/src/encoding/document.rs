//! The `<llsd>` document envelope.
use log::debug;

use crate::{
    encoding::{XmlEncodable, XmlEncoder},
    utils::{conf::EncoderConfig, error::LlsdResult},
    value::Value,
};

/// Fixed document prologue. No newline follows it.
pub const PROLOGUE: &[u8] = b"<?xml version=\"1.0\" ?><llsd>";

/// Closing tag of the document.
pub const EPILOGUE: &[u8] = b"</llsd>";

/// Encode `value` as a complete LLSD XML document using the default
/// configuration.
///
/// ```rust
/// # use llsd::{to_xml, value::Value};
/// let xml = to_xml(&Value::from(42)).unwrap();
/// assert_eq!(xml, b"<?xml version=\"1.0\" ?><llsd><integer>42</integer></llsd>");
/// ```
pub fn to_xml(value: &Value) -> LlsdResult<Vec<u8>> {
    to_xml_with(value, &EncoderConfig::default())
}

/// Encode `value` as a complete LLSD XML document.
///
/// Either the whole document is returned or nothing is: on error the
/// partially written buffer is dropped.
pub fn to_xml_with(value: &Value, config: &EncoderConfig) -> LlsdResult<Vec<u8>> {
    encode_document(value, config)
}

/// [`to_xml`], returning the document as a `String`.
pub fn to_xml_string(value: &Value) -> LlsdResult<String> {
    Ok(String::from_utf8(to_xml(value)?)?)
}

/// Wrap any encodable fragment in the document envelope.
pub fn encode_document<T>(fragment: &T, config: &EncoderConfig) -> LlsdResult<Vec<u8>>
where
    T: XmlEncodable + ?Sized,
{
    let mut encoder = XmlEncoder::new(config)?;
    let result = encoder
        .write_raw(PROLOGUE)
        .and_then(|()| encoder.encode(fragment))
        .and_then(|()| encoder.write_raw(EPILOGUE));

    if let Err(err) = result {
        debug!(
            "LLSD encode aborted after {} bytes: {}",
            encoder.len(),
            err
        );
        return Err(err);
    }

    debug!(
        "encoded LLSD document: {} bytes, {} buffer reallocations",
        encoder.len(),
        encoder.buffer().reallocations()
    );
    Ok(encoder.finish())
}
