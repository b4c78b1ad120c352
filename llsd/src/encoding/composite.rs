//! Arrays, maps and the per-variant dispatch.
use log::debug;

use crate::{
    encoding::{XmlEncodable, XmlEncoder},
    utils::error::{InvalidValueReason, LlsdResult},
    value::{Array, LazySeq, Value},
};

impl XmlEncodable for Value {
    fn encode_xml(&self, encoder: &mut XmlEncoder<'_>) -> LlsdResult<()> {
        match self {
            Value::Undefined => encoder.write_raw(b"<undef/>"),
            Value::Boolean(value) => value.encode_xml(encoder),
            Value::Integer(value) => value.encode_xml(encoder),
            Value::Real(value) => value.encode_xml(encoder),
            Value::String(text) => encoder.write_string(text),
            Value::Uuid(uuid) => uuid.encode_xml(encoder),
            Value::Date(date) => date.encode_xml(encoder),
            Value::Uri(text) => encoder.write_uri(text),
            Value::Binary(bytes) => encoder.write_binary(bytes),
            Value::Array(array) => array.encode_xml(encoder),
            Value::Map(pairs) => pairs.as_slice().encode_xml(encoder),
            Value::Indirect(inner) => {
                encoder.nested(|encoder| inner.as_ref().encode_xml(encoder))
            }
        }
    }
}

impl XmlEncodable for [Value] {
    fn encode_xml(&self, encoder: &mut XmlEncoder<'_>) -> LlsdResult<()> {
        encoder.nested(|encoder| {
            if self.is_empty() {
                return encoder.write_raw(b"<array/>");
            }

            encoder.write_raw(b"<array>")?;
            for element in self {
                element.encode_xml(encoder)?;
            }
            encoder.write_raw(b"</array>")
        })
    }
}

impl XmlEncodable for LazySeq {
    /// Drains the sequence to exhaustion, encoding each element as it arrives.
    fn encode_xml(&self, encoder: &mut XmlEncoder<'_>) -> LlsdResult<()> {
        encoder.nested(|encoder| {
            let Some(first) = self.next_value() else {
                return encoder.write_raw(b"<array/>");
            };

            let limit = encoder.config().max_lazy_elements;
            encoder.write_raw(b"<array>")?;

            let mut drawn = 0usize;
            let mut current = Some(first);
            while let Some(element) = current {
                drawn += 1;
                if let Some(max) = limit.filter(|&max| drawn > max) {
                    debug!("lazy sequence exceeded the {max} element ceiling");
                    return Err(InvalidValueReason::LazySequenceTooLong { max }.into());
                }

                element.encode_xml(encoder)?;
                current = self.next_value();
            }

            encoder.write_raw(b"</array>")
        })
    }
}

impl XmlEncodable for Array {
    fn encode_xml(&self, encoder: &mut XmlEncoder<'_>) -> LlsdResult<()> {
        match self {
            Array::Elements(elements) => elements.as_slice().encode_xml(encoder),
            Array::Lazy(seq) => seq.encode_xml(encoder),
        }
    }
}

/// Map pairs, emitted in slice order as `<key>` followed by the value.
impl XmlEncodable for [(String, Value)] {
    fn encode_xml(&self, encoder: &mut XmlEncoder<'_>) -> LlsdResult<()> {
        encoder.nested(|encoder| {
            if self.is_empty() {
                return encoder.write_raw(b"<map/>");
            }

            encoder.write_raw(b"<map>")?;
            for (key, value) in self {
                encoder.write_raw(b"<key>")?;
                encoder.write_escaped(key.as_bytes())?;
                encoder.write_raw(b"</key>")?;
                value.encode_xml(encoder)?;
            }
            encoder.write_raw(b"</map>")
        })
    }
}
