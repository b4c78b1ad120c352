//! LLSD XML encoding.
//!
//! Layers, bottom-up:
//!
//! - [`buffer`]: the growable output buffer every other layer writes through.
//! - [`escape`]: XML entity escaping on top of the buffer.
//! - [`scalar`]: one fragment per scalar variant (`<integer>`, `<real>`, ...).
//! - [`composite`]: recursive `<array>`/`<map>` encoding and the per-variant
//!   dispatch for [`Value`](crate::value::Value).
//! - [`document`]: the `<llsd>` envelope and the public entry points.
//!
//! The byte layout is compared bit-exact by consumers, so every tag name,
//! self-closing form and number layout here is part of the wire contract.
use crate::{
    encoding::buffer::GrowBuf,
    utils::{
        conf::EncoderConfig,
        error::{InvalidValueReason, LlsdResult},
    },
};

pub mod buffer;
pub mod composite;
pub mod document;
pub mod escape;
pub mod scalar;

/// Types that can append their LLSD XML fragment to an encoder.
pub trait XmlEncodable {
    fn encode_xml(&self, encoder: &mut XmlEncoder<'_>) -> LlsdResult<()>;
}

impl<T: XmlEncodable + ?Sized> XmlEncodable for &T {
    #[inline]
    fn encode_xml(&self, encoder: &mut XmlEncoder<'_>) -> LlsdResult<()> {
        (**self).encode_xml(encoder)
    }
}

/// State for one encode: the output buffer, the active configuration and
/// the current nesting depth.
///
/// An encoder is created per top-level call and consumed when the finished
/// bytes are taken out, so no two encodes ever share a buffer.
pub struct XmlEncoder<'c> {
    buf: GrowBuf,
    config: &'c EncoderConfig,
    depth: usize,
}

impl<'c> XmlEncoder<'c> {
    pub fn new(config: &'c EncoderConfig) -> LlsdResult<Self> {
        Ok(Self {
            buf: GrowBuf::with_capacity(config.initial_capacity)?,
            config,
            depth: 0,
        })
    }

    pub fn config(&self) -> &EncoderConfig {
        self.config
    }

    /// Encode any [`XmlEncodable`] fragment at the current position.
    pub fn encode<T: XmlEncodable + ?Sized>(&mut self, value: &T) -> LlsdResult<()> {
        value.encode_xml(self)
    }

    /// Append raw markup. Nothing is escaped.
    #[inline]
    pub fn write_raw(&mut self, bytes: &[u8]) -> LlsdResult<()> {
        self.buf.extend(bytes)
    }

    /// Append text with XML entities escaped.
    #[inline]
    pub fn write_escaped(&mut self, text: &[u8]) -> LlsdResult<()> {
        escape::escape_append(&mut self.buf, text)
    }

    /// Append `<name>content</name>` with `content` copied verbatim, reserving
    /// room for the whole element at once.
    pub fn write_element(&mut self, name: &[u8], content: &[u8]) -> LlsdResult<()> {
        self.buf.ensure(name.len() * 2 + 5 + content.len())?;
        self.buf.append_byte(b'<');
        self.buf.append_raw(name);
        self.buf.append_byte(b'>');
        self.buf.append_raw(content);
        self.buf.append_raw(b"</");
        self.buf.append_raw(name);
        self.buf.append_byte(b'>');
        Ok(())
    }

    /// Run `body` one nesting level deeper, enforcing the configured ceiling.
    pub(crate) fn nested<F>(&mut self, body: F) -> LlsdResult<()>
    where
        F: FnOnce(&mut Self) -> LlsdResult<()>,
    {
        if let Some(max) = self.config.max_depth {
            if self.depth >= max {
                return Err(InvalidValueReason::DepthExceeded { max }.into());
            }
        }

        self.depth += 1;
        let result = body(self);
        self.depth -= 1;
        result
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub(crate) fn buffer(&self) -> &GrowBuf {
        &self.buf
    }

    /// Hand over the written bytes, consuming the encoder.
    pub fn finish(self) -> Vec<u8> {
        self.buf.into_bytes()
    }
}
