//! XML text escaping straight into a [`GrowBuf`].
use crate::{encoding::buffer::GrowBuf, utils::error::LlsdResult};

/// Entity text for the bytes that must be escaped, `None` for everything else.
#[inline]
fn entity(byte: u8) -> Option<&'static [u8]> {
    match byte {
        b'&' => Some(b"&amp;"),
        b'<' => Some(b"&lt;"),
        b'>' => Some(b"&gt;"),
        _ => None,
    }
}

/// Append `text` with `&`, `<` and `>` replaced by their entities.
///
/// Room for the unescaped length is reserved up front, which covers the
/// common case of text with nothing to escape. Each entity then re-reserves
/// for the unscanned tail plus all expansion accumulated so far before it is
/// written, so plain bytes never need their own `ensure`.
pub fn escape_append(buf: &mut GrowBuf, text: &[u8]) -> LlsdResult<()> {
    let len = text.len();
    buf.ensure(len)?;

    let mut excess = 0;
    for (i, &byte) in text.iter().enumerate() {
        match entity(byte) {
            Some(replacement) => {
                excess += replacement.len() - 1;
                buf.ensure(len - i + excess)?;
                buf.append_raw(replacement);
            }
            None => buf.append_byte(byte),
        }
    }

    Ok(())
}
