//! Scalar fragments.
//!
//! Zero and empty scalars collapse to a self-closing tag (`<integer/>`,
//! `<real/>`, `<string/>`, `<uuid/>`, short `<date/>`). URIs, booleans and
//! binary payloads always carry content.
use base64::Engine;
use uuid::Uuid;

use crate::{
    encoding::{XmlEncodable, XmlEncoder},
    utils::error::LlsdResult,
    value::{Date, Integer},
};

/// Length of the shortest well-formed date text, `YYYY-MM-DDTHH:MM:SS`.
pub const MIN_DATE_LEN: usize = 19;

impl XmlEncodable for bool {
    fn encode_xml(&self, encoder: &mut XmlEncoder<'_>) -> LlsdResult<()> {
        if *self {
            encoder.write_raw(b"<boolean>true</boolean>")
        } else {
            encoder.write_raw(b"<boolean>false</boolean>")
        }
    }
}

impl XmlEncodable for i64 {
    fn encode_xml(&self, encoder: &mut XmlEncoder<'_>) -> LlsdResult<()> {
        if *self == 0 {
            return encoder.write_raw(b"<integer/>");
        }

        let mut digits = itoa::Buffer::new();
        encoder.write_element(b"integer", digits.format(*self).as_bytes())
    }
}

impl XmlEncodable for Integer {
    fn encode_xml(&self, encoder: &mut XmlEncoder<'_>) -> LlsdResult<()> {
        match self {
            Integer::Native(value) => value.encode_xml(encoder),
            Integer::Big(_) if self.is_zero() => encoder.write_raw(b"<integer/>"),
            Integer::Big(value) => encoder.write_element(b"integer", value.to_string().as_bytes()),
        }
    }
}

impl XmlEncodable for f64 {
    fn encode_xml(&self, encoder: &mut XmlEncoder<'_>) -> LlsdResult<()> {
        if *self == 0.0 {
            return encoder.write_raw(b"<real/>");
        }

        encoder.write_element(b"real", repr_f64(*self).as_bytes())
    }
}

impl XmlEncodable for Uuid {
    fn encode_xml(&self, encoder: &mut XmlEncoder<'_>) -> LlsdResult<()> {
        if self.is_nil() {
            return encoder.write_raw(b"<uuid/>");
        }

        let mut scratch = Uuid::encode_buffer();
        let text = self.hyphenated().encode_lower(&mut scratch);
        encoder.write_element(b"uuid", text.as_bytes())
    }
}

impl XmlEncodable for Option<Uuid> {
    fn encode_xml(&self, encoder: &mut XmlEncoder<'_>) -> LlsdResult<()> {
        match self {
            Some(uuid) => uuid.encode_xml(encoder),
            None => encoder.write_raw(b"<uuid/>"),
        }
    }
}

impl XmlEncodable for Date {
    fn encode_xml(&self, encoder: &mut XmlEncoder<'_>) -> LlsdResult<()> {
        let text = self.to_text();
        if text.len() < MIN_DATE_LEN {
            return encoder.write_raw(b"<date/>");
        }

        encoder.write_raw(b"<date>")?;
        encoder.write_raw(text.as_bytes())?;
        encoder.write_raw(b"Z</date>")
    }
}

impl XmlEncoder<'_> {
    /// `<string>` with escaped content, `<string/>` when empty.
    pub fn write_string(&mut self, text: &str) -> LlsdResult<()> {
        if text.is_empty() {
            return self.write_raw(b"<string/>");
        }

        self.write_raw(b"<string>")?;
        self.write_escaped(text.as_bytes())?;
        self.write_raw(b"</string>")
    }

    /// `<uri>` with escaped content. Empty URIs keep both tags.
    pub fn write_uri(&mut self, text: &str) -> LlsdResult<()> {
        self.write_raw(b"<uri>")?;
        self.write_escaped(text.as_bytes())?;
        self.write_raw(b"</uri>")
    }

    /// `<binary>` holding single-line standard base64 followed by one newline.
    pub fn write_binary(&mut self, bytes: &[u8]) -> LlsdResult<()> {
        let mut text = base64::engine::general_purpose::STANDARD.encode(bytes);
        text.push('\n');
        self.write_element(b"binary", text.as_bytes())
    }
}

/// Shortest round-trip decimal text for `value`, laid out like a `repr`:
///
/// - fixed notation when `-4 < decpt <= 16`, with `.0` appended to integral
///   values (`100.0`, `0.0001`);
/// - otherwise scientific notation with a signed, at least two-digit exponent
///   (`1e+16`, `1.5e-05`);
/// - `inf`, `-inf` and `nan` for non-finite values.
///
/// Here `decpt` is the position of the decimal point relative to the first
/// significant digit, i.e. `value = 0.d1d2d3... * 10^decpt`.
pub fn repr_f64(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }

    let mut buffer = ryu::Buffer::new();
    let shortest = buffer.format_finite(value);

    let (negative, unsigned) = match shortest.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, shortest),
    };
    let (mantissa, exponent) = match unsigned.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, decimal_exponent(exponent)),
        None => (unsigned, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let joined = format!("{int_part}{frac_part}");
    let significant = joined.trim_start_matches('0');
    let leading_zeros = (joined.len() - significant.len()) as i32;
    let digits = significant.trim_end_matches('0');
    let decpt = int_part.len() as i32 + exponent - leading_zeros;

    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push('-');
    }

    if digits.is_empty() {
        out.push_str("0.0");
        return out;
    }

    let ndigits = digits.len() as i32;
    if decpt <= -4 || decpt > 16 {
        out.push_str(&digits[..1]);
        if ndigits > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        let exp = decpt - 1;
        out.push('e');
        out.push(if exp < 0 { '-' } else { '+' });
        let mut exp_digits = itoa::Buffer::new();
        let magnitude = exp_digits.format(exp.unsigned_abs());
        if magnitude.len() < 2 {
            out.push('0');
        }
        out.push_str(magnitude);
    } else if decpt <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat_n('0', (-decpt) as usize));
        out.push_str(digits);
    } else if decpt < ndigits {
        let split = decpt as usize;
        out.push_str(&digits[..split]);
        out.push('.');
        out.push_str(&digits[split..]);
    } else {
        out.push_str(digits);
        out.extend(std::iter::repeat_n('0', (decpt - ndigits) as usize));
        out.push_str(".0");
    }

    out
}

/// Value of a `ryu` exponent, an optional `-` followed by decimal digits.
fn decimal_exponent(text: &str) -> i32 {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, text),
    };
    debug_assert!(!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));

    let magnitude = digits
        .bytes()
        .fold(0i32, |acc, b| acc * 10 + i32::from(b - b'0'));
    if negative { -magnitude } else { magnitude }
}
