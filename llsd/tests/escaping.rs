use llsd::{
    Value, to_xml_string, to_xml_with,
    utils::conf::EncoderConfig,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Characters the generator draws from: every reserved character, the
/// entity spellings themselves, quotes and some multibyte text.
const ALPHABET: &[&str] = &[
    "&", "<", ">", "a", "b", " ", "\"", "'", ";", "#", "amp", "lt", "gt", "é", "日本", "\n",
];

/// Standard XML entity decoding for the three entities the encoder emits.
fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

fn random_text(rng: &mut impl Rng, max_pieces: usize) -> String {
    let pieces = rng.random_range(1..=max_pieces);
    (0..pieces)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
        .collect()
}

fn string_payload(document: &str) -> &str {
    document
        .strip_prefix("<?xml version=\"1.0\" ?><llsd><string>")
        .and_then(|rest| rest.strip_suffix("</string></llsd>"))
        .expect("string document")
}

#[test]
fn escape_round_trips_random_text() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x11_5d);

    for _ in 0..500 {
        let text = random_text(&mut rng, 64);
        let document = to_xml_string(&Value::from(text.as_str())).unwrap();
        let payload = string_payload(&document);

        assert!(!payload.contains('<') && !payload.contains('>'));
        assert_eq!(unescape(payload), text, "payload {payload:?}");
    }
}

#[test]
fn map_keys_round_trip_random_text() {
    let mut rng = ChaCha20Rng::seed_from_u64(0xca_fe);

    for _ in 0..100 {
        let key = random_text(&mut rng, 16);
        let document = to_xml_string(&Value::map([(key.as_str(), Value::Undefined)])).unwrap();
        let escaped_key = document
            .split_once("<key>")
            .and_then(|(_, rest)| rest.split_once("</key>"))
            .map(|(key, _)| key)
            .expect("key element");

        assert_eq!(unescape(escaped_key), key);
    }
}

#[test]
fn output_is_independent_of_initial_capacity() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let texts: Vec<String> = (0..20).map(|_| random_text(&mut rng, 400)).collect();
    let value = Value::array(texts.iter().map(String::as_str).collect::<Vec<_>>());

    let reference = to_xml_with(&value, &EncoderConfig::default()).unwrap();
    for capacity in [1, 2, 5, 31, 256, 1 << 16] {
        let config = EncoderConfig::default().with_initial_capacity(capacity);
        assert_eq!(
            to_xml_with(&value, &config).unwrap(),
            reference,
            "initial capacity {capacity}"
        );
    }
}

#[test]
fn escaped_length_matches_entity_count() {
    let mut rng = ChaCha20Rng::seed_from_u64(99);

    for _ in 0..100 {
        let text = random_text(&mut rng, 128);
        let expected = text.len()
            + 4 * text.matches('&').count()
            + 3 * text.matches('<').count()
            + 3 * text.matches('>').count();

        let document = to_xml_string(&Value::from(text)).unwrap();
        assert_eq!(string_payload(&document).len(), expected);
    }
}
