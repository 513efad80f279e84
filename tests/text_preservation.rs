//! The codecs move code units around and nothing else: grapheme clusters are
//! kept intact and no normalization is applied.

use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;
use utf_helpers::{utf16, utf8};

const FAMILY: &str = "\u{1F468}\u{1F3FC}\u{200D}\u{1F469}\u{1F3FC}\u{200D}\u{1F467}\u{1F3FC}\u{200D}\u{1F467}\u{1F3FC}";

#[test]
fn test_zwj_sequence_stays_one_grapheme() {
    assert_eq!(1, FAMILY.graphemes(true).count());

    let via_utf8 = utf8::decode(&utf8::encode(FAMILY)).to_string_lossy();
    assert_eq!(1, via_utf8.graphemes(true).count());
    assert_eq!(FAMILY, via_utf8);

    let via_utf16 = utf16::decode(&utf16::encode(FAMILY))
        .map(|text| text.to_string_lossy())
        .unwrap_or_default();
    assert_eq!(1, via_utf16.graphemes(true).count());
    assert_eq!(FAMILY, via_utf16);
}

#[test]
fn test_no_normalization() {
    let composed = "\u{E9}";
    let decomposed = composed.nfd().collect::<String>();
    assert_eq!("e\u{301}", decomposed);

    assert_eq!(vec![0xC3, 0xA9], utf8::encode(composed));
    assert_eq!(vec![0x65, 0xCC, 0x81], utf8::encode(&decomposed));
    assert_eq!(utf8::decode(&[0x65, 0xCC, 0x81]), "e\u{301}");
    assert_eq!(vec![0x65, 0x301], utf16::encode(&decomposed));

    let round_trip = utf8::decode(&utf8::encode(&decomposed)).to_string_lossy();
    assert_eq!(decomposed, round_trip);
    assert_eq!(composed, round_trip.nfc().collect::<String>());
}
