//! Property-based tests for the codec layers.
//!
//! These verify the structural properties the wire format depends on:
//! - Wrapping is reversible for frame-alphabet text
//! - Frame encoding is reversible for any signature/payload combination
//! - Arbitrary input never panics the decoding pipeline

use keyseal_license::{extract_payload, frame, wrap};
use proptest::prelude::*;

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

/// Text drawn from the frame alphabet: a 2-char version tag plus standard
/// base64. Real frame text is always ≡ 2 (mod 4) chars long, so a trailing
/// 1-char line (which `unwrap` drops as junk) cannot occur; the strategy
/// filters those lengths out rather than pretending they round-trip.
fn frame_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9+/=]{1,300}")
        .unwrap()
        .prop_filter("a lone trailing char is dropped as junk", |s| {
            s.len() % 64 != 1
        })
}

fn licensee_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z ]{0,40}").unwrap()
}

fn signature_hex_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9a-f]{0,300}").unwrap()
}

fn payload_bytes_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..500)
}

// =============================================================================
// WRAPPING PROPERTIES
// =============================================================================

mod wrapping_properties {
    use super::*;

    proptest! {
        /// Unwrap inverts wrap for frame-alphabet text.
        #[test]
        fn unwrap_inverts_wrap(raw in frame_text_strategy()) {
            let wrapped = wrap::wrap(&raw, None);
            let unwrapped = wrap::unwrap(&wrapped);
            prop_assert_eq!(unwrapped.as_deref(), Some(raw.as_str()));
        }

        /// The licensee annotation never leaks into the recovered body.
        #[test]
        fn unwrap_inverts_wrap_with_licensee(
            raw in frame_text_strategy(),
            licensee in licensee_strategy(),
        ) {
            let block = wrap::wrap(&raw, Some(&licensee));
            let unwrapped = wrap::unwrap(&block);
            prop_assert_eq!(unwrapped.as_deref(), Some(raw.as_str()));
        }

        /// Body lines never exceed the copy-friendly width.
        #[test]
        fn wrapped_lines_are_bounded(raw in frame_text_strategy()) {
            for line in wrap::wrap(&raw, None).split('\n') {
                prop_assert!(line.len() <= 64);
            }
        }

        /// Unwrap accepts anything without panicking.
        #[test]
        fn unwrap_never_panics(text in any::<String>()) {
            let _ = wrap::unwrap(&text);
        }
    }
}

// =============================================================================
// FRAME PROPERTIES
// =============================================================================

mod frame_properties {
    use super::*;

    proptest! {
        /// Decode inverts encode for any signature/payload pair that fits
        /// the length field.
        #[test]
        fn decode_inverts_encode(
            signature_hex in signature_hex_strategy(),
            payload in payload_bytes_strategy(),
        ) {
            let encoded = frame::encode(frame::FORMAT_VERSION, &signature_hex, &payload).unwrap();
            let decoded = frame::decode(&encoded).unwrap();

            prop_assert_eq!(decoded.version, frame::FORMAT_VERSION);
            prop_assert_eq!(decoded.signature_hex, signature_hex);
            prop_assert_eq!(decoded.payload, payload);
        }

        /// Decode handles arbitrary text without panicking.
        #[test]
        fn decode_never_panics(text in any::<String>()) {
            let _ = frame::decode(&text);
        }

        /// The full read pipeline survives arbitrary license text.
        #[test]
        fn extract_payload_never_panics(text in any::<String>()) {
            let _ = extract_payload(&text);
        }
    }
}
