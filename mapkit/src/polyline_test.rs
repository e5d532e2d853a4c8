#![allow(clippy::float_cmp)]

use super::*;

const GOOGLE_SAMPLE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

fn sample_path() -> Vec<Coordinate> {
    vec![
        Coordinate::new(38.5, -120.2),
        Coordinate::new(40.7, -120.95),
        Coordinate::new(43.252, -126.453),
    ]
}

// --- decode ---

#[test]
fn decode_google_reference_sample() {
    assert_eq!(decode(GOOGLE_SAMPLE).unwrap(), sample_path());
}

#[test]
fn decode_empty_is_empty_path() {
    assert!(decode("").unwrap().is_empty());
}

#[test]
fn decode_preserves_order() {
    let path = decode(GOOGLE_SAMPLE).unwrap();
    let lats: Vec<f64> = path.iter().map(|c| c.lat).collect();
    assert_eq!(lats, vec![38.5, 40.7, 43.252]);
}

#[test]
fn decode_single_origin_point() {
    assert_eq!(decode("??").unwrap(), vec![Coordinate::new(0.0, 0.0)]);
}

#[test]
fn decode_rejects_latitude_without_longitude() {
    assert_eq!(decode("_p~iF"), Err(PolylineError::Truncated { offset: 5 }));
}

#[test]
fn decode_rejects_value_cut_mid_chunk() {
    // `_` carries the continuation bit, so the value never terminates.
    assert_eq!(decode("_p~iF~ps|"), Err(PolylineError::Truncated { offset: 9 }));
}

#[test]
fn decode_rejects_bytes_below_printable_range() {
    assert_eq!(decode("_p iF~ps|U"), Err(PolylineError::InvalidByte { offset: 2, byte: b' ' }));
}

#[test]
fn decode_rejects_non_ascii() {
    let err = decode("é?").unwrap_err();
    assert!(matches!(err, PolylineError::InvalidByte { offset: 0, .. }));
}

#[test]
fn decode_rejects_runaway_value() {
    let runaway = "~".repeat(20);
    assert_eq!(decode(&runaway), Err(PolylineError::Overflow { offset: 0 }));
}

#[test]
fn decode_rejects_bits_past_the_accumulator() {
    // Twelve full chunks reach shift 60; `O` then sets bit 4 of the last chunk.
    let encoded = format!("{}O?", "~".repeat(12));
    assert_eq!(decode(&encoded), Err(PolylineError::Overflow { offset: 0 }));
}

#[test]
fn decode_accepts_last_chunk_that_fits() {
    let encoded = format!("{}N?", "~".repeat(12));
    let path = decode(&encoded).unwrap();
    assert_eq!(path.len(), 1);
    assert_eq!(path[0].lon, 0.0);
}

#[test]
fn decode_with_precision_6_scales_down() {
    let codec = PolylineCodec::PRECISION_6;
    let encoded = codec.encode(&[Coordinate::new(28.613_939, 77.209_021)]);
    let decoded = codec.decode(&encoded).unwrap();
    assert_eq!(decoded, vec![Coordinate::new(28.613_939, 77.209_021)]);
    // Read with the wrong precision, the same string lands ten times too far out.
    let misread = PolylineCodec::GOOGLE.decode(&encoded).unwrap();
    assert!((misread[0].lat - 286.139_39).abs() < 1e-9);
}

// --- encode ---

#[test]
fn encode_google_reference_sample() {
    assert_eq!(encode(&sample_path()), GOOGLE_SAMPLE);
}

#[test]
fn encode_empty_path_is_empty_string() {
    assert_eq!(encode(&[]), "");
}

#[test]
fn encode_rounds_to_precision() {
    let coarse = encode(&[Coordinate::new(28.613_94, 77.209_02)]);
    let fine = encode(&[Coordinate::new(28.613_941_2, 77.209_018_8)]);
    assert_eq!(coarse, fine);
}

#[test]
fn encode_out_of_range_does_not_panic() {
    let encoded = encode(&[Coordinate::new(1e300, 0.0), Coordinate::new(-1e300, 0.0)]);
    assert!(!encoded.is_empty());
}

#[test]
fn encode_non_finite_as_origin() {
    assert_eq!(encode(&[Coordinate::new(f64::NAN, f64::INFINITY - f64::INFINITY)]), "??");
}

// --- round trip ---

#[test]
fn decode_then_encode_is_identity_on_valid_input() {
    let path = decode(GOOGLE_SAMPLE).unwrap();
    assert_eq!(encode(&path), GOOGLE_SAMPLE);
}

#[test]
fn encode_then_decode_is_identity_at_codec_precision() {
    let path = vec![
        Coordinate::new(28.6139, 77.209),
        Coordinate::new(28.61, 77.21),
        Coordinate::new(-33.868_82, 151.209_29),
        Coordinate::new(0.0, -0.000_01),
    ];
    assert_eq!(decode(&encode(&path)).unwrap(), path);
}

#[test]
fn codec_default_is_precision_5() {
    assert_eq!(PolylineCodec::default().precision(), 5);
    assert_eq!(PolylineCodec::new(6), PolylineCodec::PRECISION_6);
}

#[test]
fn error_messages_name_the_offset() {
    let msg = PolylineError::InvalidByte { offset: 3, byte: 0x20 }.to_string();
    assert_eq!(msg, "invalid byte 0x20 at offset 3");
    assert_eq!(PolylineError::Truncated { offset: 7 }.to_string(), "encoded path truncated at byte 7");
}
