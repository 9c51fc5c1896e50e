//! Binary codec matrix: literal wire scenarios, round-trips, the
//! truncation law, and the decode failure taxonomy.

use std::collections::BTreeMap;

use isla::{
    decode_binary, decode_binary_with_consumed, encode_binary, BinError, BinValue,
};

const FILE_HEADER: &[u8] = b"ISLAb\x00\x00\x01";

fn payload(body: &[u8]) -> Vec<u8> {
    let mut bytes = FILE_HEADER.to_vec();
    bytes.extend_from_slice(body);
    bytes
}

#[test]
fn leaves_and_empties_scenario() {
    // list of four leaves: ";)", ":3", empty, ":".
    let input = payload(&[
        0x04, 0x00, 0x00, 0x10, //
        0x02, 0x00, 0x00, 0x00, b';', b')', //
        0x02, 0x00, 0x00, 0x00, b':', b'3', //
        0x00, 0x00, 0x00, 0x00, //
        0x01, 0x00, 0x00, 0x00, b':', //
    ]);
    let v = decode_binary(&input).unwrap();
    assert_eq!(v.as_list().unwrap().len(), 4);
    assert_eq!(v[0], *b";)");
    assert_eq!(v[1], *b":3");
    assert_eq!(v[2], BinValue::leaf([]));
    assert_eq!(v[3], *b":");
}

#[test]
fn nested_grid_scenario() {
    let v = BinValue::map([(
        b"grid".to_vec(),
        BinValue::list([
            BinValue::list([b"\x01".as_slice(), b"\x02", b"\x03"]),
            BinValue::list([b"\x04".as_slice(), b"\x05", b"\x06"]),
        ]),
    )]);
    let bytes = encode_binary(&v).unwrap();
    let back = decode_binary(&bytes).unwrap();
    assert_eq!(back["grid"][1][2], *b"\x06");
}

#[test]
fn roundtrip_matrix() {
    let values = vec![
        BinValue::leaf([]),
        BinValue::leaf(*b"hello"),
        BinValue::leaf([0x00, 0xff, 0x7f, 0x80]),
        BinValue::List(Vec::new()),
        BinValue::list([BinValue::leaf([1u8]), BinValue::leaf([]), BinValue::leaf([2u8])]),
        BinValue::Map(BTreeMap::new()),
        BinValue::map([
            (b"a".to_vec(), BinValue::leaf(*b"x")),
            (Vec::new(), BinValue::leaf(*b"empty key")),
            (vec![0xff, 0x00], BinValue::leaf(*b"binary key")),
        ]),
        BinValue::map([(
            b"deep".to_vec(),
            BinValue::list([BinValue::map([(b"leaf".to_vec(), BinValue::leaf([9u8]))])]),
        )]),
    ];
    for v in values {
        let bytes = encode_binary(&v).unwrap_or_else(|e| panic!("encode failed for {v}: {e}"));
        let back =
            decode_binary(&bytes).unwrap_or_else(|e| panic!("decode failed for {v}: {e}"));
        assert_eq!(back, v, "roundtrip failed for {v}");
    }
}

#[test]
fn encode_is_idempotent() {
    let v = BinValue::map([
        (b"k".to_vec(), BinValue::list([BinValue::leaf(*b"x")])),
        (b"j".to_vec(), BinValue::leaf([])),
    ]);
    let once = encode_binary(&v).unwrap();
    let twice = encode_binary(&decode_binary(&once).unwrap()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn truncation_law() {
    let v = BinValue::map([(
        b"grid".to_vec(),
        BinValue::list([BinValue::leaf(*b"payload"), BinValue::leaf([])]),
    )]);
    let bytes = encode_binary(&v).unwrap();
    for cut in 0..bytes.len() {
        let err = decode_binary(&bytes[..cut]);
        assert!(
            matches!(
                err,
                Err(BinError::BadHeader { .. }) | Err(BinError::DecodeOutOfBounds { .. })
            ),
            "prefix of {cut} bytes decoded to {err:?}"
        );
    }
}

#[test]
fn every_unknown_tag_is_invalid_type() {
    for tag in 3u8..=15 {
        let input = payload(&[0x00, 0x00, 0x00, tag << 4]);
        assert_eq!(
            decode_binary(&input).unwrap_err(),
            BinError::InvalidType { tag },
            "tag {tag}"
        );
    }
}

#[test]
fn header_taxonomy() {
    assert!(matches!(
        decode_binary(b""),
        Err(BinError::BadHeader { .. })
    ));
    assert!(matches!(
        decode_binary(b"ISLAb\x00\x00"),
        Err(BinError::BadHeader { .. })
    ));
    // Wrong version.
    assert!(matches!(
        decode_binary(b"ISLAb\x00\x01\x00\x00\x00\x00\x00"),
        Err(BinError::BadHeader { .. })
    ));
    // Text magic fed to the binary decoder.
    assert!(matches!(
        decode_binary(b"ISLA1\x00\x00\x01"),
        Err(BinError::BadHeader { .. })
    ));
}

#[test]
fn trailing_bytes_are_tolerated() {
    let mut bytes = encode_binary(&BinValue::leaf(*b"x")).unwrap();
    let exact = bytes.len();
    bytes.extend_from_slice(&[0xde, 0xad]);
    let (v, consumed) = decode_binary_with_consumed(&bytes).unwrap();
    assert_eq!(v, BinValue::leaf(*b"x"));
    assert_eq!(consumed, exact);
    assert_eq!(decode_binary(&bytes).unwrap(), v);
}

#[test]
fn bare_leaf_is_encodable_at_top() {
    let bytes = encode_binary(&BinValue::leaf(*b"alone")).unwrap();
    assert_eq!(decode_binary(&bytes).unwrap(), *b"alone");
}

#[test]
fn out_of_bounds_errors_carry_context() {
    // Map entry with a key length promising more than remains.
    let input = payload(&[
        0x01, 0x00, 0x00, 0x20, // map, 1 entry
        0x0a, 0x00, 0x00, 0x00, b'k', // key length 10, one byte present
    ]);
    assert_eq!(
        decode_binary(&input).unwrap_err(),
        BinError::DecodeOutOfBounds {
            what: "map key",
            needed: 10,
            remaining: 1,
        }
    );
}
