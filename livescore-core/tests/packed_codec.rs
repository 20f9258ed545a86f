use livescore_core::Format;
use livescore_core::DecodedPacked;
use livescore_core::packed::{decode, encode, is_encodable};
use proptest::prelude::*;
use std::cmp::Ordering;

fn packed_value(points: i32, seconds: i32, missed: i32) -> i32 {
    (99 - points) * 10_000_000 + seconds * 100 + missed
}

proptest! {
    #[test]
    fn encode_inverts_decode(points in 0..=99i32, seconds in 1..=99_999i32, missed in 0..=99i32) {
        let value = packed_value(points, seconds, missed);
        prop_assume!(value > 0);
        prop_assert_eq!(encode(&decode(value)), value);
    }

    #[test]
    fn encoding_never_yields_a_stray_negative(solved in 0..1_000u32, attempted in 0..1_000u32, centiseconds in 1..=i32::MAX) {
        let decoded = DecodedPacked::new(solved, attempted, centiseconds);
        let value = encode(&decoded);
        if is_encodable(&decoded) {
            prop_assert!(value > 0);
        } else {
            prop_assert_eq!(value, -1);
        }
    }

    #[test]
    fn decoded_triples_satisfy_invariants(points in 0..=99i32, seconds in 1..=99_999i32, missed in 0..=99i32) {
        let decoded = decode(packed_value(points, seconds, missed));
        prop_assert!(decoded.attempted >= decoded.solved);
        prop_assert_eq!(decoded.points(), i64::from(points));
        prop_assert_eq!(decoded.centiseconds, seconds * 100);
    }

    #[test]
    fn more_points_always_rank_higher(points in 1..=99i32, seconds in 1..=99_999i32, other_seconds in 1..=99_999i32) {
        let better = packed_value(points, seconds, 0);
        let worse = packed_value(points - 1, other_seconds, 0);
        prop_assert_eq!(Format::Packed.compare(better, worse), Ordering::Less);
    }
}

#[test]
fn documented_example_decodes() {
    let decoded = decode(900_348_002);
    assert_eq!((decoded.solved, decoded.attempted, decoded.centiseconds), (11, 13, 348_000));
}
