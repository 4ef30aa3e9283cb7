//! Integration tests for entities_utilities crate
//!
//! These tests verify big number conversions and indexed set behavior end-to-end.

use entities_utilities::*;
use proptest::prelude::*;

#[test]
fn test_big_number_conversion_integration() {
    let from_i64 = BigNumber::from_i64(-123456789);
    assert_eq!(from_i64.to_i64(), Some(-123456789));

    let from_u64 = BigNumber::from_u64(9876543210);
    assert_eq!(from_u64.to_u64(), Some(9876543210));

    let from_i32 = BigNumber::from_i32(-12345);
    assert_eq!(from_i32.to_i64(), Some(-12345));

    let from_u32 = BigNumber::from_u32(54321);
    assert_eq!(from_u32.to_u64(), Some(54321));
}

#[test]
fn test_big_number_edge_cases() {
    let zero = BigNumber::from_i64(0);
    assert_eq!(zero.to_i64(), Some(0));
    assert_eq!(zero.to_string_base(16), "0");

    let max_i64 = BigNumber::from_i64(i64::MAX);
    assert_eq!(max_i64.to_i64(), Some(i64::MAX));

    let min_i64 = BigNumber::from_i64(i64::MIN);
    assert_eq!(min_i64.to_i64(), Some(i64::MIN));
    assert!(!min_i64.is_positive());

    let max_u64 = BigNumber::from_u64(u64::MAX);
    assert_eq!(max_u64.to_i64(), None);
    assert_eq!(max_u64.to_string_base(16), "ffffffffffffffff");
}

#[test]
fn test_big_number_hex_beyond_u64() {
    let big = BigNumber::from_u64(1).lshift(128);
    let hex = big.to_string_base(16);
    assert_eq!(hex.len(), 33);
    assert!(hex.starts_with('1'));
    assert_eq!(BigNumber::from_string_base(16, &hex), Some(big));
}

#[test]
fn test_indexed_set_reference_table_workflow() {
    // A serializer interning field names while walking records
    let records = [
        vec!["id", "name", "email"],
        vec!["id", "name"],
        vec!["email", "created_at", "id"],
    ];

    let mut names = IndexedSet::new();
    let mut encoded = Vec::new();
    for record in &records {
        let indices: Vec<usize> = record.iter().map(|n| names.add_and_get_index(*n)).collect();
        encoded.push(indices);
    }

    assert_eq!(names.as_slice(), &["id", "name", "email", "created_at"]);
    assert_eq!(encoded, vec![vec![0, 1, 2], vec![0, 1], vec![2, 3, 0]]);

    for (index, name) in names.iter().enumerate() {
        assert_eq!(names.get(index), Some(name));
        assert_eq!(names.index_of(name), Some(index));
        assert!(names.has(name));
    }
    assert_eq!(names.get(names.len()), None);
}

#[test]
fn test_indexed_set_with_big_numbers() {
    let mut set = IndexedSet::new();
    let big = BigNumber::from_u64(u64::MAX).lshift(8);

    assert_eq!(set.add_and_get_index(big.clone()), 0);
    assert_eq!(set.add_and_get_index(BigNumber::zero()), 1);
    assert_eq!(set.add_and_get_index(BigNumber::from_u64(u64::MAX).lshift(8)), 0);
    assert_eq!(set.index_of(&big), Some(0));
    assert_eq!(set.len(), 2);
}

proptest! {
    #[test]
    fn prop_indices_are_first_seen_positions(values in proptest::collection::vec(0u8..16, 0..64)) {
        let mut set = IndexedSet::new();
        let mut first_seen: Vec<u8> = Vec::new();

        for value in values {
            let index = set.add_and_get_index(value);
            match first_seen.iter().position(|v| *v == value) {
                Some(expected) => prop_assert_eq!(index, expected),
                None => {
                    prop_assert_eq!(index, first_seen.len());
                    first_seen.push(value);
                }
            }
        }

        prop_assert_eq!(set.as_slice(), first_seen.as_slice());
    }

    #[test]
    fn prop_indices_never_move(values in proptest::collection::vec(any::<u16>(), 1..32), extra in proptest::collection::vec(any::<u16>(), 0..32)) {
        let mut set = IndexedSet::new();
        let assigned: Vec<(u16, usize)> = values.iter().map(|v| (*v, set.add_and_get_index(*v))).collect();

        for value in extra {
            set.add_and_get_index(value);
        }

        for (value, index) in assigned {
            prop_assert_eq!(set.index_of(&value), Some(index));
            prop_assert_eq!(set.get(index), Some(&value));
        }
    }
}
