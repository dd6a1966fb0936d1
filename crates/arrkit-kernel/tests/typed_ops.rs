//! Shared array operations exercised through object and primitive kinds.

use arrkit_core::array::{null, null_mut};
use arrkit_core::{ArrayError, Joiner, END};
use arrkit_kernel::{raw, Type, TypedArray, INT, STR, STRING};
use arrkit_test_utils::{seeded_ints, seeded_ints_below};
use proptest::prelude::*;

const BOXES: Type<Box<i32>> = Type::new();

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn raw_get_and_set_check_bounds() {
    let mut a = [1, 2, 3];
    assert_eq!(raw::get(&a, 2), Ok(&3));
    assert_eq!(
        raw::get(&a, 3),
        Err(ArrayError::IndexOutOfBounds { index: 3, len: 3 })
    );
    assert!(raw::set(&mut a, -1, 0).is_err());
    assert_eq!(raw::set(&mut a, 0, 9), Ok(()));
    assert_eq!(a, [9, 2, 3]);
}

#[test]
fn copy_counts_what_fits() {
    let src = STRING.of(&strings(&["a", "b", "c"]));
    let mut dest = STRING.array(2);
    assert_eq!(STRING.copy(&src, &mut dest), 2);
    assert_eq!(dest, ["a", "b"]);
    assert_eq!(STRING.copy_range(&src, 2, &mut dest, 1, END), 1);
    assert_eq!(dest, ["a", "c"]);
    assert_eq!(STRING.copy(null(), &mut dest), 0);
    assert_eq!(STRING.copy(&src, null_mut()), 0);
}

#[test]
fn copy_of_pads_and_truncates() {
    assert_eq!(INT.copy_of(&[1, 2, 3]), [1, 2, 3]);
    assert_eq!(INT.copy_of_len(&[1, 2, 3], 5), [1, 2, 3, 0, 0]);
    assert_eq!(INT.copy_of_len(&[1, 2, 3], 1), [1]);
    assert_eq!(INT.copy_of_range(&[1, 2, 3], 1, 3), [2, 3, 0]);
    assert!(INT.copy_of(null()).is_empty());
    assert_eq!(STR.copy_of_len(null(), 2), ["", ""]);
}

#[test]
fn resize_keeps_matching_arrays() {
    let a = vec![1, 2, 3];
    let ptr = a.as_ptr();
    let same = INT.resize(a, 3);
    assert_eq!(same.as_ptr(), ptr);
    assert_eq!(INT.resize(same, 5), [1, 2, 3, 0, 0]);
    assert_eq!(INT.resize(None, 2), [0, 0]);
    assert_eq!(INT.resize(vec![1, 2, 3], 1), [1]);
}

#[test]
fn insert_clamps_the_position() {
    let a = strings(&["a", "d"]);
    let v = strings(&["b", "c"]);
    assert_eq!(STRING.insert(&a, 1, &v), ["a", "b", "c", "d"]);
    assert_eq!(STRING.insert(&a, -5, &v), ["b", "c", "a", "d"]);
    assert_eq!(STRING.insert(&a, END, &v), ["a", "d", "b", "c"]);
    assert_eq!(STRING.insert_range(&a, 1, &v, 1, 0), ["a", "d"]);
    assert_eq!(STRING.insert(null(), 0, &v), ["b", "c"]);
    assert_eq!(STRING.append(&a, null()), ["a", "d"]);
}

#[test]
fn search_windows_report_absolute_indexes() {
    let a = [1, 2, 3, 1, 2, 3];
    assert_eq!(INT.index_of_range(&a, 1, END, &[1, 2], 0, END), Some(3));
    assert_eq!(INT.last_index_of_range(&a, 0, 5, &[2, 3], 0, END), Some(1));
    assert_eq!(INT.index_of_range(&a, 0, 2, &[1, 2, 3], 0, END), None);
    assert_eq!(INT.index_of_range(&a, 4, END, &[9, 9], 0, 0), Some(4));
    assert_eq!(INT.last_index_of_range(&a, 0, 4, &[9], 0, 0), Some(4));
    assert_eq!(INT.index_of(null(), &[1]), None);
    assert_eq!(INT.index_of(&a, null()), None);
    assert!(INT.contains_range(&a, 0, END, &[0, 3, 1], 1, 2));
}

#[test]
fn equality_over_windows() {
    assert!(INT.equals_range(&[0, 1, 2], 1, &[1, 2, 9], 0, 2));
    assert!(!INT.equals_range(&[0, 1, 2], 1, &[1, 2, 9], 0, 3));
    assert!(INT.equals(&[] as &[i32], &[] as &[i32]));
    assert!(!INT.equals(null(), &[] as &[i32]));
}

#[test]
fn boxed_objects_hash_like_their_contents() {
    let a = vec![Box::new(1), Box::new(2), Box::new(3)];
    assert_eq!(BOXES.hash(&a), INT.hash(&[1, 2, 3]));
    assert_eq!(BOXES.to_string(&a), "[1, 2, 3]");
    let mut b = a.clone();
    BOXES.reverse(&mut b);
    assert_eq!(BOXES.to_string(&b), "[3, 2, 1]");
    assert!(!BOXES.equals(&a, &b));
}

#[test]
fn string_hash_matches_jvm() {
    // Arrays.hashCode(new String[] { "a", "bc" })
    let expected = (31 + 97) * 31 + (98 * 31 + 99);
    assert_eq!(STR.hash(&["a", "bc"]), expected);
}

#[test]
fn custom_joiners_truncate_long_arrays() {
    let joiner = Joiner::ARRAY.edit().max(3).build();
    let a = INT.range(0, 10);
    assert_eq!(INT.to_string_with(&joiner, &a, 0, END), "[0, 1, ...](10)");
    assert_eq!(INT.to_string_with(&joiner, &a, 0, 2), "[0, 1]");
}

#[test]
fn sorting_seeded_data_matches_std() {
    let mut a = seeded_ints(7, 200);
    let mut expected = a.clone();
    expected.sort();
    INT.sort(&mut a);
    assert_eq!(a, expected);
}

proptest! {
    #[test]
    fn found_index_points_at_a_match(
        seed in any::<u64>(),
        offset in 0usize..50,
        length in 1usize..4,
    ) {
        let a = seeded_ints_below(seed, 50, 4);
        let end = (offset + length).min(a.len());
        let values = a[offset..end].to_vec();
        let found = INT.index_of(&a, &values);
        prop_assert!(found.is_some_and(|i| i <= offset));
        let i = found.unwrap_or_default();
        prop_assert_eq!(&a[i..i + values.len()], values.as_slice());

        let last = INT.last_index_of(&a, &values);
        prop_assert!(last.is_some_and(|i| i >= offset));
    }

    #[test]
    fn reverse_twice_restores(
        seed in any::<u64>(),
        len in 0usize..40,
        offset in -5isize..45,
        length in -5isize..45,
    ) {
        let original = seeded_ints(seed, len);
        let mut a = original.clone();
        INT.reverse_range(&mut a, offset, length);
        INT.reverse_range(&mut a, offset, length);
        prop_assert_eq!(a, original);
    }

    #[test]
    fn append_length_adds(len in 0usize..20, extra in 0usize..20) {
        let a = INT.range(0, len as isize);
        let b = INT.range(100, extra as isize);
        let joined = INT.append(&a, &b);
        prop_assert_eq!(joined.len(), len + extra);
        prop_assert_eq!(INT.index_of(&joined, &b), if extra == 0 { Some(0) } else { Some(len) });
    }
}
