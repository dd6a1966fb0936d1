//! Integration test: each primitive kind through its own factories,
//! conversions, search, ordering and string forms.

use arrkit_core::array::null;
use arrkit_core::{Joiner, END};
use arrkit_kernel::{
    Integral, TypedArray, BOOL, BYTE, CHAR, DOUBLE, FLOAT, INT, LONG, SHORT,
};
use arrkit_test_utils::{
    Recorder, BOOLS, BYTES, CHARS, DOUBLES, FLOATS, INTS, LONGS, SHORTS,
};

const A: u16 = b'a' as u16;
const C: u16 = b'c' as u16;

#[test]
fn of_copies_values() {
    assert_eq!(BOOL.of(&BOOLS), BOOLS);
    assert_eq!(CHAR.of(&CHARS), CHARS);
    assert_eq!(BYTE.of(&BYTES), BYTES);
    assert_eq!(SHORT.of(&SHORTS), SHORTS);
    assert_eq!(INT.of(&INTS), INTS);
    assert_eq!(LONG.of(&LONGS), LONGS);
    assert_eq!(FLOAT.of(&FLOATS), FLOATS);
    assert_eq!(DOUBLE.of(&DOUBLES), DOUBLES);
}

#[test]
fn byte_narrowing_is_bit_exact() {
    assert_eq!(BYTE.narrowed(&[0x1ff]), [-1]);
    assert_eq!(BYTE.boxed(&BYTE.narrowed(&[0x80, 0x7f, 0])), BYTE.boxed(&BYTES));
    assert_eq!(SHORT.narrowed(&[0x8000, 0x7fff, 0]), SHORTS);
    assert_eq!(FLOAT.narrowed(&[f64::from(FLOATS[0]), f64::from(f32::MAX), 0.0]), FLOATS);
}

#[test]
fn boxes_and_unboxes() {
    assert_eq!(BOOL.boxed(&BOOLS), [Some(true), Some(false), Some(true)]);
    assert_eq!(CHAR.boxed(&CHARS), [Some(A), Some(0), Some(C)]);
    assert_eq!(LONG.boxed_range(&LONGS, 1, END), [Some(i64::MAX), Some(0)]);
    assert_eq!(BOOL.unboxed(&[Some(true), Some(false), Some(true)]), Ok(BOOLS.to_vec()));
    assert_eq!(
        CHAR.unboxed_range(&[Some(A), Some(0), Some(C)], 1, END),
        Ok(vec![0, C])
    );
    assert_eq!(BOOL.unboxed_iter(vec![Some(false), Some(true)]), Ok(vec![false, true]));
    assert!(INT.unboxed(&[Some(1), None]).is_err());
    assert!(INT.boxed(null()).is_empty());
}

#[test]
fn element_at_index_with_default() {
    assert!(!BOOL.at(&BOOLS, 1, true));
    assert!(BOOL.at(&BOOLS, -1, true));
    assert_eq!(CHAR.at(&CHARS, 1, 0xffff), 0);
    assert_eq!(CHAR.at(&CHARS, -1, 0xffff), 0xffff);
    assert_eq!(BYTE.at(&BYTES, 1, -1), i8::MAX);
    assert_eq!(BYTE.at(&BYTES, 3, -1), -1);
    assert_eq!(SHORT.at(&SHORTS, 1, -1), i16::MAX);
    assert_eq!(INT.at(&INTS, 1, -1), i32::MAX);
    assert_eq!(LONG.at(null(), 0, -1), -1);
    assert_eq!(FLOAT.at(&FLOATS, 1, -1.0), f32::MAX);
    assert_eq!(DOUBLE.at(&DOUBLES, -1, -1.0), -1.0);
}

#[test]
fn last_element_with_default() {
    assert!(BOOL.last(&BOOLS, false));
    assert!(!BOOL.last(&[] as &[bool], false));
    assert_eq!(CHAR.last(&CHARS, 0xffff), C);
    assert_eq!(BYTE.last(&BYTES, -1), 0);
    assert_eq!(SHORT.last(&[] as &[i16], -1), -1);
    assert_eq!(INT.last(&INTS, -1), 0);
    assert_eq!(LONG.last(&[] as &[i64], -1), -1);
    assert_eq!(FLOAT.last(&FLOATS, -1.0), 0.0);
    assert_eq!(DOUBLE.last(null(), -1.0), -1.0);
}

#[test]
fn appends_and_inserts() {
    assert_eq!(BOOL.append(&BOOLS, &[false]), [true, false, true, false]);
    assert_eq!(CHAR.append(&CHARS, &[0xffff]), [A, 0, C, 0xffff]);
    assert_eq!(BYTE.append(&BYTES, &[-1]), [i8::MIN, i8::MAX, 0, -1]);
    assert_eq!(DOUBLE.append(&DOUBLES, &[-1.0]), [DOUBLES[0], f64::MAX, 0.0, -1.0]);
    assert_eq!(BOOL.insert(&BOOLS, 1, &[false]), [true, false, false, true]);
    assert_eq!(SHORT.insert(&SHORTS, 1, &[-1]), [i16::MIN, -1, i16::MAX, 0]);
    assert_eq!(INT.insert(&INTS, 1, &[-1]), [i32::MIN, -1, i32::MAX, 0]);
    assert_eq!(LONG.insert(&LONGS, 1, &[-1]), [i64::MIN, -1, i64::MAX, 0]);
    assert_eq!(FLOAT.insert(&FLOATS, 1, &[-1.0]), [FLOATS[0], -1.0, f32::MAX, 0.0]);
    assert_eq!(INT.append_range(&[1], &[2, 3, 4], 1, 1), [1, 3]);
    assert_eq!(INT.insert_range(&[1, 4], 1, &[0, 2, 3], 1, END), [1, 2, 3, 4]);
}

#[test]
fn searches_whole_arrays() {
    assert!(BOOL.contains(&BOOLS, &BOOLS));
    assert!(CHAR.contains(&CHARS, &CHARS));
    assert!(FLOAT.contains(&FLOATS, &FLOATS));
    assert_eq!(BYTE.index_of(&BYTES, &BYTES), Some(0));
    assert_eq!(SHORT.index_of(&SHORTS, &SHORTS), Some(0));
    assert_eq!(INT.last_index_of(&INTS, &INTS), Some(0));
    assert_eq!(LONG.last_index_of(&LONGS, &LONGS), Some(0));
    assert_eq!(DOUBLE.index_of(&DOUBLES, &[0.0]), Some(2));
    assert_eq!(BOOL.last_index_of(&BOOLS, &[true]), Some(2));
    assert_eq!(INT.index_of(&INTS, &[1]), None);
}

#[test]
fn nan_is_found_by_bit_equality() {
    let a = [1.0, f64::NAN, 2.0];
    assert_eq!(DOUBLE.index_of(&a, &[f64::NAN]), Some(1));
    assert!(DOUBLE.equals(&a, &[1.0, f64::NAN, 2.0]));
    assert!(!DOUBLE.equals(&[0.0], &[-0.0]));
}

#[test]
fn fills() {
    let mut b = [false; 3];
    BOOL.fill(&mut b, true);
    assert_eq!(b, [true; 3]);
    let mut c = [0u16; 3];
    CHAR.fill(&mut c, 0xffff);
    assert_eq!(c, [0xffff; 3]);
    let mut f = [0.0f32; 3];
    FLOAT.fill_range(&mut f, 1, END, -1.0);
    assert_eq!(f, [0.0, -1.0, -1.0]);
    let mut l = vec![0i64; 3];
    LONG.fill_range(&mut l, -1, 2, -1);
    assert_eq!(l, [-1, -1, 0]);
}

#[test]
fn reverses() {
    let mut b = BOOLS;
    BOOL.reverse(&mut b);
    assert_eq!(b, [true, false, true]);
    let mut c = CHARS;
    CHAR.reverse(&mut c);
    assert_eq!(c, [C, 0, A]);
    let mut i = INTS;
    INT.reverse(&mut i);
    assert_eq!(i, [0, i32::MAX, i32::MIN]);
    let mut d = DOUBLES;
    DOUBLE.reverse_range(&mut d, 1, END);
    assert_eq!(d, [DOUBLES[0], 0.0, f64::MAX]);
}

#[test]
fn visits_elements() {
    let mut r = Recorder::new();
    BOOL.for_each(&BOOLS, r.sink());
    r.verify(&[true, false, true]);

    let mut r = Recorder::new();
    CHAR.for_each(&CHARS, r.sink());
    r.verify(&[97, 0, 99]);

    let mut r = Recorder::new();
    BYTE.for_each_range(&BYTES, 1, END, r.sink());
    r.verify(&[i8::MAX, 0]);

    let mut r = Recorder::new();
    FLOAT.for_each(&FLOATS, r.sink());
    r.verify(&FLOATS);

    let mut r = Recorder::new();
    {
        let mut sink = r.sink();
        BOOL.for_each_indexed(&BOOLS, |v, i| sink((v, i)));
    }
    r.verify(&[(true, 0), (false, 1), (true, 2)]);
}

#[test]
fn sorts() {
    let mut b = BOOLS;
    BOOL.sort(&mut b);
    assert_eq!(b, [false, true, true]);
    let mut c = CHARS;
    CHAR.sort(&mut c);
    assert_eq!(c, [0, A, C]);
    let mut y = BYTES;
    BYTE.sort(&mut y);
    assert_eq!(y, [i8::MIN, 0, i8::MAX]);
    let mut s = SHORTS;
    SHORT.sort(&mut s);
    assert_eq!(s, [i16::MIN, 0, i16::MAX]);
    let mut i = INTS;
    INT.sort(&mut i);
    assert_eq!(i, [i32::MIN, 0, i32::MAX]);
    let mut l = LONGS;
    LONG.sort(&mut l);
    assert_eq!(l, [i64::MIN, 0, i64::MAX]);
    let mut f = FLOATS;
    FLOAT.sort(&mut f);
    assert_eq!(f, [0.0, FLOATS[0], f32::MAX]);
    let mut d = DOUBLES;
    DOUBLE.sort(&mut d);
    assert_eq!(d, [0.0, DOUBLES[0], f64::MAX]);
}

// Expected values are `java.util.Arrays.hashCode` of the same arrays.
#[test]
fn hashes_match_jvm_arrays() {
    assert_eq!(BOOL.hash(&BOOLS), ((31 + 1231) * 31 + 1237) * 31 + 1231);
    assert_eq!(CHAR.hash(&CHARS), ((31 + 97) * 31) * 31 + 99);
    assert_eq!(BYTE.hash(&BYTES), ((31 - 128) * 31 + 127) * 31);
    assert_eq!(INT.hash(&[1, 2, 3]), 30817);
    assert_eq!(LONG.hash(&[1, 2, 3]), 30817);
    assert_eq!(INT.hash(null()), 0);
    assert_eq!(INT.hash(&[] as &[i32]), 1);
}

#[test]
fn equality_requires_same_length_and_bits() {
    assert!(BOOL.equals(&BOOLS, &[true, false, true]));
    assert!(!BOOL.equals(&BOOLS, &[true, false]));
    assert!(!BOOL.equals(&BOOLS, &[true, false, false]));
    assert!(CHAR.equals(&CHARS, &[A, 0, C]));
    assert!(!CHAR.equals(&CHARS, &[A, 0, b'd' as u16]));
    assert!(!BYTE.equals(&BYTES, &[i8::MIN, i8::MAX, 1]));
    assert!(!SHORT.equals(&SHORTS, &[i16::MIN, i16::MAX]));
    assert!(!LONG.equals(&LONGS, &[i64::MIN, i64::MAX, 1]));
    assert!(FLOAT.equals(&FLOATS, &FLOATS));
    assert!(!FLOAT.equals(&FLOATS, &[FLOATS[0], f32::MAX, 0.1]));
    assert!(INT.equals(null(), null()));
    assert!(!INT.equals(&INTS, null()));
}

#[test]
fn equivalence_across_representations() {
    assert!(CHAR.equivalent(null(), null::<i32>()));
    assert!(CHAR.equivalent(&CHARS, &[97, 0, 99]));
    assert!(BYTE.equivalent(&BYTES, &[i32::from(i8::MIN), i32::from(i8::MAX), 0]));
    assert!(BYTE.equivalent(&BYTES, &[0x80, 0x7f, 0]));
    assert!(SHORT.equivalent(&SHORTS, &[0x8000, 0x7fff, 0]));
    assert!(FLOAT.equivalent(&FLOATS, &[f64::from(FLOATS[0]), f64::from(f32::MAX), 0.0]));
    assert!(!CHAR.equivalent(null(), &[0]));
    assert!(!CHAR.equivalent(&CHARS, null::<i32>()));
    assert!(!CHAR.equivalent(&CHARS, &[97, 0, 99, 0]));
    assert!(!CHAR.equivalent(&CHARS, &[97, 1, 99]));
    assert!(!BYTE.equivalent(&BYTES, &[-128, 127, 1]));
    assert!(!FLOAT.equivalent(&FLOATS, &[f64::from(FLOATS[0]), f64::from(f32::MAX), 0.1]));
}

#[test]
fn float_equivalence_compares_values() {
    assert!(FLOAT.equivalent(&[0.0f32], &[-0.0f64]));
    assert!(FLOAT.equivalent(&[-0.0f32], &[0.0f64]));
    assert!(!FLOAT.equivalent(&[f32::NAN], &[f64::NAN]));
    // Bitwise equality still tells the zeros apart and matches NaN.
    assert!(!FLOAT.equals(&[0.0f32], &[-0.0f32]));
    assert!(FLOAT.equals(&[f32::NAN], &[f32::NAN]));
}

#[test]
fn hex_strings() {
    assert_eq!(CHAR.to_hex(&CHARS), "[0x61, 0x0, 0x63]");
    assert_eq!(BYTE.to_hex(&BYTES), "[0x80, 0x7f, 0x0]");
    assert_eq!(SHORT.to_hex(&SHORTS), "[0x8000, 0x7fff, 0x0]");
    assert_eq!(INT.to_hex(&INTS), "[0x80000000, 0x7fffffff, 0x0]");
    assert_eq!(
        LONG.to_hex(&LONGS),
        "[0x8000000000000000, 0x7fffffffffffffff, 0x0]"
    );
    assert_eq!(BYTE.to_hex_range(&BYTES, 1, 1), "[0x7f]");
    assert_eq!(INT.to_hex_with(&Joiner::OR, &[-1, 1], 0, END), "0xffffffff|0x1");
    assert_eq!(INT.to_hex(null()), "null");
}

#[test]
fn boxed_hex_strings() {
    assert_eq!(CHAR.boxed_type().to_hex(&CHAR.boxed(&CHARS)), "[0x61, 0x0, 0x63]");
    assert_eq!(SHORT.boxed_type().to_hex(&SHORT.boxed(&SHORTS)), "[0x8000, 0x7fff, 0x0]");
    assert_eq!(
        LONG.boxed_type().to_hex(&LONG.boxed(&LONGS)),
        "[0x8000000000000000, 0x7fffffffffffffff, 0x0]"
    );
}

#[test]
fn string_forms() {
    assert_eq!(BOOL.to_string(&BOOLS), "[true, false, true]");
    assert_eq!(CHAR.to_string(&CHAR.of_str("abc")), "[a, b, c]");
    assert_eq!(INT.to_string_range(&[1, 2, 3], 1, END), "[2, 3]");
    assert_eq!(DOUBLE.to_string(&[1.0, -0.5]), "[1.0, -0.5]");
    assert_eq!(LONG.to_string_with(&Joiner::PARAM_COMPACT, &[1, 2], 0, END), "(1,2)");
    assert_eq!(SHORT.to_string(null()), "null");
}

#[test]
fn ranges() {
    assert!(INT.range(5, 0).is_empty());
    assert_eq!(INT.range(-1, 3), [-1, 0, 1]);
    assert!(LONG.range(5, 0).is_empty());
    assert_eq!(LONG.range(-1, 3), [-1, 0, 1]);
}
