//! Element model shared by every array kind.
//!
//! [`Element`] gives each element type its kind tag, string form, hash
//! code and equality rule. The primitive kinds are the eight fixed types
//! listed under [`Kind`]; everything else is an object element. Characters
//! are UTF-16 code units (`u16`) so that narrowing from `i32` stays
//! bit-exact, which `char` cannot represent.

use std::fmt;
use std::fmt::Write;

use crate::join::NULL;

/// The closed set of element kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Any non-primitive element.
    Object,
    /// `bool`.
    Bool,
    /// UTF-16 code unit (`u16`).
    Char,
    /// `i8`.
    Byte,
    /// `i16`.
    Short,
    /// `i32`.
    Int,
    /// `i64`.
    Long,
    /// `f32`.
    Float,
    /// `f64`.
    Double,
}

impl Kind {
    /// Whether this is one of the eight primitive kinds.
    pub const fn is_primitive(self) -> bool {
        !matches!(self, Self::Object)
    }

    /// Lowercase kind name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-element behaviour needed by the array kernel.
pub trait Element {
    /// The element kind.
    const KIND: Kind;

    /// Append the string form of this element to `out`.
    fn render(&self, out: &mut String);

    /// Element hash code, compatible with the JVM hashing scheme so that
    /// array hashes agree across implementations.
    fn hash_code(&self) -> i32;

    /// Element equality. Floating-point kinds compare bit patterns, so
    /// `NaN` equals itself and `0.0` differs from `-0.0`.
    fn same(&self, other: &Self) -> bool;
}

/// Unsigned lowercase hex rendering for integral elements.
pub trait Hex {
    /// Append `0x` followed by the unsigned hex digits of this value.
    fn write_hex(&self, out: &mut String);
}

/// Bit-exact narrowing from a wider representation.
///
/// High-order bits are discarded (two's-complement truncation for
/// integers, round-to-nearest for `f64 → f32`).
pub trait Narrow<W>: Sized {
    /// Narrow `wide` into this type.
    fn narrow(wide: W) -> Self;
}

fn float_bits(v: f32) -> i32 {
    if v.is_nan() {
        0x7fc0_0000
    } else {
        v.to_bits() as i32
    }
}

fn double_bits(v: f64) -> i64 {
    if v.is_nan() {
        0x7ff8_0000_0000_0000
    } else {
        v.to_bits() as i64
    }
}

fn long_hash(v: i64) -> i32 {
    let bits = v as u64;
    (bits ^ (bits >> 32)) as i32
}

/// JVM float layout over the shortest round-trip digits: plain decimal
/// for magnitudes in `[1e-3, 1e7)`, `d.dddE<n>` outside it.
fn render_float(out: &mut String, v: f64, shortest: impl fmt::LowerExp) {
    if v.is_nan() {
        out.push_str("NaN");
        return;
    }
    if v.is_infinite() {
        out.push_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
        return;
    }
    if v.is_sign_negative() {
        out.push('-');
    }
    if v == 0.0 {
        out.push_str("0.0");
        return;
    }
    let sci = format!("{shortest:e}");
    let sci = sci.trim_start_matches('-');
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci, "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|&c| c != '.').collect();
    if (1e-3..1e7).contains(&v.abs()) {
        if let Ok(whole) = usize::try_from(exp) {
            let point = whole + 1;
            if digits.len() > point {
                let _ = write!(out, "{}.{}", &digits[..point], &digits[point..]);
            } else {
                let _ = write!(out, "{digits:0<point$}.0");
            }
        } else {
            let zeros = "0".repeat(exp.unsigned_abs() as usize - 1);
            let _ = write!(out, "0.{zeros}{digits}");
        }
    } else {
        let (head, tail) = digits.split_at(1);
        let tail = if tail.is_empty() { "0" } else { tail };
        let _ = write!(out, "{head}.{tail}E{exp}");
    }
}

/// JVM string hash over UTF-16 code units.
fn str_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

impl Element for bool {
    const KIND: Kind = Kind::Bool;

    fn render(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }

    fn hash_code(&self) -> i32 {
        if *self {
            1231
        } else {
            1237
        }
    }

    fn same(&self, other: &Self) -> bool {
        self == other
    }
}

impl Element for u16 {
    const KIND: Kind = Kind::Char;

    fn render(&self, out: &mut String) {
        out.push(char::from_u32(u32::from(*self)).unwrap_or(char::REPLACEMENT_CHARACTER));
    }

    fn hash_code(&self) -> i32 {
        i32::from(*self)
    }

    fn same(&self, other: &Self) -> bool {
        self == other
    }
}

macro_rules! integral_element {
    ($($ty:ty => $kind:ident, $unsigned:ty;)*) => {$(
        impl Element for $ty {
            const KIND: Kind = Kind::$kind;

            fn render(&self, out: &mut String) {
                let _ = write!(out, "{self}");
            }

            fn hash_code(&self) -> i32 {
                i32::from(*self)
            }

            fn same(&self, other: &Self) -> bool {
                self == other
            }
        }

        impl Hex for $ty {
            fn write_hex(&self, out: &mut String) {
                let _ = write!(out, "0x{:x}", *self as $unsigned);
            }
        }
    )*};
}

integral_element! {
    i8 => Byte, u8;
    i16 => Short, u16;
    i32 => Int, u32;
}

impl Hex for u16 {
    fn write_hex(&self, out: &mut String) {
        let _ = write!(out, "0x{self:x}");
    }
}

impl Element for i64 {
    const KIND: Kind = Kind::Long;

    fn render(&self, out: &mut String) {
        let _ = write!(out, "{self}");
    }

    fn hash_code(&self) -> i32 {
        long_hash(*self)
    }

    fn same(&self, other: &Self) -> bool {
        self == other
    }
}

impl Hex for i64 {
    fn write_hex(&self, out: &mut String) {
        let _ = write!(out, "0x{:x}", *self as u64);
    }
}

impl Element for f32 {
    const KIND: Kind = Kind::Float;

    fn render(&self, out: &mut String) {
        render_float(out, f64::from(*self), self);
    }

    fn hash_code(&self) -> i32 {
        float_bits(*self)
    }

    fn same(&self, other: &Self) -> bool {
        float_bits(*self) == float_bits(*other)
    }
}

impl Element for f64 {
    const KIND: Kind = Kind::Double;

    fn render(&self, out: &mut String) {
        render_float(out, *self, self);
    }

    fn hash_code(&self) -> i32 {
        long_hash(double_bits(*self))
    }

    fn same(&self, other: &Self) -> bool {
        double_bits(*self) == double_bits(*other)
    }
}

impl Element for String {
    const KIND: Kind = Kind::Object;

    fn render(&self, out: &mut String) {
        out.push_str(self);
    }

    fn hash_code(&self) -> i32 {
        str_hash(self)
    }

    fn same(&self, other: &Self) -> bool {
        self == other
    }
}

impl Element for &'static str {
    const KIND: Kind = Kind::Object;

    fn render(&self, out: &mut String) {
        out.push_str(self);
    }

    fn hash_code(&self) -> i32 {
        str_hash(self)
    }

    fn same(&self, other: &Self) -> bool {
        self == other
    }
}

impl<T: Element> Element for Box<T> {
    const KIND: Kind = T::KIND;

    fn render(&self, out: &mut String) {
        (**self).render(out);
    }

    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }

    fn same(&self, other: &Self) -> bool {
        (**self).same(other)
    }
}

/// Absent elements render as `null` and hash to 0. A wrapped primitive is
/// an object element, the boxed form of its kind.
impl<T: Element> Element for Option<T> {
    const KIND: Kind = Kind::Object;

    fn render(&self, out: &mut String) {
        match self {
            Some(v) => v.render(out),
            None => out.push_str(NULL),
        }
    }

    fn hash_code(&self) -> i32 {
        self.as_ref().map_or(0, Element::hash_code)
    }

    fn same(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(l), Some(r)) => l.same(r),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Hex> Hex for Option<T> {
    fn write_hex(&self, out: &mut String) {
        match self {
            Some(v) => v.write_hex(out),
            None => out.push_str(NULL),
        }
    }
}

macro_rules! narrow {
    ($($wide:ty => $($narrow:ty),+;)*) => {$($(
        impl Narrow<$wide> for $narrow {
            fn narrow(wide: $wide) -> Self {
                wide as $narrow
            }
        }
    )+)*};
}

narrow! {
    i32 => i8, i16, u16;
    f64 => f32;
}

/// Render a single element to a new string.
pub fn render<T: Element + ?Sized>(value: &T) -> String {
    let mut out = String::new();
    value.render(&mut out);
    out
}

/// Render a single integral element as hex to a new string.
pub fn hex<T: Hex + ?Sized>(value: &T) -> String {
    let mut out = String::new();
    value.write_hex(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_and_primitiveness() {
        assert!(!Kind::Object.is_primitive());
        assert!(Kind::Double.is_primitive());
        assert_eq!(Kind::Short.to_string(), "short");
        assert_eq!(<Option<i32> as Element>::KIND, Kind::Object);
        assert_eq!(<u16 as Element>::KIND, Kind::Char);
    }

    #[test]
    fn narrowing_truncates_high_bits() {
        assert_eq!(i8::narrow(0x1ff), -1);
        assert_eq!(i8::narrow(0x80), i8::MIN);
        assert_eq!(i16::narrow(0x18000), i16::MIN);
        assert_eq!(u16::narrow(-1), 0xffff);
        assert_eq!(f32::narrow(0.1f64), 0.1f32);
    }

    #[test]
    fn hashes_follow_jvm_scheme() {
        assert_eq!(true.hash_code(), 1231);
        assert_eq!(false.hash_code(), 1237);
        assert_eq!((-1i8).hash_code(), -1);
        assert_eq!((b'a' as u16).hash_code(), 97);
        assert_eq!(1i64.hash_code(), 1);
        assert_eq!((-1i64).hash_code(), 0);
        assert_eq!(1.0f32.hash_code(), 0x3f80_0000);
        assert_eq!(f32::NAN.hash_code(), (-f32::NAN).hash_code());
        assert_eq!(1.0f64.hash_code(), 0x3ff0_0000);
        assert_eq!("ab".to_string().hash_code(), 97 * 31 + 98);
        assert_eq!(None::<i32>.hash_code(), 0);
        assert_eq!(Some(7).hash_code(), 7);
    }

    #[test]
    fn float_equality_uses_bit_patterns() {
        assert!(f32::NAN.same(&f32::NAN));
        assert!(!0.0f32.same(&-0.0f32));
        assert!(f64::NAN.same(&f64::NAN));
        assert!(!0.0f64.same(&-0.0));
    }

    #[test]
    fn render_forms() {
        assert_eq!(render(&true), "true");
        assert_eq!(render(&(b'a' as u16)), "a");
        assert_eq!(render(&-3i8), "-3");
        assert_eq!(render(&1.5f32), "1.5");
        assert_eq!(render(&1.0f64), "1.0");
        assert_eq!(render(&f64::NEG_INFINITY), "-Infinity");
        assert_eq!(render(&None::<String>), "null");
        assert_eq!(render(&Some("x")), "x");
    }

    #[test]
    fn floats_render_like_the_jvm() {
        assert_eq!(render(&1e20f64), "1.0E20");
        assert_eq!(render(&1e7f64), "1.0E7");
        assert_eq!(render(&1234567.0f64), "1234567.0");
        assert_eq!(render(&100.0f64), "100.0");
        assert_eq!(render(&123.456f64), "123.456");
        assert_eq!(render(&0.001f64), "0.001");
        assert_eq!(render(&0.0001f64), "1.0E-4");
        assert_eq!(render(&-1.25e-5f64), "-1.25E-5");
        assert_eq!(render(&-0.0f64), "-0.0");
        assert_eq!(render(&f64::NAN), "NaN");
        assert_eq!(render(&f64::MAX), "1.7976931348623157E308");
        assert_eq!(render(&f32::MAX), "3.4028235E38");
        assert_eq!(render(&0.1f32), "0.1");
        assert_eq!(render(&1e10f32), "1.0E10");
    }

    #[test]
    fn hex_is_unsigned_and_unpadded() {
        assert_eq!(hex(&i8::MIN), "0x80");
        assert_eq!(hex(&0i8), "0x0");
        assert_eq!(hex(&i16::MIN), "0x8000");
        assert_eq!(hex(&(b'a' as u16)), "0x61");
        assert_eq!(hex(&-1i32), "0xffffffff");
        assert_eq!(hex(&i64::MAX), "0x7fffffffffffffff");
        assert_eq!(hex(&None::<i32>), "null");
    }
}
