//! Fixed-width integer arithmetic.
//!
//! Overflow wraps modulo 2^32 in every build profile.

/// Sum of `a` and `b`, wrapping on overflow.
#[inline]
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Product of `a` and `b`, wrapping on overflow.
#[inline]
pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}
