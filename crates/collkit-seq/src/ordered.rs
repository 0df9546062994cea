//! The "ordered" capability used by `sum`.
//!
//! Covers the primitive integers, the floats and `String`: values that compare
//! and can be added (or concatenated). `max`/`min` only need the comparison
//! half, so they bound on `PartialOrd + Default` directly.

/// Comparable, defaultable, and closed under `plus`.
pub trait Ordered: PartialOrd + Default {
    /// Numeric addition or string concatenation (`self` first).
    fn plus(self, rhs: Self) -> Self;
}

macro_rules! impl_ordered_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Ordered for $t {
                #[inline]
                fn plus(self, rhs: Self) -> Self {
                    // Wraps like two's-complement hardware; derivations never panic.
                    self.wrapping_add(rhs)
                }
            }
        )*
    };
}

macro_rules! impl_ordered_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Ordered for $t {
                #[inline]
                fn plus(self, rhs: Self) -> Self {
                    self + rhs
                }
            }
        )*
    };
}

impl_ordered_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_ordered_float!(f32, f64);

impl Ordered for String {
    #[inline]
    fn plus(mut self, rhs: Self) -> Self {
        self.push_str(&rhs);
        self
    }
}
