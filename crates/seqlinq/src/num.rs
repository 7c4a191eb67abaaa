//! Numeric traits used by `sum` and `average`.

/// Types that `sum` can add up.
///
/// Integer addition is checked; floats never overflow.
pub trait Summable: Sized {
    /// The empty sum.
    const ZERO: Self;

    /// Adds two values, returning `None` on overflow.
    fn checked_add(self, other: Self) -> Option<Self>;
}

/// Types that `average` can take the mean of.
///
/// Integers accumulate in `i128`, floats in `f64`; the mean is an `f64`.
pub trait Averageable {
    /// Accumulator type.
    type Acc: Summable;

    /// Converts the value into the accumulator type.
    fn widen(self) -> Self::Acc;

    /// Divides an accumulated total by the element count.
    fn mean(total: Self::Acc, count: usize) -> f64;
}

macro_rules! summable_int {
    ($($t:ty),*) => {
        $(
            impl Summable for $t {
                const ZERO: Self = 0;

                fn checked_add(self, other: Self) -> Option<Self> {
                    <$t>::checked_add(self, other)
                }
            }
        )*
    };
}

macro_rules! summable_float {
    ($($t:ty),*) => {
        $(
            impl Summable for $t {
                const ZERO: Self = 0.0;

                fn checked_add(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }
            }
        )*
    };
}

macro_rules! averageable_int {
    ($($t:ty),*) => {
        $(
            impl Averageable for $t {
                type Acc = i128;

                fn widen(self) -> i128 {
                    i128::from(self)
                }

                fn mean(total: i128, count: usize) -> f64 {
                    total as f64 / count as f64
                }
            }
        )*
    };
}

summable_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
summable_float!(f32, f64);
averageable_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl Averageable for isize {
    type Acc = i128;

    fn widen(self) -> i128 {
        self as i128
    }

    fn mean(total: i128, count: usize) -> f64 {
        total as f64 / count as f64
    }
}

impl Averageable for usize {
    type Acc = i128;

    fn widen(self) -> i128 {
        self as i128
    }

    fn mean(total: i128, count: usize) -> f64 {
        total as f64 / count as f64
    }
}

impl Averageable for f32 {
    type Acc = f64;

    fn widen(self) -> f64 {
        f64::from(self)
    }

    fn mean(total: f64, count: usize) -> f64 {
        total / count as f64
    }
}

impl Averageable for f64 {
    type Acc = f64;

    fn widen(self) -> f64 {
        self
    }

    fn mean(total: f64, count: usize) -> f64 {
        total / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_addition_is_checked() {
        assert_eq!(Summable::checked_add(2u8, 3), Some(5));
        assert_eq!(Summable::checked_add(250u8, 10), None);
        assert_eq!(Summable::checked_add(i64::MIN, -1), None);
    }

    #[test]
    fn float_addition_saturates_to_infinity() {
        assert_eq!(Summable::checked_add(f64::MAX, f64::MAX), Some(f64::INFINITY));
    }

    #[test]
    fn widening() {
        assert_eq!(u64::MAX.widen(), u64::MAX as i128);
        assert_eq!(<i32 as Averageable>::mean(7, 2), 3.5);
        assert_eq!(<f32 as Averageable>::mean(1.0, 4), 0.25);
    }
}
