use core::fmt;

// -----------------------------------------------------------------------------
// Integer

/// A plain integer that covers both the `i64` and the `u64` ranges.
///
/// Property lists store integers without a fixed signedness, so an
/// encoded `u64::MAX` and an encoded `i64::MIN` are both valid.
///
/// # Examples
///
/// ```
/// use amc_coding::value::Integer;
///
/// let big = Integer::from(u64::MAX);
/// assert_eq!(big.as_unsigned(), Some(u64::MAX));
/// assert_eq!(big.as_signed(), None);
///
/// let neg = Integer::from(-3_i8);
/// assert_eq!(neg.as_signed(), Some(-3));
/// assert_eq!(neg.as_unsigned(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Integer(i128);

impl Integer {
    pub const MIN: Self = Self(i64::MIN as i128);
    pub const MAX: Self = Self(u64::MAX as i128);

    /// Returns the value as `i64` if it fits.
    #[inline]
    pub const fn as_signed(self) -> Option<i64> {
        if self.0 <= i64::MAX as i128 {
            Some(self.0 as i64)
        } else {
            None
        }
    }

    /// Returns the value as `u64` if it is not negative.
    #[inline]
    pub const fn as_unsigned(self) -> Option<u64> {
        if self.0 >= 0 {
            Some(self.0 as u64)
        } else {
            None
        }
    }

    /// Returns the value widened to `i128`.
    #[inline]
    pub const fn get(self) -> i128 {
        self.0
    }

    /// Returns `true` if the value is below zero.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Converts the value to `f64`, possibly losing precision.
    #[inline]
    pub const fn to_f64(self) -> f64 {
        self.0 as f64
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Integer {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self(value as i128)
                }
            }
        )*
    };
}

impl_from_primitive!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl TryFrom<i128> for Integer {
    type Error = i128;

    /// Fails with the input when it is outside `i64::MIN..=u64::MAX`.
    fn try_from(value: i128) -> Result<Self, Self::Error> {
        if value < Self::MIN.0 || value > Self::MAX.0 {
            Err(value)
        } else {
            Ok(Self(value))
        }
    }
}

impl fmt::Debug for Integer {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Integer {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Integer;

    #[test]
    fn range_bounds() {
        assert_eq!(Integer::try_from(-1_i128), Ok(Integer::from(-1_i32)));
        assert!(Integer::try_from(u64::MAX as i128 + 1).is_err());
        assert!(Integer::try_from(i64::MIN as i128 - 1).is_err());
        assert_eq!(Integer::MIN.as_signed(), Some(i64::MIN));
        assert_eq!(Integer::MAX.as_unsigned(), Some(u64::MAX));
    }

    #[test]
    fn narrowing() {
        let v = Integer::from(300_u16);
        assert_eq!(v.as_signed().and_then(|v| u8::try_from(v).ok()), None);
        assert_eq!(v.as_signed().and_then(|v| i16::try_from(v).ok()), Some(300));
        assert!(!v.is_negative());
        assert_eq!(v.to_f64(), 300.0);
    }
}
