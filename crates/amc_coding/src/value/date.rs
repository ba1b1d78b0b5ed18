use alloc::vec::Vec;
use core::fmt;
use core::ops::Deref;

// -----------------------------------------------------------------------------
// Date

/// A point in time, stored as seconds relative to the Unix epoch.
///
/// This is the date scalar of a property list. Sub-second precision is kept
/// in the fractional part.
///
/// ```
/// use amc_coding::value::Date;
///
/// let d = Date::from_unix_seconds(1.5);
/// assert_eq!(d.as_unix_seconds(), 1.5);
/// assert!(Date::UNIX_EPOCH < d);
/// ```
#[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Date {
    secs: f64,
}

impl Date {
    pub const UNIX_EPOCH: Self = Self { secs: 0.0 };

    #[inline]
    pub const fn from_unix_seconds(secs: f64) -> Self {
        Self { secs }
    }

    #[inline]
    pub const fn as_unix_seconds(self) -> f64 {
        self.secs
    }

    /// Returns the current system time.
    #[cfg(feature = "std")]
    pub fn now() -> Self {
        Self::from(std::time::SystemTime::now())
    }
}

#[cfg(feature = "std")]
impl From<std::time::SystemTime> for Date {
    fn from(time: std::time::SystemTime) -> Self {
        use std::time::UNIX_EPOCH;
        let secs = match time.duration_since(UNIX_EPOCH) {
            Ok(after) => after.as_secs_f64(),
            Err(before) => -before.duration().as_secs_f64(),
        };
        Self { secs }
    }
}

#[cfg(feature = "std")]
impl From<Date> for std::time::SystemTime {
    fn from(date: Date) -> Self {
        use std::time::{Duration, UNIX_EPOCH};
        if date.secs >= 0.0 {
            UNIX_EPOCH + Duration::from_secs_f64(date.secs)
        } else {
            UNIX_EPOCH - Duration::from_secs_f64(-date.secs)
        }
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date({}s)", self.secs)
    }
}

// -----------------------------------------------------------------------------
// Data

/// An opaque byte buffer, the binary scalar of a property list.
///
/// `Data` exists so that raw bytes stay a single scalar value.
/// A `Vec<u8>` field is an ordered collection of integers instead.
///
/// ```
/// use amc_coding::value::Data;
///
/// let data = Data::from(vec![1_u8, 2, 3]);
/// assert_eq!(&*data, &[1, 2, 3]);
/// assert_eq!(data.into_vec(), vec![1, 2, 3]);
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Data(Vec<u8>);

impl Data {
    #[inline]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for Data {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Data {
    #[inline]
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl From<&[u8]> for Data {
    #[inline]
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

impl fmt::Debug for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Data({} bytes)", self.0.len())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::Date;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    #[test]
    fn from_system_time() {
        let after = UNIX_EPOCH + Duration::from_millis(2500);
        assert_eq!(Date::from(after).as_unix_seconds(), 2.5);

        let before = UNIX_EPOCH - Duration::from_secs(10);
        assert_eq!(Date::from(before).as_unix_seconds(), -10.0);
        assert_eq!(SystemTime::from(Date::from(before)), before);
    }
}
