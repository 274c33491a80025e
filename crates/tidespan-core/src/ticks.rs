// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::{instant::Temporal, unit::TemporalUnit};
use num_traits::{CheckedAdd, CheckedSub, Euclid, NumCast, PrimInt};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// An instant on a raw integer tick-line at millisecond resolution.
///
/// `Ticks` wraps a primitive integer counting milliseconds from tick zero
/// (the Unix epoch for wall-clock data). It supports exactly the fixed-width
/// units — millisecond through week — and rejects months and years, which
/// have no meaning on a bare tick-line.
///
/// Keeping the value a single machine word makes tick instants cheap to copy
/// and dense to store, which matters when progressions over raw timestamps
/// are materialized in bulk.
///
/// # Examples
///
/// ```rust
/// # use tidespan_core::instant::Temporal;
/// # use tidespan_core::ticks::{Ticks, Timestamp};
/// # use tidespan_core::unit::TemporalUnit;
///
/// let t = Timestamp::new(1_500);
/// assert_eq!(t.checked_add(TemporalUnit::Second, 2), Some(Ticks::new(3_500)));
/// assert_eq!(t.truncate(TemporalUnit::Second), Some(Ticks::new(1_000)));
/// assert_eq!(t.checked_add(TemporalUnit::Month, 1), None);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Ticks<T>(T);

/// A millisecond timestamp counted from the Unix epoch.
pub type Timestamp = Ticks<i64>;

impl<T> Ticks<T> {
    /// Creates a tick instant from a raw tick count.
    #[inline]
    pub const fn new(raw: T) -> Self {
        Self(raw)
    }

    /// Returns the raw tick count.
    #[inline]
    pub fn raw(self) -> T {
        self.0
    }
}

impl<T> Display for Ticks<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<T> Temporal for Ticks<T>
where
    T: PrimInt + Euclid + Hash + Debug + Display,
{
    const FINEST: TemporalUnit = TemporalUnit::Millisecond;

    #[inline]
    fn epoch() -> Self {
        Self(T::zero())
    }

    fn checked_add(self, unit: TemporalUnit, amount: i64) -> Option<Self> {
        let width = unit.fixed_millis()?;
        let magnitude = amount.unsigned_abs().checked_mul(width as u64)?;
        let delta = <T as NumCast>::from(magnitude)?;
        if amount >= 0 {
            CheckedAdd::checked_add(&self.0, &delta).map(Self)
        } else {
            CheckedSub::checked_sub(&self.0, &delta).map(Self)
        }
    }

    fn truncate(self, unit: TemporalUnit) -> Option<Self> {
        let width = <T as NumCast>::from(unit.fixed_millis()?)?;
        let rem = Euclid::rem_euclid(&self.0, &width);
        CheckedSub::checked_sub(&self.0, &rem).map(Self)
    }

    // Calendar units are meaningless on a bare tick-line.
    #[inline]
    fn supports(unit: TemporalUnit) -> bool {
        unit.fixed_millis().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_is_tick_zero() {
        assert_eq!(Timestamp::epoch(), Ticks::new(0));
        assert_eq!(Ticks::<u32>::epoch(), Ticks::new(0));
    }

    #[test]
    fn test_add_fixed_units() {
        let t = Timestamp::new(0);
        assert_eq!(
            t.checked_add(TemporalUnit::Millisecond, 5),
            Some(Ticks::new(5))
        );
        assert_eq!(t.checked_add(TemporalUnit::Second, 3), Some(Ticks::new(3_000)));
        assert_eq!(
            t.checked_add(TemporalUnit::Day, 2),
            Some(Ticks::new(172_800_000))
        );
        assert_eq!(
            t.checked_add(TemporalUnit::Week, 1),
            Some(Ticks::new(604_800_000))
        );
    }

    #[test]
    fn test_add_negative_amount() {
        let t = Timestamp::new(10_000);
        assert_eq!(
            t.checked_add(TemporalUnit::Second, -3),
            Some(Ticks::new(7_000))
        );
    }

    #[test]
    fn test_calendar_units_rejected() {
        let t = Timestamp::new(0);
        assert_eq!(t.checked_add(TemporalUnit::Month, 1), None);
        assert_eq!(t.checked_add(TemporalUnit::Year, 1), None);
        assert!(!Timestamp::supports(TemporalUnit::Month));
        assert!(!Timestamp::supports(TemporalUnit::Year));
        assert!(Timestamp::supports(TemporalUnit::Week));
    }

    #[test]
    fn test_overflow_returns_none() {
        let t = Timestamp::new(i64::MAX - 10);
        assert_eq!(t.checked_add(TemporalUnit::Second, 1), None);

        let unsigned = Ticks::<u8>::new(4);
        assert_eq!(unsigned.checked_add(TemporalUnit::Millisecond, -5), None);
    }

    #[test]
    fn test_truncate() {
        let t = Timestamp::new(3_725_128);
        assert_eq!(t.truncate(TemporalUnit::Second), Some(Ticks::new(3_725_000)));
        assert_eq!(t.truncate(TemporalUnit::Minute), Some(Ticks::new(3_720_000)));
        assert_eq!(t.truncate(TemporalUnit::Hour), Some(Ticks::new(3_600_000)));
        assert_eq!(t.truncate(TemporalUnit::Year), None);
    }

    #[test]
    fn test_truncate_negative_ticks_floors() {
        // Pre-epoch instants truncate toward negative infinity, not zero.
        let t = Timestamp::new(-500);
        assert_eq!(t.truncate(TemporalUnit::Second), Some(Ticks::new(-1_000)));
    }

    #[test]
    fn test_display_and_raw() {
        let t = Timestamp::new(42);
        assert_eq!(format!("{}", t), "42");
        assert_eq!(t.raw(), 42);
    }
}
