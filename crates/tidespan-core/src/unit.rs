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

/// A calendar granularity, ordered from finest to coarsest.
///
/// Units below [`TemporalUnit::Month`] have a fixed width expressible in
/// milliseconds. Months and years are calendar units: their width varies and
/// stepping by them requires field arithmetic on the instant type.
///
/// # Examples
///
/// ```rust
/// # use tidespan_core::unit::TemporalUnit;
///
/// assert!(TemporalUnit::Second < TemporalUnit::Day);
/// assert_eq!(TemporalUnit::Hour.fixed_millis(), Some(3_600_000));
/// assert_eq!(TemporalUnit::Month.fixed_millis(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum TemporalUnit {
    /// One millisecond.
    Millisecond,
    /// One second (1 000 milliseconds).
    Second,
    /// One minute (60 seconds).
    Minute,
    /// One hour (60 minutes).
    Hour,
    /// One day (24 hours).
    Day,
    /// One week (7 days).
    Week,
    /// One calendar month (variable length).
    Month,
    /// One calendar year (variable length).
    Year,
}

impl TemporalUnit {
    /// All units, finest first.
    pub const ALL: [TemporalUnit; 8] = [
        TemporalUnit::Millisecond,
        TemporalUnit::Second,
        TemporalUnit::Minute,
        TemporalUnit::Hour,
        TemporalUnit::Day,
        TemporalUnit::Week,
        TemporalUnit::Month,
        TemporalUnit::Year,
    ];

    /// Returns the fixed width of this unit in milliseconds, or `None` for
    /// the variable-length calendar units (month, year).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidespan_core::unit::TemporalUnit;
    ///
    /// assert_eq!(TemporalUnit::Week.fixed_millis(), Some(604_800_000));
    /// assert_eq!(TemporalUnit::Year.fixed_millis(), None);
    /// ```
    #[inline]
    pub const fn fixed_millis(self) -> Option<i64> {
        match self {
            TemporalUnit::Millisecond => Some(1),
            TemporalUnit::Second => Some(1_000),
            TemporalUnit::Minute => Some(60_000),
            TemporalUnit::Hour => Some(3_600_000),
            TemporalUnit::Day => Some(86_400_000),
            TemporalUnit::Week => Some(604_800_000),
            TemporalUnit::Month | TemporalUnit::Year => None,
        }
    }

    /// Returns `true` if this unit has no fixed duration and must be stepped
    /// with calendar field arithmetic.
    #[inline]
    pub const fn is_calendar(self) -> bool {
        matches!(self, TemporalUnit::Month | TemporalUnit::Year)
    }

    /// The lowercase name of the unit.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            TemporalUnit::Millisecond => "millisecond",
            TemporalUnit::Second => "second",
            TemporalUnit::Minute => "minute",
            TemporalUnit::Hour => "hour",
            TemporalUnit::Day => "day",
            TemporalUnit::Week => "week",
            TemporalUnit::Month => "month",
            TemporalUnit::Year => "year",
        }
    }
}

impl std::fmt::Display for TemporalUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
