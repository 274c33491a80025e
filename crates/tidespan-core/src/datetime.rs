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

//! [`Temporal`] implementations for the chrono wall-clock types.
//!
//! `NaiveDate` is day-granular and steps by day, week, month, and year.
//! `NaiveDateTime` and `DateTime<Utc>` are millisecond-granular and step by
//! every unit. Month and year steps use chrono's field arithmetic, which
//! clamps to the end of shorter months; weeks start on Monday.

use crate::{instant::Temporal, unit::TemporalUnit};
use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime, TimeDelta, Timelike, Utc};

macro_rules! impl_temporal_for_datetime {
    ($t:ty, $epoch:expr) => {
        impl Temporal for $t {
            const FINEST: TemporalUnit = TemporalUnit::Millisecond;

            #[inline]
            fn epoch() -> Self {
                $epoch
            }

            fn checked_add(self, unit: TemporalUnit, amount: i64) -> Option<Self> {
                match unit {
                    TemporalUnit::Year => {
                        add_months_clamped(self, amount.checked_mul(12)?, |v, m| {
                            v.checked_add_months(m)
                        }, |v, m| v.checked_sub_months(m))
                    }
                    TemporalUnit::Month => add_months_clamped(
                        self,
                        amount,
                        |v, m| v.checked_add_months(m),
                        |v, m| v.checked_sub_months(m),
                    ),
                    _ => {
                        let width = unit.fixed_millis()?;
                        let millis = amount.checked_mul(width)?;
                        self.checked_add_signed(TimeDelta::try_milliseconds(millis)?)
                    }
                }
            }

            fn truncate(self, unit: TemporalUnit) -> Option<Self> {
                let midnight = |value: Self| -> Option<Self> {
                    value
                        .with_hour(0)?
                        .with_minute(0)?
                        .with_second(0)?
                        .with_nanosecond(0)
                };
                match unit {
                    TemporalUnit::Year => midnight(self.with_month(1)?.with_day(1)?),
                    TemporalUnit::Month => midnight(self.with_day(1)?),
                    TemporalUnit::Week => {
                        let back = u64::from(self.weekday().num_days_from_monday());
                        midnight(self.checked_sub_days(Days::new(back))?)
                    }
                    TemporalUnit::Day => midnight(self),
                    TemporalUnit::Hour => {
                        self.with_minute(0)?.with_second(0)?.with_nanosecond(0)
                    }
                    TemporalUnit::Minute => self.with_second(0)?.with_nanosecond(0),
                    TemporalUnit::Second => self.with_nanosecond(0),
                    TemporalUnit::Millisecond => {
                        let nanos = self.nanosecond();
                        self.with_nanosecond(nanos - nanos % 1_000_000)
                    }
                }
            }
        }
    };
}

impl_temporal_for_datetime!(NaiveDateTime, DateTime::<Utc>::UNIX_EPOCH.naive_utc());
impl_temporal_for_datetime!(DateTime<Utc>, DateTime::<Utc>::UNIX_EPOCH);

/// Applies a signed month delta through chrono's clamping month arithmetic.
fn add_months_clamped<T>(
    value: T,
    months: i64,
    add: impl FnOnce(T, Months) -> Option<T>,
    sub: impl FnOnce(T, Months) -> Option<T>,
) -> Option<T> {
    let magnitude = u32::try_from(months.unsigned_abs()).ok()?;
    if months >= 0 {
        add(value, Months::new(magnitude))
    } else {
        sub(value, Months::new(magnitude))
    }
}

fn add_days_signed(value: NaiveDate, days: i64) -> Option<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        value.checked_add_days(magnitude)
    } else {
        value.checked_sub_days(magnitude)
    }
}

impl Temporal for NaiveDate {
    const FINEST: TemporalUnit = TemporalUnit::Day;

    #[inline]
    fn epoch() -> Self {
        DateTime::<Utc>::UNIX_EPOCH.date_naive()
    }

    fn checked_add(self, unit: TemporalUnit, amount: i64) -> Option<Self> {
        match unit {
            TemporalUnit::Year => add_months_clamped(
                self,
                amount.checked_mul(12)?,
                |v, m| v.checked_add_months(m),
                |v, m| v.checked_sub_months(m),
            ),
            TemporalUnit::Month => add_months_clamped(
                self,
                amount,
                |v, m| v.checked_add_months(m),
                |v, m| v.checked_sub_months(m),
            ),
            TemporalUnit::Week => add_days_signed(self, amount.checked_mul(7)?),
            TemporalUnit::Day => add_days_signed(self, amount),
            _ => None,
        }
    }

    fn truncate(self, unit: TemporalUnit) -> Option<Self> {
        match unit {
            TemporalUnit::Year => self.with_month(1)?.with_day(1),
            TemporalUnit::Month => self.with_day(1),
            TemporalUnit::Week => {
                let back = u64::from(self.weekday().num_days_from_monday());
                self.checked_sub_days(Days::new(back))
            }
            TemporalUnit::Day => Some(self),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, s).unwrap()
    }

    #[test]
    fn test_epochs() {
        assert_eq!(NaiveDate::epoch(), date(1970, 1, 1));
        assert_eq!(NaiveDateTime::epoch(), datetime(1970, 1, 1, 0, 0, 0));
        assert_eq!(DateTime::<Utc>::epoch().naive_utc(), datetime(1970, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_date_supports_day_and_coarser() {
        assert!(NaiveDate::supports(TemporalUnit::Day));
        assert!(NaiveDate::supports(TemporalUnit::Week));
        assert!(NaiveDate::supports(TemporalUnit::Month));
        assert!(NaiveDate::supports(TemporalUnit::Year));
        assert!(!NaiveDate::supports(TemporalUnit::Hour));
        assert!(!NaiveDate::supports(TemporalUnit::Millisecond));
    }

    #[test]
    fn test_date_add_days_and_weeks() {
        let d = date(2024, 2, 27);
        assert_eq!(d.checked_add(TemporalUnit::Day, 3), Some(date(2024, 3, 1)));
        assert_eq!(d.checked_add(TemporalUnit::Week, 1), Some(date(2024, 3, 5)));
        assert_eq!(d.checked_add(TemporalUnit::Day, -27), Some(date(2024, 1, 31)));
    }

    #[test]
    fn test_date_add_months_clamps() {
        // Month arithmetic clamps to the end of shorter months.
        let d = date(2024, 1, 31);
        assert_eq!(d.checked_add(TemporalUnit::Month, 1), Some(date(2024, 2, 29)));
        assert_eq!(d.checked_add(TemporalUnit::Month, 3), Some(date(2024, 4, 30)));
    }

    #[test]
    fn test_date_add_years() {
        let d = date(2020, 2, 29);
        assert_eq!(d.checked_add(TemporalUnit::Year, 1), Some(date(2021, 2, 28)));
        assert_eq!(d.checked_add(TemporalUnit::Year, 4), Some(date(2024, 2, 29)));
        assert_eq!(d.checked_add(TemporalUnit::Year, -1), Some(date(2019, 2, 28)));
    }

    #[test]
    fn test_date_rejects_sub_day_units() {
        let d = date(2024, 6, 15);
        assert_eq!(d.checked_add(TemporalUnit::Hour, 1), None);
        assert_eq!(d.checked_add(TemporalUnit::Second, 1), None);
        assert_eq!(d.truncate(TemporalUnit::Minute), None);
    }

    #[test]
    fn test_date_truncate() {
        let d = date(2024, 6, 15); // a Saturday
        assert_eq!(d.truncate(TemporalUnit::Year), Some(date(2024, 1, 1)));
        assert_eq!(d.truncate(TemporalUnit::Month), Some(date(2024, 6, 1)));
        assert_eq!(d.truncate(TemporalUnit::Week), Some(date(2024, 6, 10)));
        assert_eq!(d.truncate(TemporalUnit::Day), Some(d));
    }

    #[test]
    fn test_datetime_add_fixed_units() {
        let t = datetime(2024, 6, 15, 10, 30, 45);
        assert_eq!(
            t.checked_add(TemporalUnit::Hour, 2),
            Some(datetime(2024, 6, 15, 12, 30, 45))
        );
        assert_eq!(
            t.checked_add(TemporalUnit::Minute, -31),
            Some(datetime(2024, 6, 15, 9, 59, 45))
        );
        assert_eq!(
            t.checked_add(TemporalUnit::Day, 16),
            Some(datetime(2024, 7, 1, 10, 30, 45))
        );
    }

    #[test]
    fn test_datetime_add_calendar_units() {
        let t = datetime(2024, 1, 31, 8, 0, 0);
        assert_eq!(
            t.checked_add(TemporalUnit::Month, 1),
            Some(datetime(2024, 2, 29, 8, 0, 0))
        );
        assert_eq!(
            t.checked_add(TemporalUnit::Year, 1),
            Some(datetime(2025, 1, 31, 8, 0, 0))
        );
    }

    #[test]
    fn test_datetime_truncate() {
        let t = datetime(2024, 6, 15, 10, 30, 45);
        assert_eq!(
            t.truncate(TemporalUnit::Year),
            Some(datetime(2024, 1, 1, 0, 0, 0))
        );
        assert_eq!(
            t.truncate(TemporalUnit::Month),
            Some(datetime(2024, 6, 1, 0, 0, 0))
        );
        assert_eq!(
            t.truncate(TemporalUnit::Week),
            Some(datetime(2024, 6, 10, 0, 0, 0))
        );
        assert_eq!(
            t.truncate(TemporalUnit::Day),
            Some(datetime(2024, 6, 15, 0, 0, 0))
        );
        assert_eq!(
            t.truncate(TemporalUnit::Hour),
            Some(datetime(2024, 6, 15, 10, 0, 0))
        );
        assert_eq!(
            t.truncate(TemporalUnit::Minute),
            Some(datetime(2024, 6, 15, 10, 30, 0))
        );
        assert_eq!(t.truncate(TemporalUnit::Second), Some(t));
    }

    #[test]
    fn test_datetime_truncate_is_idempotent() {
        let t = datetime(2024, 6, 15, 10, 30, 45);
        for unit in TemporalUnit::ALL {
            let once = t.truncate(unit).unwrap();
            assert_eq!(once.truncate(unit), Some(once));
        }
    }

    #[test]
    fn test_datetime_truncate_millisecond() {
        let t = datetime(2024, 6, 15, 10, 30, 45)
            .with_nanosecond(123_456_789)
            .unwrap();
        let truncated = t.truncate(TemporalUnit::Millisecond).unwrap();
        assert_eq!(truncated.nanosecond(), 123_000_000);
    }

    #[test]
    fn test_utc_mirrors_naive() {
        let t = datetime(2024, 3, 31, 23, 59, 59).and_utc();
        assert_eq!(
            t.checked_add(TemporalUnit::Second, 1),
            Some(datetime(2024, 4, 1, 0, 0, 0).and_utc())
        );
        assert_eq!(
            t.truncate(TemporalUnit::Month),
            Some(datetime(2024, 3, 1, 0, 0, 0).and_utc())
        );
    }

    #[test]
    fn test_checked_step_matches_checked_add() {
        use crate::step::Step;

        let t = datetime(2024, 6, 15, 0, 0, 0);
        let step = Step::hours(20).unwrap();
        assert_eq!(t.checked_step(step), t.checked_add(TemporalUnit::Hour, 20));
    }
}
