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

use futures_core::Stream;
use std::{
    pin::Pin,
    task::{Context, Poll},
};
use tidespan_core::{
    instant::Temporal,
    step::{InvalidStepError, Step},
};
use tidespan_range::{
    progression::{ProgressionIter, TemporalProgression},
    range::TemporalRange,
};

/// A `Stream` that drains a progression cursor synchronously.
///
/// Every poll yields the next element immediately; the stream never pends.
/// Because the underlying progression is a restartable descriptor, building
/// a second stream from the same progression replays the identical sequence.
///
/// # Examples
///
/// ```rust
/// # use futures::StreamExt;
/// # use futures::executor::block_on;
/// # use tidespan_core::step::Step;
/// # use tidespan_core::ticks::Timestamp;
/// # use tidespan_range::progression::TemporalProgression;
/// # use tidespan_stream::stream::IntoTemporalStream;
///
/// let progression = TemporalProgression::from_closed_range(
///     Timestamp::new(0),
///     Timestamp::new(5_000),
///     Step::seconds(2).unwrap(),
/// )
/// .unwrap();
///
/// let elements = block_on(progression.into_stream().collect::<Vec<_>>());
/// assert_eq!(elements.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct ProgressionStream<T>
where
    T: Temporal,
{
    iter: ProgressionIter<T>,
}

impl<T> ProgressionStream<T>
where
    T: Temporal,
{
    /// Creates a stream with a fresh cursor over `progression`.
    #[inline]
    pub fn new(progression: &TemporalProgression<T>) -> Self {
        Self {
            iter: progression.iter(),
        }
    }
}

// The stream holds no self-references; polling only advances a by-value
// cursor.
impl<T> Unpin for ProgressionStream<T> where T: Temporal {}

impl<T> Stream for ProgressionStream<T>
where
    T: Temporal,
{
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Poll::Ready(self.get_mut().iter.next())
    }
}

/// Conversion of a progression into a [`ProgressionStream`].
pub trait IntoTemporalStream<T>
where
    T: Temporal,
{
    /// Turns this value into a push-based stream of its instants.
    fn into_stream(self) -> ProgressionStream<T>;
}

impl<T> IntoTemporalStream<T> for TemporalProgression<T>
where
    T: Temporal,
{
    #[inline]
    fn into_stream(self) -> ProgressionStream<T> {
        ProgressionStream::new(&self)
    }
}

/// Streams a range's instants at the given step.
///
/// # Errors
///
/// Returns [`InvalidStepError`] when the instant type cannot step by the
/// step's unit.
pub fn stream_range<T>(
    range: TemporalRange<T>,
    step: Step,
) -> Result<ProgressionStream<T>, InvalidStepError>
where
    T: Temporal,
{
    Ok(range.step(step)?.into_stream())
}

/// Streams every representable instant of a range, stepping by one unit of
/// the type's finest granularity.
pub fn stream_range_finest<T>(
    range: TemporalRange<T>,
) -> Result<ProgressionStream<T>, InvalidStepError>
where
    T: Temporal,
{
    stream_range(range, Step::new(T::FINEST, 1)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use futures::{StreamExt, executor::block_on};
    use tidespan_core::ticks::{Ticks, Timestamp};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_stream_matches_iteration() {
        let progression = TemporalProgression::from_closed_range(
            date(2024, 1, 1),
            date(2024, 1, 10),
            Step::days(3).unwrap(),
        )
        .unwrap();

        let pulled: Vec<_> = progression.iter().collect();
        let pushed = block_on(progression.into_stream().collect::<Vec<_>>());
        assert_eq!(pushed, pulled);
    }

    #[test]
    fn test_empty_progression_streams_nothing() {
        let progression = TemporalProgression::from_closed_range(
            date(2024, 1, 2),
            date(2024, 1, 1),
            Step::days(1).unwrap(),
        )
        .unwrap();

        let pushed = block_on(progression.into_stream().collect::<Vec<_>>());
        assert!(pushed.is_empty());
    }

    #[test]
    fn test_two_streams_replay_the_same_sequence() {
        let progression = TemporalProgression::from_closed_range(
            Timestamp::new(0),
            Timestamp::new(10_000),
            Step::seconds(4).unwrap(),
        )
        .unwrap();

        let first = block_on(ProgressionStream::new(&progression).collect::<Vec<_>>());
        let second = block_on(ProgressionStream::new(&progression).collect::<Vec<_>>());
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![Ticks::new(0), Ticks::new(4_000), Ticks::new(8_000)]
        );
    }

    #[test]
    fn test_stream_range_with_step() {
        let range = TemporalRange::new(date(2024, 1, 1), date(2024, 1, 31));
        let stream = stream_range(range, Step::weeks(1).unwrap()).unwrap();
        let elements = block_on(stream.collect::<Vec<_>>());
        assert_eq!(elements.len(), 5);
    }

    #[test]
    fn test_stream_range_finest_steps_by_day_for_dates() {
        let range = TemporalRange::new(date(2024, 1, 1), date(2024, 1, 5));
        let stream = stream_range_finest(range).unwrap();
        let elements = block_on(stream.collect::<Vec<_>>());
        assert_eq!(elements.len(), 5);
    }

    #[test]
    fn test_stream_range_rejects_unsupported_step() {
        let range = TemporalRange::new(date(2024, 1, 1), date(2024, 1, 5));
        assert!(stream_range(range, Step::minutes(1).unwrap()).is_err());
    }
}
