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

//! # The Instant Capability
//!
//! The [`Temporal`] trait is the single seam between the range algebra and
//! concrete calendar representations. Anything totally ordered that can step
//! forward by a calendar unit and truncate to the start of one qualifies as
//! an instant; the range, progression, and chunking types are generic over it
//! and never inspect the representation.

use crate::{step::Step, unit::TemporalUnit};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// An ordered point-in-time value with calendar-aware arithmetic.
///
/// Implementations must uphold two laws the range algebra relies on:
///
/// - `checked_add(unit, n)` with `n > 0` returns either `None` (the timeline
///   ends: overflow or unsupported unit) or a value strictly greater than
///   `self`.
/// - `truncate(unit)` never returns a value greater than `self`, and is
///   idempotent for a given unit.
///
/// Months and years must step by calendar field arithmetic; their width in
/// days is not constant and must not be approximated by a fixed duration.
pub trait Temporal: Copy + Eq + Ord + Hash + Debug + Display {
    /// The finest granularity this instant type can represent. Defines the
    /// smallest representable margin between two distinct instants.
    const FINEST: TemporalUnit;

    /// The zero point of the timeline. For wall-clock types this is the Unix
    /// epoch; for tick-lines it is tick zero.
    fn epoch() -> Self;

    /// Advances this instant by `amount` of `unit`. Negative amounts step
    /// backwards. Returns `None` when the unit is not representable for this
    /// type or the result falls outside the representable timeline.
    fn checked_add(self, unit: TemporalUnit, amount: i64) -> Option<Self>;

    /// Truncates this instant to the start of `unit` (start of year, month,
    /// ISO week, day, hour, minute, second, or millisecond). Returns `None`
    /// when the unit is not representable for this type.
    fn truncate(self, unit: TemporalUnit) -> Option<Self>;

    /// Returns `true` if this type can represent steps of `unit`. The
    /// default accepts every unit at or above [`Temporal::FINEST`].
    #[inline]
    fn supports(unit: TemporalUnit) -> bool {
        unit >= Self::FINEST
    }

    /// Advances this instant by one whole [`Step`].
    #[inline]
    fn checked_step(self, step: Step) -> Option<Self> {
        self.checked_add(step.unit(), step.amount())
    }
}
