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

use crate::unit::TemporalUnit;

/// The reason a step was rejected.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum InvalidStepKind {
    /// The step magnitude was zero or negative.
    NonPositive,
    /// The instant type cannot represent steps of this unit.
    UnsupportedUnit,
}

/// The error type for step construction and progression construction.
///
/// Raised synchronously at the call that introduces the invalid parameter,
/// never deferred into lazy iteration.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct InvalidStepError {
    /// The unit of the rejected step.
    pub unit: TemporalUnit,
    /// The amount of the rejected step.
    pub amount: i64,
    /// Why the step was rejected.
    pub kind: InvalidStepKind,
}

impl InvalidStepError {
    /// An error for a zero or negative step magnitude.
    #[inline]
    pub const fn non_positive(unit: TemporalUnit, amount: i64) -> Self {
        Self {
            unit,
            amount,
            kind: InvalidStepKind::NonPositive,
        }
    }

    /// An error for a unit the instant type cannot step by.
    #[inline]
    pub const fn unsupported_unit(unit: TemporalUnit, amount: i64) -> Self {
        Self {
            unit,
            amount,
            kind: InvalidStepKind::UnsupportedUnit,
        }
    }
}

impl std::fmt::Display for InvalidStepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            InvalidStepKind::NonPositive => write!(
                f,
                "step must be strictly positive, got {} {}",
                self.amount, self.unit
            ),
            InvalidStepKind::UnsupportedUnit => write!(
                f,
                "instant type does not support stepping by {}",
                self.unit
            ),
        }
    }
}

impl std::error::Error for InvalidStepError {}

/// A strictly positive temporal step: an amount of a [`TemporalUnit`].
///
/// A `Step` is the materialization rule of a progression. Construction
/// validates the magnitude eagerly, so a held `Step` is always positive.
///
/// # Examples
///
/// ```rust
/// # use tidespan_core::step::Step;
/// # use tidespan_core::unit::TemporalUnit;
///
/// let step = Step::new(TemporalUnit::Day, 30).unwrap();
/// assert_eq!(step.amount(), 30);
/// assert!(Step::new(TemporalUnit::Day, 0).is_err());
/// assert!(Step::new(TemporalUnit::Day, -1).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Step {
    unit: TemporalUnit,
    amount: i64,
}

impl Step {
    /// Creates a new `Step`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStepError`] when `amount` is zero or negative.
    #[inline]
    pub fn new(unit: TemporalUnit, amount: i64) -> Result<Self, InvalidStepError> {
        if amount <= 0 {
            return Err(InvalidStepError::non_positive(unit, amount));
        }
        Ok(Self { unit, amount })
    }

    /// Returns the unit of this step.
    #[inline]
    pub const fn unit(&self) -> TemporalUnit {
        self.unit
    }

    /// Returns the amount of this step. Always strictly positive.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    /// A step of `n` years.
    #[inline]
    pub fn years(n: i64) -> Result<Self, InvalidStepError> {
        Self::new(TemporalUnit::Year, n)
    }

    /// A step of `n` months.
    #[inline]
    pub fn months(n: i64) -> Result<Self, InvalidStepError> {
        Self::new(TemporalUnit::Month, n)
    }

    /// A step of `n` weeks.
    #[inline]
    pub fn weeks(n: i64) -> Result<Self, InvalidStepError> {
        Self::new(TemporalUnit::Week, n)
    }

    /// A step of `n` days.
    #[inline]
    pub fn days(n: i64) -> Result<Self, InvalidStepError> {
        Self::new(TemporalUnit::Day, n)
    }

    /// A step of `n` hours.
    #[inline]
    pub fn hours(n: i64) -> Result<Self, InvalidStepError> {
        Self::new(TemporalUnit::Hour, n)
    }

    /// A step of `n` minutes.
    #[inline]
    pub fn minutes(n: i64) -> Result<Self, InvalidStepError> {
        Self::new(TemporalUnit::Minute, n)
    }

    /// A step of `n` seconds.
    #[inline]
    pub fn seconds(n: i64) -> Result<Self, InvalidStepError> {
        Self::new(TemporalUnit::Second, n)
    }

    /// A step of `n` milliseconds.
    #[inline]
    pub fn milliseconds(n: i64) -> Result<Self, InvalidStepError> {
        Self::new(TemporalUnit::Millisecond, n)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}
