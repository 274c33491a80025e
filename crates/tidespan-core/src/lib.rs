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

//! # Tidespan Core
//!
//! Foundational temporal primitives for the Tidespan range ecosystem. This
//! crate defines the minimal capability an instant-like value must offer so
//! that higher-level crates can build ranges, stepped progressions, and
//! chunked traversals on top of it without knowing the concrete calendar
//! representation.
//!
//! ## Modules
//!
//! - `unit`: The `TemporalUnit` granularity vocabulary (millisecond through
//!   year), ordered from finest to coarsest, with fixed widths for sub-month
//!   units and calendar semantics for months and years.
//! - `step`: A validated, strictly positive `Step` (a unit paired with an
//!   amount) and the `InvalidStepError` raised for non-positive magnitudes or
//!   units a given instant type cannot represent.
//! - `instant`: The `Temporal` trait — total ordering plus calendar-aware
//!   `checked_add` and start-of-unit `truncate` — consumed by every range and
//!   progression type.
//! - `datetime`: `Temporal` implementations for the chrono wall-clock types
//!   (`NaiveDate`, `NaiveDateTime`, `DateTime<Utc>`).
//! - `ticks`: A generic integer tick-line instant (`Ticks<T>`) at millisecond
//!   resolution, for raw epoch-based timestamps.
//!
//! ## Purpose
//!
//! Splitting the instant capability from the range algebra keeps the
//! algorithms calendar-agnostic: months and years step by field arithmetic,
//! sub-month units by fixed durations, and the consuming code never needs to
//! distinguish the two.
//!
//! Refer to each module for detailed APIs and examples.

pub mod datetime;
pub mod instant;
pub mod step;
pub mod ticks;
pub mod unit;
