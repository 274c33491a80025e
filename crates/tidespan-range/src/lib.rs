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

//! # Tidespan Range
//!
//! **Closed temporal intervals, stepped progressions, and chunked traversal.**
//!
//! This crate builds the range algebra on top of the instant capability from
//! `tidespan-core`. All types are immutable `Copy` value descriptors; every
//! iteration request allocates its own cursor, so independent consumers can
//! traverse the same descriptor concurrently without coordination.
//!
//! ## Architecture
//!
//! - **`range`**: `TemporalRange<T>` — a closed inclusive interval
//!   `[start, end_inclusive]` with containment, overlap, and set operations.
//!   A range whose start exceeds its end is the representable empty state,
//!   never an error.
//! - **`progression`**: `TemporalProgression<T>` — a range paired with a
//!   strictly positive step; a lazy, finite, restartable sequence of the
//!   instants `start + k * step` that do not exceed the end.
//! - **`chunk`**: partitioning of a range into contiguous sub-ranges of at
//!   most `size` unit-stepped elements each, with one ergonomic entry point
//!   per calendar granularity.
//!
//! ## Design Philosophy
//!
//! 1. **Fail-fast**: step magnitudes and chunk sizes are validated at the
//!    call that introduces them, never inside lazy iteration.
//! 2. **Emptiness is data**: an empty range, a zero-element progression, and
//!    a zero-chunk partition are valid terminal states.
//! 3. **Calendar honesty**: month and year steps delegate to the instant's
//!    field arithmetic; no fixed-duration approximation anywhere.

pub mod chunk;
pub mod progression;
pub mod range;
