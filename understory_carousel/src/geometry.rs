// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry helpers: pointer deltas, rest offsets, and the commit decision.
//!
//! Slides are laid out left-to-right on a single track, each exactly one
//! "track width" wide. Bringing slide `n` into view means translating the track
//! left by `n * width`.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_carousel::geometry::{Transition, coordinate_delta, decide_transition, rest_offset};
//!
//! // Pointer pressed at x = 100 and dragged left to x = -20.
//! let delta = coordinate_delta(Point::new(100.0, 0.0), Point::new(-20.0, 0.0));
//! assert_eq!(delta.x, -120.0);
//!
//! // 120px is more than a third of a 300px slide: commit to the next slide.
//! let decision = decide_transition(delta.x, 300.0, 0.33);
//! assert_eq!(decision, Transition::Advance);
//! assert_eq!(decision.apply(0), Some(1));
//! assert_eq!(rest_offset(1, 300.0), -300.0);
//! ```

use kurbo::{Point, Vec2};

/// Returns the displacement of `current` relative to `origin`.
///
/// Moving the pointer left or up yields negative components.
#[must_use]
pub fn coordinate_delta(origin: Point, current: Point) -> Vec2 {
    current - origin
}

/// Returns the track translation that brings slide `index` fully into view.
///
/// Slide `0` always rests at `0.0`; every other slide rests at
/// `-index * track_width`.
#[must_use]
pub fn rest_offset(index: usize, track_width: f64) -> f64 {
    if index == 0 {
        return 0.0;
    }
    -(index as f64) * track_width
}

/// The index step decided at the end of a gesture.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Transition {
    /// Move to the previous slide.
    Retreat,
    /// Snap back to the current slide.
    #[default]
    Stay,
    /// Move to the next slide.
    Advance,
}

impl Transition {
    /// Returns the signed index step: `-1`, `0`, or `+1`.
    #[must_use]
    pub const fn step(self) -> isize {
        match self {
            Self::Retreat => -1,
            Self::Stay => 0,
            Self::Advance => 1,
        }
    }

    /// Applies the step to `index`.
    ///
    /// Returns `None` if retreating from index `0`. Upper bounds are not known
    /// here; callers check the result against their slide count.
    #[must_use]
    pub fn apply(self, index: usize) -> Option<usize> {
        index.checked_add_signed(self.step())
    }
}

/// Decides whether a drag of `drag_delta` pixels commits an index change.
///
/// The drag must cover at least `track_width * tolerance_fraction` pixels to
/// commit. Dragging left (negative delta) advances; dragging right retreats.
/// Smaller tolerance fractions make the carousel more sensitive.
#[must_use]
pub fn decide_transition(drag_delta: f64, track_width: f64, tolerance_fraction: f64) -> Transition {
    if drag_delta == 0.0 {
        return Transition::Stay;
    }
    let tolerance = track_width * tolerance_fraction;
    if drag_delta.abs() < tolerance {
        Transition::Stay
    } else if drag_delta < 0.0 {
        Transition::Advance
    } else {
        Transition::Retreat
    }
}
