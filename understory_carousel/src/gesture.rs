// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture tracking: remember where a press started and where it is now.
//!
//! A [`GestureTracker`] covers one press-to-release interaction. The slider
//! only needs the displacement from the origin, so unlike an incremental drag
//! helper the tracker reports totals, never per-move deltas.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_carousel::gesture::GestureTracker;
//!
//! let mut gesture = GestureTracker::default();
//! assert_eq!(gesture.update(Point::new(5.0, 5.0)), None);
//!
//! gesture.begin(Point::new(100.0, 0.0));
//! assert_eq!(gesture.update(Point::new(40.0, 2.0)), Some(Vec2::new(-60.0, 2.0)));
//! assert_eq!(gesture.update(Point::new(30.0, 2.0)), Some(Vec2::new(-70.0, 2.0)));
//!
//! gesture.end();
//! assert!(!gesture.is_active());
//! ```

use kurbo::{Point, Vec2};

use crate::geometry::coordinate_delta;

/// Origin and latest sample of an in-progress gesture.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GestureTracker {
    origin: Option<Point>,
    latest: Option<Point>,
}

impl GestureTracker {
    /// Starts a gesture at `sample`, discarding any gesture in progress.
    pub fn begin(&mut self, sample: Point) {
        self.origin = Some(sample);
        self.latest = Some(sample);
    }

    /// Records `sample` and returns its displacement from the origin.
    ///
    /// Returns `None` when no gesture is active.
    pub fn update(&mut self, sample: Point) -> Option<Vec2> {
        let origin = self.origin?;
        self.latest = Some(sample);
        Some(coordinate_delta(origin, sample))
    }

    /// Ends the gesture, returning the total displacement of the last sample.
    pub fn end(&mut self) -> Option<Vec2> {
        let total = match (self.origin, self.latest) {
            (Some(origin), Some(latest)) => Some(coordinate_delta(origin, latest)),
            _ => None,
        };
        self.origin = None;
        self.latest = None;
        total
    }

    /// Returns the point where the gesture started.
    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    /// Returns the most recent sample.
    #[must_use]
    pub fn latest(&self) -> Option<Point> {
        self.latest
    }

    /// Returns `true` between [`begin`](Self::begin) and [`end`](Self::end).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }
}
