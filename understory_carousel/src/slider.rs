// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slider state machine.
//!
//! A [`Slider`] is either idle or dragging:
//!
//! - [`Slider::begin_gesture`] moves it to dragging and emits `touch`.
//! - [`Slider::update_gesture`] follows the pointer by translating the track.
//! - [`Slider::end_gesture`] decides whether the drag commits, snaps the track
//!   to the rest offset of the (possibly new) active slide, and schedules the
//!   settle styling pass.
//!
//! The active index only ever changes through [`Slider::set_active_index`],
//! which silently rejects out-of-range requests.

use core::fmt;

use kurbo::Point;
use tracing::{debug, trace};
use understory_timing::{TimerId, TimerQueue};

use crate::config::SliderConfig;
use crate::geometry::{Transition, decide_transition, rest_offset};
use crate::gesture::GestureTracker;
use crate::host::{SlideContainer, SlideRenderer, StyleClass};
use crate::notify::{Notification, Notifications};

/// Error returned when a slider cannot be constructed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvalidState {
    /// The container has no slides.
    Empty,
    /// The configured initial index is not a valid slide index.
    InitialIndexOutOfRange {
        /// The requested initial index.
        index: usize,
        /// Number of slides in the container.
        slide_count: usize,
    },
}

impl fmt::Display for InvalidState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("cannot build a slider over a container with no slides"),
            Self::InitialIndexOutOfRange { index, slide_count } => write!(
                f,
                "initial index {index} is out of range for {slide_count} slides"
            ),
        }
    }
}

impl core::error::Error for InvalidState {}

/// Snapshot of a slider's state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SliderState {
    slide_count: usize,
    active_index: usize,
    drag_offset: f64,
    gesture_active: bool,
}

impl SliderState {
    /// Number of slides; fixed at construction.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// The slide currently in view. Always `< slide_count`.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Horizontal displacement of the gesture in progress; `0.0` when idle.
    #[must_use]
    pub fn drag_offset(&self) -> f64 {
        self.drag_offset
    }

    /// `true` between the start and the end of a gesture.
    #[must_use]
    pub fn gesture_active(&self) -> bool {
        self.gesture_active
    }
}

#[derive(Copy, Clone, Debug)]
struct SettleTask {
    generation: u64,
}

/// A horizontally paged carousel driven by pointer gestures.
///
/// ```
/// use kurbo::Point;
/// use understory_carousel::{SlideRenderer, Slider, SliderConfig, StyleClass};
///
/// #[derive(Default)]
/// struct Track { offset: f64 }
///
/// impl SlideRenderer<&'static str> for Track {
///     fn set_slide_width(&mut self, _: &&'static str, _: f64) {}
///     fn translate_track(&mut self, offset: f64) { self.offset = offset; }
///     fn set_track_class(&mut self, _: StyleClass, _: bool) {}
///     fn set_slide_class(&mut self, _: &&'static str, _: StyleClass, _: bool) {}
/// }
///
/// let slides = vec!["one", "two", "three"];
/// let mut slider = Slider::new(slides, Track::default(), 300.0, SliderConfig::new(0.33)).unwrap();
///
/// slider.begin_gesture(Point::new(100.0, 0.0));
/// slider.update_gesture(Point::new(-20.0, 0.0));
/// assert_eq!(slider.renderer().offset, -120.0);
///
/// slider.end_gesture();
/// assert_eq!(slider.active_index(), 1);
/// assert_eq!(slider.renderer().offset, -300.0);
/// ```
pub struct Slider<C, R>
where
    C: SlideContainer,
{
    container: C,
    renderer: R,
    notifications: Notifications<C::Slide>,
    config: SliderConfig,
    state: SliderState,
    track_width: f64,
    gesture: GestureTracker,
    timers: TimerQueue<SettleTask>,
    pending_settle: Option<TimerId>,
    generation: u64,
    now: u64,
}

impl<C, R> fmt::Debug for Slider<C, R>
where
    C: SlideContainer,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("state", &self.state)
            .field("track_width", &self.track_width)
            .field("config", &self.config)
            .field("gesture", &self.gesture)
            .field("notifications", &self.notifications)
            .field("pending_settle", &self.pending_settle)
            .field("generation", &self.generation)
            .field("now", &self.now)
            .finish_non_exhaustive()
    }
}

impl<C, R> Slider<C, R>
where
    C: SlideContainer,
    R: SlideRenderer<C::Slide>,
{
    /// Builds a slider over `container`, each slide `track_width` pixels wide.
    ///
    /// See [`with_notifications`](Self::with_notifications) to observe the
    /// `init` notification.
    pub fn new(
        container: C,
        renderer: R,
        track_width: f64,
        config: SliderConfig,
    ) -> Result<Self, InvalidState> {
        Self::with_notifications(container, renderer, track_width, config, Notifications::new())
    }

    /// Builds a slider with subscribers already registered.
    ///
    /// Sizes every slide, applies the initial in-view classes, and emits
    /// `init` with the initially active slide. The track is only translated
    /// when the initial index is not `0`.
    ///
    /// # Errors
    ///
    /// - [`InvalidState::Empty`] if the container has no slides.
    /// - [`InvalidState::InitialIndexOutOfRange`] if `config.initial_index`
    ///   is not below the slide count.
    pub fn with_notifications(
        container: C,
        renderer: R,
        track_width: f64,
        config: SliderConfig,
        notifications: Notifications<C::Slide>,
    ) -> Result<Self, InvalidState> {
        let slide_count = container.slide_count();
        if slide_count == 0 {
            return Err(InvalidState::Empty);
        }
        let index = config.initial_index;
        if index >= slide_count {
            return Err(InvalidState::InitialIndexOutOfRange { index, slide_count });
        }

        let mut slider = Self {
            container,
            renderer,
            notifications,
            config,
            state: SliderState {
                slide_count,
                active_index: index,
                drag_offset: 0.0,
                gesture_active: false,
            },
            track_width,
            gesture: GestureTracker::default(),
            timers: TimerQueue::new(),
            pending_settle: None,
            generation: 0,
            now: 0,
        };

        slider.apply_widths();
        if index != 0 {
            slider.snap_to_rest();
        }
        slider.apply_view_classes();

        debug!(slide_count, index, track_width, "slider initialized");
        if let Some(element) = slider.container.slide_at(index) {
            slider
                .notifications
                .emit(&Notification::Init { element, index });
        }
        Ok(slider)
    }

    /// Makes slide `index` the active one and emits `change`.
    ///
    /// Returns `false` without touching any state if `index` is out of range.
    /// This does not move the track; see [`slide_to`](Self::slide_to).
    pub fn set_active_index(&mut self, index: usize) -> bool {
        if index >= self.state.slide_count {
            trace!(index, slide_count = self.state.slide_count, "ignoring out-of-range index");
            return false;
        }
        let Some(element) = self.container.slide_at(index) else {
            return false;
        };
        self.state.active_index = index;
        debug!(index, "active index changed");
        self.notifications
            .emit(&Notification::Change { index, element });
        true
    }

    /// Starts a gesture at `sample` and emits `touch`.
    ///
    /// A pending settle pass is cancelled. Starting a gesture while one is
    /// already in progress restarts it from `sample`.
    pub fn begin_gesture(&mut self, sample: Point) {
        self.cancel_settle();
        self.generation = self.generation.wrapping_add(1);
        self.gesture.begin(sample);
        self.state.gesture_active = true;
        self.state.drag_offset = 0.0;
        self.renderer.set_track_class(StyleClass::Touch, true);

        let index = self.state.active_index;
        debug!(index, x = sample.x, y = sample.y, "gesture started");
        let slides = self.container.slides();
        if let Some(element) = slides.get(index) {
            self.notifications.emit(&Notification::Touch {
                index,
                slides,
                element,
            });
        }
    }

    /// Follows the pointer to `sample`.
    ///
    /// Ignored while idle. The track is translated by the horizontal distance
    /// from the gesture origin, unless that distance is zero.
    pub fn update_gesture(&mut self, sample: Point) {
        if !self.state.gesture_active {
            return;
        }
        let Some(delta) = self.gesture.update(sample) else {
            return;
        };
        self.state.drag_offset = delta.x;
        if delta.x == 0.0 {
            return;
        }
        let offset = rest_offset(self.state.active_index, self.track_width) + delta.x;
        self.renderer.translate_track(offset);
    }

    /// Ends the current gesture.
    ///
    /// Commits to the neighbouring slide if the drag crossed the tolerance,
    /// snaps the track to rest, and schedules the settle styling pass
    /// [`SliderConfig::settle_delay`] after the current clock. Commits past
    /// either end are discarded. Calling this again without a new gesture
    /// never changes the active index.
    pub fn end_gesture(&mut self) {
        let transition = decide_transition(
            self.state.drag_offset,
            self.track_width,
            self.config.tolerance_fraction,
        );
        debug!(
            drag_offset = self.state.drag_offset,
            ?transition,
            "gesture ended"
        );
        if transition != Transition::Stay {
            match transition.apply(self.state.active_index) {
                Some(target) => {
                    self.set_active_index(target);
                }
                None => trace!("ignoring retreat before the first slide"),
            }
        }

        self.renderer.set_track_class(StyleClass::Touch, false);
        self.snap_to_rest();
        self.schedule_settle();

        self.gesture.end();
        self.state.drag_offset = 0.0;
        self.state.gesture_active = false;
    }

    /// Updates the slide width after the viewport changed size.
    ///
    /// Every slide is resized and the track re-translated, keeping the live
    /// drag offset if a gesture is in progress.
    pub fn resize(&mut self, track_width: f64) {
        debug!(track_width, "slider resized");
        self.track_width = track_width;
        self.apply_widths();
        let mut offset = rest_offset(self.state.active_index, track_width);
        if self.state.gesture_active {
            offset += self.state.drag_offset;
        }
        self.renderer.translate_track(offset);
    }

    /// Moves to slide `index` without a gesture.
    ///
    /// Sets the active index, snaps the track, and reapplies in-view styling
    /// immediately (unless a gesture is in progress). Returns `false` if
    /// `index` is out of range.
    pub fn slide_to(&mut self, index: usize) -> bool {
        if !self.set_active_index(index) {
            return false;
        }
        self.snap_to_rest();
        if !self.state.gesture_active {
            self.cancel_settle();
            self.apply_view_classes();
        }
        true
    }

    /// Moves to the next slide. Returns `false` on the last slide.
    pub fn next_slide(&mut self) -> bool {
        self.slide_to(self.state.active_index.saturating_add(1))
    }

    /// Moves to the previous slide. Returns `false` on the first slide.
    pub fn previous_slide(&mut self) -> bool {
        match self.state.active_index.checked_sub(1) {
            Some(index) => self.slide_to(index),
            None => false,
        }
    }

    /// Advances the slider clock to `now` and runs any due settle pass.
    ///
    /// The clock never moves backwards. A settle pass that comes due while a
    /// gesture is active, or that belongs to an earlier gesture, is dropped.
    /// Returns the number of styling passes applied.
    pub fn advance_to(&mut self, now: u64) -> usize {
        self.now = self.now.max(now);
        let mut applied = 0;
        while let Some((id, task)) = self.timers.pop_due(self.now) {
            if self.pending_settle == Some(id) {
                self.pending_settle = None;
            }
            if self.state.gesture_active || task.generation != self.generation {
                trace!(generation = task.generation, "dropping stale settle pass");
                continue;
            }
            self.apply_view_classes();
            applied += 1;
        }
        applied
    }

    fn snap_to_rest(&mut self) {
        self.renderer
            .translate_track(rest_offset(self.state.active_index, self.track_width));
    }

    fn apply_widths(&mut self) {
        for slide in self.container.slides() {
            self.renderer.set_slide_width(slide, self.track_width);
        }
    }

    fn apply_view_classes(&mut self) {
        let active = self.state.active_index;
        for (index, slide) in self.container.slides().iter().enumerate() {
            let in_view = index == active;
            self.renderer
                .set_slide_class(slide, StyleClass::InView, in_view);
            self.renderer
                .set_slide_class(slide, StyleClass::NotInView, !in_view);
        }
    }

    fn schedule_settle(&mut self) {
        self.cancel_settle();
        let task = SettleTask {
            generation: self.generation,
        };
        let id = self
            .timers
            .schedule_after(self.now, self.config.settle_delay(), task);
        self.pending_settle = Some(id);
    }

    fn cancel_settle(&mut self) {
        if let Some(id) = self.pending_settle.take() {
            self.timers.cancel(id);
        }
    }
}

impl<C, R> Slider<C, R>
where
    C: SlideContainer,
{
    /// Returns a snapshot of the slider state.
    #[must_use]
    pub fn state(&self) -> SliderState {
        self.state
    }

    /// The slide currently in view.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    /// Number of slides.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.state.slide_count
    }

    /// Horizontal displacement of the gesture in progress.
    #[must_use]
    pub fn drag_offset(&self) -> f64 {
        self.state.drag_offset
    }

    /// `true` while a gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.gesture_active
    }

    /// Current width of one slide.
    #[must_use]
    pub fn track_width(&self) -> f64 {
        self.track_width
    }

    /// The configuration the slider was built with.
    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// The slider clock, as last set by [`advance_to`](Self::advance_to).
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Deadline of the pending settle pass, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// The slide container.
    #[must_use]
    pub fn container(&self) -> &C {
        &self.container
    }

    /// The renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The renderer, mutably.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// The notification registry, for adding or removing subscribers.
    pub fn notifications_mut(&mut self) -> &mut Notifications<C::Slide> {
        &mut self.notifications
    }

    /// Consumes the slider, returning its collaborators.
    pub fn into_parts(self) -> (C, R, Notifications<C::Slide>) {
        (self.container, self.renderer, self.notifications)
    }
}
