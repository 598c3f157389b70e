// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: a headless, gesture-driven slide carousel.
//!
//! This crate turns an ordered set of slides into horizontally paged content.
//! A [`Slider`] interprets a stream of pointer samples into:
//!
//! - live translation of the slide track while a drag is in progress,
//! - a commit or snap-back decision when the drag ends,
//! - and bounded changes of the active slide.
//!
//! It does **not** own a scene graph, a DOM, or an event loop. Hosts are
//! expected to:
//!
//! - Expose their slides through a [`SlideContainer`].
//! - Apply widths, track translations, and classes requested through a
//!   [`SlideRenderer`].
//! - Forward pointer press/move/release as [`Slider::begin_gesture`],
//!   [`Slider::update_gesture`], and [`Slider::end_gesture`].
//! - Forward viewport size changes as [`Slider::resize`].
//! - Drive the clock with [`Slider::advance_to`] so the deferred settle
//!   styling runs (see [`Slider::next_deadline`]).
//!
//! ## Modules
//!
//! - [`geometry`]: pure helpers for pointer deltas, rest offsets, and the
//!   commit decision.
//! - [`gesture`]: origin tracking for one press-to-release interaction.
//! - [`notify`]: the `init` / `change` / `touch` notification registry.
//! - [`host`]: collaborator traits implemented by the host toolkit.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kurbo::Point;
//! use understory_carousel::{
//!     NotificationKind, Notifications, SlideRenderer, Slider, SliderConfig, StyleClass,
//! };
//!
//! #[derive(Default)]
//! struct Styles { in_view: Vec<u32> }
//!
//! impl SlideRenderer<u32> for Styles {
//!     fn set_slide_width(&mut self, _: &u32, _: f64) {}
//!     fn translate_track(&mut self, _: f64) {}
//!     fn set_track_class(&mut self, _: StyleClass, _: bool) {}
//!     fn set_slide_class(&mut self, slide: &u32, class: StyleClass, enabled: bool) {
//!         if class == StyleClass::InView && enabled {
//!             self.in_view.push(*slide);
//!         }
//!     }
//! }
//!
//! let changes = Rc::new(RefCell::new(Vec::new()));
//! let mut notifications = Notifications::<u32>::new();
//! let sink = changes.clone();
//! notifications.subscribe(NotificationKind::Change, move |n| sink.borrow_mut().push(n.index()));
//!
//! let config = SliderConfig::new(0.15);
//! let mut slider =
//!     Slider::with_notifications(vec![10, 20, 30], Styles::default(), 400.0, config, notifications)
//!         .unwrap();
//!
//! // Swipe left by 80px: more than 15% of 400px, so the slider advances.
//! slider.begin_gesture(Point::new(300.0, 10.0));
//! slider.update_gesture(Point::new(220.0, 12.0));
//! slider.end_gesture();
//! assert_eq!(slider.active_index(), 1);
//! assert_eq!(*changes.borrow(), vec![1]);
//!
//! // Once the transition has settled, the new slide is styled as in view.
//! slider.advance_to(config.settle_delay());
//! assert_eq!(slider.renderer().in_view.last(), Some(&20));
//! ```
//!
//! ## Gesture lifecycle
//!
//! A slider is either idle or dragging. Starting a gesture adds the `touch`
//! class to the track and emits `touch`. Moving the pointer translates the
//! track by the horizontal distance from where the gesture started. Ending the
//! gesture compares that distance against
//! [`SliderConfig::tolerance_fraction`] of the track width; beyond it the
//! slider moves one slide in the direction of the drag, otherwise it snaps
//! back. Either way the track is translated to the rest offset of the active
//! slide and the in-view classes are reapplied after
//! [`SliderConfig::settle_delay`].
//!
//! Requests that would move past the first or last slide are dropped.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
pub mod geometry;
pub mod gesture;
pub mod host;
pub mod notify;
mod slider;

pub use config::SliderConfig;
pub use geometry::Transition;
pub use host::{SlideContainer, SlideRenderer, StyleClass};
pub use notify::{Notification, NotificationKind, Notifications, SubscriptionId};
pub use slider::{InvalidState, Slider, SliderState};
