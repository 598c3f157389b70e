// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for slider integration tests.

#![allow(
    missing_docs,
    reason = "Integration-test helper module; not part of the public API."
)]
#![allow(
    dead_code,
    reason = "Each integration test binary uses a different subset of the helpers."
)]

use std::cell::RefCell;
use std::rc::Rc;

use understory_carousel::{
    Notification, NotificationKind, Notifications, SlideRenderer, Slider, SliderConfig, StyleClass,
};

/// One request made by the slider to its renderer.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Op {
    Width(&'static str, f64),
    Translate(f64),
    Track(StyleClass, bool),
    Slide(&'static str, StyleClass, bool),
}

#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub(crate) ops: Vec<Op>,
}

impl Recorder {
    pub(crate) fn last_translation(&self) -> Option<f64> {
        self.ops.iter().rev().find_map(|op| match op {
            Op::Translate(x) => Some(*x),
            _ => None,
        })
    }

    pub(crate) fn translations(&self) -> Vec<f64> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Translate(x) => Some(*x),
                _ => None,
            })
            .collect()
    }

    /// Slides most recently marked `in-view`, in request order.
    pub(crate) fn in_view(&self) -> Vec<&'static str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Slide(slide, StyleClass::InView, true) => Some(*slide),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn clear(&mut self) {
        self.ops.clear();
    }
}

impl SlideRenderer<&'static str> for Recorder {
    fn set_slide_width(&mut self, slide: &&'static str, width: f64) {
        self.ops.push(Op::Width(*slide, width));
    }

    fn translate_track(&mut self, offset: f64) {
        self.ops.push(Op::Translate(offset));
    }

    fn set_track_class(&mut self, class: StyleClass, enabled: bool) {
        self.ops.push(Op::Track(class, enabled));
    }

    fn set_slide_class(&mut self, slide: &&'static str, class: StyleClass, enabled: bool) {
        self.ops.push(Op::Slide(*slide, class, enabled));
    }
}

/// A notification copied out of the registry.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Seen {
    pub(crate) kind: NotificationKind,
    pub(crate) index: usize,
    pub(crate) element: &'static str,
    pub(crate) slides: usize,
}

pub(crate) type Log = Rc<RefCell<Vec<Seen>>>;

pub(crate) const SLIDES: [&str; 3] = ["a", "b", "c"];

/// Three 300px slides with a 0.33 tolerance, logging every notification.
pub(crate) fn three_slides() -> (Slider<Vec<&'static str>, Recorder>, Log) {
    three_slides_with(SliderConfig::new(0.33))
}

pub(crate) fn three_slides_with(
    config: SliderConfig,
) -> (Slider<Vec<&'static str>, Recorder>, Log) {
    let log: Log = Rc::default();
    let mut notifications = Notifications::new();
    for kind in [
        NotificationKind::Init,
        NotificationKind::Change,
        NotificationKind::Touch,
    ] {
        let log = log.clone();
        notifications.subscribe(kind, move |n: &Notification<'_, &'static str>| {
            let slides = match n {
                Notification::Touch { slides, .. } => slides.len(),
                _ => 0,
            };
            log.borrow_mut().push(Seen {
                kind: n.kind(),
                index: n.index(),
                element: *n.element(),
                slides,
            });
        });
    }
    let slider = Slider::with_notifications(
        SLIDES.to_vec(),
        Recorder::default(),
        300.0,
        config,
        notifications,
    )
    .unwrap();
    (slider, log)
}

pub(crate) fn count(log: &Log, kind: NotificationKind) -> usize {
    log.borrow().iter().filter(|s| s.kind == kind).count()
}
