// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction failures and collaborator plumbing.

mod common;

use common::Recorder;
use understory_carousel::{InvalidState, Slider, SliderConfig};

#[test]
fn empty_container_is_invalid() {
    let err = Slider::new(
        Vec::<&'static str>::new(),
        Recorder::default(),
        300.0,
        SliderConfig::new(0.33),
    )
    .unwrap_err();

    assert_eq!(err, InvalidState::Empty);
    assert_eq!(
        err.to_string(),
        "cannot build a slider over a container with no slides"
    );
}

#[test]
fn out_of_range_initial_index_is_invalid() {
    let err = Slider::new(
        vec!["only"],
        Recorder::default(),
        300.0,
        SliderConfig::new(0.33).with_initial_index(1),
    )
    .unwrap_err();

    assert_eq!(
        err,
        InvalidState::InitialIndexOutOfRange {
            index: 1,
            slide_count: 1
        }
    );
}

#[test]
fn borrowed_collaborators_work() {
    let slides: &[&'static str] = &["x", "y"];
    let mut recorder = Recorder::default();
    {
        let mut slider =
            Slider::new(slides, &mut recorder, 100.0, SliderConfig::new(0.5)).unwrap();
        assert!(slider.slide_to(1));
    }
    assert_eq!(recorder.last_translation(), Some(-100.0));
}

#[test]
fn into_parts_returns_collaborators() {
    let slider = Slider::new(
        vec!["p", "q"],
        Recorder::default(),
        250.0,
        SliderConfig::new(0.2),
    )
    .unwrap();

    let (container, renderer, notifications) = slider.into_parts();
    assert_eq!(container, vec!["p", "q"]);
    assert_eq!(renderer.in_view(), vec!["p"]);
    assert!(notifications.is_empty());
}
