// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless carousel.
//!
//! Drive a three-slide carousel with scripted pointer gestures and a resize,
//! printing every renderer request and notification.
//!
//! Run:
//! - `cargo run -p understory_demos --bin headless_carousel`
//! - `RUST_LOG=understory_carousel=trace cargo run -p understory_demos --bin headless_carousel`

use kurbo::Point;
use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_carousel::{
    NotificationKind, Notifications, SlideRenderer, Slider, SliderConfig, StyleClass,
};

/// Prints renderer requests the way a DOM adapter would apply them.
struct ConsoleRenderer;

impl SlideRenderer<&'static str> for ConsoleRenderer {
    fn set_slide_width(&mut self, slide: &&'static str, width: f64) {
        println!("  #{slide} {{ width: {width}px }}");
    }

    fn translate_track(&mut self, offset: f64) {
        println!("  .track {{ transform: translateX({offset}px) }}");
    }

    fn set_track_class(&mut self, class: StyleClass, enabled: bool) {
        let op = if enabled { "add" } else { "remove" };
        println!("  .track classList.{op}(\"{class}\")");
    }

    fn set_slide_class(&mut self, slide: &&'static str, class: StyleClass, enabled: bool) {
        if enabled {
            println!("  #{slide} classList.add(\"{class}\")");
        }
    }
}

/// One scripted pointer interaction.
enum Step {
    Press(f64),
    Move(f64),
    Release,
    Resize(f64),
    Wait(u64),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("understory_carousel=debug,info")),
        )
        .init();

    let mut notifications = Notifications::<&'static str>::new();
    for kind in [
        NotificationKind::Init,
        NotificationKind::Change,
        NotificationKind::Touch,
    ] {
        notifications.subscribe(kind, move |n| {
            println!("<- {} index={} element={}", n.kind(), n.index(), n.element());
        });
    }

    let config = SliderConfig::new(0.33);
    let slides = vec!["intro", "features", "pricing"];
    let mut slider =
        match Slider::with_notifications(slides, ConsoleRenderer, 300.0, config, notifications) {
            Ok(slider) => slider,
            Err(err) => {
                eprintln!("cannot build carousel: {err}");
                return;
            }
        };

    let mut now = 0;
    let script = [
        // A short flick that snaps back.
        Step::Press(100.0),
        Step::Move(70.0),
        Step::Move(40.0),
        Step::Release,
        Step::Wait(400),
        // A long swipe that advances.
        Step::Press(250.0),
        Step::Move(180.0),
        Step::Move(90.0),
        Step::Release,
        // The viewport grows before the settle pass fires.
        Step::Resize(420.0),
        Step::Wait(400),
        // Swipe right back to the start.
        Step::Press(50.0),
        Step::Move(260.0),
        Step::Release,
        Step::Wait(400),
    ];

    for step in script {
        match step {
            Step::Press(x) => {
                println!("press x={x}");
                slider.begin_gesture(Point::new(x, 0.0));
            }
            Step::Move(x) => {
                println!("move x={x}");
                slider.update_gesture(Point::new(x, 0.0));
            }
            Step::Release => {
                println!("release");
                slider.end_gesture();
            }
            Step::Resize(width) => {
                println!("resize width={width}");
                slider.resize(width);
            }
            Step::Wait(ms) => {
                now += ms;
                println!("wait {ms}ms");
                slider.advance_to(now);
            }
        }
    }

    info!(active = slider.active_index(), "script finished");
}
