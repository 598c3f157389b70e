// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host collaborators: the slide container and the renderer.
//!
//! The slider never touches a scene graph or a DOM directly. It reads slides
//! through a [`SlideContainer`] and requests visual effects through a
//! [`SlideRenderer`]. Both are implemented by the host toolkit.

use alloc::vec::Vec;
use core::fmt;

/// Read-only access to the ordered slides managed by a slider.
///
/// The slide type is whatever handle the host uses for an element: a node id,
/// a widget key, or an element reference.
pub trait SlideContainer {
    /// Handle for one slide.
    type Slide;

    /// Returns all slides in display order.
    fn slides(&self) -> &[Self::Slide];

    /// Returns the number of slides.
    fn slide_count(&self) -> usize {
        self.slides().len()
    }

    /// Returns the slide at `index`, if any.
    fn slide_at(&self, index: usize) -> Option<&Self::Slide> {
        self.slides().get(index)
    }
}

impl<T> SlideContainer for Vec<T> {
    type Slide = T;

    fn slides(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> SlideContainer for [T; N] {
    type Slide = T;

    fn slides(&self) -> &[T] {
        self
    }
}

impl<T> SlideContainer for &[T] {
    type Slide = T;

    fn slides(&self) -> &[T] {
        self
    }
}

/// Visual classes the slider toggles on the track and on slides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StyleClass {
    /// Set on the track while a gesture is in progress.
    Touch,
    /// Set on the active slide once it has settled.
    InView,
    /// Set on every other slide once the active slide has settled.
    NotInView,
}

impl StyleClass {
    /// Returns the class name as used in stylesheets.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Touch => "touch",
            Self::InView => "in-view",
            Self::NotInView => "not-in-view",
        }
    }
}

impl fmt::Display for StyleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Applies the visual effects requested by a slider.
///
/// All methods are fire-and-forget. Offsets and widths are in the same pixel
/// space as the gesture samples.
pub trait SlideRenderer<S> {
    /// Sets the display width of one slide.
    fn set_slide_width(&mut self, slide: &S, width: f64);

    /// Translates the whole track horizontally by `offset` pixels.
    fn translate_track(&mut self, offset: f64);

    /// Adds (`enabled == true`) or removes a class on the track.
    fn set_track_class(&mut self, class: StyleClass, enabled: bool);

    /// Adds (`enabled == true`) or removes a class on one slide.
    fn set_slide_class(&mut self, slide: &S, class: StyleClass, enabled: bool);
}

impl<S, R: SlideRenderer<S> + ?Sized> SlideRenderer<S> for &mut R {
    fn set_slide_width(&mut self, slide: &S, width: f64) {
        (**self).set_slide_width(slide, width);
    }

    fn translate_track(&mut self, offset: f64) {
        (**self).translate_track(offset);
    }

    fn set_track_class(&mut self, class: StyleClass, enabled: bool) {
        (**self).set_track_class(class, enabled);
    }

    fn set_slide_class(&mut self, slide: &S, class: StyleClass, enabled: bool) {
        (**self).set_slide_class(slide, class, enabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn containers_expose_slides_in_order() {
        let v = vec!['a', 'b', 'c'];
        assert_eq!(v.slide_count(), 3);
        assert_eq!(v.slide_at(1), Some(&'b'));
        assert_eq!(v.slide_at(3), None);

        let arr = [10_u32, 20];
        assert_eq!(arr.slide_count(), 2);

        let slice: &[u8] = &[];
        assert_eq!(slice.slide_count(), 0);
        assert_eq!(slice.slide_at(0), None);
    }

    #[test]
    fn class_names() {
        assert_eq!(StyleClass::Touch.name(), "touch");
        assert_eq!(StyleClass::InView.name(), "in-view");
        assert_eq!(StyleClass::NotInView.name(), "not-in-view");
    }
}
