// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tunables for a [`Slider`](crate::Slider).
///
/// There is no default tolerance: carousels differ in how eager they should
/// be to commit a page change, so callers always choose one.
///
/// ```
/// use understory_carousel::SliderConfig;
///
/// let config = SliderConfig::new(0.15)
///     .with_initial_index(1)
///     .with_transition_ms(250);
/// assert_eq!(config.settle_delay(), 300);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SliderConfig {
    /// Fraction of the track width a drag must cover to commit, in `(0, 1]`.
    pub tolerance_fraction: f64,
    /// Index that is active right after construction.
    pub initial_index: usize,
    /// Duration of the host's track transition, in clock units (usually milliseconds).
    pub transition_ms: u64,
    /// Extra time after the transition before in-view styling is reapplied.
    pub settle_buffer_ms: u64,
}

impl SliderConfig {
    /// Default transition duration.
    pub const DEFAULT_TRANSITION_MS: u64 = 300;
    /// Default settle buffer.
    pub const DEFAULT_SETTLE_BUFFER_MS: u64 = 50;

    /// Creates a configuration with the given tolerance and default timings.
    #[must_use]
    pub const fn new(tolerance_fraction: f64) -> Self {
        Self {
            tolerance_fraction,
            initial_index: 0,
            transition_ms: Self::DEFAULT_TRANSITION_MS,
            settle_buffer_ms: Self::DEFAULT_SETTLE_BUFFER_MS,
        }
    }

    /// Sets the index that is active after construction.
    #[must_use]
    pub const fn with_initial_index(mut self, index: usize) -> Self {
        self.initial_index = index;
        self
    }

    /// Sets the transition duration.
    #[must_use]
    pub const fn with_transition_ms(mut self, ms: u64) -> Self {
        self.transition_ms = ms;
        self
    }

    /// Sets the settle buffer.
    #[must_use]
    pub const fn with_settle_buffer_ms(mut self, ms: u64) -> Self {
        self.settle_buffer_ms = ms;
        self
    }

    /// Delay between the end of a gesture and the styling pass.
    #[must_use]
    pub const fn settle_delay(&self) -> u64 {
        self.transition_ms.saturating_add(self.settle_buffer_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = SliderConfig::new(0.33);
        assert_eq!(c.tolerance_fraction, 0.33);
        assert_eq!(c.initial_index, 0);
        assert_eq!(c.settle_delay(), 350);
    }

    #[test]
    fn settle_delay_saturates() {
        let c = SliderConfig::new(0.33)
            .with_transition_ms(u64::MAX)
            .with_settle_buffer_ms(1);
        assert_eq!(c.settle_delay(), u64::MAX);
    }
}
