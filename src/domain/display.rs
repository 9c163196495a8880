// SPDX-License-Identifier: MPL-2.0
//! Display-side value types: screen orientation and video aspect mode.

/// Orientation the device chrome is locked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// How the video frame is fitted into the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AspectMode {
    /// Whole frame visible, letterboxed.
    #[default]
    Fit,
    /// Viewport covered, frame cropped.
    Fill,
    /// Frame stretched to the viewport.
    Stretch,
}

impl AspectMode {
    /// Returns the next mode in the cycle Fit → Fill → Stretch → Fit.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Fit => Self::Fill,
            Self::Fill => Self::Stretch,
            Self::Stretch => Self::Fit,
        }
    }

    /// Text shown in the aspect label overlay.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Fit => "Fit",
            Self::Fill => "Fill",
            Self::Stretch => "Stretch",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_cycle_returns_to_start() {
        let start = AspectMode::default();
        assert_eq!(start.next().next().next(), start);
        assert_eq!(start.next(), AspectMode::Fill);
    }

    #[test]
    fn labels_are_distinct() {
        assert_ne!(AspectMode::Fit.label(), AspectMode::Fill.label());
        assert_eq!(AspectMode::Stretch.label(), "Stretch");
    }
}
