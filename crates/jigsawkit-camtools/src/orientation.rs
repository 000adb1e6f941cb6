//! Grid orientation from the picture's aspect ratio.
//!
//! A difficulty table hands out a grid as "major x minor" piece counts. Wide
//! pictures put the major count across, tall ones put it down.

use serde::{Deserialize, Serialize};

/// Aspect ratio cutoffs (width / height) for choosing the grid orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectThresholds {
    /// Ratios above this are treated as landscape.
    pub landscape: f64,
    /// Ratios below this are treated as portrait.
    pub portrait: f64,
}

impl Default for AspectThresholds {
    fn default() -> Self {
        Self {
            landscape: 1.3,
            portrait: 0.77,
        }
    }
}

/// Orientation chosen by [`orient_grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
    Square,
}

impl AspectThresholds {
    pub fn classify(&self, aspect: f64) -> Orientation {
        if aspect > self.landscape {
            Orientation::Landscape
        } else if aspect < self.portrait {
            Orientation::Portrait
        } else {
            Orientation::Square
        }
    }
}

/// Return `(cols, rows)` for a `major x minor` grid on a picture with the
/// given aspect ratio. Near-square pictures keep the order as given.
pub fn orient_grid(
    major: u32,
    minor: u32,
    aspect: f64,
    thresholds: &AspectThresholds,
) -> (u32, u32) {
    let (large, small) = (major.max(minor), major.min(minor));
    match thresholds.classify(aspect) {
        Orientation::Landscape => (large, small),
        Orientation::Portrait => (small, large),
        Orientation::Square => (major, minor),
    }
}
