/// Maps a screen brightness percentage to a calibration color, piece-wise linearly.
use crate::color::Rgb;
use crate::error::Error;

use serde::Deserialize;

/// A configured (brightness percentage, color) anchor.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct Breakpoint {
    pub brightness: u32,
    #[serde(flatten)]
    pub color: Rgb,
}

impl Breakpoint {
    #[allow(dead_code)]
    pub const fn new(brightness: u32, color: Rgb) -> Self {
        Breakpoint { brightness, color }
    }
}

#[derive(Debug, Clone)]
pub struct ColorCurve {
    breakpoints: Vec<Breakpoint>,
}

impl ColorCurve {
    /// Build a curve from breakpoints in any order.
    ///
    /// The sort is stable, so breakpoints sharing a brightness keep their file order.
    pub fn from_breakpoints(mut breakpoints: Vec<Breakpoint>) -> Result<Self, Error> {
        if breakpoints.is_empty() {
            return Err(Error::MissingBrightnessLevels);
        }
        breakpoints.sort_by_key(|b| b.brightness);

        Ok(ColorCurve { breakpoints })
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    /// Color to apply at `percent` brightness.
    pub fn color_for_brightness(&self, percent: u32) -> Rgb {
        match self.breakpoints.iter().position(|b| b.brightness >= percent) {
            // above every breakpoint: hold the highest one
            // the curve is non-empty by construction
            None => self.breakpoints[self.breakpoints.len() - 1].color,
            // exact match, first one wins among duplicates
            Some(i) if self.breakpoints[i].brightness == percent => self.breakpoints[i].color,
            // below every breakpoint: hold the lowest one
            Some(0) => self.breakpoints[0].color,
            Some(i) => interpolate(&self.breakpoints[i - 1], &self.breakpoints[i], percent),
        }
    }
}

fn interpolate(lower: &Breakpoint, upper: &Breakpoint, percent: u32) -> Rgb {
    if upper.brightness == lower.brightness {
        return lower.color;
    }

    let fraction = (percent as f64 - lower.brightness as f64)
        / (upper.brightness as f64 - lower.brightness as f64);
    lower.color.lerp(upper.color, fraction)
}
