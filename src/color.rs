/// RGB calibration vector handed to the color matrix tool.
use serde::Deserialize;
use std::fmt;

/// Channels are not clamped, calibration values can exceed 255.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
pub struct Rgb {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl Rgb {
    pub const fn new(red: i32, green: i32, blue: i32) -> Self {
        Rgb { red, green, blue }
    }

    /// Move each channel `fraction` of the way towards `other`.
    ///
    /// Results are rounded half away from zero, so 104.5 becomes 105.
    pub fn lerp(self, other: Rgb, fraction: f64) -> Rgb {
        let channel = |from: i32, to: i32| {
            (from as f64 + (to as f64 - from as f64) * fraction).round() as i32
        };

        Rgb::new(
            channel(self.red, other.red),
            channel(self.green, other.green),
            channel(self.blue, other.blue),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.red, self.green, self.blue)
    }
}
