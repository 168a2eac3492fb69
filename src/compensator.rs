/// Polling step: sample screen brightness and apply the matching calibration color.
use crate::calibration::CalibrationApplier;
use crate::color::Rgb;
use crate::color_curve::ColorCurve;
use crate::error::Error;
use crate::settings::{SCREEN_BRIGHTNESS, SettingReader};

use log::{debug, info, warn};

/// Upper bound of the raw `screen_brightness` setting.
pub const MAX_SCREEN_BRIGHTNESS: i32 = 255;

/// Convert a raw 0..=255 brightness to a rounded percentage.
pub fn brightness_percent(brightness: i32) -> u32 {
    (brightness.clamp(0, MAX_SCREEN_BRIGHTNESS) as f64 / MAX_SCREEN_BRIGHTNESS as f64 * 100.0)
        .round() as u32
}

#[derive(Debug)]
pub struct Compensator {
    curve: ColorCurve,
    last_brightness: Option<i32>,
}

impl Compensator {
    pub fn new(curve: ColorCurve) -> Self {
        Compensator {
            curve,
            last_brightness: None,
        }
    }

    /// Read the current brightness and apply a new color if it changed since the last call.
    ///
    /// Returns the applied color, or `None` if brightness was unchanged. A failed read is
    /// returned as an error; a failed apply is only logged.
    pub fn update<R, A>(&mut self, reader: &mut R, applier: &mut A) -> Result<Option<Rgb>, Error>
    where
        R: SettingReader,
        A: CalibrationApplier,
    {
        let raw = reader.read_int_setting(SCREEN_BRIGHTNESS)?;
        let brightness = if (0..=MAX_SCREEN_BRIGHTNESS).contains(&raw) {
            raw
        } else {
            warn!("Brightness value {raw} out of range, using {MAX_SCREEN_BRIGHTNESS}");
            MAX_SCREEN_BRIGHTNESS
        };

        if self.last_brightness == Some(brightness) {
            debug!("brightness unchanged at {brightness}");
            return Ok(None);
        }

        let percent = brightness_percent(brightness);
        let color = self.curve.color_for_brightness(percent);
        info!("brightness={brightness} ({percent}%), color={color}");

        if let Err(err) = applier.apply_color_matrix(color) {
            warn!("{err}");
        }

        self.last_brightness = Some(brightness);
        Ok(Some(color))
    }
}
