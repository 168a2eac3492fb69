/// Reading integer values from the Android system settings store.
use crate::error::Error;

use std::process::Command;

pub const PEAK_REFRESH_RATE: &str = "peak_refresh_rate";
pub const SCREEN_BRIGHTNESS: &str = "screen_brightness";

pub trait SettingReader {
    fn read_int_setting(&mut self, name: &str) -> Result<i32, Error>;
}

/// Queries `settings get system <name>`.
#[derive(Debug, Default)]
pub struct SystemSettings;

impl SettingReader for SystemSettings {
    fn read_int_setting(&mut self, name: &str) -> Result<i32, Error> {
        let output = Command::new("settings")
            .args(["get", "system", name])
            .output()
            .map_err(|e| Error::SettingUnavailable {
                name: name.to_string(),
                reason: format!("failed to execute `settings`: {e}"),
            })?;

        if !output.status.success() {
            return Err(Error::SettingUnavailable {
                name: name.to_string(),
                reason: format!(
                    "`settings get` exited with {0}: {1}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        parse_setting(name, &String::from_utf8_lossy(&output.stdout))
    }
}

/// Parse the printed value of a setting.
///
/// Decimal values such as `120.0` are rounded to the nearest integer.
pub fn parse_setting(name: &str, raw: &str) -> Result<i32, Error> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(Error::SettingUnavailable {
            name: name.to_string(),
            reason: "no output".to_string(),
        });
    }

    if let Ok(v) = value.parse::<i32>() {
        return Ok(v);
    }

    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= i32::MIN as f64 && v <= i32::MAX as f64 => {
            Ok(v.round() as i32)
        }
        _ => Err(Error::SettingUnparsable {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_values() {
        assert_eq!(128, parse_setting(SCREEN_BRIGHTNESS, "128\n").unwrap());
        assert_eq!(0, parse_setting(SCREEN_BRIGHTNESS, "  0 ").unwrap());
        assert_eq!(-1, parse_setting(SCREEN_BRIGHTNESS, "-1").unwrap());
    }

    #[test]
    fn decimal_values() {
        assert_eq!(120, parse_setting(PEAK_REFRESH_RATE, "120.0\n").unwrap());
        assert_eq!(60, parse_setting(PEAK_REFRESH_RATE, "59.94").unwrap());
    }

    #[test]
    fn empty_output() {
        let err = parse_setting(SCREEN_BRIGHTNESS, "\n").unwrap_err();
        assert!(matches!(err, Error::SettingUnavailable { name, .. } if name == SCREEN_BRIGHTNESS));
    }

    #[test]
    fn unparsable_output() {
        for raw in ["null", "abc", "12 Hz", "NaN", "1e20"] {
            let err = parse_setting(PEAK_REFRESH_RATE, raw).unwrap_err();
            assert!(
                matches!(&err, Error::SettingUnparsable { value, .. } if value == raw),
                "{raw}: {err:?}"
            );
        }
    }
}
