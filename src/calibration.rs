/// Applying a calibration vector through the system color matrix tool.
use crate::color::Rgb;
use crate::error::Error;

use std::process::Command;

pub const DEFAULT_APPLY_COMMAND: &str = "mat4";

pub trait CalibrationApplier {
    fn apply_color_matrix(&mut self, color: Rgb) -> Result<(), Error>;
}

/// Runs `<command> "<red> <green> <blue>"`.
#[derive(Debug)]
pub struct CommandApplier {
    command: String,
}

impl CommandApplier {
    pub fn new(command: impl Into<String>) -> Self {
        CommandApplier {
            command: command.into(),
        }
    }
}

impl Default for CommandApplier {
    fn default() -> Self {
        Self::new(DEFAULT_APPLY_COMMAND)
    }
}

impl CalibrationApplier for CommandApplier {
    fn apply_color_matrix(&mut self, color: Rgb) -> Result<(), Error> {
        let failure = |reason: String| Error::ApplyFailure {
            command: format!("{0} '{color}'", self.command),
            reason,
        };

        let status = Command::new(&self.command)
            .arg(color.to_string())
            .status()
            .map_err(|e| failure(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(failure(format!("exited with {status}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_command_is_apply_failure() {
        let mut applier = CommandApplier::new("/nonexistent/refresh-color-mat4");
        let err = applier.apply_color_matrix(Rgb::new(255, 250, 240)).unwrap_err();
        assert!(
            matches!(&err, Error::ApplyFailure { command, .. } if command == "/nonexistent/refresh-color-mat4 '255 250 240'"),
            "{err:?}"
        );
    }

    #[cfg(unix)]
    #[test]
    fn exit_status_is_checked() {
        assert!(CommandApplier::new("true").apply_color_matrix(Rgb::default()).is_ok());
        assert!(matches!(
            CommandApplier::new("false").apply_color_matrix(Rgb::default()),
            Err(Error::ApplyFailure { .. })
        ));
    }
}
