// Platform-specific alert sounds

use std::process::{Command, Stdio};

use crate::core::alerts::AlertSink;
use crate::core::classifier::AlertLevel;
use crate::error::{Result, ShakeError};

/// Plays alerts by running the host's stock audio player.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandSink;

impl AlertSink for CommandSink {
    fn play(&self, level: AlertLevel) -> Result<()> {
        let Some(mut cmd) = sound_command(level) else {
            return Ok(());
        };

        let program = cmd.get_program().to_string_lossy().to_string();
        let status = cmd
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| ShakeError::sound_playback(format!("{}: {}", program, e)))?;

        if !status.success() {
            return Err(ShakeError::sound_playback(format!(
                "{} exited with {}",
                program, status
            )));
        }

        Ok(())
    }
}

/// Command for `level`, or `None` when that level stays silent.
#[cfg(target_os = "linux")]
pub fn sound_command(level: AlertLevel) -> Option<Command> {
    let file = match level {
        AlertLevel::High => "/usr/share/sounds/freedesktop/stereo/complete.oga",
        AlertLevel::Medium => "/usr/share/sounds/freedesktop/stereo/message.oga",
        AlertLevel::Low => return None,
    };
    let mut cmd = Command::new("paplay");
    cmd.arg(file);
    Some(cmd)
}

#[cfg(target_os = "macos")]
pub fn sound_command(level: AlertLevel) -> Option<Command> {
    let file = match level {
        AlertLevel::High => "/System/Library/Sounds/Hero.aiff",
        AlertLevel::Medium => "/System/Library/Sounds/Submarine.aiff",
        AlertLevel::Low => return None,
    };
    let mut cmd = Command::new("afplay");
    cmd.arg(file);
    Some(cmd)
}

#[cfg(windows)]
pub fn sound_command(level: AlertLevel) -> Option<Command> {
    match level {
        AlertLevel::High | AlertLevel::Medium => {
            // BEL through the console
            let mut cmd = Command::new("cmd");
            cmd.args(["/c", "echo", "\x07"]);
            Some(cmd)
        }
        AlertLevel::Low => None,
    }
}

#[cfg(not(any(target_os = "linux", target_os = "macos", windows)))]
pub fn sound_command(_level: AlertLevel) -> Option<Command> {
    None
}

/// Pick the alert sink for this host.
pub fn default_sink(muted: bool) -> Box<dyn AlertSink> {
    if muted {
        Box::new(crate::core::alerts::SilentSink)
    } else {
        Box::new(CommandSink)
    }
}
