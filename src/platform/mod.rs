// Platform-specific code module

pub mod sound;

// Re-exports for cleaner imports
pub use sound::{default_sink, sound_command, CommandSink};
