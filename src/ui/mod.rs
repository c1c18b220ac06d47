// UI and formatting module

pub mod formatters;
pub mod legend;
pub mod prompts;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_displacement, format_reading, format_timestamp};
pub use legend::full_legend;
pub use prompts::{clear_screen, dimmed, redraw, wait_for_enter};
