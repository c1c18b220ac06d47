// Command handlers module
pub mod config;
pub mod legend;
pub mod version;
pub mod watch;

// Re-exports for cleaner imports
pub use config::execute as config;
pub use legend::execute as legend;
pub use version::execute as version;
pub use watch::execute as watch;
