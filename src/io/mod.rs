/// Command-line interface and batch processing
pub mod cli;
/// Layout constants and defaults
pub mod configuration;
/// Image file discovery
pub mod discovery;
/// Error types
pub mod error;
/// Logger initialization
pub mod logging;
/// Placement plan export
pub mod plan;
/// Layout preview rendering
pub mod preview;
/// Progress display
pub mod progress;
/// Settings file handling
pub mod settings;
