/// Corpus endpoint response building
pub mod api;
/// Command-line parsing and command execution
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types and path context
pub mod error;
/// Batch generation progress display
pub mod progress;
/// Plain-text puzzle rendering
pub mod render;
